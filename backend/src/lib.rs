//! # Matrixops - CSV matrix operations web service
//!
//! Matrixops accepts a CSV-encoded square matrix via file upload and applies
//! one of five operations to it: echo, invert (transpose), flatten, sum or
//! multiply.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV Upload │────▶│   Parser    │────▶│  Validator  │────▶│  Operation  │
//! │   (file)    │     │  (RawGrid)  │     │ (SquareMat) │     │ (text/num)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use matrixops::{pipeline, MatrixOp};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let out = pipeline::run_operation(MatrixOp::Sum, Path::new("matrix.csv"))
//!         .await
//!         .unwrap();
//!     println!("{}", out);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (RawGrid, SquareMatrix, MatrixOp, OpOutput)
//! - [`parser`] - CSV loading with encoding detection
//! - [`validation`] - Square/numeric matrix validation
//! - [`ops`] - The five pure operations
//! - [`pipeline`] - Request orchestration
//! - [`config`] - Startup configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Operations
pub mod ops;

// Orchestration
pub mod pipeline;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ApiError, ApiResult, ConfigError, CsvError, CsvResult, ValidationError, ValidationResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{MatrixOp, OpOutput, RawGrid, SquareMatrix};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{Config, Environment, DEFAULT_PORT};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, parse_matrix_bytes, parse_matrix_file};

// =============================================================================
// Re-exports - Validation and operations
// =============================================================================

pub use ops::apply;
pub use validation::validate;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{run_operation, run_operation_sync};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{error_body, error_response, status_for, ErrorBody};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
