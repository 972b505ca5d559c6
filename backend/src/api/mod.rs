//! HTTP API module.
//!
//! This module provides the HTTP server, the error-body mapping and the log
//! stream for the matrix operations service.

pub mod logs;
pub mod server;
pub mod types;

pub use server::{router, start_server, AppState};
pub use types::{error_body, error_response, status_for, ErrorBody};
