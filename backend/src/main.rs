//! Matrixops CLI - CSV matrix operations service
//!
//! # Main Commands
//!
//! ```bash
//! matrixops serve                    # Start HTTP server (port 8088)
//! matrixops compute sum input.csv    # Run one operation on a local file
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! matrixops parse input.csv          # Just parse CSV to a JSON grid
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use matrixops::{parser, pipeline, Config, MatrixOp};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "matrixops")]
#[command(about = "Apply echo/invert/flatten/sum/multiply to CSV matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides PORT from the environment)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Parse a CSV file and print the raw grid as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,
    },

    /// Run one operation on a local CSV file
    Compute {
        /// Operation to apply
        #[arg(value_enum)]
        operation: OpArg,

        /// Input CSV file
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpArg {
    Echo,
    Invert,
    Flatten,
    Sum,
    Multiply,
}

impl From<OpArg> for MatrixOp {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Echo => MatrixOp::Echo,
            OpArg::Invert => MatrixOp::Invert,
            OpArg::Flatten => MatrixOp::Flatten,
            OpArg::Sum => MatrixOp::Sum,
            OpArg::Multiply => MatrixOp::Multiply,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Parse { input } => cmd_parse(&input),
        Commands::Compute { operation, input } => cmd_compute(operation.into(), &input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    matrixops::server::start_server(config).await
}

fn cmd_parse(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let grid = parser::parse_matrix_file(input)?;
    println!("{}", serde_json::to_string_pretty(&grid)?);
    Ok(())
}

fn cmd_compute(op: MatrixOp, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let output = pipeline::run_operation_sync(op, input)?;
    println!("{}", output);
    Ok(())
}
