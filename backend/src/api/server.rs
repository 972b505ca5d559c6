//! HTTP server for the matrix operations API.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                           |
//! |--------|-------------|---------------------------------------|
//! | GET    | `/health`   | Health check                          |
//! | POST   | `/echo`     | Print the uploaded matrix             |
//! | POST   | `/invert`   | Transpose the uploaded matrix         |
//! | POST   | `/flatten`  | Flatten to one comma-separated line   |
//! | POST   | `/sum`      | Sum of all cells                      |
//! | POST   | `/multiply` | Product of all cells                  |
//! | GET    | `/api/logs` | SSE stream for request logs           |
//!
//! Every operation endpoint takes a multipart form with a single `file`
//! field holding headerless CSV text. The field is spooled to a temporary
//! file whose path is handed to the pipeline; the file is removed when the
//! request ends, on every exit path.

use std::convert::Infallible;
use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, IntoResponse, Json, Response, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::LOG_BROADCASTER;
use super::types::{error_response, ErrorBody};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{MatrixOp, OpOutput};
use crate::pipeline;

/// Shared request state: the startup configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

/// Start the HTTP server on the configured port.
pub async fn start_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(config);

    println!("Matrix operations server listening on http://localhost:{}", config.port);
    println!("  [{}] POST /echo /invert /flatten /sum /multiply", config.env.name());
    println!("        GET  /health, GET /api/logs (SSE)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health))
        .route("/echo", post(echo))
        .route("/invert", post(invert))
        .route("/flatten", post(flatten))
        .route("/sum", post(sum))
        .route("/multiply", post(multiply))
        .route("/api/logs", get(sse_logs))
        .fallback(not_found)
        .layer(cors)
        .with_state(AppState { config })
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "matrixops",
        "version": env!("CARGO_PKG_VERSION"),
        "operations": ["echo", "invert", "flatten", "sum", "multiply"],
    }))
}

async fn echo(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_operation(MatrixOp::Echo, state, multipart).await
}

async fn invert(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_operation(MatrixOp::Invert, state, multipart).await
}

async fn flatten(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_operation(MatrixOp::Flatten, state, multipart).await
}

async fn sum(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_operation(MatrixOp::Sum, state, multipart).await
}

async fn multiply(State(state): State<AppState>, multipart: Multipart) -> Response {
    handle_operation(MatrixOp::Multiply, state, multipart).await
}

async fn handle_operation(op: MatrixOp, state: AppState, multipart: Multipart) -> Response {
    match process_upload(op, multipart).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(err) => error_response(&err, state.config.env),
    }
}

/// Spool the `file` field to a temp file and run the operation on it.
///
/// The temp file guard lives until the pipeline returns, then drops and
/// removes the file, including when the request errors or is cancelled.
async fn process_upload(op: MatrixOp, mut multipart: Multipart) -> ApiResult<OpOutput> {
    let mut upload: Option<tempfile::NamedTempFile> = None;

    // A garbled multipart body counts as a missing upload.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::FileNotFound)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let data = field.bytes().await.map_err(|_| ApiError::FileNotFound)?;

        let mut file = tempfile::NamedTempFile::new()
            .map_err(|e| ApiError::Internal(format!("cannot spool upload: {}", e)))?;
        file.write_all(&data)
            .map_err(|e| ApiError::Internal(format!("cannot spool upload: {}", e)))?;
        upload = Some(file);
    }

    let upload = upload.ok_or(ApiError::FileNotFound)?;
    pipeline::run_operation(op, upload.path()).await
}

/// SSE endpoint streaming request logs.
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// 404 for any unmatched route.
async fn not_found() -> Response {
    let body = ErrorBody {
        code: StatusCode::NOT_FOUND.as_u16(),
        message: "Endpoint Not found".to_string(),
        detail: None,
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
