//! Request orchestration: loader -> validator -> operation.
//!
//! One call handles one uploaded file. Any failure short-circuits with a
//! single typed error; no partial results are ever returned. The only
//! suspension point is the file read; validation and the operations are
//! synchronous and CPU-only.

use std::path::Path;

use crate::api::logs::{log_error, log_info, log_success};
use crate::error::{ApiError, ApiResult, CsvError};
use crate::models::{MatrixOp, OpOutput};
use crate::{ops, parser, validation};

/// Run one operation against an uploaded CSV file.
///
/// The path must point to finished-writing content supplied by the upload
/// layer. Fails with [`ApiError::FilePathNotFound`] if the path is not a
/// readable file; loader and validator errors propagate unchanged.
pub async fn run_operation(op: MatrixOp, path: &Path) -> ApiResult<OpOutput> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => {
            log_error(format!("{}: upload path not readable", op));
            return Err(ApiError::FilePathNotFound);
        }
    }

    let bytes = tokio::fs::read(path).await.map_err(CsvError::Io)?;
    run_on_bytes(op, &bytes)
}

/// Synchronous variant for local files, used by the CLI.
pub fn run_operation_sync(op: MatrixOp, path: &Path) -> ApiResult<OpOutput> {
    if !path.is_file() {
        return Err(ApiError::FilePathNotFound);
    }
    let grid = parser::parse_matrix_file(path)?;
    finish(op, grid)
}

fn run_on_bytes(op: MatrixOp, bytes: &[u8]) -> ApiResult<OpOutput> {
    log_info(format!("{}: parsing uploaded CSV ({} bytes)", op, bytes.len()));
    let grid = parser::parse_matrix_bytes(bytes)?;
    finish(op, grid)
}

fn finish(op: MatrixOp, grid: crate::models::RawGrid) -> ApiResult<OpOutput> {
    let matrix = match validation::validate(grid) {
        Ok(m) => m,
        Err(e) => {
            log_error(format!("{}: rejected upload: {}", op, e));
            return Err(e.into());
        }
    };

    let output = ops::apply(op, &matrix);
    log_success(format!("{}: {}x{} matrix processed", op, matrix.size(), matrix.size()));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use std::io::Write;
    use std::path::PathBuf;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_each_operation_end_to_end() {
        let file = csv_file("1,2\n3,4");

        let cases = [
            (MatrixOp::Echo, OpOutput::Text("1,2\n3,4".into())),
            (MatrixOp::Invert, OpOutput::Text("1,3\n2,4".into())),
            (MatrixOp::Flatten, OpOutput::Text("1,2,3,4".into())),
            (MatrixOp::Sum, OpOutput::Number(10.0)),
            (MatrixOp::Multiply, OpOutput::Number(24.0)),
        ];

        for (op, expected) in cases {
            let output = run_operation(op, file.path()).await.unwrap();
            assert_eq!(output, expected, "operation {}", op);
        }
    }

    #[tokio::test]
    async fn test_missing_path_is_file_path_not_found() {
        let path = PathBuf::from("/tmp/definitely-not-here.csv");
        let err = run_operation(MatrixOp::Echo, &path).await.unwrap_err();
        assert!(matches!(err, ApiError::FilePathNotFound));
    }

    #[tokio::test]
    async fn test_validation_error_propagates_unchanged() {
        let file = csv_file("1,2\n3,4,5");
        let err = run_operation(MatrixOp::Sum, file.path()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidSize)
        ));
        assert_eq!(err.to_string(), "Invalid matrix size");
    }

    #[tokio::test]
    async fn test_invalid_characters_propagate_unchanged() {
        let file = csv_file("1,a\n3,4");
        let err = run_operation(MatrixOp::Flatten, file.path()).await.unwrap_err();
        assert_eq!(err.to_string(), "Matrix contains invalid characters");
    }

    #[tokio::test]
    async fn test_empty_upload_is_invalid_size() {
        let file = csv_file("");
        let err = run_operation(MatrixOp::Echo, file.path()).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::InvalidSize)
        ));
    }

    #[tokio::test]
    async fn test_one_by_one_invert() {
        let file = csv_file("1");
        let output = run_operation(MatrixOp::Invert, file.path()).await.unwrap();
        assert_eq!(output, OpOutput::Text("1".into()));
    }

    #[test]
    fn test_sync_variant_matches_async() {
        let file = csv_file("1,2\n3,4");
        let output = run_operation_sync(MatrixOp::Sum, file.path()).unwrap();
        assert_eq!(output, OpOutput::Number(10.0));

        let err = run_operation_sync(MatrixOp::Sum, Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, ApiError::FilePathNotFound));
    }
}
