//! CSV loading for uploaded matrices.
//!
//! Uploads have no header row: every line is a matrix row, every
//! comma-separated field a cell. Fields are kept as opaque text; numeric
//! interpretation happens later, in [`crate::validation`] and
//! [`crate::ops`].
//!
//! The whole input is consumed before a grid is returned. A read or parse
//! error anywhere in the stream fails the call and discards rows that were
//! already collected, so the validator never sees a partial grid.

use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::RawGrid;

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to text using the detected encoding.
///
/// Unknown encodings fall back to lossy UTF-8 so that a matrix of plain
/// digits and commas always decodes.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding {
        "utf-8" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "iso-8859-1" => Ok(encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()),
        "windows-1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()),
        _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Parse CSV bytes into a grid of raw cells.
///
/// Comma-delimited, no header row, rows may have differing lengths (shape is
/// the validator's concern, not the loader's). Empty input yields an empty
/// grid.
pub fn parse_matrix_bytes(bytes: &[u8]) -> CsvResult<RawGrid> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: RawGrid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CsvError::Parse(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Read and parse a CSV file into a grid of raw cells.
///
/// The file is read to completion first; the loader never deletes or moves
/// it.
pub fn parse_matrix_file<P: AsRef<Path>>(path: P) -> CsvResult<RawGrid> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_matrix_bytes(&bytes)
}
