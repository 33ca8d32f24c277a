//! Flat-record CSV and plain-text exports.
//!
//! Payload assembly is pure and synchronous; the file save resolves a
//! download directory and writes the payload there, mirroring the browser
//! "download" the field crews are used to. A missing save target (headless
//! environment, no download directory) degrades to a logged no-op rather
//! than an error.

use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::record::Record;
use crate::{GeoFieldError, Result};

/// MIME type recorded for CSV downloads.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// MIME type recorded for plain-text downloads.
pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Environment variable overriding the download directory (used by the
/// headless export binary and by tests).
pub const EXPORT_DIR_ENV: &str = "GEOFIELD_EXPORT_DIR";

/// Build the CSV payload for a record collection.
///
/// The header row is the first record's keys in insertion order; every
/// following row emits those same keys' values, with an empty field where a
/// record lacks a key. Quoting is RFC4180: fields containing the comma
/// delimiter, a double quote or a newline are wrapped in double quotes with
/// internal quotes doubled. Every row, including the last, ends with `\n`.
///
/// An empty collection yields an empty payload: with no first record there
/// is no header to derive.
pub fn csv_payload(records: &[Record]) -> Result<String> {
    let Some(first) = records.first() else {
        return Ok(String::new());
    };

    let headers: Vec<&str> = first.keys().collect();

    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut buffer);
        writer
            .write_record(&headers)
            .map_err(|e| GeoFieldError::Export(format!("Failed to write CSV header: {}", e)))?;

        for record in records {
            let row: Vec<String> = headers
                .iter()
                .map(|key| record.get(key).map(|v| v.to_string()).unwrap_or_default())
                .collect();
            writer
                .write_record(&row)
                .map_err(|e| GeoFieldError::Export(format!("Failed to write CSV row: {}", e)))?;
        }

        writer
            .flush()
            .map_err(|e| GeoFieldError::Export(format!("Failed to flush CSV writer: {}", e)))?;
    } // writer dropped here, releasing the buffer

    String::from_utf8(buffer)
        .map_err(|e| GeoFieldError::Export(format!("CSV payload is not UTF-8: {}", e)))
}

/// Resolve the directory downloads are saved to.
///
/// `GEOFIELD_EXPORT_DIR` wins when set; otherwise the platform download
/// directory. `None` means this environment has nowhere to save to.
pub fn download_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(EXPORT_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
}

/// Write a payload into `dir` under `filename`.
///
/// The MIME type has no on-disk representation; it is carried for logging
/// parity with the download it replaces.
fn save_payload(dir: &Path, payload: &[u8], mime: &str, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, payload)?;
    tracing::info!(
        "Saved download: {:?} ({} bytes, {})",
        path,
        payload.len(),
        mime
    );
    Ok(path)
}

/// Export records as a CSV download into an explicit directory.
pub fn export_csv_to(dir: &Path, records: &[Record], filename: &str) -> Result<PathBuf> {
    let payload = csv_payload(records)?;
    save_payload(dir, payload.as_bytes(), CSV_MIME, filename)
}

/// Export records as a CSV download.
///
/// Returns the saved path, or `None` when no download directory exists or
/// the write fails - both are logged, neither is raised. Per-call scoped:
/// nothing is held between invocations.
pub fn export_csv(records: &[Record], filename: &str) -> Option<PathBuf> {
    let Some(dir) = download_dir() else {
        tracing::warn!("No download directory available; skipping export of {}", filename);
        return None;
    };
    match export_csv_to(&dir, records, filename) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::error!("CSV export of {} failed: {}", filename, e);
            None
        }
    }
}

/// Export plain text as a download into an explicit directory.
pub fn export_text_to(dir: &Path, content: &str, filename: &str) -> Result<PathBuf> {
    save_payload(dir, content.as_bytes(), TEXT_MIME, filename)
}

/// Export plain text as a download. The content is written verbatim.
///
/// Same degradation contract as [`export_csv`].
pub fn export_text(content: &str, filename: &str) -> Option<PathBuf> {
    let Some(dir) = download_dir() else {
        tracing::warn!("No download directory available; skipping export of {}", filename);
        return None;
    };
    match export_text_to(&dir, content, filename) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::error!("Text export of {} failed: {}", filename, e);
            None
        }
    }
}

/// Timestamp suffix for export filenames: `2024-07-15_14-30-00`.
pub fn filename_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("geofield_test_export").join(name);
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_csv_payload_header_and_rows() {
        let records = vec![Record::new().with("a", 1.0).with("b", "x")];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "a,b\n1,x\n");
    }

    #[test]
    fn test_csv_payload_escapes_comma() {
        let records = vec![Record::new().with("note", "has,comma")];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "note\n\"has,comma\"\n");
    }

    #[test]
    fn test_csv_payload_doubles_internal_quotes() {
        let records = vec![Record::new().with("note", "say \"hello\"")];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "note\n\"say \"\"hello\"\"\"\n");
    }

    #[test]
    fn test_csv_payload_quotes_newlines() {
        let records = vec![Record::new().with("log", "line1\nline2")];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "log\n\"line1\nline2\"\n");
    }

    #[test]
    fn test_csv_payload_empty_input_is_empty_not_error() {
        let payload = csv_payload(&[]).unwrap();
        assert_eq!(payload, "");
    }

    #[test]
    fn test_csv_payload_missing_key_yields_empty_field() {
        let records = vec![
            Record::new().with("id", "PT-001").with("alt", 152.0),
            Record::new().with("id", "PT-002"),
        ];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "id,alt\nPT-001,152\nPT-002,\n");
    }

    #[test]
    fn test_csv_payload_uses_first_record_keys_only() {
        let records = vec![
            Record::new().with("id", "PT-001"),
            Record::new().with("id", "PT-002").with("extra", "dropped"),
        ];
        let payload = csv_payload(&records).unwrap();
        assert_eq!(payload, "id\nPT-001\nPT-002\n");
    }

    #[test]
    fn test_export_csv_to_writes_payload_bytes() {
        let dir = scratch_dir("csv");
        let records = vec![Record::new().with("id", "GEO-056").with("weight", 2.5)];

        let path = export_csv_to(&dir, &records, "samples.csv").unwrap();
        assert_eq!(path, dir.join("samples.csv"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, csv_payload(&records).unwrap());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_export_text_to_writes_verbatim() {
        let dir = scratch_dir("text");
        let content = "## Field summary\n\n* two holes collared\n";

        let path = export_text_to(&dir, content, "summary.txt").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_export_csv_to_creates_directory() {
        let dir = scratch_dir("nested").join("deeper");
        let records = vec![Record::new().with("id", "PT-001")];

        let path = export_csv_to(&dir, &records, "points.csv").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn test_filename_timestamp_shape() {
        let ts = filename_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(ts.chars().nth(10) == Some('_'));
    }
}
