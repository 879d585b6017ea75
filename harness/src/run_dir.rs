//! Run directory persistence: write/read an [`EncodedReport`] to/from disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json   -- canonical JSON report
//!   run_digest.txt    -- ASCII digest string ("sha256:...")
//! ```
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Report not canonical JSON → error
//! - Stored digest differs from the recomputed one → error

use std::path::Path;

use crate::canon::canonical_json_bytes;
use crate::report::EncodedReport;

pub const REPORT_FILENAME: &str = "run_report.json";
pub const DIGEST_FILENAME: &str = "run_digest.txt";

/// Error writing or reading a run directory.
#[derive(Debug, thiserror::Error)]
pub enum RunDirError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing file: {filename}")]
    MissingFile { filename: String },
    #[error("report is not canonical JSON: {detail}")]
    NonCanonicalReport { detail: String },
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

/// Write `report` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`RunDirError::Io`] on any filesystem failure.
pub fn write_run_dir(report: &EncodedReport, dir: &Path) -> Result<(), RunDirError> {
    std::fs::create_dir_all(dir).map_err(|source| RunDirError::Io {
        path: dir.display().to_string(),
        source,
    })?;
    write_atomic(dir, REPORT_FILENAME, &report.bytes)?;
    write_atomic(dir, DIGEST_FILENAME, report.digest.as_str().as_bytes())
}

/// Read a run directory and verify its digest.
///
/// # Errors
///
/// Returns [`RunDirError`] on a missing file, a non-canonical report, or a
/// digest mismatch.
pub fn read_run_dir(dir: &Path) -> Result<EncodedReport, RunDirError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| RunDirError::NonCanonicalReport {
            detail: e.to_string(),
        })?;
    let recanon = canonical_json_bytes(&value).map_err(|e| RunDirError::NonCanonicalReport {
        detail: e.to_string(),
    })?;
    if recanon != bytes {
        return Err(RunDirError::NonCanonicalReport {
            detail: "bytes differ from their canonical form".into(),
        });
    }

    let report = EncodedReport::from_bytes(bytes);
    let stored = String::from_utf8_lossy(&stored).trim().to_string();
    if report.digest.as_str() != stored {
        return Err(RunDirError::DigestMismatch {
            stored,
            recomputed: report.digest.as_str().to_string(),
        });
    }
    Ok(report)
}

/// Write via temp file + rename.
fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<(), RunDirError> {
    let path = dir.join(filename);
    let temp_path = dir.join(format!(".tmp_{filename}"));
    std::fs::write(&temp_path, content).map_err(|source| RunDirError::Io {
        path: temp_path.display().to_string(),
        source,
    })?;
    std::fs::rename(&temp_path, &path).map_err(|source| RunDirError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, RunDirError> {
    let path = dir.join(filename);
    std::fs::read(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            RunDirError::MissingFile {
                filename: filename.to_string(),
            }
        } else {
            RunDirError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })
}
