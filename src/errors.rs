use std::io;

use thiserror::Error;

/// Error type for dataset acquisition failures.
///
/// Parsing and projection never fail: malformed rows are skipped and
/// degenerate ranges collapse to midpoint defaults. The one hard failure in
/// this crate is a dataset source whose text cannot be read at all.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset source '{name}' is unavailable: {reason}")]
    SourceUnavailable { name: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
