//! Dataset source interfaces and built-in sources.
//!
//! A source hands over the complete dataset text in one call. The analyzed
//! dataset is static per load, so there is no cursoring, paging, or refresh;
//! reloading means calling [`load_records`] again. Acquisition is also the
//! only fallible step in the crate, everything downstream degrades instead
//! of failing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::VideoRecord;
use crate::errors::DatasetError;
use crate::parse::parse_records;

/// A named provider of raw dataset text.
pub trait DatasetSource {
    /// Stable name used in logs and error reports.
    fn name(&self) -> &str;
    /// Return the full dataset text.
    fn load_text(&self) -> Result<String, DatasetError>;
}

/// Dataset source backed by a UTF-8 text file on disk.
pub struct FileSource {
    name: String,
    path: PathBuf,
}

impl FileSource {
    /// Create a file source. `name` labels the source in logs and errors.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_text(&self) -> Result<String, DatasetError> {
        if !self.path.is_file() {
            return Err(DatasetError::SourceUnavailable {
                name: self.name.clone(),
                reason: format!("no such file: {}", self.path.display()),
            });
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// In-memory dataset source for tests, demos, and embedded data.
pub struct InMemorySource {
    name: String,
    text: String,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt dataset text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl DatasetSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_text(&self) -> Result<String, DatasetError> {
        Ok(self.text.clone())
    }
}

/// Acquire text from `source` and parse it into records.
///
/// Fails only when the source itself is unreachable; malformed content
/// yields however many records survive parsing, possibly none.
pub fn load_records(source: &dyn DatasetSource) -> Result<Vec<VideoRecord>, DatasetError> {
    let text = source.load_text()?;
    let records = parse_records(&text);
    info!(source = source.name(), records = records.len(), "loaded video records");
    Ok(records)
}
