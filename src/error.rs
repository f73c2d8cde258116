use std::io;
use thiserror::Error;

/// A target file could not be opened or read.
///
/// Covers missing files, permission errors and invalid UTF-8 alike. The
/// `Display` form is the bare OS description so callers can prefix it the
/// way their report line needs.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct FileAccessError {
    pub filename: String,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(filename: impl Into<String>, source: io::Error) -> Self {
        Self {
            filename: filename.into(),
            source,
        }
    }
}

/// Everything that can stop a single file's scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Access(#[from] FileAccessError),
    /// Writing the report itself failed, e.g. a closed stdout pipe.
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}
