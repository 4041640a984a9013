//! Error types for the data-loader crate.
//!
//! Every failure here is fatal for the process: a catalog that cannot be
//! downloaded or parsed means the bot cannot serve requests.

use thiserror::Error;

/// Errors that can occur while fetching and parsing the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading or writing the local copy
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record in the catalog file couldn't be parsed
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The header row lacks one of the columns the catalog needs
    #[error("Missing column {column} in {file}")]
    MissingColumn { file: String, column: String },

    /// The catalog object could not be fetched from the remote store
    #[error("Failed to download s3://{bucket}/{key}: {reason}")]
    DownloadError {
        bucket: String,
        key: String,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
