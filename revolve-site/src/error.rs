//! Site behavior errors

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a site behavior.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The preference file could not be read or written.
    #[error("failed to access preference store {path}")]
    Io {
        /// Store location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The preference file holds something other than a string map.
    #[error("preference store {path} is not a JSON object of strings")]
    CorruptStore {
        /// Store location.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Preferences could not be serialized.
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
    /// A page URL was not absolute or did not parse.
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result alias for site behaviors.
pub type Result<T> = std::result::Result<T, SiteError>;
