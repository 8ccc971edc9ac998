//! Library error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by drawer assembly and content attachment
#[derive(Error, Debug)]
pub enum DrawerError {
    /// Content value that is neither markup text nor a structured node
    #[error("invalid content: {reason}")]
    InvalidContent { reason: String },

    /// Configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text could not be parsed
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DrawerError>;
