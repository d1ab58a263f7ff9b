use std::io;

use thiserror::Error;

/// Reading or writing one of the JSON files the app keeps on the device.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}: not found")]
    NotFound(String),

    #[error("parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn from_io(path: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_string())
        } else {
            StoreError::Io {
                path: path.to_string(),
                source: err,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Transport(#[from] io::Error),

    #[error("invalid response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("WiFi not connected")]
    Offline,

    #[error("metadata: {0}")]
    Metadata(#[source] FetchError),
}
