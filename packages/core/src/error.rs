//! Error types shared by every assetfs backend.

use std::io;

use http::StatusCode;

use crate::path::PathError;

/// Failure to turn a stored payload back into the asset's bytes.
///
/// This is `Clone` so that a record can cache the outcome of its single
/// decode attempt and hand the same error to every later caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {message}")]
    Base64 { message: String },

    #[error("invalid gzip stream: {message}")]
    Gzip { message: String },

    #[error("decoded {actual} bytes but the table declares {declared}")]
    SizeMismatch { declared: u64, actual: u64 },
}

/// Errors returned by [`FileSystem`](crate::FileSystem) implementations and
/// the accessors built on top of them.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The path is not registered.
    #[error("{path}: file does not exist")]
    NotFound { path: String },

    /// The stored payload for the path is corrupt.
    #[error("{path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },

    /// An error from the real filesystem (local mode).
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Path(#[from] PathError),

    /// The asset is not valid UTF-8 text.
    #[error("{path}: asset is not valid UTF-8: {source}")]
    Utf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn not_found(path: impl ToString) -> Self {
        Error::NotFound {
            path: path.to_string(),
        }
    }

    pub fn io(path: impl ToString, source: io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn decode(path: impl ToString, source: DecodeError) -> Self {
        Error::Decode {
            path: path.to_string(),
            source,
        }
    }

    /// True for unregistered paths and for missing files in local mode.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True if the stored payload could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// The response status an HTTP collaborator should send for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            e if e.is_not_found() => StatusCode::NOT_FOUND,
            Error::Path(_) => StatusCode::NOT_FOUND,
            Error::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                StatusCode::FORBIDDEN
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
