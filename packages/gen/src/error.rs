use std::path::PathBuf;

use assetfs_store::PathError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid asset path: {0}")]
    Path(#[from] PathError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid item name '{name}': must be a Rust identifier")]
    InvalidName { name: String },

    #[error("Failed to render module for {name}")]
    Render { name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
