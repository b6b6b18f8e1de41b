//! File metadata reported by `stat`.

use std::fs::Metadata;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Metadata for an opened file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    name: String,
    size: u64,
    modified: SystemTime,
    is_dir: bool,
}

impl FileInfo {
    /// Build metadata from a Unix timestamp in seconds.
    pub fn new(name: impl Into<String>, size: u64, modtime: i64, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            modified: unix_to_system_time(modtime),
            is_dir,
        }
    }

    /// Build metadata from a real filesystem entry.
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        Self {
            name: name.into(),
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(UNIX_EPOCH),
            is_dir: metadata.is_dir(),
        }
    }

    /// Base name of the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in bytes (decompressed length for embedded assets).
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Modification time as whole seconds since the Unix epoch.
    pub fn modtime(&self) -> i64 {
        match self.modified.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

fn unix_to_system_time(secs: i64) -> SystemTime {
    if secs >= 0 {
        UNIX_EPOCH + Duration::from_secs(secs as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
    }
}
