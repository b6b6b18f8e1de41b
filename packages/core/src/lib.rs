//! assetfs core: paths, errors and the file-access capability set
//!
//! This crate defines what every assetfs backend looks like from the outside:
//! - `AssetPath`: a normalized, rooted logical path
//! - `FileSystem`: open a file by path
//! - `File`: a seekable, readable handle with `stat`, `read_dir` and `close`
//! - `FileInfo`: name, size, modification time and directory flag
//!
//! Backends (embedded tables, local disk) live in `assetfs-store`.
//!
//! # Example
//!
//! ```rust
//! use assetfs_core::{Error, FileSystem};
//! use std::io::Read;
//!
//! fn read_asset(fs: &dyn FileSystem, path: &str) -> Result<Vec<u8>, Error> {
//!     let mut file = fs.open(path)?;
//!     let mut buf = Vec::new();
//!     file.read_to_end(&mut buf).map_err(|e| Error::io(path, e))?;
//!     Ok(buf)
//! }
//! ```

pub use bytes::Bytes;

mod error;
mod info;
mod memory_file;
mod path;
mod prefixed;
mod traits;

pub use error::{DecodeError, Error};
pub use info::FileInfo;
pub use memory_file::MemoryFile;
pub use path::{AssetPath, PathError};
pub use prefixed::PrefixedFs;
pub use traits::{File, FileSystem};
