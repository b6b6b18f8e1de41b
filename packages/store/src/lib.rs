//! # assetfs-store
//!
//! Embedded and local-disk asset stores.
//!
//! ## Store Types
//!
//! ### EmbeddedFs
//!
//! Serves an [`AssetTable`] compiled into the program. Each asset is stored
//! as gzip + base64 text and decoded once, on first open:
//!
//! ```rust
//! use std::sync::Arc;
//! use assetfs_store::{AssetTable, EmbeddedFs};
//!
//! let mut table = AssetTable::new();
//! table.insert_file("/static/site.css", b"body { margin: 0; }", 0).unwrap();
//!
//! let fs = EmbeddedFs::new(Arc::new(table));
//! assert_eq!(fs.read("/static/site.css").unwrap().len(), 19);
//! ```
//!
//! ### LocalFs
//!
//! Serves the same logical paths from disk, for development.
//!
//! ### Assets
//!
//! Holds both and picks one per call from a `use_local` flag. See
//! [`AssetsConfig`] for reading that flag from the environment.

mod assets;
mod codec;
mod config;
mod embedded;
mod local_disk;
mod record;
mod table;

pub use assets::{Assets, SharedFs};
pub use codec::{GzipBase64Codec, PayloadCodec};
pub use config::{AssetsConfig, Backend, LOCAL_ROOT_VAR, PREFIX_VAR, USE_LOCAL_VAR};
pub use embedded::EmbeddedFs;
pub use local_disk::{LocalFile, LocalFs};
pub use record::{AssetEntry, AssetRecord};
pub use table::AssetTable;

// Re-export core types for convenience
pub use assetfs_core::{
    asset_path, AssetPath, Bytes, DecodeError, Error, File, FileInfo, FileSystem, MemoryFile,
    PathError, PrefixedFs,
};
