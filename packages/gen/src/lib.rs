//! # assetfs-gen
//!
//! Builds the embedded table that `assetfs-store` serves.
//!
//! Every file under the inputs is gzip-compressed, base64 encoded and written
//! out as an `AssetEntry` literal alongside its decompressed size and
//! modification time. Directories become directory markers.
//!
//! ```rust,ignore
//! use assetfs_gen::{collect, render, GenOptions};
//!
//! let mut options = GenOptions::new(["static"]);
//! options.mount_prefix = Some("/".to_string());
//!
//! let entries = collect(&options)?;
//! std::fs::write("src/assets.rs", render(&entries, &options)?)?;
//! ```

pub mod error;

mod collect;
mod render;

pub use collect::{collect, to_table, GenOptions, GeneratedEntry};
pub use error::Error;
pub use render::render;
