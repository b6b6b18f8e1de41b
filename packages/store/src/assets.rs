//! Assets - pick a backend by flag and read through it.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;

use assetfs_core::{Error, FileSystem, PrefixedFs};

use crate::{AssetTable, AssetsConfig, Backend, EmbeddedFs, LocalFs};

/// A shared, type-erased filesystem handle.
pub type SharedFs = Arc<dyn FileSystem>;

/// Both backends over one asset table.
///
/// Construct once at startup and share by reference (or clone; it is a pair
/// of `Arc`s). Every accessor takes the `use_local` flag, so callers never
/// branch on the backend themselves.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use assetfs_store::{Assets, AssetTable, FileSystem};
///
/// let mut table = AssetTable::new();
/// table.insert_file("/static/app.js", b"run();", 0).unwrap();
///
/// let assets = Assets::new(Arc::new(table), "server");
/// assert_eq!(assets.read_string(false, "/static/app.js").unwrap(), "run();");
///
/// let static_dir = assets.dir(false, "/static").unwrap();
/// assert!(static_dir.open("/app.js").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Assets {
    embedded: Arc<EmbeddedFs>,
    local: Arc<LocalFs>,
}

impl Assets {
    /// Serve `table` when embedded, and its recorded files under
    /// `local_root` when local.
    pub fn new(table: Arc<AssetTable>, local_root: impl Into<PathBuf>) -> Self {
        Self {
            local: Arc::new(LocalFs::with_table(local_root, table.clone())),
            embedded: Arc::new(EmbeddedFs::new(table)),
        }
    }

    pub fn from_config(table: Arc<AssetTable>, config: &AssetsConfig) -> Self {
        Self::new(table, config.local_root.clone())
    }

    pub fn embedded(&self) -> &Arc<EmbeddedFs> {
        &self.embedded
    }

    pub fn local(&self) -> &Arc<LocalFs> {
        &self.local
    }

    /// The filesystem for `backend`.
    pub fn backend(&self, backend: Backend) -> SharedFs {
        match backend {
            Backend::Embedded => self.embedded.clone(),
            Backend::Local => self.local.clone(),
        }
    }

    /// The filesystem to mount in a static-file handler.
    pub fn fs(&self, use_local: bool) -> SharedFs {
        self.backend(Backend::from_use_local(use_local))
    }

    /// Like [`Assets::fs`], rooted at `prefix`.
    pub fn dir(&self, use_local: bool, prefix: &str) -> Result<PrefixedFs<SharedFs>, Error> {
        PrefixedFs::with_prefix(self.fs(use_local), prefix)
    }

    /// The filesystem described by `config`: its backend, rooted at its
    /// prefix when one is set.
    pub fn for_config(&self, config: &AssetsConfig) -> Result<SharedFs, Error> {
        let fs: SharedFs = match &config.prefix {
            Some(prefix) => Arc::new(self.dir(config.use_local, prefix)?),
            None => self.fs(config.use_local),
        };
        Ok(fs)
    }

    /// Full contents of `name`.
    pub fn read_bytes(&self, use_local: bool, name: &str) -> Result<Bytes, Error> {
        match Backend::from_use_local(use_local) {
            Backend::Embedded => self.embedded.read(name),
            Backend::Local => self.local.read(name),
        }
    }

    /// Full contents of `name` as UTF-8 text.
    pub fn read_string(&self, use_local: bool, name: &str) -> Result<String, Error> {
        let bytes = self.read_bytes(use_local, name)?;
        String::from_utf8(bytes.to_vec()).map_err(|source| Error::Utf8 {
            path: name.to_string(),
            source,
        })
    }

    /// [`Assets::read_bytes`] for assets that are known to exist.
    ///
    /// Only compile-time names are accepted; request paths and other dynamic
    /// input must go through the fallible accessors.
    ///
    /// # Panics
    ///
    /// Panics if the asset is missing or cannot be read.
    pub fn must_bytes(&self, use_local: bool, name: &'static str) -> Bytes {
        self.read_bytes(use_local, name)
            .unwrap_or_else(|e| panic!("required asset {} is unavailable: {}", name, e))
    }

    /// [`Assets::read_string`] for assets that are known to exist.
    ///
    /// # Panics
    ///
    /// Panics if the asset is missing, cannot be read, or is not UTF-8.
    pub fn must_string(&self, use_local: bool, name: &'static str) -> String {
        self.read_string(use_local, name)
            .unwrap_or_else(|e| panic!("required asset {} is unavailable: {}", name, e))
    }
}
