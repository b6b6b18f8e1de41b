//! Views into a sub-tree of a filesystem.

use crate::{AssetPath, Error, File, FileSystem};

/// Serves `inner` as if its `prefix` directory were the root.
///
/// Opening `/js/table.js` on a view prefixed with `/static` opens
/// `/static/js/table.js` on the inner filesystem. Both halves are normalized
/// before joining, so a request cannot climb out of the prefix with `..`.
pub struct PrefixedFs<F> {
    inner: F,
    prefix: AssetPath,
}

impl<F> PrefixedFs<F> {
    /// Create a new prefixed view.
    pub fn new(inner: F, prefix: AssetPath) -> Self {
        Self { inner, prefix }
    }

    /// Parse `prefix` and create a view.
    pub fn with_prefix(inner: F, prefix: &str) -> Result<Self, Error> {
        Ok(Self::new(inner, AssetPath::parse(prefix)?))
    }

    pub fn prefix(&self) -> &AssetPath {
        &self.prefix
    }

    /// Get a reference to the inner filesystem.
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: FileSystem> FileSystem for PrefixedFs<F> {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        let full = self.prefix.join(&AssetPath::parse(path)?);
        self.inner.open(&full.to_string())
    }
}
