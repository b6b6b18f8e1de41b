//! EmbeddedFs - serve assets straight out of an [`AssetTable`].

use std::sync::Arc;

use bytes::Bytes;

use assetfs_core::{Error, File, FileSystem, MemoryFile};

use crate::AssetTable;

/// A read-only filesystem over an embedded asset table.
///
/// Opening a file decodes its payload the first time and hands out a
/// [`MemoryFile`] over the cached bytes afterwards. Directory markers open as
/// empty handles whose `read_dir` is always empty; embedded directories are
/// not enumerable.
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    table: Arc<AssetTable>,
}

impl EmbeddedFs {
    pub fn new(table: Arc<AssetTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Arc<AssetTable> {
        &self.table
    }

    /// Full contents of the asset at `path`, sharing the cached buffer.
    pub fn read(&self, path: &str) -> Result<Bytes, Error> {
        let record = self.table.lookup(path)?;
        Ok(self.table.payload(record)?.clone())
    }

    /// Open the asset at `path` as a concrete [`MemoryFile`].
    pub fn open_memory(&self, path: &str) -> Result<MemoryFile, Error> {
        let record = self.table.lookup(path)?;
        let data = self.table.payload(record)?.clone();
        Ok(MemoryFile::new(data, record.info()))
    }
}

impl FileSystem for EmbeddedFs {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        Ok(Box::new(self.open_memory(path)?))
    }
}
