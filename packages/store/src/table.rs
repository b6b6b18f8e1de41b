//! AssetTable - the immutable map from logical path to record.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use assetfs_core::{AssetPath, Error};

use crate::{AssetEntry, AssetRecord, GzipBase64Codec, PayloadCodec};

/// The set of embedded assets, keyed by normalized path.
///
/// A table is built once at startup and then shared read-only (usually as
/// `Arc<AssetTable>`) by every backend that needs it. The only state that
/// ever changes afterwards is each record's one-time decode cache.
///
/// # Example
///
/// ```rust
/// use assetfs_store::{AssetEntry, AssetTable};
///
/// static ENTRIES: &[AssetEntry] = &[AssetEntry::dir("/static", "static", 0)];
///
/// let table = AssetTable::from_entries(ENTRIES).unwrap();
/// assert!(table.lookup("/static/").unwrap().is_dir());
/// assert!(table.lookup("/static/missing.js").unwrap_err().is_not_found());
/// ```
pub struct AssetTable {
    records: HashMap<AssetPath, AssetRecord>,
    codec: Arc<dyn PayloadCodec>,
}

impl AssetTable {
    /// An empty table using the gzip+base64 codec.
    pub fn new() -> Self {
        Self::with_codec(Arc::new(GzipBase64Codec::new()))
    }

    /// An empty table using a custom codec.
    pub fn with_codec(codec: Arc<dyn PayloadCodec>) -> Self {
        Self {
            records: HashMap::new(),
            codec,
        }
    }

    /// Build a table from generated entries.
    pub fn from_entries(entries: &[AssetEntry]) -> Result<Self, Error> {
        let mut table = Self::new();
        table.extend_entries(entries)?;
        Ok(table)
    }

    /// Add generated entries to this table.
    pub fn extend_entries(&mut self, entries: &[AssetEntry]) -> Result<(), Error> {
        for entry in entries {
            self.insert(AssetRecord::from_entry(entry)?);
        }
        Ok(())
    }

    /// Insert a record, returning any record previously registered at its path.
    pub fn insert(&mut self, record: AssetRecord) -> Option<AssetRecord> {
        self.records.insert(record.path().clone(), record)
    }

    /// Builder-style [`AssetTable::insert`].
    #[must_use]
    pub fn with_record(mut self, record: AssetRecord) -> Self {
        self.insert(record);
        self
    }

    /// Encode `data` with this table's codec and register it at `path`.
    pub fn insert_file(&mut self, path: &str, data: &[u8], modtime: i64) -> Result<(), Error> {
        let asset_path = AssetPath::parse(path)?;
        let compressed = self
            .codec
            .encode(data)
            .map_err(|e| Error::io(&asset_path, e))?;
        self.insert(AssetRecord::file(
            asset_path,
            compressed,
            data.len() as u64,
            modtime,
        ));
        Ok(())
    }

    /// Register a directory marker at `path`.
    pub fn insert_dir(&mut self, path: &str, modtime: i64) -> Result<(), Error> {
        self.insert(AssetRecord::dir(AssetPath::parse(path)?, modtime));
        Ok(())
    }

    /// Get the record for an already-normalized path.
    pub fn get(&self, path: &AssetPath) -> Option<&AssetRecord> {
        self.records.get(path)
    }

    /// Normalize `path` and find its record.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` if nothing is registered at the normalized path.
    pub fn lookup(&self, path: &str) -> Result<&AssetRecord, Error> {
        let asset_path = AssetPath::parse(path)?;
        self.records
            .get(&asset_path)
            .ok_or_else(|| Error::not_found(&asset_path))
    }

    /// Decoded bytes of `record`, decoding on first access.
    pub fn payload<'a>(&self, record: &'a AssetRecord) -> Result<&'a Bytes, Error> {
        record
            .payload(self.codec.as_ref())
            .map_err(|e| Error::decode(record.path(), e))
    }

    pub fn codec(&self) -> &dyn PayloadCodec {
        self.codec.as_ref()
    }

    /// Number of registered records, directories included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All registered paths, sorted.
    pub fn paths(&self) -> Vec<&AssetPath> {
        let mut paths: Vec<&AssetPath> = self.records.keys().collect();
        paths.sort();
        paths
    }

    pub fn records(&self) -> impl Iterator<Item = &AssetRecord> {
        self.records.values()
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AssetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetTable")
            .field("records", &self.records.len())
            .finish()
    }
}
