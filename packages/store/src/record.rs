//! AssetRecord - one table entry with a lazily decoded payload.

use std::borrow::Cow;
use std::sync::OnceLock;

use bytes::Bytes;

use assetfs_core::{AssetPath, DecodeError, FileInfo, PathError};

use crate::PayloadCodec;

/// The literal form of a table entry, as emitted by the generator.
///
/// ```rust
/// use assetfs_store::AssetEntry;
///
/// pub static ASSETS: &[AssetEntry] = &[
///     AssetEntry::dir("/static", "static", 1_500_000_000),
///     AssetEntry {
///         path: "/static/robots.txt",
///         local: "static/robots.txt",
///         size: 0,
///         modtime: 1_500_000_000,
///         is_dir: false,
///         compressed: "",
///     },
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub path: &'static str,
    pub local: &'static str,
    pub size: u64,
    pub modtime: i64,
    pub is_dir: bool,
    pub compressed: &'static str,
}

impl AssetEntry {
    /// A directory marker entry.
    pub const fn dir(path: &'static str, local: &'static str, modtime: i64) -> Self {
        Self {
            path,
            local,
            size: 0,
            modtime,
            is_dir: true,
            compressed: "",
        }
    }
}

/// A table record with lazy decoding. Thread-safe.
///
/// The stored payload is decoded on the first call to [`AssetRecord::payload`]
/// and the outcome is cached, whether it is the asset's bytes or a decode
/// error. Records with `size == 0` (directory markers and empty files) never
/// touch the codec.
///
/// # Thread Safety
///
/// `AssetRecord` is `Send + Sync`. Multiple threads can call `payload()`
/// concurrently - only one runs the codec; the others block until it is done
/// and then observe the same result.
pub struct AssetRecord {
    path: AssetPath,
    compressed: Cow<'static, str>,
    size: u64,
    modtime: i64,
    local: Option<String>,
    is_dir: bool,
    /// Populated on first access to `payload()`.
    payload: OnceLock<Result<Bytes, DecodeError>>,
}

impl AssetRecord {
    /// A file record holding an encoded payload of a `size`-byte asset.
    pub fn file(
        path: AssetPath,
        compressed: impl Into<Cow<'static, str>>,
        size: u64,
        modtime: i64,
    ) -> Self {
        Self {
            path,
            compressed: compressed.into(),
            size,
            modtime,
            local: None,
            is_dir: false,
            payload: OnceLock::new(),
        }
    }

    /// A directory marker record.
    pub fn dir(path: AssetPath, modtime: i64) -> Self {
        Self {
            path,
            compressed: Cow::Borrowed(""),
            size: 0,
            modtime,
            local: None,
            is_dir: true,
            payload: OnceLock::new(),
        }
    }

    /// Set the on-disk location used by local mode.
    #[must_use]
    pub fn with_local(mut self, local: impl Into<String>) -> Self {
        self.local = Some(local.into());
        self
    }

    /// Build a record from a generated entry. The payload is borrowed, not copied.
    pub fn from_entry(entry: &AssetEntry) -> Result<Self, PathError> {
        let path = AssetPath::parse(entry.path)?;
        let record = if entry.is_dir {
            Self::dir(path, entry.modtime)
        } else {
            Self::file(path, entry.compressed, entry.size, entry.modtime)
        };
        Ok(if entry.local.is_empty() {
            record
        } else {
            record.with_local(entry.local)
        })
    }

    /// Get the decoded bytes, decoding on first access.
    ///
    /// # Errors
    ///
    /// Returns the cached [`DecodeError`] if the payload is corrupt. The
    /// codec is never run a second time for the same record.
    pub fn payload(&self, codec: &dyn PayloadCodec) -> Result<&Bytes, DecodeError> {
        self.payload
            .get_or_init(|| self.decode(codec))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn decode(&self, codec: &dyn PayloadCodec) -> Result<Bytes, DecodeError> {
        if self.size == 0 {
            return Ok(Bytes::new());
        }

        log::debug!(
            "Decoding {} ({} encoded bytes)...",
            self.path,
            self.compressed.len()
        );
        let result = codec.decode(&self.compressed).and_then(|data| {
            let actual = data.len() as u64;
            if actual == self.size {
                Ok(data)
            } else {
                Err(DecodeError::SizeMismatch {
                    declared: self.size,
                    actual,
                })
            }
        });

        match &result {
            Ok(data) => log::debug!("Decoded {} to {} bytes", self.path, data.len()),
            Err(e) => log::warn!("Failed to decode {}: {}", self.path, e),
        }
        result
    }

    /// Check whether the single decode attempt has happened.
    pub fn is_resolved(&self) -> bool {
        self.payload.get().is_some()
    }

    pub fn path(&self) -> &AssetPath {
        &self.path
    }

    /// Base name reported by `stat`.
    pub fn name(&self) -> &str {
        self.path.name()
    }

    /// Declared decompressed length.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modtime(&self) -> i64 {
        self.modtime
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// On-disk location for local mode, if one was recorded.
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// The encoded payload as stored.
    pub fn compressed(&self) -> &str {
        &self.compressed
    }

    /// Metadata for `stat`.
    pub fn info(&self) -> FileInfo {
        FileInfo::new(self.name(), self.size, self.modtime, self.is_dir)
    }
}

impl std::fmt::Debug for AssetRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetRecord")
            .field("path", &self.path.to_string())
            .field("size", &self.size)
            .field("modtime", &self.modtime)
            .field("is_dir", &self.is_dir)
            .field("compressed_len", &self.compressed.len())
            .field("is_resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GzipBase64Codec;
    use assetfs_core::asset_path;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls before delegating to the real codec.
    #[derive(Default)]
    struct CountingCodec {
        decodes: AtomicUsize,
    }

    impl PayloadCodec for CountingCodec {
        fn decode(&self, payload: &str) -> Result<Bytes, DecodeError> {
            self.decodes.fetch_add(1, Ordering::SeqCst);
            GzipBase64Codec::new().decode(payload)
        }

        fn encode(&self, data: &[u8]) -> io::Result<String> {
            GzipBase64Codec::new().encode(data)
        }
    }

    fn record_for(data: &[u8]) -> AssetRecord {
        let payload = GzipBase64Codec::new().encode(data).unwrap();
        AssetRecord::file(asset_path!("/static/app.js"), payload, data.len() as u64, 42)
    }

    #[test]
    fn lazy_decoding_works() {
        let record = record_for(b"console.log('hi');");
        let codec = CountingCodec::default();

        assert!(!record.is_resolved());
        let first = record.payload(&codec).unwrap();
        assert!(record.is_resolved());
        assert_eq!(first.as_ref(), b"console.log('hi');");

        let second = record.payload(&codec).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(codec.decodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn decode_error_is_cached() {
        let record = AssetRecord::file(asset_path!("/bad.js"), "aGVsbG8gd29ybGQ=", 11, 0);
        let codec = CountingCodec::default();

        let first = record.payload(&codec).unwrap_err();
        let second = record.payload(&codec).unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, DecodeError::Gzip { .. }));
        assert_eq!(codec.decodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn size_mismatch_is_decode_error() {
        let payload = GzipBase64Codec::new().encode(b"12345").unwrap();
        let record = AssetRecord::file(asset_path!("/a.txt"), payload, 9, 0);
        let err = record.payload(&GzipBase64Codec::new()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::SizeMismatch {
                declared: 9,
                actual: 5
            }
        );
    }

    #[test]
    fn zero_size_never_decodes() {
        let codec = CountingCodec::default();

        let dir = AssetRecord::dir(asset_path!("/static"), 0);
        assert!(dir.payload(&codec).unwrap().is_empty());

        // Garbage payload is never looked at when the declared size is zero.
        let empty = AssetRecord::file(asset_path!("/empty.css"), "!!!", 0, 0);
        assert!(empty.payload(&codec).unwrap().is_empty());

        assert_eq!(codec.decodes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn concurrent_first_access_decodes_once() {
        let record = record_for(&[7u8; 4096]);
        let codec = CountingCodec::default();

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let data = record.payload(&codec).unwrap();
                    assert_eq!(data.len(), 4096);
                });
            }
        });

        assert_eq!(codec.decodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn from_entry_file() {
        let entry = AssetEntry {
            path: "static//css/../js/app.js",
            local: "web/js/app.js",
            size: 3,
            modtime: 1_600_000_000,
            is_dir: false,
            compressed: "H4sIAAAAAAAA/0tMSgYAwkEkNQMAAAA=",
        };
        let record = AssetRecord::from_entry(&entry).unwrap();
        assert_eq!(record.path(), &asset_path!("/static/js/app.js"));
        assert_eq!(record.local(), Some("web/js/app.js"));
        assert_eq!(record.name(), "app.js");
        assert!(!record.is_dir());
        assert_eq!(record.compressed(), entry.compressed);
    }

    #[test]
    fn from_entry_dir() {
        let record = AssetRecord::from_entry(&AssetEntry::dir("/static", "", 5)).unwrap();
        assert!(record.is_dir());
        assert_eq!(record.size(), 0);
        assert_eq!(record.local(), None);

        let info = record.info();
        assert!(info.is_dir());
        assert_eq!(info.name(), "static");
        assert_eq!(info.modtime(), 5);
    }

    #[test]
    fn debug_impl() {
        let record = record_for(b"abc");
        let debug = format!("{:?}", record);
        assert!(debug.contains("AssetRecord"));
        assert!(debug.contains("/static/app.js"));
        assert!(debug.contains("is_resolved: false"));
    }
}
