use std::fs;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;

use assetfs_core::{AssetPath, Error, File, FileInfo, FileSystem};

use crate::AssetTable;

/// Serves the same logical paths from the real filesystem.
///
/// Used during development so edits to source assets show up without
/// regenerating the embedded table. Nothing is cached or decoded; every
/// open hits the disk and I/O failures come back as [`Error::Io`] with the
/// original [`io::ErrorKind`].
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
    table: Option<Arc<AssetTable>>,
}

impl LocalFs {
    /// Resolve every normalized logical path directly under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            table: None,
        }
    }

    /// Only serve paths registered in `table`, each from its recorded
    /// local location under `root`.
    pub fn with_table(root: impl Into<PathBuf>, table: Arc<AssetTable>) -> Self {
        Self {
            root: root.into(),
            table: Some(table),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path to the file it is read from.
    ///
    /// # Errors
    ///
    /// `Error::NotFound` when a table is attached and the path is not in it.
    pub fn resolve(&self, path: &str) -> Result<(AssetPath, PathBuf), Error> {
        let asset_path = AssetPath::parse(path)?;
        let relative = match &self.table {
            Some(table) => {
                let record = table
                    .get(&asset_path)
                    .ok_or_else(|| Error::not_found(&asset_path))?;
                record
                    .local()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(asset_path.to_relative()))
            }
            None => PathBuf::from(asset_path.to_relative()),
        };
        let file_path = self.root.join(relative);
        Ok((asset_path, file_path))
    }

    /// Full contents of the file behind `path`.
    pub fn read(&self, path: &str) -> Result<Bytes, Error> {
        let (asset_path, file_path) = self.resolve(path)?;
        log::debug!("Reading {}...", file_path.display());
        fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|e| Error::io(&asset_path, e))
    }

    /// Open the file behind `path` as a concrete [`LocalFile`].
    pub fn open_local(&self, path: &str) -> Result<LocalFile, Error> {
        let (asset_path, file_path) = self.resolve(path)?;
        log::debug!("Opening {}...", file_path.display());
        let file = fs::File::open(&file_path).map_err(|e| Error::io(&asset_path, e))?;
        Ok(LocalFile {
            file,
            file_path,
            name: asset_path.name().to_string(),
        })
    }
}

impl FileSystem for LocalFs {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        Ok(Box::new(self.open_local(path)?))
    }
}

/// A handle on a real file or directory.
#[derive(Debug)]
pub struct LocalFile {
    file: fs::File,
    file_path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn io_error(&self, error: io::Error) -> Error {
        Error::io(self.file_path.display(), error)
    }
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl File for LocalFile {
    fn stat(&self) -> Result<FileInfo, Error> {
        let metadata = self.file.metadata().map_err(|e| self.io_error(e))?;
        Ok(FileInfo::from_metadata(self.name.clone(), &metadata))
    }

    /// Lists a real directory, sorted by name.
    fn read_dir(&mut self) -> Result<Vec<FileInfo>, Error> {
        let metadata = self.file.metadata().map_err(|e| self.io_error(e))?;
        if !metadata.is_dir() {
            return Err(self.io_error(io::Error::other("not a directory")));
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.file_path).map_err(|e| self.io_error(e))? {
            let entry = entry.map_err(|e| self.io_error(e))?;
            let metadata = entry.metadata().map_err(|e| self.io_error(e))?;
            entries.push(FileInfo::from_metadata(
                entry.file_name().to_string_lossy(),
                &metadata,
            ));
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }
}
