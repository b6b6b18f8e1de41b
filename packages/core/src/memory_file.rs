//! A read-only file handle over shared in-memory bytes.

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;

use crate::{Error, File, FileInfo};

/// A file handle backed by a [`Bytes`] buffer.
///
/// Each handle has its own cursor; the buffer itself is shared, so opening
/// the same asset many times never copies its contents.
pub struct MemoryFile {
    cursor: Cursor<Bytes>,
    info: FileInfo,
}

impl MemoryFile {
    pub fn new(data: Bytes, info: FileInfo) -> Self {
        Self {
            cursor: Cursor::new(data),
            info,
        }
    }

    /// The full contents, independent of the cursor position.
    pub fn contents(&self) -> &Bytes {
        self.cursor.get_ref()
    }
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl File for MemoryFile {
    fn stat(&self) -> Result<FileInfo, Error> {
        Ok(self.info.clone())
    }

    fn read_dir(&mut self) -> Result<Vec<FileInfo>, Error> {
        Ok(Vec::new())
    }
}

impl std::fmt::Debug for MemoryFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryFile")
            .field("name", &self.info.name())
            .field("len", &self.cursor.get_ref().len())
            .field("position", &self.cursor.position())
            .finish()
    }
}
