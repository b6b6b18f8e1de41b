//! Core traits: FileSystem, File.

use std::io::{Read, Seek};
use std::sync::Arc;

use crate::{Error, FileInfo};

/// An open file handle.
///
/// Handles support seekable reads plus the metadata an HTTP static-file
/// handler needs (name, size, modification time, directory flag).
pub trait File: Read + Seek + Send {
    /// Metadata for the opened file.
    fn stat(&self) -> Result<FileInfo, Error>;

    /// Entries of an opened directory.
    ///
    /// Backends that cannot enumerate directories return an empty list.
    fn read_dir(&mut self) -> Result<Vec<FileInfo>, Error>;

    /// Release the handle.
    fn close(self: Box<Self>) -> Result<(), Error> {
        Ok(())
    }
}

/// Open files by logical path.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Arc<dyn FileSystem>`.
pub trait FileSystem: Send + Sync {
    /// Open the file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(file)` - A handle positioned at offset 0.
    /// * `Err(Error::NotFound)` - The path does not exist.
    /// * `Err(_)` - The path exists but could not be opened.
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error>;
}

// Blanket implementations for references and smart pointers

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        (**self).open(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Box<T> {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        self.as_ref().open(path)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn open(&self, path: &str) -> Result<Box<dyn File>, Error> {
        self.as_ref().open(path)
    }
}
