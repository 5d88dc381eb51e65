//! Storage slot backends.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single named location in persistent storage.
///
/// The store serializes the whole event collection into one slot, so
/// backends only need whole-value read and write over a string blob.
pub trait StorageSlot {
    /// Read the slot contents. `None` means the slot has never been
    /// written.
    fn read(&self) -> io::Result<Option<String>>;

    /// Overwrite the slot contents.
    fn write(&self, contents: &str) -> io::Result<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for &S {
    fn read(&self) -> io::Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        (**self).write(contents)
    }
}

/// Slot backed by a single file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSlot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, contents)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral stores.
#[derive(Default)]
pub struct MemorySlot {
    contents: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}
