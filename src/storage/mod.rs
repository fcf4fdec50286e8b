use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

pub mod delete;
#[cfg(test)]
pub mod memory;
pub mod watch;

pub use delete::{delete_save, DeleteSummary};
pub use watch::DirWatcher;

/// Filesystem collaborator used by the picker.
///
/// Paths are opaque strings; implementations decide how to map them onto
/// real storage.
pub trait SaveStore {
    /// Entry names (not paths) inside `dir`, in the store's iteration order.
    fn enumerate(&self, dir: &str) -> io::Result<Vec<String>>;

    fn modified(&self, path: &str) -> io::Result<SystemTime>;

    /// Remove a file or an empty directory.
    fn delete(&mut self, path: &str) -> io::Result<()>;

    fn exists(&self, path: &str) -> bool;

    fn create_dir_all(&mut self, dir: &str) -> io::Result<()>;
}

/// [`SaveStore`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl SaveStore for FsStore {
    fn enumerate(&self, dir: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)?.flatten() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn modified(&self, path: &str) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn delete(&mut self, path: &str) -> io::Result<()> {
        if Path::new(path).is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn create_dir_all(&mut self, dir: &str) -> io::Result<()> {
        fs::create_dir_all(dir)
    }
}
