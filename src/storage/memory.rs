//! In-memory store that keeps insertion order, for deterministic tests.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::SaveStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Vec<(String, SystemTime)>,
    dirs: Vec<String>,
    pub deleted: Vec<String>,
    pub read_only: Vec<String>,
    pub unreadable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: &str, secs: u64) {
        self.files
            .push((path.to_string(), UNIX_EPOCH + Duration::from_secs(secs)));
    }

    pub fn add_dir(&mut self, path: &str) {
        self.dirs.push(path.trim_end_matches('/').to_string());
    }

    fn child_of<'a>(dir: &str, path: &'a str) -> Option<&'a str> {
        let dir = dir.trim_end_matches('/');
        let rest = if dir.is_empty() {
            path
        } else {
            path.strip_prefix(dir)?.strip_prefix('/')?
        };
        (!rest.is_empty() && !rest.contains('/')).then_some(rest)
    }
}

impl SaveStore for MemoryStore {
    fn enumerate(&self, dir: &str) -> io::Result<Vec<String>> {
        if self.unreadable {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"));
        }
        if !self.exists(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        let files = self.files.iter().map(|(path, _)| path.as_str());
        let dirs = self.dirs.iter().map(String::as_str);
        Ok(files
            .chain(dirs)
            .filter_map(|path| Self::child_of(dir, path))
            .map(str::to_string)
            .collect())
    }

    fn modified(&self, path: &str) -> io::Result<SystemTime> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, t)| *t)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn delete(&mut self, path: &str) -> io::Result<()> {
        if self.read_only.iter().any(|p| p == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read only"));
        }
        let path = path.trim_end_matches('/');
        if let Some(idx) = self.files.iter().position(|(p, _)| p == path) {
            self.files.remove(idx);
        } else if let Some(idx) = self.dirs.iter().position(|p| p == path) {
            if self.enumerate(path)?.is_empty() {
                self.dirs.remove(idx);
            } else {
                return Err(io::Error::new(io::ErrorKind::Other, "directory not empty"));
            }
        } else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such entry"));
        }
        self.deleted.push(path.to_string());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        self.files.iter().any(|(p, _)| p == path) || self.dirs.iter().any(|p| p == path)
    }

    fn create_dir_all(&mut self, dir: &str) -> io::Result<()> {
        if !self.exists(dir) {
            self.add_dir(dir);
        }
        Ok(())
    }
}
