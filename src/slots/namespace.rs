use std::fmt;

/// Zero-based position of a slot in the picker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Directory plus extension that together scope save names.
///
/// `directory` is expected to already end with a separator: save paths are
/// built by plain concatenation, `<directory><name>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotNamespace {
    directory: String,
    extension: String,
}

impl SlotNamespace {
    pub fn new(directory: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `".<extension>"`, the marker searched for in directory entries.
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn path_for(&self, name: &str) -> String {
        format!("{}{}.{}", self.directory, name, self.extension)
    }

    /// Path of a raw directory entry, used for stat and delete calls.
    pub fn entry_path(&self, entry: &str) -> String {
        join_entry(&self.directory, entry)
    }
}

/// Join a directory and an entry with exactly one `/`.
pub fn join_entry(dir: &str, entry: &str) -> String {
    if dir.is_empty() {
        entry.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{entry}")
    } else {
        format!("{dir}/{entry}")
    }
}
