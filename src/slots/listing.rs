use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::namespace::SlotNamespace;
use crate::storage::delete::{is_save_name, strip_extension};
use crate::storage::SaveStore;

/// Default number of slots shown by the picker.
pub const DEFAULT_SLOT_CAPACITY: usize = 36;

/// How directory entries are matched against the save extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMatch {
    /// Entry name contains `.<ext>` anywhere, as older builds did.
    #[default]
    Substring,
    /// Entry name ends with `.<ext>`.
    Suffix,
}

impl ExtensionMatch {
    pub fn matches(self, entry: &str, dotted_extension: &str) -> bool {
        match self {
            ExtensionMatch::Substring => entry.contains(dotted_extension),
            ExtensionMatch::Suffix => entry.ends_with(dotted_extension),
        }
    }
}

/// One save found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotListing {
    pub display_name: String,
    pub modified: SystemTime,
}

/// List saves in the namespace's directory, at most `capacity` of them.
///
/// Entries keep the store's iteration order, so which saves survive the cap
/// depends on the filesystem. An unreadable directory yields no slots.
pub fn list_slots<S: SaveStore + ?Sized>(
    store: &S,
    namespace: &SlotNamespace,
    capacity: usize,
    matching: ExtensionMatch,
) -> Vec<SlotListing> {
    let dir = namespace.directory();
    debug!("Searching {dir:?} for savegames");

    let entries = match store.enumerate(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Failed to list save directory {dir:?}: {err}");
            return Vec::new();
        }
    };

    let marker = namespace.dotted_extension();
    let mut slots = Vec::new();
    for entry in entries {
        if slots.len() == capacity {
            break;
        }
        if !matching.matches(&entry, &marker) {
            continue;
        }
        let Some(display_name) = strip_extension(&entry) else {
            continue;
        };
        if !is_save_name(display_name) {
            debug!("Skipping [{entry}]: no name left after the extension");
            continue;
        }
        debug!("We found [{entry}]");

        let modified = store
            .modified(&namespace.entry_path(&entry))
            .unwrap_or(UNIX_EPOCH);
        slots.push(SlotListing {
            display_name: display_name.to_string(),
            modified,
        });
    }
    slots
}
