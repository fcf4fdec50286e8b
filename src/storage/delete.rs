use log::{debug, error, warn};

use super::SaveStore;
use crate::slots::namespace::join_entry;

/// What a cascade delete managed to remove.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteSummary {
    pub removed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl DeleteSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn attempt<S: SaveStore + ?Sized>(&mut self, store: &mut S, path: &str) {
        match store.delete(path) {
            Ok(()) => {
                debug!("Deleted [{path}]");
                self.removed.push(path.to_string());
            }
            Err(err) => {
                error!("Warning [{path}] could not be deleted: {err}");
                self.failed.push((path.to_string(), err.to_string()));
            }
        }
    }
}

/// Delete a save file together with everything stored under its stem.
///
/// The stem is `path` minus its last four characters (`.ext`). Besides the
/// save itself this removes `<stem>.<companion>` for each companion
/// extension and the `<stem>` directory with its contents. Missing
/// companions are skipped quietly; other failures are logged and reported
/// in the summary, never returned as errors. A path whose stem has no
/// name (`saves/.gam`) is refused outright.
pub fn delete_save<S: SaveStore + ?Sized>(
    store: &mut S,
    path: &str,
    companions: &[String],
) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    let Some(stem) = strip_extension(path) else {
        warn!("save path {path:?} too short to derive companions");
        summary.attempt(store, path);
        return summary;
    };

    // A nameless stem is the save directory itself.
    let name = stem.rsplit('/').next().unwrap_or(stem);
    if !is_save_name(name) {
        error!("Refusing to delete [{path}]: it does not name a save");
        summary
            .failed
            .push((path.to_string(), "save name is empty".to_string()));
        return summary;
    }

    summary.attempt(store, path);

    for companion in companions {
        let companion_path = format!("{stem}.{companion}");
        if store.exists(&companion_path) {
            summary.attempt(store, &companion_path);
        }
    }

    if store.exists(stem) {
        match store.enumerate(stem) {
            Ok(entries) => {
                for entry in entries {
                    summary.attempt(store, &join_entry(stem, &entry));
                }
            }
            Err(err) => warn!("could not list companion directory {stem}: {err}"),
        }
        summary.attempt(store, stem);
    }

    summary
}

/// False for names that would point at a directory rather than a save:
/// empty, `.` or `..` and the like.
pub(crate) fn is_save_name(name: &str) -> bool {
    !name.chars().all(|ch| ch == '.')
}

/// Drop the trailing `.ext` (four characters) from a save path.
pub(crate) fn strip_extension(path: &str) -> Option<&str> {
    let cut = path.char_indices().rev().nth(3)?.0;
    Some(&path[..cut])
}
