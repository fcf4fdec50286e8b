use log::debug;

use super::name::SlotName;
use super::namespace::{SlotId, SlotNamespace};

/// Path of a save that will be replaced once the new name is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRename {
    path: String,
}

impl PendingRename {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

/// Outcome of confirming a name for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Another slot already holds this name.
    Rejected { conflicting: SlotId },
    /// The name is free. `replaces` names the slot's previous save, which
    /// must be deleted before the new one is written.
    Accepted {
        path: String,
        replaces: Option<PendingRename>,
    },
}

impl SlotNamespace {
    /// Decide whether `candidate` may be stored in `current`.
    ///
    /// `slots` is the full listing as `(slot, occupant name)`; empty slots
    /// carry `None`. Matching is exact and case-sensitive.
    pub fn resolve(
        &self,
        candidate: &SlotName,
        current: SlotId,
        slots: &[(SlotId, Option<&str>)],
    ) -> Resolution {
        let wanted = candidate.as_str();

        if let Some((conflicting, _)) = slots
            .iter()
            .find(|(id, name)| *id != current && *name == Some(wanted))
        {
            debug!("name {wanted:?} already used by {conflicting}");
            return Resolution::Rejected {
                conflicting: *conflicting,
            };
        }

        let replaces = slots
            .iter()
            .find(|(id, _)| *id == current)
            .and_then(|(_, name)| *name)
            .map(|previous| PendingRename::new(self.path_for(previous)));

        Resolution::Accepted {
            path: self.path_for(wanted),
            replaces,
        }
    }
}
