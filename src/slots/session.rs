use log::{debug, info, warn};

use super::listing::{list_slots, SlotListing};
use super::mode::PickerMode;
use super::name::sanitize;
use super::namespace::{SlotId, SlotNamespace};
use super::resolver::Resolution;
use crate::config::SlotStoreConfig;
use crate::storage::{delete_save, SaveStore};

/// Notified when a chosen name is refused. Best-effort.
pub trait Feedback {
    fn rejected(&mut self);
}

impl Feedback for () {
    fn rejected(&mut self) {}
}

/// Game-side actions around an open picker.
pub trait SessionHooks {
    /// Called when a picker opens over a running game.
    fn suspend(&mut self, _mode: PickerMode) {}

    /// Called exactly once when that picker closes, whatever the exit path.
    fn resume(&mut self, _mode: PickerMode) {}
}

impl SessionHooks for () {}

/// One position in the picker grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: SlotId,
    pub save: Option<SlotListing>,
}

impl Slot {
    pub fn name(&self) -> Option<&str> {
        self.save.as_ref().map(|save| save.display_name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Cancel,
    Select(SlotId),
    /// The name edit box lost focus. `submitted` is false unless the user
    /// confirmed with Enter.
    EditFinished { text: String, submitted: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing happened (empty slot in load mode, stray event).
    Ignored,
    EditStarted { slot: SlotId, seed: String },
    EditReverted { slot: SlotId },
    Rejected { slot: SlotId, conflicting: SlotId },
    /// The picker closed; `Some(path)` when a save was chosen.
    Finished(Option<String>),
}

/// Owns the collaborators a picker session needs.
///
/// Only one [`Session`] can borrow a picker at a time.
pub struct Picker<S, F = (), H = ()>
where
    S: SaveStore,
    F: Feedback,
    H: SessionHooks,
{
    store: S,
    feedback: F,
    hooks: H,
    settings: SlotStoreConfig,
}

impl<S, F, H> Picker<S, F, H>
where
    S: SaveStore,
    F: Feedback,
    H: SessionHooks,
{
    pub fn new(store: S, feedback: F, hooks: H, settings: SlotStoreConfig) -> Self {
        Self {
            store,
            feedback,
            hooks,
            settings,
        }
    }

    pub fn settings(&self) -> &SlotStoreConfig {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn open(&mut self, mode: PickerMode, title: impl Into<String>) -> Session<'_, S, F, H> {
        let title = title.into();
        let namespace = self.settings.namespace();
        debug!(
            "opening picker ({mode:?}, {:?}, {:?}, {title:?})",
            namespace.directory(),
            namespace.extension()
        );

        if let Err(err) = self.store.create_dir_all(namespace.directory()) {
            warn!(
                "Could not create save directory {:?}: {err}",
                namespace.directory()
            );
        }
        if mode.suspends_game() {
            self.hooks.suspend(mode);
        }

        let mut session = Session {
            picker: self,
            mode,
            title,
            namespace,
            slots: Vec::new(),
            editing: None,
            closed: false,
        };
        session.rescan();
        session
    }
}

/// An open load/save picker. Closing (explicitly or on drop) resumes the game.
pub struct Session<'p, S, F, H>
where
    S: SaveStore,
    F: Feedback,
    H: SessionHooks,
{
    picker: &'p mut Picker<S, F, H>,
    mode: PickerMode,
    title: String,
    namespace: SlotNamespace,
    slots: Vec<Slot>,
    editing: Option<SlotId>,
    closed: bool,
}

impl<'p, S, F, H> Session<'p, S, F, H>
where
    S: SaveStore,
    F: Feedback,
    H: SessionHooks,
{
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn namespace(&self) -> &SlotNamespace {
        &self.namespace
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn editing(&self) -> Option<SlotId> {
        self.editing
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn slot_path(&self, id: SlotId) -> Option<String> {
        self.slots
            .get(id.index())
            .and_then(Slot::name)
            .map(|name| self.namespace.path_for(name))
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.picker.feedback
    }

    /// Re-read the save directory. Skipped while a name is being edited so
    /// the slot under the edit box keeps its occupant.
    pub fn refresh(&mut self) -> bool {
        if self.closed || self.editing.is_some() {
            return false;
        }
        self.rescan();
        true
    }

    pub fn handle(&mut self, event: PickerEvent) -> Step {
        if self.closed {
            debug!("event {event:?} after picker closed");
            return Step::Ignored;
        }
        match event {
            PickerEvent::Cancel => {
                self.close();
                Step::Finished(None)
            }
            PickerEvent::Select(slot) => self.select(slot),
            PickerEvent::EditFinished { text, submitted } => self.finish_edit(&text, submitted),
        }
    }

    /// Close the picker. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.editing = None;
        if self.mode.suspends_game() {
            self.picker.hooks.resume(self.mode);
        }
        debug!("closed picker ({:?})", self.mode);
    }

    fn rescan(&mut self) {
        let settings = &self.picker.settings;
        let mut found = list_slots(
            &self.picker.store,
            &self.namespace,
            settings.capacity,
            settings.matching,
        )
        .into_iter();

        self.slots = (0..settings.capacity)
            .map(|index| Slot {
                id: SlotId(index),
                save: found.next(),
            })
            .collect();
    }

    fn select(&mut self, slot: SlotId) -> Step {
        let Some(entry) = self.slots.get(slot.index()) else {
            return Step::Ignored;
        };

        if self.mode.is_load() {
            return match entry.name() {
                Some(name) => {
                    let path = self.namespace.path_for(name);
                    info!("Chose {path} to load");
                    self.close();
                    Step::Finished(Some(path))
                }
                None => Step::Ignored,
            };
        }

        if self.editing.is_some() {
            return Step::Ignored;
        }
        let seed = entry.name().unwrap_or_default().to_string();
        self.editing = Some(slot);
        Step::EditStarted { slot, seed }
    }

    fn finish_edit(&mut self, text: &str, submitted: bool) -> Step {
        let Some(slot) = self.editing.take() else {
            return Step::Ignored;
        };

        if !submitted {
            return Step::EditReverted { slot };
        }
        if text.is_empty() {
            self.close();
            return Step::Finished(None);
        }

        let candidate = sanitize(text);
        let occupants: Vec<(SlotId, Option<&str>)> =
            self.slots.iter().map(|s| (s.id, s.name())).collect();

        match self.namespace.resolve(&candidate, slot, &occupants) {
            Resolution::Rejected { conflicting } => {
                self.picker.feedback.rejected();
                Step::Rejected { slot, conflicting }
            }
            Resolution::Accepted { path, replaces } => {
                if let Some(pending) = replaces {
                    let picker = &mut *self.picker;
                    let summary =
                        delete_save(&mut picker.store, pending.path(), &picker.settings.companions);
                    if !summary.is_clean() {
                        warn!(
                            "Old save {} was not fully removed; it may still be listed",
                            pending.path()
                        );
                    }
                }
                info!("Saving to {path}");
                self.close();
                Step::Finished(Some(path))
            }
        }
    }
}

impl<'p, S, F, H> Drop for Session<'p, S, F, H>
where
    S: SaveStore,
    F: Feedback,
    H: SessionHooks,
{
    fn drop(&mut self) {
        self.close();
    }
}
