use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use log::warn;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::Result;

/// Watches a save directory so an open picker can refresh its slots.
pub struct DirWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<()>,
}

impl DirWatcher {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| match res {
                Ok(event) if is_relevant_event(&event.kind) => {
                    let _ = tx.send(());
                }
                Ok(_) => {}
                Err(err) => warn!("Save directory watch error: {err}"),
            })?;
        watcher.watch(dir.as_ref(), RecursiveMode::NonRecursive)?;
        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain pending notifications; true if anything changed since last call.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(()) => changed = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }
}

fn is_relevant_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_) | EventKind::Any
    )
}
