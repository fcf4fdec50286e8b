use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::config::ScreenshotConfig;
use crate::error::Result;
use crate::slots::name::sanitize;
use crate::slots::namespace::join_entry;
use crate::storage::SaveStore;

const STAMP_FMT: &str = "%Y%m%d_%H%M%S";

/// Writes the current frame to a file. Encoding is up to the implementor.
pub trait FrameEncoder {
    fn write_frame(&mut self, path: &str) -> Result<()>;
}

/// First free name of the form `<dir>/<prefix>-<stamp>-<level>[-<n>].<ext>`.
pub fn screenshot_path<S: SaveStore + ?Sized>(
    store: &S,
    dir: &str,
    prefix: &str,
    level: &str,
    now: NaiveDateTime,
    extension: &str,
) -> String {
    let level = sanitize(level);
    let base = format!("{prefix}-{}-{level}", now.format(STAMP_FMT));

    let mut path = join_entry(dir, &format!("{base}.{extension}"));
    let mut counter = 0u32;
    while store.exists(&path) {
        counter += 1;
        path = join_entry(dir, &format!("{base}-{counter}.{extension}"));
    }
    path
}

/// Screen dumps are requested from input handling and performed after the
/// next frame has been drawn.
#[derive(Debug, Default)]
pub struct ScreenDump {
    pending: Option<String>,
}

impl ScreenDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a file name and mark a dump as required.
    pub fn request<S: SaveStore + ?Sized>(
        &mut self,
        store: &mut S,
        shots: &ScreenshotConfig,
        level: &str,
        now: NaiveDateTime,
    ) -> &str {
        if let Err(err) = store.create_dir_all(&shots.dir) {
            warn!("Could not create screenshot directory {:?}: {err}", shots.dir);
        }
        let path = screenshot_path(
            &*store,
            &shots.dir,
            &shots.prefix,
            level,
            now,
            &shots.extension,
        );
        self.pending.insert(path).as_str()
    }

    pub fn is_required(&self) -> bool {
        self.pending.is_some()
    }

    /// Write the pending dump, if any. Returns the message to show the user.
    /// The request is consumed even when writing fails.
    pub fn dump_if_required<E: FrameEncoder + ?Sized>(
        &mut self,
        encoder: &mut E,
    ) -> Result<Option<String>> {
        let Some(path) = self.pending.take() else {
            return Ok(None);
        };
        debug!("Saving screenshot {path}");
        encoder.write_frame(&path)?;
        Ok(Some(format!("Screenshot {path} saved!")))
    }
}
