use std::path::PathBuf;

use crate::slots::listing::{ExtensionMatch, DEFAULT_SLOT_CAPACITY};
use crate::slots::namespace::SlotNamespace;

pub mod loader;
pub mod validator;

pub use loader::load_config;

/// Where saves live and how the picker lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStoreConfig {
    /// Save directory, ending with a separator.
    pub dir: String,
    pub extension: String,
    pub capacity: usize,
    pub matching: ExtensionMatch,
    /// Extensions of files deleted together with an overwritten save.
    pub companions: Vec<String>,
}

impl SlotStoreConfig {
    pub fn namespace(&self) -> SlotNamespace {
        SlotNamespace::new(self.dir.clone(), self.extension.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotConfig {
    pub dir: String,
    pub prefix: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub saves: SlotStoreConfig,
    pub screenshots: ScreenshotConfig,
    pub log_file: Option<PathBuf>,
}

impl PickerConfig {
    pub fn builtin() -> Self {
        Self {
            saves: SlotStoreConfig {
                dir: "savegames/".to_string(),
                extension: "gam".to_string(),
                capacity: DEFAULT_SLOT_CAPACITY,
                matching: ExtensionMatch::Substring,
                companions: vec!["es".to_string()],
            },
            screenshots: ScreenshotConfig {
                dir: "screenshots".to_string(),
                prefix: "screenshot".to_string(),
                extension: "txt".to_string(),
            },
            log_file: None,
        }
    }

    /// Point the picker at another save directory, keeping the trailing
    /// separator that path construction relies on. A blank directory is
    /// stored as-is so validation rejects it instead of it becoming `/`.
    pub fn set_save_dir(&mut self, dir: &str) {
        let mut dir = dir.to_string();
        if !dir.trim().is_empty() && !dir.ends_with('/') {
            dir.push('/');
        }
        self.saves.dir = dir;
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator::validate_config;

    #[test]
    fn save_dir_gets_one_trailing_separator() {
        let mut config = PickerConfig::builtin();
        config.set_save_dir("multiplay/saves");
        assert_eq!(config.saves.dir, "multiplay/saves/");
        config.set_save_dir("saves/");
        assert_eq!(config.saves.dir, "saves/");
    }

    #[test]
    fn blank_save_dir_does_not_become_root() {
        for blank in ["", "  "] {
            let mut config = PickerConfig::builtin();
            config.set_save_dir(blank);
            assert_ne!(config.saves.dir, "/");
            assert!(validate_config(&config).is_err(), "{blank:?} accepted");
        }
    }
}
