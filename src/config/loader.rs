use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::error::{Context, Result};
use crate::slots::listing::ExtensionMatch;

use super::{validator, PickerConfig, ScreenshotConfig, SlotStoreConfig};

/// Read a JSON configuration file, filling omitted fields from the builtin
/// defaults, and validate the result.
pub fn load_config(path: &Path) -> Result<PickerConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read picker config at {}", path.display()))?;

    let config = parse_config(&json)
        .with_context(|| format!("failed to parse picker config at {}", path.display()))?;

    validator::validate_config(&config)?;
    info!("Loaded picker config from {}", path.display());
    Ok(config)
}

/// Builtin defaults, or the file at `path` when one is given.
pub fn load_or_builtin(path: Option<&Path>) -> Result<PickerConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(PickerConfig::builtin()),
    }
}

fn parse_config(json: &str) -> serde_json::Result<PickerConfig> {
    let raw: RawPickerConfig = serde_json::from_str(json)?;
    Ok(raw.into_config())
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawPickerConfig {
    #[serde(default)]
    saves: RawSaves,
    #[serde(default)]
    screenshots: RawScreenshots,
    #[serde(default)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawSaves {
    dir: Option<String>,
    extension: Option<String>,
    capacity: Option<usize>,
    matching: Option<ExtensionMatch>,
    companions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawScreenshots {
    dir: Option<String>,
    prefix: Option<String>,
    extension: Option<String>,
}

impl RawPickerConfig {
    fn into_config(self) -> PickerConfig {
        let defaults = PickerConfig::builtin();
        let saves = self.saves;
        let shots = self.screenshots;

        let mut config = PickerConfig {
            saves: SlotStoreConfig {
                dir: defaults.saves.dir,
                extension: saves.extension.unwrap_or(defaults.saves.extension),
                capacity: saves.capacity.unwrap_or(defaults.saves.capacity),
                matching: saves.matching.unwrap_or(defaults.saves.matching),
                companions: saves.companions.unwrap_or(defaults.saves.companions),
            },
            screenshots: ScreenshotConfig {
                dir: shots.dir.unwrap_or(defaults.screenshots.dir),
                prefix: shots.prefix.unwrap_or(defaults.screenshots.prefix),
                extension: shots.extension.unwrap_or(defaults.screenshots.extension),
            },
            log_file: self.log_file,
        };
        if let Some(dir) = saves.dir {
            config.set_save_dir(&dir);
        }
        config
    }
}
