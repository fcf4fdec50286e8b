use crate::error::{AppError, Result};

use super::{PickerConfig, ScreenshotConfig, SlotStoreConfig};

/// Validate a picker configuration and surface every problem at once.
pub fn validate_config(config: &PickerConfig) -> Result<()> {
    let mut issues = Vec::new();

    validate_saves(&config.saves, &mut issues);
    validate_screenshots(&config.screenshots, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "picker config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_saves(saves: &SlotStoreConfig, issues: &mut Vec<String>) {
    if saves.dir.trim().is_empty() {
        issues.push("saves.dir must not be empty".to_string());
    }

    // Display names drop the last four characters, i.e. `.` plus three.
    if saves.extension.len() != 3 || !saves.extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        issues.push(format!(
            "saves.extension `{}` must be exactly three ASCII letters or digits",
            saves.extension
        ));
    }

    if saves.capacity == 0 {
        issues.push("saves.capacity must be at least 1".to_string());
    }

    for companion in &saves.companions {
        if companion.is_empty() || companion.contains(['/', '\\', '.']) {
            issues.push(format!(
                "saves.companions entry `{companion}` must be a bare extension"
            ));
        } else if *companion == saves.extension {
            issues.push(format!(
                "saves.companions entry `{companion}` duplicates the save extension"
            ));
        }
    }
}

fn validate_screenshots(shots: &ScreenshotConfig, issues: &mut Vec<String>) {
    if shots.dir.trim().is_empty() {
        issues.push("screenshots.dir must not be empty".to_string());
    }
    if shots.prefix.trim().is_empty() {
        issues.push("screenshots.prefix must not be empty".to_string());
    }
    if shots.extension.is_empty() || shots.extension.contains(['/', '\\', '.']) {
        issues.push(format!(
            "screenshots.extension `{}` must be a bare extension",
            shots.extension
        ));
    }
}
