use std::io::Write;

use log::{info, warn};

use crate::cli::Commands;
use crate::config::validator::validate_config;
use crate::config::PickerConfig;
use crate::error::{AppError, Context, Result};
use crate::slots::{list_slots, sanitize, Picker, PickerMode, SessionHooks};
use crate::storage::delete::is_save_name;
use crate::storage::{delete_save, DirWatcher, FsStore, SaveStore};
use crate::ui::components::TerminalBell;
use crate::ui::run_slot_picker;
use crate::utils::format_save_time;

/// Stand-in for a running game: records when it would be paused.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggedPause;

impl SessionHooks for LoggedPause {
    fn suspend(&mut self, mode: PickerMode) {
        info!("game paused for {mode:?}");
    }

    fn resume(&mut self, mode: PickerMode) {
        info!("game resumed after {mode:?}");
    }
}

/// Runs CLI commands against one validated configuration.
pub struct AppController {
    config: PickerConfig,
}

impl AppController {
    pub fn new(config: PickerConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn run(&self, command: Commands, out: &mut impl Write) -> Result<()> {
        match command {
            Commands::Load { mode, title } => self.pick(mode.into(), title, out),
            Commands::Save { mode, title } => self.pick(mode.into(), title, out),
            Commands::List => self.list(&FsStore, out),
            Commands::Sanitize { text } => self.sanitize(&FsStore, &text, out),
            Commands::Delete { name } => self.delete(&mut FsStore, &name, out),
        }
    }

    fn pick(&self, mode: PickerMode, title: Option<String>, out: &mut impl Write) -> Result<()> {
        let saves = &self.config.saves;
        let mut store = FsStore;
        // The watcher needs the directory before the picker opens.
        store
            .create_dir_all(&saves.dir)
            .with_context(|| format!("Failed to create save directory {}", saves.dir))?;

        let watcher = match DirWatcher::new(&saves.dir) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                warn!("Not watching {} for changes: {err}", saves.dir);
                None
            }
        };

        let title = title.unwrap_or_else(|| mode.default_title().to_string());
        let mut picker = Picker::new(store, TerminalBell, LoggedPause, saves.clone());
        match run_slot_picker(
            &mut picker,
            mode,
            &title,
            &self.config.screenshots,
            watcher.as_ref(),
        )? {
            Some(path) => writeln!(out, "{path}")?,
            None => info!("picker closed without a choice"),
        }
        Ok(())
    }

    fn list<S: SaveStore + ?Sized>(&self, store: &S, out: &mut impl Write) -> Result<()> {
        let saves = &self.config.saves;
        let listing = list_slots(store, &saves.namespace(), saves.capacity, saves.matching);
        if listing.is_empty() {
            writeln!(out, "No saves in {}", saves.dir)?;
            return Ok(());
        }

        let width = listing
            .iter()
            .map(|save| save.display_name.chars().count())
            .max()
            .unwrap_or(0);
        for (index, save) in listing.iter().enumerate() {
            writeln!(
                out,
                "{:>2}  {:<width$}  {}",
                index + 1,
                save.display_name,
                format_save_time(save.modified)
            )?;
        }
        Ok(())
    }

    fn sanitize<S: SaveStore + ?Sized>(
        &self,
        store: &S,
        text: &str,
        out: &mut impl Write,
    ) -> Result<()> {
        let name = sanitize(text);
        let path = self.config.saves.namespace().path_for(name.as_str());
        writeln!(out, "{name}")?;
        writeln!(out, "{path}")?;
        if store.exists(&path) {
            writeln!(out, "(a save with this name already exists)")?;
        }
        Ok(())
    }

    fn delete<S: SaveStore + ?Sized>(
        &self,
        store: &mut S,
        name: &str,
        out: &mut impl Write,
    ) -> Result<()> {
        let saves = &self.config.saves;
        if !is_save_name(name) {
            return Err(AppError::message(format!("{name:?} is not a save name")));
        }
        let path = saves.namespace().path_for(name);
        if !store.exists(&path) {
            return Err(AppError::message(format!("No save named {name:?} in {}", saves.dir)));
        }

        let summary = delete_save(store, &path, &saves.companions);
        for removed in &summary.removed {
            writeln!(out, "removed {removed}")?;
        }
        if summary.is_clean() {
            return Ok(());
        }

        let failures: Vec<String> = summary
            .failed
            .iter()
            .map(|(path, reason)| format!("{path}: {reason}"))
            .collect();
        Err(AppError::message(format!(
            "Could not delete everything for {name:?}:\n{}",
            failures.join("\n")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use std::fs;

    fn controller() -> AppController {
        let mut config = PickerConfig::builtin();
        config.set_save_dir("saves");
        AppController::new(config).unwrap()
    }

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = PickerConfig::builtin();
        config.saves.capacity = 0;
        assert!(AppController::new(config).is_err());
    }

    #[test]
    fn lists_saves_in_directory_order() {
        let mut store = MemoryStore::new();
        store.add_dir("saves");
        store.add_file("saves/Campaign.gam", 10);
        store.add_file("saves/Campaign.es", 10);
        store.add_file("saves/Rush.gam", 20);

        let text = output(|out| controller().list(&store, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "{text}");
        assert!(lines[0].starts_with(" 1  Campaign"), "{text}");
        assert!(lines[1].starts_with(" 2  Rush"), "{text}");
    }

    #[test]
    fn empty_listing_says_so() {
        let store = MemoryStore::new();
        let text = output(|out| controller().list(&store, out));
        assert_eq!(text, "No saves in saves/\n");
    }

    #[test]
    fn sanitize_prints_name_and_path() {
        let mut store = MemoryStore::new();
        store.add_file("saves/My_Save.gam", 1);

        let text = output(|out| controller().sanitize(&store, "  My/Save ", out));
        assert_eq!(
            text,
            "My_Save\nsaves/My_Save.gam\n(a save with this name already exists)\n"
        );
    }

    #[test]
    fn delete_removes_save_and_companions() {
        let mut store = MemoryStore::new();
        store.add_file("saves/Rush.gam", 1);
        store.add_file("saves/Rush.es", 1);
        store.add_file("saves/Other.gam", 1);

        let text = output(|out| controller().delete(&mut store, "Rush", out));
        assert!(text.contains("removed saves/Rush.gam"), "{text}");
        assert!(text.contains("removed saves/Rush.es"), "{text}");
        assert!(!store.exists("saves/Rush.gam"));
        assert!(store.exists("saves/Other.gam"));
    }

    #[test]
    fn delete_of_unknown_save_fails() {
        let mut store = MemoryStore::new();
        let mut out = Vec::new();
        let err = controller()
            .delete(&mut store, "Ghost", &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn delete_of_nameless_save_leaves_directory_alone() {
        let mut store = MemoryStore::new();
        store.add_dir("saves");
        store.add_file("saves/.gam", 1);
        store.add_file("saves/Campaign.gam", 1);

        for name in ["", ".", ".."] {
            let mut out = Vec::new();
            let err = controller().delete(&mut store, name, &mut out).unwrap_err();
            assert!(err.to_string().contains("not a save name"), "{err}");
            assert!(out.is_empty());
        }
        assert!(store.deleted.is_empty());
        assert!(store.exists("saves/Campaign.gam"));
    }

    #[test]
    fn cli_delete_of_empty_name_keeps_saves_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gam"), b"x").unwrap();
        fs::write(dir.path().join("Rush.gam"), b"x").unwrap();

        let mut config = PickerConfig::builtin();
        config.set_save_dir(dir.path().to_str().unwrap());
        let controller = AppController::new(config).unwrap();

        let mut out = Vec::new();
        let result = controller.run(
            Commands::Delete {
                name: String::new(),
            },
            &mut out,
        );
        assert!(result.is_err());
        assert!(dir.path().join("Rush.gam").exists());
        assert!(dir.path().join(".gam").exists());
    }

    #[test]
    fn run_dispatches_to_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Base.gam"), b"save").unwrap();

        let mut config = PickerConfig::builtin();
        config.set_save_dir(dir.path().to_str().unwrap());
        let controller = AppController::new(config).unwrap();

        let text = output(|out| controller.run(Commands::List, out));
        assert!(text.starts_with(" 1  Base"), "{text}");

        let text = output(|out| {
            controller.run(
                Commands::Delete {
                    name: "Base".to_string(),
                },
                out,
            )
        });
        assert!(text.contains("Base.gam"), "{text}");
        assert!(!dir.path().join("Base.gam").exists());
    }
}
