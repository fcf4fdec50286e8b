use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::app::controller::AppController;
use crate::cli::Cli;
use crate::config::loader::load_or_builtin;
use crate::config::PickerConfig;
use crate::error::{Context, Result};

/// Entry point used by `main`: resolve configuration, start logging and run
/// the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    init_logging(config.log_file.as_deref())?;

    let controller = AppController::new(config)?;
    controller.run(cli.command, &mut io::stdout().lock())
}

/// Config file (or builtin defaults) with command-line overrides applied.
pub fn resolve_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = load_or_builtin(cli.config.as_deref())?;
    if let Some(dir) = &cli.dir {
        config.set_save_dir(dir);
    }
    if let Some(ext) = &cli.ext {
        config.saves.extension = ext.trim_start_matches('.').to_string();
    }
    Ok(config)
}

/// `RUST_LOG` controls verbosity (default `warn`). With a log file the
/// output goes there so it does not tear the picker screen.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    // A logger may already be installed when embedded; keep it.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = Cli::parse_from(["savepick", "-d", "elsewhere", "-e", ".sav", "list"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.saves.dir, "elsewhere/");
        assert_eq!(config.saves.extension, "sav");
        assert_eq!(config.saves.capacity, 36);
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.json");
        fs::write(&path, r#"{ "saves": { "dir": "mysaves/", "capacity": 12 } }"#).unwrap();

        let cli = Cli::parse_from(["savepick", "-c", path.to_str().unwrap(), "list"]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.saves.dir, "mysaves/");
        assert_eq!(config.saves.capacity, 12);
        assert_eq!(config.saves.extension, "gam");
    }

    #[test]
    fn empty_dir_override_is_refused() {
        let cli = Cli::parse_from(["savepick", "-d", "", "list"]);
        let config = resolve_config(&cli).unwrap();
        assert!(AppController::new(config).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["savepick", "-c", "/nonexistent/picker.json", "list"]);
        assert!(resolve_config(&cli).is_err());
    }
}
