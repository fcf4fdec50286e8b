use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::slots::PickerMode;

#[derive(Parser, Debug)]
#[command(name = "savepick")]
#[command(about = "Pick, name and manage save-game slots from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file; builtin defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the save directory
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Override the save extension
    #[arg(short, long)]
    pub ext: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose a save to load
    Load {
        #[arg(short, long, value_enum, default_value_t = LoadMode::Frontend)]
        mode: LoadMode,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// Choose or name a slot to save into
    Save {
        #[arg(short, long, value_enum, default_value_t = SaveMode::InGame)]
        mode: SaveMode,

        #[arg(short, long)]
        title: Option<String>,
    },

    /// List saves with their modification times
    List,

    /// Show the file name a typed save name would get
    Sanitize {
        text: String,
    },

    /// Delete a save together with its companion files
    Delete {
        /// Save name as shown in the picker
        name: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    Frontend,
    MissionEnd,
    InGame,
}

impl From<LoadMode> for PickerMode {
    fn from(mode: LoadMode) -> Self {
        match mode {
            LoadMode::Frontend => PickerMode::LoadFrontend,
            LoadMode::MissionEnd => PickerMode::LoadMissionEnd,
            LoadMode::InGame => PickerMode::LoadInGame,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    MissionEnd,
    InGame,
}

impl From<SaveMode> for PickerMode {
    fn from(mode: SaveMode) -> Self {
        match mode {
            SaveMode::MissionEnd => PickerMode::SaveMissionEnd,
            SaveMode::InGame => PickerMode::SaveInGame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides_and_modes() {
        let cli = Cli::parse_from([
            "savepick",
            "-d",
            "/tmp/saves",
            "-e",
            "sav",
            "load",
            "--mode",
            "mission-end",
        ]);
        assert_eq!(cli.dir.as_deref(), Some("/tmp/saves"));
        assert_eq!(cli.ext.as_deref(), Some("sav"));
        match cli.command {
            Commands::Load { mode, title } => {
                assert_eq!(PickerMode::from(mode), PickerMode::LoadMissionEnd);
                assert_eq!(title, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn save_defaults_to_in_game() {
        let cli = Cli::parse_from(["savepick", "save", "--title", "Quick Save"]);
        match cli.command {
            Commands::Save { mode, title } => {
                assert_eq!(PickerMode::from(mode), PickerMode::SaveInGame);
                assert_eq!(title.as_deref(), Some("Quick Save"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
