/// Where the picker was opened from and what it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerMode {
    LoadFrontend,
    LoadMissionEnd,
    LoadInGame,
    SaveMissionEnd,
    SaveInGame,
}

impl PickerMode {
    pub fn is_load(self) -> bool {
        matches!(
            self,
            PickerMode::LoadFrontend | PickerMode::LoadMissionEnd | PickerMode::LoadInGame
        )
    }

    /// The save screen was brought up from the mission results screen.
    pub fn saves_in_mission_results(self) -> bool {
        self == PickerMode::SaveMissionEnd
    }

    /// The save screen was brought up in the middle of a mission.
    pub fn saves_mid_mission(self) -> bool {
        self == PickerMode::SaveInGame
    }

    /// Opened over a running game, which must be paused meanwhile.
    pub fn suspends_game(self) -> bool {
        matches!(self, PickerMode::LoadInGame | PickerMode::SaveInGame)
    }

    pub fn default_title(self) -> &'static str {
        if self.is_load() {
            "Load Saved Game"
        } else {
            "Save Game"
        }
    }
}
