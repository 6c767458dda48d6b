use std::fmt;

/// Who sits at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Two humans take turns on one terminal
    #[value(name = "pvp")]
    PlayerVsPlayer,
    /// One human against the computer
    #[default]
    #[value(name = "ai")]
    PlayerVsEngine,
}

impl GameMode {
    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsEngine => "Player vs Computer",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsEngine,
            GameMode::PlayerVsEngine => GameMode::PlayerVsPlayer,
        }
    }

    pub fn uses_engine(self) -> bool {
        self == GameMode::PlayerVsEngine
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
