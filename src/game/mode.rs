use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the game was started from the menu.
///
/// Both modes alternate turns between people at the same keyboard; there is
/// no computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::SinglePlayer, GameMode::TwoPlayer];

    pub fn label(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single Player",
            GameMode::TwoPlayer => "Two Player",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "single_player" => Ok(GameMode::SinglePlayer),
            "two" | "two_player" => Ok(GameMode::TwoPlayer),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}
