//! Difficulty levels.

use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// How far ahead the engine looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// No lookahead: plays a random legal column.
    Laughable,
    Easy,
    Modest,
    #[default]
    Hard,
    Brutal,
}

impl Difficulty {
    /// All levels, in menu order.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Laughable,
        Difficulty::Easy,
        Difficulty::Modest,
        Difficulty::Hard,
        Difficulty::Brutal,
    ];

    /// Search depth in plies.
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Laughable => 0,
            Difficulty::Easy => 1,
            Difficulty::Modest => 2,
            Difficulty::Hard => 4,
            Difficulty::Brutal => 8,
        }
    }

    /// Menu number, 1 to 5.
    pub const fn level(self) -> u8 {
        self as u8 + 1
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Laughable => "Laughable",
            Difficulty::Easy => "Easy",
            Difficulty::Modest => "Modest",
            Difficulty::Hard => "Hard",
            Difficulty::Brutal => "Brutal",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| trimmed.parse::<u8>() == Ok(d.level()))
            .ok_or_else(|| CliError::InvalidDifficulty {
                value: trimmed.to_string(),
            })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.level())
    }
}
