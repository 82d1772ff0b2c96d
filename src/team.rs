use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// The two sides, plus a `None` sentinel reported for empty squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    White,
    Black,
    None,
}

impl Team {
    pub const fn values() -> [Team; 3] {
        [Team::White, Team::Black, Team::None]
    }

    pub const fn players() -> [Team; 2] {
        [Team::White, Team::Black]
    }

    pub fn opposite(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
            Team::None => Team::None,
        }
    }

    pub fn is_player(self) -> bool {
        self != Team::None
    }

    /// Rank step of a pawn moving "forward".
    pub(crate) fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
            Team::None => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
            Team::None => "none",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Team::White),
            "black" | "b" => Ok(Team::Black),
            "none" => Ok(Team::None),
            _ => Err(ChessError::InvalidTeam(s.to_string())),
        }
    }
}
