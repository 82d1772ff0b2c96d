use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

pub const BOARD_SIZE: i8 = 8;

/// A square on the 8x8 board. File 0 is `a`, rank 0 is `1`.
///
/// Ordering is by file first, then rank, so `a1 < a2 < ... < a8 < b1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    file: i8,
    rank: i8,
}

impl Position {
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// All 64 squares in (file, rank) order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Position { file, rank }))
    }

    #[inline]
    pub fn file(self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Position> {
        Position::new(self.file + df, self.rank + dr)
    }

    pub fn name(self) -> String {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        format!("{file}{rank}")
    }

    pub fn adjacent_positions(self) -> Vec<Position> {
        let mut out = Vec::with_capacity(8);
        for df in -1..=1 {
            for dr in -1..=1 {
                if df == 0 && dr == 0 {
                    continue;
                }
                if let Some(p) = self.offset(df, dr) {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Unit step from `self` towards `other` if the two share a rank, file or diagonal.
    pub fn direction_to(self, other: Position) -> Option<(i8, i8)> {
        let df = other.file - self.file;
        let dr = other.rank - self.rank;
        if df == 0 && dr == 0 {
            return None;
        }
        if df == 0 || dr == 0 || df.abs() == dr.abs() {
            Some((df.signum(), dr.signum()))
        } else {
            None
        }
    }

    /// Squares strictly between `self` and `other`, walking outward from `self`.
    /// Empty when the two are not on a common line.
    pub fn path_to(self, other: Position) -> Vec<Position> {
        let Some((df, dr)) = self.direction_to(other) else {
            return Vec::new();
        };
        let mut path = Vec::new();
        let mut cur = self;
        while let Some(next) = cur.offset(df, dr) {
            if next == other {
                break;
            }
            path.push(next);
            cur = next;
        }
        path
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || ChessError::InvalidPositionFormat(s.to_string());
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (f, r) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(invalid());
        }
        Ok(Position { file: (f - b'a') as i8, rank: (r - b'1') as i8 })
    }
}

impl TryFrom<String> for Position {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Position> for String {
    fn from(p: Position) -> String {
        p.name()
    }
}
