use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{ChessError, Result};
use crate::position::Position;
use crate::team::Team;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const KING_OFFSETS: [(i8, i8); 8] = [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// White's (lowercase) letter.
    fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    fn from_letter(c: char) -> Option<PieceType> {
        PieceType::ALL.into_iter().find(|t| t.letter() == c.to_ascii_lowercase())
    }

    pub fn is_sliding(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    fn rays(self) -> &'static [(i8, i8)] {
        match self {
            PieceType::Bishop => &DIAGONALS,
            PieceType::Rook => &ORTHOGONALS,
            PieceType::Queen => &KING_OFFSETS,
            _ => &[],
        }
    }
}

/// A piece standing on the board. Only `Team::White` and `Team::Black` pieces exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    team: Team,
    position: Position,
}

impl Piece {
    pub fn new(kind: PieceType, team: Team, position: Position) -> Result<Self> {
        if !team.is_player() {
            return Err(ChessError::InvalidTeam(team.to_string()));
        }
        Ok(Self { kind, team, position })
    }

    // Callers guarantee `team` is White or Black.
    pub(crate) fn placed(kind: PieceType, team: Team, position: Position) -> Self {
        debug_assert!(team.is_player());
        Self { kind, team, position }
    }

    /// Rebuilds a piece from its persisted symbol: lowercase is White, uppercase is Black.
    pub fn from_symbol(symbol: &str, position: Position) -> Result<Self> {
        let mut chars = symbol.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ChessError::InvalidSymbol(symbol.to_string()));
        };
        let kind = PieceType::from_letter(c).ok_or_else(|| ChessError::InvalidSymbol(symbol.to_string()))?;
        let team = if c.is_ascii_lowercase() { Team::White } else { Team::Black };
        Ok(Self { kind, team, position })
    }

    pub fn symbol(&self) -> String {
        let c = self.kind.letter();
        match self.team {
            Team::Black => c.to_ascii_uppercase().to_string(),
            _ => c.to_string(),
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceType::King
    }

    pub(crate) fn relocate(&mut self, to: Position) {
        self.position = to;
    }

    fn is_enemy_at(&self, board: &Board, at: Position) -> bool {
        board.team_at(at) == self.team.opposite()
    }

    fn is_enterable(&self, board: &Board, at: Position) -> bool {
        board.team_at(at) != self.team
    }

    /// Squares this piece may move to from its current position, ignoring check.
    pub fn candidate_moves(&self, board: &Board) -> BTreeSet<Position> {
        let from = self.position;
        let mut out = BTreeSet::new();
        match self.kind {
            PieceType::Pawn => {
                let dir = self.team.forward();
                if let Some(one) = from.offset(0, dir) {
                    if board.is_empty(one) {
                        out.insert(one);
                        if self.on_pawn_start_rank() {
                            if let Some(two) = one.offset(0, dir) {
                                if board.is_empty(two) {
                                    out.insert(two);
                                }
                            }
                        }
                    }
                }
                for df in [-1, 1] {
                    if let Some(diag) = from.offset(df, dir) {
                        if self.is_enemy_at(board, diag) {
                            out.insert(diag);
                        }
                    }
                }
            }
            PieceType::Knight | PieceType::King => {
                let offsets = if self.kind == PieceType::Knight { &KNIGHT_OFFSETS } else { &KING_OFFSETS };
                for &(df, dr) in offsets {
                    if let Some(to) = from.offset(df, dr) {
                        if self.is_enterable(board, to) {
                            out.insert(to);
                        }
                    }
                }
            }
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                for &(df, dr) in self.kind.rays() {
                    let mut cur = from;
                    while let Some(next) = cur.offset(df, dr) {
                        if board.is_empty(next) {
                            out.insert(next);
                            cur = next;
                            continue;
                        }
                        if self.is_enemy_at(board, next) {
                            out.insert(next);
                        }
                        break;
                    }
                }
            }
        }
        out
    }

    /// Single-target form of [`Piece::candidate_moves`]; sliders check the line with `path_to`.
    pub fn can_reach(&self, to: Position, board: &Board) -> bool {
        let from = self.position;
        if from == to || !self.is_enterable(board, to) {
            return false;
        }
        let df = to.file() - from.file();
        let dr = to.rank() - from.rank();
        match self.kind {
            PieceType::Pawn => {
                let dir = self.team.forward();
                if df == 0 && dr == dir {
                    board.is_empty(to)
                } else if df == 0 && dr == 2 * dir && self.on_pawn_start_rank() {
                    from.path_to(to).into_iter().all(|p| board.is_empty(p)) && board.is_empty(to)
                } else if df.abs() == 1 && dr == dir {
                    self.is_enemy_at(board, to)
                } else {
                    false
                }
            }
            PieceType::Knight => KNIGHT_OFFSETS.contains(&(df, dr)),
            PieceType::King => KING_OFFSETS.contains(&(df, dr)),
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => match from.direction_to(to) {
                Some(dir) if self.kind.rays().contains(&dir) => {
                    from.path_to(to).into_iter().all(|p| board.is_empty(p))
                }
                _ => false,
            },
        }
    }

    fn on_pawn_start_rank(&self) -> bool {
        match self.team {
            Team::White => self.position.rank() == 1,
            Team::Black => self.position.rank() == 6,
            Team::None => false,
        }
    }
}
