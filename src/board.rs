use std::collections::BTreeMap;

use log::debug;

use crate::error::{ChessError, Result};
use crate::piece::{Piece, PieceType};
use crate::position::Position;
use crate::team::Team;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Occupancy of the 64 squares. The only place pieces are moved or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    squares: BTreeMap<Position, Piece>,
}

impl Board {
    /// Standard initial setup, 16 pieces per side.
    pub fn standard() -> Self {
        let mut squares = BTreeMap::new();
        for at in Position::all() {
            let (team, kind) = match at.rank() {
                0 => (Team::White, BACK_RANK[at.file() as usize]),
                1 => (Team::White, PieceType::Pawn),
                6 => (Team::Black, PieceType::Pawn),
                7 => (Team::Black, BACK_RANK[at.file() as usize]),
                _ => continue,
            };
            squares.insert(at, Piece::placed(kind, team, at));
        }
        debug_assert_eq!(squares.len(), 32);
        Self { squares }
    }

    /// Rebuilds a board from persisted pieces, refusing stacked squares and extra kings.
    pub fn from_pieces<I: IntoIterator<Item = Piece>>(pieces: I) -> Result<Self> {
        let mut squares = BTreeMap::new();
        let mut kings: Vec<Team> = Vec::new();
        for piece in pieces {
            if piece.is_king() {
                if kings.contains(&piece.team()) {
                    return Err(ChessError::DuplicateKing(piece.team()));
                }
                kings.push(piece.team());
            }
            if squares.insert(piece.position(), piece).is_some() {
                return Err(ChessError::DuplicatePosition(piece.position()));
            }
        }
        Ok(Self { squares })
    }

    pub fn piece_at(&self, at: Position) -> Option<&Piece> {
        self.squares.get(&at)
    }

    /// Team occupying `at`, or `Team::None` when the square is empty.
    pub fn team_at(&self, at: Position) -> Team {
        self.squares.get(&at).map_or(Team::None, |p| p.team())
    }

    pub fn is_empty(&self, at: Position) -> bool {
        !self.squares.contains_key(&at)
    }

    /// Pieces ordered by position.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.values()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    pub fn kings(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.values().filter(|p| p.is_king())
    }

    /// Moves the `mover`'s piece from `from` to `to`, returning the captured piece if any.
    /// Nothing is changed unless every precondition holds.
    pub fn move_piece(&mut self, from: Position, to: Position, mover: Team) -> Result<Option<Piece>> {
        let illegal = ChessError::IllegalMove { from, to };
        let Some(piece) = self.squares.get(&from) else {
            return Err(illegal);
        };
        if piece.team() != mover || !piece.can_reach(to, self) {
            debug!("rejected {} {} -> {}", piece.symbol(), from, to);
            return Err(illegal);
        }
        let Some(mut piece) = self.squares.remove(&from) else {
            return Err(illegal);
        };
        piece.relocate(to);
        let captured = self.squares.insert(to, piece);
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn standard_setup_has_sixteen_per_side() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        for team in Team::players() {
            assert_eq!(board.all_pieces().filter(|p| p.team() == team).count(), 16);
        }
        assert_eq!(board.piece_at(sq("e1")).map(|p| (p.kind(), p.team())), Some((PieceType::King, Team::White)));
        assert_eq!(board.piece_at(sq("d8")).map(|p| (p.kind(), p.team())), Some((PieceType::Queen, Team::Black)));
    }

    #[test]
    fn move_rejects_wrong_mover_and_empty_source_untouched() {
        let mut board = Board::standard();
        let before = board.clone();
        assert_eq!(
            board.move_piece(sq("e2"), sq("e4"), Team::Black),
            Err(ChessError::IllegalMove { from: sq("e2"), to: sq("e4") })
        );
        assert_eq!(
            board.move_piece(sq("e4"), sq("e5"), Team::White),
            Err(ChessError::IllegalMove { from: sq("e4"), to: sq("e5") })
        );
        assert_eq!(board, before);
        assert_eq!(board.move_piece(sq("e2"), sq("e4"), Team::White), Ok(None));
    }
}
