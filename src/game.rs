use log::{debug, info};

use crate::board::Board;
use crate::command::MoveCommand;
use crate::error::{ChessError, Result};
use crate::piece::Piece;
use crate::position::Position;
use crate::team::Team;

/// Turn-taking state machine around a [`Board`].
///
/// The game ends when a king is captured; there is no check or checkmate detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    turn: Team,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard setup, White to move.
    pub fn new() -> Self {
        Self { board: Board::standard(), turn: Team::White }
    }

    /// Resumes a game from persisted pieces and the side to move.
    pub fn resume<I: IntoIterator<Item = Piece>>(pieces: I, turn: Team) -> Result<Self> {
        if !turn.is_player() {
            return Err(ChessError::InvalidTeam(turn.to_string()));
        }
        Ok(Self { board: Board::from_pieces(pieces)?, turn })
    }

    /// Applies one move for the side to move and hands over the turn.
    /// Returns the captured piece, if any. On error the game is left untouched.
    pub fn move_piece(&mut self, source: Position, target: Position) -> Result<Option<Piece>> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        let piece = self.board.piece_at(source).ok_or(ChessError::NoPieceAtSource(source))?;
        if piece.team() != self.turn {
            return Err(ChessError::NotYourTurn { at: source, turn: self.turn });
        }
        let captured = self.board.move_piece(source, target, self.turn)?;
        debug!(
            "{} {} -> {}{}",
            self.turn,
            source,
            target,
            captured.map(|c| format!(" captures {}", c.symbol())).unwrap_or_default()
        );
        self.turn = self.turn.opposite();
        if let Some(winner) = self.winner() {
            info!("king captured, {winner} wins");
        }
        Ok(captured)
    }

    pub fn apply(&mut self, command: &MoveCommand) -> Result<Option<Piece>> {
        self.move_piece(command.source(), command.target())
    }

    /// True once exactly one king is left on the board.
    pub fn is_over(&self) -> bool {
        self.board.kings().count() == 1
    }

    pub fn winner(&self) -> Option<Team> {
        let mut kings = self.board.kings();
        match (kings.next(), kings.next()) {
            (Some(king), None) => Some(king.team()),
            _ => None,
        }
    }

    /// Candidate targets of the piece on `source`, whoever owns it.
    pub fn candidate_moves_from(&self, source: Position) -> Result<Vec<Position>> {
        let piece = self.board.piece_at(source).ok_or(ChessError::NoPieceAtSource(source))?;
        Ok(piece.candidate_moves(&self.board).into_iter().collect())
    }

    /// Every `(source, target)` pair the side to move could play, in board order.
    pub fn available_moves(&self) -> Vec<(Position, Position)> {
        if self.is_over() {
            return Vec::new();
        }
        self.board
            .all_pieces()
            .filter(|p| p.team() == self.turn)
            .flat_map(|p| p.candidate_moves(&self.board).into_iter().map(move |to| (p.position(), to)))
            .collect()
    }

    pub fn pieces(&self) -> Vec<Piece> {
        self.board.all_pieces().copied().collect()
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn opening_has_twenty_moves() {
        assert_eq!(ChessGame::new().available_moves().len(), 20);
    }

    #[test]
    fn rejection_order_prefers_missing_piece_over_turn() {
        let mut game = ChessGame::new();
        assert_eq!(game.move_piece(sq("e4"), sq("e5")), Err(ChessError::NoPieceAtSource(sq("e4"))));
        assert_eq!(
            game.move_piece(sq("e7"), sq("e5")),
            Err(ChessError::NotYourTurn { at: sq("e7"), turn: Team::White })
        );
    }

    #[test]
    fn resume_rejects_neutral_turn() {
        assert!(matches!(ChessGame::resume(Vec::new(), Team::None), Err(ChessError::InvalidTeam(_))));
    }
}
