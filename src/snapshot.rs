use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};
use crate::game::ChessGame;
use crate::piece::Piece;
use crate::position::Position;
use crate::team::Team;

/// One persisted piece row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub team: Team,
    pub symbol: String,
    pub position: Position,
}

impl From<&Piece> for PieceRecord {
    fn from(p: &Piece) -> Self {
        Self { team: p.team(), symbol: p.symbol(), position: p.position() }
    }
}

impl PieceRecord {
    pub fn to_piece(&self) -> Result<Piece> {
        let piece = Piece::from_symbol(&self.symbol, self.position)?;
        if piece.team() != self.team {
            return Err(ChessError::InvalidSymbol(format!("{} for team {}", self.symbol, self.team)));
        }
        Ok(piece)
    }
}

/// Everything needed to resume a game: the pieces and the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: Team,
    pub pieces: Vec<PieceRecord>,
}

impl GameSnapshot {
    pub fn capture(game: &ChessGame) -> Self {
        Self { turn: game.turn(), pieces: game.board().all_pieces().map(PieceRecord::from).collect() }
    }

    pub fn restore(&self) -> Result<ChessGame> {
        let pieces = self.pieces.iter().map(PieceRecord::to_piece).collect::<Result<Vec<_>>>()?;
        ChessGame::resume(pieces, self.turn)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
