use thiserror::Error;

use crate::position::Position;
use crate::store::GameId;
use crate::team::Team;

pub type Result<T> = std::result::Result<T, ChessError>;

/// Every way a request against the engine (or its collaborators) can be refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChessError {
    #[error("invalid position format: {0:?}")]
    InvalidPositionFormat(String),
    #[error("invalid piece symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("invalid team: {0:?}")]
    InvalidTeam(String),
    #[error("invalid command: {0:?}")]
    InvalidCommand(String),
    #[error("no piece at {0}")]
    NoPieceAtSource(Position),
    #[error("piece at {at} does not belong to {turn}, whose turn it is")]
    NotYourTurn { at: Position, turn: Team },
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },
    #[error("the game is already over")]
    GameOver,
    #[error("more than one piece placed on {0}")]
    DuplicatePosition(Position),
    #[error("{0} already has a king on the board")]
    DuplicateKing(Team),
    #[error("game {0} does not exist")]
    GameNotFound(GameId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ChessError {
    fn from(e: std::io::Error) -> Self {
        ChessError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ChessError {
    fn from(e: serde_json::Error) -> Self {
        ChessError::Storage(e.to_string())
    }
}
