// Two-player chess rule engine plus the collaborators that drive it
pub mod position;
pub mod team;
pub mod piece;
pub mod board;
pub mod game;
pub mod score;
pub mod error;

pub mod command;
pub mod display;
pub mod snapshot;
pub mod store;
pub mod service;
pub mod console;
pub mod perft;
pub mod selfplay;

pub use board::Board;
pub use error::{ChessError, Result};
pub use game::ChessGame;
pub use piece::{Piece, PieceType};
pub use position::Position;
pub use team::Team;
