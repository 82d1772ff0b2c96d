use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::command::MoveCommand;
use crate::display;
use crate::error::{ChessError, Result};
use crate::game::ChessGame;
use crate::score::calculate_score;
use crate::snapshot::GameSnapshot;
use crate::store::{GameId, GameStore};
use crate::team::Team;

/// What a client needs to draw a stored game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub game_id: GameId,
    pub turn: Team,
    /// 64 glyphs from the side to move's point of view.
    pub glyphs: Vec<char>,
    pub scores: BTreeMap<Team, f64>,
    pub winner: Option<Team>,
}

impl BoardView {
    pub fn of(game_id: GameId, game: &ChessGame) -> Self {
        Self {
            game_id,
            turn: game.turn(),
            glyphs: display::glyphs(game.board(), game.turn()),
            scores: calculate_score(&game.pieces(), &Team::players()),
            winner: game.winner(),
        }
    }
}

/// Create / move / load over an injected [`GameStore`].
pub struct ChessService<S: GameStore> {
    store: S,
}

impl<S: GameStore> ChessService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_game(&mut self) -> Result<BoardView> {
        let game = ChessGame::new();
        let id = self.store.insert(&GameSnapshot::capture(&game))?;
        Ok(BoardView::of(id, &game))
    }

    /// Parses `command` (e.g. `"move b2 b3"`), applies it and persists the result.
    /// Nothing is written when the move is rejected.
    pub fn move_piece(&mut self, id: GameId, command: &str) -> Result<BoardView> {
        let command: MoveCommand = command.parse()?;
        self.apply(id, &command)
    }

    pub fn apply(&mut self, id: GameId, command: &MoveCommand) -> Result<BoardView> {
        let mut game = self.game(id)?;
        game.apply(command)?;
        self.store.update(id, &GameSnapshot::capture(&game))?;
        Ok(BoardView::of(id, &game))
    }

    pub fn load(&self, id: GameId) -> Result<BoardView> {
        Ok(BoardView::of(id, &self.game(id)?))
    }

    pub fn game(&self, id: GameId) -> Result<ChessGame> {
        self.store.fetch(id)?.ok_or(ChessError::GameNotFound(id))?.restore()
    }
}
