use std::io::{self, BufRead, Write};

use log::debug;

use crate::command::{Command, MoveCommand};
use crate::display;
use crate::error::Result;
use crate::service::ChessService;
use crate::store::{GameId, GameStore};
use crate::team::Team;

pub const BANNER: &str = "> chess game\n> start: begin a game | end: quit | status: scores\n> move <source> <target>, e.g. move b2 b3";

/// Line-oriented driver: reads commands, answers on `out`.
pub struct ConsoleSession<S: GameStore> {
    service: ChessService<S>,
    game_id: Option<GameId>,
    /// Fixed orientation; `None` follows the side to move.
    perspective: Option<Team>,
}

impl<S: GameStore> ConsoleSession<S> {
    pub fn new(service: ChessService<S>) -> Self {
        Self { service, game_id: None, perspective: None }
    }

    /// Continues a stored game instead of creating one on `start`.
    pub fn resume(mut self, id: GameId) -> Self {
        self.game_id = Some(id);
        self
    }

    pub fn with_perspective(mut self, perspective: Team) -> Self {
        self.perspective = Some(perspective);
        self
    }

    pub fn game_id(&self) -> Option<GameId> {
        self.game_id
    }

    fn cmd_start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let id = match self.game_id {
            Some(id) => self.service.load(id)?.game_id,
            None => self.service.create_game()?.game_id,
        };
        self.game_id = Some(id);
        writeln!(out, "game {id}")?;
        self.print_board(out)
    }

    fn cmd_move<W: Write>(&mut self, mv: &MoveCommand, out: &mut W) -> Result<()> {
        let Some(id) = self.game_id else {
            writeln!(out, "no game in progress, type start")?;
            return Ok(());
        };
        let view = self.service.apply(id, mv)?;
        self.print_board(out)?;
        if let Some(winner) = view.winner {
            writeln!(out, "{winner} wins")?;
        }
        Ok(())
    }

    fn cmd_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(id) = self.game_id else {
            writeln!(out, "no game in progress, type start")?;
            return Ok(());
        };
        let view = self.service.load(id)?;
        for (team, score) in &view.scores {
            writeln!(out, "{team}: {score}")?;
        }
        writeln!(out, "turn: {}", view.turn)?;
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(id) = self.game_id else { return Ok(()) };
        let game = self.service.game(id)?;
        let perspective = self.perspective.unwrap_or(game.turn());
        write!(out, "{}", display::render(game.board(), perspective))?;
        Ok(())
    }

    // Ok(false) means the session should stop.
    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Start => self.cmd_start(out)?,
            Command::Move(mv) => self.cmd_move(&mv, out)?,
            Command::Status => self.cmd_status(out)?,
            Command::End => return Ok(false),
        }
        Ok(true)
    }

    /// Runs until `end` or end of input. Rejected commands are reported and the loop goes on.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let outcome = match line.parse::<Command>() {
                Ok(command) => self.dispatch(command, out),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    debug!("rejected {line:?}: {e}");
                    writeln!(out, "error: {e}")?;
                }
            }
        }
        Ok(())
    }
}
