use std::str::FromStr;

use crate::error::ChessError;
use crate::position::Position;

/// A parsed `move <source> <target>` request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveCommand {
    source: Position,
    target: Position,
}

impl MoveCommand {
    pub fn new(source: Position, target: Position) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> Position {
        self.source
    }

    pub fn target(&self) -> Position {
        self.target
    }
}

impl FromStr for MoveCommand {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Command>()? {
            Command::Move(m) => Ok(m),
            _ => Err(ChessError::InvalidCommand(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Move(MoveCommand),
    Status,
    End,
}

impl FromStr for Command {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let keyword = tokens.next().map(|t| t.to_ascii_lowercase());
        let args: Vec<&str> = tokens.collect();
        let command = match (keyword.as_deref(), args.as_slice()) {
            (Some("start"), []) => Command::Start,
            (Some("status"), []) => Command::Status,
            (Some("end"), []) => Command::End,
            (Some("move"), [source, target]) => Command::Move(MoveCommand::new(source.parse()?, target.parse()?)),
            _ => return Err(ChessError::InvalidCommand(s.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!("  END ".parse::<Command>(), Ok(Command::End));
        assert_eq!("status".parse::<Command>(), Ok(Command::Status));
    }

    #[test]
    fn parses_move_positions() {
        let m: MoveCommand = "move b2 b3".parse().unwrap();
        assert_eq!(m.source().name(), "b2");
        assert_eq!(m.target().name(), "b3");
    }

    #[test]
    fn reports_bad_squares_and_shapes() {
        assert_eq!("move b2 z9".parse::<Command>(), Err(ChessError::InvalidPositionFormat("z9".into())));
        assert_eq!("move b2".parse::<Command>(), Err(ChessError::InvalidCommand("move b2".into())));
        assert_eq!("jump".parse::<Command>(), Err(ChessError::InvalidCommand("jump".into())));
        assert_eq!("start".parse::<MoveCommand>(), Err(ChessError::InvalidCommand("start".into())));
    }
}
