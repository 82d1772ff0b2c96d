use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ChessError, Result};
use crate::game::ChessGame;
use crate::score::calculate_score;
use crate::team::Team;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub winner: Option<Team>,
    pub white_score: f64,
    pub black_score: f64,
}

/// Plays `params.games` games of uniformly random candidate moves.
/// Same seed, same games.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    (0..params.games).map(|_| play_random_game(&mut rng, params.max_plies)).collect()
}

fn play_random_game(rng: &mut SmallRng, max_plies: usize) -> GameRecord {
    let mut game = ChessGame::new();
    let mut moves = Vec::new();
    while moves.len() < max_plies && !game.is_over() {
        let candidates = game.available_moves();
        if candidates.is_empty() {
            break;
        }
        let (from, to) = candidates[rng.gen_range(0..candidates.len())];
        if game.move_piece(from, to).is_err() {
            break;
        }
        moves.push(format!("{from}{to}"));
    }
    let score = calculate_score(&game.pieces(), &Team::players());
    debug!("self-play game finished after {} plies, winner {:?}", moves.len(), game.winner());
    GameRecord {
        moves,
        winner: game.winner(),
        white_score: score[&Team::White],
        black_score: score[&Team::Black],
    }
}

/// Replays a record's moves from the standard setup.
pub fn replay(record: &GameRecord) -> Result<ChessGame> {
    let mut game = ChessGame::new();
    for mv in &record.moves {
        let (Some(from), Some(to)) = (mv.get(..2), mv.get(2..)) else {
            return Err(ChessError::InvalidCommand(mv.clone()));
        };
        game.move_piece(from.parse()?, to.parse()?)?;
    }
    Ok(game)
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        writeln!(w, "{}", serde_json::to_string(g)?)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
