use chessrules::selfplay::{generate_games, write_records, SelfPlayParams};
use chessrules::Team;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chess-selfplay", about = "Play random games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 300)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, max_plies: a.max_plies, seed: a.seed };
    eprintln!("Generating {} games (max_plies={}, seed={})", a.games, a.max_plies, a.seed);
    let games = generate_games(&params);
    let decided = |t: Team| games.iter().filter(|g| g.winner == Some(t)).count();
    eprintln!("white wins: {} black wins: {} unfinished: {}", decided(Team::White), decided(Team::Black), games.iter().filter(|g| g.winner.is_none()).count());
    if let Some(dir) = a.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    write_records(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
