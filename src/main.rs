use anyhow::Result;
use chessrules::console::ConsoleSession;
use chessrules::service::ChessService;
use chessrules::store::{GameId, GameStore, JsonDirStore, MemoryStore};
use chessrules::Team;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play two-player chess on the console", long_about = None)]
struct Args {
    /// Directory holding saved games; games are kept in memory when omitted
    #[arg(long)]
    store: Option<PathBuf>,

    /// Resume this saved game id on `start`
    #[arg(long)]
    game: Option<u64>,

    /// Fix board orientation: 'w' or 'b' (default follows the side to move)
    #[arg(long)]
    perspective: Option<String>,
}

fn run<S: GameStore>(store: S, args: &Args) -> Result<()> {
    let mut session = ConsoleSession::new(ChessService::new(store));
    if let Some(id) = args.game {
        session = session.resume(GameId(id));
    }
    if let Some(p) = &args.perspective {
        let team: Team = p.parse()?;
        if !team.is_player() {
            anyhow::bail!("Invalid perspective: use 'w' or 'b'");
        }
        session = session.with_perspective(team);
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run_loop(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.store {
        Some(dir) => {
            log::info!("using game store at {}", dir.display());
            run(JsonDirStore::open(dir)?, &args)
        }
        None => {
            if args.game.is_some() {
                anyhow::bail!("--game needs --store to load from");
            }
            run(MemoryStore::new(), &args)
        }
    }
}
