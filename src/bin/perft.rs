use chessrules::perft::{divide, perft};
use chessrules::snapshot::GameSnapshot;
use chessrules::ChessGame;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Count candidate-move sequences from a position")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Snapshot JSON to start from (standard setup when omitted)
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print the node count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let base = match &args.snapshot {
        Some(path) => GameSnapshot::from_json(&std::fs::read_to_string(path)?)?.restore()?,
        None => ChessGame::new(),
    };

    if args.divide {
        for (mv, nodes) in divide(&base, args.depth) {
            println!("{mv}: {nodes}");
        }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || args.depth == 0 {
            perft(&base, args.depth)
        } else {
            base.available_moves()
                .par_iter()
                .map(|&(from, to)| {
                    let mut child = base.clone();
                    match child.move_piece(from, to) {
                        Ok(_) => perft(&child, args.depth - 1),
                        Err(_) => 0,
                    }
                })
                .sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
