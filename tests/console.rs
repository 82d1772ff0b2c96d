use chessrules::console::ConsoleSession;
use chessrules::service::ChessService;
use chessrules::store::{GameId, MemoryStore};
use chessrules::Team;

fn run(script: &str, perspective: Option<Team>) -> String {
    let mut session = ConsoleSession::new(ChessService::new(MemoryStore::new()));
    if let Some(team) = perspective {
        session = session.with_perspective(team);
    }
    let mut out = Vec::new();
    session.run_loop(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_plays_reports_and_stops_at_end() {
    let out = run("move a2 a3\nstart\nmove e2 e4\nmove e2 e3\nstatus\nend\nmove a7 a6\n", Some(Team::White));
    assert!(out.contains("no game in progress, type start"));
    assert!(out.contains("game 1"));
    assert!(out.contains("error: no piece at e2"));
    assert!(out.contains("white: 38"));
    assert!(out.contains("black: 38"));
    assert!(out.contains("turn: black"));
    // Nothing after `end` is processed.
    assert!(!out.contains("a7"));
    // White's view after 1. e4: the pawn sits on rank 4.
    assert!(out.contains("4 ....♙..."));
}

#[test]
fn unknown_commands_are_reported_and_skipped() {
    let out = run("start\nfly e2 e4\nmove e2 e4\n", None);
    assert!(out.contains("error: invalid command: \"fly e2 e4\""));
    // Board follows the side to move, so black's rank 1 is printed first after white moved.
    assert!(out.lines().any(|l| l == "1 ♖♘♗♔♕♗♘♖"));
}

#[test]
fn resuming_a_missing_game_reports_only_the_error() {
    let mut session = ConsoleSession::new(ChessService::new(MemoryStore::new())).resume(GameId(7));
    let mut out = Vec::new();
    session.run_loop("start\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("error: game 7 does not exist"));
    assert!(!out.lines().any(|l| l == "game 7"));
    assert!(!out.contains("abcdefgh"));
}
