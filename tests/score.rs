use chessrules::score::{calculate_score, team_score};
use chessrules::{ChessGame, Piece, Position, Team};

fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}

fn pieces(symbols: &[(&str, &str)]) -> Vec<Piece> {
    symbols.iter().map(|(sym, at)| Piece::from_symbol(sym, sq(at)).unwrap()).collect()
}

#[test]
fn initial_setup_scores_thirty_eight_per_side() {
    let game = ChessGame::new();
    let score = calculate_score(&game.pieces(), &Team::players());
    assert_eq!(score.len(), 2);
    assert_eq!(score[&Team::White], 8.0 * 1.0 + 2.0 * 2.5 + 2.0 * 3.0 + 2.0 * 5.0 + 9.0);
    assert_eq!(score[&Team::White], score[&Team::Black]);
}

#[test]
fn doubled_pawns_count_half() {
    let set = pieces(&[("k", "e1"), ("p", "a2"), ("p", "a3"), ("p", "b2"), ("K", "e8"), ("Q", "d8")]);
    assert_eq!(team_score(&set, Team::White), 2.0);
    assert_eq!(team_score(&set, Team::Black), 9.0);
}

#[test]
fn tripled_pawns_also_count_half() {
    let set = pieces(&[("P", "c7"), ("P", "c6"), ("P", "c5"), ("p", "c2")]);
    assert_eq!(team_score(&set, Team::Black), 1.5);
    assert_eq!(team_score(&set, Team::White), 1.0);
}

#[test]
fn neutral_team_scores_zero() {
    let game = ChessGame::new();
    let score = calculate_score(&game.pieces(), &Team::values());
    assert_eq!(score[&Team::None], 0.0);
}

#[test]
fn pawn_capture_that_doubles_a_file_halves_both_pawns() {
    let mut game = ChessGame::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.move_piece(sq(from), sq(to)).unwrap();
    }
    let score = calculate_score(&game.pieces(), &Team::players());
    // White: d2 and d5 share a file.
    assert_eq!(score[&Team::White], 38.0 - 1.0);
    assert_eq!(score[&Team::Black], 37.0);
}
