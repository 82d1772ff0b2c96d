use chessrules::snapshot::{GameSnapshot, PieceRecord};
use chessrules::{ChessError, ChessGame, Position, Team};
use pretty_assertions::assert_eq;

fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}

#[test]
fn capture_and_restore_preserve_pieces_and_turn() {
    let mut game = ChessGame::new();
    for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")] {
        game.move_piece(sq(from), sq(to)).unwrap();
    }
    let snap = GameSnapshot::capture(&game);
    assert_eq!(snap.turn, Team::Black);
    assert_eq!(snap.pieces.len(), 31);
    let json = snap.to_json().unwrap();
    let restored = GameSnapshot::from_json(&json).unwrap().restore().unwrap();
    assert_eq!(restored, game);
}

#[test]
fn json_uses_names_for_teams_and_squares() {
    let snap = GameSnapshot::capture(&ChessGame::new());
    let v: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(v["turn"], "white");
    assert_eq!(v["pieces"][0], serde_json::json!({ "team": "white", "symbol": "r", "position": "a1" }));
    assert_eq!(v["pieces"][3], serde_json::json!({ "team": "black", "symbol": "R", "position": "a8" }));
}

#[test]
fn symbol_must_match_recorded_team() {
    let snap = GameSnapshot {
        turn: Team::White,
        pieces: vec![PieceRecord { team: Team::White, symbol: "K".into(), position: sq("e1") }],
    };
    assert!(matches!(snap.restore(), Err(ChessError::InvalidSymbol(_))));
}

#[test]
fn malformed_json_is_a_storage_error() {
    assert!(matches!(GameSnapshot::from_json("{\"turn\": \"white\""), Err(ChessError::Storage(_))));
    let bad_square = r#"{"turn":"white","pieces":[{"team":"white","symbol":"k","position":"z9"}]}"#;
    assert!(matches!(GameSnapshot::from_json(bad_square), Err(ChessError::Storage(_))));
}

#[test]
fn neutral_turn_cannot_be_restored() {
    let snap = GameSnapshot { turn: Team::None, pieces: Vec::new() };
    assert!(matches!(snap.restore(), Err(ChessError::InvalidTeam(_))));
}
