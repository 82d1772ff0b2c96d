use crate::game::ChessGame;

// Counts move sequences of length `depth` over candidate moves. A captured king
// ends the line, so a finished game contributes no deeper nodes.
pub fn perft(game: &ChessGame, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for (from, to) in game.available_moves() {
        let mut child = game.clone();
        if child.move_piece(from, to).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Per-root-move node counts, in the order of [`ChessGame::available_moves`].
pub fn divide(game: &ChessGame, depth: u32) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    game.available_moves()
        .into_iter()
        .filter_map(|(from, to)| {
            let mut child = game.clone();
            child.move_piece(from, to).ok()?;
            Some((format!("{from}{to}"), perft(&child, depth - 1)))
        })
        .collect()
}
