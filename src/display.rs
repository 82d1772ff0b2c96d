use crate::board::Board;
use crate::piece::{Piece, PieceType};
use crate::position::{Position, BOARD_SIZE};
use crate::team::Team;

pub const EMPTY: char = '.';

pub fn glyph(piece: &Piece) -> char {
    match (piece.team(), piece.kind()) {
        (Team::Black, PieceType::King) => '♚',
        (Team::Black, PieceType::Queen) => '♛',
        (Team::Black, PieceType::Rook) => '♜',
        (Team::Black, PieceType::Bishop) => '♝',
        (Team::Black, PieceType::Knight) => '♞',
        (Team::Black, PieceType::Pawn) => '♟',
        (_, PieceType::King) => '♔',
        (_, PieceType::Queen) => '♕',
        (_, PieceType::Rook) => '♖',
        (_, PieceType::Bishop) => '♗',
        (_, PieceType::Knight) => '♘',
        (_, PieceType::Pawn) => '♙',
    }
}

// Rows as seen by `perspective`: own back rank at the bottom.
fn rows(perspective: Team) -> Vec<Vec<Position>> {
    let ranks: Vec<i8> = (0..BOARD_SIZE).collect();
    let files: Vec<i8> = (0..BOARD_SIZE).collect();
    let (ranks, files): (Vec<i8>, Vec<i8>) = match perspective {
        Team::Black => (ranks, files.into_iter().rev().collect()),
        _ => (ranks.into_iter().rev().collect(), files),
    };
    ranks
        .iter()
        .map(|&r| files.iter().filter_map(|&f| Position::new(f, r)).collect())
        .collect()
}

/// 64 glyphs, row-major from the top of the board as `perspective` sees it.
pub fn glyphs(board: &Board, perspective: Team) -> Vec<char> {
    rows(perspective)
        .into_iter()
        .flatten()
        .map(|at| board.piece_at(at).map_or(EMPTY, glyph))
        .collect()
}

/// Text diagram with rank numbers on the left and file letters underneath.
pub fn render(board: &Board, perspective: Team) -> String {
    let mut out = String::new();
    let rows = rows(perspective);
    for row in &rows {
        let rank = row.first().map_or(0, |p| p.rank() + 1);
        out.push_str(&format!("{rank} "));
        for &at in row {
            out.push(board.piece_at(at).map_or(EMPTY, glyph));
        }
        out.push('\n');
    }
    out.push_str("  ");
    if let Some(last) = rows.last() {
        for at in last {
            out.push((b'a' + at.file() as u8) as char);
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_sees_black_back_rank_on_top() {
        let g = glyphs(&Board::standard(), Team::White);
        assert_eq!(g.len(), 64);
        assert_eq!(g[..8].iter().collect::<String>(), "♜♞♝♛♚♝♞♜");
        assert_eq!(g[56..].iter().collect::<String>(), "♖♘♗♕♔♗♘♖");
    }

    #[test]
    fn black_perspective_is_rotated() {
        let g = glyphs(&Board::standard(), Team::Black);
        assert_eq!(g[..8].iter().collect::<String>(), "♖♘♗♔♕♗♘♖");
        assert!(g[16..24].iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn render_labels_files_and_ranks() {
        let text = render(&Board::standard(), Team::White);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8 "));
        assert_eq!(lines[8], "  abcdefgh");
    }
}
