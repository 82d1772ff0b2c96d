use std::collections::BTreeMap;

use crate::piece::{Piece, PieceType};
use crate::team::Team;

const PAWN: f64 = 1.0;
const DOUBLED_PAWN: f64 = 0.5;
const KNIGHT: f64 = 2.5;
const BISHOP: f64 = 3.0;
const ROOK: f64 = 5.0;
const QUEEN: f64 = 9.0;
const KING: f64 = 0.0;

pub fn base_value(kind: PieceType) -> f64 {
    match kind {
        PieceType::Pawn => PAWN,
        PieceType::Knight => KNIGHT,
        PieceType::Bishop => BISHOP,
        PieceType::Rook => ROOK,
        PieceType::Queen => QUEEN,
        PieceType::King => KING,
    }
}

/// Material score of one team. Pawns sharing a file with another pawn of
/// the same team count half.
pub fn team_score<'a, I>(pieces: I, team: Team) -> f64
where
    I: IntoIterator<Item = &'a Piece>,
{
    if !team.is_player() {
        return 0.0;
    }
    let mut pawns_per_file = [0u32; 8];
    let mut score = 0.0;
    for piece in pieces.into_iter().filter(|p| p.team() == team) {
        if piece.kind() == PieceType::Pawn {
            pawns_per_file[piece.position().file() as usize] += 1;
        } else {
            score += base_value(piece.kind());
        }
    }
    for count in pawns_per_file {
        let each = if count > 1 { DOUBLED_PAWN } else { PAWN };
        score += each * count as f64;
    }
    score
}

pub fn calculate_score(pieces: &[Piece], teams: &[Team]) -> BTreeMap<Team, f64> {
    teams.iter().map(|&team| (team, team_score(pieces, team))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn standard_setup_is_thirty_eight_each() {
        let pieces: Vec<Piece> = Board::standard().all_pieces().copied().collect();
        let score = calculate_score(&pieces, &Team::values());
        assert_eq!(score[&Team::White], 38.0);
        assert_eq!(score[&Team::Black], 38.0);
        assert_eq!(score[&Team::None], 0.0);
    }
}
