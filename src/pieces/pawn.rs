/// Pawn move generation
/// Pushes forward, captures diagonally, double-steps from its start rank and
/// captures en passant. Promotion choices are expanded by `movegen`.
use crate::board::{Board, Color, PieceType};
use crate::square::Square;

pub struct PawnMoves;

impl PawnMoves {
    /// Generate all pseudo-legal target squares for a Pawn
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);

        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves,
        };
        let dir = our_color.pawn_direction();

        // 1. Pushes: one square, then two from the start rank, both onto empty squares
        if let Some(one) = from.offset(0, dir) {
            if board.get_piece(one).is_none() {
                moves.push(one);
                if from.rank() == our_color.pawn_rank() {
                    if let Some(two) = one.offset(0, dir) {
                        if board.get_piece(two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // 2. Diagonal captures, including en passant
        for to in Self::attacks(from, our_color) {
            match board.get_piece(to) {
                Some(p) if p.color != our_color => moves.push(to),
                Some(_) => {}
                None => {
                    if Self::is_en_passant_capture(board, from, to, our_color) {
                        moves.push(to);
                    }
                }
            }
        }

        moves
    }

    /// Squares a pawn of `color` on `from` attacks, regardless of occupancy
    pub fn attacks(from: Square, color: Color) -> Vec<Square> {
        let dir = color.pawn_direction();
        [-1, 1]
            .iter()
            .filter_map(|&df| from.offset(df, dir))
            .collect()
    }

    /// Whether moving to the empty square `to` takes an enemy pawn en passant
    fn is_en_passant_capture(board: &Board, from: Square, to: Square, our_color: Color) -> bool {
        if board.en_passant() != Some(to) {
            return false;
        }
        let victim = Square::new(to.file(), from.rank());
        matches!(
            board.get_piece(victim),
            Some(p) if p.color != our_color && p.piece_type == PieceType::Pawn
        )
    }
}
