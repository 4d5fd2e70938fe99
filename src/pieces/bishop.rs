/// Bishop move generation
/// Slides along diagonals
use crate::board::Board;
use crate::pieces::{add_sliding_moves, DIAGONALS};
use crate::square::Square;

pub struct BishopMoves;

impl BishopMoves {
    /// Generate all pseudo-legal moves for a Bishop
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(13); // Bishop can have up to 13 moves

        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves,
        };

        add_sliding_moves(&mut moves, board, from, our_color, &DIAGONALS);
        moves
    }
}
