/// Queen move generation
/// Combines the rook and bishop rays
use crate::board::Board;
use crate::pieces::{add_sliding_moves, DIAGONALS, ORTHOGONALS};
use crate::square::Square;

pub struct QueenMoves;

impl QueenMoves {
    /// Generate all pseudo-legal moves for a Queen
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(27); // Queen can have up to 27 moves

        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves,
        };

        add_sliding_moves(&mut moves, board, from, our_color, &ORTHOGONALS);
        add_sliding_moves(&mut moves, board, from, our_color, &DIAGONALS);
        moves
    }
}
