/// Knight move generation
/// Jumps in an L-shape (2+1) over any piece in between
use crate::board::Board;
use crate::pieces::add_jump_moves;
use crate::square::Square;

/// Knight offsets: (±2, ±1) and (±1, ±2)
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    ( 1, -2), ( 1, 2), ( 2, -1), ( 2, 1),
];

pub struct KnightMoves;

impl KnightMoves {
    /// Generate all pseudo-legal moves for a Knight
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);

        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves, // No piece at 'from', return empty
        };

        add_jump_moves(&mut moves, board, from, our_color, &KNIGHT_OFFSETS);
        moves
    }
}
