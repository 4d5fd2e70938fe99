// Per-piece movement rules
// Each piece family is a unit struct with a `generate_moves` function that
// returns pseudo-legal target squares. Self-check filtering, castling and
// promotion expansion happen in `movegen`.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use crate::board::{Board, Color};
use crate::square::Square;

/// Diagonal ray directions as (file, rank) steps
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal ray directions as (file, rank) steps
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Helper: add sliding moves along the given rays
/// A ray stops at the first occupied square, which is included only when it
/// holds an enemy piece
pub(crate) fn add_sliding_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    directions: &[(i8, i8)],
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.get_piece(to) {
                None => {
                    // Empty square - can move here, continue searching
                    moves.push(to);
                    current = to;
                }
                Some(p) => {
                    if p.color != our_color {
                        moves.push(to); // Enemy piece - can capture
                    }
                    break;
                }
            }
        }
    }
}

/// Helper: add jump moves for leaper pieces (Knight, King)
/// Jump moves ignore pieces in between
pub(crate) fn add_jump_moves(
    moves: &mut Vec<Square>,
    board: &Board,
    from: Square,
    our_color: Color,
    offsets: &[(i8, i8)],
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            match board.get_piece(to) {
                None => moves.push(to),
                Some(p) if p.color != our_color => moves.push(to),
                _ => {} // Own piece - blocked
            }
        }
    }
}
