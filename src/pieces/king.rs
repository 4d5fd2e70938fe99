/// Here we define associated movements, captures or
/// other traits with this piece, the almighty King !!
/// Castling is added by `movegen`.
use crate::board::Board;
use crate::pieces::add_jump_moves;
use crate::square::Square;

/// King's 8 directions as (file, rank) steps
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// KingMoves is an Unit Struct, namespace to group related functions together.
pub struct KingMoves;

impl KingMoves {
    /// Adjacent squares that are empty or hold an enemy piece
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(8);

        // Get the color of the piece that's moving
        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves, // No piece at 'from', return empty
        };

        add_jump_moves(&mut moves, board, from, our_color, &KING_OFFSETS);
        moves
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, PieceType};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_king_moves_center() {
        let mut board = Board::new();
        board.set_piece(sq("e4"), Some(Piece::new(PieceType::King, Color::White)));

        let moves = KingMoves::generate_moves(&board, sq("e4"));

        assert_eq!(moves.len(), 8, "King in center should have 8 moves");
        for target in ["d5", "e5", "f5", "d4", "f4", "d3", "e3", "f3"] {
            assert!(moves.contains(&sq(target)), "Should move to {}", target);
        }
    }

    #[test]
    fn test_king_moves_corner() {
        let mut board = Board::new();
        board.set_piece(sq("a8"), Some(Piece::new(PieceType::King, Color::White)));

        let moves = KingMoves::generate_moves(&board, sq("a8"));

        assert_eq!(moves.len(), 3, "King in corner should have 3 moves");
    }

    #[test]
    fn test_king_blocked_by_own_piece() {
        let mut board = Board::new();
        board.set_piece(sq("e4"), Some(Piece::new(PieceType::King, Color::White)));
        board.set_piece(sq("e5"), Some(Piece::new(PieceType::Queen, Color::White)));

        let moves = KingMoves::generate_moves(&board, sq("e4"));

        assert!(!moves.contains(&sq("e5")), "Should not capture own piece");
        assert_eq!(moves.len(), 7, "King should have 7 moves (one blocked)");
    }

    #[test]
    fn test_king_can_capture_enemy() {
        let mut board = Board::new();
        board.set_piece(sq("e4"), Some(Piece::new(PieceType::King, Color::White)));
        board.set_piece(sq("e5"), Some(Piece::new(PieceType::Rook, Color::Black)));

        let moves = KingMoves::generate_moves(&board, sq("e4"));

        assert!(moves.contains(&sq("e5")), "Should be able to capture enemy piece");
        assert_eq!(moves.len(), 8, "King should still have 8 moves (can capture)");
    }

    #[test]
    fn test_king_never_generates_castling() {
        let board = Board::starting_position();
        let moves = KingMoves::generate_moves(&board, sq("e1"));
        assert!(moves.is_empty(), "King is boxed in at the start");
    }

    #[test]
    fn test_king_no_piece_returns_empty() {
        let board = Board::new();
        let moves = KingMoves::generate_moves(&board, sq("e4"));
        assert!(moves.is_empty(), "No piece at square should return empty moves");
    }
}
