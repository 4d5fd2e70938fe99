/// Rook move generation
/// Moves horizontally and vertically (orthogonally)
use crate::board::Board;
use crate::pieces::{add_sliding_moves, ORTHOGONALS};
use crate::square::Square;

pub struct RookMoves;

impl RookMoves {
    /// Generate all pseudo-legal moves for a Rook
    /// Rook slides horizontally and vertically
    pub fn generate_moves(board: &Board, from: Square) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14); // Rook can have up to 14 moves

        // Get the color of the piece that's moving
        let our_color = match board.get_piece(from) {
            Some(p) => p.color,
            None => return moves, // No piece at 'from', return empty
        };

        add_sliding_moves(&mut moves, board, from, our_color, &ORTHOGONALS);
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
    fn test_rook_on_empty_board_center() {
        let mut board = Board::new();
        board.set_piece(sq("d4"), Some(Piece::new(PieceType::Rook, Color::White)));

        let moves = RookMoves::generate_moves(&board, sq("d4"));

        // 7 vertical + 7 horizontal
        assert_eq!(moves.len(), 14, "Rook should have 14 moves from center");

        assert!(moves.contains(&sq("d8")), "Rook move to d8 should be possible");
        assert!(moves.contains(&sq("d1")), "Rook move to d1 should be possible");
        assert!(moves.contains(&sq("a4")), "Rook move to a4 should be possible");
        assert!(moves.contains(&sq("h4")), "Rook move to h4 should be possible");

        assert!(!moves.contains(&sq("c5")), "Rook should not move diagonally");
        assert!(!moves.contains(&sq("e3")), "Rook should not move diagonally");
    }

    #[test]
    fn test_rook_blocked_by_own_piece() {
        let mut board = Board::new();
        board.set_piece(sq("d4"), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set_piece(sq("d5"), Some(Piece::new(PieceType::King, Color::White)));

        let moves = RookMoves::generate_moves(&board, sq("d4"));

        assert!(!moves.contains(&sq("d5")), "Should not capture own piece");
        assert!(!moves.contains(&sq("d6")), "Should not slide through own piece");
    }

    #[test]
    fn test_rook_can_capture_enemy() {
        let mut board = Board::new();
        board.set_piece(sq("d4"), Some(Piece::new(PieceType::Rook, Color::White)));
        board.set_piece(sq("d5"), Some(Piece::new(PieceType::Knight, Color::Black)));

        let moves = RookMoves::generate_moves(&board, sq("d4"));

        assert!(moves.contains(&sq("d5")), "Should be able to capture enemy piece");
        assert!(!moves.contains(&sq("d6")), "Should not slide through enemy piece");
    }

    #[test]
    fn test_rook_corner() {
        let mut board = Board::new();
        board.set_piece(sq("a1"), Some(Piece::new(PieceType::Rook, Color::White)));

        let moves = RookMoves::generate_moves(&board, sq("a1"));

        // 7 up + 7 right
        assert_eq!(moves.len(), 14, "Rook should have 14 moves from corner");
    }

    #[test]
    fn test_rook_boxed_in_at_start() {
        let board = Board::starting_position();
        assert!(RookMoves::generate_moves(&board, sq("a1")).is_empty());
    }

    #[test]
    fn test_rook_no_piece_returns_empty() {
        let board = Board::new();
        let moves = RookMoves::generate_moves(&board, sq("d4"));
        assert!(moves.is_empty(), "No piece at square should return empty moves");
    }
}
