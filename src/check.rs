// Check detection and game-state classification

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Color, PieceType};
use crate::draw::DrawReason;
use crate::movegen::legal_moves;
use crate::pieces::bishop::BishopMoves;
use crate::pieces::king::KingMoves;
use crate::pieces::knight::KnightMoves;
use crate::pieces::pawn::PawnMoves;
use crate::pieces::queen::QueenMoves;
use crate::pieces::rook::RookMoves;
use crate::square::Square;

/// State of the game from the point of view of the side to move
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    Draw { reason: DrawReason },
}

impl GameStatus {
    /// No further moves are accepted once the game reaches one of these
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw { .. }
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw { reason } => write!(f, "draw by {}", reason),
        }
    }
}

/// Check if a square is attacked by any piece of the given color
///
/// Uses attack patterns rather than moves: pawns attack diagonally even onto
/// empty squares, and castling never attacks.
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.pieces(by_color).any(|(from, piece)| {
        let attacks = match piece.piece_type {
            PieceType::Pawn => PawnMoves::attacks(from, by_color),
            PieceType::Knight => KnightMoves::generate_moves(board, from),
            PieceType::Bishop => BishopMoves::generate_moves(board, from),
            PieceType::Rook => RookMoves::generate_moves(board, from),
            PieceType::Queen => QueenMoves::generate_moves(board, from),
            PieceType::King => KingMoves::generate_moves(board, from),
        };
        attacks.contains(&square)
    })
}

/// Check if the King of the given color is in check
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => false, // No king found (only in hand-built test positions)
    }
}

/// Classify the position for the side to move
///
/// Never returns `Draw`: draw rules need the game history and are applied by
/// the session on top of this.
pub fn status(board: &Board, side_to_move: Color) -> GameStatus {
    let in_check = is_in_check(board, side_to_move);
    let has_moves = !legal_moves(board, side_to_move).is_empty();

    match (in_check, has_moves) {
        (true, false) => GameStatus::Checkmate {
            winner: side_to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn place(board: &mut Board, square: &str, piece_type: PieceType, color: Color) {
        board.set_piece(sq(square), Some(Piece::new(piece_type, color)));
    }

    #[test]
    fn test_king_not_in_check_at_start() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
        assert_eq!(status(&board, Color::White), GameStatus::Ongoing);
    }

    #[test]
    fn test_check_by_rook_on_file() {
        let mut board = Board::new();
        place(&mut board, "e8", PieceType::King, Color::Black);
        place(&mut board, "e1", PieceType::Rook, Color::White);

        assert!(is_in_check(&board, Color::Black));

        // A blocker removes the check
        place(&mut board, "e4", PieceType::Pawn, Color::Black);
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_check_by_knight() {
        let mut board = Board::new();
        place(&mut board, "e4", PieceType::King, Color::Black);
        place(&mut board, "f6", PieceType::Knight, Color::White);

        assert!(is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let mut board = Board::new();
        place(&mut board, "e4", PieceType::Pawn, Color::White);

        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White), "Pushes are not attacks");
        assert!(!is_square_attacked(&board, sq("d3"), Color::White), "Pawns attack forward only");
    }

    #[test]
    fn test_kings_attack_each_other() {
        let mut board = Board::new();
        place(&mut board, "e4", PieceType::King, Color::Black);
        place(&mut board, "e5", PieceType::King, Color::White);

        assert!(is_in_check(&board, Color::Black));
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn test_status_checkmate() {
        // Back rank mate
        let mut board = Board::new();
        place(&mut board, "g8", PieceType::King, Color::Black);
        place(&mut board, "f7", PieceType::Pawn, Color::Black);
        place(&mut board, "g7", PieceType::Pawn, Color::Black);
        place(&mut board, "h7", PieceType::Pawn, Color::Black);
        place(&mut board, "a8", PieceType::Rook, Color::White);
        place(&mut board, "g1", PieceType::King, Color::White);

        assert_eq!(
            status(&board, Color::Black),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn test_status_check_with_escape() {
        let mut board = Board::new();
        place(&mut board, "g8", PieceType::King, Color::Black);
        place(&mut board, "a8", PieceType::Rook, Color::White);
        place(&mut board, "g1", PieceType::King, Color::White);

        assert_eq!(status(&board, Color::Black), GameStatus::Check);
    }

    #[test]
    fn test_status_stalemate() {
        let mut board = Board::new();
        place(&mut board, "h1", PieceType::King, Color::White);
        place(&mut board, "f2", PieceType::Queen, Color::Black);
        place(&mut board, "a8", PieceType::King, Color::Black);

        assert!(!is_in_check(&board, Color::White));
        assert_eq!(status(&board, Color::White), GameStatus::Stalemate);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Checkmate {
            winner: Color::Black
        }
        .is_terminal());
        assert!(GameStatus::Draw {
            reason: DrawReason::FiftyMoveRule
        }
        .is_terminal());
    }
}
