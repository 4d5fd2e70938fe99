// Draw rules beyond stalemate
// Insufficient material, the fifty-move rule and threefold repetition

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingRights, Color, Move, Piece, PieceType};
use crate::movegen::is_legal;
use crate::pieces::pawn::PawnMoves;
use crate::square::Square;

/// Half-moves without a pawn move or capture before the fifty-move rule applies
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Occurrences of one position that make a threefold repetition
pub const REPETITION_LIMIT: usize = 3;

/// Why a game was drawn (stalemate is reported separately)
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
            DrawReason::FiftyMoveRule => write!(f, "the fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
        }
    }
}

/// Which automatic draw rules a game applies
#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default)]
pub struct DrawRules {
    pub insufficient_material: bool,
    pub fifty_move_rule: bool,
    pub threefold_repetition: bool,
}

impl DrawRules {
    /// Only checkmate and stalemate end the game
    pub fn disabled() -> Self {
        DrawRules {
            insufficient_material: false,
            fifty_move_rule: false,
            threefold_repetition: false,
        }
    }
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            insufficient_material: true,
            fifty_move_rule: true,
            threefold_repetition: true,
        }
    }
}

/// Everything that makes two positions "the same" for repetition purposes
///
/// An en passant target only counts while a capture onto it is legal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PositionKey {
    placement: [Option<Piece>; 64],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl PositionKey {
    pub fn new(board: &Board, side_to_move: Color) -> Self {
        let mut placement = [None; 64];
        for (slot, square) in placement.iter_mut().zip(Square::all()) {
            *slot = board.get_piece(square);
        }
        PositionKey {
            placement,
            side_to_move,
            castling: board.castling_rights(),
            en_passant: capturable_en_passant(board, side_to_move),
        }
    }
}

/// The en passant target, but only if `side` has a legal capture onto it
fn capturable_en_passant(board: &Board, side: Color) -> Option<Square> {
    let target = board.en_passant()?;
    let can_capture = board.pieces(side).any(|(from, piece)| {
        piece.piece_type == PieceType::Pawn
            && PawnMoves::attacks(from, side).contains(&target)
            && is_legal(board, side, Move::new(from, target))
    });
    can_capture.then_some(target)
}

/// Whether neither side can possibly deliver checkmate
///
/// Covers K v K, K+minor v K, and positions where every remaining non-king
/// piece is a bishop and all bishops stand on squares of one color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::new();

    for color in [Color::White, Color::Black] {
        for (square, piece) in board.pieces(color) {
            match piece.piece_type {
                PieceType::King => {}
                PieceType::Knight | PieceType::Bishop => minors.push((square, piece.piece_type)),
                PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
            }
        }
    }

    if minors.len() <= 1 {
        return true;
    }

    let all_bishops = minors.iter().all(|(_, t)| *t == PieceType::Bishop);
    let first_dark = minors[0].0.is_dark();
    all_bishops && minors.iter().all(|(square, _)| square.is_dark() == first_dark)
}

/// Whether the fifty-move rule applies for this half-move clock
pub fn is_fifty_move_draw(halfmove_clock: u32) -> bool {
    halfmove_clock >= FIFTY_MOVE_LIMIT
}

/// Whether the last key in `history` has occurred at least three times
pub fn is_threefold_repetition(history: &[PositionKey]) -> bool {
    match history.last() {
        Some(current) => history.iter().filter(|key| *key == current).count() >= REPETITION_LIMIT,
        None => false,
    }
}
