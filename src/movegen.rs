// Move generation
// Two phases: pseudo-legal moves per piece kind, then filtering of moves
// that leave the mover's own king in check

use crate::board::{Board, CastleSide, Color, Move, PieceType};
use crate::check::{is_in_check, is_square_attacked};
use crate::pieces::bishop::BishopMoves;
use crate::pieces::king::KingMoves;
use crate::pieces::knight::KnightMoves;
use crate::pieces::pawn::PawnMoves;
use crate::pieces::queen::QueenMoves;
use crate::pieces::rook::RookMoves;
use crate::square::Square;

/// Generate all pseudo-legal moves for `side`
///
/// Promotion moves are expanded into one move per promotion piece. Castling
/// is included only when it is fully legal, since its conditions already
/// involve attacked squares.
pub fn pseudo_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);

    for (from, piece) in board.pieces(side) {
        let targets = match piece.piece_type {
            PieceType::Pawn => PawnMoves::generate_moves(board, from),
            PieceType::Knight => KnightMoves::generate_moves(board, from),
            PieceType::Bishop => BishopMoves::generate_moves(board, from),
            PieceType::Rook => RookMoves::generate_moves(board, from),
            PieceType::Queen => QueenMoves::generate_moves(board, from),
            PieceType::King => KingMoves::generate_moves(board, from),
        };

        for to in targets {
            if piece.piece_type == PieceType::Pawn && to.rank() == side.promotion_rank() {
                for promotion in PieceType::PROMOTIONS {
                    moves.push(Move::with_promotion(from, to, promotion));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        }

        if piece.piece_type == PieceType::King {
            add_castling_moves(&mut moves, board, from, side);
        }
    }

    moves
}

/// Generate all legal moves for `side`
///
/// Each pseudo-legal move is tried on a scratch copy of the board and kept
/// only if the mover's king is not in check afterwards.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    pseudo_legal_moves(board, side)
        .into_iter()
        .filter(|mv| !leaves_king_in_check(board, side, *mv))
        .collect()
}

/// Whether `mv` is a legal move for `side` on this board
pub fn is_legal(board: &Board, side: Color, mv: Move) -> bool {
    match board.get_piece(mv.from) {
        Some(piece) if piece.color == side => {}
        _ => return false,
    }
    pseudo_legal_moves(board, side).contains(&mv) && !leaves_king_in_check(board, side, mv)
}

/// Count leaf nodes of the legal move tree to `depth` plies
/// Used to check move generation against known node counts
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut child = board.clone();
            child.make_move(mv);
            perft(&child, side.opposite(), depth - 1)
        })
        .sum()
}

/// Apply `mv` to a copy of the board and test the mover's king
pub(crate) fn leaves_king_in_check(board: &Board, side: Color, mv: Move) -> bool {
    let mut scratch = board.clone();
    scratch.make_move(mv);
    is_in_check(&scratch, side)
}

/// Add castling moves for the king on `from`
///
/// Requires the castling right (king and rook unmoved), the rook on its
/// corner, empty squares between them, and a king that is not in check and
/// does not pass through or land on an attacked square.
fn add_castling_moves(moves: &mut Vec<Move>, board: &Board, from: Square, side: Color) {
    let rank = side.back_rank();
    if from != Square::new(4, rank) {
        return;
    }

    let rights = board.castling_rights();
    let enemy = side.opposite();
    let mut checked = None;

    for castle in [CastleSide::Kingside, CastleSide::Queenside] {
        if !rights.has(side, castle) {
            continue;
        }

        let rook_square = Square::new(castle.rook_file(), rank);
        match board.get_piece(rook_square) {
            Some(p) if p.color == side && p.piece_type == PieceType::Rook => {}
            _ => continue,
        }

        let (king_file, _) = castle.destination_files();
        let (low, high) = if castle.rook_file() < 4 {
            (castle.rook_file() + 1, 3)
        } else {
            (5, castle.rook_file() - 1)
        };
        let path_clear = (low..=high).all(|file| board.get_piece(Square::new(file, rank)).is_none());
        if !path_clear {
            continue;
        }

        let in_check = *checked.get_or_insert_with(|| is_square_attacked(board, from, enemy));
        if in_check {
            return;
        }

        // The king crosses every file between its start and destination
        let (walk_low, walk_high) = if king_file < 4 { (king_file, 3) } else { (5, king_file) };
        let walk_safe = (walk_low..=walk_high)
            .all(|file| !is_square_attacked(board, Square::new(file, rank), enemy));
        if walk_safe {
            moves.push(Move::new(from, Square::new(king_file, rank)));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
