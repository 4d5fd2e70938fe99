// Board representation and piece identity
// Using Mailbox (8x8 array) approach for clarity

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;
use crate::square::Square;

// =============================================================================
// Type Definitions
// =============================================================================

/// Color of a piece or side to move
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks at the start
    pub fn back_rank(&self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank direction this side's pawns advance in
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank this side's pawns start on
    pub fn pawn_rank(&self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which this side's pawns promote
    pub fn promotion_rank(&self) -> u8 {
        self.opposite().back_rank()
    }

    fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Type of a chess piece
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Pieces a pawn may promote to, strongest last
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];

    pub fn is_promotion_target(&self) -> bool {
        Self::PROMOTIONS.contains(self)
    }

    /// Lowercase letter used in move notation (p, n, b, r, q, k)
    pub fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl FromStr for PieceType {
    type Err = GameError;

    /// Accepts a letter ("q") or a name ("queen"), case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "pawn" => Ok(PieceType::Pawn),
            "n" | "knight" => Ok(PieceType::Knight),
            "b" | "bishop" => Ok(PieceType::Bishop),
            "r" | "rook" => Ok(PieceType::Rook),
            "q" | "queen" => Ok(PieceType::Queen),
            "k" | "king" => Ok(PieceType::King),
            _ => Err(GameError::InvalidPieceType(s.to_string())),
        }
    }
}

/// A chess piece with type and color
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Create a new piece
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Uppercase letter for White, lowercase for Black
    pub fn to_char(&self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A proposed move
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Required exactly when a pawn reaches the last rank
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// Coordinate notation, e.g. "e2e4" or "e7e8q"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parse coordinate notation: "e2e4", or "e7e8q" with a promotion letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let promotion = match s.get(4..) {
            Some(letter) if !letter.is_empty() => Some(letter.parse::<PieceType>()?),
            _ => None,
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// What applying a move did to the board
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
    PromotionCapture,
}

/// An applied move, as stored in the game history
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece that moved, before any promotion
    pub piece: Piece,
    /// Piece removed from the board, including an en passant victim
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Pawn moves and captures reset the fifty-move counter
    pub fn is_irreversible(&self) -> bool {
        self.piece.piece_type == PieceType::Pawn || self.captured.is_some()
    }
}

/// Which side of the board a castling move goes to
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File of the rook taking part in this castling
    pub fn rook_file(&self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Files the king and rook land on: (king, rook)
    pub fn destination_files(&self) -> (u8, u8) {
        match self {
            CastleSide::Kingside => (6, 5),
            CastleSide::Queenside => (2, 3),
        }
    }
}

/// Castling availability, the "has moved" bookkeeping for kings and rooks
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    /// All four rights available
    pub fn all() -> Self {
        CastlingRights {
            rights: [[true; 2]; 2],
        }
    }

    /// No rights available
    pub fn none() -> Self {
        CastlingRights::default()
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color.index()][Self::side_index(side)]
    }

    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        self.rights[color.index()][Self::side_index(side)] = allowed;
    }

    /// Drop both rights of a side (its king moved)
    pub fn clear(&mut self, color: Color) {
        self.rights[color.index()] = [false; 2];
    }

    /// Drop the right tied to a rook's home corner, if the square is one
    fn clear_corner(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.rank() != color.back_rank() {
                continue;
            }
            for side in [CastleSide::Kingside, CastleSide::Queenside] {
                if square.file() == side.rook_file() {
                    self.set(color, side, false);
                }
            }
        }
    }

    fn side_index(side: CastleSide) -> usize {
        match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }
}

// =============================================================================
// Board Structure
// =============================================================================

/// Chess board using Mailbox representation (8x8 array)
///
/// The board performs no rule checking: it is a grid plus the bookkeeping
/// needed for castling and en passant. Rules live in `movegen` and `check`.
///
/// Coordinate system:
/// - squares[rank][file], squares[0][0] = a1, squares[7][7] = h8
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    /// 8x8 array of squares, each containing an optional piece
    squares: [[Option<Piece>; 8]; 8],
    castling: CastlingRights,
    /// Square a pawn would land on when capturing en passant
    en_passant: Option<Square>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Standard starting position with all castling rights
    pub fn starting_position() -> Self {
        let mut board = Board::new();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for color in [Color::White, Color::Black] {
            for (file, piece_type) in back_rank.iter().enumerate() {
                let file = file as u8;
                board.set_piece(
                    Square::new(file, color.back_rank()),
                    Some(Piece::new(*piece_type, color)),
                );
                board.set_piece(
                    Square::new(file, color.pawn_rank()),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }

        board.castling = CastlingRights::all();
        board
    }

    /// Get the piece at a given square
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    /// Set (or clear, with None) the piece at a given square
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Whether a square holds a piece, optionally only of the given color
    pub fn is_occupied(&self, square: Square, color: Option<Color>) -> bool {
        match (self.get_piece(square), color) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(piece), Some(color)) => piece.color == color,
        }
    }

    /// All pieces of a color with their squares, a1 first
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get_piece(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    /// Find the position of the King of the given color
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.piece_type == PieceType::King)
            .map(|(square, _)| square)
    }

    /// Number of kings of the given color on the board
    pub fn count_kings(&self, color: Color) -> usize {
        self.pieces(color)
            .filter(|(_, piece)| piece.piece_type == PieceType::King)
            .count()
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Square a pawn may capture onto en passant, if any
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /// Apply a move without any legality check
    ///
    /// Handles captures, en passant removal, castling rook relocation and
    /// promotion, and keeps the castling rights and en passant target up to
    /// date. Panics if `mv.from` is empty.
    pub fn make_move(&mut self, mv: Move) -> MoveRecord {
        let Some(piece) = self.get_piece(mv.from) else {
            panic!("make_move: no piece on {}", mv.from);
        };
        let mut captured = self.get_piece(mv.to);
        let file_delta = mv.to.file() as i8 - mv.from.file() as i8;
        let rank_delta = mv.to.rank() as i8 - mv.from.rank() as i8;

        let mut kind = if captured.is_some() {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };

        match piece.piece_type {
            PieceType::Pawn => {
                if file_delta != 0 && captured.is_none() && self.en_passant == Some(mv.to) {
                    // The captured pawn sits beside the mover, not on the target square
                    let victim = Square::new(mv.to.file(), mv.from.rank());
                    captured = self.get_piece(victim);
                    self.set_piece(victim, None);
                    kind = MoveKind::EnPassant;
                } else if rank_delta.abs() == 2 {
                    kind = MoveKind::DoublePawnPush;
                }
            }
            PieceType::King if file_delta.abs() == 2 => {
                let side = if file_delta > 0 {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let rank = mv.from.rank();
                let (_, rook_file) = side.destination_files();
                let rook_from = Square::new(side.rook_file(), rank);
                let rook = self.get_piece(rook_from);
                self.set_piece(rook_from, None);
                self.set_piece(Square::new(rook_file, rank), rook);
                kind = match side {
                    CastleSide::Kingside => MoveKind::CastleKingside,
                    CastleSide::Queenside => MoveKind::CastleQueenside,
                };
            }
            _ => {}
        }

        let placed = match mv.promotion {
            Some(promotion) if piece.piece_type == PieceType::Pawn => {
                kind = if captured.is_some() {
                    MoveKind::PromotionCapture
                } else {
                    MoveKind::Promotion
                };
                Piece::new(promotion, piece.color)
            }
            _ => piece,
        };

        self.set_piece(mv.to, Some(placed));
        self.set_piece(mv.from, None);

        // Castling rights: a king move drops both, touching a corner drops one
        if piece.piece_type == PieceType::King {
            self.castling.clear(piece.color);
        }
        self.castling.clear_corner(mv.from);
        self.castling.clear_corner(mv.to);

        self.en_passant = if kind == MoveKind::DoublePawnPush {
            mv.from.offset(0, piece.color.pawn_direction())
        } else {
            None
        };

        MoveRecord {
            mv,
            piece,
            captured,
            kind,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

// =============================================================================
// Display Implementation (for debugging)
// =============================================================================

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, "  +-+-+-+-+-+-+-+")?;

        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;

            for file in 0..8u8 {
                let piece_char = match self.get_piece(Square::new(file, rank)) {
                    None => '.',
                    Some(piece) => piece.to_char(),
                };
                write!(f, "{} ", piece_char)?;
            }
            writeln!(f, "| {}", rank + 1)?;
        }

        writeln!(f, "  +-+-+-+-+-+-+-+")?;
        writeln!(f, "  a b c d e f g h")?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
