// Game session: the public API every front end talks to
// Owns the board, side to move and history; validates, applies and
// evaluates each submitted move

use log::{debug, info};
use serde::Serialize;

use crate::board::{Board, Color, Move, MoveRecord, PieceType};
use crate::check::{self, is_in_check, GameStatus};
use crate::draw::{self, DrawReason, DrawRules, PositionKey};
use crate::error::GameError;
use crate::movegen::{self, leaves_king_in_check, pseudo_legal_moves};
use crate::square::Square;

/// One square of the board as seen by a front end
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CellState {
    /// Uppercase coordinate, "A8" .. "H1"
    pub coord: String,
    pub occupied: bool,
    pub kind: Option<PieceType>,
    pub color: Option<Color>,
}

/// Snapshot of a game for rendering
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GameState {
    /// All 64 squares in display order: rank 8 to 1, file A to H
    pub cells: Vec<CellState>,
    pub side_to_move: Color,
    pub status: GameStatus,
    pub message: String,
}

impl GameState {
    pub fn cell(&self, coord: &str) -> Option<&CellState> {
        self.cells.iter().find(|c| c.coord.eq_ignore_ascii_case(coord))
    }
}

/// A single game of chess
///
/// Moves are only ever applied after they are found in the legal move set;
/// a rejected move leaves the game exactly as it was.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    /// Position after every half-move, starting with the initial one
    positions: Vec<PositionKey>,
    /// Half-moves since the last capture or pawn move
    halfmove_clock: u32,
    rules: DrawRules,
    status: GameStatus,
}

impl Game {
    /// New game from the standard starting position with all draw rules
    pub fn new() -> Self {
        Self::with_rules(DrawRules::default())
    }

    /// New game from the standard starting position
    pub fn with_rules(rules: DrawRules) -> Self {
        let board = Board::starting_position();
        let positions = vec![PositionKey::new(&board, Color::White)];
        Game {
            board,
            side_to_move: Color::White,
            history: Vec::new(),
            positions,
            halfmove_clock: 0,
            rules,
            status: GameStatus::Ongoing,
        }
    }

    /// Start a game from a custom position
    ///
    /// The board must hold exactly one king per side, no pawns on the first
    /// or last rank, and the side that is not to move must not be in check.
    pub fn from_position(board: Board, side_to_move: Color, rules: DrawRules) -> Result<Self, GameError> {
        for color in [Color::White, Color::Black] {
            let kings = board.count_kings(color);
            if kings != 1 {
                return Err(GameError::InvalidPosition(format!(
                    "{} has {} kings, expected exactly one",
                    color, kings
                )));
            }
            let stray_pawn = board.pieces(color).find(|(square, piece)| {
                piece.piece_type == PieceType::Pawn && (square.rank() == 0 || square.rank() == 7)
            });
            if let Some((square, _)) = stray_pawn {
                return Err(GameError::InvalidPosition(format!("pawn on {}", square)));
            }
        }
        if is_in_check(&board, side_to_move.opposite()) {
            return Err(GameError::InvalidPosition(format!(
                "{} is in check but it is {} to move",
                side_to_move.opposite(),
                side_to_move
            )));
        }

        let positions = vec![PositionKey::new(&board, side_to_move)];
        let mut game = Game {
            board,
            side_to_move,
            history: Vec::new(),
            positions,
            halfmove_clock: 0,
            rules,
            status: GameStatus::Ongoing,
        };
        game.status = game.evaluate();
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Applied moves, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Legal moves for the side to move; empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        movegen::legal_moves(&self.board, self.side_to_move)
    }

    /// Legal moves of the piece on `from`
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves().into_iter().filter(|mv| mv.from == from).collect()
    }

    /// Submit a move given as two coordinates such as "E2" and "e4"
    pub fn move_piece(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PieceType>,
    ) -> Result<MoveRecord, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }
        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        self.play(Move {
            from,
            to,
            promotion,
        })
    }

    /// Validate and apply a move
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        if let Err(err) = self.validate(mv) {
            debug!("rejected {} for {}: {}", mv, self.side_to_move, err);
            return Err(err);
        }

        let mover = self.side_to_move;
        let record = self.board.make_move(mv);
        self.history.push(record);
        self.halfmove_clock = if record.is_irreversible() {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.side_to_move = mover.opposite();
        self.positions.push(PositionKey::new(&self.board, self.side_to_move));

        self.assert_invariants(mover);
        self.status = self.evaluate();

        debug!("{} played {} ({:?})", mover, mv, record.kind);
        if self.status.is_terminal() {
            info!("game over after {} half-moves: {}", self.history.len(), self.status);
        }

        Ok(record)
    }

    /// Reasons are checked from cheapest to most expensive
    fn validate(&self, mv: Move) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }

        let piece = self
            .board
            .get_piece(mv.from)
            .ok_or(GameError::EmptySquare(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(GameError::WrongSide {
                square: mv.from,
                color: piece.color,
            });
        }

        let promotes = piece.piece_type == PieceType::Pawn
            && mv.to.rank() == self.side_to_move.promotion_rank();
        match (promotes, mv.promotion) {
            (true, None) => return Err(GameError::MissingPromotion),
            (true, Some(target)) if !target.is_promotion_target() => {
                return Err(GameError::InvalidPromotion(target))
            }
            (false, Some(_)) => return Err(GameError::UnexpectedPromotion),
            _ => {}
        }

        if !pseudo_legal_moves(&self.board, self.side_to_move).contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }
        if leaves_king_in_check(&self.board, self.side_to_move, mv) {
            return Err(GameError::LeavesKingInCheck(mv));
        }
        Ok(())
    }

    /// A broken invariant here is a bug in move application
    fn assert_invariants(&self, mover: Color) {
        assert_eq!(self.board.count_kings(Color::White), 1, "white must have one king");
        assert_eq!(self.board.count_kings(Color::Black), 1, "black must have one king");
        assert!(
            !is_in_check(&self.board, mover),
            "{} left its own king in check",
            mover
        );
    }

    /// Checkmate and stalemate first, then the enabled draw rules
    fn evaluate(&self) -> GameStatus {
        let status = check::status(&self.board, self.side_to_move);
        if status.is_terminal() {
            return status;
        }

        let reason = if self.rules.insufficient_material && draw::is_insufficient_material(&self.board) {
            Some(DrawReason::InsufficientMaterial)
        } else if self.rules.fifty_move_rule && draw::is_fifty_move_draw(self.halfmove_clock) {
            Some(DrawReason::FiftyMoveRule)
        } else if self.rules.threefold_repetition && draw::is_threefold_repetition(&self.positions) {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        };

        match reason {
            Some(reason) => GameStatus::Draw { reason },
            None => status,
        }
    }

    /// Human readable status line
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::Ongoing => format!("{} to move", self.side_to_move),
            GameStatus::Check => format!("{} is in check", self.side_to_move),
            GameStatus::Checkmate { winner } => format!("Checkmate - {} wins", winner),
            GameStatus::Stalemate => "Stalemate - draw".to_string(),
            GameStatus::Draw { reason } => format!("Draw by {}", reason),
        }
    }

    /// Snapshot of the whole board plus status for front ends
    pub fn current_state(&self) -> GameState {
        let mut cells = Vec::with_capacity(64);
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let square = Square::new(file, rank);
                let piece = self.board.get_piece(square);
                cells.push(CellState {
                    coord: square.to_coord(),
                    occupied: piece.is_some(),
                    kind: piece.map(|p| p.piece_type),
                    color: piece.map(|p| p.color),
                });
            }
        }

        GameState {
            cells,
            side_to_move: self.side_to_move,
            status: self.status,
            message: self.message(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
