// Chess Rules Library
// Board representation using Mailbox (8x8 array) approach
// Front ends submit moves to `game::Game` and render its `GameState`

pub mod board;
pub mod check;
pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod movegen;
pub mod pieces;
pub mod square;
pub mod ui;

pub use board::{Board, Color, Move, MoveKind, MoveRecord, Piece, PieceType};
pub use check::GameStatus;
pub use draw::{DrawReason, DrawRules};
pub use error::{ErrorKind, GameError};
pub use game::{CellState, Game, GameState};
pub use square::Square;
