// Error types returned by the game session and configuration loading

use thiserror::Error;

use crate::board::{Color, Move, PieceType};
use crate::check::GameStatus;
use crate::square::Square;

/// Broad category of a rejected move, for front ends that only want to know
/// whether to re-prompt, explain a rule, or announce the end of the game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Malformed request: bad coordinate, bad or missing promotion
    Input,
    /// Well-formed request that the rules of chess forbid
    Rules,
    /// The game has already ended
    GameOver,
}

/// A rejected request. The session state is never modified when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece type: {0:?}")]
    InvalidPieceType(String),

    #[error("a pawn reaching the last rank must be promoted")]
    MissingPromotion,

    #[error("cannot promote to a {}", .0.name())]
    InvalidPromotion(PieceType),

    #[error("promotion is only allowed for a pawn reaching the last rank")]
    UnexpectedPromotion,

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {square} belongs to {color}, it is not their turn")]
    WrongSide { square: Square, color: Color },

    #[error("{0} is not a legal move")]
    IllegalMove(Move),

    #[error("{0} would leave the king in check")]
    LeavesKingInCheck(Move),

    #[error("the game is over: {0}")]
    GameOver(GameStatus),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidSquare(_)
            | GameError::InvalidPieceType(_)
            | GameError::MissingPromotion
            | GameError::InvalidPromotion(_)
            | GameError::UnexpectedPromotion
            | GameError::InvalidPosition(_) => ErrorKind::Input,
            GameError::EmptySquare(_)
            | GameError::WrongSide { .. }
            | GameError::IllegalMove(_)
            | GameError::LeavesKingInCheck(_) => ErrorKind::Rules,
            GameError::GameOver(_) => ErrorKind::GameOver,
        }
    }
}

/// Failure to load the YAML configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
