// Square addressing
// Algebraic coordinates (a1..h8) on top of a (file, rank) pair

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// A square on the 8x8 board
///
/// Coordinate system:
/// - file 0 = a, file 7 = h
/// - rank 0 = rank 1 (white's back rank), rank 7 = rank 8 (black's back rank)
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square from file and rank (both 0-7)
    ///
    /// Panics when either coordinate is off the board; use [`Square::try_new`]
    /// for values that are not known to be in range.
    pub fn new(file: u8, rank: u8) -> Self {
        assert!(file < 8 && rank < 8, "square ({}, {}) is off the board", file, rank);
        Square { file, rank }
    }

    /// Create a square, or None if it would be off the board
    pub fn try_new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The square reached by stepping (df, dr), if it stays on the board
    pub fn offset(&self, df: i8, dr: i8) -> Option<Square> {
        Square::try_new(self.file as i8 + df, self.rank as i8 + dr)
    }

    /// True for dark squares (a1 is dark)
    pub fn is_dark(&self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// Uppercase coordinate used by front ends (e.g. "E4")
    pub fn to_coord(&self) -> String {
        format!("{}{}", (b'A' + self.file) as char, self.rank + 1)
    }

    /// All 64 squares, a1, b1, .. h1, a2, .. h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = GameError;

    /// Parse algebraic notation, case-insensitive (e.g. "e4", "E4")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        Ok(Square { file, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(4, 0).to_string(), "e1");
        assert_eq!(Square::new(0, 7).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
        assert_eq!(Square::new(0, 0).to_string(), "a1");
    }

    #[test]
    fn test_parse_square() {
        assert_eq!("e1".parse::<Square>().ok(), Some(Square::new(4, 0)));
        assert_eq!("a8".parse::<Square>().ok(), Some(Square::new(0, 7)));
        assert_eq!("H8".parse::<Square>().ok(), Some(Square::new(7, 7)));
        assert_eq!(" d5 ".parse::<Square>().ok(), Some(Square::new(3, 4)));
    }

    #[test]
    fn test_parse_square_rejects_off_board() {
        for bad in ["i1", "a0", "a9", "", "e", "e44", "11", "ee"] {
            let result = bad.parse::<Square>();
            assert!(
                matches!(result, Err(GameError::InvalidSquare(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1 = Square::new(0, 0);
        assert_eq!(a1.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_square_colors() {
        assert!(Square::new(0, 0).is_dark(), "a1 is dark");
        assert!(!Square::new(7, 0).is_dark(), "h1 is light");
        assert!(Square::new(3, 7).is_dark(), "d8 is dark");
        assert!(!Square::new(3, 0).is_dark(), "d1 is light");
    }

    #[test]
    fn test_to_coord_uppercase() {
        assert_eq!(Square::new(4, 3).to_coord(), "E4");
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }
}
