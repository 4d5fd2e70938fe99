// Parsing of free-form move input typed at the prompt

use crate::board::PieceType;

/// What the player typed
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// Two coordinates and an optional promotion piece, not yet validated
    Move {
        from: String,
        to: String,
        promotion: Option<PieceType>,
    },
    Quit,
    Help,
}

/// Parse one line of input
///
/// Accepts "A2 A3", "a2,a3", "a2-a3", "e7 e8 q" and compact "e2e4"/"e7e8q".
/// Returns None for anything else; coordinates are checked by the game.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Some(Command::Quit),
        "help" | "?" => return Some(Command::Help),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [compact] if compact.is_ascii() && (compact.len() == 4 || compact.len() == 5) => {
            let promotion = match compact.get(4..) {
                Some(letter) if !letter.is_empty() => Some(letter.parse::<PieceType>().ok()?),
                _ => None,
            };
            Some(Command::Move {
                from: compact[0..2].to_string(),
                to: compact[2..4].to_string(),
                promotion,
            })
        }
        [from, to] => Some(Command::Move {
            from: from.to_string(),
            to: to.to_string(),
            promotion: None,
        }),
        [from, to, promotion] => Some(Command::Move {
            from: from.to_string(),
            to: to.to_string(),
            promotion: Some(promotion.parse::<PieceType>().ok()?),
        }),
        _ => None,
    }
}
