use crate::board::{Color, PieceType};
use crate::config::GlyphStyle;
use crate::game::{CellState, GameState};

/// Symbol for a piece in the given style
pub fn glyph(piece_type: PieceType, color: Color, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Ascii => {
            let c = piece_type.to_char();
            match color {
                Color::White => c.to_ascii_uppercase(),
                Color::Black => c,
            }
        }
        GlyphStyle::Unicode => match (color, piece_type) {
            (Color::White, PieceType::Pawn) => '♙',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::King) => '♔',
            (Color::Black, PieceType::Pawn) => '♟',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::King) => '♚',
        },
    }
}

fn cell_glyph(cell: &CellState, style: GlyphStyle) -> char {
    match (cell.kind, cell.color) {
        (Some(kind), Some(color)) => glyph(kind, color, style),
        _ => '.',
    }
}

/// Simple text renderer for a game snapshot
///
/// ```text
///     A B C D E F G H
///     ─ ─ ─ ─ ─ ─ ─ ─
/// 8 | r n b q k b n r
/// ...
/// 1 | R N B Q K B N R
///
/// White to move
/// ```
pub fn render(state: &GameState, style: GlyphStyle) -> String {
    let mut output = String::new();
    output.push_str("    A B C D E F G H\n");
    output.push_str("    ─ ─ ─ ─ ─ ─ ─ ─\n");

    // Cells arrive in display order, eight per rank starting at rank 8
    for (row, cells) in state.cells.chunks(8).enumerate() {
        output.push_str(&format!("{} |", 8 - row));
        for cell in cells {
            output.push(' ');
            output.push(cell_glyph(cell, style));
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&state.message);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_ascii_glyphs() {
        assert_eq!(glyph(PieceType::Knight, Color::White, GlyphStyle::Ascii), 'N');
        assert_eq!(glyph(PieceType::Queen, Color::Black, GlyphStyle::Ascii), 'q');
    }

    #[test]
    fn test_unicode_glyphs() {
        assert_eq!(glyph(PieceType::King, Color::White, GlyphStyle::Unicode), '♔');
        assert_eq!(glyph(PieceType::Pawn, Color::Black, GlyphStyle::Unicode), '♟');
    }

    #[test]
    fn test_render_start_position() {
        let output = render(&Game::new().current_state(), GlyphStyle::Ascii);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "    A B C D E F G H");
        assert_eq!(lines[2], "8 | r n b q k b n r");
        assert_eq!(lines[5], "5 | . . . . . . . .");
        assert_eq!(lines[9], "1 | R N B Q K B N R");
        assert_eq!(lines[11], "White to move");
    }

    #[test]
    fn test_render_after_move() {
        let mut game = Game::new();
        game.move_piece("e2", "e4", None).unwrap();
        let output = render(&game.current_state(), GlyphStyle::Unicode);

        assert!(output.contains("4 | . . . . ♙ . . ."));
        assert!(output.contains("2 | ♙ ♙ ♙ ♙ . ♙ ♙ ♙"));
        assert!(output.ends_with("Black to move\n"));
    }
}
