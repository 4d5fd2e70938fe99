use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_chess_api::config::GlyphStyle;

#[derive(Parser)]
#[command(name = "rust-chess", version, about = "Play chess in the terminal")]
pub struct Cli {
    /// Draw pieces with unicode chess symbols
    #[arg(short = 'e', long = "emoji")]
    pub emoji: bool,

    /// Glyph style, overrides the config file
    #[arg(long, value_enum)]
    pub glyphs: Option<GlyphStyle>,

    /// YAML config file (defaults to $CHESS_CONFIG_PATH)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive game (default)
    Play,
    /// Apply moves such as e2e4 or e7e8q and print the resulting position
    Replay {
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Cli {
    /// Command line flags win over the config file
    pub fn glyph_style(&self, configured: GlyphStyle) -> GlyphStyle {
        if self.emoji {
            GlyphStyle::Unicode
        } else {
            self.glyphs.unwrap_or(configured)
        }
    }
}
