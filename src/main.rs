mod cli;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use thiserror::Error;

use rust_chess_api::board::Move;
use rust_chess_api::config::{Config, GlyphStyle, CONFIG_PATH_ENV};
use rust_chess_api::error::{ConfigError, GameError};
use rust_chess_api::game::Game;
use rust_chess_api::ui::input::{parse_command, Command};
use rust_chess_api::ui::renderer::render;

const PROMPT_HELP: &str = "Enter a move in the following format: A2 A3 (case insensitive)";

/// Failures that end the program
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("{input}: {source}")]
    Rejected {
        input: String,
        #[source]
        source: GameError,
    },
}

fn main() -> ExitCode {
    // Initialize logger
    let env = Env::default().filter_or("CHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    match run(cli::Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), AppError> {
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    let cfg = Config::load(cfg_path.as_deref())?;
    let style = cli.glyph_style(cfg.glyphs);

    match cli.command {
        Some(cli::Commands::Replay { ref moves }) => replay(&cfg, style, moves),
        Some(cli::Commands::Play) | None => play(&cfg, style),
    }
}

/// Apply every move in order, stopping at the first rejected one
fn replay(cfg: &Config, style: GlyphStyle, moves: &[String]) -> Result<(), AppError> {
    let mut game = Game::with_rules(cfg.draw_rules);

    for text in moves {
        let rejected = |source: GameError| AppError::Rejected {
            input: text.clone(),
            source,
        };
        let mv: Move = text.parse().map_err(rejected)?;
        game.play(mv).map_err(rejected)?;
    }

    print!("{}", render(&game.current_state(), style));
    Ok(())
}

/// Render, read a move, submit it, repeat
fn play(cfg: &Config, style: GlyphStyle) -> Result<(), AppError> {
    let mut game = Game::with_rules(cfg.draw_rules);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{}", render(&game.current_state(), style));
        if game.is_over() {
            info!("{}", game.message());
            return Ok(());
        }
        if cfg.show_legal_moves {
            let moves: Vec<String> = game.legal_moves().iter().map(|mv| mv.to_string()).collect();
            println!("Legal moves: {}", moves.join(" "));
        }
        println!("{}", PROMPT_HELP);
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()), // EOF
        };

        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => {
                println!("Moves: two squares separated by space, comma or dash (e2 e4, e2-e4, e2e4).");
                println!("Promotion: add the piece letter (e7 e8 q). Type quit to leave.");
            }
            Some(Command::Move {
                from,
                to,
                promotion,
            }) => {
                if let Err(e) = game.move_piece(&from, &to, promotion) {
                    println!("Rejected: {}", e);
                }
            }
            None => println!("Could not read that move."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_replay_accepts_legal_moves() {
        let cfg = Config::default();
        assert!(replay(&cfg, GlyphStyle::Ascii, &moves(&["e2e4", "e7e5", "g1f3"])).is_ok());
    }

    #[test]
    fn test_replay_reports_rejected_move() {
        let cfg = Config::default();
        let err = replay(&cfg, GlyphStyle::Ascii, &moves(&["e2e4", "e2e4"])).unwrap_err();

        match err {
            AppError::Rejected { input, source } => {
                assert_eq!(input, "e2e4");
                assert!(matches!(source, GameError::EmptySquare(_)));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_replay_reports_unparsable_move() {
        let cfg = Config::default();
        let err = replay(&cfg, GlyphStyle::Ascii, &moves(&["e2x4"])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Rejected {
                source: GameError::InvalidSquare(_),
                ..
            }
        ));
    }
}
