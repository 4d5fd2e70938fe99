// Configuration for the terminal front end, loaded from YAML

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::draw::DrawRules;
use crate::error::ConfigError;

/// Environment variable naming the config file when `--config` is not given
pub const CONFIG_PATH_ENV: &str = "CHESS_CONFIG_PATH";

/// How the renderer draws pieces
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// Letters: uppercase White, lowercase Black
    #[default]
    Ascii,
    /// Unicode chess symbols
    Unicode,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glyphs: GlyphStyle,
    pub draw_rules: DrawRules,
    /// List the legal moves under the board
    pub show_legal_moves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::Ascii,
            draw_rules: DrawRules::default(),
            show_legal_moves: false,
        }
    }
}

impl Config {
    /// Load from `path`; a missing path or file yields the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::warn!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::load(None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.glyphs, GlyphStyle::Ascii);
        assert!(cfg.draw_rules.threefold_repetition);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = Config::load(Some(Path::new("/nonexistent/chess.yaml"))).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_partial_yaml() {
        let cfg = Config::from_yaml("glyphs: unicode\ndraw_rules:\n  fifty_move_rule: false\n").unwrap();

        assert_eq!(cfg.glyphs, GlyphStyle::Unicode);
        assert!(!cfg.draw_rules.fifty_move_rule);
        assert!(cfg.draw_rules.insufficient_material, "Unset fields keep defaults");
        assert!(!cfg.show_legal_moves);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::from_yaml("glyphs: sparkly\n").is_err());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        // A directory exists but cannot be read as a file
        let dir = std::env::temp_dir();
        let result = Config::load(Some(dir.as_path()));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
