//! Command-line argument parsing
//!
//! The table itself always arrives on stdin; the flags only shape the window.

use clap::Parser;
use std::path::PathBuf;

use crate::theme::{Theme, DEFAULT_THEME_ID};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_TITLE: &str = "TSV Grid";

/// Interactive viewer for tab-separated data read from stdin
#[derive(Parser, Debug)]
#[command(
    name = "tsvgrid",
    version,
    about = "Interactive viewer for tab-separated data read from stdin"
)]
pub struct CliArgs {
    /// TrueType font file used for all text
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Built-in color theme (grid-dark, grid-light)
    #[arg(long, value_name = "ID", default_value = DEFAULT_THEME_ID)]
    pub theme: String,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub font: Option<PathBuf>,
    pub theme: Theme,
    /// Logical window size, never zero
    pub window_size: (u32, u32),
    pub title: String,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let theme = Theme::from_builtin(&self.theme)?;
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        Ok(StartupConfig {
            font: self.font,
            theme,
            window_size: (self.width, self.height),
            title: self.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("tsvgrid").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config.window_size, (1200, 800));
        assert_eq!(config.title, "TSV Grid");
        assert_eq!(config.theme.name, "Grid Dark");
        assert!(config.font.is_none());
    }

    #[test]
    fn test_font_and_theme() {
        let config = parse(&["--font", "/tmp/x.ttf", "--theme", "grid-light"])
            .into_config()
            .unwrap();
        assert_eq!(config.font, Some(PathBuf::from("/tmp/x.ttf")));
        assert_eq!(config.theme.name, "Grid Light");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let err = parse(&["--theme", "nope"]).into_config().unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(parse(&["--width", "0"]).into_config().is_err());
    }

    #[test]
    fn test_custom_size_and_title() {
        let config = parse(&["--width", "640", "--height", "480", "--title", "data"])
            .into_config()
            .unwrap();
        assert_eq!(config.window_size, (640, 480));
        assert_eq!(config.title, "data");
    }
}
