//! Color themes for the grid viewer
//!
//! Themes are YAML files embedded at compile time and selected by id.

use serde::Deserialize;

pub const GRID_DARK_YAML: &str = include_str!("../themes/grid-dark.yaml");
pub const GRID_LIGHT_YAML: &str = include_str!("../themes/grid-light.yaml");

/// Id of the theme used when none is requested
pub const DEFAULT_THEME_ID: &str = "grid-dark";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier used on the command line
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "grid-dark",
        yaml: GRID_DARK_YAML,
    },
    BuiltinTheme {
        id: "grid-light",
        yaml: GRID_LIGHT_YAML,
    },
];

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Scale alpha by `factor` in `[0, 1]`
    pub fn fade(&self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|c| u8::from_str_radix(c, 16).map_err(|e| e.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// UI colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub background: String,
    pub grid: GridThemeData,
    pub scrollbar: ScrollbarThemeData,
    pub button: PanelThemeData,
    pub status: PanelThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridThemeData {
    pub frame: String,
    pub header_background: String,
    pub header_border: String,
    pub header_foreground: String,
    pub row_background: String,
    pub row_alt_background: String,
    pub cell_border: String,
    pub cell_foreground: String,
    /// Falls back to a soft blue when absent
    #[serde(default)]
    pub hover_background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrollbarThemeData {
    pub track: String,
    pub thumb: String,
}

/// Bordered panel with text: the reset button and the status message
#[derive(Debug, Clone, Deserialize)]
pub struct PanelThemeData {
    pub background: String,
    pub border: String,
    pub foreground: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub grid: GridTheme,
    pub scrollbar: ScrollbarTheme,
    pub button: PanelTheme,
    pub status: PanelTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridTheme {
    pub frame: Color,
    pub header_background: Color,
    pub header_border: Color,
    pub header_foreground: Color,
    pub row_background: Color,
    pub row_alt_background: Color,
    pub cell_border: Color,
    pub cell_foreground: Color,
    /// Opaque hover color; the renderer applies the fade alpha
    pub hover_background: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarTheme {
    pub track: Color,
    pub thumb: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    pub background: Color,
    pub border: Color,
    pub foreground: Color,
}

impl PanelTheme {
    fn from_data(data: &PanelThemeData) -> Result<Self, String> {
        Ok(Self {
            background: Color::from_hex(&data.background)?,
            border: Color::from_hex(&data.border)?,
            foreground: Color::from_hex(&data.foreground)?,
        })
    }
}

const DEFAULT_HOVER: Color = Color::rgb(0x78, 0xAA, 0xFF);

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let grid = &data.ui.grid;
        Ok(Theme {
            name: data.name,
            background: Color::from_hex(&data.ui.background)?,
            grid: GridTheme {
                frame: Color::from_hex(&grid.frame)?,
                header_background: Color::from_hex(&grid.header_background)?,
                header_border: Color::from_hex(&grid.header_border)?,
                header_foreground: Color::from_hex(&grid.header_foreground)?,
                row_background: Color::from_hex(&grid.row_background)?,
                row_alt_background: Color::from_hex(&grid.row_alt_background)?,
                cell_border: Color::from_hex(&grid.cell_border)?,
                cell_foreground: Color::from_hex(&grid.cell_foreground)?,
                hover_background: grid
                    .hover_background
                    .as_ref()
                    .map(|s| Color::from_hex(s))
                    .transpose()?
                    .unwrap_or(DEFAULT_HOVER)
                    .with_alpha(255),
            },
            scrollbar: ScrollbarTheme {
                track: Color::from_hex(&data.ui.scrollbar.track)?,
                thumb: Color::from_hex(&data.ui.scrollbar.thumb)?,
            },
            button: PanelTheme::from_data(&data.ui.button)?,
            status: PanelTheme::from_data(&data.ui.status)?,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(GRID_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Grid Dark".to_string(),
                background: Color::rgb(20, 20, 28),
                grid: GridTheme {
                    frame: Color::rgb(80, 100, 130),
                    header_background: Color::rgb(35, 50, 80),
                    header_border: Color::rgb(70, 90, 120),
                    header_foreground: Color::rgb(220, 235, 255),
                    row_background: Color::rgb(28, 34, 48),
                    row_alt_background: Color::rgb(32, 40, 55),
                    cell_border: Color::rgb(50, 65, 90),
                    cell_foreground: Color::rgb(230, 240, 255),
                    hover_background: DEFAULT_HOVER,
                },
                scrollbar: ScrollbarTheme {
                    track: Color::rgb(25, 30, 40),
                    thumb: Color::rgba(120, 160, 220, 200),
                },
                button: PanelTheme {
                    background: Color::rgb(45, 70, 110),
                    border: Color::rgb(160, 200, 255),
                    foreground: Color::rgb(220, 235, 255),
                },
                status: PanelTheme {
                    background: Color::rgba(15, 20, 30, 200),
                    border: Color::rgba(140, 180, 240, 220),
                    foreground: Color::rgb(220, 235, 255),
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
