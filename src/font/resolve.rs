//! Font file discovery with fallback to the built-in face

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

use super::{BuiltinFont, FontFace, TrueTypeFace};

/// Environment variable naming a font file to prefer over system fonts
pub const FONT_ENV_VAR: &str = "TSVGRID_FONT";

/// Conventional locations of a proportional sans font
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[derive(Debug)]
pub enum FontError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Read { path, source } => {
                write!(f, "Failed to read font {}: {}", path.display(), source)
            }
            FontError::Parse { path, message } => {
                write!(f, "Failed to parse font {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Read { source, .. } => Some(source),
            FontError::Parse { .. } => None,
        }
    }
}

/// Load a TrueType face from `path` at `size` pixels
pub fn load_font_file(path: &Path, size: f32, spacing: f32) -> Result<FontFace, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let font = Font::from_bytes(
        bytes,
        FontSettings {
            scale: size,
            ..FontSettings::default()
        },
    )
    .map_err(|message| FontError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    })?;
    Ok(FontFace::TrueType(TrueTypeFace::new(font, size, spacing)))
}

/// Paths to try in order: explicit override, environment, system fonts
pub fn candidate_paths(override_path: Option<&Path>, env_value: Option<OsString>) -> Vec<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain(env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect()
}

/// Pick the first loadable font, or the built-in face when none loads
pub fn resolve_font(override_path: Option<&Path>, size: f32, spacing: f32) -> FontFace {
    let candidates = candidate_paths(override_path, std::env::var_os(FONT_ENV_VAR));
    resolve_from(&candidates, size, spacing)
}

pub(crate) fn resolve_from(candidates: &[PathBuf], size: f32, spacing: f32) -> FontFace {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_font_file(path, size, spacing) {
            Ok(face) => {
                tracing::info!(path = %path.display(), size, "Loaded font");
                return face;
            }
            Err(e) => tracing::warn!("{}", e),
        }
    }

    tracing::warn!("No usable font file found, using built-in bitmap font");
    FontFace::Builtin(BuiltinFont::new(size, spacing))
}
