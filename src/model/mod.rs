//! Application model - the complete state of the viewer
//!
//! Follows the Elm Architecture: the runtime feeds messages to
//! [`crate::update::update`], which mutates this model, and the renderer
//! reads it back each frame.

pub mod grid;
pub mod status;

pub use grid::{CellPosition, DragState, GridState, HOVER_FADE_RATE};
pub use status::{
    TransientMessage, COPY_MESSAGE_DURATION, COPY_PREVIEW_CHARS, RESET_MESSAGE_DURATION,
};

use crate::table::{ColumnSizing, Table, TextMeasure};
use crate::theme::Theme;

/// Pixel sizes of the grid chrome, multiplied by the display scale factor
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledMetrics {
    pub scale_factor: f64,
    pub font_size: f32,
    pub row_height: f32,
    pub header_height: f32,
    /// Gap between the window edge and the grid
    pub margin: f32,
    /// Space above the grid reserved for the reset button and status panel
    pub toolbar_height: f32,
    pub scrollbar_thickness: f32,
    pub min_thumb_length: f32,
    /// Left inset of cell and header text
    pub text_inset: f32,
    pub button_width: f32,
    pub button_height: f32,
    /// Scroll distance of one wheel notch
    pub wheel_step: f32,
    pub status_padding: f32,
    pub column_sizing: ColumnSizing,
}

impl ScaledMetrics {
    pub fn new(scale_factor: f64) -> Self {
        let s = scale_factor as f32;
        Self {
            scale_factor,
            font_size: 25.0 * s,
            row_height: 40.0 * s,
            header_height: 48.0 * s,
            margin: 12.0 * s,
            toolbar_height: 32.0 * s,
            scrollbar_thickness: 10.0 * s,
            min_thumb_length: 24.0 * s,
            text_inset: 6.0 * s,
            button_width: 140.0 * s,
            button_height: 36.0 * s,
            wheel_step: 40.0 * s,
            status_padding: 6.0 * s,
            column_sizing: ColumnSizing::new(s),
        }
    }
}

impl Default for ScaledMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The loaded data and its sort state
    pub table: Table,
    /// Scroll, hover and drag state
    pub grid: GridState,
    /// Transient feedback shown over the toolbar
    pub status: Option<TransientMessage>,
    /// Theme for colors
    pub theme: Theme,
    pub metrics: ScaledMetrics,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a model for a freshly ingested table
    ///
    /// Column widths stay zero until [`AppModel::apply_font`] runs.
    pub fn new(table: Table, theme: Theme, window_width: u32, window_height: u32) -> Self {
        Self {
            table,
            grid: GridState::new(),
            status: None,
            theme,
            metrics: ScaledMetrics::default(),
            window_size: (window_width, window_height),
        }
    }

    /// Adopt the display scale and measure column widths with the chosen font
    ///
    /// Widths are measured once; later resizes and scale changes keep them.
    pub fn apply_font(&mut self, measure: &dyn TextMeasure, scale_factor: f64) {
        self.metrics = ScaledMetrics::new(scale_factor);
        self.table
            .layout_columns(measure, &self.metrics.column_sizing);
    }

    /// Status text if one is showing at `now`
    pub fn status_text(&self, now: std::time::Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| !m.is_expired_at(now))
            .map(|m| m.text.as_str())
    }
}
