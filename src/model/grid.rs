//! View state of the grid: scroll offsets, hover and scrollbar drag

/// Position of a cell in the grid (display order)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Scrollbar thumb drag in progress
///
/// `grab_offset` is the pointer distance from the thumb's leading edge at the
/// moment the drag started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Horizontal {
        grab_offset: f32,
    },
    Vertical {
        grab_offset: f32,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

/// Fraction of the remaining distance `hover_alpha` moves each frame
pub const HOVER_FADE_RATE: f32 = 0.2;

/// Interactive state of the grid view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridState {
    /// Horizontal scroll offset in pixels
    pub scroll_x: f32,
    /// Vertical scroll offset in pixels
    pub scroll_y: f32,
    /// Cell under the pointer
    pub hover: Option<CellPosition>,
    /// Fade level of the hover highlight, 0.0..=1.0
    pub hover_alpha: f32,
    pub drag: DragState,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ease `hover_alpha` toward 1.0 while a cell is hovered, else toward 0.0
    pub fn step_hover_fade(&mut self) {
        let target = if self.hover.is_some() { 1.0 } else { 0.0 };
        self.hover_alpha += (target - self.hover_alpha) * HOVER_FADE_RATE;
    }
}
