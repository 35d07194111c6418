//! Screen geometry of the grid
//!
//! Single source of truth for where the grid viewport, reset button and
//! scrollbars sit. Both the interaction controller and the renderer derive
//! their rectangles from here so hit-testing always matches what is drawn.

use std::ops::Range;

use crate::model::ScaledMetrics;

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Scroll extent along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAxis {
    /// Total size of the grid content
    pub content: f32,
    /// Visible size of the viewport
    pub view: f32,
}

impl ScrollAxis {
    pub fn new(content: f32, view: f32) -> Self {
        Self { content, view }
    }

    /// Content overflows the viewport, so a scrollbar is shown
    pub fn is_scrollable(&self) -> bool {
        self.content > self.view
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content - self.view).max(0.0)
    }

    /// Clamp an offset into `[0, max_scroll]`
    pub fn clamp(&self, scroll: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        scroll.clamp(0.0, self.max_scroll())
    }

    /// Thumb size proportional to the visible fraction, never below `min`
    pub fn thumb_length(&self, min: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        (self.view * (self.view / self.content)).max(min)
    }

    /// Distance the thumb can travel inside the track
    pub fn thumb_travel(&self, min: f32) -> f32 {
        (self.view - self.thumb_length(min)).max(0.0)
    }

    /// Thumb position relative to the track start for a scroll offset
    pub fn thumb_offset(&self, scroll: f32, min: f32) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (scroll / max) * self.thumb_travel(min)
    }

    /// Scroll offset for a thumb position relative to the track start
    ///
    /// The position is clamped to the track first, so the result always lies
    /// within `[0, max_scroll]`.
    pub fn scroll_for_thumb_offset(&self, offset: f32, min: f32) -> f32 {
        let travel = self.thumb_travel(min);
        if travel <= 0.0 {
            return 0.0;
        }
        let ratio = offset.clamp(0.0, travel) / travel;
        self.clamp(ratio * self.max_scroll())
    }
}

/// Window-space layout of the grid for one window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// The clipped region the grid is drawn into
    pub viewport: Rect,
    pub header_height: f32,
    pub row_height: f32,
    pub scrollbar_thickness: f32,
    pub min_thumb_length: f32,
    pub reset_button: Rect,
    /// Top-left corner of the status panel
    pub status_origin: (f32, f32),
}

impl GridLayout {
    pub fn compute(window_size: (u32, u32), metrics: &ScaledMetrics) -> Self {
        let (width, height) = (window_size.0 as f32, window_size.1 as f32);
        let margin = metrics.margin;
        let top = margin + metrics.toolbar_height;

        let viewport = Rect::new(
            margin,
            top,
            (width - margin * 2.0).max(0.0),
            (height - top - margin).max(0.0),
        );

        let reset_button = Rect::new(
            viewport.right() - metrics.button_width,
            margin - metrics.status_padding,
            metrics.button_width,
            metrics.button_height,
        );

        Self {
            viewport,
            header_height: metrics.header_height,
            row_height: metrics.row_height,
            scrollbar_thickness: metrics.scrollbar_thickness,
            min_thumb_length: metrics.min_thumb_length,
            reset_button,
            status_origin: (margin, margin - metrics.status_padding),
        }
    }

    pub fn horizontal_axis(&self, content_width: f32) -> ScrollAxis {
        ScrollAxis::new(content_width, self.viewport.width)
    }

    pub fn vertical_axis(&self, row_count: usize) -> ScrollAxis {
        ScrollAxis::new(self.content_height(row_count), self.viewport.height)
    }

    /// Header plus every row
    pub fn content_height(&self, row_count: usize) -> f32 {
        self.header_height + self.row_height * row_count as f32
    }

    /// Track along the bottom edge of the viewport
    pub fn horizontal_track(&self) -> Rect {
        Rect::new(
            self.viewport.x,
            self.viewport.bottom() - self.scrollbar_thickness,
            self.viewport.width,
            self.scrollbar_thickness,
        )
    }

    /// Track along the right edge of the viewport
    pub fn vertical_track(&self) -> Rect {
        Rect::new(
            self.viewport.right() - self.scrollbar_thickness,
            self.viewport.y,
            self.scrollbar_thickness,
            self.viewport.height,
        )
    }

    /// Horizontal thumb, or `None` when the content fits
    pub fn horizontal_thumb(&self, axis: ScrollAxis, scroll_x: f32) -> Option<Rect> {
        if !axis.is_scrollable() {
            return None;
        }
        let track = self.horizontal_track();
        Some(Rect::new(
            track.x + axis.thumb_offset(scroll_x, self.min_thumb_length),
            track.y,
            axis.thumb_length(self.min_thumb_length),
            track.height,
        ))
    }

    /// Vertical thumb, or `None` when the content fits
    pub fn vertical_thumb(&self, axis: ScrollAxis, scroll_y: f32) -> Option<Rect> {
        if !axis.is_scrollable() {
            return None;
        }
        let track = self.vertical_track();
        Some(Rect::new(
            track.x,
            track.y + axis.thumb_offset(scroll_y, self.min_thumb_length),
            track.width,
            axis.thumb_length(self.min_thumb_length),
        ))
    }

    /// Top of the header row after vertical scrolling
    pub fn header_top(&self, scroll_y: f32) -> f32 {
        self.viewport.y - scroll_y
    }

    /// Top of the first data row after vertical scrolling
    pub fn rows_top(&self, scroll_y: f32) -> f32 {
        self.header_top(scroll_y) + self.header_height
    }

    /// Left edge of column 0 after horizontal scrolling
    pub fn columns_left(&self, scroll_x: f32) -> f32 {
        self.viewport.x - scroll_x
    }

    /// Rows that overlap the viewport at `scroll_y`
    pub fn visible_rows(&self, row_count: usize, scroll_y: f32) -> Range<usize> {
        if self.row_height <= 0.0 {
            return 0..0;
        }
        let top = self.rows_top(scroll_y);
        let first = ((self.viewport.y - top) / self.row_height).floor().max(0.0) as usize;
        let last = ((self.viewport.bottom() - top) / self.row_height).ceil().max(0.0) as usize;
        first.min(row_count)..last.min(row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::compute((1200, 800), &ScaledMetrics::default())
    }

    #[test]
    fn test_viewport_from_window() {
        let l = layout();

        assert_eq!(l.viewport, Rect::new(12.0, 44.0, 1176.0, 744.0));
        assert_eq!(l.reset_button, Rect::new(1048.0, 6.0, 140.0, 36.0));
    }

    #[test]
    fn test_visible_rows() {
        let l = layout();

        // Rows start at y=92 and the viewport ends at 788
        assert_eq!(l.visible_rows(100, 0.0), 0..18);
        assert_eq!(l.visible_rows(100, 400.0), 8..28);
        assert_eq!(l.visible_rows(5, 0.0), 0..5);
        assert_eq!(l.visible_rows(0, 0.0), 0..0);
    }

    #[test]
    fn test_tiny_window_viewport_never_negative() {
        let l = GridLayout::compute((10, 10), &ScaledMetrics::default());

        assert_eq!(l.viewport.width, 0.0);
        assert_eq!(l.viewport.height, 0.0);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.9, 9.9));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, -0.1));
    }

    #[test]
    fn test_axis_clamp() {
        let axis = ScrollAxis::new(1000.0, 400.0);
        assert_eq!(axis.max_scroll(), 600.0);
        assert_eq!(axis.clamp(-5.0), 0.0);
        assert_eq!(axis.clamp(700.0), 600.0);
        assert_eq!(axis.clamp(250.0), 250.0);

        let fits = ScrollAxis::new(300.0, 400.0);
        assert_eq!(fits.clamp(50.0), 0.0);
        assert!(!fits.is_scrollable());
    }

    #[test]
    fn test_thumb_length_and_offset() {
        let axis = ScrollAxis::new(1000.0, 400.0);

        assert_eq!(axis.thumb_length(24.0), 160.0);
        assert_eq!(axis.thumb_offset(0.0, 24.0), 0.0);
        assert_eq!(axis.thumb_offset(600.0, 24.0), 240.0);
        assert_eq!(axis.thumb_offset(300.0, 24.0), 120.0);
    }

    #[test]
    fn test_thumb_length_floored() {
        let axis = ScrollAxis::new(100_000.0, 400.0);
        assert_eq!(axis.thumb_length(24.0), 24.0);
    }

    #[test]
    fn test_scroll_for_thumb_offset_inverts_thumb_offset() {
        let axis = ScrollAxis::new(1000.0, 400.0);

        assert_eq!(axis.scroll_for_thumb_offset(120.0, 24.0), 300.0);
        assert_eq!(axis.scroll_for_thumb_offset(-50.0, 24.0), 0.0);
        assert_eq!(axis.scroll_for_thumb_offset(10_000.0, 24.0), 600.0);
    }

    #[test]
    fn test_scroll_for_thumb_offset_without_travel() {
        // Thumb floor exceeds the view, leaving no room to move
        let axis = ScrollAxis::new(100.0, 20.0);
        assert_eq!(axis.scroll_for_thumb_offset(5.0, 24.0), 0.0);
    }

    #[test]
    fn test_thumbs_only_when_scrollable() {
        let l = layout();
        let fits = l.horizontal_axis(500.0);
        assert!(l.horizontal_thumb(fits, 0.0).is_none());

        let wide = l.horizontal_axis(2352.0);
        let thumb = l.horizontal_thumb(wide, 0.0).unwrap();
        assert_eq!(thumb.x, 12.0);
        assert_eq!(thumb.width, 588.0);
        assert_eq!(thumb.y, 44.0 + 744.0 - 10.0);
    }
}
