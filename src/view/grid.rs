//! Painting of the grid, its chrome and the status panel

use std::time::Instant;

use tsvgrid::font::FontFace;
use tsvgrid::geometry::{GridLayout, Rect};
use tsvgrid::model::AppModel;
use tsvgrid::table::TextMeasure;

use super::frame::{Frame, TextPainter};

const RESET_LABEL: &str = "Reset Sort";
/// Shown for a header whose text is empty
const EMPTY_HEADER_LABEL: &str = "Col";

/// Header text with the sort indicator when `col` is the sorted column
pub fn header_label(model: &AppModel, col: usize) -> String {
    let title = model
        .table
        .headers()
        .get(col)
        .map(String::as_str)
        .filter(|h| !h.is_empty())
        .unwrap_or(EMPTY_HEADER_LABEL);

    match model.table.active_sort() {
        Some(sort) if sort.column == col => format!("{} {}", title, sort.direction.indicator()),
        _ => title.to_string(),
    }
}

/// Vertical offset that centers one text line in a band of `height`
fn center_text(face: &FontFace, height: f32) -> f32 {
    ((height - face.line_height()) * 0.5).max(0.0)
}

pub fn render_reset_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    face: &FontFace,
    model: &AppModel,
    layout: &GridLayout,
) {
    let button = layout.reset_button;
    let theme = &model.theme.button;
    let border = 1.5 * model.metrics.scale_factor as f32;
    frame.draw_bordered_rect(button, theme.background, theme.border, border);

    let text_x = button.x + ((button.width - face.text_width(RESET_LABEL)) * 0.5).max(0.0);
    let text_y = button.y + center_text(face, button.height);
    painter.draw(frame, text_x, text_y, RESET_LABEL, theme.foreground);
}

/// Header band and every visible data row, clipped to the viewport
pub fn render_cells(
    frame: &mut Frame,
    painter: &mut TextPainter,
    face: &FontFace,
    model: &AppModel,
    layout: &GridLayout,
) {
    let viewport = layout.viewport;
    let theme = &model.theme.grid;
    let table = &model.table;
    let inset = model.metrics.text_inset;
    let left = layout.columns_left(model.grid.scroll_x);

    // Outer frame sits 1px outside the viewport
    frame.stroke_rect(
        Rect::new(
            viewport.x - 1.0,
            viewport.y - 1.0,
            viewport.width + 2.0,
            viewport.height + 2.0,
        ),
        theme.frame,
    );

    frame.set_clip(viewport);

    let visible_cols: Vec<usize> = (0..table.col_count())
        .filter(|&c| {
            let x = left + table.column_offset(c);
            x < viewport.right() && x + table.col_widths()[c] > viewport.x
        })
        .collect();

    let header_y = layout.header_top(model.grid.scroll_y);
    if header_y + layout.header_height > viewport.y {
        let text_y = header_y + center_text(face, layout.header_height);
        for &c in &visible_cols {
            let x = left + table.column_offset(c);
            let rect = Rect::new(x, header_y, table.col_widths()[c], layout.header_height);
            frame.fill_rect(rect, theme.header_background);
            frame.stroke_rect(rect, theme.header_border);
            painter.draw(frame, x + inset, text_y, &header_label(model, c), theme.header_foreground);
        }
    }

    let rows_top = layout.rows_top(model.grid.scroll_y);
    let text_offset = center_text(face, layout.row_height);
    let hover = model.grid.hover.filter(|_| model.grid.hover_alpha > 0.01);
    let hover_color = theme
        .hover_background
        .with_alpha((100.0 + 120.0 * model.grid.hover_alpha.clamp(0.0, 1.0)) as u8);

    for r in layout.visible_rows(table.row_count(), model.grid.scroll_y) {
        let y = rows_top + layout.row_height * r as f32;
        let base = if r % 2 == 0 {
            theme.row_background
        } else {
            theme.row_alt_background
        };

        for &c in &visible_cols {
            let x = left + table.column_offset(c);
            let rect = Rect::new(x, y, table.col_widths()[c], layout.row_height);
            frame.fill_rect(rect, base);
            if hover.is_some_and(|h| h.row == r && h.col == c) {
                frame.fill_rect(rect, hover_color);
            }
            frame.stroke_rect(rect, theme.cell_border);

            if let Some(text) = table.cell(r, c).filter(|t| !t.is_empty()) {
                painter.draw(frame, x + inset, y + text_offset, text, theme.cell_foreground);
            }
        }
    }

    frame.clear_clip();
}

/// Scrollbar tracks and thumbs for each axis that overflows
pub fn render_scrollbars(frame: &mut Frame, model: &AppModel, layout: &GridLayout) {
    let theme = &model.theme.scrollbar;
    let h = layout.horizontal_axis(model.table.content_width());
    let v = layout.vertical_axis(model.table.row_count());

    if let Some(thumb) = layout.horizontal_thumb(h, model.grid.scroll_x) {
        frame.fill_rect(layout.horizontal_track(), theme.track);
        frame.fill_rect(thumb, theme.thumb);
    }
    if let Some(thumb) = layout.vertical_thumb(v, model.grid.scroll_y) {
        frame.fill_rect(layout.vertical_track(), theme.track);
        frame.fill_rect(thumb, theme.thumb);
    }
}

/// Transient message panel at the top left while it is unexpired
pub fn render_status(
    frame: &mut Frame,
    painter: &mut TextPainter,
    face: &FontFace,
    model: &AppModel,
    layout: &GridLayout,
    now: Instant,
) {
    let Some(text) = model.status_text(now) else {
        return;
    };
    let theme = &model.theme.status;
    let pad = model.metrics.status_padding;
    let (x, y) = layout.status_origin;
    let panel = Rect::new(
        x,
        y,
        face.text_width(text) + pad * 2.0,
        face.line_height() + pad * 2.0,
    );

    frame.draw_bordered_rect(panel, theme.background, theme.border, 1.0);
    painter.draw(frame, panel.x + pad, panel.y + pad, text, theme.foreground);
}
