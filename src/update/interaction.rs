//! Per-frame interaction controller
//!
//! Each frame runs, in order: wheel scroll, clamp, scrollbar drag, hover
//! detection, hover fade and click dispatch. While a thumb is being dragged
//! hover detection and clicks are skipped, but the fade still advances.

use crate::commands::Cmd;
use crate::geometry::GridLayout;
use crate::messages::FrameInput;
use crate::model::{AppModel, CellPosition, TransientMessage};

use super::scroll::{apply_wheel, clamp_scroll, update_drag};

/// Run the interaction controller for one frame
pub fn update_frame(model: &mut AppModel, input: &FrameInput, layout: &GridLayout) -> Option<Cmd> {
    apply_wheel(model, input);
    clamp_scroll(model, layout);
    update_drag(model, input, layout);

    let dragging = model.grid.drag.is_dragging();
    if !dragging {
        model.grid.hover = hit_test_cell(model, layout, input.pointer);
    }
    model.grid.step_hover_fade();

    let cmd = if input.pressed && !dragging {
        dispatch_click(model, layout, input)
    } else {
        None
    };

    if model
        .status
        .as_ref()
        .is_some_and(|m| m.is_expired_at(input.now))
    {
        model.status = None;
    }

    cmd
}

/// Data cell under the pointer, if the pointer is inside the viewport
fn hit_test_cell(model: &AppModel, layout: &GridLayout, (px, py): (f32, f32)) -> Option<CellPosition> {
    if !layout.viewport.contains(px, py) {
        return None;
    }

    let rows_top = layout.rows_top(model.grid.scroll_y);
    if py < rows_top {
        return None;
    }
    let row = ((py - rows_top) / layout.row_height) as usize;
    if row >= model.table.row_count() {
        return None;
    }

    let col = model
        .table
        .column_at(px - layout.columns_left(model.grid.scroll_x))?;
    Some(CellPosition::new(row, col))
}

/// Header column under the pointer, if the pointer is on the header band
fn hit_test_header(model: &AppModel, layout: &GridLayout, (px, py): (f32, f32)) -> Option<usize> {
    if !layout.viewport.contains(px, py) {
        return None;
    }

    let top = layout.header_top(model.grid.scroll_y);
    if py < top || py >= top + layout.header_height {
        return None;
    }

    model
        .table
        .column_at(px - layout.columns_left(model.grid.scroll_x))
}

/// Handle a press: reset button, then header sort, then cell copy
fn dispatch_click(model: &mut AppModel, layout: &GridLayout, input: &FrameInput) -> Option<Cmd> {
    let (px, py) = input.pointer;

    if layout.reset_button.contains(px, py) {
        model.table.reset();
        model.status = Some(TransientMessage::sort_reset(input.now));
        tracing::info!("Sort reset");
        return None;
    }

    if let Some(col) = hit_test_header(model, layout, input.pointer) {
        model.table.sort_by(col);
        tracing::info!(
            column = col,
            ascending = model.table.sort_ascending(),
            "Sorted by column"
        );
        return None;
    }

    let hover = model.grid.hover?;
    let text = model.table.cell(hover.row, hover.col)?.to_string();
    model.status = Some(TransientMessage::copied(&text, input.now));
    tracing::info!(row = hover.row, col = hover.col, len = text.len(), "Copied cell");
    Some(Cmd::CopyToClipboard(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScaledMetrics;
    use crate::table::{parse_tsv, Table};
    use crate::theme::Theme;
    use std::time::Instant;

    fn model(input: &str, widths: &[f32]) -> AppModel {
        let mut table = Table::new(parse_tsv(input.as_bytes()).unwrap());
        table.set_column_widths(widths.to_vec());
        AppModel::new(table, Theme::default(), 1200, 800)
    }

    fn layout(model: &AppModel) -> GridLayout {
        GridLayout::compute(model.window_size, &ScaledMetrics::default())
    }

    #[test]
    fn test_hit_test_cell_accounts_for_header() {
        let m = model("a\tb\n1\t2\n3\t4\n", &[100.0, 100.0]);
        let l = layout(&m);

        // Header band: y 44..92
        assert_eq!(hit_test_cell(&m, &l, (20.0, 60.0)), None);
        // First row: y 92..132
        assert_eq!(hit_test_cell(&m, &l, (20.0, 100.0)), Some(CellPosition::new(0, 0)));
        // Second row, second column
        assert_eq!(hit_test_cell(&m, &l, (150.0, 140.0)), Some(CellPosition::new(1, 1)));
        // Below the last row
        assert_eq!(hit_test_cell(&m, &l, (20.0, 200.0)), None);
        // Right of the last column
        assert_eq!(hit_test_cell(&m, &l, (300.0, 100.0)), None);
    }

    #[test]
    fn test_hit_test_header_requires_viewport() {
        let mut m = model("a\tb\n1\t2\n", &[100.0, 100.0]);
        let l = layout(&m);

        assert_eq!(hit_test_header(&m, &l, (150.0, 50.0)), Some(1));

        // Scrolled header band extends above the viewport, which is not clickable
        m.grid.scroll_y = 20.0;
        assert_eq!(hit_test_header(&m, &l, (150.0, 30.0)), None);
    }

    #[test]
    fn test_status_expires() {
        let mut m = model("a\n1\n", &[100.0]);
        let l = layout(&m);
        let now = Instant::now();
        m.status = Some(TransientMessage::sort_reset(now));

        update_frame(&mut m, &FrameInput::at((0.0, 0.0), now), &l);
        assert!(m.status.is_some());

        let later = now + std::time::Duration::from_secs(2);
        update_frame(&mut m, &FrameInput::at((0.0, 0.0), later), &l);
        assert!(m.status.is_none());
    }
}
