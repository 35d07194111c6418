//! Wheel scrolling, scroll clamping and scrollbar thumb dragging

use crate::geometry::GridLayout;
use crate::messages::FrameInput;
use crate::model::{AppModel, DragState};

/// Apply wheel notches to the vertical axis, or horizontal with shift held
pub(super) fn apply_wheel(model: &mut AppModel, input: &FrameInput) {
    if input.wheel == 0.0 {
        return;
    }
    let delta = input.wheel * model.metrics.wheel_step;
    if input.shift {
        model.grid.scroll_x -= delta;
    } else {
        model.grid.scroll_y -= delta;
    }
}

/// Clamp both scroll offsets into `[0, max(0, content - view)]`
pub fn clamp_scroll(model: &mut AppModel, layout: &GridLayout) {
    let h = layout.horizontal_axis(model.table.content_width());
    let v = layout.vertical_axis(model.table.row_count());
    model.grid.scroll_x = h.clamp(model.grid.scroll_x);
    model.grid.scroll_y = v.clamp(model.grid.scroll_y);
}

/// Advance the thumb drag state machine for one frame
///
/// Releasing the button ends any drag; a press on a thumb starts one; an
/// active drag moves the thumb with the pointer, keeping the grab offset.
pub(super) fn update_drag(model: &mut AppModel, input: &FrameInput, layout: &GridLayout) {
    let h = layout.horizontal_axis(model.table.content_width());
    let v = layout.vertical_axis(model.table.row_count());
    let (px, py) = input.pointer;

    if !input.held && model.grid.drag.is_dragging() {
        tracing::debug!(drag = ?model.grid.drag, "Scrollbar drag ended");
        model.grid.drag = DragState::Idle;
    }

    if input.pressed && !model.grid.drag.is_dragging() {
        if let Some(thumb) = layout
            .horizontal_thumb(h, model.grid.scroll_x)
            .filter(|t| t.contains(px, py))
        {
            model.grid.drag = DragState::Horizontal {
                grab_offset: px - thumb.x,
            };
        } else if let Some(thumb) = layout
            .vertical_thumb(v, model.grid.scroll_y)
            .filter(|t| t.contains(px, py))
        {
            model.grid.drag = DragState::Vertical {
                grab_offset: py - thumb.y,
            };
        }
        if model.grid.drag.is_dragging() {
            tracing::debug!(drag = ?model.grid.drag, "Scrollbar drag started");
        }
    }

    match model.grid.drag {
        DragState::Horizontal { grab_offset } if h.is_scrollable() => {
            let track = layout.horizontal_track();
            let offset = px - grab_offset - track.x;
            model.grid.scroll_x = h.scroll_for_thumb_offset(offset, layout.min_thumb_length);
        }
        DragState::Vertical { grab_offset } if v.is_scrollable() => {
            let track = layout.vertical_track();
            let offset = py - grab_offset - track.y;
            model.grid.scroll_y = v.scroll_for_thumb_offset(offset, layout.min_thumb_length);
        }
        _ => {}
    }
}
