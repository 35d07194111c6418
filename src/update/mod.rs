//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod interaction;
mod scroll;

use crate::commands::Cmd;
use crate::geometry::GridLayout;
use crate::messages::Msg;
use crate::model::{AppModel, TransientMessage};

#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use interaction::update_frame;
pub use scroll::clamp_scroll;

/// How long a clipboard failure stays on screen
const CLIPBOARD_ERROR_DURATION: std::time::Duration = std::time::Duration::from_millis(1800);

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Frame(input) => {
            let layout = GridLayout::compute(model.window_size, &model.metrics);
            update_frame(model, &input, &layout)
        }
        Msg::Resize(width, height) => {
            model.window_size = (width, height);
            let layout = GridLayout::compute(model.window_size, &model.metrics);
            clamp_scroll(model, &layout);
            None
        }
        Msg::ClipboardFailed(error) => {
            tracing::warn!("Clipboard write failed: {}", error);
            model.status = Some(TransientMessage::new(
                "Clipboard unavailable",
                CLIPBOARD_ERROR_DURATION,
                std::time::Instant::now(),
            ));
            None
        }
    }
}

/// Update with debug tracing: logs grid state transitions per message
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Frames arrive at display rate; only their effects are logged
    let is_noisy = matches!(&msg, Msg::Frame(_));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = GridSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = GridSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "grid", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Frame(_) => "Frame".to_string(),
        Msg::Resize(w, h) => format!("Resize({}, {})", w, h),
        Msg::ClipboardFailed(_) => "ClipboardFailed".to_string(),
    }
}
