//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

/// Pointer, wheel and modifier state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in window pixels
    pub pointer: (f32, f32),
    /// Wheel movement since the last frame, in notches; positive scrolls
    /// toward the start of the content
    pub wheel: f32,
    /// Primary button went down during this frame
    pub pressed: bool,
    /// Primary button is currently down
    pub held: bool,
    /// Modifier that redirects the wheel to horizontal scrolling
    pub shift: bool,
    /// Clock reading for this frame
    pub now: Instant,
}

impl FrameInput {
    /// An idle frame with the pointer at `pointer`
    pub fn at(pointer: (f32, f32), now: Instant) -> Self {
        Self {
            pointer,
            wheel: 0.0,
            pressed: false,
            held: false,
            shift: false,
            now,
        }
    }
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Run the interaction controller for one frame
    Frame(FrameInput),
    /// Window resized (physical width, height)
    Resize(u32, u32),
    /// The clipboard rejected a copy
    ClipboardFailed(String),
}
