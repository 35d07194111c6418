//! Accumulates window events between frames into one `FrameInput`

use std::time::Instant;

use tsvgrid::messages::FrameInput;

#[derive(Debug, Default)]
pub struct InputCollector {
    pointer: (f32, f32),
    wheel: f32,
    pressed: bool,
    held: bool,
    shift: bool,
}

impl InputCollector {
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Primary button transition; a press is kept until the next frame
    pub fn primary_button(&mut self, down: bool) {
        if down && !self.held {
            self.pressed = true;
        }
        self.held = down;
    }

    /// Wheel movement in notches, positive away from the user
    pub fn wheel(&mut self, notches: f32) {
        self.wheel += notches;
    }

    pub fn set_shift(&mut self, shift: bool) {
        self.shift = shift;
    }

    /// Snapshot for this frame, clearing per-frame edges
    pub fn take_frame(&mut self, now: Instant) -> FrameInput {
        let input = FrameInput {
            pointer: self.pointer,
            wheel: self.wheel,
            pressed: self.pressed,
            held: self.held,
            shift: self.shift,
            now,
        };
        self.wheel = 0.0;
        self.pressed = false;
        input
    }
}
