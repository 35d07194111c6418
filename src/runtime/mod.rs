//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window and clipboard
//! - `input` - Per-frame accumulation of pointer, wheel and modifier state

pub mod app;
pub mod input;

pub use app::App;
