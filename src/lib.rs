//! tsvgrid - interactive viewer for tab-separated data
//!
//! This crate provides the core types and logic for the grid viewer,
//! implementing the Elm Architecture pattern. The window, renderer and
//! clipboard live in the binary.

pub mod cli;
pub mod commands;
pub mod config_paths;
pub mod font;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod table;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use messages::{FrameInput, Msg};
pub use model::AppModel;
pub use table::Table;
pub use theme::Theme;
