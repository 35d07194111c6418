//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write the full text to the system clipboard
    CopyToClipboard(String),
}

impl Cmd {
    /// Text sent to the clipboard by this command, if any
    pub fn clipboard_text(&self) -> Option<&str> {
        match self {
            Cmd::CopyToClipboard(text) => Some(text),
        }
    }
}
