//! Transient status messages shown over the toolbar

use std::time::{Duration, Instant};

/// Duration of the "Sort reset" confirmation
pub const RESET_MESSAGE_DURATION: Duration = Duration::from_millis(1200);
/// Duration of the "Copied: ..." confirmation
pub const COPY_MESSAGE_DURATION: Duration = Duration::from_millis(1800);
/// Characters of the copied text echoed in the confirmation
pub const COPY_PREVIEW_CHARS: usize = 60;

/// A one-shot status message that disappears after a deadline
#[derive(Debug, Clone, PartialEq)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a message shown from `now` for `duration`
    pub fn new(text: impl Into<String>, duration: Duration, now: Instant) -> Self {
        Self {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    /// Check if this message has expired at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Confirmation for a cell copy; the preview is cut to 60 characters
    pub fn copied(text: &str, now: Instant) -> Self {
        let preview: String = text.chars().take(COPY_PREVIEW_CHARS).collect();
        Self::new(format!("Copied: {}", preview), COPY_MESSAGE_DURATION, now)
    }

    pub fn sort_reset(now: Instant) -> Self {
        Self::new("Sort reset", RESET_MESSAGE_DURATION, now)
    }
}
