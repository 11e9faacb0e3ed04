//! User-facing notifications (toasts).
//!
//! A notification is fire-and-forget: whoever raises it does not wait for it to
//! be shown. The page collects the notices raised during one activation and
//! renders them as toasts.

use std::fmt;

/// A sink that shows messages to the shopper.
pub trait NotificationSink {
    /// Show an error message.
    fn error(&mut self, message: &str);
}

/// Severity of a notice, used as the toast's CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
        }
    }
}

/// A message to show the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices raised during one page activation, in the order they were raised.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NotificationSink for Notices {
    fn error(&mut self, message: &str) {
        self.items.push(Notice {
            level: NoticeLevel::Error,
            message: message.to_string(),
        });
    }
}
