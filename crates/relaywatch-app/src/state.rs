//! Observable application state types.
//!
//! The render model: data structures representing the App's current view of
//! the world, holding exactly what the frontend needs to draw without
//! exposing wire or transport concerns.

use relaywatch_proto::NoticeKind;

/// A rendered chat transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Sender login.
    pub user: String,
    /// Message text.
    pub message: String,
    /// Channel label as the relay sent it (not normalized).
    pub channel: String,
}

/// Category badge on a notice entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeBadge {
    /// Server NOTICE line.
    Notice,
    /// USERNOTICE event.
    UserNotice,
    /// CLEARCHAT moderation action.
    ClearChat,
    /// ROOMSTATE change.
    RoomState,
    /// Subscription confirmation (local optimistic or relay ack).
    Joined,
    /// Preference snapshot pushed to the relay.
    Prefs,
    /// Connection lifecycle entry.
    Link,
}

impl NoticeBadge {
    /// Short uppercase-friendly label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::UserNotice => "usernotice",
            Self::ClearChat => "clearchat",
            Self::RoomState => "roomstate",
            Self::Joined => "joined",
            Self::Prefs => "prefs",
            Self::Link => "link",
        }
    }
}

impl From<NoticeKind> for NoticeBadge {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Notice => Self::Notice,
            NoticeKind::UserNotice => Self::UserNotice,
            NoticeKind::ClearChat => Self::ClearChat,
            NoticeKind::RoomState => Self::RoomState,
        }
    }
}

/// A rendered notice log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeEntry {
    /// Category badge.
    pub badge: NoticeBadge,
    /// Channel label, `-` for entries not tied to a channel.
    pub channel: String,
    /// Human wall-clock timestamp (HH:MM:SS).
    pub timestamp: String,
    /// Free-text body.
    pub text: String,
}

impl NoticeEntry {
    /// Build an entry stamped with the current local time.
    pub fn now(badge: NoticeBadge, channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            badge,
            channel: channel.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            text: text.into(),
        }
    }
}

/// Result panel for a collaborator lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPanel {
    /// Panel title.
    pub title: String,
    /// Display lines.
    pub lines: Vec<String>,
    /// True when the lines describe a request failure.
    pub is_error: bool,
}

impl LookupPanel {
    /// A successful result panel.
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self { title: title.into(), lines, is_error: false }
    }

    /// An inline error panel for a failed request.
    pub fn error(title: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self { title: title.into(), lines: vec![format!("Error: {message}")], is_error: true }
    }
}

/// Outcome of posting an outbound chat message through the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Whether the relay accepted the message.
    pub success: bool,
    /// Optional relay-provided detail.
    pub message: Option<String>,
}
