//! Notice-category preference state.
//!
//! Lives for the client session, mutated only by explicit user toggles, and
//! pushed to the relay as a complete snapshot on every change and on every
//! connection-open. Never derived from inbound events.

use relaywatch_proto::{NoticeKind, Preferences};

/// Which notice categories the user wants rendered.
#[derive(Debug, Clone, Default)]
pub struct PreferenceState {
    prefs: Preferences,
}

impl PreferenceState {
    /// All categories enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a category is enabled.
    pub fn enabled(&self, kind: NoticeKind) -> bool {
        match kind {
            NoticeKind::Notice => self.prefs.notice,
            NoticeKind::UserNotice => self.prefs.usernotice,
            NoticeKind::ClearChat => self.prefs.clearchat,
            NoticeKind::RoomState => self.prefs.roomstate,
        }
    }

    /// Flip a category. Returns the new value.
    pub fn toggle(&mut self, kind: NoticeKind) -> bool {
        let slot = match kind {
            NoticeKind::Notice => &mut self.prefs.notice,
            NoticeKind::UserNotice => &mut self.prefs.usernotice,
            NoticeKind::ClearChat => &mut self.prefs.clearchat,
            NoticeKind::RoomState => &mut self.prefs.roomstate,
        };
        *slot = !*slot;
        *slot
    }

    /// Complete snapshot for the wire. Always carries all four categories.
    pub fn snapshot(&self) -> Preferences {
        self.prefs
    }

    /// Human-readable on/off summary, e.g.
    /// `notice:on, usernotice:off, clearchat:on, roomstate:on`.
    pub fn summary(&self) -> String {
        NoticeKind::ALL
            .iter()
            .map(|&kind| {
                let state = if self.enabled(kind) { "on" } else { "off" };
                format!("{}:{state}", kind.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
