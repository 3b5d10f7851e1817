//! Application state machine.
//!
//! [`App`] manages the interactive state of the client completely decoupled
//! from I/O: it consumes [`crate::AppEvent`] inputs (and direct API calls
//! from the input layer) and produces [`crate::AppAction`] instructions for
//! the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the session lifecycle, subscription set, preference state, and the
//!   two bounded sinks (chat transcript, notice log).
//! - Routes inbound frames: classify by shape, filter by current
//!   subscription-set membership, dispatch to a sink or drop.
//! - Clears monitoring state whenever the connection drops.
//!
//! Filtering at processing time is the router's core correctness property:
//! the relay may deliver events for channels the client no longer monitors
//! (a just-issued unsubscribe races in-flight events), and those must never
//! reach the rendered views.

use relaywatch_core::{
    BoundedLog, ChannelName, DisconnectKind, PreferenceState, Session, SessionState,
    SubscribeError, SubscriptionSet,
};
use relaywatch_proto::{Command, InboundEvent, NoticeKind};

use crate::{
    AppAction, AppEvent, ChatEntry, LookupPanel, LookupQuery, NoticeBadge, NoticeEntry,
    SendOutcome,
};

/// Maximum retained chat transcript entries.
pub const CHAT_SCROLLBACK_CAP: usize = 100;

/// Maximum retained notice log entries.
pub const NOTICE_LOG_CAP: usize = 200;

/// Fallback body text when the relay omits the `system` detail.
fn fallback_text(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Notice => "Notification",
        NoticeKind::UserNotice => "User notice",
        NoticeKind::ClearChat => "Chat cleared / moderation action triggered",
        NoticeKind::RoomState => "Room state changed",
    }
}

/// Synthetic "joined" notice for a channel, used both for optimistic local
/// feedback on subscribe and for the relay's acknowledgement.
fn joined_entry(channel: &str) -> NoticeEntry {
    NoticeEntry::now(
        NoticeBadge::Joined,
        channel,
        format!("Now monitoring #{channel}. Room notices will appear here."),
    )
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or a socket.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection lifecycle.
    session: Session,
    /// Monitored channels; sole filter for inbound event visibility.
    subscriptions: SubscriptionSet,
    /// Notice-category toggles mirrored to the relay.
    prefs: PreferenceState,
    /// Chat transcript, newest last, cap 100.
    chat: BoundedLog<ChatEntry>,
    /// Notice log, newest first, cap 200.
    notices: BoundedLog<NoticeEntry>,
    /// Index into `subscriptions` of the outbound-send target channel.
    selected: Option<usize>,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
    /// Most recent collaborator lookup result.
    lookup: Option<LookupPanel>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a disconnected App with empty state.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            subscriptions: SubscriptionSet::new(),
            prefs: PreferenceState::new(),
            chat: BoundedLog::newest_last(CHAT_SCROLLBACK_CAP),
            notices: BoundedLog::newest_first(NOTICE_LOG_CAP),
            selected: None,
            status_message: None,
            lookup: None,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Opened => self.on_opened(),
            AppEvent::Closed => {
                self.on_disconnected(DisconnectKind::Closed, "Disconnected from the relay.")
            },
            AppEvent::Errored { message } => {
                tracing::error!(%message, "relay connection error");
                self.on_disconnected(
                    DisconnectKind::Errored,
                    format!("Connection error: {message}"),
                )
            },
            AppEvent::FrameReceived { text } => self.route(&text),
        }
    }

    /// Connection established. Emits connected feedback, re-renders the
    /// (now empty) channel list, and pushes preferences once, ordered after
    /// the render so synchronous UI wiring completes first.
    fn on_opened(&mut self) -> Vec<AppAction> {
        if let Err(e) = self.session.open() {
            tracing::warn!(%e, "ignoring open signal");
            return vec![];
        }
        self.status_message = Some("Connected to the relay".to_owned());
        self.notices.push(NoticeEntry::now(NoticeBadge::Link, "-", "Connected to the relay."));

        let mut actions = vec![AppAction::Render];
        actions.extend(self.push_preferences());
        actions
    }

    /// Connection dropped (clean close or error). Monitoring state does not
    /// survive a dropped connection.
    fn on_disconnected(&mut self, kind: DisconnectKind, text: impl Into<String>) -> Vec<AppAction> {
        self.session.disconnect(kind);
        self.subscriptions.clear();
        self.selected = None;
        self.chat.clear();
        self.status_message = Some(match kind {
            DisconnectKind::Closed => "Disconnected".to_owned(),
            DisconnectKind::Errored => "Connection error".to_owned(),
        });
        self.notices.push(NoticeEntry::now(NoticeBadge::Link, "-", text));
        vec![AppAction::Render]
    }

    /// Classify an inbound frame and dispatch each matching shape.
    fn route(&mut self, text: &str) -> Vec<AppAction> {
        let events = InboundEvent::classify(text);
        if events.is_empty() {
            tracing::trace!("dropping unrecognized frame");
            return vec![];
        }

        let mut changed = false;
        for event in events {
            match event {
                InboundEvent::Chat { user, message, channel } => {
                    if !self.subscriptions.contains_label(&channel) {
                        tracing::debug!(%channel, "dropping chat for unmonitored channel");
                        continue;
                    }
                    // Display keeps the relay's original channel label.
                    self.chat.push(ChatEntry { user, message, channel });
                    changed = true;
                },
                InboundEvent::Notice { kind, channel, system } => {
                    if !self.subscriptions.contains_label(&channel) {
                        tracing::debug!(%channel, "dropping notice for unmonitored channel");
                        continue;
                    }
                    let body = system.unwrap_or_else(|| fallback_text(kind).to_owned());
                    self.notices.push(NoticeEntry::now(kind.into(), channel, body));
                    changed = true;
                },
                InboundEvent::Subscribed { channel } => {
                    // Confirmation of membership: never filtered, it may race
                    // ahead of the local optimistic entry.
                    self.notices.push(joined_entry(&channel));
                    changed = true;
                },
            }
        }

        if changed { vec![AppAction::Render] } else { vec![] }
    }

    /// Initiate a fresh connection to the relay.
    pub fn connect(&mut self) -> Vec<AppAction> {
        if let Err(e) = self.session.begin_connect() {
            self.status_message = Some(e.to_string());
            return vec![AppAction::Render];
        }
        self.status_message = Some("Connecting...".to_owned());
        vec![AppAction::Connect, AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Start monitoring a channel.
    ///
    /// Rejected with a status alert (no state change, no outbound command)
    /// when the input normalizes to empty, the connection is not open, or
    /// the channel is already monitored. On success the subscribe command is
    /// ordered before the render of the mutated state, and a synthetic
    /// "joined" notice appears immediately without waiting for the ack.
    pub fn subscribe(&mut self, input: &str) -> Vec<AppAction> {
        let channel = match self.try_subscribe(input) {
            Ok(channel) => channel,
            Err(SubscribeError::NotConnected) => {
                self.status_message =
                    Some("Not connected to the relay. Use /connect and try again.".to_owned());
                return vec![AppAction::Render];
            },
            Err(e) => {
                self.status_message = Some(format!("Cannot subscribe: {e}"));
                return vec![AppAction::Render];
            },
        };

        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.notices.push(joined_entry(channel.as_str()));
        self.status_message = Some(self.monitoring_summary());

        vec![
            AppAction::SendCommand(Command::Subscribe { channel: channel.as_str().to_owned() }),
            AppAction::Render,
        ]
    }

    /// Validate and apply a subscribe attempt against the current state.
    fn try_subscribe(&mut self, input: &str) -> Result<ChannelName, SubscribeError> {
        let channel = ChannelName::parse(input)?;
        if !self.session.is_open() {
            return Err(SubscribeError::NotConnected);
        }
        self.subscriptions.insert(channel.clone())?;
        Ok(channel)
    }

    /// Stop monitoring a channel.
    ///
    /// Always emits the unsubscribe command regardless of current
    /// membership, then removes the channel if present. If this empties the
    /// set, the chat transcript resets to its placeholder state.
    pub fn unsubscribe(&mut self, input: &str) -> Vec<AppAction> {
        let channel = match ChannelName::parse(input) {
            Ok(channel) => channel,
            Err(e) => {
                self.status_message = Some(format!("Cannot unsubscribe: {e}"));
                return vec![AppAction::Render];
            },
        };

        let previous = self.selected.and_then(|i| self.subscriptions.get(i).cloned());
        self.subscriptions.remove(&channel);
        self.reselect(previous);

        if self.subscriptions.is_empty() {
            self.chat.clear();
        }
        self.status_message = Some(self.monitoring_summary());

        vec![
            AppAction::SendCommand(Command::Unsubscribe { channel: channel.as_str().to_owned() }),
            AppAction::Render,
        ]
    }

    /// Flip a notice-category preference and push the full snapshot.
    pub fn toggle_preference(&mut self, kind: NoticeKind) -> Vec<AppAction> {
        let enabled = self.prefs.toggle(kind);
        self.status_message = Some(format!(
            "{} {}",
            kind.as_str(),
            if enabled { "enabled" } else { "disabled" }
        ));

        let mut actions = vec![AppAction::Render];
        actions.extend(self.push_preferences());
        actions
    }

    /// Push the complete preference snapshot to the relay.
    ///
    /// No-op while the connection is not open. Otherwise emits one
    /// `setPreferences` command and records a "prefs" notice summarizing
    /// which categories are now on/off.
    pub fn push_preferences(&mut self) -> Vec<AppAction> {
        if !self.session.is_open() {
            tracing::debug!("skipping preference push while disconnected");
            return vec![];
        }
        let snapshot = self.prefs.snapshot();
        self.notices.push(NoticeEntry::now(
            NoticeBadge::Prefs,
            "-",
            format!("Updated: {}", self.prefs.summary()),
        ));
        vec![
            AppAction::SendCommand(Command::SetPreferences { prefs: snapshot }),
            AppAction::Render,
        ]
    }

    /// Empty the notice log. Leaves subscriptions and the session untouched.
    pub fn clear_notices(&mut self) -> Vec<AppAction> {
        self.notices.clear();
        vec![AppAction::Render]
    }

    /// Cycle the outbound-send target to the next monitored channel.
    pub fn cycle_selected(&mut self) -> Vec<AppAction> {
        if self.subscriptions.is_empty() {
            return vec![];
        }
        let next = self.selected.map_or(0, |i| {
            let next = i.saturating_add(1);
            if next >= self.subscriptions.len() { 0 } else { next }
        });
        self.selected = Some(next);
        vec![AppAction::Render]
    }

    /// Post a chat message to the currently selected channel.
    pub fn send_chat(&mut self, message: &str) -> Vec<AppAction> {
        let message = message.trim();
        if message.is_empty() {
            return vec![];
        }
        let Some(channel) = self.selected_channel().cloned() else {
            self.status_message = Some("Join a channel before sending.".to_owned());
            return vec![AppAction::Render];
        };
        self.status_message = Some(format!("Sending to #{channel}..."));
        vec![
            AppAction::PostChat {
                channel: channel.as_str().to_owned(),
                message: message.to_owned(),
            },
            AppAction::Render,
        ]
    }

    /// Look up a user profile through the collaborator.
    pub fn lookup_user(&mut self, login: &str) -> Vec<AppAction> {
        self.lookup_by_login(login, LookupQuery::User)
    }

    /// Look up live-stream status through the collaborator.
    pub fn lookup_stream(&mut self, login: &str) -> Vec<AppAction> {
        self.lookup_by_login(login, LookupQuery::Stream)
    }

    /// Fetch the top-games listing through the collaborator.
    pub fn lookup_top_games(&mut self) -> Vec<AppAction> {
        vec![AppAction::Lookup(LookupQuery::TopGames), AppAction::Render]
    }

    fn lookup_by_login(
        &mut self,
        login: &str,
        query: fn(String) -> LookupQuery,
    ) -> Vec<AppAction> {
        let login = login.trim();
        if login.is_empty() {
            self.status_message = Some("Please enter a username".to_owned());
            return vec![AppAction::Render];
        }
        vec![AppAction::Lookup(query(login.to_owned())), AppAction::Render]
    }

    /// Display a lookup result panel (called by the runtime with the
    /// collaborator's response, or an inline error on failure).
    pub fn show_lookup(&mut self, panel: LookupPanel) -> Vec<AppAction> {
        self.lookup = Some(panel);
        vec![AppAction::Render]
    }

    /// Close the lookup result panel.
    pub fn dismiss_lookup(&mut self) -> Vec<AppAction> {
        self.lookup = None;
        vec![AppAction::Render]
    }

    /// Record the outcome of an outbound chat post.
    pub fn report_send_outcome(&mut self, outcome: &SendOutcome) -> Vec<AppAction> {
        self.status_message = Some(if outcome.success {
            "Message sent".to_owned()
        } else {
            match &outcome.message {
                Some(detail) => format!("Send failed: {detail}"),
                None => "Send failed".to_owned(),
            }
        });
        vec![AppAction::Render]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Recompute the selected index so it keeps pointing at the same
    /// channel after a removal, falling back to the first channel.
    fn reselect(&mut self, previous: Option<ChannelName>) {
        if self.subscriptions.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = previous
            .and_then(|name| self.subscriptions.iter().position(|c| *c == name))
            .or(Some(0));
    }

    fn monitoring_summary(&self) -> String {
        if self.subscriptions.is_empty() {
            "No channels monitored".to_owned()
        } else {
            let list: Vec<_> =
                self.subscriptions.iter().map(|c| format!("#{c}")).collect();
            format!("Monitoring {}", list.join(", "))
        }
    }

    /// Current session lifecycle state.
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Monitored channels, insertion-ordered.
    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Notice-category preferences.
    pub fn preferences(&self) -> &PreferenceState {
        &self.prefs
    }

    /// Chat transcript (newest last).
    pub fn chat(&self) -> &BoundedLog<ChatEntry> {
        &self.chat
    }

    /// Notice log (newest first).
    pub fn notices(&self) -> &BoundedLog<NoticeEntry> {
        &self.notices
    }

    /// Outbound-send target channel. `None` exactly when no channel is
    /// monitored.
    pub fn selected_channel(&self) -> Option<&ChannelName> {
        self.selected.and_then(|i| self.subscriptions.get(i))
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Most recent lookup result panel.
    pub fn lookup(&self) -> Option<&LookupPanel> {
        self.lookup.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_app() -> App {
        let mut app = App::new();
        let _ = app.connect();
        let _ = app.handle(AppEvent::Opened);
        app
    }

    fn chat_frame(user: &str, message: &str, channel: &str) -> AppEvent {
        AppEvent::FrameReceived {
            text: format!(r#"{{"user":"{user}","message":"{message}","channel":"{channel}"}}"#),
        }
    }

    #[test]
    fn subscribe_sends_command_then_renders() {
        let mut app = open_app();
        let actions = app.subscribe("alice");

        assert_eq!(actions, vec![
            AppAction::SendCommand(Command::Subscribe { channel: "alice".into() }),
            AppAction::Render,
        ]);
        assert_eq!(app.subscriptions().len(), 1);
        assert_eq!(app.notices().get(0).map(|n| n.badge), Some(NoticeBadge::Joined));
    }

    #[test]
    fn duplicate_subscribe_is_rejected_without_command() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let actions = app.subscribe("Alice");

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.subscriptions().len(), 1);
        assert!(app.status_message().unwrap().contains("already monitoring"));
    }

    #[test]
    fn subscribe_while_disconnected_is_rejected() {
        let mut app = App::new();
        let actions = app.subscribe("alice");

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(app.subscriptions().is_empty());
        assert_eq!(
            app.status_message(),
            Some("Not connected to the relay. Use /connect and try again.")
        );
    }

    #[test]
    fn try_subscribe_surfaces_not_connected() {
        let mut app = App::new();

        assert_eq!(app.try_subscribe("alice"), Err(SubscribeError::NotConnected));

        let mut open = open_app();
        let _ = open.subscribe("alice");
        assert_eq!(
            open.try_subscribe("alice"),
            Err(SubscribeError::Duplicate("alice".into()))
        );
    }

    #[test]
    fn subscribe_empty_name_is_rejected() {
        let mut app = open_app();
        let actions = app.subscribe("   ");

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(app.subscriptions().is_empty());
    }

    #[test]
    fn unsubscribe_absent_channel_still_sends_command() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let actions = app.unsubscribe("carol");

        assert_eq!(actions[0], AppAction::SendCommand(Command::Unsubscribe {
            channel: "carol".into(),
        }));
        assert_eq!(app.subscriptions().len(), 1);
    }

    #[test]
    fn unsubscribe_last_channel_resets_chat() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let _ = app.handle(chat_frame("bob", "hi", "alice"));
        assert_eq!(app.chat().len(), 1);

        let _ = app.unsubscribe("alice");
        assert!(app.chat().is_empty());
        assert!(app.selected_channel().is_none());
    }

    #[test]
    fn chat_for_unmonitored_channel_is_dropped() {
        let mut app = open_app();
        let _ = app.subscribe("alice");

        let actions = app.handle(chat_frame("bob", "hi", "carol"));
        assert!(actions.is_empty());
        assert!(app.chat().is_empty());
    }

    #[test]
    fn chat_for_monitored_channel_keeps_original_label() {
        let mut app = open_app();
        let _ = app.subscribe("alice");

        let _ = app.handle(chat_frame("bob", "hi", "Alice"));
        assert_eq!(app.chat().get(0).map(|e| e.channel.as_str()), Some("Alice"));
    }

    #[test]
    fn notice_for_unmonitored_channel_is_dropped() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let before = app.notices().len();

        let _ = app.handle(AppEvent::FrameReceived {
            text: r#"{"type":"clearchat","channel":"carol"}"#.into(),
        });
        assert_eq!(app.notices().len(), before);
    }

    #[test]
    fn notice_falls_back_to_generic_label() {
        let mut app = open_app();
        let _ = app.subscribe("alice");

        let _ = app.handle(AppEvent::FrameReceived {
            text: r#"{"type":"clearchat","channel":"alice"}"#.into(),
        });
        assert_eq!(
            app.notices().get(0).map(|n| n.text.as_str()),
            Some("Chat cleared / moderation action triggered")
        );
    }

    #[test]
    fn subscription_ack_is_never_filtered() {
        let mut app = open_app();

        let actions = app.handle(AppEvent::FrameReceived {
            text: r#"{"type":"subscribed","channel":"carol"}"#.into(),
        });
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.notices().get(0).map(|n| n.badge), Some(NoticeBadge::Joined));
    }

    #[test]
    fn malformed_frames_are_dropped_silently() {
        let mut app = open_app();
        let _ = app.subscribe("alice");

        for text in ["not json", "{\"half\":", "[]", "{\"unknown\":true}"] {
            let actions = app.handle(AppEvent::FrameReceived { text: text.into() });
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn disconnect_clears_subscriptions_and_chat() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let _ = app.subscribe("bob");
        let _ = app.handle(chat_frame("bob", "hi", "alice"));

        let _ = app.handle(AppEvent::Errored { message: "socket reset".into() });

        assert!(app.subscriptions().is_empty());
        assert!(app.chat().is_empty());
        assert_eq!(app.session_state(), SessionState::Disconnected);
        assert_eq!(app.status_message(), Some("Connection error"));
    }

    #[test]
    fn clean_close_and_error_report_distinct_status() {
        let mut closed = open_app();
        let _ = closed.handle(AppEvent::Closed);
        assert_eq!(closed.status_message(), Some("Disconnected"));

        let mut errored = open_app();
        let _ = errored.handle(AppEvent::Errored { message: "reset".into() });
        assert_eq!(errored.status_message(), Some("Connection error"));
    }

    #[test]
    fn open_pushes_preferences_after_render() {
        let mut app = App::new();
        let _ = app.connect();
        let actions = app.handle(AppEvent::Opened);

        let render_pos = actions.iter().position(|a| *a == AppAction::Render).unwrap();
        let push_pos = actions
            .iter()
            .position(|a| matches!(a, AppAction::SendCommand(Command::SetPreferences { .. })))
            .unwrap();
        assert!(render_pos < push_pos);
    }

    #[test]
    fn toggle_preference_pushes_full_snapshot() {
        let mut app = open_app();
        let actions = app.toggle_preference(NoticeKind::UserNotice);

        let sent = actions.iter().find_map(|a| match a {
            AppAction::SendCommand(Command::SetPreferences { prefs }) => Some(*prefs),
            _ => None,
        });
        let sent = sent.unwrap();
        assert!(!sent.usernotice);
        assert!(sent.notice && sent.clearchat && sent.roomstate);
        assert_eq!(app.notices().get(0).map(|n| n.badge), Some(NoticeBadge::Prefs));
    }

    #[test]
    fn toggle_preference_while_disconnected_skips_push() {
        let mut app = App::new();
        let actions = app.toggle_preference(NoticeKind::Notice);

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!app.preferences().enabled(NoticeKind::Notice));
    }

    #[test]
    fn send_chat_requires_selected_channel() {
        let mut app = open_app();
        let actions = app.send_chat("hello");

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.status_message(), Some("Join a channel before sending."));
    }

    #[test]
    fn send_chat_targets_selected_channel() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        let _ = app.subscribe("bob");
        let _ = app.cycle_selected();

        let actions = app.send_chat("hello");
        assert_eq!(actions[0], AppAction::PostChat {
            channel: "bob".into(),
            message: "hello".into(),
        });
    }

    #[test]
    fn clear_notices_keeps_subscriptions() {
        let mut app = open_app();
        let _ = app.subscribe("alice");
        assert!(!app.notices().is_empty());

        let _ = app.clear_notices();
        assert!(app.notices().is_empty());
        assert_eq!(app.subscriptions().len(), 1);
    }

    #[test]
    fn second_connect_while_open_is_rejected() {
        let mut app = open_app();
        let actions = app.connect();
        assert_eq!(actions, vec![AppAction::Render]);
    }
}
