//! Connection lifecycle state machine.
//!
//! One [`Session`] models one transport connection to the relay. Open is
//! reachable only via Connecting, and both Connecting and Open transition to
//! Disconnected on close or error. Disconnected is terminal for the session;
//! a fresh connect starts a new attempt on the same value.
//!
//! ```text
//! ┌──────────────┐ begin_connect ┌────────────┐   open    ┌──────┐
//! │ Disconnected │──────────────>│ Connecting │──────────>│ Open │
//! └──────────────┘               └────────────┘           └──────┘
//!        ↑                             │ close/error          │ close/error
//!        └─────────────────────────────┴──────────────────────┘
//! ```
//!
//! Pure state machine, no I/O: the driver owns the transport handle and
//! reports transitions here.

use crate::error::SessionError;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active connection.
    Disconnected,
    /// Connection attempt in progress.
    Connecting,
    /// Connection established; commands may be sent.
    Open,
}

/// How the last session ended. Drives distinct user-visible feedback for a
/// clean close versus a socket error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectKind {
    /// The transport closed cleanly.
    Closed,
    /// The transport reported an error.
    Errored,
}

/// Connection lifecycle state machine.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Option<SessionStateInner>,
}

/// Internal representation: `None` means never connected.
#[derive(Debug, Clone, Copy)]
enum SessionStateInner {
    Connecting,
    Open,
    Disconnected(DisconnectKind),
}

impl Session {
    /// Create a session that has never connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        match self.state {
            None | Some(SessionStateInner::Disconnected(_)) => SessionState::Disconnected,
            Some(SessionStateInner::Connecting) => SessionState::Connecting,
            Some(SessionStateInner::Open) => SessionState::Open,
        }
    }

    /// True when commands may be sent.
    pub fn is_open(&self) -> bool {
        self.state() == SessionState::Open
    }

    /// How the previous session ended. `None` before the first disconnect.
    pub fn last_disconnect(&self) -> Option<DisconnectKind> {
        match self.state {
            Some(SessionStateInner::Disconnected(kind)) => Some(kind),
            _ => None,
        }
    }

    /// Begin a connection attempt.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if a session is already connecting or open;
    /// at most one active session at a time.
    pub fn begin_connect(&mut self) -> Result<(), SessionError> {
        match self.state() {
            SessionState::Disconnected => {
                self.state = Some(SessionStateInner::Connecting);
                Ok(())
            },
            state => Err(SessionError { state, operation: "connect" }),
        }
    }

    /// Mark the connection as open.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] unless the session is Connecting: Open is
    /// reachable only via Connecting.
    pub fn open(&mut self) -> Result<(), SessionError> {
        match self.state() {
            SessionState::Connecting => {
                self.state = Some(SessionStateInner::Open);
                Ok(())
            },
            state => Err(SessionError { state, operation: "open" }),
        }
    }

    /// Transition to Disconnected, recording how the session ended.
    ///
    /// Valid from Connecting and Open. A disconnect while already
    /// Disconnected is ignored (the transport may report an error and then a
    /// close for the same drop; the first report wins).
    pub fn disconnect(&mut self, kind: DisconnectKind) {
        match self.state() {
            SessionState::Connecting | SessionState::Open => {
                self.state = Some(SessionStateInner::Disconnected(kind));
            },
            SessionState::Disconnected => {
                tracing::debug!(?kind, "ignoring disconnect while already disconnected");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Disconnected);

        session.begin_connect().unwrap();
        assert_eq!(session.state(), SessionState::Connecting);

        session.open().unwrap();
        assert!(session.is_open());

        session.disconnect(DisconnectKind::Closed);
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(session.last_disconnect(), Some(DisconnectKind::Closed));
    }

    #[test]
    fn open_unreachable_without_connecting() {
        let mut session = Session::new();
        let err = session.open().unwrap_err();
        assert_eq!(err.state, SessionState::Disconnected);
    }

    #[test]
    fn connecting_can_fail_to_disconnected() {
        let mut session = Session::new();
        session.begin_connect().unwrap();
        session.disconnect(DisconnectKind::Errored);

        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(session.last_disconnect(), Some(DisconnectKind::Errored));
    }

    #[test]
    fn second_connect_while_open_is_rejected() {
        let mut session = Session::new();
        session.begin_connect().unwrap();
        session.open().unwrap();

        let err = session.begin_connect().unwrap_err();
        assert_eq!(err.state, SessionState::Open);
    }

    #[test]
    fn first_disconnect_report_wins() {
        let mut session = Session::new();
        session.begin_connect().unwrap();
        session.open().unwrap();

        session.disconnect(DisconnectKind::Errored);
        session.disconnect(DisconnectKind::Closed);

        assert_eq!(session.last_disconnect(), Some(DisconnectKind::Errored));
    }

    #[test]
    fn reconnect_after_drop_starts_fresh() {
        let mut session = Session::new();
        session.begin_connect().unwrap();
        session.open().unwrap();
        session.disconnect(DisconnectKind::Closed);

        session.begin_connect().unwrap();
        assert_eq!(session.state(), SessionState::Connecting);
        assert_eq!(session.last_disconnect(), None);
    }
}
