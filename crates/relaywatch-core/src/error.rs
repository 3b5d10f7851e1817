//! Error types for core state operations.
//!
//! User input errors ([`SubscribeError`]) are surfaced to the user as
//! blocking alerts with no state mutation. State machine misuse
//! ([`SessionError`]) indicates a driver bug, not a user error.

use thiserror::Error;

use crate::session::SessionState;

/// Why a subscribe attempt was rejected.
///
/// Rejections are user-visible and leave all state unchanged; no outbound
/// command is sent for a rejected subscribe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// The channel name was empty after normalization.
    #[error("channel name is empty")]
    EmptyName,

    /// The connection is not open.
    #[error("not connected to the relay")]
    NotConnected,

    /// The channel is already monitored.
    #[error("already monitoring #{0}")]
    Duplicate(String),
}

/// Invalid session state transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid session transition: cannot {operation} from {state:?}")]
pub struct SessionError {
    /// State the session was in when the transition was attempted.
    pub state: SessionState,
    /// Operation that was attempted.
    pub operation: &'static str,
}
