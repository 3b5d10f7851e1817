//! Application side-effects and intents.
//!
//! [`AppAction`] instructions are produced by the [`crate::App`] state
//! machine for the runtime to execute, in order. Ordering matters: a
//! subscribe/unsubscribe command action precedes the render of the mutated
//! state, so the relay observes intent in the order the user issued it.

use relaywatch_proto::Command;

/// A query against the request/response lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// User profile by login.
    User(String),
    /// Live-stream status by login.
    Stream(String),
    /// Top games listing.
    TopGames,
}

impl LookupQuery {
    /// Panel title for this query's results.
    pub fn title(&self) -> String {
        match self {
            Self::User(login) => format!("User: {login}"),
            Self::Stream(login) => format!("Stream: {login}"),
            Self::TopGames => "Top Games".to_owned(),
        }
    }
}

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Establish a fresh connection to the relay.
    Connect,

    /// Send a command frame to the relay.
    ///
    /// Dropped with a log line (never an error) if the link is not open;
    /// the App checks open state before emitting this.
    SendCommand(Command),

    /// Run a lookup against the collaborator and show the result panel.
    Lookup(LookupQuery),

    /// Post an outbound chat message through the collaborator.
    PostChat {
        /// Target channel (normalized).
        channel: String,
        /// Message text.
        message: String,
    },
}
