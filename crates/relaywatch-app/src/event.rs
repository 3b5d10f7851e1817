//! Application input events.
//!
//! [`AppEvent`] drives the [`crate::App`] state machine. Events originate
//! from the user (via the frontend's input layer, which calls the App API
//! directly) and from the transport link ([`LinkEvent`], mapped to
//! `AppEvent` by the runtime).

/// Transport-level signals produced by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// A raw text frame arrived from the relay.
    Frame(String),

    /// The connection closed cleanly.
    Closed,

    /// The connection failed.
    Errored(String),
}

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The connection to the relay is open.
    Opened,

    /// The connection closed cleanly.
    Closed,

    /// The connection failed.
    Errored {
        /// Human-readable error description.
        message: String,
    },

    /// A raw text frame arrived from the relay.
    FrameReceived {
        /// Frame text as received; may be malformed or irrelevant.
        text: String,
    },
}

impl From<LinkEvent> for AppEvent {
    fn from(link: LinkEvent) -> Self {
        match link {
            LinkEvent::Frame(text) => Self::FrameReceived { text },
            LinkEvent::Closed => Self::Closed,
            LinkEvent::Errored(message) => Self::Errored { message },
        }
    }
}
