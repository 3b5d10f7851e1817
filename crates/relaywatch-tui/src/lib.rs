//! Terminal UI for relaywatch.
//!
//! A thin shell over [`relaywatch_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`relaywatch_app::Runtime`].
//!
//! This crate handles keyboard input, slash-command parsing, the WebSocket
//! link to the relay, the HTTP lookup collaborator, and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod input;
pub mod lookup;
pub mod terminal;
pub mod transport;
pub mod ui;

pub use input::{InputState, KeyInput};
pub use lookup::{LookupClient, LookupError};
pub use relaywatch_app::{App, AppAction, AppEvent, Driver, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
pub use transport::{RelayLink, TransportError};
