//! Application layer for relaywatch.
//!
//! Pure state machine and generic runtime for the channel-monitoring client,
//! decoupled from terminal I/O and the WebSocket transport so the routing
//! and filtering core is independently testable.
//!
//! # Components
//!
//! - [`App`]: state machine owning the session, subscription set,
//!   preferences, and bounded sinks; routes inbound frames
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod runtime;
mod state;

pub use action::{AppAction, LookupQuery};
pub use app::{App, CHAT_SCROLLBACK_CAP, NOTICE_LOG_CAP};
pub use driver::Driver;
pub use event::{AppEvent, LinkEvent};
pub use runtime::Runtime;
pub use state::{ChatEntry, LookupPanel, NoticeBadge, NoticeEntry, SendOutcome};
