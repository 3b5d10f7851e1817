//! Core state for the relaywatch client.
//!
//! Pure domain state with no I/O and no view dependencies:
//!
//! - [`Session`]: connection lifecycle state machine
//! - [`SubscriptionSet`]: the ordered set of monitored channels, the single
//!   source of truth for inbound-event filtering
//! - [`PreferenceState`]: notice-category toggles mirrored to the relay
//! - [`BoundedLog`]: append-only display buffer with a fixed cap and a
//!   defined eviction direction
//!
//! Each of these is mutated from exactly one place (the app state machine)
//! and read by the router, so no interior mutability is needed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bounded;
mod error;
mod prefs;
mod session;
mod subscriptions;

pub use bounded::BoundedLog;
pub use error::{SessionError, SubscribeError};
pub use prefs::PreferenceState;
pub use session::{DisconnectKind, Session, SessionState};
pub use subscriptions::{ChannelName, SubscriptionSet};
