//! Wire types for the relaywatch chat-relay protocol.
//!
//! The relay speaks JSON text frames in both directions:
//!
//! - Outbound (client -> relay): [`Command`] frames carrying an `action`
//!   discriminator.
//! - Inbound (relay -> client): frames discriminated by *shape*, not by an
//!   explicit envelope. [`InboundEvent::classify`] recognizes the known
//!   shapes; everything else is dropped by the caller.
//!
//! This crate is pure data: no I/O, no state. Routing and filtering live in
//! `relaywatch-app`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod error;
mod event;

pub use command::{Command, Preferences};
pub use error::ProtocolError;
pub use event::{InboundEvent, NoticeKind};
