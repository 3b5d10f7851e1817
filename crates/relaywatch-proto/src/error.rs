//! Protocol error types.

use thiserror::Error;

/// Errors produced while encoding outbound frames.
///
/// Inbound frames never error: malformed or unrecognized frames classify to
/// nothing and are dropped silently, since the transport is not guaranteed
/// to carry only events relevant to this client.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Command could not be serialized to JSON.
    #[error("command encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
