//! Outbound command frames (client -> relay).
//!
//! Each command is a single JSON object with an `action` discriminator.
//! Preferences are always sent as a complete snapshot, never a delta, so the
//! relay can replace its per-client filter state wholesale.

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Notice-category toggles, pushed to the relay as a full snapshot.
///
/// All four fields are always present on the wire. Defaults to everything
/// enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Server NOTICE lines.
    pub notice: bool,
    /// USERNOTICE events (subs, raids, announcements).
    pub usernotice: bool,
    /// CLEARCHAT moderation actions.
    pub clearchat: bool,
    /// ROOMSTATE changes.
    pub roomstate: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { notice: true, usernotice: true, clearchat: true, roomstate: true }
    }
}

/// A structured command frame, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    /// Start monitoring a channel.
    Subscribe {
        /// Normalized (lowercase) channel name.
        channel: String,
    },

    /// Stop monitoring a channel.
    Unsubscribe {
        /// Normalized (lowercase) channel name.
        channel: String,
    },

    /// Replace the relay-side notice filter with a full snapshot.
    SetPreferences {
        /// Complete preference snapshot.
        prefs: Preferences,
    },
}

impl Command {
    /// Encode the command as a JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
