//! Monitored-channel set.
//!
//! [`SubscriptionSet`] is the single source of truth for inbound-event
//! filtering: an event is rendered if and only if its channel is in the set
//! at the time the event is processed. The set preserves insertion order for
//! deterministic rendering, and is cleared in full whenever the connection
//! drops (monitoring state does not survive a dropped connection).

use std::fmt;

use crate::error::SubscribeError;

/// A normalized channel name: trimmed, lowercased, non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    /// Normalize raw input into a channel name.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::EmptyName`] if the input is empty after
    /// trimming.
    pub fn parse(input: &str) -> Result<Self, SubscribeError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SubscribeError::EmptyName);
        }
        Ok(Self(normalized))
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered set of monitored channels.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionSet {
    channels: Vec<ChannelName>,
}

impl SubscriptionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SubscribeError::Duplicate`] if the channel is already
    /// present; duplicate subscribes are rejected, not silently ignored.
    pub fn insert(&mut self, channel: ChannelName) -> Result<(), SubscribeError> {
        if self.channels.contains(&channel) {
            return Err(SubscribeError::Duplicate(channel.0));
        }
        self.channels.push(channel);
        Ok(())
    }

    /// Remove a channel. Returns whether it was present.
    pub fn remove(&mut self, channel: &ChannelName) -> bool {
        let before = self.channels.len();
        self.channels.retain(|c| c != channel);
        before != self.channels.len()
    }

    /// Membership test against a raw (possibly non-normalized) label.
    ///
    /// Inbound events carry labels as the relay sent them; comparison is
    /// case-insensitive against the normalized set.
    pub fn contains_label(&self, label: &str) -> bool {
        let probe = label.trim().to_lowercase();
        self.channels.iter().any(|c| c.0 == probe)
    }

    /// Drop all channels. Invoked on every transition to Disconnected.
    pub fn clear(&mut self) {
        self.channels.clear();
    }

    /// Channels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ChannelName> {
        self.channels.iter()
    }

    /// Channel at the given insertion position.
    pub fn get(&self, index: usize) -> Option<&ChannelName> {
        self.channels.get(index)
    }

    /// Number of monitored channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True when no channel is monitored.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
