//! Inbound frame classification (relay -> client).
//!
//! The relay does not wrap events in an envelope; each frame is classified
//! by shape. Chat carries no `type` field at all, notices and subscription
//! acks are discriminated by `type`. The predicates are evaluated
//! independently: a frame whose shape satisfies several checks yields one
//! event per matching shape (in practice the shapes are disjoint).

use serde_json::Value;

/// Notice categories the relay forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Server NOTICE line.
    Notice,
    /// USERNOTICE event (subs, raids, announcements).
    UserNotice,
    /// CLEARCHAT moderation action.
    ClearChat,
    /// ROOMSTATE change.
    RoomState,
}

impl NoticeKind {
    /// All categories, in wire order.
    pub const ALL: [Self; 4] = [Self::Notice, Self::UserNotice, Self::ClearChat, Self::RoomState];

    /// Parse the wire `type` discriminator.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "notice" => Some(Self::Notice),
            "usernotice" => Some(Self::UserNotice),
            "clearchat" => Some(Self::ClearChat),
            "roomstate" => Some(Self::RoomState),
            _ => None,
        }
    }

    /// Wire name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::UserNotice => "usernotice",
            Self::ClearChat => "clearchat",
            Self::RoomState => "roomstate",
        }
    }
}

/// An inbound event recognized by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A chat line from a channel.
    Chat {
        /// Sender login.
        user: String,
        /// Message text.
        message: String,
        /// Channel label exactly as the relay sent it (not normalized).
        channel: String,
    },

    /// A room notice (moderation, subscription, room-state change).
    Notice {
        /// Notice category.
        kind: NoticeKind,
        /// Channel label exactly as the relay sent it.
        channel: String,
        /// Relay-provided human-readable detail, when present.
        system: Option<String>,
    },

    /// Acknowledgement that a subscribe command took effect.
    Subscribed {
        /// Channel label exactly as the relay sent it.
        channel: String,
    },
}

impl InboundEvent {
    /// Classify a raw text frame.
    ///
    /// Returns one event per matching shape predicate, in evaluation order:
    /// chat, then notice, then subscription ack. Frames that fail to parse
    /// as a JSON object, or match no shape, yield an empty vec; the caller
    /// drops them silently.
    pub fn classify(text: &str) -> Vec<Self> {
        let Ok(Value::Object(frame)) = serde_json::from_str::<Value>(text) else {
            return Vec::new();
        };

        let field = |name: &str| frame.get(name).and_then(Value::as_str);

        let mut events = Vec::new();

        if let (Some(user), Some(message), Some(channel)) =
            (field("user"), field("message"), field("channel"))
        {
            events.push(Self::Chat {
                user: user.to_owned(),
                message: message.to_owned(),
                channel: channel.to_owned(),
            });
        }

        if let (Some(kind), Some(channel)) = (field("type"), field("channel")) {
            if let Some(kind) = NoticeKind::from_wire(kind) {
                events.push(Self::Notice {
                    kind,
                    channel: channel.to_owned(),
                    system: field("system").map(str::to_owned),
                });
            } else if kind == "subscribed" {
                events.push(Self::Subscribed { channel: channel.to_owned() });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn chat_shape_classifies() {
        let events = InboundEvent::classify(r#"{"user":"bob","message":"hi","channel":"Alice"}"#);

        assert_eq!(events, vec![InboundEvent::Chat {
            user: "bob".into(),
            message: "hi".into(),
            channel: "Alice".into(),
        }]);
    }

    #[test]
    fn notice_shape_classifies_with_system_detail() {
        let events =
            InboundEvent::classify(r#"{"type":"usernotice","channel":"alice","system":"raid!"}"#);

        assert_eq!(events, vec![InboundEvent::Notice {
            kind: NoticeKind::UserNotice,
            channel: "alice".into(),
            system: Some("raid!".into()),
        }]);
    }

    #[test]
    fn notice_shape_without_system_detail() {
        let events = InboundEvent::classify(r#"{"type":"roomstate","channel":"alice"}"#);

        assert_eq!(events, vec![InboundEvent::Notice {
            kind: NoticeKind::RoomState,
            channel: "alice".into(),
            system: None,
        }]);
    }

    #[test]
    fn subscription_ack_classifies() {
        let events = InboundEvent::classify(r#"{"type":"subscribed","channel":"alice"}"#);

        assert_eq!(events, vec![InboundEvent::Subscribed { channel: "alice".into() }]);
    }

    #[test]
    fn frame_matching_two_shapes_yields_both_events() {
        // Chat fields plus a notice discriminator: predicates are independent.
        let events = InboundEvent::classify(
            r#"{"user":"bob","message":"hi","channel":"alice","type":"notice"}"#,
        );

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InboundEvent::Chat { .. }));
        assert!(matches!(events[1], InboundEvent::Notice { kind: NoticeKind::Notice, .. }));
    }

    #[test]
    fn unknown_type_is_dropped() {
        assert!(InboundEvent::classify(r#"{"type":"ping","channel":"alice"}"#).is_empty());
    }

    #[test]
    fn notice_without_channel_is_dropped() {
        assert!(InboundEvent::classify(r#"{"type":"notice"}"#).is_empty());
    }

    #[test]
    fn non_object_frames_are_dropped() {
        assert!(InboundEvent::classify("[1,2,3]").is_empty());
        assert!(InboundEvent::classify("\"hello\"").is_empty());
        assert!(InboundEvent::classify("42").is_empty());
    }

    proptest! {
        /// Classification never panics and never fabricates events from
        /// arbitrary garbage that lacks the required string fields.
        #[test]
        fn classify_tolerates_arbitrary_text(text in ".*") {
            let _ = InboundEvent::classify(&text);
        }

        #[test]
        fn classify_requires_string_fields(n in any::<i64>()) {
            let frame = format!(r#"{{"user":{n},"message":{n},"channel":{n}}}"#);
            prop_assert!(InboundEvent::classify(&frame).is_empty());
        }
    }
}
