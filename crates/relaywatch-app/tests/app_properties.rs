//! Property-based tests for the App state machine.
//!
//! Verifies that the routing and bounded-sink invariants hold under
//! arbitrary interleavings of user operations, inbound frames, and
//! connection drops.

use proptest::prelude::*;
use relaywatch_app::{App, AppEvent, CHAT_SCROLLBACK_CAP, NOTICE_LOG_CAP};
use relaywatch_core::SessionState;
use relaywatch_proto::NoticeKind;

/// Small channel pool so operations collide often.
const POOL: [&str; 4] = ["alice", "bob", "carol", "dave"];

#[derive(Debug, Clone)]
enum Op {
    Reconnect,
    Drop { errored: bool },
    Subscribe(usize),
    Unsubscribe(usize),
    Chat(usize),
    Notice(usize),
    Ack(usize),
    Garbage(String),
    TogglePref(usize),
    ClearNotices,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Reconnect),
        1 => any::<bool>().prop_map(|errored| Op::Drop { errored }),
        4 => (0..POOL.len()).prop_map(Op::Subscribe),
        2 => (0..POOL.len()).prop_map(Op::Unsubscribe),
        6 => (0..POOL.len()).prop_map(Op::Chat),
        4 => (0..POOL.len()).prop_map(Op::Notice),
        1 => (0..POOL.len()).prop_map(Op::Ack),
        1 => ".{0,40}".prop_map(Op::Garbage),
        1 => (0..4usize).prop_map(Op::TogglePref),
        1 => Just(Op::ClearNotices),
    ]
}

fn frame(text: String) -> AppEvent {
    AppEvent::FrameReceived { text }
}

fn apply(app: &mut App, op: &Op) {
    match op {
        Op::Reconnect => {
            if app.session_state() == SessionState::Disconnected {
                let _ = app.connect();
                let _ = app.handle(AppEvent::Opened);
            }
        },
        Op::Drop { errored } => {
            let _ = app.handle(if *errored {
                AppEvent::Errored { message: "simulated drop".into() }
            } else {
                AppEvent::Closed
            });
        },
        Op::Subscribe(i) => {
            let _ = app.subscribe(POOL[*i]);
        },
        Op::Unsubscribe(i) => {
            let _ = app.unsubscribe(POOL[*i]);
        },
        Op::Chat(i) => {
            let channel = POOL[*i];
            let monitored = app.subscriptions().contains_label(channel);
            let before = app.chat().len();
            let _ = app.handle(frame(format!(
                r#"{{"user":"u","message":"m","channel":"{channel}"}}"#
            )));
            if monitored {
                assert_eq!(
                    app.chat().iter().last().map(|e| e.channel.as_str()),
                    Some(channel),
                    "monitored chat must land newest-last"
                );
            } else {
                assert_eq!(app.chat().len(), before, "unmonitored chat must be dropped");
            }
        },
        Op::Notice(i) => {
            let channel = POOL[*i];
            let monitored = app.subscriptions().contains_label(channel);
            let before = app.notices().len();
            let _ = app.handle(frame(format!(r#"{{"type":"notice","channel":"{channel}"}}"#)));
            if !monitored {
                assert_eq!(app.notices().len(), before, "unmonitored notice must be dropped");
            }
        },
        Op::Ack(i) => {
            let channel = POOL[*i];
            let _ =
                app.handle(frame(format!(r#"{{"type":"subscribed","channel":"{channel}"}}"#)));
            // Acks are confirmation of membership; never filtered.
            assert_eq!(app.notices().get(0).map(|n| n.channel.as_str()), Some(channel));
        },
        Op::Garbage(text) => {
            let _ = app.handle(frame(text.clone()));
        },
        Op::TogglePref(i) => {
            let _ = app.toggle_preference(NoticeKind::ALL[*i]);
        },
        Op::ClearNotices => {
            let _ = app.clear_notices();
        },
    }
}

fn check_invariants(app: &App) {
    assert!(app.chat().len() <= CHAT_SCROLLBACK_CAP);
    assert!(app.notices().len() <= NOTICE_LOG_CAP);

    if app.session_state() == SessionState::Disconnected {
        assert!(app.subscriptions().is_empty(), "disconnect must clear the subscription set");
    }

    // The outbound-send selection is enabled exactly when the set is
    // non-empty.
    assert_eq!(app.selected_channel().is_some(), !app.subscriptions().is_empty());

    // Every retained chat entry belongs to a monitored channel or to a
    // channel that was monitored when the entry was processed; after a
    // disconnect the transcript is empty, so entries never outlive the set
    // wholesale.
    if app.subscriptions().is_empty() {
        assert!(app.chat().is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_invariants_hold_under_arbitrary_ops(
        ops in prop::collection::vec(op_strategy(), 0..100),
    ) {
        let mut app = App::new();
        let _ = app.connect();
        let _ = app.handle(AppEvent::Opened);

        for op in &ops {
            apply(&mut app, op);
            check_invariants(&app);
        }
    }

    #[test]
    fn prop_caps_hold_under_floods(count in 0usize..500) {
        let mut app = App::new();
        let _ = app.connect();
        let _ = app.handle(AppEvent::Opened);
        let _ = app.subscribe("alice");

        for n in 0..count {
            let _ = app.handle(frame(format!(
                r#"{{"user":"u{n}","message":"m","channel":"alice"}}"#
            )));
            let _ = app.handle(frame(
                r#"{"type":"roomstate","channel":"alice"}"#.to_owned(),
            ));

            prop_assert!(app.chat().len() <= CHAT_SCROLLBACK_CAP);
            prop_assert!(app.notices().len() <= NOTICE_LOG_CAP);
        }

        if count > CHAT_SCROLLBACK_CAP {
            // Oldest chat evicted from the front; newest retained.
            prop_assert_eq!(app.chat().len(), CHAT_SCROLLBACK_CAP);
            let newest = format!("u{}", count - 1);
            prop_assert_eq!(
                app.chat().iter().last().map(|e| e.user.clone()),
                Some(newest)
            );
        }
    }
}
