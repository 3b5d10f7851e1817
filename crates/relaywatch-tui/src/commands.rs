//! Slash-command parsing.
//!
//! Bare text is an outbound chat message for the selected channel; lines
//! starting with `/` are commands. Parsing never fails hard: unknown names
//! and bad arguments come back as variants the input handler turns into
//! status alerts.

use relaywatch_proto::NoticeKind;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start monitoring a channel.
    Join {
        /// Channel name as typed.
        channel: String,
    },
    /// Stop monitoring a channel.
    Part {
        /// Channel name as typed.
        channel: String,
    },
    /// Show the preference summary.
    ShowPrefs,
    /// Toggle one notice category.
    TogglePref {
        /// Category to flip.
        kind: NoticeKind,
    },
    /// Clear the notice log.
    Clear,
    /// Look up a user profile.
    User {
        /// Login to look up.
        login: String,
    },
    /// Look up live-stream status.
    Stream {
        /// Login to look up.
        login: String,
    },
    /// Fetch the top-games listing.
    Games,
    /// Reconnect to the relay.
    Connect,
    /// Quit the application.
    Quit,
    /// Outbound chat message (bare text or `/send`).
    Message {
        /// Message body.
        content: String,
    },
    /// Unrecognized command name.
    Unknown {
        /// The raw input line.
        input: String,
    },
    /// Recognized command with bad arguments.
    InvalidArgs {
        /// Command name without the slash.
        command: &'static str,
        /// Usage hint.
        error: &'static str,
    },
}

/// Parse one input line.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Message { content: trimmed.to_owned() };
    };

    let (name, args) = rest.split_once(' ').map_or((rest, ""), |(n, a)| (n, a.trim()));
    match name {
        "join" | "j" => require_arg(args, "join", "usage: /join <channel>", |channel| {
            Command::Join { channel }
        }),
        "part" | "p" => require_arg(args, "part", "usage: /part <channel>", |channel| {
            Command::Part { channel }
        }),
        "send" => require_arg(args, "send", "usage: /send <message>", |content| {
            Command::Message { content }
        }),
        "prefs" => {
            if args.is_empty() {
                return Command::ShowPrefs;
            }
            NoticeKind::from_wire(args).map_or(
                Command::InvalidArgs {
                    command: "prefs",
                    error: "expected one of: notice, usernotice, clearchat, roomstate",
                },
                |kind| Command::TogglePref { kind },
            )
        },
        "clear" => Command::Clear,
        "user" => require_arg(args, "user", "usage: /user <login>", |login| {
            Command::User { login }
        }),
        "stream" => require_arg(args, "stream", "usage: /stream <login>", |login| {
            Command::Stream { login }
        }),
        "games" => Command::Games,
        "connect" => Command::Connect,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown { input: trimmed.to_owned() },
    }
}

fn require_arg(
    args: &str,
    command: &'static str,
    error: &'static str,
    build: impl FnOnce(String) -> Command,
) -> Command {
    if args.is_empty() {
        Command::InvalidArgs { command, error }
    } else {
        build(args.to_owned())
    }
}
