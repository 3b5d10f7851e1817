//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The relay link is a WebSocket
//! ([`RelayLink`]); lookups go over HTTP ([`LookupClient`]).

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use relaywatch_app::{
    App, AppAction, AppEvent, Driver, LinkEvent, LookupPanel, LookupQuery, SendOutcome,
};
use thiserror::Error;

use crate::{InputState, KeyInput, LookupClient, LookupError, RelayLink, TransportError, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Lookup collaborator error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Channel send error.
    #[error("channel send error")]
    ChannelSend,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), the relay link
/// (tokio-tungstenite), and lookups (reqwest). Owns the input state.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    link: Option<RelayLink>,
    lookup: LookupClient,
    input_state: InputState,
}

impl TerminalDriver {
    /// Create a new terminal driver, entering raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new(relay_addr: &str) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self {
            terminal,
            event_stream,
            link: None,
            lookup: LookupClient::new(relay_addr),
            input_state: InputState::new(),
        })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(self.input_state.handle_key(key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    async fn connect(&mut self, relay_addr: &str) -> Result<(), Self::Error> {
        let link = RelayLink::connect(relay_addr).await?;
        self.link = Some(link);
        Ok(())
    }

    async fn send_command(&mut self, text: String) -> Result<(), Self::Error> {
        if let Some(link) = &self.link {
            link.to_relay.send(text).await.map_err(|_| TerminalError::ChannelSend)?;
        }
        Ok(())
    }

    async fn recv_link(&mut self) -> Option<LinkEvent> {
        let event = self.link.as_mut()?.from_relay.try_recv().ok()?;
        if !matches!(event, LinkEvent::Frame(_)) {
            // The link is spent; drop it so is_connected turns false.
            if let Some(link) = self.link.take() {
                link.stop();
            }
        }
        Some(event)
    }

    fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    async fn lookup(&mut self, query: &LookupQuery) -> Result<LookupPanel, Self::Error> {
        let lines = match query {
            LookupQuery::User(login) => self.lookup.user(login).await?,
            LookupQuery::Stream(login) => self.lookup.stream(login).await?,
            LookupQuery::TopGames => self.lookup.top_games().await?,
        };
        Ok(LookupPanel::new(query.title(), lines))
    }

    async fn post_chat(&mut self, channel: &str, message: &str) -> Result<SendOutcome, Self::Error> {
        Ok(self.lookup.post_chat(channel, message).await?)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app, &self.input_state);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(link) = self.link.take() {
            link.stop();
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
