//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use crate::{App, AppAction, LinkEvent, LookupPanel, LookupQuery, SendOutcome};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic, so the same
/// orchestration code runs against a real terminal and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm for input, ratatui for rendering, tokio-tungstenite
///   for the relay link, reqwest for the lookup collaborator
/// - **Tests**: in-memory queues for input and link events
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// The driver owns input-to-App translation (key handling, command
    /// parsing) and returns the resulting actions.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Establish one transport session to the relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    fn connect(&mut self, relay_addr: &str)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a command text frame to the relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the link rejects the frame.
    fn send_command(&mut self, text: String)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Receive the next link event, or `None` if nothing is pending.
    fn recv_link(&mut self) -> impl Future<Output = Option<LinkEvent>> + Send;

    /// Whether a transport session is currently established.
    fn is_connected(&self) -> bool;

    /// Run a lookup against the request/response collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the runtime renders it inline.
    fn lookup(
        &mut self,
        query: &LookupQuery,
    ) -> impl Future<Output = Result<LookupPanel, Self::Error>> + Send;

    /// Post an outbound chat message through the collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the runtime reports it as a
    /// status message.
    fn post_chat(
        &mut self,
        channel: &str,
        message: &str,
    ) -> impl Future<Output = Result<SendOutcome, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop the connection and clean up resources.
    fn stop(&mut self);
}
