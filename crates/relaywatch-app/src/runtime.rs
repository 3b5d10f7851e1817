//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: state machine
//! - [`Driver`]: platform-specific I/O
//!
//! Actions execute strictly in the order the App produced them, which is
//! what guarantees the relay observes subscribe/unsubscribe intent in the
//! order the user issued it.

use crate::{App, AppAction, AppEvent, Driver, LookupPanel};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    relay_addr: String,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and relay address.
    pub fn new(driver: D, relay_addr: String) -> Self {
        Self { driver, app: App::new(), relay_addr }
    }

    /// Run the main event loop.
    ///
    /// 1. Renders the initial state and starts the first connection.
    /// 2. Polls for input events from the driver.
    /// 3. Receives link events (frames, close, error) from the relay.
    /// 4. Executes actions produced by the App, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error while polling
    /// input or rendering. Link and command failures are not fatal; they
    /// feed back into the App as disconnect events or log lines.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let actions = self.app.connect();
        if self.process_actions(actions).await? {
            self.driver.stop();
            return Ok(());
        }

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let actions = self.driver.poll_event(&mut self.app).await?;
        if !actions.is_empty() && self.process_actions(actions).await? {
            return Ok(true);
        }

        if self.driver.is_connected()
            && let Some(link) = self.driver.recv_link().await
        {
            let actions = self.app.handle(AppEvent::from(link));
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Execute actions in order; follow-up events re-enter the queue.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Connect => match self.driver.connect(&self.relay_addr).await {
                        Ok(()) => pending_actions.extend(self.app.handle(AppEvent::Opened)),
                        Err(e) => pending_actions
                            .extend(self.app.handle(AppEvent::Errored { message: e.to_string() })),
                    },
                    AppAction::SendCommand(command) => {
                        // Commands issued while the link is down are dropped
                        // with a log line, never surfaced to the caller.
                        if !self.driver.is_connected() {
                            tracing::warn!(?command, "dropping command while disconnected");
                            continue;
                        }
                        match command.encode() {
                            Ok(text) => {
                                if let Err(e) = self.driver.send_command(text).await {
                                    tracing::warn!(%e, "command send failed");
                                }
                            },
                            Err(e) => tracing::error!(%e, "command encoding failed"),
                        }
                    },
                    AppAction::Lookup(query) => {
                        // Collaborator failures render inline, never retry.
                        let panel = match self.driver.lookup(&query).await {
                            Ok(panel) => panel,
                            Err(e) => LookupPanel::error(query.title(), e),
                        };
                        pending_actions.extend(self.app.show_lookup(panel));
                    },
                    AppAction::PostChat { channel, message } => {
                        match self.driver.post_chat(&channel, &message).await {
                            Ok(outcome) => {
                                pending_actions.extend(self.app.report_send_outcome(&outcome));
                            },
                            Err(e) => {
                                self.app.set_status(format!("Send failed: {e}"));
                                pending_actions.push(AppAction::Render);
                            },
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// The application state machine.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Mutable access to the application state machine.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
