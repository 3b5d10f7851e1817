//! WebSocket link to the relay.
//!
//! One transport session per connection attempt. The socket is split into a
//! reader and a writer task; both sides of the link talk to the driver
//! exclusively through mpsc channels.

use futures::{SinkExt, StreamExt};
use relaywatch_app::LinkEvent;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// WebSocket handshake or protocol error.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

const OUTBOUND_CAPACITY: usize = 32;
const INBOUND_CAPACITY: usize = 256;

/// A connected relay link.
///
/// Dropping the link does not close the socket; call [`RelayLink::stop`].
pub struct RelayLink {
    /// Outbound command frames.
    pub to_relay: mpsc::Sender<String>,
    /// Inbound link events. After a `Closed` or `Errored` event the link is
    /// spent and should be discarded.
    pub from_relay: mpsc::Receiver<LinkEvent>,
    reader: tokio::task::AbortHandle,
    writer: tokio::task::AbortHandle,
}

impl RelayLink {
    /// Establish one transport session to `ws://{relay_addr}/ws`.
    ///
    /// # Errors
    ///
    /// Returns an error if the WebSocket handshake fails.
    pub async fn connect(relay_addr: &str) -> Result<Self, TransportError> {
        let url = format!("ws://{relay_addr}/ws");
        let (stream, _) = connect_async(&url).await?;
        let (mut sink, mut source) = stream.split();

        let (to_relay, mut outbound) = mpsc::channel::<String>(OUTBOUND_CAPACITY);
        let (inbound_tx, from_relay) = mpsc::channel::<LinkEvent>(INBOUND_CAPACITY);

        let writer = tokio::spawn(async move {
            while let Some(text) = outbound.recv().await {
                if sink.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
        });

        let reader = tokio::spawn(async move {
            loop {
                let event = match source.next().await {
                    Some(Ok(Message::Text(text))) => LinkEvent::Frame(text),
                    // Ping/pong/binary frames carry no relay traffic.
                    Some(Ok(Message::Close(_))) | None => LinkEvent::Closed,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => LinkEvent::Errored(e.to_string()),
                };
                let terminal = !matches!(event, LinkEvent::Frame(_));
                if inbound_tx.send(event).await.is_err() || terminal {
                    break;
                }
            }
        });

        Ok(Self {
            to_relay,
            from_relay,
            reader: reader.abort_handle(),
            writer: writer.abort_handle(),
        })
    }

    /// Abort both socket tasks.
    pub fn stop(&self) {
        self.reader.abort();
        self.writer.abort();
    }
}
