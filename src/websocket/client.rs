//! Session training socket.
//!
//! Connects to `{ws|wss}://{host}/ws/sessions/{id}/training` and forwards
//! inbound text frames as decoded-or-raw payloads. The connection is
//! receive-only from this client's side (pings are answered, nothing else
//! is sent). Natural close, peer errors, and stream end all surface as one
//! `Closed` event; this layer never reconnects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::stream::StreamMessage;

/// WebSocket connection errors.
#[derive(Debug, Clone)]
pub enum WsError {
    ConnectionFailed(String),
}

impl std::fmt::Display for WsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WsError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
        }
    }
}

impl std::error::Error for WsError {}

/// Events delivered to the subscriber of one training socket.
#[derive(Debug, Clone)]
pub enum WsEvent {
    /// A decoded (or raw passthrough) inbound frame.
    Message(StreamMessage),
    /// The connection ended (peer close, network error, or stream end).
    /// Delivered exactly once per connection; never after a caller-initiated
    /// close.
    Closed,
}

/// Owning handle for one training socket.
#[derive(Debug)]
pub struct WsHandle {
    closed: Arc<AtomicBool>,
    shutdown_tx: watch::Sender<bool>,
}

impl WsHandle {
    /// Close the connection. Safe to call repeatedly and after the peer has
    /// already closed.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            let _ = self.shutdown_tx.send(true);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for WsHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open the training socket for a session and forward its events over `tx`.
pub async fn connect_training(
    config: &Config,
    session_id: &str,
    tx: mpsc::UnboundedSender<WsEvent>,
) -> Result<WsHandle, WsError> {
    let url = config.training_ws_url(session_id);
    let (ws_stream, _) = connect_async(&url)
        .await
        .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;
    info!("Connected to training socket at {}", url);

    let (mut sink, mut stream) = ws_stream.split();
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let closed = Arc::new(AtomicBool::new(false));
    let liveness = Arc::clone(&closed);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            if liveness.load(Ordering::SeqCst) {
                                return;
                            }
                            let payload = StreamMessage::decode(&text);
                            if tx.send(WsEvent::Message(payload)).is_err() {
                                warn!("Training socket subscriber gone, closing");
                                liveness.store(true, Ordering::SeqCst);
                                return;
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            let _ = sink.send(Message::Pong(data)).await;
                        }
                        Some(Ok(Message::Close(_))) => {
                            debug!("Training socket closed by peer");
                            break;
                        }
                        Some(Ok(_)) => {
                            // Binary, Pong, and raw frames are not part of
                            // the training protocol.
                        }
                        Some(Err(e)) => {
                            warn!("Training socket error: {}", e);
                            break;
                        }
                        None => {
                            debug!("Training socket stream ended");
                            break;
                        }
                    }
                }
                _ = shutdown_rx.changed() => {
                    let _ = sink.close().await;
                    return;
                }
            }
        }

        // Natural close: notify exactly once, unless the caller already
        // disposed the handle.
        if !liveness.swap(true, Ordering::SeqCst) {
            let _ = tx.send(WsEvent::Closed);
        }
    });

    Ok(WsHandle {
        closed,
        shutdown_tx,
    })
}
