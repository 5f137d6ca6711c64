//! SSE streaming over the [`HttpClient`] trait.
//!
//! `stream_sse` spawns a reader task that feeds the response body through
//! the line parser and forwards dispatched frames as [`SseEvent`]s. The
//! returned handle force-closes the connection; closing after natural
//! completion is a no-op. This layer never reconnects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use super::parser::SseParser;
use crate::stream::StreamMessage;
use crate::traits::{Headers, HttpClient};

/// Event name that signals end-of-stream.
pub const COMPLETE_EVENT: &str = "complete";

/// SSE connection errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Stream error: {0}")]
    Transport(String),
    #[error("Stream ended before completion")]
    UnexpectedEof,
}

/// Events delivered to the subscriber of one SSE connection.
#[derive(Debug, Clone)]
pub enum SseEvent {
    /// A decoded (or raw passthrough) payload.
    Message(StreamMessage),
    /// The named `complete` event arrived; the connection is closed.
    Complete,
    /// The connection failed and is closed. Delivered at most once.
    Error(SseError),
}

/// Owning handle for one SSE connection.
#[derive(Debug)]
pub struct SseHandle {
    closed: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl SseHandle {
    /// Force-close the connection. Safe to call repeatedly and after the
    /// stream has already completed or failed.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.abort.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Drop for SseHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open an SSE connection and forward its events over `tx`.
pub fn stream_sse<C>(
    http: Arc<C>,
    url: impl Into<String>,
    tx: mpsc::UnboundedSender<SseEvent>,
) -> SseHandle
where
    C: HttpClient + 'static,
{
    let url = url.into();
    let closed = Arc::new(AtomicBool::new(false));
    let liveness = Arc::clone(&closed);
    let task = tokio::spawn(async move {
        run_stream(http.as_ref(), &url, &tx, &liveness).await;
    });
    SseHandle {
        closed,
        abort: task.abort_handle(),
    }
}

async fn run_stream<C: HttpClient>(
    http: &C,
    url: &str,
    tx: &mpsc::UnboundedSender<SseEvent>,
    closed: &AtomicBool,
) {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "text/event-stream".to_string());

    let mut body = match http.get_stream(url, &headers).await {
        Ok(stream) => stream,
        Err(e) => {
            warn!("SSE connection to {} failed: {}", url, e);
            emit_and_close(tx, closed, SseEvent::Error(SseError::ConnectionFailed(e.to_string())));
            return;
        }
    };
    debug!("SSE stream opened: {}", url);

    let mut parser = SseParser::new();
    // Carries a partial line across chunk boundaries.
    let mut pending = String::new();

    while let Some(chunk) = body.next().await {
        if closed.load(Ordering::SeqCst) {
            return;
        }
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("SSE stream error on {}: {}", url, e);
                emit_and_close(tx, closed, SseEvent::Error(SseError::Transport(e.to_string())));
                return;
            }
        };

        pending.push_str(&String::from_utf8_lossy(&bytes));
        while let Some(pos) = pending.find('\n') {
            let line: String = pending.drain(..=pos).collect();
            let line = line.trim_end_matches(['\r', '\n']);
            let Some(frame) = parser.feed_line(line) else {
                continue;
            };

            if frame.event == COMPLETE_EVENT {
                debug!("SSE stream complete: {}", url);
                emit_and_close(tx, closed, SseEvent::Complete);
                return;
            }
            if closed.load(Ordering::SeqCst) {
                return;
            }
            let msg = StreamMessage::decode(&frame.data);
            if tx.send(SseEvent::Message(msg)).is_err() {
                // Subscriber went away; nothing left to stream for.
                closed.store(true, Ordering::SeqCst);
                return;
            }
        }
    }

    // The server hung up without sending `complete`.
    emit_and_close(tx, closed, SseEvent::Error(SseError::UnexpectedEof));
}

/// Deliver a terminal event at most once, then mark the connection closed.
fn emit_and_close(tx: &mpsc::UnboundedSender<SseEvent>, closed: &AtomicBool, event: SseEvent) {
    if !closed.swap(true, Ordering::SeqCst) {
        let _ = tx.send(event);
    }
}
