//! Messages delivered to the app from async operations.

use crate::models::{Dataset, DatasetPreview, SessionInfo};
use crate::sse::SseEvent;
use crate::websocket::{WsEvent, WsHandle};

/// Everything the event loop can receive from spawned work.
#[derive(Debug)]
pub enum AppMessage {
    /// Dataset catalog loaded
    DatasetsLoaded(Vec<Dataset>),
    /// Dataset catalog request failed
    DatasetsFailed(String),
    /// Preview loaded for the selected dataset
    PreviewLoaded(DatasetPreview),
    /// Preview request failed
    PreviewFailed(String),
    /// Session created on the backend
    SessionCreated(SessionInfo),
    /// Session creation failed
    SessionFailed(String),
    /// Event from the analysis SSE stream
    Analysis(SseEvent),
    /// The training socket connected
    TrainingConnected(WsHandle),
    /// The training socket could not be opened
    TrainingConnectFailed(String),
    /// Event from the training socket
    Training(WsEvent),
}
