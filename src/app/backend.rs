//! Backend operations spawned from the event loop.
//!
//! Each operation runs on its own task and reports back through the app's
//! message channel; nothing here blocks the UI.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::{App, AppMessage};
use crate::sse::stream_sse;
use crate::websocket::connect_training;

impl App {
    /// Fetch the dataset catalog.
    pub fn load_datasets(&self) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let msg = match api.fetch_datasets().await {
                Ok(datasets) => AppMessage::DatasetsLoaded(datasets),
                Err(e) => AppMessage::DatasetsFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Fetch the profile preview for the selected dataset.
    pub fn load_preview(&self, dataset_id: &str) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let dataset_id = dataset_id.to_string();
        tokio::spawn(async move {
            let msg = match api.fetch_dataset_preview(&dataset_id).await {
                Ok(preview) => AppMessage::PreviewLoaded(preview),
                Err(e) => AppMessage::PreviewFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Create a playground session for the selected dataset.
    pub fn start_session(&self, dataset_id: &str) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        let dataset_id = dataset_id.to_string();
        tokio::spawn(async move {
            let msg = match api.create_session(&dataset_id).await {
                Ok(session) => AppMessage::SessionCreated(session),
                Err(e) => AppMessage::SessionFailed(e.to_string()),
            };
            let _ = tx.send(msg);
        });
    }

    /// Open the analysis SSE stream for a session, replacing any previous
    /// stream.
    pub(super) fn open_analysis_stream(&mut self, session_id: &str) {
        if let Some(previous) = self.sse_handle.take() {
            previous.close();
        }

        let url = self
            .config
            .endpoint(&format!("sessions/{}/analysis/stream", session_id));
        debug!("Opening analysis stream: {}", url);

        let (sse_tx, mut sse_rx) = mpsc::unbounded_channel();
        let handle = stream_sse(Arc::clone(&self.http), url, sse_tx);
        self.sse_handle = Some(handle);

        let tx = self.tx.clone();
        tokio::spawn(async move {
            while let Some(event) = sse_rx.recv().await {
                if tx.send(AppMessage::Analysis(event)).is_err() {
                    break;
                }
            }
        });
    }

    /// Connect the live training socket for a session.
    pub(super) fn connect_training_socket(&mut self, session_id: &str) {
        if let Some(previous) = self.ws_handle.take() {
            previous.close();
        }

        let config = self.config.clone();
        let session_id = session_id.to_string();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let (ws_tx, mut ws_rx) = mpsc::unbounded_channel();
            match connect_training(&config, &session_id, ws_tx).await {
                Ok(handle) => {
                    if tx.send(AppMessage::TrainingConnected(handle)).is_err() {
                        return;
                    }
                    while let Some(event) = ws_rx.recv().await {
                        if tx.send(AppMessage::Training(event)).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::TrainingConnectFailed(e.to_string()));
                }
            }
        });
    }
}
