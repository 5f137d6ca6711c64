//! Domain types exchanged with the playground backend.
//!
//! REST responses deserialize directly into these structs; WebSocket and SSE
//! payloads arrive as [`crate::stream::StreamMessage`] values and are lifted
//! into the typed updates here when they match.

use chrono::{DateTime, Local};
use serde::Deserialize;

/// A dataset available in the playground catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub rows: u64,
    pub columns: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Per-column profile statistics included in a dataset preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    /// Fraction of missing values, 0.0 to 1.0
    #[serde(default)]
    pub missing: f64,
    #[serde(default)]
    pub distinct: Option<u64>,
}

/// A dataset preview: column profiles plus a handful of sample rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetPreview {
    pub dataset_id: String,
    pub columns: Vec<ColumnProfile>,
    #[serde(default)]
    pub sample: Vec<Vec<String>>,
}

/// A playground session created for one dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub dataset_id: String,
}

/// Live training telemetry received over the session WebSocket.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingUpdate {
    pub epoch: u32,
    #[serde(default)]
    pub total_epochs: Option<u32>,
    pub loss: f64,
    pub accuracy: f64,
    /// Overall progress, 0.0 to 1.0
    #[serde(default)]
    pub progress: f64,
}

/// A drift monitoring sample for one feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriftUpdate {
    pub feature: String,
    pub score: f64,
    pub threshold: f64,
}

impl DriftUpdate {
    /// Whether the score crossed the alerting threshold.
    pub fn is_drifting(&self) -> bool {
        self.score >= self.threshold
    }
}

/// Category of a session log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Action,
}

/// One entry in the session log.
///
/// Entries are immutable once created and only ever appended to the
/// state-owned sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Time-of-day label shown in the log panel.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Category of an AI-generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Info,
    Warning,
    Success,
}

impl InsightKind {
    /// Parse a kind from a payload field, defaulting to `Info`.
    pub fn parse(s: &str) -> Self {
        match s {
            "warning" => InsightKind::Warning,
            "success" => InsightKind::Success,
            _ => InsightKind::Info,
        }
    }
}

/// An AI-generated insight message, complete before any of it is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Lift an insight out of a stream payload.
    ///
    /// JSON payloads use their `type` and `text` fields; raw payloads become
    /// `Info` insights carrying the payload verbatim.
    pub fn from_stream(msg: &crate::stream::StreamMessage) -> Option<Self> {
        let text = msg.text()?;
        let kind = msg.field("type").map(InsightKind::parse).unwrap_or(InsightKind::Info);
        Some(Self::new(kind, text))
    }
}
