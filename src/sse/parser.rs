//! Line-level SSE parsing.
//!
//! The parser is stateful: it accumulates `event:` and `data:` lines until a
//! blank line dispatches the frame. Comment lines and unknown fields are
//! ignored. Multi-line data is joined with newlines.

/// One dispatched SSE frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SseFrame {
    /// Event name; `message` when the stream did not name one.
    pub event: String,
    /// Concatenated data payload.
    pub data: String,
}

/// Stateful SSE line parser.
#[derive(Debug, Default)]
pub struct SseParser {
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single line (without its trailing newline).
    ///
    /// Returns a frame when a blank line dispatches accumulated state,
    /// `None` while accumulating.
    pub fn feed_line(&mut self, line: &str) -> Option<SseFrame> {
        if line.is_empty() {
            return self.dispatch();
        }
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            // id:, retry:, and anything else are not used by this client
            _ => {}
        }
        None
    }

    /// Clear accumulated state without dispatching.
    pub fn reset(&mut self) {
        self.event = None;
        self.data.clear();
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        if self.event.is_none() && self.data.is_empty() {
            return None;
        }
        let event = self.event.take().unwrap_or_else(|| "message".to_string());
        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseFrame { event, data })
    }
}
