//! SSE (Server-Sent Events) client.
//!
//! Wire format, per event:
//! - `event: <name>` - optional event name line (defaults to `message`)
//! - `data: <payload>` - data payload line(s)
//! - Empty line - dispatches the accumulated event
//! - Lines starting with `:` - comments (ignored)
//!
//! A named `complete` event ends the stream.

mod client;
mod parser;

pub use client::{stream_sse, SseError, SseEvent, SseHandle, COMPLETE_EVENT};
pub use parser::{SseFrame, SseParser};
