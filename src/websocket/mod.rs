//! WebSocket client for live training telemetry.

mod client;

pub use client::{connect_training, WsError, WsEvent, WsHandle};
