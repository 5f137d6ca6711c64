//! mlplay TUI - a terminal client for the mlplay ML playground
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod insight;
pub mod logging;
pub mod models;
pub mod reveal;
pub mod sse;
pub mod state;
pub mod stream;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod websocket;
