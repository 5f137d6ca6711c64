//! Concrete implementations of the transport traits.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
