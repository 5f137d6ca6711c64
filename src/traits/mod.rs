//! Trait abstractions over external resources.
//!
//! These exist so transport-dependent code can be driven by mock
//! implementations in tests.

mod http;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
