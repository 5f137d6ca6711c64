//! Mock HTTP client for testing.
//!
//! Responses are queued ahead of time and served in order; every request is
//! recorded so tests can assert on call counts and payloads.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// A request captured by [`MockHttpClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: Option<String>,
}

/// Mock HTTP client.
///
/// # Example
///
/// ```ignore
/// let mock = MockHttpClient::new();
/// mock.push_response(200, r#"[{"id":"iris","name":"Iris","rows":150,"columns":5}]"#);
/// let api = ApiClient::with_http(mock, "http://test/api");
/// let datasets = api.fetch_datasets().await?;
/// ```
#[derive(Default)]
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Result<Response, HttpError>>>,
    streams: Mutex<VecDeque<Vec<Result<Bytes, HttpError>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Response::new(status, Bytes::from(body.into()))));
    }

    /// Queue a transport error for the next request.
    pub fn push_error(&self, err: HttpError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Queue the chunks served by the next `get_stream` call.
    pub fn push_stream(&self, chunks: Vec<Result<Bytes, HttpError>>) {
        self.streams.lock().unwrap().push_back(chunks);
    }

    /// Queue a `get_stream` body delivered as a single chunk.
    pub fn push_stream_body(&self, body: impl Into<String>) {
        self.push_stream(vec![Ok(Bytes::from(body.into()))]);
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &str, url: &str, body: Option<&str>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            body: body.map(str::to_string),
        });
    }

    fn next_response(&self) -> Result<Response, HttpError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Other("no mock response queued".to_string())))
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.record("GET", url, None);
        self.next_response()
    }

    async fn post(&self, url: &str, body: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.record("POST", url, Some(body));
        self.next_response()
    }

    async fn get_stream(&self, url: &str, _headers: &Headers) -> Result<ByteStream, HttpError> {
        self.record("GET", url, None);
        let chunks = self
            .streams
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| HttpError::Other("no mock stream queued".to_string()))?;
        Ok(Box::pin(futures::stream::iter(chunks)))
    }
}
