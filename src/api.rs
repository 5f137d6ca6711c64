//! REST client for the playground backend.
//!
//! One-shot request helpers over the [`HttpClient`] trait. Any non-2xx
//! status is a failure with a descriptive per-endpoint error; response
//! bodies are only parsed on success. No retries, no backoff.

use serde_json::json;

use crate::models::{Dataset, DatasetPreview, SessionInfo};
use crate::traits::{Headers, HttpClient, HttpError};

/// Errors surfaced by the REST helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to fetch datasets (status {status})")]
    FetchDatasets { status: u16 },
    #[error("failed to fetch preview for dataset {dataset_id} (status {status})")]
    FetchPreview { dataset_id: String, status: u16 },
    #[error("failed to create session (status {status})")]
    CreateSession { status: u16 },
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// REST client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    http: C,
    base: String,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a client over any [`HttpClient`] implementation.
    pub fn with_http(http: C, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// `GET {base}/datasets`
    pub async fn fetch_datasets(&self) -> Result<Vec<Dataset>, ApiError> {
        let response = self.http.get(&self.url("datasets"), &Headers::new()).await?;
        if !response.is_success() {
            return Err(ApiError::FetchDatasets {
                status: response.status,
            });
        }
        Ok(response.json()?)
    }

    /// `GET {base}/datasets/{id}/preview`
    pub async fn fetch_dataset_preview(&self, id: &str) -> Result<DatasetPreview, ApiError> {
        let path = format!("datasets/{}/preview", id);
        let response = self.http.get(&self.url(&path), &Headers::new()).await?;
        if !response.is_success() {
            return Err(ApiError::FetchPreview {
                dataset_id: id.to_string(),
                status: response.status,
            });
        }
        Ok(response.json()?)
    }

    /// `POST {base}/sessions` with body `{"dataset_id": ...}`
    pub async fn create_session(&self, dataset_id: &str) -> Result<SessionInfo, ApiError> {
        let body = json!({ "dataset_id": dataset_id }).to_string();
        let response = self
            .http
            .post(&self.url("sessions"), &body, &Headers::new())
            .await?;
        if !response.is_success() {
            return Err(ApiError::CreateSession {
                status: response.status,
            });
        }
        Ok(response.json()?)
    }
}

impl ApiClient<crate::adapters::ReqwestHttpClient> {
    /// Production client using reqwest.
    pub fn new(config: &crate::config::Config) -> Self {
        Self::with_http(crate::adapters::ReqwestHttpClient::new(), &config.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;

    fn client(mock: MockHttpClient) -> ApiClient<MockHttpClient> {
        ApiClient::with_http(mock, "http://test/api")
    }

    #[tokio::test]
    async fn test_fetch_datasets_success() {
        let mock = MockHttpClient::new();
        mock.push_response(
            200,
            r#"[{"id":"iris","name":"Iris","rows":150,"columns":5},
                {"id":"wine","name":"Wine Quality","rows":6497,"columns":12}]"#,
        );
        let api = client(mock);

        let datasets = api.fetch_datasets().await.unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].id, "iris");
        assert_eq!(datasets[1].rows, 6497);
    }

    #[tokio::test]
    async fn test_fetch_datasets_non_2xx_is_descriptive_error() {
        let mock = MockHttpClient::new();
        mock.push_response(500, "oops");
        let api = client(mock);

        let err = api.fetch_datasets().await.unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch datasets (status 500)");
    }

    #[tokio::test]
    async fn test_fetch_preview_url_and_error() {
        let mock = MockHttpClient::new();
        mock.push_response(404, "");
        let api = client(mock);

        let err = api.fetch_dataset_preview("iris").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to fetch preview for dataset iris (status 404)"
        );
    }

    #[tokio::test]
    async fn test_create_session_posts_dataset_id() {
        let mock = MockHttpClient::new();
        mock.push_response(200, r#"{"session_id":"sess-1","dataset_id":"iris"}"#);
        let api = client(mock);

        let session = api.create_session("iris").await.unwrap();
        assert_eq!(session.session_id, "sess-1");

        let requests = api.http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "http://test/api/sessions");
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"dataset_id":"iris"}"#)
        );
    }

    #[tokio::test]
    async fn test_create_session_failure_makes_exactly_one_request() {
        let mock = MockHttpClient::new();
        mock.push_response(503, "unavailable");
        let api = client(mock);

        let err = api.create_session("iris").await.unwrap_err();
        assert!(matches!(err, ApiError::CreateSession { status: 503 }));
        assert_eq!(api.http.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_success_with_malformed_body_is_decode_error() {
        let mock = MockHttpClient::new();
        mock.push_response(200, "not json");
        let api = client(mock);

        let err = api.fetch_datasets().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
