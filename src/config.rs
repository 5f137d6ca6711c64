//! Client configuration.
//!
//! Use the builder pattern to customize behavior, or [`Config::from_env`] to
//! pick up overrides from the environment.

/// Configuration for the playground client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API, e.g. `http://127.0.0.1:8000/api`
    pub api_base: String,
    /// UI tick interval in milliseconds. Drives reveal cadence, counter
    /// animation, and cursor blink.
    pub tick_ms: u64,
    /// Ticks an insight card waits before the one after it starts revealing
    pub insight_stagger_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000/api".to_string(),
            tick_ms: 30,
            insight_stagger_ticks: 10,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend API base URL. A trailing slash is stripped.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Set the UI tick interval.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Create a config from the environment. `MLPLAY_API` overrides the API
    /// base URL.
    pub fn from_env() -> Self {
        match std::env::var("MLPLAY_API") {
            Ok(base) if !base.trim().is_empty() => Self::default().with_api_base(base),
            _ => Self::default(),
        }
    }

    /// Whether the API base uses TLS. The WebSocket scheme follows it.
    pub fn is_secure(&self) -> bool {
        self.api_base.starts_with("https://")
    }

    /// Host (and port) portion of the API base URL.
    pub fn host(&self) -> &str {
        let rest = self
            .api_base
            .strip_prefix("https://")
            .or_else(|| self.api_base.strip_prefix("http://"))
            .unwrap_or(&self.api_base);
        rest.split('/').next().unwrap_or(rest)
    }

    /// URL of the live training socket for one session.
    ///
    /// `https` API bases map to `wss`, plain `http` to `ws`.
    pub fn training_ws_url(&self, session_id: &str) -> String {
        let scheme = if self.is_secure() { "wss" } else { "ws" };
        format!(
            "{}://{}/ws/sessions/{}/training",
            scheme,
            self.host(),
            session_id
        )
    }

    /// REST endpoint for a path under the API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
