//! Application state and update logic.
//!
//! The app owns the injectable [`PlaygroundState`], the reveal animations,
//! and the live connection handles. All async results arrive as
//! [`AppMessage`]s over one channel; `update` folds them into state and
//! `on_tick` advances every animation on the shared cadence.

mod backend;
mod handlers;
mod messages;

pub use messages::AppMessage;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::warn;

use crate::adapters::ReqwestHttpClient;
use crate::api::ApiClient;
use crate::config::Config;
use crate::insight::InsightPresenter;
use crate::models::{
    Dataset, DatasetPreview, DriftUpdate, Insight, LogKind, SessionInfo, TrainingUpdate,
};
use crate::reveal::CountUp;
use crate::sse::{SseEvent, SseHandle};
use crate::state::{PlaygroundState, Stage};
use crate::websocket::{WsEvent, WsHandle};

/// Animated view of the live training metrics.
#[derive(Debug, Clone)]
pub struct TrainingView {
    pub epoch: CountUp,
    pub loss: CountUp,
    pub accuracy: CountUp,
    /// Overall progress, 0.0 to 1.0
    pub progress: f64,
}

impl Default for TrainingView {
    fn default() -> Self {
        Self {
            epoch: CountUp::new(0.0, 10),
            loss: CountUp::new(0.0, 20).with_precision(4),
            accuracy: CountUp::new(0.0, 20).with_precision(1).with_suffix("%"),
            progress: 0.0,
        }
    }
}

impl TrainingView {
    /// Fold one telemetry update into the animated counters.
    pub fn apply(&mut self, update: &TrainingUpdate) {
        self.epoch.retarget(f64::from(update.epoch));
        self.loss.retarget(update.loss);
        self.accuracy.retarget(update.accuracy * 100.0);
        self.progress = update.progress;
    }

    pub fn on_tick(&mut self) {
        self.epoch.on_tick();
        self.loss.on_tick();
        self.accuracy.on_tick();
    }
}

/// Top-level application state.
pub struct App {
    pub config: Config,
    pub state: PlaygroundState,
    pub datasets: Vec<Dataset>,
    pub selected_dataset: usize,
    pub preview: Option<DatasetPreview>,
    pub session: Option<SessionInfo>,
    pub insights: Vec<InsightPresenter>,
    pub training: TrainingView,
    pub drift: Vec<DriftUpdate>,
    /// Most recent user-facing error, shown in the footer
    pub last_error: Option<String>,
    pub tick: u64,
    /// Sidebar slide position, 0.0 hidden to 1.0 fully open
    pub sidebar_slide: f32,
    /// Stepper row position from the last draw, for mouse hit testing
    pub stepper_area: Option<Rect>,
    pub should_quit: bool,

    api: ApiClient<ReqwestHttpClient>,
    http: std::sync::Arc<ReqwestHttpClient>,
    tx: mpsc::UnboundedSender<AppMessage>,
    sse_handle: Option<SseHandle>,
    ws_handle: Option<WsHandle>,
}

impl App {
    pub fn new(config: Config, tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let api = ApiClient::new(&config);
        let state = PlaygroundState::new();
        let sidebar_slide = if state.sidebar_open() { 1.0 } else { 0.0 };
        Self {
            api,
            http: std::sync::Arc::new(ReqwestHttpClient::new()),
            tx,
            config,
            state,
            datasets: Vec::new(),
            selected_dataset: 0,
            preview: None,
            session: None,
            insights: Vec::new(),
            training: TrainingView::default(),
            drift: Vec::new(),
            last_error: None,
            tick: 0,
            sidebar_slide,
            stepper_area: None,
            should_quit: false,
            sse_handle: None,
            ws_handle: None,
        }
    }

    /// Fold one async result into state.
    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DatasetsLoaded(datasets) => {
                self.state
                    .push_log(LogKind::Info, format!("Loaded {} datasets", datasets.len()));
                self.datasets = datasets;
                self.selected_dataset = 0;
                self.last_error = None;
            }
            AppMessage::DatasetsFailed(error) => self.fail("Dataset load failed", error),
            AppMessage::PreviewLoaded(preview) => {
                self.state.push_log(
                    LogKind::Success,
                    format!("Profiled dataset {}", preview.dataset_id),
                );
                self.preview = Some(preview);
            }
            AppMessage::PreviewFailed(error) => self.fail("Preview failed", error),
            AppMessage::SessionCreated(session) => self.on_session_created(session),
            AppMessage::SessionFailed(error) => self.fail("Session creation failed", error),
            AppMessage::Analysis(event) => self.on_analysis(event),
            AppMessage::TrainingConnected(handle) => {
                self.state
                    .push_log(LogKind::Success, "Training stream connected");
                self.ws_handle = Some(handle);
            }
            AppMessage::TrainingConnectFailed(error) => self.fail("Training stream failed", error),
            AppMessage::Training(event) => self.on_training(event),
        }
    }

    /// Advance every animation by one tick.
    pub fn on_tick(&mut self) {
        self.tick += 1;

        let target = if self.state.sidebar_open() { 1.0 } else { 0.0 };
        if (self.sidebar_slide - target).abs() > f32::EPSILON {
            let step = 0.2;
            if self.sidebar_slide < target {
                self.sidebar_slide = (self.sidebar_slide + step).min(target);
            } else {
                self.sidebar_slide = (self.sidebar_slide - step).max(target);
            }
        }

        for presenter in &mut self.insights {
            presenter.on_tick();
        }
        self.training.on_tick();
    }

    /// Close both live connections. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if let Some(handle) = self.sse_handle.take() {
            handle.close();
        }
        if let Some(handle) = self.ws_handle.take() {
            handle.close();
        }
    }

    fn fail(&mut self, what: &str, error: String) {
        warn!("{}: {}", what, error);
        self.state
            .push_log(LogKind::Warning, format!("{}: {}", what, error));
        self.last_error = Some(error);
    }

    fn on_session_created(&mut self, session: SessionInfo) {
        self.state.push_log(
            LogKind::Success,
            format!("Session {} started", session.session_id),
        );
        self.state.set_domain(session.dataset_id.clone());
        self.open_analysis_stream(&session.session_id);
        self.connect_training_socket(&session.session_id);
        self.session = Some(session);
    }

    fn on_analysis(&mut self, event: SseEvent) {
        match event {
            SseEvent::Message(msg) => {
                if let Some(insight) = Insight::from_stream(&msg) {
                    let delay =
                        self.insights.len() as u32 * self.config.insight_stagger_ticks;
                    self.insights.push(InsightPresenter::new(insight, delay));
                }
            }
            SseEvent::Complete => {
                self.state
                    .push_log(LogKind::Success, "Analysis stream complete");
                self.sse_handle = None;
            }
            SseEvent::Error(error) => {
                self.sse_handle = None;
                self.fail("Analysis stream error", error.to_string());
            }
        }
    }

    fn on_training(&mut self, event: WsEvent) {
        match event {
            WsEvent::Message(msg) => match msg {
                crate::stream::StreamMessage::Json(value) => {
                    if let Ok(update) = serde_json::from_value::<TrainingUpdate>(value.clone()) {
                        self.training.apply(&update);
                    } else if let Ok(drift) = serde_json::from_value::<DriftUpdate>(value.clone()) {
                        if drift.is_drifting() {
                            self.state.push_log(
                                LogKind::Warning,
                                format!("Drift detected on {}", drift.feature),
                            );
                        }
                        self.drift.push(drift);
                    }
                }
                crate::stream::StreamMessage::Raw(text) => {
                    self.state.push_log(LogKind::Info, text);
                }
            },
            WsEvent::Closed => {
                self.ws_handle = None;
                self.state
                    .push_log(LogKind::Info, "Training stream closed");
                self.state.complete_step(
                    Stage::ALL
                        .iter()
                        .position(|s| *s == Stage::Training)
                        .unwrap_or(0),
                );
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InsightKind;
    use crate::stream::StreamMessage;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Config::default(), tx)
    }

    #[tokio::test]
    async fn test_datasets_loaded_logs_and_stores() {
        let mut app = app();
        app.update(AppMessage::DatasetsLoaded(vec![Dataset {
            id: "iris".to_string(),
            name: "Iris".to_string(),
            rows: 150,
            columns: 5,
            description: None,
        }]));
        assert_eq!(app.datasets.len(), 1);
        assert_eq!(app.state.log().len(), 1);
        assert_eq!(app.state.log()[0].kind, LogKind::Info);
    }

    #[tokio::test]
    async fn test_analysis_messages_become_staggered_insights() {
        let mut app = app();
        app.update(AppMessage::Analysis(SseEvent::Message(
            StreamMessage::decode(r#"{"type":"info","text":"first"}"#),
        )));
        app.update(AppMessage::Analysis(SseEvent::Message(
            StreamMessage::decode(r#"{"type":"warning","text":"second"}"#),
        )));

        assert_eq!(app.insights.len(), 2);
        assert_eq!(app.insights[0].kind(), InsightKind::Info);
        assert_eq!(app.insights[1].kind(), InsightKind::Warning);

        // The first insight starts immediately, the second is still delayed
        // after the first has begun revealing.
        app.on_tick();
        app.on_tick();
        assert!(app.insights[0].visible().is_some());
        assert_eq!(app.insights[1].visible(), None);
    }

    #[tokio::test]
    async fn test_raw_analysis_payload_becomes_info_insight() {
        let mut app = app();
        app.update(AppMessage::Analysis(SseEvent::Message(
            StreamMessage::decode("not json"),
        )));
        assert_eq!(app.insights.len(), 1);
        assert_eq!(app.insights[0].kind(), InsightKind::Info);
    }

    #[tokio::test]
    async fn test_training_update_retargets_counters() {
        let mut app = app();
        app.update(AppMessage::Training(WsEvent::Message(
            StreamMessage::decode(r#"{"epoch":5,"loss":0.32,"accuracy":0.91,"progress":0.5}"#),
        )));
        assert_eq!(app.training.epoch.target(), 5.0);
        assert!((app.training.accuracy.target() - 91.0).abs() < 1e-9);
        assert!((app.training.progress - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_drifting_feature_logs_warning() {
        let mut app = app();
        app.update(AppMessage::Training(WsEvent::Message(
            StreamMessage::decode(r#"{"feature":"age","score":0.4,"threshold":0.25}"#),
        )));
        assert_eq!(app.drift.len(), 1);
        assert!(app
            .state
            .log()
            .iter()
            .any(|e| e.kind == LogKind::Warning && e.message.contains("age")));
    }

    #[tokio::test]
    async fn test_training_close_completes_training_stage() {
        let mut app = app();
        app.update(AppMessage::Training(WsEvent::Closed));
        let training_idx = Stage::ALL
            .iter()
            .position(|s| *s == Stage::Training)
            .unwrap();
        assert!(app.state.is_completed(training_idx));
    }

    #[tokio::test]
    async fn test_sidebar_slide_animates_toward_target() {
        let mut app = app();
        assert!((app.sidebar_slide - 1.0).abs() < f32::EPSILON);

        app.state.toggle_sidebar();
        for _ in 0..3 {
            app.on_tick();
        }
        assert!(app.sidebar_slide < 1.0 && app.sidebar_slide > 0.0);

        for _ in 0..10 {
            app.on_tick();
        }
        assert!((app.sidebar_slide - 0.0).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_failure_paths_log_and_keep_error() {
        let mut app = app();
        app.update(AppMessage::SessionFailed(
            "failed to create session (status 503)".to_string(),
        ));
        assert!(app.last_error.is_some());
        assert!(app
            .state
            .log()
            .iter()
            .any(|e| e.kind == LogKind::Warning));
    }

    #[tokio::test]
    async fn test_disconnect_twice_is_safe() {
        let mut app = app();
        app.disconnect();
        app.disconnect();
    }
}
