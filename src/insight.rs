//! Insight presentation.
//!
//! Wraps the [`Typewriter`] with a start delay so a batch of insights
//! reveals staggered rather than all at once. Nothing is rendered before
//! the delay elapses.

use crate::models::{Insight, InsightKind};
use crate::reveal::Typewriter;

/// Reveal state for one insight card.
#[derive(Debug, Clone)]
pub struct InsightPresenter {
    insight: Insight,
    delay: u32,
    started: bool,
    typewriter: Typewriter,
}

impl InsightPresenter {
    /// Present `insight`, starting the reveal `delay` ticks from now.
    pub fn new(insight: Insight, delay: u32) -> Self {
        Self {
            insight,
            delay,
            started: false,
            typewriter: Typewriter::new(),
        }
    }

    /// Advance by one tick. Returns `true` exactly once, when the full text
    /// becomes visible.
    pub fn on_tick(&mut self) -> bool {
        if !self.started {
            if self.delay > 0 {
                self.delay -= 1;
                return false;
            }
            self.started = true;
            self.typewriter.set_text(self.insight.text.clone());
            return false;
        }
        self.typewriter.on_tick()
    }

    /// The revealed text so far, or `None` while the start delay is still
    /// pending (callers render nothing in that case).
    pub fn visible(&self) -> Option<&str> {
        self.started.then(|| self.typewriter.visible())
    }

    pub fn kind(&self) -> InsightKind {
        self.insight.kind
    }

    pub fn is_done(&self) -> bool {
        self.started && self.typewriter.is_done()
    }

    pub fn show_cursor(&self, tick: u64) -> bool {
        self.started && self.typewriter.show_cursor(tick)
    }
}
