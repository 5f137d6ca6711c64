//! Shared playground state.
//!
//! One injectable container owns everything the chrome reads: current step,
//! completed-step flags, the session log, sidebar visibility, theme mode,
//! and the active domain. Presentation code reads through accessors and
//! mutates only through the named actions here.

use crate::models::{LogEntry, LogKind};

/// The fixed, ordered sequence of playground stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Datasets,
    Profiling,
    Patterns,
    Features,
    Training,
    Evaluation,
    Monitoring,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Datasets,
        Stage::Profiling,
        Stage::Patterns,
        Stage::Features,
        Stage::Training,
        Stage::Evaluation,
        Stage::Monitoring,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stepper label.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Datasets => "Datasets",
            Stage::Profiling => "Profiling",
            Stage::Patterns => "Patterns",
            Stage::Features => "Features",
            Stage::Training => "Training",
            Stage::Evaluation => "Evaluation",
            Stage::Monitoring => "Monitoring",
        }
    }

    /// One-based position shown in the stepper.
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }
}

/// UI color scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Externally-owned state consumed by the stepper, log panel, and stage
/// views.
#[derive(Debug)]
pub struct PlaygroundState {
    current_step: usize,
    completed: [bool; Stage::COUNT],
    log: Vec<LogEntry>,
    sidebar_open: bool,
    theme: ThemeMode,
    domain: Option<String>,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            current_step: 0,
            completed: [false; Stage::COUNT],
            log: Vec::new(),
            sidebar_open: true,
            theme: ThemeMode::Dark,
            domain: None,
        }
    }
}

impl PlaygroundState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn stage(&self) -> Stage {
        Stage::ALL[self.current_step]
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.get(step).copied().unwrap_or(false)
    }

    /// A step can be selected if it is already completed or not ahead of
    /// the current step.
    pub fn is_selectable(&self, step: usize) -> bool {
        step < Stage::COUNT && (self.is_completed(step) || step <= self.current_step)
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Move to `step` if it is selectable. Selecting a locked future step
    /// is a no-op. Returns whether the current step changed.
    pub fn set_step(&mut self, step: usize) -> bool {
        if !self.is_selectable(step) || step == self.current_step {
            return false;
        }
        self.current_step = step;
        true
    }

    /// Mark a step completed. Completion is permanent.
    pub fn complete_step(&mut self, step: usize) {
        if let Some(flag) = self.completed.get_mut(step) {
            *flag = true;
        }
    }

    /// Complete the current step and advance to the next one, if any.
    pub fn advance(&mut self) -> bool {
        self.complete_step(self.current_step);
        if self.current_step + 1 < Stage::COUNT {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = Some(domain.into());
    }

    /// Append an entry to the session log. Entries are never mutated or
    /// removed.
    pub fn push_log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.log.push(LogEntry::new(kind, message));
    }
}
