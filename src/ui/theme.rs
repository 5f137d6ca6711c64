//! Color themes for the playground UI.
//!
//! Two palettes, selected by the state-owned [`ThemeMode`]. Insight and log
//! styling are fixed lookups on the active theme.

use ratatui::style::Color;

use crate::models::{InsightKind, LogKind};
use crate::state::ThemeMode;

/// Visual treatment of an insight card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightStyle {
    pub icon: &'static str,
    pub bg: Color,
    pub border: Color,
    pub fg: Color,
}

/// One UI color palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub panel_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    /// Stepper connector fill between completed steps
    pub progress: Color,
}

const DARK: Theme = Theme {
    bg: Color::Rgb(12, 14, 22),
    panel_bg: Color::Rgb(20, 23, 34),
    border: Color::DarkGray,
    text: Color::Rgb(224, 226, 235),
    dim: Color::DarkGray,
    accent: Color::Rgb(125, 170, 255),
    success: Color::Rgb(4, 181, 117),
    warning: Color::Rgb(235, 180, 60),
    error: Color::Red,
    info: Color::Rgb(90, 160, 230),
    progress: Color::Rgb(4, 181, 117),
};

const LIGHT: Theme = Theme {
    bg: Color::Rgb(246, 247, 250),
    panel_bg: Color::Rgb(235, 237, 243),
    border: Color::Gray,
    text: Color::Rgb(28, 30, 38),
    dim: Color::Gray,
    accent: Color::Rgb(40, 90, 200),
    success: Color::Rgb(20, 140, 90),
    warning: Color::Rgb(180, 120, 20),
    error: Color::Rgb(190, 40, 40),
    info: Color::Rgb(40, 110, 190),
    progress: Color::Rgb(20, 140, 90),
};

impl Theme {
    /// The palette for a theme mode.
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    /// Fixed visual mapping for insight categories.
    pub fn insight_style(&self, kind: InsightKind) -> InsightStyle {
        match kind {
            InsightKind::Info => InsightStyle {
                icon: "ℹ",
                bg: self.panel_bg,
                border: self.info,
                fg: self.info,
            },
            InsightKind::Warning => InsightStyle {
                icon: "⚠",
                bg: self.panel_bg,
                border: self.warning,
                fg: self.warning,
            },
            InsightKind::Success => InsightStyle {
                icon: "✓",
                bg: self.panel_bg,
                border: self.success,
                fg: self.success,
            },
        }
    }

    /// Color used for a log entry category.
    pub fn log_color(&self, kind: LogKind) -> Color {
        match kind {
            LogKind::Info => self.info,
            LogKind::Success => self.success,
            LogKind::Warning => self.warning,
            LogKind::Action => self.accent,
        }
    }
}

/// Icon shown next to a log entry.
pub fn log_icon(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => "ℹ",
        LogKind::Success => "✓",
        LogKind::Warning => "⚠",
        LogKind::Action => "▶",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup_by_mode() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        let light = Theme::for_mode(ThemeMode::Light);
        assert_ne!(dark.bg, light.bg);
    }

    #[test]
    fn test_insight_styles_are_fixed_per_kind() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(theme.insight_style(InsightKind::Info).icon, "ℹ");
        assert_eq!(theme.insight_style(InsightKind::Warning).icon, "⚠");
        assert_eq!(theme.insight_style(InsightKind::Success).icon, "✓");
        assert_eq!(
            theme.insight_style(InsightKind::Warning),
            theme.insight_style(InsightKind::Warning)
        );
    }

    #[test]
    fn test_log_icons() {
        assert_eq!(log_icon(LogKind::Success), "✓");
        assert_eq!(log_icon(LogKind::Action), "▶");
    }
}
