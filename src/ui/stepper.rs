//! Stage stepper widget.
//!
//! Renders the seven stages in a single row: completed steps get a
//! checkmark in the success color, the current step a pulsing highlight,
//! locked future steps are muted. The connector between two consecutive
//! completed steps renders filled.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;
use crate::state::{PlaygroundState, Stage};

/// Render the stepper row.
pub fn render_stepper(
    frame: &mut Frame,
    area: Rect,
    state: &PlaygroundState,
    theme: &Theme,
    tick: u64,
) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, stage) in Stage::ALL.iter().enumerate() {
        if idx > 0 {
            // Connector fills once both neighbors are complete.
            let filled = state.is_completed(idx - 1) && state.is_completed(idx);
            let style = if filled {
                Style::default().fg(theme.progress)
            } else {
                Style::default().fg(theme.dim)
            };
            spans.push(Span::styled("──", style));
        }

        let is_current = idx == state.current_step();
        let completed = state.is_completed(idx);

        let marker = if completed {
            format!("✓ {}", stage.label())
        } else {
            format!("{} {}", stage.number(), stage.label())
        };

        let style = if is_current {
            // Pulse by alternating bold/plain on the shared tick.
            let pulse = (tick / 10) % 2 == 0;
            let base = Style::default().fg(theme.accent);
            if pulse {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            }
        } else if completed {
            Style::default().fg(theme.success)
        } else if state.is_selectable(idx) {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.dim)
        };

        spans.push(Span::styled(format!(" {} ", marker), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Map a click position inside the stepper row to a step index.
///
/// The row is divided into equal-width slots, one per stage; this mirrors
/// how the row is laid out at typical terminal widths.
pub fn stepper_hit(area: Rect, column: u16, row: u16) -> Option<usize> {
    if row < area.y || row >= area.y + area.height {
        return None;
    }
    if column < area.x || column >= area.x + area.width {
        return None;
    }
    let slot = (area.width / Stage::COUNT as u16).max(1);
    let idx = ((column - area.x) / slot) as usize;
    Some(idx.min(Stage::COUNT - 1))
}
