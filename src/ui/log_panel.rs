//! Session log sidebar.
//!
//! Append-only view of the session log with a kind-specific icon and color
//! and a local time-of-day label per entry. The panel slides in and out:
//! the app animates a 0..1 fraction each tick and the rendered width
//! follows it.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{log_icon, Theme};
use crate::state::PlaygroundState;

/// Full sidebar width when fully open.
pub const SIDEBAR_WIDTH: u16 = 34;

/// Width of the sidebar at a given slide fraction.
pub fn sidebar_width(slide: f32) -> u16 {
    (f32::from(SIDEBAR_WIDTH) * slide.clamp(0.0, 1.0)).round() as u16
}

/// Render the log panel into `area`. Skipped entirely while fully hidden.
pub fn render_log_panel(frame: &mut Frame, area: Rect, state: &PlaygroundState, theme: &Theme) {
    if area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" Session Log ", Style::default().fg(theme.text)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.log().is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No session activity yet",
            Style::default().fg(theme.dim),
        )));
        frame.render_widget(placeholder, inner);
        return;
    }

    let capacity = inner.height as usize;
    let entries = state.log();
    let skip = entries.len().saturating_sub(capacity);

    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = theme.log_color(entry.kind);
            let prefix = format!("{} {} ", log_icon(entry.kind), entry.time_label());
            let max_width = (inner.width as usize).saturating_sub(prefix.width());
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::styled(
                    truncate_to_width(&entry.message, max_width),
                    Style::default().fg(theme.text),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncate a message to a display-cell width, appending an ellipsis when
/// anything was cut.
fn truncate_to_width(message: &str, max_width: usize) -> String {
    if message.width() <= max_width {
        return message.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in message.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
