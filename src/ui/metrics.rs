//! Training metrics panel.
//!
//! Animated counters for epoch, loss, and accuracy plus a progress gauge,
//! fed by live telemetry from the session socket.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::app::TrainingView;

/// Render the training metrics panel.
pub fn render_metrics(frame: &mut Frame, area: Rect, training: &TrainingView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" Training ", Style::default().fg(theme.text)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[0]);

    render_stat(frame, columns[0], "epoch", &training.epoch.format(), theme);
    render_stat(frame, columns[1], "loss", &training.loss.format(), theme);
    render_stat(
        frame,
        columns[2],
        "accuracy",
        &training.accuracy.format(),
        theme,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.progress))
        .ratio(training.progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", training.progress.clamp(0.0, 1.0) * 100.0));
    frame.render_widget(gauge, chunks[1]);
}

fn render_stat(frame: &mut Frame, area: Rect, label: &str, value: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(theme.dim))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
