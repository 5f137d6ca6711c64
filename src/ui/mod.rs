//! UI rendering for the playground.
//!
//! Layout, top to bottom: header, stage stepper, body (stage view plus the
//! sliding session log sidebar), footer with keybind hints.

mod insight_card;
mod log_panel;
mod metrics;
mod stepper;
pub mod theme;

pub use insight_card::{render_insight_card, CARD_HEIGHT};
pub use log_panel::{render_log_panel, sidebar_width, SIDEBAR_WIDTH};
pub use metrics::render_metrics;
pub use stepper::{render_stepper, stepper_hit};
pub use theme::{InsightStyle, Theme};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::Stage;

/// Render one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = Theme::for_mode(app.state.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // stepper
            Constraint::Min(0),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, rows[0], app, theme);

    app.stepper_area = Some(rows[1]);
    render_stepper(frame, rows[1], &app.state, theme, app.tick);

    let sidebar = sidebar_width(app.sidebar_slide).min(rows[2].width);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(sidebar)])
        .split(rows[2]);

    render_stage(frame, body[0], app, theme);
    render_log_panel(frame, body[1], &app.state, theme);

    render_footer(frame, rows[3], app, theme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " mlplay ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(domain) = app.state.domain() {
        spans.push(Span::styled(
            format!("· {} ", domain),
            Style::default().fg(theme.dim),
        ));
    }
    if let Some(session) = &app.session {
        spans.push(Span::styled(
            format!("· session {} ", session.session_id),
            Style::default().fg(theme.dim),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match &app.last_error {
        Some(error) => Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(theme.error),
        )),
        None => Line::from(Span::styled(
            " enter confirm · ←/→ stage · ↑/↓ select · s log · t theme · q quit ",
            Style::default().fg(theme.dim),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_stage(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    match app.state.stage() {
        Stage::Datasets => render_datasets(frame, area, app, theme),
        Stage::Profiling => render_profile(frame, area, app, theme),
        Stage::Patterns => render_patterns(frame, area, app, theme),
        Stage::Features => render_features(frame, area, app, theme),
        Stage::Training | Stage::Evaluation => render_metrics(frame, area, &app.training, theme),
        Stage::Monitoring => render_monitoring(frame, area, app, theme),
    }
}

fn stage_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.text),
        ))
}

fn render_datasets(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = stage_block("Datasets", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.datasets.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading datasets...",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .datasets
        .iter()
        .enumerate()
        .map(|(i, ds)| {
            let selected = i == app.selected_dataset;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(ds.name.clone(), style),
                Span::styled(
                    format!("  {} rows × {} cols", ds.rows, ds.columns),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_profile(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = stage_block("Profile", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(preview) = &app.preview else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Profiling dataset...",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{:<18} {:<10} {:>8} {:>9}", "column", "dtype", "missing", "distinct"),
        Style::default().fg(theme.dim),
    ))];
    for column in &preview.columns {
        let missing_style = if column.missing > 0.2 {
            Style::default().fg(theme.warning)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18} ", column.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:<10} ", column.dtype),
                Style::default().fg(theme.accent),
            ),
            Span::styled(format!("{:>7.1}% ", column.missing * 100.0), missing_style),
            Span::styled(
                match column.distinct {
                    Some(d) => format!("{:>9}", d),
                    None => format!("{:>9}", "-"),
                },
                Style::default().fg(theme.dim),
            ),
        ]));
    }

    if !preview.sample.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "sample rows",
            Style::default().fg(theme.dim),
        )));
        for row in preview.sample.iter().take(5) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row.join(" · ")),
                Style::default().fg(theme.text),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_patterns(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = stage_block("Patterns", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.insights.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Waiting for analysis...",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let mut y = inner.y;
    for presenter in &app.insights {
        if y + CARD_HEIGHT > inner.y + inner.height {
            break;
        }
        let card = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
        render_insight_card(frame, card, presenter, theme, app.tick);
        // Cards still waiting on their start delay hold no space yet.
        if presenter.visible().is_some() {
            y += CARD_HEIGHT;
        }
    }
}

fn render_features(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = stage_block("Features", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(preview) = &app.preview else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No profile available",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    };

    let lines: Vec<Line> = preview
        .columns
        .iter()
        .map(|column| {
            // Columns with heavy missingness are excluded from the
            // candidate feature set.
            let eligible = column.missing <= 0.5;
            let (marker, style) = if eligible {
                ("✓", Style::default().fg(theme.success))
            } else {
                ("✗", Style::default().fg(theme.dim))
            };
            Line::from(vec![
                Span::styled(format!("{} ", marker), style),
                Span::styled(column.name.clone(), Style::default().fg(theme.text)),
                Span::styled(
                    format!("  ({})", column.dtype),
                    Style::default().fg(theme.dim),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_monitoring(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = stage_block("Drift Monitoring", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.drift.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No drift samples received",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .drift
        .iter()
        .map(|drift| {
            let style = if drift.is_drifting() {
                Style::default().fg(theme.warning)
            } else {
                Style::default().fg(theme.success)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<16} ", drift.feature),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:.3} / {:.3} ", drift.score, drift.threshold),
                    style,
                ),
                Span::styled(
                    if drift.is_drifting() { "drifting" } else { "stable" },
                    style,
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
