//! Insight card rendering.
//!
//! Draws one AI insight with its category style and the partially revealed
//! text, plus a blinking cursor while the reveal is in flight. Cards whose
//! start delay has not elapsed render nothing.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;
use crate::insight::InsightPresenter;

/// Height of one rendered insight card, including its border.
pub const CARD_HEIGHT: u16 = 4;

/// Render one insight card into `area`.
pub fn render_insight_card(
    frame: &mut Frame,
    area: Rect,
    presenter: &InsightPresenter,
    theme: &Theme,
    tick: u64,
) {
    let Some(text) = presenter.visible() else {
        return;
    };

    let style = theme.insight_style(presenter.kind());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border))
        .style(Style::default().bg(style.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(format!("{} ", style.icon), Style::default().fg(style.fg)),
        Span::styled(text.to_string(), Style::default().fg(theme.text)),
    ];
    if presenter.show_cursor(tick) {
        spans.push(Span::styled("▌", Style::default().fg(style.fg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
