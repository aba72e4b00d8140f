//! Query input bar.

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Query;

    let text = if focused {
        format!("{}_", app.query_input)
    } else if app.query_input.is_empty() {
        "(popular)".to_string()
    } else {
        app.query_input.clone()
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let bar = Paragraph::new(text)
        .style(if focused || !app.query_input.is_empty() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Search"),
        );

    f.render_widget(bar, area);
}
