//! Full-screen view of one selected item.

use crate::app::App;
use crate::row;
use crate::text::strip_control_chars;
use crate::thumbs::ThumbState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(item) = app.detail_index.and_then(|i| app.items.get(i)) else {
        f.render_widget(
            Paragraph::new("Nothing selected").block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            strip_control_chars(row::title_text(item)).into_owned(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let mut field = |label: &'static str, value: Option<&str>| {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(Color::Cyan)),
                Span::raw(strip_control_chars(v).into_owned()),
            ]));
            lines.push(Line::default());
        }
    };

    field("Text: ", item.media_text.as_deref());
    field("Description: ", item.media_description.as_deref());
    field("Media title: ", item.media_title.as_deref());

    if let Some(url) = row::display_thumbnail(item).and_then(|t| t.url.as_ref()) {
        let state = match app.thumbs.state(url) {
            Some(ThumbState::Loaded { bytes }) => format!(" ({} bytes)", bytes),
            Some(ThumbState::Failed) => " (unavailable)".to_string(),
            _ => " (loading)".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("Thumbnail: ", Style::default().fg(Color::Cyan)),
            Span::raw(url.to_string()),
            Span::styled(state, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Item "));

    f.render_widget(detail, area);
}
