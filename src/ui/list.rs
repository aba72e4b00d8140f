//! Feed item list widget.
//!
//! Each row renders its [`RowVariant`]: image rows carry a thumbnail marker
//! styled by the loader's state, basic rows don't. Every item gets exactly
//! one row; the count shown is always `items.len()`.

use crate::app::{App, Focus};
use crate::row::{self, RowVariant};
use crate::text::{strip_control_chars, truncate_to_width};
use crate::thumbs::ThumbState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Markers for the image slot of a row.
const MARKER_LOADED: &str = "▣ ";
const MARKER_PENDING: &str = "▢ ";
const MARKER_BASIC: &str = "  ";

pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focus == Focus::List;
    let text_width = area.width.saturating_sub(4) as usize;

    let rows: Vec<ListItem> = if app.items.is_empty() {
        vec![ListItem::new(if app.loading {
            "Loading feed..."
        } else {
            "No items"
        })]
    } else {
        app.items
            .iter()
            .map(|item| {
                let (marker, marker_style, title, subtitle) = match row::row_variant(item) {
                    RowVariant::WithImage {
                        title,
                        subtitle,
                        thumbnail,
                    } => {
                        let state = thumbnail.and_then(|u| app.thumbs.state(u));
                        let (marker, color) = match state {
                            Some(ThumbState::Loaded { .. }) => (MARKER_LOADED, Color::Cyan),
                            Some(ThumbState::Failed) => (MARKER_PENDING, Color::Red),
                            _ => (MARKER_PENDING, Color::DarkGray),
                        };
                        (marker, Style::default().fg(color), title, subtitle)
                    }
                    RowVariant::Basic { title, subtitle } => {
                        (MARKER_BASIC, Style::default(), title, subtitle)
                    }
                };

                let title = strip_control_chars(title);
                let title_line = Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::styled(
                        truncate_to_width(&title, text_width).into_owned(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]);

                let subtitle = strip_control_chars(&subtitle);
                let subtitle_line = Line::from(vec![
                    Span::raw(MARKER_BASIC),
                    Span::styled(
                        truncate_to_width(&subtitle, text_width).into_owned(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);

                ListItem::new(vec![title_line, subtitle_line])
            })
            .collect()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let title = match app.pending_query.as_deref() {
        Some(q) if !q.is_empty() => format!(" Results — {} ", q),
        _ => " Popular ".to_string(),
    };

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}
