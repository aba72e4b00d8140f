//! Status bar: loading spinner, transient messages, key hints.

use crate::app::{App, Focus, View};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::borrow::Cow;

use super::loop_runner::SPINNER_FRAMES;

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // The progress indicator wins over everything else while a fetch is out.
    let text: Cow<'_, str> = if app.loading {
        Cow::Owned(format!(
            "{} Loading",
            SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
        ))
    } else if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_str())
    } else {
        match (app.view, app.focus) {
            (View::Detail, _) => Cow::Borrowed("[Esc/b]back [q]uit"),
            (View::Browse, Focus::Query) => Cow::Borrowed("Type query | ENTER submit | ESC cancel"),
            (View::Browse, Focus::List) => {
                Cow::Borrowed("[/]search [r]efresh [j/k]move [Enter]detail [q]uit")
            }
        }
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(paragraph, area);
}
