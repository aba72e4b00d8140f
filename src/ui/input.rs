//! Keyboard input handling.
//!
//! Dispatch depends on the current view and, within Browse, on which widget
//! has focus. Submitting the query bar dismisses its focus and starts a
//! refresh, mirroring the original screen's keyboard dismissal on submit.

use crate::app::{App, AppEvent, Focus, View, MAX_QUERY_LENGTH};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.view {
        View::Detail => handle_detail_input(app, code),
        View::Browse => match app.focus {
            Focus::Query => handle_query_input(app, code, event_tx),
            Focus::List => handle_list_input(app, code, event_tx),
        },
    }
}

fn handle_detail_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.close_detail(),
        _ => {}
    }
    Action::Continue
}

fn handle_query_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Enter => {
            // Submit: drop input focus, then refresh with the field's text.
            app.focus = Focus::List;
            app.start_refresh(event_tx);
        }
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Backspace => {
            app.query_input.pop();
        }
        KeyCode::Char(c) => {
            if app.query_input.chars().count() < MAX_QUERY_LENGTH {
                app.query_input.push(c);
            }
        }
        _ => {}
    }
    Action::Continue
}

fn handle_list_input(app: &mut App, code: KeyCode, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    match code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('/') | KeyCode::Char('e') => app.focus = Focus::Query,
        KeyCode::Char('r') => app.start_refresh(event_tx),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => {
            if let Err(e) = app.open_detail() {
                // Renderer and list disagree on row count; should be
                // impossible, so make it loud instead of showing wrong data.
                tracing::error!(error = %e, "Selection handoff rejected");
                app.set_status(format!("Internal error: {}", e));
            }
        }
        _ => {}
    }
    Action::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedItem;

    fn app_with_items(n: usize) -> App {
        let mut a = App::new("http://feed.invalid/rss.xml".to_string()).unwrap();
        a.items = (0..n)
            .map(|i| FeedItem {
                title: Some(format!("item-{}", i)),
                ..FeedItem::default()
            })
            .collect();
        a
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        let (tx, _rx) = mpsc::channel(4);
        handle_input(app, code, KeyModifiers::NONE, &tx)
    }

    #[tokio::test]
    async fn slash_focuses_query_and_esc_leaves_it() {
        let mut a = app_with_items(1);
        press(&mut a, KeyCode::Char('/'));
        assert_eq!(a.focus, Focus::Query);
        press(&mut a, KeyCode::Esc);
        assert_eq!(a.focus, Focus::List);
    }

    #[tokio::test]
    async fn typing_edits_the_query_field() {
        let mut a = app_with_items(0);
        a.focus = Focus::Query;
        for c in "cats".chars() {
            press(&mut a, KeyCode::Char(c));
        }
        press(&mut a, KeyCode::Backspace);
        assert_eq!(a.query_input, "cat");
    }

    #[tokio::test]
    async fn enter_submits_and_dismisses_input_focus() {
        let mut a = app_with_items(0);
        a.focus = Focus::Query;
        a.query_input = "cats".to_string();
        press(&mut a, KeyCode::Enter);

        assert_eq!(a.focus, Focus::List);
        assert!(a.loading, "refresh started");
        assert_eq!(a.pending_query.as_deref(), Some("cats"));
    }

    #[tokio::test]
    async fn enter_on_a_row_opens_detail() {
        let mut a = app_with_items(2);
        a.select_first();
        press(&mut a, KeyCode::Enter);
        assert_eq!(a.view, View::Detail);
        assert_eq!(a.detail_index, Some(0));
    }

    #[tokio::test]
    async fn detail_esc_returns_to_browse() {
        let mut a = app_with_items(1);
        a.select_first();
        a.open_detail().unwrap();
        press(&mut a, KeyCode::Esc);
        assert_eq!(a.view, View::Browse);
    }

    #[tokio::test]
    async fn q_quits_from_list_but_types_in_query() {
        let mut a = app_with_items(0);
        assert!(matches!(press(&mut a, KeyCode::Char('q')), Action::Quit));

        a.focus = Focus::Query;
        assert!(matches!(
            press(&mut a, KeyCode::Char('q')),
            Action::Continue
        ));
        assert_eq!(a.query_input, "q");
    }
}
