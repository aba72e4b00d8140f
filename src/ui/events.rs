//! Background task event processing.
//!
//! The only writer of UI-visible state is the event loop calling in here;
//! background tasks just produce `AppEvent`s.

use crate::app::{App, AppEvent};
use crate::row;
use crate::thumbs;
use tokio::sync::mpsc;
use url::Url;

pub(super) fn handle_app_event(app: &mut App, event: AppEvent, event_tx: &mpsc::Sender<AppEvent>) {
    match event {
        AppEvent::RefreshCompleted { generation, result } => {
            let was_current = generation == app.refresh_generation;
            app.apply_refresh(generation, result);
            if was_current && !app.items.is_empty() {
                prefetch_thumbnails(app, event_tx);
            }
        }
        AppEvent::ThumbnailLoaded { url, result } => {
            app.thumbs.record(url, result);
        }
    }
}

/// Kick off loads for every display thumbnail the cache hasn't seen yet.
fn prefetch_thumbnails(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let mut pending: Vec<Url> = Vec::new();
    for item in &app.items {
        if let Some(url) = row::display_thumbnail(item).and_then(|t| t.url.as_ref()) {
            if app.thumbs.begin(url) {
                pending.push(url.clone());
            }
        }
    }
    if !pending.is_empty() {
        tracing::debug!(count = pending.len(), "Prefetching thumbnails");
        thumbs::spawn_prefetch(app.client.clone(), pending, event_tx.clone());
    }
}
