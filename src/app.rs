//! Application state and refresh orchestration.
//!
//! [`App`] owns the item list and everything else the renderer reads. All
//! mutation happens on the UI loop: background tasks (the feed fetch,
//! thumbnail loads) communicate exclusively through [`AppEvent`]s sent over
//! the mpsc channel the loop drains, so completions are marshaled onto the
//! single-threaded UI context no matter which worker thread they finish on.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::widgets::ListState;
use thiserror::Error;
use tokio::sync::mpsc;
use url::Url;

use crate::feed::{fetch_feed, FeedItem, FetchError};
use crate::thumbs::ThumbnailCache;

/// How long a transient status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Upper bound on the query input, matching the feed backend's tolerance.
pub const MAX_QUERY_LENGTH: usize = 256;

/// Current view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Search bar + item list.
    Browse,
    /// Full-screen single item.
    Detail,
}

/// Which widget receives keystrokes in Browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    List,
}

/// Events delivered from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A feed fetch finished. `generation` identifies which `refresh` call
    /// this belongs to; stale generations are discarded.
    RefreshCompleted {
        generation: u64,
        result: Result<Vec<FeedItem>, FetchError>,
    },
    /// A thumbnail resolved (or failed to).
    ThumbnailLoaded {
        url: Url,
        result: Result<u64, String>,
    },
}

/// A row index the renderer reported that the item list doesn't have.
///
/// Cannot happen while the renderer's row count equals `items.len()`; if it
/// does, it's a programming error and is surfaced loudly rather than
/// answered with the wrong item.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("selected row {index} out of range ({len} items)")]
pub struct SelectionError {
    pub index: usize,
    pub len: usize,
}

pub struct App {
    /// The rendered list. Replaced wholesale on every successful fetch,
    /// never partially updated; row count shown is always `items.len()`.
    pub items: Vec<FeedItem>,
    /// Last-submitted search text (raw, untrimmed).
    pub pending_query: Option<String>,
    /// Live contents of the query input bar.
    pub query_input: String,

    pub view: View,
    pub focus: Focus,
    pub list_state: ListState,
    /// Item shown in Detail view.
    pub detail_index: Option<usize>,

    /// True while a fetch is outstanding; drives the status-bar spinner.
    pub loading: bool,
    pub spinner_frame: usize,
    pub status_message: Option<(String, Instant)>,
    pub needs_redraw: bool,

    /// Identifies the most recent `refresh` call. Completions carrying an
    /// older generation lost the race and are dropped, so a slow stale
    /// response can never overwrite newer items.
    pub refresh_generation: u64,

    pub thumbs: ThumbnailCache,
    pub client: reqwest::Client,
    pub feed_url: String,
}

impl App {
    pub fn new(feed_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("artfeed/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()?;

        Ok(Self {
            items: Vec::new(),
            pending_query: None,
            query_input: String::new(),
            view: View::Browse,
            focus: Focus::List,
            list_state: ListState::default(),
            detail_index: None,
            loading: false,
            spinner_frame: 0,
            status_message: None,
            needs_redraw: true,
            refresh_generation: 0,
            thumbs: ThumbnailCache::new(),
            client,
            feed_url,
        })
    }

    // -- refresh -------------------------------------------------------------

    /// Submit the current query input: start the spinner and spawn the
    /// single asynchronous step of the pipeline. The completion comes back
    /// as [`AppEvent::RefreshCompleted`] and is applied by
    /// [`apply_refresh`](Self::apply_refresh).
    pub fn start_refresh(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        self.pending_query = Some(self.query_input.clone());
        self.loading = true;
        self.refresh_generation = self.refresh_generation.wrapping_add(1);
        let generation = self.refresh_generation;

        let client = self.client.clone();
        let feed_url = self.feed_url.clone();
        let query = self.query_input.clone();
        let tx = event_tx.clone();

        tracing::debug!(generation, query = %query, "Starting feed refresh");

        tokio::spawn(async move {
            let result = fetch_feed(&client, &feed_url, Some(&query)).await;
            if tx
                .send(AppEvent::RefreshCompleted { generation, result })
                .await
                .is_err()
            {
                tracing::warn!(generation, "Refresh result dropped (receiver gone)");
            }
        });
    }

    /// Apply a refresh completion.
    ///
    /// Success replaces the list and scrolls to the top; failure is logged
    /// and reported in the status bar while the previous items stay on
    /// screen untouched. Either way the spinner stops — unless the
    /// completion is stale, in which case nothing at all changes.
    pub fn apply_refresh(&mut self, generation: u64, result: Result<Vec<FeedItem>, FetchError>) {
        if generation != self.refresh_generation {
            tracing::debug!(
                generation,
                current = self.refresh_generation,
                "Discarding stale refresh completion"
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.detail_index = None;
                self.scroll_to_top();
                self.set_status(format!("{} items", count));
                tracing::info!(items = count, "Feed refreshed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Feed refresh failed");
                self.set_status(format!("Fetch failed: {}", e));
            }
        }
    }

    fn scroll_to_top(&mut self) {
        *self.list_state.offset_mut() = 0;
        self.list_state
            .select(if self.items.is_empty() { None } else { Some(0) });
    }

    // -- selection -----------------------------------------------------------

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Hand off the item at `index` (for the detail view). No mutation.
    pub fn item_at(&self, index: usize) -> Result<&FeedItem, SelectionError> {
        self.items.get(index).ok_or(SelectionError {
            index,
            len: self.items.len(),
        })
    }

    /// Open the detail view for the currently selected row, if any.
    pub fn open_detail(&mut self) -> Result<(), SelectionError> {
        let Some(index) = self.selected() else {
            return Ok(());
        };
        self.item_at(index)?;
        self.detail_index = Some(index);
        self.view = View::Detail;
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.detail_index = None;
        self.view = View::Browse;
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }

    // -- status bar ----------------------------------------------------------

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Drop an expired status message. Returns true when one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        match &self.status_message {
            Some((_, since)) if since.elapsed() >= STATUS_TTL => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }
}
