//! Asynchronous thumbnail loading.
//!
//! A terminal can't blit the image itself, so the "image slot" of a row is
//! a load-state marker backed by this module: thumbnails are fetched in the
//! background after a successful refresh and their outcome (resolved size or
//! failure) is cached per URL. Completions arrive on the UI loop as
//! [`AppEvent::ThumbnailLoaded`] like every other background result.

use std::num::NonZeroUsize;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use lru::LruCache;
use tokio::sync::mpsc;
use url::Url;

use crate::app::AppEvent;

/// Cached load states; plenty for one feed page plus scrollback.
const CACHE_CAPACITY: usize = 512;
/// Simultaneous thumbnail requests during a prefetch.
const PREFETCH_CONCURRENCY: usize = 4;
/// Per-thumbnail request timeout.
const LOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Load state of one thumbnail URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbState {
    Loading,
    Loaded { bytes: u64 },
    Failed,
}

/// LRU-bounded map from thumbnail URL to load state.
///
/// Owned by the UI loop; background tasks never touch it directly.
pub struct ThumbnailCache {
    states: LruCache<Url, ThumbState>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self {
            states: LruCache::new(NonZeroUsize::new(CACHE_CAPACITY).expect("nonzero capacity")),
        }
    }

    /// Current state without disturbing LRU order (render path takes `&App`).
    pub fn state(&self, url: &Url) -> Option<ThumbState> {
        self.states.peek(url).copied()
    }

    /// Mark a URL as loading. Returns false when the URL is already known
    /// (loading, loaded, or failed) and no new fetch should be spawned.
    pub fn begin(&mut self, url: &Url) -> bool {
        if self.states.contains(url) {
            return false;
        }
        self.states.put(url.clone(), ThumbState::Loading);
        true
    }

    /// Record a load result delivered by the background task.
    pub fn record(&mut self, url: Url, result: Result<u64, String>) {
        let state = match result {
            Ok(bytes) => ThumbState::Loaded { bytes },
            Err(_) => ThumbState::Failed,
        };
        self.states.put(url, state);
    }
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a background task that resolves `urls` with bounded concurrency,
/// sending one [`AppEvent::ThumbnailLoaded`] per URL.
pub fn spawn_prefetch(client: reqwest::Client, urls: Vec<Url>, tx: mpsc::Sender<AppEvent>) {
    if urls.is_empty() {
        return;
    }
    tokio::spawn(async move {
        stream::iter(urls)
            .for_each_concurrent(PREFETCH_CONCURRENCY, |url| {
                let client = client.clone();
                let tx = tx.clone();
                async move {
                    let result = load_one(&client, &url).await;
                    if let Err(e) = result.as_ref() {
                        tracing::debug!(url = %url, error = %e, "Thumbnail load failed");
                    }
                    if tx
                        .send(AppEvent::ThumbnailLoaded { url, result })
                        .await
                        .is_err()
                    {
                        tracing::warn!("Thumbnail result dropped (receiver gone)");
                    }
                }
            })
            .await;
    });
}

async fn load_one(client: &reqwest::Client, url: &Url) -> Result<u64, String> {
    let response = tokio::time::timeout(LOAD_TIMEOUT, client.get(url.clone()).send())
        .await
        .map_err(|_| "timed out".to_string())?
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("status {}", response.status().as_u16()));
    }

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.len() as u64)
}
