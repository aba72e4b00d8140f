//! Feed fetching and parsing.
//!
//! - [`query`] - Search input to request-parameter mapping
//! - [`parser`] - RSS/Atom XML into [`FeedItem`] values via `feed-rs`
//! - [`fetcher`] - One-shot HTTP retrieval and sanitization of the feed

mod fetcher;
mod parser;
mod query;

pub use fetcher::{fetch_feed, FetchError};
pub use parser::{parse_feed, FeedItem, Thumbnail};
pub use query::{query_parameters, DEFAULT_QUERY};

/// The DeviantArt RSS backend, queried with a single `q` parameter.
pub const DEFAULT_FEED_URL: &str = "http://backend.deviantart.com/rss.xml";
