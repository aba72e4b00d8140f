//! artfeed — a terminal browser for the DeviantArt RSS feed.
//!
//! One screen: a search bar, a scrollable list of feed items with optional
//! thumbnail indicators, a status bar, and a full-screen detail view for a
//! selected item. The pipeline is linear with a single asynchronous step:
//!
//! ```text
//! user input → query parameters → HTTP fetch → parsed feed →
//! sanitized items → in-memory list → render
//! ```
//!
//! There is no persistence, no pagination, and no retry policy. A failed
//! fetch keeps the previously loaded items on screen.

pub mod app;
pub mod feed;
pub mod row;
pub mod text;
pub mod thumbs;
pub mod ui;
