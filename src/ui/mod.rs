//! Terminal user interface.
//!
//! - `loop_runner` - Event loop and terminal management
//! - `input` - Keyboard handling for the browse and detail views
//! - `events` - Background task event processing
//! - `render` - View rendering dispatch
//! - `search` - Query input bar
//! - `list` - Feed item list widget
//! - `detail` - Full-screen item view
//! - `status` - Status bar widget

mod detail;
mod events;
mod input;
mod list;
mod loop_runner;
mod render;
mod search;
mod status;

pub use loop_runner::{run, Action};
