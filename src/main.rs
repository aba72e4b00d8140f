use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use artfeed::app::{App, AppEvent};
use artfeed::feed::DEFAULT_FEED_URL;
use artfeed::ui;

#[derive(Parser, Debug)]
#[command(name = "artfeed", about = "Terminal browser for the DeviantArt RSS feed")]
struct Args {
    /// Feed endpoint to query
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    url: String,

    /// Search query submitted on startup (defaults to the popular feed)
    #[arg(long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG-controlled tracing; silent by default so the TUI stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut app = App::new(args.url)?;
    if let Some(query) = args.query {
        app.query_input = query;
    }

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // The screen refreshes once on load, like it always has.
    app.start_refresh(&event_tx);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
