//! # Harmonium
//!
//! Terminal YouTube Music search and playback.

mod app;
mod display;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Flow};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmonium=warn".into()),
        )
        .init();

    info!("Starting Harmonium v{}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new()?;
    display::print_help();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        app.tick().await;

        print!(">>> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        // Errors are reported at the dispatch boundary; the menu keeps
        // running.
        match app.dispatch(line.trim()).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}
