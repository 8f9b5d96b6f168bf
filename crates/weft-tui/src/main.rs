mod input;
mod render;
mod runtime;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use weft_core::MemoryStore;

use crate::runtime::run_app;
use crate::ui::{App, ThreadView};

/// Terminal viewer for one threaded mail conversation.
#[derive(Parser)]
#[command(name = "weft", version)]
struct Args {
    /// Identifier of the thread to open
    thread_id: String,

    /// Path to the mailbox file
    #[arg(long, default_value = "mailbox.json")]
    mailbox: PathBuf,

    /// Append debug logs to this file (the terminal itself is the UI, so
    /// logs cannot go to stdout)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // WEFT_LOG_FILE works when the flag is inconvenient (e.g. wrappers).
    let fallback = std::env::var("WEFT_LOG_FILE").ok().map(PathBuf::from);
    let Some(path) = log_file.or(fallback.as_deref()) else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    // Backend and view construction happen before the terminal is taken over,
    // so a missing mailbox or thread fails with a plain error message.
    let store = MemoryStore::load(&args.mailbox)
        .with_context(|| format!("failed to load mailbox {}", args.mailbox.display()))?;
    let thread_view = ThreadView::open(&store, &args.thread_id)?;

    // Restore the terminal before showing any panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = ui::init_terminal()?;
    let mut app = App::new(store, thread_view);

    let result = run_app(&mut terminal, &mut app).await;

    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}
