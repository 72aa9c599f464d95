// Viewdeck - Routed admin console for the terminal
//
// A small admin console with translated captions, routed views, and a
// settings form backed by single-select properties.
//
// Architecture:
// - Sitemap/Navigator: Route table with redirects, resolves routes to views
// - Form: Single-select value holders with versioned snapshots
// - TUI (ratatui): Renders the routed views and the settings form
// - Session writer: Persists session snapshots to a JSON file
// - Channels: an mpsc channel connects the TUI to the session writer

mod cli;
mod config;
mod form;
mod i18n;
mod logging;
mod nav;
mod session;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use nav::{Navigator, Sitemap, ROUTE_HOME};
use session::{Session, SessionWriter};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber.
///
/// In TUI mode log events go to the in-memory buffer, never to stdout, or
/// they would garble the alternate screen. Headless mode logs to stdout.
/// File output is layered on top of either when enabled; the returned guard
/// must stay alive so buffered file writes flush on shutdown.
///
/// Filter precedence: RUST_LOG env var > config file > default "info".
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("viewdeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_writer, guard) = match rolling_file_writer(&config.logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };
    // JSON in the file so entries stay machine-parseable across rotations
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
    });

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stdout_layer = (!config.enable_tui).then(|| tracing_subscriber::fmt::layer());

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rotating file writer, or None when file logging is off or
/// the log directory cannot be created (a warning, not a startup failure).
fn rolling_file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    Some(tracing_appender::non_blocking(appender))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update; report)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::from_env();

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    // Build the route table. Duplicates in the standard sitemap are a bug,
    // so a failure here aborts startup.
    let sitemap = Sitemap::standard().context("Failed to build sitemap")?;
    for line in sitemap.build_report() {
        tracing::debug!("{}", line);
    }

    let mut navigator = Navigator::new(sitemap);

    // Restore the previous session, if enabled and present
    let restored = if config.session.enabled {
        match Session::load(&config.session.path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "session restore failed");
                None
            }
        }
    } else {
        None
    };

    // Initial route: the config's start route wins, then the saved session,
    // then home. A stale route falls back to home instead of aborting.
    let initial = config
        .start_route
        .clone()
        .or_else(|| restored.as_ref().map(|s| s.route.clone()))
        .unwrap_or_else(|| ROUTE_HOME.to_string());

    if let Err(e) = navigator.navigate_to(&initial) {
        tracing::warn!(error = %e, route = %initial, "initial route rejected, opening home");
        navigator
            .navigate_to(ROUTE_HOME)
            .context("Failed to open the home route")?;
    }

    // Spawn the session writer task (if enabled)
    // This runs in the background, writing session snapshots to disk
    let (session_tx, session_rx) = mpsc::channel(8);
    let writer_handle = if config.session.enabled {
        let writer = SessionWriter::new(config.session.path.clone(), session_rx)
            .context("Failed to prepare session writer")?;
        Some(tokio::spawn(writer.run()))
    } else {
        // Drop the receiver so snapshot sends fail fast instead of filling up
        drop(session_rx);
        None
    };

    let mut app = tui::app::App::with_config(config, navigator, log_buffer, session_tx);
    if let Some(session) = &restored {
        app.restore_session_form(session);
    }

    // Run the TUI in the main task
    // This blocks until the user quits (presses 'q')
    if app.config.enable_tui {
        tracing::info!(version = config::VERSION, "Starting TUI");
        if let Err(e) = tui::run_tui(app).await {
            tracing::error!("TUI error: {:?}", e);
        }
    } else {
        // Headless mode: print the build report once and exit
        tracing::info!("TUI disabled, printing the sitemap build report");
        for line in app.navigator.sitemap().build_report() {
            println!("{}", line);
        }
        app.snapshot_session();
        // Closing the app closes the session channel so the writer can drain
        drop(app);
    }

    tracing::info!("Shutting down...");

    // Wait for the session writer to flush its queue
    if let Some(handle) = writer_handle {
        let _ = handle.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
