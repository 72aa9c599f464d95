// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI
// - Dispatching keys to the active view

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod views;

use crate::nav::{ViewKey, ROUTE_SITEMAP_REPORT};
use anyhow::{Context, Result};
use app::App;
use components::Toast;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use views::{HomeAction, SettingsAction};

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The final session snapshot is sent before the terminal is
/// restored so the writer task sees it before the channel closes.
pub async fn run_tui(mut app: App) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    app.snapshot_session();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles two types of events:
/// 1. Keyboard input (for navigation and commands)
/// 2. Timer ticks (for periodic redraws)
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(app.config.tick_ms));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Wait for events using tokio::select!
        // This is non-blocking and efficient - we only wake up when something happens
        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick keeps the uptime clock and log pane fresh
            _ = tick_interval.tick() => {}
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → View-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Global keys (work regardless of view)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 2: View-specific keys
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            if !app.handle_key_press(key) {
                return;
            }

            let view = match app.navigator.current().map(|state| state.view) {
                Some(view) => view,
                None => return,
            };

            match view {
                ViewKey::Home => {
                    let action = app.views.home.handle_key(key, app.navigator.sitemap());
                    if let Some(HomeAction::Navigate(route)) = action {
                        app.navigate(&route);
                    }
                }
                ViewKey::SystemAdmin => match key {
                    KeyCode::Enter => app.navigate(ROUTE_SITEMAP_REPORT),
                    KeyCode::Char('c') => {
                        app.log_buffer.clear();
                        tracing::info!("log buffer cleared");
                        app.show_toast(Toast::info("✓ Log cleared"));
                    }
                    _ => {}
                },
                ViewKey::SitemapReport => {
                    let line_count = app.navigator.sitemap().build_report().len();
                    app.views.sitemap_report.handle_key(key, line_count);
                }
                ViewKey::Settings => match key {
                    KeyCode::Char('r') => {
                        app.views.settings.reset(&app.config);
                        app.show_toast(Toast::info("Form reset"));
                    }
                    _ => match app.views.settings.handle_key(key) {
                        Some(SettingsAction::Apply) => app.apply_settings(),
                        Some(SettingsAction::DeselectRejected(field, e)) => {
                            tracing::warn!(field = %field, error = %e, "clear rejected");
                            app.show_toast(Toast::error(format!("✗ {}: {}", field, e)));
                        }
                        None => {}
                    },
                },
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Global key handling that works in any view
/// Returns true if the key was handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Cycle through routes in sitemap order
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                cycle_route(app, 1);
            }
            true
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                cycle_route(app, -1);
            }
            true
        }
        // Back to the previous route
        KeyCode::Backspace | KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.go_back();
            }
            true
        }
        // Direct route jumps
        KeyCode::Char(c @ '1'..='4') => {
            if app.handle_key_press(key) {
                let idx = c as usize - '1' as usize;
                let route = app
                    .navigator
                    .sitemap()
                    .routes()
                    .nth(idx)
                    .map(String::from);
                if let Some(route) = route {
                    app.navigate(&route);
                }
            }
            true
        }
        _ => false,
    }
}

/// Jump to the next/previous route relative to the current one
fn cycle_route(app: &mut App, step: isize) {
    let routes: Vec<String> = app.navigator.sitemap().routes().map(String::from).collect();
    if routes.is_empty() {
        return;
    }

    let current_idx = app
        .navigator
        .current()
        .and_then(|state| routes.iter().position(|r| *r == state.route))
        .unwrap_or(0);

    let next = (current_idx as isize + step).rem_euclid(routes.len() as isize) as usize;
    app.navigate(&routes[next]);
}
