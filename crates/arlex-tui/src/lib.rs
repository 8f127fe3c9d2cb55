//! Terminal dashboard for browsing Arlex sensor readings.
//!
//! This crate ties the dashboard components together and provides the main
//! event loop for the terminal user interface. It handles:
//!
//! - Terminal setup and restoration
//! - Channel creation for worker communication
//! - The main event loop with input handling and rendering
//! - Graceful shutdown coordination

pub mod app;
pub mod input;
pub mod messages;
pub mod ui;
pub mod worker;

pub use app::App;
pub use messages::{Command, DashEvent};
pub use worker::FetchWorker;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use arlex_client::ApiClient;

/// Set up the terminal for TUI rendering.
///
/// Enables raw mode and switches to the alternate screen buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application against the backend at `base_url`.
///
/// This is the main entry point for the dashboard. It:
/// 1. Creates communication channels between UI and worker
/// 2. Spawns the background fetch worker
/// 3. Requests the device directory
/// 4. Runs the main event loop
/// 5. Ensures graceful shutdown
pub async fn run(base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url)
        .with_context(|| format!("invalid backend URL: {base_url}"))?;
    info!(base_url = client.base_url(), "Starting dashboard");

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(32);
    let (event_tx, event_rx) = mpsc::channel::<DashEvent>(32);

    let worker = FetchWorker::new(cmd_rx, event_tx, client);
    let worker_handle = tokio::spawn(worker.run());

    let mut app = App::new(cmd_tx.clone(), event_rx);

    let mut terminal = setup_terminal()?;

    // The directory is fetched once at startup; readings wait for the
    // operator's explicit load.
    let _ = cmd_tx.try_send(Command::LoadDevices);

    let result = run_event_loop(&mut terminal, &mut app, &cmd_tx).await;

    let _ = cmd_tx.try_send(Command::Shutdown);
    restore_terminal()?;
    let _ = worker_handle.await;

    result
}

/// Main event loop for the TUI.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_tx: &mpsc::Sender<Command>,
) -> Result<()> {
    while !app.should_quit() {
        app.clean_expired_messages();

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for keyboard events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let action = input::handle_key(key.code, app.editing_field.is_some());
                    if let Some(cmd) = input::apply_action(app, action) {
                        app.dispatch_command(command_tx, cmd);
                    }
                }
            }
        }

        // Non-blocking receive of worker events
        while let Ok(event) = app.event_rx.try_recv() {
            app.handle_event(event);
        }
    }

    Ok(())
}
