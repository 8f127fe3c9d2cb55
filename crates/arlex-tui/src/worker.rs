//! Background worker for backend fetches.
//!
//! All HTTP traffic happens here so the render loop never blocks on the
//! network. The worker receives [`Command`]s from the UI thread, performs the
//! fetch, and reports back with [`DashEvent`]s. Every readings result carries
//! the ticket it was requested with so the UI can discard stale responses.

use arlex_client::{ApiClient, DeviceDirectory, Error, READING_FETCH_LIMIT};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::messages::{Command, DashEvent};

/// Background worker that fetches devices and readings from the backend.
pub struct FetchWorker {
    /// Receiver for commands from the UI thread.
    command_rx: mpsc::Receiver<Command>,
    /// Sender for events back to the UI thread.
    event_tx: mpsc::Sender<DashEvent>,
    /// HTTP client for the readings backend.
    client: ApiClient,
}

impl FetchWorker {
    pub fn new(
        command_rx: mpsc::Receiver<Command>,
        event_tx: mpsc::Sender<DashEvent>,
        client: ApiClient,
    ) -> Self {
        Self {
            command_rx,
            event_tx,
            client,
        }
    }

    /// Run the worker's main loop.
    ///
    /// Consumes the worker and runs until a [`Command::Shutdown`] is received
    /// or the command channel is closed.
    pub async fn run(mut self) {
        info!("FetchWorker started");

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(Command::Shutdown) => {
                            info!("FetchWorker received shutdown command");
                            break;
                        }
                        Some(cmd) => {
                            self.handle_command(cmd).await;
                        }
                        None => {
                            info!("Command channel closed, shutting down worker");
                            break;
                        }
                    }
                }
            }
        }

        info!("FetchWorker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        info!(?cmd, "Handling command");

        match cmd {
            Command::LoadDevices => {
                let event = match DeviceDirectory::load(&self.client).await {
                    Ok(directory) => DashEvent::DevicesLoaded {
                        devices: directory.devices().to_vec(),
                    },
                    Err(e) => {
                        warn!(error = %e, "Device directory load failed");
                        DashEvent::DevicesFailed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = self.event_tx.send(event).await;
            }
            Command::LoadReadings { ticket } => {
                let event = match self
                    .client
                    .fetch_readings(ticket.device_id(), READING_FETCH_LIMIT)
                    .await
                {
                    Ok(readings) => DashEvent::ReadingsLoaded { ticket, readings },
                    Err(e) => {
                        let error = Error::Retrieval(e);
                        warn!(device_id = ticket.device_id(), error = %error, "Readings load failed");
                        DashEvent::ReadingsFailed {
                            ticket,
                            error: error.to_string(),
                        }
                    }
                };
                let _ = self.event_tx.send(event).await;
            }
            Command::Shutdown => {
                // Handled in the run loop.
            }
        }
    }
}
