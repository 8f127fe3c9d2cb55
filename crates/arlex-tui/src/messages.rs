//! Message types for communication between the UI thread and the fetch worker.
//!
//! - [`Command`]: requests sent from the UI thread to the background worker
//! - [`DashEvent`]: results sent from the worker back to the UI thread
//!
//! Readings commands carry the [`LoadTicket`] issued by the session so the
//! result can be matched against the selection that requested it.

use arlex_client::LoadTicket;
use arlex_types::{Device, Reading};

/// Commands sent from the UI thread to the background fetch worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the device directory from the backend.
    LoadDevices,
    /// Fetch readings for the device named by the ticket.
    LoadReadings { ticket: LoadTicket },
    /// Stop the worker loop.
    Shutdown,
}

/// Events sent from the fetch worker back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum DashEvent {
    /// Device directory retrieved successfully.
    DevicesLoaded { devices: Vec<Device> },
    /// Device directory retrieval failed.
    DevicesFailed { error: String },
    /// Readings retrieved for the selection identified by the ticket.
    ReadingsLoaded {
        ticket: LoadTicket,
        readings: Vec<Reading>,
    },
    /// Reading retrieval failed for the selection identified by the ticket.
    ReadingsFailed { ticket: LoadTicket, error: String },
}
