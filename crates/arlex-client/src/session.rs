//! The reading session: selected device, time window, and loaded readings.
//!
//! Retrieval is explicit. Changing the selected device or editing the
//! window never fetches by itself; the operator triggers a load, the
//! session hands out a [`LoadTicket`], and the result is applied through
//! [`ReadingSession::complete_load`] where stale responses are discarded.

use time::OffsetDateTime;
use tracing::{debug, info};

use arlex_types::{Reading, TimeWindow};

use crate::error::{Error, Result};
use crate::source::ReadingSource;

/// Fixed row cap requested from the backend on every load.
///
/// Retrieval is never constrained by time at the transport level; the
/// window filter runs locally on whatever arrives.
pub const READING_FETCH_LIMIT: usize = 5000;

/// A token identifying one load attempt.
///
/// Issued by [`ReadingSession::begin_load`] and checked by
/// [`ReadingSession::complete_load`]. A ticket whose device or generation
/// no longer matches the session is stale and its result is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    device_id: String,
    generation: u64,
}

impl LoadTicket {
    /// The device this load was issued for.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// The session generation at issue time.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State of the operator's current viewing session.
#[derive(Debug, Clone, Default)]
pub struct ReadingSession {
    device_id: Option<String>,
    window: TimeWindow,
    readings: Vec<Reading>,
    generation: u64,
}

impl ReadingSession {
    /// Create a session with no device selected and an unbounded window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected device, if any.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// The current time window.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// The readings from the last applied load, in timestamp order.
    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Select a device.
    ///
    /// Clears any loaded readings and invalidates in-flight loads. Does not
    /// fetch anything.
    pub fn select_device(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(device_id = %id, "device selected");
        self.device_id = Some(id);
        self.readings.clear();
        self.generation += 1;
    }

    /// Replace the time window. Does not fetch anything.
    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    /// Begin a load for the selected device.
    ///
    /// Returns `None` when no device is selected; a load without a device
    /// is a no-op, not an error.
    #[must_use]
    pub fn begin_load(&self) -> Option<LoadTicket> {
        self.device_id.as_ref().map(|id| LoadTicket {
            device_id: id.clone(),
            generation: self.generation,
        })
    }

    /// Apply the result of a load.
    ///
    /// Stale tickets (the selection changed since [`begin_load`]) are
    /// discarded and the session is left untouched. Fresh results are
    /// sorted by timestamp and, when any window bound is set, filtered to
    /// the inclusive effective bounds. Returns whether the result was
    /// applied.
    ///
    /// [`begin_load`]: Self::begin_load
    pub fn complete_load(&mut self, ticket: &LoadTicket, rows: Vec<Reading>) -> bool {
        if self.device_id.as_deref() != Some(ticket.device_id.as_str())
            || self.generation != ticket.generation
        {
            debug!(
                ticket_device = %ticket.device_id,
                ticket_generation = ticket.generation,
                "discarding stale load result"
            );
            return false;
        }

        let mut rows = rows;
        rows.sort_by_key(|r| r.timestamp);

        if !self.window.is_unbounded() {
            let now = OffsetDateTime::now_utc();
            let before = rows.len();
            rows.retain(|r| self.window.contains(r.timestamp, now));
            debug!(kept = rows.len(), dropped = before - rows.len(), "window filter applied");
        }

        info!(count = rows.len(), device_id = %ticket.device_id, "readings applied");
        self.readings = rows;
        true
    }

    /// Fetch and apply readings for the selected device.
    ///
    /// Returns the number of readings now held. With no device selected
    /// this does nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Retrieval`] when the fetch fails; previously loaded
    /// readings are kept as they were.
    pub async fn load<S: ReadingSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        let Some(ticket) = self.begin_load() else {
            debug!("load requested with no device selected");
            return Ok(0);
        };

        let rows = source
            .fetch_readings(ticket.device_id(), READING_FETCH_LIMIT)
            .await
            .map_err(Error::Retrieval)?;

        self.complete_load(&ticket, rows);
        Ok(self.readings.len())
    }
}
