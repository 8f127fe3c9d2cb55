//! Abstraction over where devices and readings come from.
//!
//! The session and directory code only need the two fetches, so they are
//! written against this trait rather than [`ApiClient`] directly. Tests use
//! the in-memory [`MockSource`](crate::mock::MockSource).

use async_trait::async_trait;

use arlex_types::{Device, Reading};

use crate::api::{ApiClient, Result};

/// A source of devices and their readings.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Fetch the list of known devices.
    async fn fetch_devices(&self) -> Result<Vec<Device>>;

    /// Fetch up to `limit` readings for one device.
    async fn fetch_readings(&self, device_id: &str, limit: usize) -> Result<Vec<Reading>>;
}

#[async_trait]
impl ReadingSource for ApiClient {
    async fn fetch_devices(&self) -> Result<Vec<Device>> {
        ApiClient::fetch_devices(self).await
    }

    async fn fetch_readings(&self, device_id: &str, limit: usize) -> Result<Vec<Reading>> {
        ApiClient::fetch_readings(self, device_id, limit).await
    }
}
