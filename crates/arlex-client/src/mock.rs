//! Mock reading source for testing.
//!
//! Provides an in-memory [`ReadingSource`] so the session and directory
//! logic can be exercised without a running backend.
//!
//! # Features
//!
//! - **Failure injection**: make the next fetches fail with a chosen message
//! - **Canned data**: preload devices and per-device readings
//! - **Call counting**: assert how many fetches a code path performed

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use arlex_types::{Device, Reading};

use crate::api::{ApiError, Result};
use crate::source::ReadingSource;

/// An in-memory source of devices and readings for tests.
///
/// # Example
///
/// ```
/// use arlex_client::mock::MockSource;
/// use arlex_client::source::ReadingSource;
///
/// #[tokio::main]
/// async fn main() {
///     let source = MockSource::new();
///     source.add_device("ab:cd", Some("Lab")).await;
///
///     let devices = source.fetch_devices().await.unwrap();
///     assert_eq!(devices.len(), 1);
/// }
/// ```
#[derive(Default)]
pub struct MockSource {
    devices: RwLock<Vec<Device>>,
    readings: RwLock<HashMap<String, Vec<Reading>>>,
    should_fail: AtomicBool,
    fail_message: RwLock<String>,
    fetch_count: AtomicU32,
}

impl std::fmt::Debug for MockSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSource")
            .field("should_fail", &self.should_fail.load(Ordering::Relaxed))
            .field("fetch_count", &self.fetch_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self {
            fail_message: RwLock::new("mock failure".to_string()),
            ..Self::default()
        }
    }

    /// Register a device.
    pub async fn add_device(&self, id: &str, display_name: Option<&str>) {
        self.devices.write().await.push(Device {
            id: id.to_string(),
            display_name: display_name.map(String::from),
        });
    }

    /// Replace the readings served for `device_id`.
    pub async fn set_readings(&self, device_id: &str, readings: Vec<Reading>) {
        self.readings
            .write()
            .await
            .insert(device_id.to_string(), readings);
    }

    /// Make every subsequent fetch fail.
    pub async fn set_should_fail(&self, fail: bool, message: Option<&str>) {
        self.should_fail.store(fail, Ordering::Relaxed);
        if let Some(msg) = message {
            *self.fail_message.write().await = msg.to_string();
        }
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    async fn check_should_fail(&self) -> Result<()> {
        if self.should_fail.load(Ordering::Relaxed) {
            Err(ApiError::BadStatus {
                status: 500,
                message: self.fail_message.read().await.clone(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ReadingSource for MockSource {
    async fn fetch_devices(&self) -> Result<Vec<Device>> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail().await?;
        Ok(self.devices.read().await.clone())
    }

    async fn fetch_readings(&self, device_id: &str, limit: usize) -> Result<Vec<Reading>> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.check_should_fail().await?;
        let readings = self.readings.read().await;
        let mut rows = readings.get(device_id).cloned().unwrap_or_default();
        rows.truncate(limit);
        Ok(rows)
    }
}
