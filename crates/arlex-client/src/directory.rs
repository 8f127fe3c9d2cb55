//! The device directory loaded once at dashboard startup.

use tracing::info;

use arlex_types::Device;

use crate::error::{Error, Result};
use crate::source::ReadingSource;

/// The set of devices the operator can select from.
///
/// Loaded once when the dashboard starts; there is no refresh. A failed
/// load leaves the dashboard without a directory, which the frontend
/// reports while remaining usable.
#[derive(Debug, Clone, Default)]
pub struct DeviceDirectory {
    devices: Vec<Device>,
}

impl DeviceDirectory {
    /// Build a directory from an already-fetched device list.
    #[must_use]
    pub fn from_devices(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// Load the directory from a source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnavailable`] when the fetch fails or the
    /// response does not have the expected shape.
    pub async fn load<S: ReadingSource + ?Sized>(source: &S) -> Result<Self> {
        let devices = source
            .fetch_devices()
            .await
            .map_err(Error::DirectoryUnavailable)?;
        info!(count = devices.len(), "device directory loaded");
        Ok(Self { devices })
    }

    /// All known devices, in backend order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Look up a device by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Number of known devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether no devices are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSource;

    #[tokio::test]
    async fn test_directory_load() {
        let source = MockSource::new();
        source.add_device("ab:cd", Some("Lab")).await;
        source.add_device("ef:01", None).await;

        let directory = DeviceDirectory::load(&source).await.unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("ab:cd").unwrap().label(), "Lab");
        assert!(directory.get("zz:zz").is_none());
    }

    #[tokio::test]
    async fn test_directory_load_failure() {
        let source = MockSource::new();
        source.set_should_fail(true, Some("unreachable")).await;

        let result = DeviceDirectory::load(&source).await;
        assert!(matches!(result, Err(Error::DirectoryUnavailable(_))));
    }

    #[tokio::test]
    async fn test_directory_empty_backend_is_valid() {
        let source = MockSource::new();
        let directory = DeviceDirectory::load(&source).await.unwrap();
        assert!(directory.is_empty());
    }
}
