//! HTTP client for the telemetry backend's REST API.
//!
//! The backend exposes two read-only endpoints: the device list and a
//! per-device reading history. Everything else the dashboard shows is
//! derived locally from those two responses.
//!
//! # Example
//!
//! ```no_run
//! use arlex_client::api::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("http://localhost:8080")?;
//!
//! let devices = client.fetch_devices().await?;
//! println!("{} devices known", devices.len());
//!
//! Ok(())
//! # }
//! ```

use reqwest::Client;
use tracing::debug;

use arlex_types::{Device, Reading};

/// HTTP client for the telemetry backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Error type for backend requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend is not reachable.
    #[error("backend not reachable at {url}: {source}")]
    NotReachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The backend returned a non-success response.
    #[error("API error: {message}")]
    BadStatus { status: u16, message: String },
}

/// Result type for backend requests.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiClient {
    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(ApiError::Request)?;

        Self::with_client(base_url, client)
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        // Normalize URL (remove trailing slash)
        let base_url = base_url.trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the list of known devices.
    pub async fn fetch_devices(&self) -> Result<Vec<Device>> {
        let url = format!("{}/devices", self.base_url);
        let devices: Vec<Device> = self.get(&url).await?;
        debug!(count = devices.len(), "fetched device list");
        Ok(devices)
    }

    /// Fetch readings for a device, newest history up to `limit` rows.
    ///
    /// The backend applies no time filtering; any window constraint is
    /// applied locally after retrieval.
    pub async fn fetch_readings(&self, device_id: &str, limit: usize) -> Result<Vec<Reading>> {
        let url = format!("{}/devices/{}/readings?limit={}", self.base_url, device_id, limit);
        let readings: Vec<Reading> = self.get(&url).await?;
        debug!(device_id, count = readings.len(), "fetched readings");
        Ok(readings)
    }

    // ======================================================================
    // Internal HTTP helpers
    // ======================================================================

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::NotReachable {
                url: url.to_string(),
                source: e,
            })?;

        self.handle_response(response).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or_else(|| status.to_string());

            Err(ApiError::BadStatus {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("http://localhost:8080");
        assert!(client.is_ok());

        let client = client.unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_normalizes_url() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_invalid_url() {
        let result = ApiClient::new("localhost:8080");
        assert!(result.is_err());
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_https_url_accepted() {
        let client = ApiClient::new("https://telemetry.example.com").unwrap();
        assert_eq!(client.base_url(), "https://telemetry.example.com");
    }
}
