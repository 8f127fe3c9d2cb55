//! Data pipeline for the Arlex telemetry dashboard.
//!
//! This crate turns the backend's two read-only endpoints into chart-ready
//! data: load the device directory once, let the operator drive a reading
//! session (device selection, time window, explicit loads), and project the
//! loaded readings into per-metric series.
//!
//! # Features
//!
//! - **Device directory**: one-shot device list load at startup
//! - **Reading session**: explicit loads with a staleness guard, local
//!   inclusive time-window filtering, timestamp ordering
//! - **Chart projection**: pure readings-to-series transform with gap
//!   preservation and theme-aware styling
//! - **Source seam**: the pipeline runs against any [`ReadingSource`],
//!   including the in-memory mock used in tests
//!
//! # Quick Start
//!
//! ```no_run
//! use arlex_client::{ApiClient, DeviceDirectory, ReadingSession, chart};
//! use arlex_types::{Metric, ThemeMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("http://localhost:8080")?;
//!
//!     let directory = DeviceDirectory::load(&client).await?;
//!     let mut session = ReadingSession::new();
//!
//!     if let Some(device) = directory.devices().first() {
//!         session.select_device(device.id.clone());
//!         session.load(&client).await?;
//!     }
//!
//!     let series = chart::project(Metric::Temperature, session.readings(), ThemeMode::Light);
//!     println!("{} points", series.points.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod directory;
pub mod error;
pub mod mock;
pub mod session;
pub mod source;

pub use api::{ApiClient, ApiError};
pub use chart::{ChartSeries, SeriesPoint, SeriesStyle};
pub use directory::DeviceDirectory;
pub use error::{Error, Result};
pub use mock::MockSource;
pub use session::{LoadTicket, READING_FETCH_LIMIT, ReadingSession};
pub use source::ReadingSource;
