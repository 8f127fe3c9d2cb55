//! Platform-agnostic types for the Arlex telemetry dashboard.
//!
//! This crate provides the shared data model used by the client pipeline
//! (arlex-client) and the terminal frontend (arlex-tui).
//!
//! # Features
//!
//! - Device and reading structures matching the backend's JSON shapes
//! - The fixed metric set with labels, units, and chart colors
//! - Inclusive time windows with open-bound defaults
//! - Theme mode shared by every frontend
//!
//! # Example
//!
//! ```
//! use arlex_types::{Device, Metric, TimeWindow};
//!
//! let window = TimeWindow::unbounded();
//! assert!(window.is_unbounded());
//! ```

pub mod error;
pub mod theme;
pub mod types;
pub mod window;

pub use error::WindowParseError;
pub use theme::ThemeMode;
pub use types::{Device, Metric, Reading, Rgb};
pub use window::{DEFAULT_WINDOW_START, TimeWindow, format_instant, parse_instant};

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use time::macros::datetime;

    fn reading(ts: OffsetDateTime) -> Reading {
        Reading {
            device_id: "ab:cd".to_string(),
            timestamp: ts,
            temperature: Some(22.5),
            humidity: Some(45.0),
            co2_concentration: Some(800.0),
            luminosity: Some(300.0),
        }
    }

    // --- Device label tests ---

    #[test]
    fn test_device_label_prefers_display_name() {
        let device = Device {
            id: "aa:bb:cc".to_string(),
            display_name: Some("Greenhouse".to_string()),
        };
        assert_eq!(device.label(), "Greenhouse");
    }

    #[test]
    fn test_device_label_falls_back_to_id() {
        let device = Device {
            id: "aa:bb:cc".to_string(),
            display_name: None,
        };
        assert_eq!(device.label(), "aa:bb:cc");
    }

    #[test]
    fn test_device_label_blank_name_falls_back_to_id() {
        let device = Device {
            id: "aa:bb:cc".to_string(),
            display_name: Some("   ".to_string()),
        };
        assert_eq!(device.label(), "aa:bb:cc");
    }

    #[test]
    fn test_device_display_matches_label() {
        let device = Device {
            id: "aa:bb:cc".to_string(),
            display_name: Some("Lab".to_string()),
        };
        assert_eq!(format!("{device}"), "Lab");
    }

    // --- Reading tests ---

    #[test]
    fn test_reading_metric_value_extraction() {
        let r = reading(datetime!(2024-06-01 12:00 UTC));
        assert_eq!(r.value(Metric::Temperature), Some(22.5));
        assert_eq!(r.value(Metric::Humidity), Some(45.0));
        assert_eq!(r.value(Metric::Co2), Some(800.0));
        assert_eq!(r.value(Metric::Luminosity), Some(300.0));
    }

    #[test]
    fn test_reading_missing_metric_is_none() {
        let mut r = reading(datetime!(2024-06-01 12:00 UTC));
        r.co2_concentration = None;
        assert_eq!(r.value(Metric::Co2), None);
        assert_eq!(r.value(Metric::Temperature), Some(22.5));
    }

    // --- Metric tests ---

    #[test]
    fn test_metric_all_display_order() {
        assert_eq!(
            Metric::ALL,
            [
                Metric::Temperature,
                Metric::Humidity,
                Metric::Co2,
                Metric::Luminosity
            ]
        );
    }

    #[test]
    fn test_metric_labels_and_units() {
        assert_eq!(Metric::Temperature.label(), "Temperature");
        assert_eq!(Metric::Temperature.unit(), "°C");
        assert_eq!(Metric::Humidity.unit(), "%");
        assert_eq!(Metric::Co2.unit(), "ppm");
        assert_eq!(Metric::Luminosity.unit(), "lux");
    }

    #[test]
    fn test_metric_line_colors() {
        assert_eq!(Metric::Temperature.line_color(), Rgb(0xe1, 0x1d, 0x48));
        assert_eq!(Metric::Humidity.line_color(), Rgb(0x3b, 0x82, 0xf6));
        assert_eq!(Metric::Co2.line_color(), Rgb(0x10, 0xb9, 0x81));
        assert_eq!(Metric::Luminosity.line_color(), Rgb(0xf5, 0x9e, 0x0b));
    }

    // --- TimeWindow tests ---

    #[test]
    fn test_window_unbounded() {
        let window = TimeWindow::unbounded();
        assert!(window.is_unbounded());
        assert_eq!(window.effective_start(), DEFAULT_WINDOW_START);
    }

    #[test]
    fn test_window_one_bound_is_not_unbounded() {
        let window = TimeWindow {
            start: Some(datetime!(2024-01-01 0:00 UTC)),
            end: None,
        };
        assert!(!window.is_unbounded());
    }

    #[test]
    fn test_window_effective_end_defaults_to_now() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let window = TimeWindow::unbounded();
        assert_eq!(window.effective_end(now), now);
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let window = TimeWindow {
            start: Some(datetime!(2024-05-01 0:00 UTC)),
            end: Some(datetime!(2024-05-01 1:00 UTC)),
        };
        assert!(window.contains(datetime!(2024-05-01 0:00 UTC), now));
        assert!(window.contains(datetime!(2024-05-01 0:30 UTC), now));
        assert!(window.contains(datetime!(2024-05-01 1:00 UTC), now));
        assert!(!window.contains(datetime!(2024-05-01 2:00 UTC), now));
        assert!(!window.contains(datetime!(2024-04-30 23:59 UTC), now));
    }

    #[test]
    fn test_window_inverted_contains_nothing() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let window = TimeWindow {
            start: Some(datetime!(2024-05-02 0:00 UTC)),
            end: Some(datetime!(2024-05-01 0:00 UTC)),
        };
        assert!(!window.contains(datetime!(2024-05-01 12:00 UTC), now));
        assert!(!window.contains(datetime!(2024-05-02 0:00 UTC), now));
    }

    #[test]
    fn test_window_open_end_excludes_future_readings() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let window = TimeWindow {
            start: Some(datetime!(2024-05-01 0:00 UTC)),
            end: None,
        };
        assert!(window.contains(datetime!(2024-05-15 0:00 UTC), now));
        assert!(!window.contains(datetime!(2024-06-02 0:00 UTC), now));
    }

    // --- parse/format tests ---

    #[test]
    fn test_parse_instant_date_time() {
        let parsed = parse_instant("2024-05-01 13:45").unwrap();
        assert_eq!(parsed, datetime!(2024-05-01 13:45 UTC));
    }

    #[test]
    fn test_parse_instant_bare_date_is_midnight() {
        let parsed = parse_instant("2024-05-01").unwrap();
        assert_eq!(parsed, datetime!(2024-05-01 0:00 UTC));
    }

    #[test]
    fn test_parse_instant_trims_whitespace() {
        let parsed = parse_instant("  2024-05-01 08:00  ").unwrap();
        assert_eq!(parsed, datetime!(2024-05-01 8:00 UTC));
    }

    #[test]
    fn test_parse_instant_rejects_garbage() {
        let err = parse_instant("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn test_format_instant_roundtrip() {
        let instant = datetime!(2024-05-01 13:45 UTC);
        let formatted = format_instant(instant);
        assert_eq!(formatted, "2024-05-01 13:45");
        assert_eq!(parse_instant(&formatted).unwrap(), instant);
    }

    // --- ThemeMode tests ---

    #[test]
    fn test_theme_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_tick_colors() {
        assert_eq!(ThemeMode::Dark.tick_color(), Rgb(0xcc, 0xcc, 0xcc));
        assert_eq!(ThemeMode::Light.tick_color(), Rgb(0x33, 0x33, 0x33));
    }

    // --- Serialization tests ---

    #[test]
    fn test_device_deserialization_camel_case() {
        let json = r#"{"id":"aa:bb","displayName":"Office"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.id, "aa:bb");
        assert_eq!(device.display_name.as_deref(), Some("Office"));
    }

    #[test]
    fn test_device_deserialization_without_name() {
        let json = r#"{"id":"aa:bb"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert!(device.display_name.is_none());
    }

    #[test]
    fn test_reading_deserialization_full() {
        let json = r#"{
            "deviceId": "aa:bb",
            "timestamp": "2024-05-01T13:45:00Z",
            "temperature": 22.5,
            "humidity": 45.0,
            "co2Concentration": 800.0,
            "luminosity": 300.0
        }"#;
        let r: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(r.device_id, "aa:bb");
        assert_eq!(r.timestamp, datetime!(2024-05-01 13:45 UTC));
        assert_eq!(r.co2_concentration, Some(800.0));
    }

    #[test]
    fn test_reading_deserialization_null_and_missing_metrics() {
        let json = r#"{
            "deviceId": "aa:bb",
            "timestamp": "2024-05-01T13:45:00Z",
            "temperature": null,
            "humidity": 45.0
        }"#;
        let r: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(r.temperature, None);
        assert_eq!(r.humidity, Some(45.0));
        assert_eq!(r.co2_concentration, None);
        assert_eq!(r.luminosity, None);
    }

    #[test]
    fn test_reading_deserialization_missing_timestamp_fails() {
        let json = r#"{"deviceId":"aa:bb","temperature":22.5}"#;
        let result: Result<Reading, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_reading_serialization_uses_camel_case() {
        let r = reading(datetime!(2024-05-01 13:45 UTC));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"deviceId\":\"ab:cd\""));
        assert!(json.contains("\"co2Concentration\":800.0"));
        assert!(json.contains("2024-05-01T13:45:00Z"));
    }
}
