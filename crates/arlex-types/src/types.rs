//! Core types for Arlex telemetry data.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sensor device known to the backend.
///
/// Devices are read-only from the dashboard's point of view. The optional
/// display name is operator-facing; [`Device::label`] falls back to the
/// identifier when no usable name exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Device {
    /// Stable unique identifier assigned by the backend.
    pub id: String,
    /// Optional human-readable name.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub display_name: Option<String>,
}

impl Device {
    /// The label shown to the operator.
    ///
    /// Returns the display name when present and non-blank, otherwise the
    /// device identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use arlex_types::Device;
    ///
    /// let named = Device { id: "ab:cd".into(), display_name: Some("Lab".into()) };
    /// assert_eq!(named.label(), "Lab");
    ///
    /// let unnamed = Device { id: "ab:cd".into(), display_name: None };
    /// assert_eq!(unnamed.label(), "ab:cd");
    /// ```
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single timestamped observation reported by a device.
///
/// Every metric field is optional: a device that lacks a given sensor, or a
/// sample where a sensor failed, reports `null` for that metric. Absent
/// values are preserved through the pipeline so charts can show gaps rather
/// than fabricated points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Reading {
    /// Identifier of the reporting device.
    pub device_id: String,
    /// Capture time, RFC 3339 on the wire.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub timestamp: time::OffsetDateTime,
    /// Temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity percentage.
    pub humidity: Option<f64>,
    /// CO2 concentration in ppm.
    pub co2_concentration: Option<f64>,
    /// Luminosity in lux.
    pub luminosity: Option<f64>,
}

impl Reading {
    /// The value of `metric` in this reading, if the sample carried one.
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Co2 => self.co2_concentration,
            Metric::Luminosity => self.luminosity,
        }
    }
}

/// An RGB color, independent of any rendering library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The fixed set of charted metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// Temperature in degrees Celsius.
    Temperature,
    /// Relative humidity percentage.
    Humidity,
    /// CO2 concentration in ppm.
    Co2,
    /// Luminosity in lux.
    Luminosity,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Co2,
        Metric::Luminosity,
    ];

    /// Short human-readable name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Co2 => "CO2",
            Metric::Luminosity => "Luminosity",
        }
    }

    /// Measurement unit suffix.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Co2 => "ppm",
            Metric::Luminosity => "lux",
        }
    }

    /// Line color used when charting this metric.
    #[must_use]
    pub fn line_color(&self) -> Rgb {
        match self {
            Metric::Temperature => Rgb(0xe1, 0x1d, 0x48),
            Metric::Humidity => Rgb(0x3b, 0x82, 0xf6),
            Metric::Co2 => Rgb(0x10, 0xb9, 0x81),
            Metric::Luminosity => Rgb(0xf5, 0x9e, 0x0b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
