//! Pure projection from readings to plotting-ready series.
//!
//! Projection never filters and never fabricates: every reading produces
//! exactly one point, with `None` standing in for an absent metric so the
//! renderer can show a gap. Styling comes out as plain RGB so this crate
//! stays independent of any rendering library.

use time::OffsetDateTime;

use arlex_types::{Metric, Reading, Rgb, ThemeMode};

/// One point of a projected series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Capture time of the underlying reading.
    pub timestamp: OffsetDateTime,
    /// Metric value, `None` when the reading lacked this metric.
    pub value: Option<f64>,
}

/// Styling metadata attached to a projected series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesStyle {
    /// Axis label including the unit, e.g. "Temperature (°C)".
    pub axis_label: String,
    /// Line color for this metric.
    pub line_color: Rgb,
    /// Axis tick and scale color for the active theme.
    pub tick_color: Rgb,
}

/// A chart-ready series for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The projected metric.
    pub metric: Metric,
    /// One point per input reading, in input order.
    pub points: Vec<SeriesPoint>,
    /// Styling for the renderer.
    pub style: SeriesStyle,
}

impl ChartSeries {
    /// Whether the series has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the series holds at least one present value.
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.points.iter().any(|p| p.value.is_some())
    }
}

/// Project readings into a series for one metric.
///
/// Order-preserving: the i-th point corresponds to the i-th reading. An
/// empty input produces an empty, still-valid series.
#[must_use]
pub fn project(metric: Metric, readings: &[Reading], theme: ThemeMode) -> ChartSeries {
    let points = readings
        .iter()
        .map(|r| SeriesPoint {
            timestamp: r.timestamp,
            value: r.value(metric),
        })
        .collect();

    ChartSeries {
        metric,
        points,
        style: SeriesStyle {
            axis_label: format!("{} ({})", metric.label(), metric.unit()),
            line_color: metric.line_color(),
            tick_color: theme.tick_color(),
        },
    }
}
