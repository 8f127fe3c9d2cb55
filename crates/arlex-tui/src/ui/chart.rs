//! Metric chart panel.
//!
//! Renders the projected series for the active tab's metric as a braille
//! line chart. Points with an absent value split the line into separate
//! datasets so the chart shows a visible gap instead of bridging over
//! missing data.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use arlex_client::chart::{ChartSeries, project};
use arlex_types::Metric;

use super::theme::{BORDER_TYPE, terminal_color};
use crate::app::App;

const AXIS_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month]/[day] [hour]:[minute]");

/// Draw the chart panel for one metric.
pub(super) fn draw_chart_panel(frame: &mut Frame, area: Rect, app: &App, metric: Metric) {
    let theme = app.app_theme();
    let series = project(metric, app.session.readings(), app.theme);

    let title = match app.selected_device_label() {
        Some(label) => format!(" {} - {} ", series.style.axis_label, label),
        None => format!(" {} ", series.style.axis_label),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_inactive_style())
        .title(Span::styled(title, theme.title_style()));

    if !series.has_values() {
        let hint = if app.loading {
            "Loading readings..."
        } else if app.session.device_id().is_none() {
            "No device selected. Choose one on the Config tab, then press r."
        } else if series.is_empty() {
            "No readings loaded. Press r to load."
        } else {
            "No values for this metric in the loaded readings."
        };
        let para = Paragraph::new(hint)
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let runs = contiguous_runs(&series);
    let line_color = terminal_color(series.style.line_color);
    let tick_color = terminal_color(series.style.tick_color);

    let datasets: Vec<Dataset> = runs
        .iter()
        .map(|run| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line_color))
                .data(run)
        })
        .collect();

    let (x_min, x_max) = x_bounds(&runs);
    let (y_min, y_max) = y_bounds(&runs);

    let x_labels = endpoint_labels(&series);
    let y_labels = vec![
        format!("{y_min:.0}"),
        format!("{:.0}", (y_min + y_max) / 2.0),
        format!("{y_max:.0}"),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(tick_color))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    series.style.axis_label.clone(),
                    Style::default().fg(tick_color),
                ))
                .style(Style::default().fg(tick_color))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Split a series into runs of consecutive present values.
///
/// Each run becomes its own dataset; the breaks between runs render as
/// gaps. X is the unix timestamp in seconds.
fn contiguous_runs(series: &ChartSeries) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for point in &series.points {
        match point.value {
            Some(value) => current.push((point.timestamp.unix_timestamp() as f64, value)),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn x_bounds(runs: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let xs = runs.iter().flatten().map(|(x, _)| *x);
    let min = xs.clone().fold(f64::INFINITY, f64::min);
    let max = xs.fold(f64::NEG_INFINITY, f64::max);
    if min.is_finite() && max > min {
        (min, max)
    } else if min.is_finite() {
        // Single point; widen so the chart has a span to draw in.
        (min - 1.0, min + 1.0)
    } else {
        (0.0, 1.0)
    }
}

/// Y bounds anchored at zero (or below, for negative values) with headroom.
fn y_bounds(runs: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let ys = runs.iter().flatten().map(|(_, y)| *y);
    let min = ys.clone().fold(f64::INFINITY, f64::min);
    let max = ys.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    let lower = min.min(0.0);
    let headroom = (max - lower).abs() * 0.1;
    let upper = if headroom > 0.0 { max + headroom } else { max + 1.0 };
    (lower, upper)
}

/// Oldest and newest timestamps as x-axis endpoint labels.
fn endpoint_labels(series: &ChartSeries) -> Vec<String> {
    let mut stamps = series
        .points
        .iter()
        .filter(|p| p.value.is_some())
        .map(|p| p.timestamp);
    let first = stamps.next();
    let last = stamps.next_back();
    match (first, last) {
        (Some(first), Some(last)) => vec![format_axis_time(first), format_axis_time(last)],
        (Some(only), None) => vec![format_axis_time(only)],
        _ => Vec::new(),
    }
}

fn format_axis_time(instant: time::OffsetDateTime) -> String {
    instant
        .format(AXIS_TIME_FORMAT)
        .unwrap_or_else(|_| instant.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arlex_client::chart::{SeriesPoint, SeriesStyle};
    use arlex_types::Rgb;
    use time::macros::datetime;

    fn series_of(values: &[Option<f64>]) -> ChartSeries {
        let base = datetime!(2024-06-01 12:00 UTC);
        ChartSeries {
            metric: Metric::Temperature,
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| SeriesPoint {
                    timestamp: base + time::Duration::minutes(i as i64),
                    value: *v,
                })
                .collect(),
            style: SeriesStyle {
                axis_label: "Temperature (°C)".to_string(),
                line_color: Rgb(0xe1, 0x1d, 0x48),
                tick_color: Rgb(0x33, 0x33, 0x33),
            },
        }
    }

    #[test]
    fn test_gap_splits_line_into_runs() {
        let series = series_of(&[Some(1.0), Some(2.0), None, Some(3.0)]);
        let runs = contiguous_runs(&series);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 1);
    }

    #[test]
    fn test_all_gaps_produce_no_runs() {
        let series = series_of(&[None, None]);
        assert!(contiguous_runs(&series).is_empty());
    }

    #[test]
    fn test_leading_and_trailing_gaps_are_dropped() {
        let series = series_of(&[None, Some(5.0), Some(6.0), None]);
        let runs = contiguous_runs(&series);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], vec![
            (series.points[1].timestamp.unix_timestamp() as f64, 5.0),
            (series.points[2].timestamp.unix_timestamp() as f64, 6.0),
        ]);
    }

    #[test]
    fn test_y_bounds_anchored_at_zero_with_headroom() {
        let series = series_of(&[Some(400.0), Some(800.0)]);
        let (lower, upper) = y_bounds(&contiguous_runs(&series));
        assert_eq!(lower, 0.0);
        assert!(upper > 800.0);
    }

    #[test]
    fn test_y_bounds_extend_below_zero_for_negative_values() {
        let series = series_of(&[Some(-4.0), Some(10.0)]);
        let (lower, _) = y_bounds(&contiguous_runs(&series));
        assert_eq!(lower, -4.0);
    }

    #[test]
    fn test_x_bounds_widen_single_point() {
        let series = series_of(&[Some(1.0)]);
        let (min, max) = x_bounds(&contiguous_runs(&series));
        assert!(max > min);
    }

    #[test]
    fn test_endpoint_labels_skip_gap_points() {
        let series = series_of(&[None, Some(1.0), Some(2.0)]);
        let labels = endpoint_labels(&series);
        assert_eq!(labels.len(), 2);
        assert!(labels[0].starts_with("06/01"));
    }
}
