//! Main UI layout and rendering for the TUI dashboard.
//!
//! The layout consists of:
//!
//! - **Header**: title, selected device, and state indicators
//! - **Tab bar**: one tab per metric plus configuration
//! - **Main content**: metric chart or the config panel
//! - **Status bar**: context hints, status messages, and a clock

pub mod theme;

mod chart;
mod config;
mod overlays;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use time::OffsetDateTime;
use time::macros::format_description;

use super::app::{App, Tab};
use theme::BORDER_TYPE;

/// Draw the complete TUI interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.app_theme();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg)),
        frame.area(),
    );

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_layout[0], app);
    draw_tab_bar(frame, main_layout[1], app);

    match app.active_tab.metric() {
        Some(metric) => chart::draw_chart_panel(frame, main_layout[2], app, metric),
        None => config::draw_config_panel(frame, main_layout[2], app),
    }

    draw_status_bar(frame, main_layout[3], app);

    if app.show_help {
        overlays::draw_help_overlay(frame, app);
    }
}

/// Draw the header bar with app title and state indicators.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let mut spans = vec![
        Span::styled(
            " Arlex Dashboard ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            Style::default().fg(theme.text_muted),
        ),
    ];

    let device_count = app.devices().len();
    spans.push(Span::styled(
        format!(" {device_count} device(s) "),
        Style::default().fg(if device_count == 0 {
            theme.warning
        } else {
            theme.success
        }),
    ));

    if let Some(label) = app.selected_device_label() {
        spans.push(Span::styled(
            format!(" ▸ {label} "),
            Style::default().fg(theme.text_primary),
        ));
    }

    if app.loading {
        spans.push(Span::styled(
            " LOADING ",
            Style::default().fg(theme.warning),
        ));
    }

    if app.last_error.is_some() {
        spans.push(Span::styled(
            " ERR ",
            Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        format!(" {} ", app.theme.label().to_uppercase()),
        Style::default().fg(theme.text_muted),
    ));

    let header = Paragraph::new(Line::from(spans)).style(theme.header_style());
    frame.render_widget(header, area);
}

/// Get context-sensitive help hints based on current state.
fn context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("?", "help")];

    match app.active_tab {
        Tab::Config => {
            if app.devices().is_empty() {
                hints.push(("d", "reload devices"));
            } else {
                hints.push(("j/k", "select"));
                hints.push(("Enter", "choose"));
            }
            hints.push(("s/e", "window"));
            hints.push(("c", "clear"));
        }
        _ => {
            if app.session.device_id().is_some() {
                hints.push(("r", "load"));
            } else {
                hints.push(("5", "config"));
            }
            hints.push(("t", "theme"));
        }
    }

    hints.push(("q", "quit"));
    hints
}

/// Draw the status bar with context-sensitive help.
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();
    let time_str = OffsetDateTime::now_utc()
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default();

    let left_spans = if let Some(msg) = app.current_status_message() {
        vec![Span::styled(
            format!(" {msg}"),
            Style::default().fg(theme.text_secondary),
        )]
    } else {
        let hints = context_hints(app);
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {desc}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        spans
    };

    let status_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(10)])
        .split(area);

    let left = Paragraph::new(Line::from(left_spans));
    frame.render_widget(left, status_layout[0]);

    let right = Paragraph::new(time_str)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Right);
    frame.render_widget(right, status_layout[1]);
}

/// Draw the tab bar with an underline on the active tab.
fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == app.active_tab;
            let style = if is_active {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_muted)
            };
            Line::from(Span::styled(format!(" {} ", tab.label()), style))
        })
        .collect();

    let tabs_widget = ratatui::widgets::Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(ratatui::widgets::Borders::BOTTOM)
                .border_type(BORDER_TYPE)
                .border_style(Style::default().fg(theme.border_inactive)),
        )
        .highlight_style(Style::default().fg(theme.primary))
        .divider(Span::styled(" | ", Style::default().fg(theme.text_muted)))
        .select(app.active_tab.index());

    frame.render_widget(tabs_widget, area);
}
