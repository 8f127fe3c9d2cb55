//! Config tab: device selection and the time window.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::theme::BORDER_TYPE;
use crate::app::{App, WindowField};

/// Draw the config panel with the device list and window bound fields.
pub(super) fn draw_config_panel(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_device_list(frame, layout[0], app);
    draw_window_panel(frame, layout[1], app);
}

fn draw_device_list(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_active_style())
        .title(Span::styled(" Devices ", theme.title_style()));

    let devices = app.devices();
    if devices.is_empty() {
        let text = match &app.directory_error {
            Some(error) => format!("Device list unavailable: {error}\nPress d to retry."),
            None => "No devices found. Press d to reload.".to_string(),
        };
        let para = Paragraph::new(text)
            .style(Style::default().fg(theme.text_muted))
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let selected_id = app.session.device_id();
    let items: Vec<ListItem> = devices
        .iter()
        .map(|device| {
            let marker = if Some(device.id.as_str()) == selected_id {
                "● "
            } else {
                "  "
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.success)),
                Span::styled(
                    device.label().to_string(),
                    Style::default().fg(theme.text_primary),
                ),
            ];
            if device.display_name.is_some() {
                spans.push(Span::styled(
                    format!("  {}", device.id),
                    Style::default().fg(theme.text_muted),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected_style());

    let mut state = ListState::default();
    state.select(Some(app.device_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_window_panel(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.app_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_inactive_style())
        .title(Span::styled(" Time Window ", theme.title_style()));

    let mut lines = vec![
        Line::from(Span::styled(
            "Bounds are inclusive and read as UTC.",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(""),
        field_line("Start", WindowField::Start, app, &theme),
        field_line("End", WindowField::End, app, &theme),
        Line::from(""),
    ];

    if app.session.window().is_unbounded() {
        lines.push(Line::from(Span::styled(
            "No window set; all loaded readings are charted.",
            Style::default().fg(theme.text_secondary),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Window applies on the next load (press r).",
            Style::default().fg(theme.text_secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} reading(s) loaded", app.session.readings().len()),
        Style::default().fg(theme.text_secondary),
    )));

    if let Some(error) = &app.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.danger),
        )));
    }

    let para = Paragraph::new(lines).block(block);
    frame.render_widget(para, area);
}

fn field_line<'a>(
    name: &'a str,
    field: WindowField,
    app: &App,
    theme: &super::theme::AppTheme,
) -> Line<'a> {
    let editing = app.editing_field == Some(field);
    let value = if editing {
        format!("{}_", app.field_input)
    } else {
        let text = app.window_text(field);
        if text.is_empty() {
            "(unset)".to_string()
        } else {
            text
        }
    };
    let value_style = if editing {
        Style::default().fg(theme.warning)
    } else {
        Style::default().fg(theme.text_primary)
    };
    Line::from(vec![
        Span::styled(format!("{name:>6}: "), Style::default().fg(theme.text_secondary)),
        Span::styled(value, value_style),
    ])
}
