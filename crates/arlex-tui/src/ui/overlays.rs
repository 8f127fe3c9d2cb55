//! Overlay rendering for the TUI (currently just the help popup).

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::theme::{AppTheme, BORDER_TYPE};
use crate::app::App;

/// Draw help overlay with keyboard shortcuts.
pub(super) fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let theme = app.app_theme();

    let area = frame.area();
    let width = (area.width * 60 / 100)
        .max(50)
        .min(area.width.saturating_sub(2));
    let height = (area.height * 60 / 100)
        .max(16)
        .min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    let help_area = Rect::new(x, y, width, height);
    frame.render_widget(Clear, help_area);

    let inner_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(help_area);

    let left_lines = vec![
        Line::from(Span::styled(
            "--- Navigation ---",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut_line("Tab/Shift+Tab", "Next/Prev tab", &theme),
        shortcut_line("1-5", "Jump to tab", &theme),
        shortcut_line("j/k", "Next/Prev device", &theme),
        shortcut_line("Enter", "Select device", &theme),
        Line::from(""),
        Line::from(Span::styled(
            "--- Data ---",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut_line("r", "Load readings", &theme),
        shortcut_line("d", "Reload devices", &theme),
    ];

    let right_lines = vec![
        Line::from(Span::styled(
            "--- Time Window ---",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut_line("s", "Edit start bound", &theme),
        shortcut_line("e", "Edit end bound", &theme),
        shortcut_line("c", "Clear window", &theme),
        Line::from(""),
        Line::from(Span::styled(
            "--- Other ---",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        shortcut_line("t", "Toggle theme", &theme),
        shortcut_line("?", "Toggle help", &theme),
        shortcut_line("q", "Quit", &theme),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let left_para = Paragraph::new(left_lines);
    let right_para = Paragraph::new(right_lines);

    let block = Block::default()
        .style(Style::default().bg(theme.bg))
        .borders(Borders::ALL)
        .border_type(BORDER_TYPE)
        .border_style(theme.border_active_style())
        .title(Span::styled(" Keyboard Shortcuts ", theme.title_style()));

    frame.render_widget(block, help_area);
    frame.render_widget(left_para, inner_layout[0]);
    frame.render_widget(right_para, inner_layout[1]);
}

fn shortcut_line<'a>(key: &str, desc: &str, theme: &AppTheme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>14} ", key), Style::default().fg(theme.warning)),
        Span::styled(desc.to_string(), Style::default().fg(theme.text_secondary)),
    ])
}
