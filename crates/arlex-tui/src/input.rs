//! Keyboard input handling for the TUI.
//!
//! Translates keyboard events into high-level actions and applies those
//! actions to the application state.
//!
//! # Key Bindings
//!
//! | Key       | Action                     |
//! |-----------|----------------------------|
//! | `q`       | Quit                       |
//! | `r`       | Load readings              |
//! | `d`       | Reload device directory    |
//! | `↓` / `j` | Select next device         |
//! | `↑` / `k` | Select previous device     |
//! | `Enter`   | Choose highlighted device  |
//! | `Tab` / `l` | Next tab                 |
//! | `BackTab` / `h` | Previous tab         |
//! | `1`-`5`   | Jump to tab                |
//! | `s` / `e` | Edit window start / end    |
//! | `c`       | Clear time window          |
//! | `t`       | Toggle theme               |
//! | `?`       | Toggle help                |

use crossterm::event::KeyCode;

use super::app::{App, Tab, WindowField};
use super::messages::Command;

/// User actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Request readings for the selected device.
    Load,
    /// Reload the device directory.
    ReloadDevices,
    /// Select the next device in the list.
    SelectNext,
    /// Select the previous device in the list.
    SelectPrevious,
    /// Make the highlighted device the session's selection.
    ChooseDevice,
    /// Switch to the next tab.
    NextTab,
    /// Switch to the previous tab.
    PreviousTab,
    /// Jump directly to a tab.
    SelectTab(Tab),
    /// Begin editing the window start bound.
    EditStart,
    /// Begin editing the window end bound.
    EditEnd,
    /// Clear both window bounds.
    ClearWindow,
    /// Toggle theme.
    ToggleTheme,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Close the help overlay.
    Dismiss,
    /// Input character for text input.
    TextInput(char),
    /// Backspace for text input.
    TextBackspace,
    /// Submit text input.
    TextSubmit,
    /// Cancel text input.
    TextCancel,
    /// No action (unrecognized key).
    None,
}

/// Map a key code to an action.
///
/// While a window bound is being edited, keys feed the text buffer instead
/// of the normal bindings.
pub fn handle_key(key: KeyCode, editing_text: bool) -> Action {
    if editing_text {
        return match key {
            KeyCode::Enter => Action::TextSubmit,
            KeyCode::Esc => Action::TextCancel,
            KeyCode::Backspace => Action::TextBackspace,
            KeyCode::Char(c) => Action::TextInput(c),
            _ => Action::None,
        };
    }

    match key {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('r') => Action::Load,
        KeyCode::Char('d') => Action::ReloadDevices,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Enter => Action::ChooseDevice,
        KeyCode::Tab | KeyCode::Char('l') => Action::NextTab,
        KeyCode::BackTab | KeyCode::Char('h') => Action::PreviousTab,
        KeyCode::Char('1') => Action::SelectTab(Tab::Temperature),
        KeyCode::Char('2') => Action::SelectTab(Tab::Humidity),
        KeyCode::Char('3') => Action::SelectTab(Tab::Co2),
        KeyCode::Char('4') => Action::SelectTab(Tab::Luminosity),
        KeyCode::Char('5') => Action::SelectTab(Tab::Config),
        KeyCode::Char('s') => Action::EditStart,
        KeyCode::Char('e') => Action::EditEnd,
        KeyCode::Char('c') => Action::ClearWindow,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc => Action::Dismiss,
        _ => Action::None,
    }
}

/// Apply an action to the application state.
///
/// UI-only actions modify the app directly; fetch actions return the
/// command the caller should send to the background worker.
pub fn apply_action(app: &mut App, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            app.should_quit = true;
            None
        }
        Action::Load => app.request_load(),
        Action::ReloadDevices => Some(Command::LoadDevices),
        Action::SelectNext => {
            if app.active_tab == Tab::Config {
                app.select_next_device();
            }
            None
        }
        Action::SelectPrevious => {
            if app.active_tab == Tab::Config {
                app.select_previous_device();
            }
            None
        }
        Action::ChooseDevice => {
            if app.active_tab == Tab::Config {
                app.choose_highlighted_device();
            }
            None
        }
        Action::NextTab => {
            app.active_tab = app.active_tab.next();
            None
        }
        Action::PreviousTab => {
            app.active_tab = app.active_tab.previous();
            None
        }
        Action::SelectTab(tab) => {
            app.active_tab = tab;
            None
        }
        Action::EditStart => {
            if app.active_tab == Tab::Config {
                app.begin_edit(WindowField::Start);
            }
            None
        }
        Action::EditEnd => {
            if app.active_tab == Tab::Config {
                app.begin_edit(WindowField::End);
            }
            None
        }
        Action::ClearWindow => {
            if app.active_tab == Tab::Config {
                app.clear_window();
            }
            None
        }
        Action::ToggleTheme => {
            app.toggle_theme();
            None
        }
        Action::ToggleHelp => {
            app.show_help = !app.show_help;
            None
        }
        Action::Dismiss => {
            app.show_help = false;
            None
        }
        Action::TextInput(c) => {
            app.field_input.push(c);
            None
        }
        Action::TextBackspace => {
            app.field_input.pop();
            None
        }
        Action::TextSubmit => {
            app.submit_edit();
            None
        }
        Action::TextCancel => {
            app.cancel_edit();
            None
        }
        Action::None => None,
    }
}
