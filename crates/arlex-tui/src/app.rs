//! Application state for the TUI dashboard.
//!
//! [`App`] owns everything the render loop needs: the device directory, the
//! reading session for the selected device, the active tab, theme, transient
//! status messages, and the receive side of the worker event channel. All
//! mutation happens on the UI thread; the worker only ever talks to the app
//! through [`DashEvent`]s.

use std::time::Instant;

use tokio::sync::mpsc;
use tracing::debug;

use arlex_client::{DeviceDirectory, ReadingSession};
use arlex_types::{Device, Metric, ThemeMode, TimeWindow, format_instant, parse_instant};

use crate::messages::{Command, DashEvent};
use crate::ui::theme::AppTheme;

/// Tabs shown in the tab bar. One per metric, plus configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Temperature,
    Humidity,
    Co2,
    Luminosity,
    Config,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Temperature,
        Tab::Humidity,
        Tab::Co2,
        Tab::Luminosity,
        Tab::Config,
    ];

    /// Display label for the tab bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Temperature => "Temperature",
            Tab::Humidity => "Humidity",
            Tab::Co2 => "CO2",
            Tab::Luminosity => "Luminosity",
            Tab::Config => "Config",
        }
    }

    /// The metric charted on this tab, if any.
    #[must_use]
    pub fn metric(self) -> Option<Metric> {
        match self {
            Tab::Temperature => Some(Metric::Temperature),
            Tab::Humidity => Some(Metric::Humidity),
            Tab::Co2 => Some(Metric::Co2),
            Tab::Luminosity => Some(Metric::Luminosity),
            Tab::Config => None,
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Which window bound the operator is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowField {
    Start,
    End,
}

/// Main application state.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Currently active tab.
    pub active_tab: Tab,
    /// Current color theme.
    pub theme: ThemeMode,
    /// Device directory, once loaded.
    pub directory: Option<DeviceDirectory>,
    /// Error from the last directory load attempt, if it failed.
    pub directory_error: Option<String>,
    /// Reading session for the selected device.
    pub session: ReadingSession,
    /// Cursor into the device list on the config tab.
    pub device_cursor: usize,
    /// Whether a readings fetch is in flight.
    pub loading: bool,
    /// Most recent fetch error, shown in the header until the next success.
    pub last_error: Option<String>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Window bound being edited, if any.
    pub editing_field: Option<WindowField>,
    /// Text buffer for the bound being edited.
    pub field_input: String,
    /// Status messages with creation timestamps.
    pub status_messages: Vec<(String, Instant)>,
    /// How long status messages are displayed (seconds).
    pub status_message_timeout: u64,
    /// Sender for commands to the fetch worker.
    pub command_tx: mpsc::Sender<Command>,
    /// Receiver for events from the fetch worker.
    pub event_rx: mpsc::Receiver<DashEvent>,
}

impl App {
    pub fn new(command_tx: mpsc::Sender<Command>, event_rx: mpsc::Receiver<DashEvent>) -> Self {
        Self {
            should_quit: false,
            active_tab: Tab::default(),
            theme: ThemeMode::default(),
            directory: None,
            directory_error: None,
            session: ReadingSession::new(),
            device_cursor: 0,
            loading: false,
            last_error: None,
            show_help: false,
            editing_field: None,
            field_input: String::new(),
            status_messages: Vec::new(),
            status_message_timeout: 5, // 5 seconds
            command_tx,
            event_rx,
        }
    }

    /// Whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Theme palette for the current mode.
    #[must_use]
    pub fn app_theme(&self) -> AppTheme {
        match self.theme {
            ThemeMode::Dark => AppTheme::dark(),
            ThemeMode::Light => AppTheme::light(),
        }
    }

    /// Toggle between light and dark themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.push_status_message(format!("Theme: {}", self.theme.label()));
    }

    /// Devices known to the directory, empty before the first load.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        self.directory.as_ref().map(DeviceDirectory::devices).unwrap_or(&[])
    }

    /// Display label for the session's selected device.
    ///
    /// Falls back to the raw identifier when the directory has no entry
    /// for it (possible after a failed directory load).
    #[must_use]
    pub fn selected_device_label(&self) -> Option<String> {
        let id = self.session.device_id()?;
        let label = self
            .directory
            .as_ref()
            .and_then(|d| d.get(id))
            .map(|device| device.label().to_string())
            .unwrap_or_else(|| id.to_string());
        Some(label)
    }

    /// The device under the cursor on the config tab.
    #[must_use]
    pub fn highlighted_device(&self) -> Option<&Device> {
        self.devices().get(self.device_cursor)
    }

    /// Move the device cursor down, clamped to the list.
    pub fn select_next_device(&mut self) {
        let count = self.devices().len();
        if count > 0 && self.device_cursor + 1 < count {
            self.device_cursor += 1;
        }
    }

    /// Move the device cursor up.
    pub fn select_previous_device(&mut self) {
        self.device_cursor = self.device_cursor.saturating_sub(1);
    }

    /// Make the highlighted device the session's selection.
    ///
    /// Selection never fetches by itself; the operator triggers loads
    /// explicitly.
    pub fn choose_highlighted_device(&mut self) {
        let Some(device) = self.highlighted_device() else {
            self.push_status_message("No devices available".to_string());
            return;
        };
        let label = device.label().to_string();
        let id = device.id.clone();
        self.session.select_device(id);
        self.push_status_message(format!("Selected {label}"));
    }

    /// Ask the worker to fetch readings for the current selection.
    ///
    /// Returns the command to send, or `None` when no device is selected.
    pub fn request_load(&mut self) -> Option<Command> {
        match self.session.begin_load() {
            Some(ticket) => {
                self.loading = true;
                Some(Command::LoadReadings { ticket })
            }
            None => {
                self.push_status_message("Select a device first".to_string());
                None
            }
        }
    }

    /// Hand a command to the fetch worker.
    ///
    /// The channel is bounded; if it refuses the command, any loading
    /// state set in anticipation of the fetch is rolled back so the
    /// LOADING indicator cannot stick without a fetch in flight.
    pub fn dispatch_command(&mut self, command_tx: &mpsc::Sender<Command>, cmd: Command) {
        if let Err(e) = command_tx.try_send(cmd) {
            debug!(error = %e, "command channel refused command");
            self.loading = false;
            self.push_status_message("Worker busy, try again".to_string());
        }
    }

    /// Display text for a window bound, empty when the bound is absent.
    #[must_use]
    pub fn window_text(&self, field: WindowField) -> String {
        let window = self.session.window();
        let bound = match field {
            WindowField::Start => window.start,
            WindowField::End => window.end,
        };
        bound.map(format_instant).unwrap_or_default()
    }

    /// Begin editing a window bound, seeding the buffer with its current text.
    pub fn begin_edit(&mut self, field: WindowField) {
        self.field_input = self.window_text(field);
        self.editing_field = Some(field);
    }

    /// Abandon the edit without changing the window.
    pub fn cancel_edit(&mut self) {
        self.editing_field = None;
        self.field_input.clear();
    }

    /// Parse the edit buffer and commit it as the window bound.
    ///
    /// An empty buffer clears the bound. Invalid input leaves the window
    /// untouched and reports the problem as a status message.
    pub fn submit_edit(&mut self) {
        let Some(field) = self.editing_field else {
            return;
        };
        let input = self.field_input.trim().to_string();
        let bound = if input.is_empty() {
            None
        } else {
            match parse_instant(&input) {
                Ok(instant) => Some(instant),
                Err(e) => {
                    self.push_status_message(e.to_string());
                    self.cancel_edit();
                    return;
                }
            }
        };
        let mut window = self.session.window();
        match field {
            WindowField::Start => window.start = bound,
            WindowField::End => window.end = bound,
        }
        self.session.set_window(window);
        self.cancel_edit();
    }

    /// Clear both window bounds.
    pub fn clear_window(&mut self) {
        self.session.set_window(TimeWindow::unbounded());
        self.push_status_message("Time window cleared".to_string());
    }

    /// Add a status message to the display queue.
    pub fn push_status_message(&mut self, message: String) {
        self.status_messages.push((message, Instant::now()));
        // Keep at most 5 messages
        while self.status_messages.len() > 5 {
            self.status_messages.remove(0);
        }
    }

    /// Remove expired status messages.
    pub fn clean_expired_messages(&mut self) {
        let timeout = std::time::Duration::from_secs(self.status_message_timeout);
        self.status_messages
            .retain(|(_, created)| created.elapsed() < timeout);
    }

    /// Get the current status message to display.
    #[must_use]
    pub fn current_status_message(&self) -> Option<&str> {
        self.status_messages.last().map(|(msg, _)| msg.as_str())
    }

    /// Handle an incoming worker event and update state accordingly.
    pub fn handle_event(&mut self, event: DashEvent) {
        match event {
            DashEvent::DevicesLoaded { devices } => {
                self.device_cursor = 0;
                self.directory_error = None;
                self.push_status_message(format!("Found {} device(s)", devices.len()));
                self.directory = Some(DeviceDirectory::from_devices(devices));
            }
            DashEvent::DevicesFailed { error } => {
                self.directory_error = Some(error.clone());
                self.last_error = Some(error.clone());
                self.push_status_message(error);
            }
            DashEvent::ReadingsLoaded { ticket, readings } => {
                self.loading = false;
                if self.session.complete_load(&ticket, readings) {
                    self.last_error = None;
                    self.push_status_message(format!(
                        "Loaded {} reading(s)",
                        self.session.readings().len()
                    ));
                } else {
                    debug!(device_id = ticket.device_id(), "Discarded stale readings result");
                }
            }
            DashEvent::ReadingsFailed { ticket, error } => {
                self.loading = false;
                // Prior readings stay on screen after a failed refresh.
                self.last_error = Some(error.clone());
                self.push_status_message(format!("{}: {error}", ticket.device_id()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arlex_types::Reading;
    use time::macros::datetime;

    fn test_app() -> App {
        let (command_tx, _command_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        App::new(command_tx, event_rx)
    }

    fn device(id: &str, name: Option<&str>) -> Device {
        Device {
            id: id.to_string(),
            display_name: name.map(str::to_string),
        }
    }

    fn reading(device_id: &str) -> Reading {
        Reading {
            device_id: device_id.to_string(),
            timestamp: datetime!(2024-06-01 12:00 UTC),
            temperature: Some(21.5),
            humidity: None,
            co2_concentration: None,
            luminosity: None,
        }
    }

    #[test]
    fn test_app_theme_follows_mode() {
        let mut app = test_app();
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(app.app_theme().text_primary, AppTheme::light().text_primary);

        app.toggle_theme();
        assert_eq!(app.app_theme().text_primary, AppTheme::dark().text_primary);
    }

    #[test]
    fn test_tab_cycle_wraps_both_ways() {
        assert_eq!(Tab::Temperature.next(), Tab::Humidity);
        assert_eq!(Tab::Config.next(), Tab::Temperature);
        assert_eq!(Tab::Temperature.previous(), Tab::Config);
    }

    #[test]
    fn test_tab_metrics() {
        assert_eq!(Tab::Co2.metric(), Some(Metric::Co2));
        assert_eq!(Tab::Config.metric(), None);
    }

    #[test]
    fn test_switching_tabs_leaves_session_untouched() {
        let mut app = test_app();
        app.session.select_device("dev-1");
        app.active_tab = app.active_tab.next();
        app.active_tab = app.active_tab.next();
        assert_eq!(app.session.device_id(), Some("dev-1"));
        assert!(app.session.readings().is_empty());
    }

    #[test]
    fn test_device_cursor_clamps_to_list() {
        let mut app = test_app();
        app.handle_event(DashEvent::DevicesLoaded {
            devices: vec![device("a", None), device("b", Some("Bench"))],
        });
        app.select_previous_device();
        assert_eq!(app.device_cursor, 0);
        app.select_next_device();
        app.select_next_device();
        assert_eq!(app.device_cursor, 1);
    }

    #[test]
    fn test_choose_device_selects_without_fetching() {
        let mut app = test_app();
        app.handle_event(DashEvent::DevicesLoaded {
            devices: vec![device("dev-1", Some("Greenhouse"))],
        });
        app.choose_highlighted_device();
        assert_eq!(app.session.device_id(), Some("dev-1"));
        assert!(!app.loading);
    }

    #[test]
    fn test_request_load_without_selection_is_refused() {
        let mut app = test_app();
        assert!(app.request_load().is_none());
        assert!(!app.loading);
    }

    #[test]
    fn test_request_load_issues_ticketed_command() {
        let mut app = test_app();
        app.session.select_device("dev-1");
        let cmd = app.request_load().expect("command");
        assert!(app.loading);
        match cmd {
            Command::LoadReadings { ticket } => assert_eq!(ticket.device_id(), "dev-1"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_readings_loaded_applies_and_clears_loading() {
        let mut app = test_app();
        app.session.select_device("dev-1");
        let ticket = app.session.begin_load().expect("ticket");
        app.loading = true;
        app.handle_event(DashEvent::ReadingsLoaded {
            ticket,
            readings: vec![reading("dev-1")],
        });
        assert!(!app.loading);
        assert_eq!(app.session.readings().len(), 1);
    }

    #[test]
    fn test_stale_readings_event_is_discarded() {
        let mut app = test_app();
        app.session.select_device("dev-1");
        let stale = app.session.begin_load().expect("ticket");
        app.session.select_device("dev-2");
        app.handle_event(DashEvent::ReadingsLoaded {
            ticket: stale,
            readings: vec![reading("dev-1")],
        });
        assert!(app.session.readings().is_empty());
    }

    #[test]
    fn test_failed_load_preserves_readings_and_records_error() {
        let mut app = test_app();
        app.session.select_device("dev-1");
        let ticket = app.session.begin_load().expect("ticket");
        app.handle_event(DashEvent::ReadingsLoaded {
            ticket,
            readings: vec![reading("dev-1")],
        });
        let retry = app.session.begin_load().expect("ticket");
        app.handle_event(DashEvent::ReadingsFailed {
            ticket: retry,
            error: "backend error: 500".to_string(),
        });
        assert_eq!(app.session.readings().len(), 1);
        assert!(app.last_error.is_some());
    }

    #[test]
    fn test_window_edit_commits_parsed_bound() {
        let mut app = test_app();
        app.begin_edit(WindowField::Start);
        app.field_input = "2024-06-01 08:00".to_string();
        app.submit_edit();
        assert_eq!(
            app.session.window().start,
            Some(datetime!(2024-06-01 8:00 UTC))
        );
        assert!(app.editing_field.is_none());
    }

    #[test]
    fn test_window_edit_invalid_input_leaves_window_untouched() {
        let mut app = test_app();
        app.begin_edit(WindowField::End);
        app.field_input = "not a date".to_string();
        app.submit_edit();
        assert!(app.session.window().is_unbounded());
        assert!(app.current_status_message().is_some());
    }

    #[test]
    fn test_window_edit_empty_input_clears_bound() {
        let mut app = test_app();
        app.begin_edit(WindowField::Start);
        app.field_input = "2024-06-01".to_string();
        app.submit_edit();
        app.begin_edit(WindowField::Start);
        app.field_input.clear();
        app.submit_edit();
        assert!(app.session.window().is_unbounded());
    }

    #[test]
    fn test_refused_command_clears_loading() {
        let (command_tx, _command_rx) = mpsc::channel(1);
        let (_event_tx, event_rx) = mpsc::channel(8);
        let mut app = App::new(command_tx.clone(), event_rx);
        app.session.select_device("dev-1");

        // Fill the channel so the next dispatch is refused.
        command_tx.try_send(Command::LoadDevices).unwrap();

        let cmd = app.request_load().expect("command");
        assert!(app.loading);
        app.dispatch_command(&command_tx, cmd);
        assert!(!app.loading);
        assert_eq!(app.current_status_message(), Some("Worker busy, try again"));
    }

    #[test]
    fn test_dispatched_command_reaches_worker() {
        let (command_tx, mut command_rx) = mpsc::channel(8);
        let (_event_tx, event_rx) = mpsc::channel(8);
        let mut app = App::new(command_tx.clone(), event_rx);
        app.session.select_device("dev-1");

        let cmd = app.request_load().expect("command");
        app.dispatch_command(&command_tx, cmd);
        assert!(app.loading);
        assert!(matches!(
            command_rx.try_recv(),
            Ok(Command::LoadReadings { .. })
        ));
    }

    #[test]
    fn test_status_messages_capped_at_five() {
        let mut app = test_app();
        for i in 0..8 {
            app.push_status_message(format!("message {i}"));
        }
        assert_eq!(app.status_messages.len(), 5);
        assert_eq!(app.current_status_message(), Some("message 7"));
    }
}
