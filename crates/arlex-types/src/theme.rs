//! Light/dark theme mode shared by every frontend.

use crate::types::Rgb;

/// Visual theme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Dark background, light foreground.
    Dark,
    /// Light background, dark foreground. The initial mode.
    #[default]
    Light,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Short label for the status bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    /// Axis tick and scale color for charts in this mode.
    #[must_use]
    pub fn tick_color(&self) -> Rgb {
        match self {
            ThemeMode::Dark => Rgb(0xcc, 0xcc, 0xcc),
            ThemeMode::Light => Rgb(0x33, 0x33, 0x33),
        }
    }
}
