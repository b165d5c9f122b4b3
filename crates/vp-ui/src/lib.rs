//! User interface chrome for the visual panel application
//!
//! This crate provides the egui-based shell around the view layer: the
//! theme, the menu bar, and the selector bar that owns the view selection.

pub mod shell;
pub mod theme;

pub use shell::{central_panel, menu_bar, selector_bar};
pub use theme::{apply_theme, Theme};

/// Application-wide state
pub struct AppState {
    pub settings: AppSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
        }
    }
}

/// Application settings
pub struct AppSettings {
    pub dark_mode: bool,
    pub show_selector_bar: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_selector_bar: true,
        }
    }
}
