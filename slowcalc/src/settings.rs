//! Calculator preferences, persisted as JSON in the per-user config dir.

use serde::{Deserialize, Serialize};
use slowcore::storage::{self, config_dir};
use std::path::PathBuf;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV: &str = "SLOWCALC_CONFIG";

/// Window and display preferences
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Inner window width in points
    pub window_width: f32,
    /// Inner window height in points
    pub window_height: f32,
    /// Initial window position
    pub window_x: f32,
    pub window_y: f32,
    pub resizable: bool,
    /// Gap between keypad buttons
    pub button_spacing: f32,
    pub display_font_size: f32,
    pub expression_font_size: f32,
    /// Draw the expression trail above the main display
    pub show_expression: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            window_width: 334.0,
            window_height: 464.0,
            window_x: 50.0,
            window_y: 50.0,
            resizable: false,
            button_spacing: 3.0,
            display_font_size: 32.0,
            expression_font_size: 14.0,
            show_expression: true,
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir("slowcalc").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::config_path();
        let settings: Self = storage::load_or_default(&path);
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        settings.sanitized()
    }

    /// Replace values that would make the window unusable.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        self.window_width = positive(self.window_width, defaults.window_width);
        self.window_height = positive(self.window_height, defaults.window_height);
        self.display_font_size = positive(self.display_font_size, defaults.display_font_size);
        self.expression_font_size =
            positive(self.expression_font_size, defaults.expression_font_size);
        if !self.button_spacing.is_finite() || self.button_spacing < 0.0 {
            self.button_spacing = defaults.button_spacing;
        }
        if !self.window_x.is_finite() {
            self.window_x = defaults.window_x;
        }
        if !self.window_y.is_finite() {
            self.window_y = defaults.window_y;
        }
        self
    }
}
