//! Demo application settings
//!
//! User preferences for the embedding demo: popup colors and the
//! close-on-select policy. The menu component itself persists nothing; this
//! is the embedding context's own state.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Color scheme options for the demo window and popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ColorScheme {
    /// Display name for this color scheme
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    /// All available color schemes
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    /// Window background color
    pub fn background(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(30, 30, 30),
            ColorScheme::Light => egui::Color32::from_rgb(250, 250, 250),
        }
    }

    /// Default text color
    pub fn foreground(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(220, 220, 220),
            ColorScheme::Light => egui::Color32::from_rgb(30, 30, 30),
        }
    }

    /// Dimmer text color, used for the menu title
    pub fn secondary_foreground(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(150, 150, 150),
            ColorScheme::Light => egui::Color32::from_rgb(110, 110, 110),
        }
    }

    /// Popup body fill
    pub fn popup_background(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(42, 42, 42),
            ColorScheme::Light => egui::Color32::from_rgb(255, 255, 255),
        }
    }

    /// Popup border stroke color
    pub fn popup_border(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(70, 70, 70),
            ColorScheme::Light => egui::Color32::from_rgb(200, 200, 200),
        }
    }

    /// Hovered menu item fill
    pub fn selection_background(&self) -> egui::Color32 {
        match self {
            ColorScheme::Dark => egui::Color32::from_rgb(70, 130, 180),
            ColorScheme::Light => egui::Color32::from_rgb(173, 214, 255),
        }
    }
}

/// Demo application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Color scheme
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Whether selecting an action hides the menu. The component itself
    /// never auto-closes; this is the embedding context's policy.
    #[serde(default = "default_close_on_select")]
    pub close_on_select: bool,
}

fn default_close_on_select() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            close_on_select: default_close_on_select(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file: {:?}", path))?;
            let settings: Settings = toml::from_str(&content)
                .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;

        Ok(())
    }

    /// Settings file path under the platform config directory
    fn settings_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "popmenu", "PopmenuDemo")
            .context("Failed to determine settings directory")?;
        Ok(proj_dirs.config_dir().join("settings.toml"))
    }
}
