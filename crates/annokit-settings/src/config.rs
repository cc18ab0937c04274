//! Configuration for the annotation engine
//!
//! Configuration is organized into logical sections:
//! - Style defaults applied to new shapes
//! - Engine tolerances and geometry constants
//! - Rendering colours for the background and selection overlay
//!
//! Files may be JSON or TOML; the format is picked from the extension.
//! Every section is `#[serde(default)]`, so a partial file only overrides
//! the keys it names.

use crate::error::{ConfigError, SettingsResult};
use annokit_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
pub const APP_DIR_NAME: &str = "annokit";

/// Default configuration file name inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Style applied to shapes created before the host calls `set_style`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Stroke and fill colour
    pub color: Color,
    /// Line thickness in surface units
    pub stroke_width: f64,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Fill closed shapes before stroking
    pub filled: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            color: Color::RED,
            stroke_width: 4.0,
            opacity: 1.0,
            filled: false,
        }
    }
}

/// Tolerances and geometry constants used by the tool state machine,
/// hit tester, and outline builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Margin added around a shape's bounding box for select hit tests
    pub hit_margin: f64,
    /// Maximum distance from any shape point for the eraser to hit it
    pub eraser_tolerance: f64,
    /// Length of each arrowhead stroke
    pub arrow_head_length: f64,
    /// Angle between the shaft and each arrowhead stroke, in degrees
    pub arrow_head_angle_deg: f64,
    /// Inner radius of a star as a fraction of its outer radius
    pub star_inner_ratio: f64,
    /// Maximum number of history snapshots kept (0 = unbounded)
    pub history_depth: usize,
    /// Logical surface width
    pub surface_width: f64,
    /// Logical surface height
    pub surface_height: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            hit_margin: 10.0,
            eraser_tolerance: 20.0,
            arrow_head_length: 15.0,
            arrow_head_angle_deg: 30.0,
            star_inner_ratio: 0.4,
            history_depth: 0,
            surface_width: 800.0,
            surface_height: 600.0,
        }
    }
}

/// Colours and stroke parameters for the rendered surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Colour the surface is cleared to before every redraw
    pub background: Color,
    /// Colour of the dashed selection rectangle
    pub selection_color: Color,
    /// Dash pattern (on, off, ...) of the selection rectangle
    pub selection_dash: Vec<f32>,
    /// Stroke width of the selection rectangle
    pub selection_stroke_width: f32,
    /// Padding between a selected shape's bounds and its selection rectangle
    pub selection_padding: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            selection_color: Color::rgb(0, 122, 255),
            selection_dash: vec![5.0, 5.0],
            selection_stroke_width: 1.0,
            selection_padding: 0.0,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default drawing style
    pub style: StyleSettings,
    /// Engine tolerances and constants
    pub engine: EngineSettings,
    /// Rendering colours
    pub render: RenderSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        if let Err(e) = config.validate() {
            tracing::warn!("Rejected config {}: {}", path.display(), e);
            return Err(e.into());
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let style = &self.style;
        if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
            return Err(ConfigError::out_of_range(
                "style.stroke_width",
                style.stroke_width,
            ));
        }
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(ConfigError::out_of_range("style.opacity", style.opacity));
        }

        let engine = &self.engine;
        let non_negative = [
            ("engine.hit_margin", engine.hit_margin),
            ("engine.eraser_tolerance", engine.eraser_tolerance),
            ("engine.arrow_head_length", engine.arrow_head_length),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }
        if !(0.0..=180.0).contains(&engine.arrow_head_angle_deg) {
            return Err(ConfigError::out_of_range(
                "engine.arrow_head_angle_deg",
                engine.arrow_head_angle_deg,
            ));
        }
        if !(engine.star_inner_ratio > 0.0 && engine.star_inner_ratio <= 1.0) {
            return Err(ConfigError::out_of_range(
                "engine.star_inner_ratio",
                engine.star_inner_ratio,
            ));
        }
        if !(engine.surface_width.is_finite() && engine.surface_width > 0.0) {
            return Err(ConfigError::out_of_range(
                "engine.surface_width",
                engine.surface_width,
            ));
        }
        if !(engine.surface_height.is_finite() && engine.surface_height > 0.0) {
            return Err(ConfigError::out_of_range(
                "engine.surface_height",
                engine.surface_height,
            ));
        }

        let render = &self.render;
        if render.selection_dash.len() % 2 != 0
            || render
                .selection_dash
                .iter()
                .any(|d| !d.is_finite() || *d < 0.0)
        {
            return Err(ConfigError::out_of_range(
                "render.selection_dash",
                format!("{:?}", render.selection_dash),
            ));
        }
        if !render.selection_stroke_width.is_finite() || render.selection_stroke_width <= 0.0 {
            return Err(ConfigError::out_of_range(
                "render.selection_stroke_width",
                render.selection_stroke_width,
            ));
        }
        if !render.selection_padding.is_finite() || render.selection_padding < 0.0 {
            return Err(ConfigError::out_of_range(
                "render.selection_padding",
                render.selection_padding,
            ));
        }

        Ok(())
    }

    /// Platform configuration directory for AnnoKit, e.g.
    /// `~/.config/annokit` on Linux.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Default configuration file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.hit_margin, 10.0);
        assert_eq!(config.engine.eraser_tolerance, 20.0);
        assert_eq!(config.engine.history_depth, 0);
        assert_eq!(config.render.selection_dash, vec![5.0, 5.0]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.style.stroke_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.opacity = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.star_inner_ratio = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.selection_dash = vec![5.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r##"
            [style]
            color = "#00FF00"

            [engine]
            history_depth = 5
            "##,
        )
        .unwrap();
        assert_eq!(config.style.color, Color::rgb(0, 255, 0));
        assert_eq!(config.style.stroke_width, 4.0);
        assert_eq!(config.engine.history_depth, 5);
        assert_eq!(config.engine.hit_margin, 10.0);
        assert_eq!(config.render, RenderSettings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::default()
            .save_to_file(Path::new("config.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
