//! AnnoKit Settings Crate
//!
//! Handles engine configuration: default drawing style, hit-test and eraser
//! tolerances, rendering colours, and history depth.

pub mod config;
pub mod error;

pub use config::{Config, EngineSettings, RenderSettings, StyleSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
