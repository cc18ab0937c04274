//! # AnnoKit
//!
//! A vector annotation drawing engine:
//! - Freehand strokes and parametric shapes (line, arrow, circle, rectangle,
//!   triangle, star)
//! - Tap selection, point-proximity erasing, and delete
//! - Linear snapshot undo/redo
//! - Full-redraw rendering into a `tiny-skia` pixmap and PNG export
//!
//! ## Architecture
//!
//! AnnoKit is organized as a workspace with multiple crates:
//!
//! 1. **annokit-core** - Error taxonomy, colour type, callback aliases
//! 2. **annokit-settings** - Style defaults, tolerances, render colours
//! 3. **annokit-designer** - Model, tools, hit testing, history, renderer
//! 4. **annokit** - This facade plus the `annokit` gesture-replay binary

pub mod script;

pub use annokit_core as core;
pub use annokit_designer as designer;
pub use annokit_settings as settings;

pub use annokit_core::{Color, DocumentError, GeometryError, RenderError, StyleError};
pub use annokit_designer::{
    Animation, AnnotationEngine, DrawingDocument, Geometry, Point, PointerEvent, Shape, ShapeId,
    ShapeKind, Style, SubscriptionId, Tool,
};
pub use annokit_settings::Config;
pub use script::{ReplaySummary, Script, Step};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, so stdout stays free for results
/// - RUST_LOG environment variable support (default `info`)
/// - Target, level, and line numbers on every event
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
