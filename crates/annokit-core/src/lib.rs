//! # AnnoKit Core
//!
//! Core types shared by every AnnoKit crate: the layered error taxonomy,
//! the RGBA [`Color`] used by shape styles and render settings, and the
//! single-threaded shared/callback type aliases the engine uses to notify
//! its host.

pub mod error;
pub mod types;

pub use error::{DocumentError, GeometryError, RenderError, StyleError};

pub use types::{shared, Color, ColorParseError, ShapesCallback, Shared};
