//! Error handling for AnnoKit
//!
//! The interactive engine absorbs every gesture-level failure as a no-op, so
//! the types here only cover the edges of the system:
//! - Style errors (rejected configuration setters)
//! - Geometry errors (shapes that violate their kind's point cardinality)
//! - Render errors (surface allocation)
//! - Document errors (loading/saving drawings)
//!
//! Each crate returns the narrowest of these; the binary wraps them in
//! `anyhow` with context.

use thiserror::Error;

/// Style error type
///
/// Raised by style setters when a value cannot be applied. The previous
/// style stays in effect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// Stroke width is zero, negative, or not finite
    #[error("Stroke width must be a positive finite number, got {width}")]
    InvalidStrokeWidth {
        /// The rejected width.
        width: f64,
    },

    /// Opacity is NaN or infinite
    #[error("Opacity must be finite, got {opacity}")]
    InvalidOpacity {
        /// The rejected opacity.
        opacity: f64,
    },
}

/// Geometry error type
///
/// Represents a shape whose control points do not match its kind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Wrong number of control points for the shape kind
    #[error("{kind} requires {expected} point(s), got {actual}")]
    Cardinality {
        /// The shape kind name.
        kind: String,
        /// Human readable expectation ("2", "at least 1").
        expected: String,
        /// The number of points supplied.
        actual: usize,
    },

    /// A control point has a NaN or infinite coordinate
    #[error("Non-finite coordinate in {kind}")]
    NonFinite {
        /// The shape kind name.
        kind: String,
    },
}

/// Render error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The pixel surface could not be allocated
    #[error("Cannot allocate a {width}x{height} surface")]
    InvalidSurface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The logical surface has a zero or negative extent
    #[error("Logical surface size must be positive, got {width}x{height}")]
    InvalidLogicalSize {
        /// Logical width.
        width: f64,
        /// Logical height.
        height: f64,
    },
}

/// Document error type
///
/// Represents errors while reading or writing a persisted drawing.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read or written
    #[error("Document I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document was written by an unsupported format version
    #[error("Unsupported document version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file.
        found: String,
        /// Version this build writes.
        expected: String,
    },

    /// The document is not valid JSON or does not match the schema
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A shape in the document violates its geometry invariants
    #[error("Invalid shape {id}: {source}")]
    InvalidShape {
        /// The offending shape id.
        id: u64,
        /// The geometry violation.
        #[source]
        source: GeometryError,
    },

    /// Two shapes in the document share an id
    #[error("Duplicate shape id {id}")]
    DuplicateId {
        /// The duplicated id.
        id: u64,
    },

    /// A shape id leaves no room to allocate ids for new shapes
    #[error("Shape id {id} exhausts the id space")]
    IdSpaceExhausted {
        /// The largest id in the document.
        id: u64,
    },
}
