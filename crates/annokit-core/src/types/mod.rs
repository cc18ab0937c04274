//! Shared value types and type aliases.

pub mod aliases;
pub mod color;

pub use aliases::{shared, ShapesCallback, Shared};
pub use color::{Color, ColorParseError};
