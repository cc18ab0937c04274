//! # AnnoKit Designer
//!
//! The annotation engine: freehand strokes and parametric shapes drawn onto
//! a 2D surface, tap selection, erasing, and linear undo/redo.
//!
//! ## Core Components
//!
//! - **Model**: Shapes as a tagged union of kinds (freehand, line, arrow,
//!   circle, rectangle, triangle, star), each with its own control points
//! - **Tools**: The active tool and the pointer-gesture state machine
//! - **Hit testing**: Bounding-box selection and point-proximity erasing
//! - **History**: Snapshot-based undo/redo with a single linear branch
//! - **Renderer**: Full redraw into a `tiny-skia` pixmap from `lyon` outlines
//! - **Serialization**: Versioned JSON drawing documents
//!
//! ## Architecture
//!
//! ```text
//! pointer input
//!   └── AnnotationEngine (tool state machine)
//!         ├── Hit testing (select, eraser)
//!         ├── History (snapshot per committed change)
//!         ├── Subscribers (notified with the full shape list)
//!         └── Renderer (scene -> pixmap)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use annokit_designer::{AnnotationEngine, PointerEvent, Tool};
//!
//! let mut engine = AnnotationEngine::new();
//! engine.set_active_tool(Tool::Rectangle);
//! engine.pointer_down(PointerEvent::at(10.0, 10.0));
//! engine.pointer_move(PointerEvent::at(50.0, 40.0));
//! engine.pointer_up(PointerEvent::at(50.0, 40.0));
//!
//! assert_eq!(engine.shapes().len(), 1);
//! assert!(engine.undo());
//! assert!(engine.shapes().is_empty());
//! ```

pub mod engine;
pub mod history;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod tools;
pub mod viewport;

pub use engine::{AnnotationEngine, PointerEvent, SubscriptionId};
pub use history::History;
pub use model::{
    Animation, AnnotationShape, Bounds, Geometry, OutlineParams, Point, Shape, ShapeId,
    ShapeKind, Style,
};
pub use renderer::{Renderer, Scene};
pub use serialization::DrawingDocument;
pub use tools::{GestureState, Tool};
pub use viewport::Viewport;
