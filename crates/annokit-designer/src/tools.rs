//! Drawing tools and the pointer-gesture state they drive.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Point, Shape, ShapeKind};

/// The tool that interprets pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Tap to select the topmost shape under the pointer
    Select,
    #[default]
    Freehand,
    Line,
    Arrow,
    Circle,
    Rectangle,
    Triangle,
    Star,
    /// Tap to remove the first shape with a point near the pointer
    Eraser,
}

impl Tool {
    /// The shape kind this tool draws, or `None` for select and eraser.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Select | Tool::Eraser => None,
            Tool::Freehand => Some(ShapeKind::Freehand),
            Tool::Line => Some(ShapeKind::Line),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Star => Some(ShapeKind::Star),
        }
    }

    pub fn is_drawing_tool(&self) -> bool {
        self.shape_kind().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Eraser => "eraser",
            other => other.shape_kind().map_or("select", |k| k.name()),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the current pointer gesture stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A drawing tool is building `shape` from a gesture that began at `start`.
    Drawing { shape: Shape, start: Point },
    /// Reserved for rubber-band selection; selection is tap-only, so the
    /// engine never enters this state.
    DraggingSelect,
    /// The eraser went down; further moves erase nothing until pointer-up.
    Erasing,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// The shape being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        match self {
            GestureState::Drawing { shape, .. } => Some(shape),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Drawing { .. } => "drawing",
            GestureState::DraggingSelect => "dragging-select",
            GestureState::Erasing => "erasing",
        }
    }
}
