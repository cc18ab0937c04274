//! Pointer handling for the tool state machine.
//!
//! Each handler returns `true` when the host should redraw.

use serde::{Deserialize, Serialize};

use super::AnnotationEngine;
use crate::hit_test::{erase_target, hit_test};
use crate::model::{AnnotationShape, Geometry, Point, Shape};
use crate::tools::{GestureState, Tool};

/// A pointer position in device pixels on the surface as it is currently
/// rendered. A zero rendered size means the position is already logical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rendered_width: f64,
    #[serde(default)]
    pub rendered_height: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64, rendered_width: f64, rendered_height: f64) -> Self {
        Self {
            x,
            y,
            rendered_width,
            rendered_height,
        }
    }

    /// An event already expressed in logical surface units.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }
}

impl AnnotationEngine {
    /// Logical position of `event`, or `None` when it has a NaN or infinite
    /// coordinate.
    fn to_logical(&self, event: PointerEvent) -> Option<Point> {
        let p = self.viewport.to_logical(
            Point::new(event.x, event.y),
            event.rendered_width,
            event.rendered_height,
        );
        if p.is_finite() {
            Some(p)
        } else {
            tracing::trace!("Dropped non-finite pointer at ({}, {})", event.x, event.y);
            None
        }
    }

    /// Starts a gesture with the active tool. Events with non-finite
    /// coordinates are ignored.
    pub fn pointer_down(&mut self, event: PointerEvent) -> bool {
        let Some(p) = self.to_logical(event) else {
            return false;
        };
        let abandoned = match std::mem::take(&mut self.gesture) {
            GestureState::Drawing { shape, .. } => {
                tracing::debug!("Abandoned unfinished {} #{}", shape.kind(), shape.id);
                true
            }
            _ => false,
        };

        match self.tool {
            Tool::Select => {
                let hit = hit_test(&self.shapes, p, self.settings.hit_margin);
                let changed = hit != self.selected;
                self.selected = hit;
                tracing::debug!("Select at ({:.1}, {:.1}) -> {:?}", p.x, p.y, hit);
                changed || abandoned
            }
            Tool::Eraser => {
                self.gesture = GestureState::Erasing;
                match erase_target(&self.shapes, p, self.settings.eraser_tolerance) {
                    Some(index) => {
                        let removed = self.shapes.remove(index);
                        tracing::debug!("Erased {} #{}", removed.kind(), removed.id);
                        self.reconcile_selection();
                        self.commit();
                        true
                    }
                    None => abandoned,
                }
            }
            drawing_tool => {
                let Some(kind) = drawing_tool.shape_kind() else {
                    return abandoned;
                };
                let Some(id) = self.allocate_id() else {
                    tracing::warn!("Shape ids exhausted, ignoring {} gesture", kind);
                    return abandoned;
                };
                let shape = Shape::new(id, Geometry::begin(kind, p), self.style.clone())
                    .with_animation(self.animation.clone());
                tracing::debug!("Begin {} #{} at ({:.1}, {:.1})", kind, id, p.x, p.y);
                self.gesture = GestureState::Drawing { shape, start: p };
                true
            }
        }
    }

    /// Extends the shape being drawn. Ignored outside a drawing gesture and
    /// for non-finite coordinates.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        let Some(p) = self.to_logical(event) else {
            return false;
        };
        match &mut self.gesture {
            GestureState::Drawing { shape, .. } => {
                shape.geometry.extend_to(p);
                tracing::trace!("Extend #{} to ({:.1}, {:.1})", shape.id, p.x, p.y);
                true
            }
            _ => false,
        }
    }

    /// Completes the current gesture, committing any shape being drawn. The
    /// position is not applied, so it may be non-finite.
    pub fn pointer_up(&mut self, _event: PointerEvent) -> bool {
        match std::mem::take(&mut self.gesture) {
            GestureState::Drawing { shape, .. } => {
                tracing::debug!("Commit {} #{}", shape.kind(), shape.id);
                self.shapes.push(shape);
                self.commit();
                true
            }
            _ => false,
        }
    }

    /// The pointer left the surface. Completes the gesture like pointer-up.
    pub fn pointer_leave(&mut self, event: PointerEvent) -> bool {
        self.pointer_up(event)
    }
}
