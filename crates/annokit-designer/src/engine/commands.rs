//! History and list-level commands.

use std::collections::HashSet;

use annokit_core::DocumentError;

use super::AnnotationEngine;
use crate::model::Shape;

impl AnnotationEngine {
    /// Steps back one snapshot. Returns `false` (and notifies nobody) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.shapes = snapshot.clone();
        tracing::debug!(
            "Undo -> {} shape(s), history {}/{}",
            self.shapes.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
        self.reconcile_selection();
        self.notify();
        true
    }

    /// Steps forward one snapshot. Returns `false` (and notifies nobody)
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.shapes = snapshot.clone();
        tracing::debug!(
            "Redo -> {} shape(s), history {}/{}",
            self.shapes.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
        self.reconcile_selection();
        self.notify();
        true
    }

    /// Removes every shape as one undoable step.
    pub fn clear_all(&mut self) {
        tracing::debug!("Clear {} shape(s)", self.shapes.len());
        self.shapes.clear();
        self.selected = None;
        self.commit();
    }

    /// Removes the selected shape. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        let Some(index) = self.shapes.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.shapes.remove(index);
        tracing::debug!("Deleted {} #{}", removed.kind(), removed.id);
        self.commit();
        true
    }

    /// Replaces the drawing with `shapes`, resetting history to that list.
    ///
    /// Shape ids must be unique and every point finite. The id counter moves
    /// past the largest loaded id so new shapes never collide; an id of
    /// `u64::MAX` leaves no room and is rejected. On error nothing changes.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) -> Result<(), DocumentError> {
        let mut seen = HashSet::new();
        for shape in &shapes {
            if !seen.insert(shape.id) {
                return Err(DocumentError::DuplicateId { id: shape.id });
            }
            shape
                .geometry
                .validate()
                .map_err(|source| DocumentError::InvalidShape {
                    id: shape.id,
                    source,
                })?;
        }

        if let Some(max_id) = shapes.iter().map(|s| s.id).max() {
            let after = max_id
                .checked_add(1)
                .ok_or(DocumentError::IdSpaceExhausted { id: max_id })?;
            self.next_id = self.next_id.map(|next| next.max(after));
        }
        self.gesture = Default::default();
        self.selected = None;
        self.shapes = shapes;
        self.history.reset(self.shapes.clone());
        tracing::debug!("Loaded {} shape(s)", self.shapes.len());
        self.notify();
        Ok(())
    }
}
