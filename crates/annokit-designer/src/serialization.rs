//! Serialization and deserialization for drawing documents.
//!
//! A document is a JSON file holding the logical surface size and the
//! ordered shape list, stamped with creation and modification times.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use annokit_core::DocumentError;

use crate::engine::AnnotationEngine;
use crate::model::{Shape, ShapeId};

/// Document format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Complete drawing file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

impl DrawingDocument {
    /// Create an empty document for a surface of the given logical size.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Snapshot an engine's current drawing.
    pub fn from_engine(name: impl Into<String>, engine: &AnnotationEngine) -> Self {
        let viewport = engine.viewport();
        let mut doc = Self::new(name, viewport.width(), viewport.height());
        doc.shapes = engine.shapes().to_vec();
        doc
    }

    /// Check version, id uniqueness and range, and point validity.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.version != FILE_FORMAT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: self.version.clone(),
                expected: FILE_FORMAT_VERSION.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for shape in &self.shapes {
            if !seen.insert(shape.id) {
                return Err(DocumentError::DuplicateId { id: shape.id });
            }
            if shape.id == ShapeId::MAX {
                return Err(DocumentError::IdSpaceExhausted { id: shape.id });
            }
            shape
                .geometry
                .validate()
                .map_err(|source| DocumentError::InvalidShape {
                    id: shape.id,
                    source,
                })?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let doc: Self = serde_json::from_str(json)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Save to file, refreshing the modification time.
    pub fn save_to_file(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.metadata.modified = Utc::now();
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(
            "Saved {} shape(s) to {}",
            self.shapes.len(),
            path.display()
        );
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        let doc = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded {} shape(s) from {}",
            doc.shapes.len(),
            path.display()
        );
        Ok(doc)
    }

    /// Replace the engine's drawing and surface size with this document's.
    pub fn apply_to(&self, engine: &mut AnnotationEngine) -> Result<(), DocumentError> {
        self.validate()?;
        if engine.set_surface_size(self.width, self.height).is_err() {
            tracing::warn!(
                "Ignoring invalid surface size {}x{} in document",
                self.width,
                self.height
            );
        }
        engine.load_shapes(self.shapes.clone())
    }
}
