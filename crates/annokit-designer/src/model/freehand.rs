use lyon::path::Path;
use serde::{Deserialize, Serialize};

use annokit_core::GeometryError;

use super::{AnnotationShape, OutlineParams, Point};

/// A freehand stroke: the pointer samples in arrival order, never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FreehandRepr")]
pub struct Freehand {
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct FreehandRepr {
    points: Vec<Point>,
}

impl TryFrom<FreehandRepr> for Freehand {
    type Error = GeometryError;

    fn try_from(repr: FreehandRepr) -> Result<Self, Self::Error> {
        Freehand::from_points(repr.points)
    }
}

impl Freehand {
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn from_points(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::Cardinality {
                kind: "freehand".to_string(),
                expected: "at least 1".to_string(),
                actual: 0,
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

impl AnnotationShape for Freehand {
    fn control_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn outline(&self, _params: &OutlineParams) -> Path {
        let mut builder = Path::builder();
        let first = self.points[0].to_lyon();
        builder.begin(first);
        if self.points.len() == 1 {
            // A tap leaves a dot under round caps.
            builder.line_to(first);
        }
        for p in &self.points[1..] {
            builder.line_to(p.to_lyon());
        }
        builder.end(false);
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.push(p);
    }
}
