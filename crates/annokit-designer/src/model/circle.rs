use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, OutlineParams, Point};

/// A circle through `edge` centred on `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub edge: Point,
}

impl Circle {
    pub fn new(center: Point, edge: Point) -> Self {
        Self { center, edge }
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.edge)
    }
}

impl AnnotationShape for Circle {
    fn control_points(&self) -> Vec<Point> {
        vec![self.center, self.edge]
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn outline(&self, _params: &OutlineParams) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            self.center.to_lyon(),
            self.radius() as f32,
            Winding::Positive,
        );
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.edge = p;
    }
}
