use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, OutlineParams, Point};

/// A straight segment from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl AnnotationShape for Line {
    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn outline(&self, _params: &OutlineParams) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.start.to_lyon());
        builder.line_to(self.end.to_lyon());
        builder.end(false);
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.end = p;
    }
}
