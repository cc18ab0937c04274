use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, Bounds, OutlineParams, Point};

/// An axis-aligned rectangle spanned by two opposite corners in any order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub start: Point,
    pub end: Point,
}

impl Rectangle {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The corners normalised so width and height are non-negative.
    pub fn normalized(&self) -> Bounds {
        Bounds {
            min_x: self.start.x.min(self.end.x),
            min_y: self.start.y.min(self.end.y),
            max_x: self.start.x.max(self.end.x),
            max_y: self.start.y.max(self.end.y),
        }
    }
}

impl AnnotationShape for Rectangle {
    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn outline(&self, _params: &OutlineParams) -> Path {
        let r = self.normalized();
        let mut builder = Path::builder();
        builder.begin(Point::new(r.min_x, r.min_y).to_lyon());
        builder.line_to(Point::new(r.max_x, r.min_y).to_lyon());
        builder.line_to(Point::new(r.max_x, r.max_y).to_lyon());
        builder.line_to(Point::new(r.min_x, r.max_y).to_lyon());
        builder.close();
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.end = p;
    }
}
