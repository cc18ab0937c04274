use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, OutlineParams, Point};

/// A segment with a two-stroke head at `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
}

impl Arrow {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction of the shaft in radians, measured from +x with y down.
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// Far ends of the two head strokes.
    pub fn head_points(&self, params: &OutlineParams) -> [Point; 2] {
        let angle = self.angle();
        let spread = params.arrow_head_angle_deg.to_radians();
        let len = params.arrow_head_length;
        [
            Point::new(
                self.end.x - len * (angle - spread).cos(),
                self.end.y - len * (angle - spread).sin(),
            ),
            Point::new(
                self.end.x - len * (angle + spread).cos(),
                self.end.y - len * (angle + spread).sin(),
            ),
        ]
    }
}

impl AnnotationShape for Arrow {
    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn outline(&self, params: &OutlineParams) -> Path {
        let tip = self.end.to_lyon();
        let mut builder = Path::builder();
        builder.begin(self.start.to_lyon());
        builder.line_to(tip);
        builder.end(false);
        for head in self.head_points(params) {
            builder.begin(tip);
            builder.line_to(head.to_lyon());
            builder.end(false);
        }
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.end = p;
    }
}
