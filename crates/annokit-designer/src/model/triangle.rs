use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, OutlineParams, Point};

/// Vertex angles in degrees, clockwise on screen from the top vertex.
const VERTEX_ANGLES_DEG: [f64; 3] = [-90.0, 150.0, 30.0];

/// An equilateral triangle inscribed in the circle through `edge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub center: Point,
    pub edge: Point,
}

impl Triangle {
    pub fn new(center: Point, edge: Point) -> Self {
        Self { center, edge }
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.edge)
    }

    pub fn vertices(&self) -> [Point; 3] {
        let r = self.radius();
        VERTEX_ANGLES_DEG.map(|deg| self.center.polar(r, deg.to_radians()))
    }
}

impl AnnotationShape for Triangle {
    fn control_points(&self) -> Vec<Point> {
        vec![self.center, self.edge]
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn outline(&self, _params: &OutlineParams) -> Path {
        let [a, b, c] = self.vertices();
        let mut builder = Path::builder();
        builder.begin(a.to_lyon());
        builder.line_to(b.to_lyon());
        builder.line_to(c.to_lyon());
        builder.close();
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.edge = p;
    }
}
