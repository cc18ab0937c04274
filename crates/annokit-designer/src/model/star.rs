use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, OutlineParams, Point};

const POINTS: usize = 5;

/// A five-pointed star with its top tip straight up from `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub center: Point,
    pub edge: Point,
}

impl Star {
    pub fn new(center: Point, edge: Point) -> Self {
        Self { center, edge }
    }

    pub fn outer_radius(&self) -> f64 {
        self.center.distance_to(&self.edge)
    }

    /// Alternating outer and inner vertices, 36° apart from -90°.
    pub fn vertices(&self, inner_ratio: f64) -> Vec<Point> {
        let outer = self.outer_radius();
        let inner = outer * inner_ratio;
        let step = std::f64::consts::PI / POINTS as f64;
        (0..POINTS * 2)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                let angle = -std::f64::consts::FRAC_PI_2 + step * i as f64;
                self.center.polar(r, angle)
            })
            .collect()
    }
}

impl AnnotationShape for Star {
    fn control_points(&self) -> Vec<Point> {
        vec![self.center, self.edge]
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn outline(&self, params: &OutlineParams) -> Path {
        let vertices = self.vertices(params.star_inner_ratio);
        let mut builder = Path::builder();
        builder.begin(vertices[0].to_lyon());
        for v in &vertices[1..] {
            builder.line_to(v.to_lyon());
        }
        builder.close();
        builder.build()
    }

    fn extend_to(&mut self, p: Point) {
        self.edge = p;
    }
}
