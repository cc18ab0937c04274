use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

use annokit_core::GeometryError;

mod arrow;
mod circle;
mod freehand;
mod line;
mod rectangle;
mod star;
mod style;
mod triangle;

pub use arrow::Arrow;
pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use star::Star;
pub use style::{Animation, Style};
pub use triangle::Triangle;

/// Unique identifier of a shape within one editing session.
pub type ShapeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn to_lyon(self) -> lyon::math::Point {
        lyon::math::point(self.x as f32, self.y as f32)
    }

    /// Point at `radius` from `self` in direction `angle` (radians, y down).
    pub(crate) fn polar(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

/// Axis-aligned bounding box in logical surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn expanded(&self, margin: f64) -> Self {
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Constants that shape the outlines of arrows and stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    pub arrow_head_length: f64,
    pub arrow_head_angle_deg: f64,
    pub star_inner_ratio: f64,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            arrow_head_length: 15.0,
            arrow_head_angle_deg: 30.0,
            star_inner_ratio: 0.4,
        }
    }
}

impl From<&annokit_settings::EngineSettings> for OutlineParams {
    fn from(engine: &annokit_settings::EngineSettings) -> Self {
        Self {
            arrow_head_length: engine.arrow_head_length,
            arrow_head_angle_deg: engine.arrow_head_angle_deg,
            star_inner_ratio: engine.star_inner_ratio,
        }
    }
}

/// Common behaviour of every shape kind.
pub trait AnnotationShape {
    /// The control points in their stored order.
    fn control_points(&self) -> Vec<Point>;

    /// Whether the outline is closed and may be filled.
    fn is_closed(&self) -> bool;

    /// The outline in logical surface units.
    fn outline(&self, params: &OutlineParams) -> Path;

    /// Replace the trailing control point while a gesture is in progress.
    /// Freehand strokes append instead.
    fn extend_to(&mut self, p: Point);

    /// Bounding box of the control points (not of the rendered outline).
    fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.control_points()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Freehand,
    Line,
    Arrow,
    Circle,
    Rectangle,
    Triangle,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Freehand,
        ShapeKind::Line,
        ShapeKind::Arrow,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Freehand => "freehand",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific geometry. Each variant carries exactly the points its
/// kind needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Freehand(Freehand),
    Line(Line),
    Arrow(Arrow),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
    Star(Star),
}

impl Geometry {
    /// Geometry of a gesture that just started at `start`. Two-point kinds
    /// begin with coincident points.
    pub fn begin(kind: ShapeKind, start: Point) -> Self {
        match kind {
            ShapeKind::Freehand => Geometry::Freehand(Freehand::new(start)),
            ShapeKind::Line => Geometry::Line(Line::new(start, start)),
            ShapeKind::Arrow => Geometry::Arrow(Arrow::new(start, start)),
            ShapeKind::Circle => Geometry::Circle(Circle::new(start, start)),
            ShapeKind::Rectangle => Geometry::Rectangle(Rectangle::new(start, start)),
            ShapeKind::Triangle => Geometry::Triangle(Triangle::new(start, start)),
            ShapeKind::Star => Geometry::Star(Star::new(start, start)),
        }
    }

    /// Build geometry from a flat point list, checking the kind's cardinality.
    pub fn from_points(kind: ShapeKind, points: &[Point]) -> Result<Self, GeometryError> {
        if points.iter().any(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite {
                kind: kind.to_string(),
            });
        }
        if kind == ShapeKind::Freehand {
            return Freehand::from_points(points.to_vec()).map(Geometry::Freehand);
        }
        let [a, b] = points else {
            return Err(GeometryError::Cardinality {
                kind: kind.to_string(),
                expected: "2".to_string(),
                actual: points.len(),
            });
        };
        let mut geometry = Geometry::begin(kind, *a);
        geometry.extend_to(*b);
        Ok(geometry)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Freehand(_) => ShapeKind::Freehand,
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Arrow(_) => ShapeKind::Arrow,
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Triangle(_) => ShapeKind::Triangle,
            Geometry::Star(_) => ShapeKind::Star,
        }
    }

    /// Check that every control point is finite.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.control_points().iter().all(Point::is_finite) {
            Ok(())
        } else {
            Err(GeometryError::NonFinite {
                kind: self.kind().to_string(),
            })
        }
    }
}

impl AnnotationShape for Geometry {
    fn control_points(&self) -> Vec<Point> {
        match self {
            Geometry::Freehand(s) => s.control_points(),
            Geometry::Line(s) => s.control_points(),
            Geometry::Arrow(s) => s.control_points(),
            Geometry::Circle(s) => s.control_points(),
            Geometry::Rectangle(s) => s.control_points(),
            Geometry::Triangle(s) => s.control_points(),
            Geometry::Star(s) => s.control_points(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Geometry::Freehand(s) => s.is_closed(),
            Geometry::Line(s) => s.is_closed(),
            Geometry::Arrow(s) => s.is_closed(),
            Geometry::Circle(s) => s.is_closed(),
            Geometry::Rectangle(s) => s.is_closed(),
            Geometry::Triangle(s) => s.is_closed(),
            Geometry::Star(s) => s.is_closed(),
        }
    }

    fn outline(&self, params: &OutlineParams) -> Path {
        match self {
            Geometry::Freehand(s) => s.outline(params),
            Geometry::Line(s) => s.outline(params),
            Geometry::Arrow(s) => s.outline(params),
            Geometry::Circle(s) => s.outline(params),
            Geometry::Rectangle(s) => s.outline(params),
            Geometry::Triangle(s) => s.outline(params),
            Geometry::Star(s) => s.outline(params),
        }
    }

    fn extend_to(&mut self, p: Point) {
        match self {
            Geometry::Freehand(s) => s.extend_to(p),
            Geometry::Line(s) => s.extend_to(p),
            Geometry::Arrow(s) => s.extend_to(p),
            Geometry::Circle(s) => s.extend_to(p),
            Geometry::Rectangle(s) => s.extend_to(p),
            Geometry::Triangle(s) => s.extend_to(p),
            Geometry::Star(s) => s.extend_to(p),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Geometry::Freehand(s) => s.bounds(),
            Geometry::Line(s) => s.bounds(),
            Geometry::Arrow(s) => s.bounds(),
            Geometry::Circle(s) => s.bounds(),
            Geometry::Rectangle(s) => s.bounds(),
            Geometry::Triangle(s) => s.bounds(),
            Geometry::Star(s) => s.bounds(),
        }
    }
}

/// A drawn annotation: geometry plus the style it was created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Shape {
    pub fn new(id: ShapeId, geometry: Geometry, style: Style) -> Self {
        Self {
            id,
            geometry,
            style,
            animation: None,
        }
    }

    pub fn with_animation(mut self, animation: Option<Animation>) -> Self {
        self.animation = animation;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn points(&self) -> Vec<Point> {
        self.geometry.control_points()
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    /// Whether the renderer fills this shape before stroking it.
    pub fn is_filled(&self) -> bool {
        self.style.filled && self.geometry.is_closed()
    }
}
