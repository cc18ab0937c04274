//! Scene renderer for annotation shapes
//! Redraws the whole scene into a tiny-skia pixmap on every call.
//!
//! Draw order:
//! - Clear to the background colour
//! - Committed shapes in z-order
//! - The in-progress shape, if any
//! - A dashed rectangle around the selected shape's bounds

use annokit_core::RenderError;
use annokit_settings::RenderSettings;
use image::{Rgba, RgbaImage};
use lyon::path::Event;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash,
    Transform,
};

use crate::model::{AnnotationShape, Bounds, OutlineParams, Shape, ShapeId};
use crate::viewport::Viewport;

/// Everything the renderer needs to know about the current drawing.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub shapes: &'a [Shape],
    pub in_progress: Option<&'a Shape>,
    pub selected: Option<ShapeId>,
}

impl<'a> Scene<'a> {
    pub fn new(shapes: &'a [Shape]) -> Self {
        Self {
            shapes,
            in_progress: None,
            selected: None,
        }
    }

    fn selected_bounds(&self) -> Option<Bounds> {
        let id = self.selected?;
        self.shapes
            .iter()
            .find(|shape| shape.id == id)
            .map(Shape::bounds)
    }
}

/// Rasterises scenes with fixed colours and outline constants.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
    outline: OutlineParams,
}

impl Renderer {
    pub fn new(settings: RenderSettings, outline: OutlineParams) -> Self {
        Self { settings, outline }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Redraw `scene` into `pixmap`, scaling logical units to the pixmap size.
    pub fn render(&self, pixmap: &mut Pixmap, scene: &Scene<'_>, viewport: &Viewport) {
        let bg = self.settings.background;
        pixmap.fill(Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

        let (sx, sy) = viewport.logical_to_pixels(pixmap.width(), pixmap.height());
        let transform = Transform::from_scale(sx, sy);

        for shape in scene.shapes.iter().chain(scene.in_progress) {
            self.draw_shape(pixmap, shape, transform);
        }

        if let Some(bounds) = scene.selected_bounds() {
            self.draw_selection(pixmap, bounds, transform);
        }
    }

    /// Render `scene` into a fresh `width` x `height` pixel image.
    pub fn render_to_image(
        &self,
        scene: &Scene<'_>,
        viewport: &Viewport,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, RenderError> {
        if !(viewport.width() > 0.0 && viewport.height() > 0.0) {
            return Err(RenderError::InvalidLogicalSize {
                width: viewport.width(),
                height: viewport.height(),
            });
        }
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSurface { width, height })?;
        self.render(&mut pixmap, scene, viewport);
        Ok(pixmap_to_image(&pixmap))
    }

    fn draw_shape(&self, pixmap: &mut Pixmap, shape: &Shape, transform: Transform) {
        let Some(path) = to_skia_path(&shape.geometry.outline(&self.outline)) else {
            return;
        };

        let c = shape.style.color;
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(c.r, c.g, c.b, shape.style.alpha()));
        paint.anti_alias = true;

        if shape.is_filled() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }

        let mut stroke = Stroke {
            width: shape.style.stroke_width as f32,
            ..Default::default()
        };
        if !shape.geometry.is_closed() {
            stroke.line_cap = LineCap::Round;
            stroke.line_join = LineJoin::Round;
        }
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn draw_selection(&self, pixmap: &mut Pixmap, bounds: Bounds, transform: Transform) {
        let b = bounds.expanded(self.settings.selection_padding);
        let mut pb = PathBuilder::new();
        pb.move_to(b.min_x as f32, b.min_y as f32);
        pb.line_to(b.max_x as f32, b.min_y as f32);
        pb.line_to(b.max_x as f32, b.max_y as f32);
        pb.line_to(b.min_x as f32, b.max_y as f32);
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let c = self.settings.selection_color;
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba8(c.r, c.g, c.b, c.a));
        paint.anti_alias = true;

        let stroke = Stroke {
            width: self.settings.selection_stroke_width,
            dash: StrokeDash::new(self.settings.selection_dash.clone(), 0.0),
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }
}

/// Convert a lyon path into a tiny-skia path. Returns `None` for paths with
/// too few points to draw.
pub fn to_skia_path(path: &lyon::path::Path) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => pb.move_to(at.x, at.y),
            Event::Line { to, .. } => pb.line_to(to.x, to.y),
            Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

/// Copy a premultiplied pixmap into a straight-alpha RGBA image.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}
