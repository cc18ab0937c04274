//! Logical surface size and device-to-logical coordinate mapping.
//!
//! Shapes live in logical surface units. Hosts deliver pointer positions in
//! device pixels relative to the surface as it is currently rendered, which
//! may be larger (high-DPI) or smaller (scaled down) than the logical size.

use crate::model::Point;

/// The logical drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport with the given logical dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Gets the logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Gets the logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the logical dimensions (typically called when the host resizes).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Ratio of logical units per device pixel on each axis for a surface
    /// rendered at `rendered_width` x `rendered_height`. Degenerate sizes map
    /// 1:1.
    pub fn device_to_logical_scale(&self, rendered_width: f64, rendered_height: f64) -> (f64, f64) {
        let axis = |logical: f64, rendered: f64| {
            if rendered > 0.0 && rendered.is_finite() && logical > 0.0 {
                logical / rendered
            } else {
                1.0
            }
        };
        (
            axis(self.width, rendered_width),
            axis(self.height, rendered_height),
        )
    }

    /// Converts a device-pixel position on the rendered surface into logical
    /// surface coordinates.
    pub fn to_logical(&self, device: Point, rendered_width: f64, rendered_height: f64) -> Point {
        let (sx, sy) = self.device_to_logical_scale(rendered_width, rendered_height);
        Point::new(device.x * sx, device.y * sy)
    }

    /// Scale factors that map logical units onto a pixmap of the given size.
    pub fn logical_to_pixels(&self, pixel_width: u32, pixel_height: u32) -> (f32, f32) {
        let (sx, sy) = self.device_to_logical_scale(pixel_width as f64, pixel_height as f64);
        ((1.0 / sx) as f32, (1.0 / sy) as f32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
