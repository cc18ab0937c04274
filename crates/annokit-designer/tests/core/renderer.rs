use annokit_core::Color;
use annokit_designer::{AnnotationEngine, PointerEvent, Style, Tool};
use image::RgbaImage;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn drag(engine: &mut AnnotationEngine, tool: Tool, from: (f64, f64), to: (f64, f64)) {
    engine.set_active_tool(tool);
    engine.pointer_down(PointerEvent::at(from.0, from.1));
    engine.pointer_move(PointerEvent::at(to.0, to.1));
    engine.pointer_up(PointerEvent::at(to.0, to.1));
}

/// Bounding box of every non-background pixel.
fn ink_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0 == WHITE {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

fn thin_engine() -> AnnotationEngine {
    let mut engine = AnnotationEngine::new();
    engine.set_surface_size(100.0, 100.0).unwrap();
    engine
        .set_style(Style::new(Color::BLACK, 1.0, 1.0, false).unwrap())
        .unwrap();
    engine
}

#[test]
fn test_redraw_is_idempotent() {
    let mut engine = thin_engine();
    drag(&mut engine, Tool::Star, (50.0, 50.0), (70.0, 50.0));
    drag(&mut engine, Tool::Arrow, (5.0, 90.0), (60.0, 80.0));
    drag(&mut engine, Tool::Freehand, (10.0, 10.0), (30.0, 25.0));

    let first = engine.render_to_image(100, 100).unwrap();
    let second = engine.render_to_image(100, 100).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rectangle_spans_its_corners_in_either_order() {
    let mut forward = thin_engine();
    drag(&mut forward, Tool::Rectangle, (10.0, 10.0), (50.0, 40.0));
    let mut backward = thin_engine();
    drag(&mut backward, Tool::Rectangle, (50.0, 40.0), (10.0, 10.0));

    let a = forward.render_to_image(100, 100).unwrap();
    let b = backward.render_to_image(100, 100).unwrap();
    assert_eq!(a, b);

    let (x0, y0, x1, y1) = ink_bounds(&a).unwrap();
    // A 1-unit stroke straddles each edge by half a pixel.
    assert!((9..=10).contains(&x0), "left edge at {x0}");
    assert!((9..=10).contains(&y0), "top edge at {y0}");
    assert!((49..=50).contains(&x1), "right edge at {x1}");
    assert!((39..=40).contains(&y1), "bottom edge at {y1}");
}

#[test]
fn test_high_dpi_render_scales_the_drawing() {
    let mut engine = thin_engine();
    drag(&mut engine, Tool::Rectangle, (10.0, 10.0), (50.0, 40.0));

    let img = engine.render_to_image(200, 200).unwrap();
    let (x0, _, x1, _) = ink_bounds(&img).unwrap();
    assert!((18..=20).contains(&x0), "left edge at {x0}");
    assert!((99..=101).contains(&x1), "right edge at {x1}");
}

#[test]
fn test_fill_only_for_closed_filled_shapes() {
    let mut engine = thin_engine();
    engine
        .set_style(Style::new(Color::BLACK, 1.0, 1.0, true).unwrap())
        .unwrap();
    drag(&mut engine, Tool::Circle, (50.0, 50.0), (70.0, 50.0));
    let img = engine.render_to_image(100, 100).unwrap();
    assert_eq!(img.get_pixel(50, 50).0, [0, 0, 0, 255]);

    let mut engine = thin_engine();
    drag(&mut engine, Tool::Circle, (50.0, 50.0), (70.0, 50.0));
    let img = engine.render_to_image(100, 100).unwrap();
    assert_eq!(img.get_pixel(50, 50).0, WHITE);
}

#[test]
fn test_opacity_blends_with_background() {
    let mut engine = thin_engine();
    engine
        .set_style(Style::new(Color::BLACK, 1.0, 0.5, true).unwrap())
        .unwrap();
    drag(&mut engine, Tool::Rectangle, (20.0, 20.0), (80.0, 80.0));
    let img = engine.render_to_image(100, 100).unwrap();
    let p = img.get_pixel(50, 50).0;
    assert!(p[0] > 100 && p[0] < 155, "blended red channel {}", p[0]);
    assert_eq!(p[3], 255);
}

#[test]
fn test_in_progress_shape_is_drawn() {
    let mut engine = thin_engine();
    engine.set_active_tool(Tool::Line);
    engine.pointer_down(PointerEvent::at(10.0, 50.0));
    engine.pointer_move(PointerEvent::at(90.0, 50.0));
    assert!(engine.shapes().is_empty());

    let img = engine.render_to_image(100, 100).unwrap();
    assert!(ink_bounds(&img).is_some());
}
