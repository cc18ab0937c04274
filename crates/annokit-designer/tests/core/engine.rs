use annokit_core::shared;
use annokit_designer::{AnnotationEngine, Point, PointerEvent, Shape, ShapeKind, Tool};
use proptest::prelude::*;

fn drag(engine: &mut AnnotationEngine, tool: Tool, from: (f64, f64), to: (f64, f64)) {
    engine.set_active_tool(tool);
    engine.pointer_down(PointerEvent::at(from.0, from.1));
    engine.pointer_move(PointerEvent::at(to.0, to.1));
    engine.pointer_up(PointerEvent::at(to.0, to.1));
}

fn tap(engine: &mut AnnotationEngine, tool: Tool, at: (f64, f64)) -> bool {
    engine.set_active_tool(tool);
    let redraw = engine.pointer_down(PointerEvent::at(at.0, at.1));
    engine.pointer_up(PointerEvent::at(at.0, at.1));
    redraw
}

#[test]
fn test_rectangle_scenario() {
    let mut engine = AnnotationEngine::new();
    drag(&mut engine, Tool::Rectangle, (10.0, 10.0), (50.0, 40.0));

    let shape = &engine.shapes()[0];
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(
        shape.points(),
        vec![Point::new(10.0, 10.0), Point::new(50.0, 40.0)]
    );
}

#[test]
fn test_long_session_undoes_back_to_empty() {
    let mut engine = AnnotationEngine::new();
    for i in 0..150 {
        let y = i as f64;
        drag(&mut engine, Tool::Line, (0.0, y), (10.0, y));
    }
    assert_eq!(engine.shapes().len(), 150);

    let mut undos = 0;
    while engine.undo() {
        undos += 1;
    }
    assert_eq!(undos, 150);
    assert!(engine.shapes().is_empty());
}

#[test]
fn test_draw_three_undo_two_draw_fourth() {
    let mut engine = AnnotationEngine::new();
    drag(&mut engine, Tool::Line, (0.0, 0.0), (10.0, 0.0));
    drag(&mut engine, Tool::Circle, (50.0, 50.0), (60.0, 50.0));
    drag(&mut engine, Tool::Star, (100.0, 100.0), (120.0, 100.0));
    assert!(engine.undo());
    assert!(engine.undo());
    drag(&mut engine, Tool::Arrow, (0.0, 100.0), (40.0, 100.0));

    let kinds: Vec<_> = engine.shapes().iter().map(Shape::kind).collect();
    assert_eq!(kinds, vec![ShapeKind::Line, ShapeKind::Arrow]);
    assert!(!engine.can_redo());
    assert!(!engine.redo());

    assert!(engine.undo());
    assert_eq!(engine.shapes().len(), 1);
    assert!(engine.undo());
    assert!(engine.shapes().is_empty());
    assert!(!engine.undo());
}

#[test]
fn test_select_prefers_topmost_and_respects_margin() {
    let mut engine = AnnotationEngine::new();
    // A spans (0,0)-(100,100); B spans (80,80)-(200,200).
    drag(&mut engine, Tool::Rectangle, (0.0, 0.0), (100.0, 100.0));
    drag(&mut engine, Tool::Rectangle, (80.0, 80.0), (200.0, 200.0));
    let a = engine.shapes()[0].id;
    let b = engine.shapes()[1].id;

    // Inside A's expanded box, outside B's.
    tap(&mut engine, Tool::Select, (105.0, 20.0));
    assert_eq!(engine.selected(), Some(a));

    // Inside both: topmost wins.
    tap(&mut engine, Tool::Select, (90.0, 90.0));
    assert_eq!(engine.selected(), Some(b));

    // Outside both clears.
    assert!(tap(&mut engine, Tool::Select, (400.0, 400.0)));
    assert_eq!(engine.selected(), None);
}

#[test]
fn test_switching_tool_clears_selection() {
    let mut engine = AnnotationEngine::new();
    drag(&mut engine, Tool::Line, (0.0, 0.0), (10.0, 10.0));
    tap(&mut engine, Tool::Select, (5.0, 5.0));
    assert!(engine.selected().is_some());
    engine.set_active_tool(Tool::Select);
    assert!(engine.selected().is_some());
    engine.set_active_tool(Tool::Freehand);
    assert_eq!(engine.selected(), None);
}

#[test]
fn test_one_notification_per_committed_mutation() {
    let mut engine = AnnotationEngine::new();
    let seen = shared(Vec::new());
    let sink = seen.clone();
    engine.on_shapes_change(move |shapes| sink.borrow_mut().push(shapes.len()));

    drag(&mut engine, Tool::Freehand, (0.0, 0.0), (10.0, 10.0));
    drag(&mut engine, Tool::Circle, (50.0, 50.0), (55.0, 50.0));
    tap(&mut engine, Tool::Eraser, (0.0, 0.0));
    engine.undo();
    engine.redo();
    tap(&mut engine, Tool::Select, (52.0, 50.0));
    engine.delete_selected();
    engine.clear_all();

    assert_eq!(seen.borrow().as_slice(), &[1, 2, 1, 2, 1, 0, 0]);
}

#[test]
fn test_style_changes_do_not_touch_existing_shapes() {
    let mut engine = AnnotationEngine::new();
    drag(&mut engine, Tool::Line, (0.0, 0.0), (10.0, 0.0));
    let before = engine.shapes()[0].style.clone();

    let mut style = engine.style().clone();
    style.stroke_width = 12.0;
    style.filled = true;
    engine.set_style(style).unwrap();
    drag(&mut engine, Tool::Circle, (0.0, 0.0), (10.0, 0.0));

    assert_eq!(engine.shapes()[0].style, before);
    assert_eq!(engine.shapes()[1].style.stroke_width, 12.0);
    assert!(engine.shapes()[1].style.filled);
}

#[derive(Debug, Clone)]
enum Input {
    Tool(Tool),
    Down(f64, f64),
    Move(f64, f64),
    Up,
    Leave,
    Undo,
    Redo,
    Clear,
    Delete,
}

fn tool() -> impl Strategy<Value = Tool> {
    prop_oneof![
        Just(Tool::Select),
        Just(Tool::Freehand),
        Just(Tool::Line),
        Just(Tool::Arrow),
        Just(Tool::Circle),
        Just(Tool::Rectangle),
        Just(Tool::Triangle),
        Just(Tool::Star),
        Just(Tool::Eraser),
    ]
}

fn input() -> impl Strategy<Value = Input> {
    let coord = 0.0f64..200.0;
    prop_oneof![
        tool().prop_map(Input::Tool),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Input::Down(x, y)),
        (coord.clone(), coord).prop_map(|(x, y)| Input::Move(x, y)),
        Just(Input::Up),
        Just(Input::Leave),
        Just(Input::Undo),
        Just(Input::Redo),
        Just(Input::Clear),
        Just(Input::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_committed_shapes_keep_cardinality_and_unique_ids(
        inputs in proptest::collection::vec(input(), 0..80)
    ) {
        let mut engine = AnnotationEngine::new();
        for input in inputs {
            let before = engine.shapes().len();
            let erasing_down = engine.tool() == Tool::Eraser && matches!(input, Input::Down(..));
            match input {
                Input::Tool(t) => engine.set_active_tool(t),
                Input::Down(x, y) => { engine.pointer_down(PointerEvent::at(x, y)); }
                Input::Move(x, y) => { engine.pointer_move(PointerEvent::at(x, y)); }
                Input::Up => { engine.pointer_up(PointerEvent::at(0.0, 0.0)); }
                Input::Leave => { engine.pointer_leave(PointerEvent::at(0.0, 0.0)); }
                Input::Undo => { engine.undo(); }
                Input::Redo => { engine.redo(); }
                Input::Clear => engine.clear_all(),
                Input::Delete => { engine.delete_selected(); }
            }
            if erasing_down {
                prop_assert!(before - engine.shapes().len() <= 1);
            }

            let mut ids = std::collections::HashSet::new();
            for shape in engine.shapes() {
                prop_assert!(ids.insert(shape.id));
                let n = shape.points().len();
                if shape.kind() == ShapeKind::Freehand {
                    prop_assert!(n >= 1);
                } else {
                    prop_assert_eq!(n, 2);
                }
            }
        }
    }
}
