use annokit_core::DocumentError;
use annokit_designer::serialization::FILE_FORMAT_VERSION;
use annokit_designer::{Animation, AnnotationEngine, DrawingDocument, PointerEvent, Tool};
use tempfile::TempDir;

fn sample_engine() -> AnnotationEngine {
    let mut engine = AnnotationEngine::new();
    engine.set_surface_size(320.0, 200.0).unwrap();
    engine.set_animation(Some(Animation {
        kind: "draw-on".to_string(),
        duration_ms: 800,
        delay_ms: 100,
        looped: false,
    }));
    for (tool, from, to) in [
        (Tool::Freehand, (1.0, 1.0), (20.0, 30.0)),
        (Tool::Arrow, (40.0, 40.0), (90.0, 60.0)),
        (Tool::Triangle, (150.0, 100.0), (150.0, 130.0)),
    ] {
        engine.set_active_tool(tool);
        engine.pointer_down(PointerEvent::at(from.0, from.1));
        engine.pointer_move(PointerEvent::at(to.0, to.1));
        engine.pointer_up(PointerEvent::at(to.0, to.1));
    }
    engine
}

#[test]
fn test_save_and_load_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.json");

    let engine = sample_engine();
    let mut doc = DrawingDocument::from_engine("sample", &engine);
    doc.save_to_file(&path).unwrap();

    let loaded = DrawingDocument::load_from_file(&path).unwrap();
    assert_eq!(loaded.version, FILE_FORMAT_VERSION);
    assert_eq!(loaded.metadata.name, "sample");
    assert_eq!((loaded.width, loaded.height), (320.0, 200.0));
    assert_eq!(loaded.shapes, engine.shapes());
    assert_eq!(
        loaded.shapes[2].animation.as_ref().map(|a| a.kind.as_str()),
        Some("draw-on")
    );
}

#[test]
fn test_apply_document_to_fresh_engine() {
    let doc = DrawingDocument::from_engine("sample", &sample_engine());

    let mut engine = AnnotationEngine::new();
    let notified = annokit_core::shared(0usize);
    let sink = notified.clone();
    engine.on_shapes_change(move |shapes| *sink.borrow_mut() = shapes.len());

    doc.apply_to(&mut engine).unwrap();
    assert_eq!(*notified.borrow(), 3);
    assert_eq!(engine.viewport().width(), 320.0);
    assert!(!engine.can_undo());
    assert_eq!(engine.shapes(), doc.shapes.as_slice());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = DrawingDocument::load_from_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut doc = DrawingDocument::from_engine("dup", &sample_engine());
    doc.shapes[1].id = doc.shapes[0].id;
    let json = doc.to_json().unwrap();
    assert!(matches!(
        DrawingDocument::from_json(&json),
        Err(DocumentError::DuplicateId { .. })
    ));
}
