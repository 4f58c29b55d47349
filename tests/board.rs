use cairo::{Context, ImageSurface};
use whiteboard::draw::color::WHITE;
use whiteboard::draw::{Shape, ShapeDefaults, ShapeKind, render_shape};
use whiteboard::input::{MouseButton, SurfaceSettings, Tool};
use whiteboard::{Config, DrawingSurface};

fn make_surface() -> DrawingSurface {
    let mut settings = Config::default().surface_settings();
    settings.width = 320;
    settings.height = 240;
    DrawingSurface::new(settings).unwrap()
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn stroke(surface: &mut DrawingSurface, from: (f64, f64), to: (f64, f64)) {
    surface.on_mouse_press(MouseButton::Left, from.0, from.1);
    surface.on_mouse_motion(to.0, to.1);
    surface.on_mouse_release(MouseButton::Left, to.0, to.1);
}

#[test]
fn every_shape_kind_renders_visible_pixels() {
    for kind in ShapeKind::ALL {
        let (mut surface, ctx) = surface_with_context(200, 200);
        let shape = Shape::from_drag(
            kind,
            (60.0, 120.0),
            (140.0, 160.0),
            WHITE,
            3.0,
            &ShapeDefaults::default(),
        );
        render_shape(&ctx, &shape);
        drop(ctx);
        assert!(surface_has_pixels(&mut surface), "{kind} drew nothing");
    }
}

#[test]
fn rectangle_scenario() {
    let mut surface = make_surface();
    surface.set_tool(Tool::Shape(ShapeKind::Rectangle));
    stroke(&mut surface, (10.0, 10.0), (100.0, 80.0));

    assert_eq!(surface.shapes().len(), 1);
    let Shape::Rectangle { x1, y1, x2, y2, .. } = surface.shapes()[0] else {
        panic!("expected rectangle, got {:?}", surface.shapes()[0]);
    };
    assert_eq!((x1, y1, x2, y2), (10.0, 10.0, 100.0, 80.0));
    assert!(surface.hit_test(50.0, 50.0).is_some());
    assert!(surface.hit_test(200.0, 200.0).is_none());
}

#[test]
fn two_strokes_and_two_undos_return_to_blank_board() {
    let mut surface = make_surface();
    let blank = surface.canvas_snapshot().unwrap();

    stroke(&mut surface, (20.0, 20.0), (300.0, 200.0));
    stroke(&mut surface, (20.0, 200.0), (300.0, 20.0));
    surface.undo();
    surface.undo();

    let after = surface.canvas_snapshot().unwrap();
    assert_eq!(after.pixels(), blank.pixels());
    assert_eq!(after.pixel(160, 110), Some([51, 51, 51, 255]));
}

#[test]
fn redo_is_dropped_by_next_gesture() {
    let mut surface = make_surface();
    stroke(&mut surface, (20.0, 20.0), (300.0, 200.0));
    assert!(surface.undo());

    surface.set_tool(Tool::Shape(ShapeKind::Polygon));
    stroke(&mut surface, (160.0, 120.0), (200.0, 120.0));

    assert!(!surface.redo());
    assert_eq!(surface.shapes().len(), 1);
}

#[test]
fn settings_default_matches_config_default() {
    assert_eq!(Config::default().surface_settings(), SurfaceSettings::default());
}

#[test]
fn exported_png_keeps_background() {
    let dir = tempfile::tempdir().unwrap();
    let surface = make_surface();
    let path = surface.export_png_to(&dir.path().join("board.png")).unwrap();

    let mut file = std::fs::File::open(path).unwrap();
    let mut decoded = ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!(decoded.width(), 320);
    // Background is exported as-is, not made transparent
    let data = decoded.data().unwrap();
    assert_eq!(data[3], 255);
}
