use pixel_paint::core::Button;
use pixel_paint::render::{RecordingPicker, RecordingSurface};
use pixel_paint::{InputEvent, PaintConfig, PaintCore};

#[test]
fn paint_smoke_drag_across_a_row() {
    let mut core = PaintCore::new(800, 600);
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut picker = RecordingPicker::new("#2d2d2d");

    core.push_event(InputEvent::ColorChanged("#ff8800".to_string()));
    core.button_down(Button::Primary);
    for step in 0..16 {
        core.pointer_move(step as f64 * 50.0 + 10.0, 20.0);
        core.render_frame(&mut surface, Some(&mut picker)).unwrap();
    }
    core.button_up();
    core.render_frame(&mut surface, Some(&mut picker)).unwrap();

    assert_eq!(core.shape_count(), 16);
    assert!(core.shapes().iter().all(|s| s.color() == "#ff8800"));
    assert!(core.links_consistent());
    assert_eq!(core.frame(), 17);
    assert!(core.last_frame_stats().frame_ms >= 0.0);
}

#[test]
fn paint_smoke_resize_mid_session() {
    let config = PaintConfig::from_json(r#"{ "cell_size": 25 }"#).unwrap();
    let mut core = PaintCore::with_config(200, 100, config).unwrap();
    let mut surface = RecordingSurface::new(200.0, 100.0);

    core.pointer_move(30.0, 30.0);
    core.button_down(Button::Primary);
    core.render_frame(&mut surface, None).unwrap();
    assert_eq!(core.shape_count(), 1);

    core.button_up();
    core.resize(100, 100);
    surface.resize(100.0, 100.0);
    let stats = core.render_frame(&mut surface, None).unwrap();

    assert_eq!(core.shape_count(), 0);
    assert_eq!(stats.cells_drawn, 5 * 5);
    assert_eq!(stats.shapes_drawn, 0);
}
