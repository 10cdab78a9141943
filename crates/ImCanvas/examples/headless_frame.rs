use std::sync::Arc;

use glam::Vec2;
use im_canvas::{
    ButtonState, Color, Corners, DrawList, Ellipse, GridFont, Mouse, Painter, Rect, Theme,
    context,
};

fn main() {
    tracing_subscriber::fmt::init();
    println!("=== ImCanvas Headless Frame ===");

    // 1. Shared state
    let theme = Theme::default_theme();
    let font = Arc::new(GridFont::default());
    let mut list = DrawList::new(context().shared_data());
    let mut mouse = Mouse::default();

    // 2. Simulated frames: the cursor drifts onto the button and presses it
    for frame in 0..3 {
        let cursor = Vec2::new(40.0 + 30.0 * frame as f32, 80.0);
        mouse.move_to(cursor);
        mouse.set_down(frame == 2);
        mouse.tick(0.016);

        list.begin_frame();

        let window = Rect::from_pos_size(Vec2::new(20.0, 20.0), Vec2::new(320.0, 200.0));
        let content =
            Painter::window_frame(&mut list, &theme, font.as_ref(), window, "Headless", true);

        let button = Rect::from_pos_size(content.min + Vec2::new(0.0, 30.0), Vec2::new(96.0, 24.0));
        let state = ButtonState::from_mouse(&mouse, &button);
        Painter::button(&mut list, &theme, font.as_ref(), button, "Press", state);

        list.push_clip_rect(content, true);
        list.circle_filled(content.center(), 18.0, Color::from_rgba8(240, 120, 40, 255), 0);
        list.ellipse(
            &Ellipse::new(content.center(), Vec2::new(60.0, 24.0), 0.3),
            Color::WHITE,
            0,
            1.5,
        );
        list.bezier_cubic(
            content.min,
            content.min + Vec2::new(80.0, 0.0),
            content.max - Vec2::new(80.0, 0.0),
            content.max,
            Color::from_rgba8(120, 200, 255, 255),
            2.0,
            0,
        );
        list.rect(content.min, content.max, Color::WHITE, 6.0, Corners::ALL, 1.0);
        list.pop_clip_rect();

        let data = list.end_frame();
        println!(
            "\n--- Frame {frame} --- button {state:?}, {} vertices, {} indices",
            data.total_vertex_count(),
            data.total_index_count()
        );
        for (i, cmd) in data.commands().iter().enumerate() {
            println!(
                "  cmd {i}: texture {:?} {:?} indices {:?} clip {:?}..{:?}",
                cmd.texture_id,
                cmd.index_kind,
                cmd.index_range(),
                cmd.clip_rect.min,
                cmd.clip_rect.max
            );
        }
    }

    println!("\nDone.");
}
