use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use im_canvas::{
    ButtonState, Color, Corners, DrawCmd, DrawData, DrawList, GridFont, Mouse, Painter, Rect,
    Theme, context,
};
use macroquad::prelude as mq;
use tracing_subscriber::EnvFilter;

/// Triangles per macroquad mesh; keeps each mesh under the batcher limits.
const TRIANGLES_PER_MESH: usize = 1500;

#[macroquad::main("ImCanvas Playground")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Shared state
    let theme = Theme::default_theme();
    let font = Arc::new(GridFont::default());
    let mut list = DrawList::new(context().shared_data());
    let mut mouse = Mouse::default();
    let mut presses = 0_u32;

    loop {
        let screen = Vec2::new(mq::screen_width(), mq::screen_height());

        // 2. Input
        let (mx, my) = mq::mouse_position();
        mouse.move_to(Vec2::new(mx, my));
        mouse.set_down(mq::is_mouse_button_down(mq::MouseButton::Left));
        mouse.tick(mq::get_frame_time());
        if mouse.is_double_clicked() {
            tracing::info!(position = ?mouse.position(), "double click");
        }

        // 3. Build the frame
        list.begin_frame();
        list.push_clip_rect(Rect::from_pos_size(Vec2::ZERO, screen), false);

        let window = Rect::from_pos_size(Vec2::new(40.0, 40.0), Vec2::new(360.0, 260.0));
        let content = Painter::window_frame(&mut list, &theme, font.as_ref(), window, "Playground", true);

        let button = Rect::from_pos_size(content.min, Vec2::new(120.0, 24.0));
        let state = ButtonState::from_mouse(&mouse, &button);
        if state != ButtonState::Normal && mouse.is_clicked() {
            presses += 1;
        }
        Painter::button(&mut list, &theme, font.as_ref(), button, "Click me", state);
        list.text(
            font.as_ref(),
            theme.font_size,
            content.min + Vec2::new(0.0, 34.0),
            theme[im_canvas::ThemeCategory::Text],
            &format!("presses: {presses}\ndrag: {:?}", mouse.drag_delta()),
        );

        let center = content.center() + Vec2::new(60.0, 30.0);
        list.circle_filled(center, 40.0, Color::from_rgba8(240, 120, 40, 200), 0);
        list.circle(center, 48.0, Color::WHITE, 0, 2.0);
        list.bezier_cubic(
            Vec2::new(content.min.x, content.max.y),
            Vec2::new(content.min.x + 100.0, content.min.y + 60.0),
            Vec2::new(mx, my),
            Vec2::new(content.max.x, content.max.y - 20.0),
            Color::from_rgba8(120, 200, 255, 255),
            3.0,
            0,
        );
        list.rect(content.min, content.max, theme[im_canvas::ThemeCategory::Border], 4.0, Corners::ALL, 1.0);

        list.pop_clip_rect();
        let data = list.end_frame();

        // 4. Render
        mq::clear_background(mq::DARKGRAY);
        for cmd in data.commands() {
            draw_command(&data, cmd);
        }
        set_scissor(None);

        mq::next_frame().await
    }
}

/// Uploads one command as a series of macroquad meshes.
fn draw_command(data: &DrawData, cmd: &DrawCmd) {
    let clip = cmd.clip_rect;
    if clip.is_empty() {
        return;
    }
    set_scissor(Some(clip));

    let indices = data.command_indices(cmd);
    for chunk in indices.chunks(TRIANGLES_PER_MESH * 3) {
        // Macroquad meshes use 16-bit indices; remap into a local vertex set.
        let mut remap: HashMap<u32, u16> = HashMap::new();
        let mut vertices = Vec::new();
        let mut local = Vec::with_capacity(chunk.len());
        for &index in chunk {
            let slot = *remap.entry(index).or_insert_with(|| {
                let v = data.vertices[index as usize];
                let [r, g, b, a] = v.color.to_rgba8();
                vertices.push(mq::Vertex::new(
                    v.pos.x,
                    v.pos.y,
                    0.0,
                    v.uv.x,
                    v.uv.y,
                    mq::Color::from_rgba(r, g, b, a),
                ));
                (vertices.len() - 1) as u16
            });
            local.push(slot);
        }
        // No atlas is uploaded for the grid font: every texture draws as
        // macroquad's white texture, so glyph quads show up as solid cells.
        mq::draw_mesh(&mq::Mesh {
            vertices,
            indices: local,
            texture: None,
        });
    }
}

fn set_scissor(clip: Option<Rect>) {
    let screen = Rect::from_pos_size(
        Vec2::ZERO,
        Vec2::new(mq::screen_width(), mq::screen_height()),
    );
    let scissor = clip.map(|rect| {
        let rect = rect.intersect(&screen);
        (
            rect.min.x as i32,
            rect.min.y as i32,
            rect.width() as i32,
            rect.height() as i32,
        )
    });
    // SAFETY: called from the main thread between macroquad frames.
    let mut gl = unsafe { macroquad::window::get_internal_gl() };
    gl.flush();
    gl.quad_gl.scissor(scissor);
}
