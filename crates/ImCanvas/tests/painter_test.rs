use std::sync::Arc;

use glam::Vec2;
use im_canvas::{
    ButtonState, DrawList, GridFont, Mouse, Painter, Rect, SharedData, Theme, ThemeCategory,
};

fn new_list() -> DrawList {
    let mut list = DrawList::new(Arc::new(SharedData::default()));
    list.begin_frame();
    list
}

#[test]
fn test_window_frame_clips_the_title() {
    let theme = Theme::default_theme();
    let font = GridFont::default();
    let mut list = new_list();
    let rect = Rect::from_pos_size(Vec2::new(20.0, 30.0), Vec2::new(200.0, 120.0));

    let content = Painter::window_frame(&mut list, &theme, &font, rect, "Inspector", true);
    assert_eq!(
        content.min,
        Vec2::new(20.0 + 8.0, 30.0 + theme.title_bar_height + 8.0)
    );
    assert_eq!(content.max, Vec2::new(220.0 - 8.0, 150.0 - 8.0));

    let data = list.end_frame();
    let clips: Vec<Rect> = data.commands().iter().map(|c| c.clip_rect).collect();
    let title_bar = Rect::from_points(
        Vec2::new(20.0, 30.0),
        Vec2::new(220.0, 30.0 + theme.title_bar_height),
    );
    assert_eq!(clips, vec![Rect::EVERYTHING, title_bar, Rect::EVERYTHING]);
    assert_eq!(data.vertices[0].color, theme[ThemeCategory::WindowBackground]);
}

#[test]
fn test_window_frame_honors_min_size() {
    let theme = Theme::another_theme_for_test();
    let font = GridFont::default();
    let mut list = new_list();
    let rect = Rect::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));

    let content = Painter::window_frame(&mut list, &theme, &font, rect, "", false);
    assert_eq!(content.max, theme.window_min_size - theme.window_padding);
}

#[test]
fn test_button_state_follows_mouse() {
    let rect = Rect::from_pos_size(Vec2::new(10.0, 10.0), Vec2::new(80.0, 20.0));
    let mut mouse = Mouse::default();
    assert_eq!(ButtonState::from_mouse(&mouse, &rect), ButtonState::Normal);

    mouse.move_to(Vec2::new(50.0, 20.0));
    mouse.tick(0.016);
    assert_eq!(ButtonState::from_mouse(&mouse, &rect), ButtonState::Hovered);

    mouse.set_down(true);
    mouse.tick(0.016);
    assert_eq!(ButtonState::from_mouse(&mouse, &rect), ButtonState::Active);

    mouse.move_to(Vec2::new(500.0, 20.0));
    mouse.tick(0.016);
    assert_eq!(ButtonState::from_mouse(&mouse, &rect), ButtonState::Normal);
}

#[test]
fn test_button_uses_state_color_and_clips_label() {
    let theme = Theme::default_theme();
    let font = GridFont::default();
    let mut list = new_list();
    let rect = Rect::from_pos_size(Vec2::new(10.0, 10.0), Vec2::new(80.0, 20.0));

    Painter::button(&mut list, &theme, &font, rect, "OK", ButtonState::Active);
    let data = list.end_frame();
    assert_eq!(data.vertices[0].color, theme[ThemeCategory::ButtonActive]);
    assert_eq!(data.commands().len(), 2);
    assert_eq!(data.commands()[1].clip_rect, rect);
}

#[test]
fn test_separator_is_a_hairline() {
    let theme = Theme::default_theme();
    let mut list = new_list();
    Painter::separator(&mut list, &theme, Rect::from_pos_size(Vec2::ZERO, Vec2::new(100.0, 9.0)));
    let data = list.end_frame();
    assert_eq!(data.total_vertex_count(), 6);
    assert_eq!(data.vertices[1].color, theme[ThemeCategory::Separator]);
    assert_eq!(data.vertices[1].pos.y, 4.5);
}
