use glam::Vec2;
use im_canvas::{Mouse, MouseConfig, MouseState};

fn mouse() -> Mouse {
    Mouse::new(MouseConfig {
        double_click_interval: 0.3,
        double_click_distance: 5.0,
    })
}

fn press(mouse: &mut Mouse, at: Vec2, dt: f32) {
    mouse.move_to(at);
    mouse.set_down(true);
    mouse.tick(dt);
}

fn release(mouse: &mut Mouse, dt: f32) {
    mouse.set_down(false);
    mouse.tick(dt);
}

/// Clicks at `first`, waits until `elapsed` seconds have passed since that
/// click, then clicks at `second`. Returns the mouse after the second press.
fn click_twice(first: Vec2, second: Vec2, elapsed: f32) -> Mouse {
    let mut m = mouse();
    press(&mut m, first, 0.01);
    assert!(m.is_clicked());
    assert!(!m.is_double_clicked());

    release(&mut m, 0.05);
    release(&mut m, elapsed - 0.06);
    press(&mut m, second, 0.01);
    m
}

#[test]
fn test_double_click_accepted() {
    let m = click_twice(Vec2::new(10.0, 10.0), Vec2::new(11.0, 10.0), 0.2);
    assert!(m.is_clicked());
    assert!(m.is_double_clicked());
}

#[test]
fn test_double_click_rejected_by_distance() {
    let m = click_twice(Vec2::new(10.0, 10.0), Vec2::new(30.0, 10.0), 0.2);
    assert!(m.is_clicked());
    assert!(!m.is_double_clicked());
    // The rejected click opens a new window at its own position.
    assert_eq!(m.clicked_position(), Vec2::new(30.0, 10.0));
    assert_eq!(m.click_duration(), 0.0);
}

#[test]
fn test_double_click_rejected_by_interval() {
    let m = click_twice(Vec2::new(10.0, 10.0), Vec2::new(11.0, 10.0), 0.5);
    assert!(m.is_clicked());
    assert!(!m.is_double_clicked());
}

#[test]
fn test_third_click_does_not_pair_with_second() {
    let mut m = click_twice(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), 0.1);
    assert!(m.is_double_clicked());

    release(&mut m, 0.05);
    press(&mut m, Vec2::new(10.0, 10.0), 0.01);
    assert!(m.is_clicked());
    assert!(!m.is_double_clicked());
}

#[test]
fn test_flags_last_one_tick() {
    let mut m = mouse();
    press(&mut m, Vec2::ZERO, 0.016);
    assert!(m.is_clicked());
    assert_eq!(m.state(), MouseState::Pressed);

    m.tick(0.016);
    assert!(!m.is_clicked());
    assert_eq!(m.state(), MouseState::Held);
    assert!((m.down_duration() - 0.016).abs() < 1e-6);

    release(&mut m, 0.016);
    assert_eq!(m.state(), MouseState::Idle);
    assert!(m.down_duration() < 0.0);
}

#[test]
fn test_position_delta_needs_two_positions() {
    let mut m = mouse();
    assert!(!m.is_position_valid());
    assert_eq!(m.position_delta(), Vec2::ZERO);

    m.move_to(Vec2::new(5.0, 5.0));
    assert!(m.is_position_valid());
    assert_eq!(m.position_delta(), Vec2::ZERO);

    m.tick(0.016);
    m.move_to(Vec2::new(8.0, 1.0));
    assert_eq!(m.position_delta(), Vec2::new(3.0, -4.0));
    m.tick(0.016);
    assert_eq!(m.position_delta(), Vec2::ZERO);
}

#[test]
fn test_drag_delta_while_held() {
    let mut m = mouse();
    press(&mut m, Vec2::new(10.0, 10.0), 0.016);
    m.move_to(Vec2::new(25.0, 4.0));
    m.tick(0.016);
    assert_eq!(m.drag_delta(), Vec2::new(15.0, -6.0));

    release(&mut m, 0.016);
    assert_eq!(m.drag_delta(), Vec2::ZERO);
}

#[test]
fn test_config_defaults() {
    let m = Mouse::default();
    assert_eq!(m.config.double_click_interval, 0.30);
    assert_eq!(m.config.double_click_distance, 6.0);
}
