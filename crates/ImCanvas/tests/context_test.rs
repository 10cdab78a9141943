use std::sync::Arc;

use glam::Vec2;
use im_canvas::context::{Context, reset_global};
use im_canvas::{DrawList, Font, GridFont, SharedData, TextureId, context, context_mut};

#[test]
fn test_default_font_is_active_initially() {
    let ctx = Context::new();
    assert!(Arc::ptr_eq(&ctx.font(), ctx.default_font()));
}

#[test]
fn test_user_font_is_shared_not_owned() {
    let mut ctx = Context::new();
    let user: Arc<dyn Font> = Arc::new(GridFont::new(TextureId(7), Vec2::new(8.0, 16.0), 16, ' ', 95));
    ctx.set_font(&user);

    assert_eq!(ctx.font().atlas_texture_id(), TextureId(7));
    // The context holds only a weak handle.
    assert_eq!(Arc::strong_count(&user), 1);

    ctx.reset_font();
    assert_eq!(ctx.font().atlas_texture_id(), TextureId::default());
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn test_dropped_font_is_a_contract_violation() {
    let mut ctx = Context::new();
    let user: Arc<dyn Font> = Arc::new(GridFont::new(TextureId(7), Vec2::splat(8.0), 16, ' ', 95));
    ctx.set_font(&user);
    drop(user);
    // Release builds fall back to the default font.
    assert_eq!(ctx.font().atlas_texture_id(), TextureId::default());
}

#[test]
fn test_shared_data_override() {
    let mut ctx = Context::new();
    let mut custom = SharedData::default();
    custom.set_curve_tessellation_tolerance(0.5);
    let custom = Arc::new(custom);

    ctx.set_shared_data(Some(custom.clone()));
    assert!(Arc::ptr_eq(&ctx.shared_data(), &custom));

    ctx.set_shared_data(None);
    assert!(Arc::ptr_eq(&ctx.shared_data(), ctx.default_shared_data()));
}

// The global context is process-wide; everything touching it lives in one test.
#[test]
fn test_global_context() {
    reset_global();
    let default_tables = context().shared_data();

    let mut custom = SharedData::default();
    custom.set_circle_segment_max_error(1.0);
    let custom = Arc::new(custom);
    context_mut().set_shared_data(Some(custom.clone()));

    let list = DrawList::from_context();
    assert_eq!(list.shared_data().circle_segment_max_error(), 1.0);

    reset_global();
    assert!(!Arc::ptr_eq(&context().shared_data(), &custom));
    assert_eq!(
        context().shared_data().circle_segment_max_error(),
        default_tables.circle_segment_max_error()
    );
}
