use im_canvas::{Color, Theme, ThemeCategory, ThemeError};

#[test]
fn test_themes_differ() {
    let a = Theme::default_theme();
    let b = Theme::another_theme_for_test();
    assert_ne!(a, b);
    for category in ThemeCategory::ALL {
        assert_ne!(a[category], b[category], "{category:?} is shared");
    }
    assert_eq!(a.title_bar_height, 19.0);
    assert_eq!(b.window_rounding, 0.0);
}

#[test]
fn test_category_indexing() {
    let mut theme = Theme::default();
    theme[ThemeCategory::Button] = Color::RED;
    assert_eq!(theme.color(ThemeCategory::Button), Color::RED);

    theme.set_color(ThemeCategory::Separator, Color::GREEN);
    assert_eq!(theme.colors[ThemeCategory::Separator.index()], Color::GREEN);

    let indices: Vec<usize> = ThemeCategory::ALL.iter().map(|c| c.index()).collect();
    assert_eq!(indices, (0..ThemeCategory::COUNT).collect::<Vec<_>>());
}

#[test]
fn test_json_round_trip_through_file() {
    let dir = std::env::temp_dir().join(format!("im_canvas_theme_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("theme.json");

    let mut theme = Theme::another_theme_for_test();
    theme.font_size = 21.0;
    theme.save(&path).expect("save theme");

    let loaded = Theme::load(&path).expect("load theme");
    assert_eq!(loaded, theme);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_json_is_reported() {
    let err = Theme::from_json_str("{ \"font_size\": ").unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)));

    let err = Theme::from_json_str("{ \"font_size\": 13.0 }").unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Theme::load("/definitely/not/a/theme.json").unwrap_err();
    assert!(matches!(err, ThemeError::Io(_)));
}
