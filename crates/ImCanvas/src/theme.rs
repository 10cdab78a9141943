//! # Theme
//!
//! Named styling constants consumed when emitting widget-shaped primitives.
//! A theme is plain data; clone it freely.

use std::ops::{Index, IndexMut};
use std::path::PathBuf;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::Extent;

/// Slot in the theme's color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeCategory {
    Text,
    TextDisabled,
    WindowBackground,
    Border,
    TitleBackground,
    TitleBackgroundActive,
    Button,
    ButtonHovered,
    ButtonActive,
    ResizeGrip,
    ResizeGripHovered,
    Separator,
}

impl ThemeCategory {
    pub const COUNT: usize = 12;

    pub const ALL: [ThemeCategory; Self::COUNT] = [
        Self::Text,
        Self::TextDisabled,
        Self::WindowBackground,
        Self::Border,
        Self::TitleBackground,
        Self::TitleBackgroundActive,
        Self::Button,
        Self::ButtonHovered,
        Self::ButtonActive,
        Self::ResizeGrip,
        Self::ResizeGripHovered,
        Self::Separator,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font_path: PathBuf,
    pub font_size: f32,
    pub title_bar_height: f32,
    pub window_rounding: f32,
    pub window_padding: Extent,
    pub window_min_size: Extent,
    pub window_border_size: f32,
    pub resize_grip_size: f32,
    pub item_spacing: Extent,
    pub item_inner_spacing: Extent,
    pub frame_rounding: f32,
    pub colors: [Color; ThemeCategory::COUNT],
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Index<ThemeCategory> for Theme {
    type Output = Color;

    fn index(&self, category: ThemeCategory) -> &Color {
        &self.colors[category.index()]
    }
}

impl IndexMut<ThemeCategory> for Theme {
    fn index_mut(&mut self, category: ThemeCategory) -> &mut Color {
        &mut self.colors[category.index()]
    }
}

impl Theme {
    /// Dark theme used when the host supplies nothing else.
    pub fn default_theme() -> Self {
        let mut colors = [Color::BLACK; ThemeCategory::COUNT];
        let mut set = |c: ThemeCategory, r, g, b, a| colors[c.index()] = Color::from_rgba8(r, g, b, a);
        set(ThemeCategory::Text, 230, 230, 230, 255);
        set(ThemeCategory::TextDisabled, 128, 128, 128, 255);
        set(ThemeCategory::WindowBackground, 15, 15, 18, 240);
        set(ThemeCategory::Border, 110, 110, 128, 128);
        set(ThemeCategory::TitleBackground, 10, 10, 10, 255);
        set(ThemeCategory::TitleBackgroundActive, 41, 74, 122, 255);
        set(ThemeCategory::Button, 66, 150, 250, 102);
        set(ThemeCategory::ButtonHovered, 66, 150, 250, 255);
        set(ThemeCategory::ButtonActive, 15, 135, 250, 255);
        set(ThemeCategory::ResizeGrip, 66, 150, 250, 51);
        set(ThemeCategory::ResizeGripHovered, 66, 150, 250, 171);
        set(ThemeCategory::Separator, 110, 110, 128, 128);

        Self {
            font_path: PathBuf::from("fonts/default.ttf"),
            font_size: 13.0,
            title_bar_height: 19.0,
            window_rounding: 4.0,
            window_padding: Vec2::new(8.0, 8.0),
            window_min_size: Vec2::new(32.0, 32.0),
            window_border_size: 1.0,
            resize_grip_size: 12.0,
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: Vec2::new(4.0, 4.0),
            frame_rounding: 2.0,
            colors,
        }
    }

    /// A light, square-cornered variant. Differs from the default in every
    /// color and metric so tests can tell the two apart.
    pub fn another_theme_for_test() -> Self {
        let mut colors = [Color::WHITE; ThemeCategory::COUNT];
        let mut set = |c: ThemeCategory, r, g, b, a| colors[c.index()] = Color::from_rgba8(r, g, b, a);
        set(ThemeCategory::Text, 0, 0, 0, 255);
        set(ThemeCategory::TextDisabled, 153, 153, 153, 255);
        set(ThemeCategory::WindowBackground, 240, 240, 240, 255);
        set(ThemeCategory::Border, 0, 0, 0, 77);
        set(ThemeCategory::TitleBackground, 245, 245, 245, 255);
        set(ThemeCategory::TitleBackgroundActive, 209, 209, 209, 255);
        set(ThemeCategory::Button, 200, 200, 200, 255);
        set(ThemeCategory::ButtonHovered, 180, 200, 240, 255);
        set(ThemeCategory::ButtonActive, 150, 180, 240, 255);
        set(ThemeCategory::ResizeGrip, 90, 90, 90, 40);
        set(ThemeCategory::ResizeGripHovered, 90, 90, 90, 160);
        set(ThemeCategory::Separator, 99, 99, 99, 158);

        Self {
            font_path: PathBuf::from("fonts/test.ttf"),
            font_size: 16.0,
            title_bar_height: 24.0,
            window_rounding: 0.0,
            window_padding: Vec2::new(4.0, 4.0),
            window_min_size: Vec2::new(64.0, 48.0),
            window_border_size: 2.0,
            resize_grip_size: 16.0,
            item_spacing: Vec2::new(6.0, 6.0),
            item_inner_spacing: Vec2::new(2.0, 2.0),
            frame_rounding: 0.0,
            colors,
        }
    }

    pub fn color(&self, category: ThemeCategory) -> Color {
        self[category]
    }

    pub fn set_color(&mut self, category: ThemeCategory, color: Color) {
        self[category] = color;
    }
}
