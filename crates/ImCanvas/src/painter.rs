//! # Painter
//!
//! Widget-shaped primitives (window frames, buttons, separators) built from
//! draw list calls and styled by a [`Theme`]. Widgets hold no state; the host
//! decides interaction and passes the result in, e.g. as a [`ButtonState`].

use glam::Vec2;

use crate::draw_list::DrawList;
use crate::font::Font;
use crate::input::Mouse;
use crate::math::{Corners, Rect};
use crate::theme::{Theme, ThemeCategory};

/// Interaction state of a button, selecting its palette entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Active,
}

impl ButtonState {
    /// Derives the state from where the mouse is and whether it is held.
    pub fn from_mouse(mouse: &Mouse, rect: &Rect) -> Self {
        if !mouse.is_position_valid() || !rect.contains(mouse.position()) {
            ButtonState::Normal
        } else if mouse.is_down() {
            ButtonState::Active
        } else {
            ButtonState::Hovered
        }
    }

    fn category(self) -> ThemeCategory {
        match self {
            ButtonState::Normal => ThemeCategory::Button,
            ButtonState::Hovered => ThemeCategory::ButtonHovered,
            ButtonState::Active => ThemeCategory::ButtonActive,
        }
    }
}

/// Emits widget-shaped primitives styled by a [`Theme`].
///
/// The `Painter` owns no state: every call translates one widget into
/// draw list calls (backgrounds, borders, labels) in back-to-front order.
pub struct Painter;

impl Painter {
    /// Draws a window: background, title bar with its label, border and
    /// bottom-right resize grip. `rect` grows to `theme.window_min_size` if
    /// smaller.
    ///
    /// Returns the content area inside the title bar and padding.
    pub fn window_frame(
        list: &mut DrawList,
        theme: &Theme,
        font: &dyn Font,
        rect: Rect,
        title: &str,
        focused: bool,
    ) -> Rect {
        let min = rect.min;
        let max = min + rect.size().max(theme.window_min_size);
        let rounding = theme.window_rounding;

        list.rect_filled(min, max, theme[ThemeCategory::WindowBackground], rounding, Corners::ALL);

        let title_bar = Rect::from_points(min, Vec2::new(max.x, min.y + theme.title_bar_height));
        let title_color = if focused {
            theme[ThemeCategory::TitleBackgroundActive]
        } else {
            theme[ThemeCategory::TitleBackground]
        };
        list.rect_filled(title_bar.min, title_bar.max, title_color, rounding, Corners::TOP);

        if !title.is_empty() {
            let text_pos = Vec2::new(
                min.x + theme.window_padding.x,
                min.y + (theme.title_bar_height - theme.font_size) * 0.5,
            );
            list.push_clip_rect(title_bar, true);
            list.text(font, theme.font_size, text_pos, theme[ThemeCategory::Text], title);
            list.pop_clip_rect();
        }

        if theme.window_border_size > 0.0 {
            list.rect(
                min,
                max,
                theme[ThemeCategory::Border],
                rounding,
                Corners::ALL,
                theme.window_border_size,
            );
        }

        let grip = theme.resize_grip_size;
        if grip > 0.0 {
            list.triangle_filled(
                Vec2::new(max.x, max.y - grip),
                max,
                Vec2::new(max.x - grip, max.y),
                theme[ThemeCategory::ResizeGrip],
            );
        }

        Rect::from_points(
            min + Vec2::new(theme.window_padding.x, theme.title_bar_height + theme.window_padding.y),
            (max - theme.window_padding).max(min),
        )
    }

    /// Draws a framed button with its label centered and clipped to the frame.
    pub fn button(
        list: &mut DrawList,
        theme: &Theme,
        font: &dyn Font,
        rect: Rect,
        label: &str,
        state: ButtonState,
    ) {
        list.rect_filled(
            rect.min,
            rect.max,
            theme[state.category()],
            theme.frame_rounding,
            Corners::ALL,
        );
        if label.is_empty() {
            return;
        }
        let label_size = font.measure(theme.font_size, label);
        let pos = rect.center() - label_size * 0.5;
        list.push_clip_rect(rect, true);
        list.text(font, theme.font_size, pos, theme[ThemeCategory::Text], label);
        list.pop_clip_rect();
    }

    /// A horizontal rule across `rect` at its vertical center.
    pub fn separator(list: &mut DrawList, theme: &Theme, rect: Rect) {
        let y = rect.center().y;
        list.line(
            Vec2::new(rect.min.x, y),
            Vec2::new(rect.max.x, y),
            theme[ThemeCategory::Separator],
            1.0,
        );
    }
}
