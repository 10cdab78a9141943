//! # Input Protocol
//!
//! Mouse state machine driven by the host loop. Each frame the host calls
//! [`Mouse::move_to`] and [`Mouse::set_down`] with the latest OS state, then
//! [`Mouse::tick`] with the elapsed time. Click and double-click flags are
//! valid for exactly the tick that produced them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MouseConfig;
use crate::math::{Extent, Point};

/// Sentinel for "no position yet" and "no duration running".
pub const UNSET: f32 = f32::MIN;

/// Button phase derived from `(down, down_duration)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseState {
    /// Button up.
    Idle,
    /// First tick with the button down; `clicked` is set on this tick.
    Pressed,
    /// Button held for at least one more tick.
    Held,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mouse {
    pub config: MouseConfig,
    position_current: Point,
    position_previous: Point,
    position_clicked: Point,
    down: bool,
    clicked: bool,
    double_clicked: bool,
    /// Seconds the button has been held, `UNSET` while up.
    down_duration: f32,
    /// Seconds since the last single click, `UNSET` when no double-click window is open.
    click_duration: f32,
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new(MouseConfig::default())
    }
}

impl Mouse {
    pub fn new(config: MouseConfig) -> Self {
        Self {
            config,
            position_current: Vec2::splat(UNSET),
            position_previous: Vec2::splat(UNSET),
            position_clicked: Vec2::splat(UNSET),
            down: false,
            clicked: false,
            double_clicked: false,
            down_duration: UNSET,
            click_duration: UNSET,
        }
    }

    /// Records the latest cursor position. Call before [`Mouse::tick`].
    pub fn move_to(&mut self, position: Point) {
        self.position_current = position;
    }

    /// Records the latest button state. Call before [`Mouse::tick`].
    pub fn set_down(&mut self, down: bool) {
        self.down = down;
    }

    /// Advances the state machine by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.position_previous = self.position_current;
        self.clicked = false;
        self.double_clicked = false;

        if self.click_duration >= 0.0 {
            self.click_duration += dt;
        }

        if self.down {
            if self.down_duration < 0.0 {
                self.clicked = true;
                self.down_duration = 0.0;
            } else {
                self.down_duration += dt;
            }
        } else {
            self.down_duration = UNSET;
        }

        if !self.clicked {
            return;
        }

        let within_interval = self.click_duration >= 0.0
            && self.click_duration <= self.config.double_click_interval;
        let within_distance = self.position_current.distance(self.position_clicked)
            <= self.config.double_click_distance;
        if within_interval && within_distance {
            self.double_clicked = true;
            // Closing the window keeps a third click from pairing with the second.
            self.click_duration = UNSET;
            tracing::trace!(position = ?self.position_current, "double click");
        } else {
            self.click_duration = 0.0;
            self.position_clicked = self.position_current;
            tracing::trace!(position = ?self.position_current, "click");
        }
    }

    pub fn position(&self) -> Point {
        self.position_current
    }

    pub fn previous_position(&self) -> Point {
        self.position_previous
    }

    pub fn clicked_position(&self) -> Point {
        self.position_clicked
    }

    /// False until the host has reported a cursor position.
    pub fn is_position_valid(&self) -> bool {
        self.position_current.x > UNSET && self.position_current.y > UNSET
    }

    /// Movement since the previous tick. Zero until two positions are known.
    pub fn position_delta(&self) -> Extent {
        let known = |p: Point| p.x > UNSET && p.y > UNSET;
        if known(self.position_current) && known(self.position_previous) {
            self.position_current - self.position_previous
        } else {
            Vec2::ZERO
        }
    }

    /// Offset from where the button went down, while it is held.
    pub fn drag_delta(&self) -> Extent {
        if self.down && self.position_clicked.x > UNSET {
            self.position_current - self.position_clicked
        } else {
            Vec2::ZERO
        }
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn is_double_clicked(&self) -> bool {
        self.double_clicked
    }

    pub fn down_duration(&self) -> f32 {
        self.down_duration
    }

    pub fn click_duration(&self) -> f32 {
        self.click_duration
    }

    pub fn state(&self) -> MouseState {
        match (self.down, self.down_duration) {
            (false, _) => MouseState::Idle,
            (true, d) if d > 0.0 => MouseState::Held,
            (true, _) => MouseState::Pressed,
        }
    }
}
