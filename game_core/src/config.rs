use std::ops::RangeInclusive;
use std::time::Duration;

use glam::IVec2;

use crate::{Params, Player};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub window_width: i32,
    pub window_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub ball_radius: i32,
    pub ball_speed_x: RangeInclusive<i32>,
    pub ball_speed_y: RangeInclusive<i32>,
    pub delta_divisor_ms: u32,
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X_MIN..=Params::BALL_SPEED_X_MAX,
            ball_speed_y: Params::BALL_SPEED_Y_MIN..=Params::BALL_SPEED_Y_MAX,
            delta_divisor_ms: Params::DELTA_DIVISOR_MS,
            frame_delay: Duration::from_millis(Params::FRAME_DELAY_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning, different window size
    pub fn with_window(width: i32, height: i32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for a player's paddle
    pub fn paddle_x(&self, player: Player) -> i32 {
        match player {
            Player::One => 0,
            Player::Two => self.window_width - self.paddle_width,
        }
    }

    /// Lowest valid paddle top
    pub fn paddle_max_y(&self) -> i32 {
        self.window_height - self.paddle_height
    }

    /// Clamp paddle Y to window bounds
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.paddle_max_y())
    }

    /// Paddle top that centres the paddle vertically
    pub fn paddle_spawn_y(&self) -> i32 {
        self.paddle_max_y() / 2
    }

    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(self.window_width / 2, self.window_height / 2)
    }

    /// Distance from the top/bottom edge at which the ball bounces
    pub fn wall_margin(&self) -> i32 {
        self.ball_radius / 2
    }

    /// Convert elapsed milliseconds into the integer movement scale.
    /// The remainder is dropped.
    pub fn delta_from_millis(&self, elapsed_ms: u32) -> i32 {
        (elapsed_ms / self.delta_divisor_ms.max(1)) as i32
    }
}
