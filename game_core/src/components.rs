use glam::IVec2;

use crate::{generate_random_int, Config, GameRng};

/// The two players. Player one owns the left paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// 1 or 2, as shown on the game-over screen
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub player: Player,
    pub y: i32, // top edge; x is fixed per player
}

impl Paddle {
    pub fn new(player: Player, y: i32) -> Self {
        Self { player, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the window centre with a freshly drawn serve velocity
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(IVec2::ZERO, IVec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with a random velocity
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        let vx = generate_random_int(
            rng,
            *config.ball_speed_x.start(),
            *config.ball_speed_x.end(),
        );
        let vy = generate_random_int(
            rng,
            *config.ball_speed_y.start(),
            *config.ball_speed_y.end(),
        );
        self.vel = IVec2::new(vx, vy);
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
