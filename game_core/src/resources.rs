use rand::Rng;

use crate::Player;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub delta: i32, // Movement scale for this step (elapsed ms / 10)
    pub ticks: u64, // Steps simulated so far
}

impl Time {
    pub fn new(delta: i32) -> Self {
        Self { delta, ticks: 0 }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the OS, for real play
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Draw an integer uniformly from `min..=max`, negated when even.
///
/// Even draws always come back negative and odd draws positive, so the
/// serve direction follows the parity of the speed.
pub fn generate_random_int(rng: &mut GameRng, min: i32, max: i32) -> i32 {
    let r = rng.0.gen_range(min..=max);
    if r % 2 == 0 {
        -r
    } else {
        r
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub missed: Option<Player>, // Winner, set when the ball left the window
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.missed = None;
    }
}

/// Keyboard state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    pub restart: bool,
    pub start: bool,
    pub quit: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commanded direction for a player's paddle (-1 up, 1 down)
    pub fn paddle_dir(&self, player: Player) -> i8 {
        let (up, down) = match player {
            Player::One => (self.p1_up, self.p1_down),
            Player::Two => (self.p2_up, self.p2_down),
        };
        down as i8 - up as i8
    }
}
