pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::{FsmState, GameAction, GameFsm, TransitionResult};
pub use game::Game;
pub use params::*;
pub use resources::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Collision checks use the ball's position from before this frame's move,
/// so a bounce is decided one frame ahead of actual contact.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &InputSnapshot,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move paddles based on intents
    move_paddles(world, time, config);

    // 3. Flip ball velocity on walls and paddles
    check_collisions(world, config, events);

    // 4. Move ball
    move_ball(world, time);

    // 5. Check for a miss (ball exited left or right)
    check_scoring(world, config, events);

    time.ticks += 1;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player: Player, y: i32) -> hecs::Entity {
    world.spawn((Paddle::new(player, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: IVec2, vel: IVec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
