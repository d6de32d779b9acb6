use crate::{Ball, Config, Events, Player};
use hecs::World;

/// Check if ball left the window and pick the winner
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x < 0 {
            // Player one missed
            events.missed = Some(Player::Two);
        } else if ball.pos.x > config.window_width {
            // Player two missed
            events.missed = Some(Player::One);
        }
    }
}
