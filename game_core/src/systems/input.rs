use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn the frame's keyboard snapshot into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.paddle_dir(paddle.player);
    }
}
