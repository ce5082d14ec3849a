use crate::{Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply held controls to the player paddle.
///
/// Up and down are applied independently, each followed by its own clamp.
pub fn apply_paddle_intents(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.move_by(-paddle.step, config.playfield_height);
        }
        if intent.down {
            paddle.move_by(paddle.step, config.playfield_height);
        }
    }
}
