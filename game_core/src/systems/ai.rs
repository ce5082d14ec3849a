use crate::{AutoTrack, Ball, Config, Paddle};
use hecs::World;

/// Step every auto-tracking paddle one move toward the ball
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let ball = match ball_data {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &AutoTrack)>() {
        paddle.auto_track(&ball, config.playfield_height);
    }
}
