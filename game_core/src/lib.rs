//! Deterministic Pong simulation
//!
//! A human paddle on the left, a ball-tracking paddle on the right and a ball,
//! advanced one fixed tick at a time. Input, drawing and sound are reached only
//! through the traits in `controls` and `render`.

pub mod components;
pub mod config;
pub mod controls;
pub mod engine;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controls::*;
pub use engine::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;

/// Helper to create the human-controlled paddle entity
pub fn create_player_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((paddle_for(Side::Player, config), PaddleIntent::new()))
}

/// Helper to create the ball-tracking paddle entity
pub fn create_ai_paddle(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((paddle_for(Side::Ai, config), AutoTrack))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, Vec2::splat(config.ball_size), vel),))
}

fn paddle_for(side: Side, config: &Config) -> Paddle {
    Paddle::new(
        side,
        Vec2::new(config.paddle_x(side), config.paddle_spawn_y()),
        Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_step,
    )
}
