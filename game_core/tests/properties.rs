use game_core::*;
use glam::Vec2;
use proptest::prelude::*;

struct Held(Vec<Control>);

impl InputSource for Held {
    fn is_held(&self, control: Control) -> bool {
        self.0.contains(&control)
    }

    fn next_key(&mut self) -> Option<MenuKey> {
        None
    }
}

fn controls() -> impl Strategy<Value = Vec<Control>> {
    prop::collection::vec(prop_oneof![Just(Control::Up), Just(Control::Down)], 0..=2)
}

proptest! {
    /// Property: no sequence of held controls pushes a paddle out of the playfield
    #[test]
    fn prop_paddles_stay_in_bounds(frames in prop::collection::vec(controls(), 1..300)) {
        let mut engine = Engine::new(Config::new(), 5).unwrap();
        let max_y = engine.config.playfield_height - engine.config.paddle_height;

        for held in frames {
            engine.handle_input(&mut Held(held));
            engine.update();
            for paddle in [engine.player_paddle(), engine.ai_paddle()] {
                let y = paddle.unwrap().pos.y;
                prop_assert!((0.0..=max_y).contains(&y));
            }
        }
    }

    /// Property: a paddle moved by any amount lands inside its bounds
    #[test]
    fn prop_move_by_clamps(start in 0.0f32..500.0, delta in -5000.0f32..5000.0) {
        let mut paddle = Paddle::new(Side::Player, Vec2::new(10.0, start), Vec2::new(10.0, 100.0), 10.0);
        paddle.move_by(delta, 600.0);
        prop_assert!(paddle.pos.y >= 0.0 && paddle.pos.y <= 500.0);
    }

    /// Property: a wall bounce flips the sign of vy and keeps its magnitude
    #[test]
    fn prop_wall_bounce_inverts_vy(
        y in -10.0f32..10.0,
        vy in prop_oneof![-9.0f32..-0.5, 0.5f32..9.0],
        top in any::<bool>(),
    ) {
        let config = Config::new();
        let mut world = hecs::World::new();
        let mut effects = Effects::new();
        let y = if top { y.min(0.0) } else { config.playfield_height - config.ball_size + y.abs() };
        create_ball(&mut world, &config, Vec2::new(400.0, y), Vec2::new(5.0, vy));

        systems::check_wall_collisions(&mut world, &config, &mut effects);

        for (_e, ball) in world.query::<&Ball>().iter() {
            prop_assert_eq!(ball.vel.y, -vy);
        }
        prop_assert_eq!(effects.cues.clone(), vec![Cue::WallBounce]);
    }

    /// Property: a paddle hit leaves the ball flush against the paddle face
    #[test]
    fn prop_paddle_hit_is_flush(offset in 0.1f32..9.9, y in 245.0f32..345.0) {
        let mut engine = Engine::new(Config::new(), 11).unwrap();
        let paddle = engine.player_paddle().unwrap().rect();
        // Ball lands inside the player paddle after this tick's move
        engine.place_ball(Vec2::new(paddle.x + offset + 5.0, y), Vec2::new(-5.0, 0.5));

        engine.update();

        let ball = engine.ball().unwrap();
        prop_assert_eq!(ball.vel.x, 5.0);
        prop_assert_eq!(ball.pos.x, paddle.right());
        prop_assert!(!ball.rect().intersects(&paddle));
        prop_assert!(engine.effects.contains(Cue::PaddleHit));
    }
}
