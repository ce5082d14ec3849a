use crate::{Ball, Config, Cue, Effects, Paddle, Rect, Side};
use hecs::World;

/// Bounce the ball off the paddle it is approaching.
///
/// Moving left only tests the player paddle, moving right only the AI paddle,
/// so at most one hit can happen per tick. On a hit the ball is snapped flush
/// against the paddle face it struck.
pub fn check_paddle_collisions(world: &mut World, effects: &mut Effects) {
    // Collect paddle boxes without holding borrows
    let paddles: Vec<(Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect()))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let approaching = if ball.vel.x < 0.0 {
            Side::Player
        } else if ball.vel.x > 0.0 {
            Side::Ai
        } else {
            continue;
        };

        let ball_rect = ball.rect();
        let hit = paddles
            .iter()
            .find(|(side, rect)| *side == approaching && ball_rect.intersects(rect));

        if let Some((side, rect)) = hit {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = match side {
                Side::Player => rect.right(),
                Side::Ai => rect.x - ball.size.x,
            };
            effects.push(Cue::PaddleHit);
            tracing::trace!(?side, x = ball.pos.x, "ball hit paddle");
        }
    }
}

/// Bounce the ball off the top and bottom walls.
///
/// Position is not clamped after the bounce, so a ball fast enough to cross a
/// wall in one tick is not pulled back inside.
pub fn check_wall_collisions(world: &mut World, config: &Config, effects: &mut Effects) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y + ball.size.y >= config.playfield_height {
            ball.vel.y = -ball.vel.y;
            effects.push(Cue::WallBounce);
            tracing::trace!(y = ball.pos.y, "ball hit wall");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ai_paddle, create_ball, create_player_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Effects) {
        let world = World::new();
        let config = Config::new();
        let effects = Effects::new();
        (world, config, effects)
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut effects) = setup_world();
        create_ball(
            &mut world,
            &config,
            Vec2::new(400.0, -1.0),
            Vec2::new(5.0, -3.0),
        );

        check_wall_collisions(&mut world, &config, &mut effects);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(5.0, 3.0), "Only Y velocity is inverted");
        assert_eq!(b.pos.y, -1.0, "Position is left as is");
        assert_eq!(effects.cues, vec![Cue::WallBounce]);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut effects) = setup_world();
        let y = config.playfield_height - config.ball_size;
        create_ball(&mut world, &config, Vec2::new(400.0, y), Vec2::new(-5.0, 3.0));

        check_wall_collisions(&mut world, &config, &mut effects);

        assert_eq!(ball(&world).vel, Vec2::new(-5.0, -3.0));
        assert!(effects.contains(Cue::WallBounce));
    }

    #[test]
    fn test_no_wall_bounce_mid_field() {
        let (mut world, config, mut effects) = setup_world();
        create_ball(&mut world, &config, Vec2::new(400.0, 300.0), Vec2::new(5.0, 3.0));

        check_wall_collisions(&mut world, &config, &mut effects);

        assert_eq!(ball(&world).vel, Vec2::new(5.0, 3.0));
        assert!(effects.cues.is_empty());
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, config, mut effects) = setup_world();
        create_player_paddle(&mut world, &config);
        // Paddle spans x 10..20, y 250..350
        create_ball(&mut world, &config, Vec2::new(16.0, 300.0), Vec2::new(-5.0, 3.0));

        check_paddle_collisions(&mut world, &mut effects);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(5.0, 3.0));
        assert_eq!(b.pos.x, 20.0, "Ball should sit flush on the paddle face");
        assert_eq!(effects.cues, vec![Cue::PaddleHit]);
    }

    #[test]
    fn test_ball_collides_with_ai_paddle() {
        let (mut world, config, mut effects) = setup_world();
        create_ai_paddle(&mut world, &config);
        // Paddle spans x 780..790
        create_ball(&mut world, &config, Vec2::new(776.0, 260.0), Vec2::new(5.0, -3.0));

        check_paddle_collisions(&mut world, &mut effects);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(-5.0, -3.0));
        assert_eq!(b.pos.x, 780.0 - config.ball_size);
        assert!(!b.rect().intersects(&Rect::new(780.0, 250.0, 10.0, 100.0)));
        assert!(effects.contains(Cue::PaddleHit));
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, mut effects) = setup_world();
        create_player_paddle(&mut world, &config);
        create_ball(&mut world, &config, Vec2::new(16.0, 300.0), Vec2::new(5.0, 3.0));

        check_paddle_collisions(&mut world, &mut effects);

        assert_eq!(ball(&world).vel.x, 5.0);
        assert!(effects.cues.is_empty());
    }

    #[test]
    fn test_ball_touching_paddle_edge_is_not_a_hit() {
        let (mut world, config, mut effects) = setup_world();
        create_player_paddle(&mut world, &config);
        create_ball(&mut world, &config, Vec2::new(20.0, 300.0), Vec2::new(-5.0, 3.0));

        check_paddle_collisions(&mut world, &mut effects);

        assert_eq!(ball(&world).vel.x, -5.0);
        assert!(effects.cues.is_empty());
    }

    #[test]
    fn test_ball_passes_above_paddle() {
        let (mut world, config, mut effects) = setup_world();
        create_player_paddle(&mut world, &config);
        create_ball(&mut world, &config, Vec2::new(15.0, 100.0), Vec2::new(-5.0, 3.0));

        check_paddle_collisions(&mut world, &mut effects);

        assert_eq!(ball(&world).vel.x, -5.0);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut effects) = setup_world();
        create_player_paddle(&mut world, &config);

        check_paddle_collisions(&mut world, &mut effects);
        check_wall_collisions(&mut world, &config, &mut effects);

        assert!(effects.cues.is_empty());
    }
}
