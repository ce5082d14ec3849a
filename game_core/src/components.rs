use crate::geometry::Rect;
use glam::Vec2;

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // Left, human controlled
    Ai,     // Right, tracks the ball
}

/// Paddle component - a vertical bar that only moves along Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub step: f32, // Distance covered by one key press or one AI move
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, step: f32) -> Self {
        Self {
            side,
            pos,
            size,
            step,
        }
    }

    /// Shift vertically, then clamp into `[0, bound_height - height]`
    pub fn move_by(&mut self, delta_y: f32, bound_height: f32) {
        self.pos.y = (self.pos.y + delta_y).clamp(0.0, bound_height - self.size.y);
    }

    /// Move one step toward the ball's vertical center.
    ///
    /// The step is fixed regardless of distance, so the paddle lags behind fast
    /// balls and dithers by one step around a stationary target.
    pub fn auto_track(&mut self, ball: &Ball, bound_height: f32) {
        let target = ball.rect().center().y;
        let center = self.rect().center().y;
        if target < center {
            self.move_by(-self.step, bound_height);
        } else if target > center {
            self.move_by(self.step, bound_height);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Held controls for the player paddle, latched once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for paddles steered by `auto_track`
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoTrack;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub vel: Vec2, // Pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    /// Linear motion, no boundary handling
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Re-center and serve again.
    ///
    /// The horizontal direction alternates from the previous one; the vertical
    /// direction is random. Both components keep the magnitudes in `speed`.
    pub fn reset(&mut self, spawn: Vec2, speed: Vec2, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = spawn;

        let vx = if self.vel.x > 0.0 {
            -speed.x.abs()
        } else if self.vel.x < 0.0 {
            speed.x.abs()
        } else if rng.0.gen_bool(0.5) {
            speed.x.abs()
        } else {
            -speed.x.abs()
        };
        let vy = if rng.0.gen_bool(0.5) {
            speed.y.abs()
        } else {
            -speed.y.abs()
        };

        self.vel = Vec2::new(vx, vy);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(
            Side::Ai,
            Vec2::new(780.0, y),
            Vec2::new(10.0, 100.0),
            10.0,
        )
    }

    fn ball_centered_at(y: f32) -> Ball {
        Ball::new(
            Vec2::new(400.0, y - 3.5),
            Vec2::splat(7.0),
            Vec2::new(5.0, 3.0),
        )
    }

    #[test]
    fn test_move_by_clamps_top() {
        let mut paddle = paddle_at(5.0);
        paddle.move_by(-10.0, 600.0);
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_move_by_clamps_bottom() {
        let mut paddle = paddle_at(495.0);
        paddle.move_by(10.0, 600.0);
        assert_eq!(paddle.pos.y, 500.0);
    }

    #[test]
    fn test_auto_track_moves_one_step_up() {
        // Paddle centered at 300, ball centered at 250
        let mut paddle = paddle_at(250.0);
        paddle.auto_track(&ball_centered_at(250.0), 600.0);
        assert_eq!(paddle.pos.y, 240.0, "One step toward the ball, not all the way");
        assert_eq!(paddle.rect().center().y, 290.0);
    }

    #[test]
    fn test_auto_track_moves_one_step_down() {
        let mut paddle = paddle_at(250.0);
        paddle.auto_track(&ball_centered_at(450.0), 600.0);
        assert_eq!(paddle.pos.y, 260.0);
    }

    #[test]
    fn test_auto_track_holds_when_aligned() {
        let mut paddle = paddle_at(250.0);
        paddle.auto_track(&ball_centered_at(300.0), 600.0);
        assert_eq!(paddle.pos.y, 250.0);
    }

    #[test]
    fn test_auto_track_respects_bounds() {
        let mut paddle = paddle_at(3.0);
        paddle.auto_track(&ball_centered_at(2.0), 600.0);
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_ball_advance() {
        let mut ball = ball_centered_at(300.0);
        let start = ball.pos;
        ball.advance();
        assert_eq!(ball.pos, start + Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_ball_reset_alternates_serve() {
        let mut rng = GameRng::new(7);
        let spawn = Vec2::new(396.5, 296.5);
        let speed = Vec2::new(5.0, 3.0);
        let mut ball = Ball::new(Vec2::new(900.0, 10.0), Vec2::splat(7.0), speed);

        ball.reset(spawn, speed, &mut rng);
        assert_eq!(ball.pos, spawn);
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.vel.y.abs(), 3.0);

        ball.reset(spawn, speed, &mut rng);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_ball_reset_from_rest_is_moving() {
        let mut rng = GameRng::new(1);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::splat(7.0), Vec2::ZERO);
        ball.reset(Vec2::new(10.0, 10.0), Vec2::new(5.0, 3.0), &mut rng);
        assert_eq!(ball.vel.x.abs(), 5.0);
        assert_eq!(ball.vel.y.abs(), 3.0);
    }
}
