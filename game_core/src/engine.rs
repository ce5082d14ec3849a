use crate::render::{Anchor, Color, DrawCommand, MENU_FONT_SIZE, SCORE_FONT_SIZE};
use crate::systems::*;
use crate::{
    create_ai_paddle, create_ball, create_player_paddle, Ball, Config, ConfigError, Control,
    Cue, DrawSurface, Effects, Flow, GameRng, InputSource, MatchState, MenuKey, Paddle,
    PaddleIntent, Params, Phase, Rect, Side,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Owns the match: both paddles, the ball, scores and phase.
///
/// One driver frame is `handle_input`, then `update`, then `render`.
pub struct Engine {
    pub world: World,
    pub config: Config,
    pub state: MatchState,
    pub effects: Effects,
    pub rng: GameRng,
    pub tick: u64,
    player: Entity,
    ai: Entity,
    ball: Entity,
}

impl Engine {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let player = create_player_paddle(&mut world, &config);
        let ai = create_ai_paddle(&mut world, &config);
        let ball = create_ball(&mut world, &config, config.ball_spawn(), config.ball_speed);

        tracing::debug!(
            width = config.playfield_width,
            height = config.playfield_height,
            win_score = config.win_score,
            "engine created"
        );

        Ok(Self {
            world,
            state: MatchState::new(config.win_score),
            config,
            effects: Effects::new(),
            rng: GameRng::new(seed),
            tick: 0,
            player,
            ai,
            ball,
        })
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.player).ok().map(|p| *p)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.world.get::<&Paddle>(self.ai).ok().map(|p| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    /// Replace the ball's position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle's top edge, clamped to the playfield
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.pos.y = self.config.clamp_paddle_y(y);
        }
    }

    /// Read input for the current phase.
    ///
    /// Playing latches the held up/down controls for the next `update`. Replay
    /// reads menu keys: 3, 5 or 7 start a new match to that score, escape quits.
    pub fn handle_input(&mut self, input: &mut dyn InputSource) -> Flow {
        if input.quit_requested() {
            return Flow::Quit;
        }

        match self.state.phase() {
            Phase::Playing => {
                let mut flow = Flow::Continue;
                // Menu keys mean nothing mid-match, only escape does
                while let Some(key) = input.next_key() {
                    if key == MenuKey::Escape {
                        flow = Flow::Quit;
                    }
                }
                if input.is_held(Control::Quit) {
                    flow = Flow::Quit;
                }

                self.set_intent(PaddleIntent {
                    up: input.is_held(Control::Up),
                    down: input.is_held(Control::Down),
                });
                flow
            }
            Phase::Replay => {
                while let Some(key) = input.next_key() {
                    if key == MenuKey::Escape {
                        return Flow::Quit;
                    }
                    if let Some(winning_score) = key.winning_score() {
                        self.reset_match(winning_score);
                    }
                }
                Flow::Continue
            }
        }
    }

    fn set_intent(&mut self, intent: PaddleIntent) {
        if let Ok(mut current) = self.world.get::<&mut PaddleIntent>(self.player) {
            *current = intent;
        }
    }

    /// Advance the simulation one tick. Cues land in `self.effects`
    pub fn update(&mut self) {
        // Clear cues from the previous tick
        self.effects.clear();

        match self.state.phase() {
            Phase::Playing => self.step_playing(),
            Phase::Replay => {}
        }
    }

    fn step_playing(&mut self) {
        self.tick += 1;

        // 1. Player paddle follows held controls
        apply_paddle_intents(&mut self.world, &self.config);

        // 2. Move ball
        move_ball(&mut self.world);

        // 3. Ball vs the paddle it is approaching
        check_paddle_collisions(&mut self.world, &mut self.effects);

        // 4. Ball vs top/bottom walls
        check_wall_collisions(&mut self.world, &self.config, &mut self.effects);

        // 5. Ball left the playfield
        check_scoring(
            &mut self.world,
            &self.config,
            &mut self.state,
            &mut self.effects,
            &mut self.rng,
        );

        // 6. Match over?
        if let Some(winner) = self.state.declare_winner() {
            tracing::info!(
                %winner,
                player = self.state.player_score,
                ai = self.state.ai_score,
                tick = self.tick,
                "match over"
            );
        }

        // 7. AI moves every tick, including the one that ended the match
        track_ball(&mut self.world, &self.config);
    }

    /// Start a new match to `winning_score`. Paddles stay where they are
    pub fn reset_match(&mut self, winning_score: u8) {
        self.state.reset(winning_score);
        self.set_intent(PaddleIntent::new());
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(self.config.ball_spawn(), self.config.ball_speed, &mut self.rng);
        }
        tracing::info!(winning_score, "new match");
    }

    /// Cues emitted by the last `update`, emptied as they are read
    pub fn drain_cues(&mut self) -> impl Iterator<Item = Cue> + '_ {
        self.effects.drain()
    }

    /// Describe the current frame. Reads state only
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let width = self.config.playfield_width;
        let height = self.config.playfield_height;

        let mut commands = vec![DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, width, height),
            color: Color::BLACK,
        }];

        match self.state.phase() {
            Phase::Playing => self.draw_playing(&mut commands),
            Phase::Replay => self.draw_replay(&mut commands),
        }

        commands
    }

    fn draw_playing(&self, commands: &mut Vec<DrawCommand>) {
        let width = self.config.playfield_width;
        let height = self.config.playfield_height;

        for paddle in [self.player_paddle(), self.ai_paddle()].into_iter().flatten() {
            commands.push(DrawCommand::FillRect {
                rect: paddle.rect(),
                color: Color::WHITE,
            });
        }
        if let Some(ball) = self.ball() {
            commands.push(DrawCommand::FillEllipse {
                rect: ball.rect(),
                color: Color::WHITE,
            });
        }
        commands.push(DrawCommand::Line {
            from: Vec2::new(width / 2.0, 0.0),
            to: Vec2::new(width / 2.0, height),
            color: Color::WHITE,
        });
        commands.push(DrawCommand::Text {
            text: self.state.player_score.to_string(),
            pos: Vec2::new(width / 4.0, 20.0),
            size: SCORE_FONT_SIZE,
            anchor: Anchor::TopLeft,
            color: Color::WHITE,
        });
        commands.push(DrawCommand::Text {
            text: self.state.ai_score.to_string(),
            pos: Vec2::new(width * 3.0 / 4.0, 20.0),
            size: SCORE_FONT_SIZE,
            anchor: Anchor::TopLeft,
            color: Color::WHITE,
        });
    }

    fn draw_replay(&self, commands: &mut Vec<DrawCommand>) {
        let width = self.config.playfield_width;
        let height = self.config.playfield_height;

        if let Some(winner) = self.state.winner() {
            commands.push(DrawCommand::Text {
                text: format!("{winner} Wins!"),
                pos: Vec2::new(width / 2.0, height / 3.0),
                size: SCORE_FONT_SIZE,
                anchor: Anchor::Center,
                color: Color::WHITE,
            });
        }

        let options = Params::REPLAY_WIN_SCORES
            .iter()
            .map(|n| format!("Press [{n}] for Best of {n}"))
            .chain(std::iter::once("Press [ESC] to Exit".to_string()));
        for (i, option) in options.enumerate() {
            commands.push(DrawCommand::Text {
                text: option,
                pos: Vec2::new(width / 2.0, height / 2.0 + i as f32 * 40.0),
                size: MENU_FONT_SIZE,
                anchor: Anchor::Center,
                color: Color::WHITE,
            });
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for command in self.draw_commands() {
            command.draw(surface);
        }
    }
}
