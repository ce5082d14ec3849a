use crate::{Ball, Config, Cue, Effects, GameRng, MatchState, Side};
use hecs::World;

/// Check if ball left the playfield (scoring).
///
/// Crossing the left edge scores for the AI, crossing the right edge for the
/// player. The ball is re-served from the center either way. Returns the side
/// that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    effects: &mut Effects,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            state.increment_ai();
            scorer = Some(Side::Ai);
        } else if ball.pos.x >= config.playfield_width {
            state.increment_player();
            scorer = Some(Side::Player);
        } else {
            continue;
        }

        effects.push(Cue::Score);
        ball.reset(config.ball_spawn(), config.ball_speed, rng);
    }

    if let Some(side) = scorer {
        tracing::debug!(
            ?side,
            player = state.player_score,
            ai = state.ai_score,
            "point scored"
        );
    }
    scorer
}
