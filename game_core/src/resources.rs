use std::fmt;

/// Top-level mode of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Replay, // Match decided, waiting for a menu choice
}

/// Side that reached the winning score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Ai,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => write!(f, "Player"),
            Winner::Ai => write!(f, "AI"),
        }
    }
}

/// Scores, threshold and phase of the current match.
///
/// `winner` is `Some` exactly when `phase` is `Replay`; both only change together
/// through `declare_winner` and `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub player_score: u32,
    pub ai_score: u32,
    winning_score: u8,
    phase: Phase,
    winner: Option<Winner>,
}

impl MatchState {
    pub fn new(winning_score: u8) -> Self {
        Self {
            player_score: 0,
            ai_score: 0,
            winning_score,
            phase: Phase::Playing,
            winner: None,
        }
    }

    pub fn winning_score(&self) -> u8 {
        self.winning_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn increment_player(&mut self) {
        self.player_score += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai_score += 1;
    }

    /// First side at or past the threshold, player checked first
    pub fn has_winner(&self) -> Option<Winner> {
        let target = u32::from(self.winning_score);
        if self.player_score >= target {
            Some(Winner::Player)
        } else if self.ai_score >= target {
            Some(Winner::Ai)
        } else {
            None
        }
    }

    /// Move to `Replay` if a side has won. Returns the winner when the match just ended
    pub fn declare_winner(&mut self) -> Option<Winner> {
        if self.phase == Phase::Replay {
            return None;
        }
        let winner = self.has_winner()?;
        self.winner = Some(winner);
        self.phase = Phase::Replay;
        Some(winner)
    }

    /// Fresh match keeping nothing but the new threshold
    pub fn reset(&mut self, winning_score: u8) {
        *self = Self::new(winning_score);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(crate::Params::WIN_SCORE)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Named sound effect request, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    PaddleHit,
    WallBounce,
    Score,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::PaddleHit => "paddle_hit",
            Cue::WallBounce => "wall_bounce",
            Cue::Score => "score",
        }
    }
}

/// Cues emitted during one update, in emission order
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pub cues: Vec<Cue>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }

    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn contains(&self, cue: Cue) -> bool {
        self.cues.contains(&cue)
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Cue> {
        self.cues.drain(..)
    }
}
