//! Collaborator interfaces the engine reads input from and sends cues to

use crate::Cue;

/// Controls polled as "currently held" while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    Quit,
}

/// Discrete key presses, consumed by the replay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Three,
    Five,
    Seven,
    Escape,
    Other,
}

impl MenuKey {
    /// Winning score selected by this key, if it is a threshold key
    pub fn winning_score(self) -> Option<u8> {
        match self {
            MenuKey::Three => Some(3),
            MenuKey::Five => Some(5),
            MenuKey::Seven => Some(7),
            MenuKey::Escape | MenuKey::Other => None,
        }
    }
}

/// Whether the driver should keep running frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub trait InputSource {
    /// Is the control held down right now
    fn is_held(&self, control: Control) -> bool;

    /// Next key pressed since the last call, oldest first
    fn next_key(&mut self) -> Option<MenuKey>;

    /// Window close or equivalent process-level quit signal
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Sound output. Failures stay inside the implementation
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Input source with nothing held and no keys, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn is_held(&self, _control: Control) -> bool {
        false
    }

    fn next_key(&mut self) -> Option<MenuKey> {
        None
    }
}

/// Audio sink that discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}
