use game_core::{AudioSink, Cue};
use std::io::Write;

/// Realises every cue as the terminal bell
pub struct Bell<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }
}

impl<W: Write> AudioSink for Bell<W> {
    fn play(&mut self, cue: Cue) {
        tracing::trace!(cue = cue.name(), "cue");
        if self.muted {
            return;
        }
        // A lost bell is not worth stopping the game for
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            tracing::debug!(%err, cue = cue.name(), "bell failed");
        }
    }
}
