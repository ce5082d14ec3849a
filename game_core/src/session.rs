use crate::{AudioSink, Config, ConfigError, DrawSurface, Engine, Flow, InputSource};

/// One play session, owned by the driver's run loop for the life of the process
pub struct Session {
    pub engine: Engine,
    frames: u64,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: Engine::new(config, seed)?,
            frames: 0,
        })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: input, simulation, cues, then drawing.
    ///
    /// Returns `Flow::Quit` without simulating when input asks to stop.
    pub fn frame(
        &mut self,
        input: &mut dyn InputSource,
        surface: &mut dyn DrawSurface,
        audio: &mut dyn AudioSink,
    ) -> Flow {
        if self.engine.handle_input(input) == Flow::Quit {
            tracing::info!(frames = self.frames, "quit requested");
            return Flow::Quit;
        }

        self.engine.update();
        for cue in self.engine.drain_cues() {
            audio.play(cue);
        }

        self.engine.render(surface);
        self.frames += 1;
        Flow::Continue
    }
}
