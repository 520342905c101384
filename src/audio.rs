//! Sound cues fired by the game.
//!
//! Audio is an opaque collaborator: the session and the proposal decide *when* a cue should play,
//! while an [`Audio`] implementation decides what playing it means. Failures never reach the
//! game; they are swallowed by [`fire`] after being logged.

use std::io::Write;

use color_eyre::eyre::Result;
use log::{info, warn};

/// Volume the background ambience loops at.
pub(crate) const AMBIENCE_VOLUME: f32 = 0.5;

/// Volume the confirmation sound plays at.
pub(crate) const CONFIRMATION_VOLUME: f32 = 0.1;

/// Cue for the looping background ambience.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ambience {
    /// Start looping the ambience.
    Start,
    /// Stop the ambience and rewind it.
    Stop,
}

/// Sink for the game's sound cues.
pub(crate) trait Audio {
    /// Starts or stops the background ambience.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the host refuses playback.
    fn ambience(&mut self, cue: Ambience) -> Result<()>;

    /// Plays the one-shot confirmation sound.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the host refuses playback.
    fn confirmation(&mut self) -> Result<()>;
}

/// Runs the outcome of a fire-and-forget effect, logging and discarding any failure.
pub(crate) fn fire(effect: &str, outcome: Result<()>) {
    if let Err(err) = outcome {
        warn!("{effect} failed: {err}");
    }
}

/// Terminal audio backend.
///
/// A terminal cannot decode music, so the ambience is tracked as a looping cue and only logged,
/// while the confirmation sound rings the terminal bell on the wrapped writer.
pub(crate) struct Bell<W: Write> {
    /// Writer the bell character is sent to.
    out: W,
    /// Whether the ambience loop is currently playing.
    ambience_playing: bool,
}

impl<W: Write> Bell<W> {
    /// Builds a bell ringing on the given writer.
    pub(crate) const fn new(out: W) -> Self {
        Self {
            out,
            ambience_playing: false,
        }
    }
}

impl<W: Write> Audio for Bell<W> {
    fn ambience(&mut self, cue: Ambience) -> Result<()> {
        match cue {
            Ambience::Start if !self.ambience_playing => {
                self.ambience_playing = true;
                info!("ambience looping at volume {AMBIENCE_VOLUME}");
            }
            Ambience::Stop if self.ambience_playing => {
                self.ambience_playing = false;
                info!("ambience stopped and rewound");
            }
            _ => {}
        }

        Ok(())
    }

    fn confirmation(&mut self) -> Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        info!("confirmation sound played at volume {CONFIRMATION_VOLUME}");

        Ok(())
    }
}

/// Muted audio backend, every cue is a no-op.
pub(crate) struct Silent;

impl Audio for Silent {
    fn ambience(&mut self, _cue: Ambience) -> Result<()> {
        Ok(())
    }

    fn confirmation(&mut self) -> Result<()> {
        Ok(())
    }
}
