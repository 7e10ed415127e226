//! Fire-and-forget sound cue playback.
//!
//! The engine queues [`SoundCue`]s; a sink plays them best-effort. Playback
//! failure must never reach game state, so the sink API is infallible and
//! swallows I/O errors internally (the fallible path is exposed separately
//! for callers that want to report it).
//!
//! Terminals have exactly one sound: the BEL control character. Cues are
//! distinguished by how many bells they ring.

use std::io::{self, Write};

use anyhow::Result;

pub use tui_chase_types as types;

use tui_chase_types::SoundCue;

/// A destination for sound cues.
pub trait AudioSink {
    /// Play a cue, best-effort. Failures are absorbed by the sink.
    fn play(&mut self, cue: SoundCue);
}

/// Plays cues through the terminal bell on stdout.
pub struct TerminalBell {
    out: io::Stdout,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Ring the bell for a cue, surfacing I/O errors.
    pub fn try_play(&mut self, cue: SoundCue) -> Result<()> {
        let bells: &[u8] = match cue {
            SoundCue::Move => b"\x07",
            SoundCue::Collect => b"\x07\x07",
            SoundCue::GameOver => b"\x07\x07\x07",
        };
        self.out.write_all(bells)?;
        self.out.flush()?;
        Ok(())
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        // Best-effort: a terminal that rejects the write does not get to
        // interrupt gameplay.
        let _ = self.try_play(cue);
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

/// Discards all cues. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSink {
    played: Vec<SoundCue>,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues received so far, in order.
    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }
}

impl AudioSink for NullSink {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}
