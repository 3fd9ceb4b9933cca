//! Sound effects
//!
//! The engine announces events through a [`SoundSink`]; what a sink does
//! with them is up to it. The game plays exactly the same with
//! [`SilentSound`].

use std::io::{self, Write};

/// Something worth making a noise about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    PhaserFired,
    TorpedoFired,
    Explosion,
    Warp,
    HitTaken,
    Docked,
    GameOver,
    Victory,
    Alert,
}

impl SoundEvent {
    /// Number of terminal bells used to render the event.
    pub fn beeps(&self) -> usize {
        match self {
            SoundEvent::PhaserFired => 2,
            SoundEvent::TorpedoFired => 1,
            SoundEvent::Explosion => 3,
            SoundEvent::Warp => 2,
            SoundEvent::HitTaken => 1,
            SoundEvent::Docked => 2,
            SoundEvent::GameOver => 5,
            SoundEvent::Victory => 4,
            SoundEvent::Alert => 3,
        }
    }
}

/// Fire-and-forget receiver of sound events.
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSound;

impl SoundSink for SilentSound {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Rings the terminal bell.
pub struct BeepSound<W: Write> {
    out: W,
}

impl BeepSound<io::Stdout> {
    pub fn stdout() -> Self {
        BeepSound { out: io::stdout() }
    }
}

impl<W: Write> BeepSound<W> {
    pub fn new(out: W) -> Self {
        BeepSound { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for BeepSound<W> {
    fn play(&mut self, event: SoundEvent) {
        let bells = "\x07".repeat(event.beeps());
        // Bell failures are ignored.
        if self.out.write_all(bells.as_bytes()).is_ok() {
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Records every event it is asked to play.
    #[derive(Debug, Default)]
    pub struct RecordingSound {
        pub events: Vec<SoundEvent>,
    }

    impl SoundSink for RecordingSound {
        fn play(&mut self, event: SoundEvent) {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beep_writes_one_bell_per_count() {
        let mut sink = BeepSound::new(Vec::new());
        sink.play(SoundEvent::Explosion);
        sink.play(SoundEvent::HitTaken);
        let out = sink.into_inner();
        assert_eq!(out, b"\x07\x07\x07\x07".to_vec());
    }

    #[test]
    fn silent_sink_accepts_everything() {
        let mut sink = SilentSound;
        for event in [SoundEvent::Victory, SoundEvent::GameOver, SoundEvent::Alert] {
            sink.play(event);
        }
    }
}
