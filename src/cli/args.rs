use clap::{Parser, ValueEnum};

use crate::sound::{BeepSound, SilentSound, SoundSink};

/// Star Trek: hunt down the Klingon fleet before time runs out
#[derive(Parser, Debug)]
#[command(name = "startrek")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the random number generator; the same seed replays the same galaxy
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Sound mode
    #[arg(long = "sound", value_enum, default_value_t = SoundMode::Beep)]
    pub sound: SoundMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SoundMode {
    /// No sound at all
    Off,
    /// Terminal bell
    Beep,
}

impl SoundMode {
    pub fn sink(self) -> Box<dyn SoundSink> {
        match self {
            SoundMode::Off => Box::new(SilentSound),
            SoundMode::Beep => Box::new(BeepSound::stdout()),
        }
    }
}
