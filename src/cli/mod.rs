//! Command-line options

pub mod args;

pub use args::{Args, SoundMode};
