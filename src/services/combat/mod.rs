//! Combat system
//!
//! Phaser fire, torpedo launch, shield control and the Klingon counter-attack.
//! Each operation validates first and mutates only once every check passes.

mod phasers;
mod torpedoes;
mod shields;
mod klingon_attack;

pub use phasers::{fire_phasers, PhaserHit, PhaserReport};
pub use torpedoes::{fire_torpedo, TorpedoOutcome, TorpedoReport};
pub use shields::shield_control;
pub use klingon_attack::{klingons_fire, AttackHit};
