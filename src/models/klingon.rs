use rand::Rng;

use super::constants::{KLINGON_BASE_ENERGY, KLINGON_ENERGY_SPREAD};
use super::position::SectorPosition;

/// A Klingon warship within a quadrant's sector grid.
/// Up to 3 per quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Klingon {
    pub sector: SectorPosition,
    pub energy: i32,
}

impl Klingon {
    /// Spawn a Klingon with energy in [300, 599].
    pub fn new<R: Rng + ?Sized>(sector: SectorPosition, rng: &mut R) -> Self {
        Klingon {
            sector,
            energy: KLINGON_BASE_ENERGY + rng.gen_range(0..=KLINGON_ENERGY_SPREAD),
        }
    }

    pub fn with_energy(sector: SectorPosition, energy: i32) -> Self {
        Klingon { sector, energy }
    }

    /// Apply a hit. Returns true if the hit destroys the ship; otherwise the
    /// damage is subtracted from its energy.
    pub fn take_hit(&mut self, damage: i32) -> bool {
        if damage >= self.energy {
            true
        } else {
            self.energy -= damage;
            false
        }
    }
}
