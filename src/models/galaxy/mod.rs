//! Galaxy model
//!
//! The 8x8 grid of quadrants plus the galaxy-wide counters and the mission
//! clock. Klingon and starbase counts are kept in two places (per quadrant
//! and galaxy-wide); the `destroy_*` methods are the only way to remove
//! either, and they update both together.

mod generation;

use log::info;
use rand::Rng;
use std::fmt;

use super::constants::GALAXY_SIZE;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::{Quadrant, QuadrantData};
use super::sector_map::SectorMap;

use generation::generate_galaxy;

/// Three-by-three block of long range sensor values; `None` lies outside
/// the galaxy.
pub type LongRangeScan = [[Option<i32>; 3]; 3];

pub struct Galaxy {
    /// Internal indexing: quadrants[row][col].
    quadrants: [[Quadrant; GALAXY_SIZE]; GALAXY_SIZE],
    total_klingons: i32,
    initial_klingons: i32,
    total_starbases: i32,
    stardate: f64,
    starting_stardate: f64,
    time_limit: f64,
}

impl Galaxy {
    /// Generate a new galaxy from the given random stream.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let generated = generate_galaxy(rng);

        let quadrants = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Quadrant::new(
                    QuadrantPosition::new(row as i32, col as i32),
                    generated.quadrants[row][col],
                )
            })
        });

        info!(
            "generated galaxy: {} klingons, {} starbases, stardate {}, {} days",
            generated.total_klingons,
            generated.total_starbases,
            generated.stardate,
            generated.time_limit
        );

        Galaxy {
            quadrants,
            total_klingons: generated.total_klingons,
            initial_klingons: generated.total_klingons,
            total_starbases: generated.total_starbases,
            stardate: generated.stardate,
            starting_stardate: generated.stardate,
            time_limit: generated.time_limit,
        }
    }

    // ========== Accessor Methods ==========

    pub fn quadrant(&self, pos: QuadrantPosition) -> Option<&Quadrant> {
        if !pos.in_bounds() {
            return None;
        }
        Some(&self.quadrants[pos.row as usize][pos.col as usize])
    }

    pub fn quadrant_mut(&mut self, pos: QuadrantPosition) -> Option<&mut Quadrant> {
        if !pos.in_bounds() {
            return None;
        }
        Some(&mut self.quadrants[pos.row as usize][pos.col as usize])
    }

    pub fn quadrants(&self) -> impl Iterator<Item = &Quadrant> {
        self.quadrants.iter().flatten()
    }

    pub fn total_klingons(&self) -> i32 {
        self.total_klingons
    }

    pub fn initial_klingons(&self) -> i32 {
        self.initial_klingons
    }

    pub fn total_starbases(&self) -> i32 {
        self.total_starbases
    }

    pub fn stardate(&self) -> f64 {
        self.stardate
    }

    pub fn starting_stardate(&self) -> f64 {
        self.starting_stardate
    }

    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    // Test-only setters
    #[cfg(test)]
    pub fn set_stardate(&mut self, stardate: f64) {
        self.stardate = stardate;
    }

    // ========== End Accessor Methods ==========

    // ========== Atomic Update Methods ==========

    /// Destroy the Klingon at `sector` of quadrant `q`, updating the sector
    /// map, the quadrant count and the galaxy total together.
    pub fn destroy_klingon(&mut self, q: QuadrantPosition, sector: SectorPosition) -> bool {
        let removed = self
            .quadrant_mut(q)
            .is_some_and(|quadrant| quadrant.remove_klingon(sector));
        if removed {
            self.total_klingons -= 1;
            info!(
                "klingon destroyed at {:?}/{:?}, {} remain",
                q, sector, self.total_klingons
            );
        }
        removed
    }

    /// Destroy the starbase at `sector` of quadrant `q`.
    pub fn destroy_starbase(&mut self, q: QuadrantPosition, sector: SectorPosition) -> bool {
        let removed = self
            .quadrant_mut(q)
            .is_some_and(|quadrant| quadrant.remove_starbase(sector));
        if removed {
            self.total_starbases -= 1;
            info!("starbase destroyed at {:?}/{:?}", q, sector);
        }
        removed
    }

    /// Replace a quadrant's sector map wholesale, moving the galaxy totals
    /// by the difference in Klingons and starbases. Used to stage scenarios.
    pub fn install_sector_map(&mut self, q: QuadrantPosition, map: SectorMap) {
        let Some(quadrant) = self.quadrant_mut(q) else {
            return;
        };
        let before = quadrant.data();
        quadrant.install_sector_map(map);
        let after: QuadrantData = quadrant.data();
        self.total_klingons += after.klingons - before.klingons;
        self.total_starbases += after.starbases - before.starbases;
        self.initial_klingons = self.initial_klingons.max(self.total_klingons);
    }

    // ========== End Atomic Update Methods ==========

    pub fn mark_scanned(&mut self, q: QuadrantPosition) {
        if let Some(quadrant) = self.quadrant_mut(q) {
            quadrant.mark_scanned();
        }
    }

    /// Scan the 3x3 block around `center`. Every in-bounds quadrant is
    /// recorded as scanned.
    pub fn long_range_scan(&mut self, center: QuadrantPosition) -> LongRangeScan {
        let mut result = [[None; 3]; 3];
        for (i, dr) in (-1..=1).enumerate() {
            for (j, dc) in (-1..=1).enumerate() {
                let pos = QuadrantPosition::new(center.row + dr, center.col + dc);
                if let Some(quadrant) = self.quadrant_mut(pos) {
                    quadrant.mark_scanned();
                    result[i][j] = Some(quadrant.lrs_value());
                }
            }
        }
        result
    }

    pub fn advance_time(&mut self, days: f64) {
        self.stardate += days;
    }

    pub fn days_used(&self) -> f64 {
        self.stardate - self.starting_stardate
    }

    pub fn time_remaining(&self) -> f64 {
        (self.time_limit - self.days_used()).max(0.0)
    }

    pub fn is_game_won(&self) -> bool {
        self.total_klingons <= 0
    }

    pub fn is_time_up(&self) -> bool {
        self.time_remaining() <= 0.0
    }

    /// Score for a victory: Klingons destroyed per day, times 1000. Fewer
    /// than one day counts as one.
    pub fn efficiency_rating(&self) -> f64 {
        let days = self.days_used().max(1.0);
        f64::from(self.initial_klingons) / days * 1000.0
    }
}

// Quadrant maps would drown the useful fields.
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.stardate)
            .field("total_klingons", &self.total_klingons)
            .field("starbases", &self.total_starbases)
            .field("time_limit", &self.time_limit)
            .finish_non_exhaustive()
    }
}
