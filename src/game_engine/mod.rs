//! Game state machine
//!
//! The GameEngine owns the galaxy, the Enterprise and the single random
//! stream every roll is drawn from. It runs commands against that state,
//! applies the end-of-turn clock, repairs and counter-attack, and decides
//! when the game is over.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::models::constants::{Device, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::enterprise::Enterprise;
use crate::models::errors::GameResult;
use crate::models::galaxy::{Galaxy, LongRangeScan};
use crate::models::navigation_types::{Course, WarpFactor};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::Quadrant;
use crate::services::combat::{self, AttackHit, PhaserReport, TorpedoReport};
use crate::services::navigation::{self, NavigationReport};
use crate::services::scan;

/// Core game engine that manages game state and victory/defeat conditions
pub struct GameEngine {
    galaxy: Galaxy,
    enterprise: Enterprise,
    rng: StdRng,
    state: GameState,
    resigned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Victory { rating: f64 },
    Defeat { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    ShipDestroyed,
    TimeExpired,
    Resigned,
}

/// What happened between commands: the clock, repairs and enemy fire.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TurnReport {
    pub time_used: f64,
    pub repaired: Vec<Device>,
    pub hits: Vec<AttackHit>,
}

/// Generate a galaxy and pick the Enterprise's starting cell. The start
/// quadrant gets its sector map and counts as already scanned.
fn launch(rng: &mut StdRng) -> (Galaxy, QuadrantPosition, SectorPosition) {
    let mut galaxy = Galaxy::new(rng);

    let start_q = QuadrantPosition::new(
        rng.gen_range(0..GALAXY_SIZE as i32),
        rng.gen_range(0..GALAXY_SIZE as i32),
    );
    let requested = SectorPosition::new(
        rng.gen_range(0..SECTOR_SIZE as i32),
        rng.gen_range(0..SECTOR_SIZE as i32),
    );

    let mut start_s = requested;
    if let Some(quadrant) = galaxy.quadrant_mut(start_q) {
        quadrant.initialize_sector_map(rng);
        start_s = quadrant.place_enterprise(requested, rng);
    }
    galaxy.mark_scanned(start_q);
    (galaxy, start_q, start_s)
}

impl GameEngine {
    /// Creates a new game engine with a procedurally generated galaxy
    ///
    /// The Enterprise starts at a random sector of a random quadrant. That
    /// quadrant's sector map is built and it counts as already scanned.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (galaxy, start_q, start_s) = launch(&mut rng);

        info!("new game seed {}: enterprise at {:?}/{:?}", seed, start_q, start_s);

        Self {
            galaxy,
            enterprise: Enterprise::new(start_q, start_s),
            rng,
            state: GameState::Playing,
            resigned: false,
        }
    }

    /// Start another game on a fresh galaxy with a refitted ship. The rolls
    /// continue from the same random stream, so a whole session replays
    /// from one seed.
    pub fn restart(&mut self) {
        let (galaxy, start_q, start_s) = launch(&mut self.rng);
        self.galaxy = galaxy;
        self.enterprise.reset();
        self.enterprise.move_to(start_q, start_s);
        self.state = GameState::Playing;
        self.resigned = false;

        info!("restarted: enterprise at {:?}/{:?}", start_q, start_s);
    }

    /// Returns an immutable reference to the galaxy
    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Returns a mutable reference to the galaxy
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn enterprise(&self) -> &Enterprise {
        &self.enterprise
    }

    pub fn enterprise_mut(&mut self) -> &mut Enterprise {
        &mut self.enterprise
    }

    /// Returns the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The quadrant the Enterprise is in.
    pub fn current_quadrant(&self) -> Option<&Quadrant> {
        self.galaxy.quadrant(self.enterprise.quadrant())
    }

    /// Klingons sharing the Enterprise's quadrant.
    pub fn klingons_here(&self) -> i32 {
        self.current_quadrant().map_or(0, |q| q.klingon_count())
    }

    pub fn navigate(&mut self, course: Course, warp: WarpFactor) -> GameResult<NavigationReport> {
        navigation::navigate(
            &mut self.enterprise,
            &mut self.galaxy,
            course,
            warp,
            &mut self.rng,
        )
    }

    pub fn fire_phasers(&mut self, energy: i32) -> GameResult<PhaserReport> {
        combat::fire_phasers(&mut self.enterprise, &mut self.galaxy, energy, &mut self.rng)
    }

    pub fn fire_torpedo(&mut self, course: Course) -> GameResult<TorpedoReport> {
        combat::fire_torpedo(&mut self.enterprise, &mut self.galaxy, course)
    }

    pub fn shield_control(&mut self, amount: i32) -> GameResult<()> {
        combat::shield_control(&mut self.enterprise, amount)
    }

    /// Long range sensor sweep around the current quadrant.
    pub fn long_range_scan(&mut self) -> GameResult<LongRangeScan> {
        scan::long_range_scan(&self.enterprise, &mut self.galaxy)
    }

    /// Instant full repair, offered while docked.
    pub fn repair_all(&mut self) -> bool {
        if !self.enterprise.is_docked() || !self.enterprise.any_damage() {
            return false;
        }
        self.enterprise.repair_all();
        true
    }

    /// Close out a turn. Time advances and repairs tick first; then, if the
    /// command provoked it, the Klingons here return fire.
    pub fn end_turn(&mut self, time_used: f64, counter_attack: bool) -> TurnReport {
        let mut report = TurnReport {
            time_used,
            ..TurnReport::default()
        };

        if time_used > 0.0 {
            self.galaxy.advance_time(time_used);
            report.repaired = self.enterprise.repair_systems(time_used);
        }

        if counter_attack && self.klingons_here() > 0 && !self.enterprise.is_docked() {
            report.hits = combat::klingons_fire(&mut self.enterprise, &self.galaxy, &mut self.rng);
            debug!("counter-attack: {} shots", report.hits.len());
        }
        report
    }

    /// The captain gives up.
    pub fn resign(&mut self) {
        self.resigned = true;
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Victory or Defeat)
    /// * `None` if the game is still in progress
    ///
    /// Victory takes precedence: destroying the last Klingon wins even if
    /// the clock ran out on the same turn.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            return Some(self.state.clone());
        }

        let next = if self.galaxy.is_game_won() {
            GameState::Victory {
                rating: self.galaxy.efficiency_rating(),
            }
        } else if self.enterprise.is_destroyed() {
            GameState::Defeat {
                reason: DefeatReason::ShipDestroyed,
            }
        } else if self.galaxy.is_time_up() {
            GameState::Defeat {
                reason: DefeatReason::TimeExpired,
            }
        } else if self.resigned {
            GameState::Defeat {
                reason: DefeatReason::Resigned,
            }
        } else {
            return None;
        };

        info!("game over: {:?}", next);
        self.state = next;
        Some(self.state.clone())
    }
}

// The RNG's internal state is noise in a dump.
impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("galaxy", &self.galaxy)
            .field("enterprise", &self.enterprise)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
