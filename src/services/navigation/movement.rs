use log::{info, warn};
use rand::Rng;

use crate::models::constants::{Device, SECTOR_SIZE, WARP_ENERGY_OVERHEAD};
use crate::models::enterprise::Enterprise;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::{Course, WarpFactor};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::services::geometry::course_delta;

/// Result of a completed warp move.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReport {
    pub warp: f64,
    pub energy_used: i32,
    pub time_used: f64,
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    /// The move crossed into a different quadrant.
    pub entered_quadrant: bool,
    pub docked: bool,
    /// Klingons in the destination will open fire.
    pub counter_attack_due: bool,
}

/// Where a move would end, worked out without touching any state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FlightPlan {
    quadrant: QuadrantPosition,
    row: f64,
    col: f64,
    crossed: bool,
}

const SECTORS: f64 = SECTOR_SIZE as f64;

/// Wrap one axis of a continuous sector coordinate into [0, 8), carrying the
/// overflow into the quadrant coordinate.
fn wrap_axis(sector: &mut f64, quadrant: &mut i32) -> bool {
    if *sector < 0.0 {
        *sector += SECTORS;
        *quadrant -= 1;
        true
    } else if *sector >= SECTORS {
        *sector -= SECTORS;
        *quadrant += 1;
        true
    } else {
        false
    }
}

/// Trace `steps` unit steps from the ship's position. Fails with
/// `GalacticBarrier` if any step leaves the galaxy.
fn plan_flight(
    start_q: QuadrantPosition,
    start_s: SectorPosition,
    course: Course,
    steps: i32,
) -> GameResult<FlightPlan> {
    let (dr, dc) = course_delta(course.value());
    let mut plan = FlightPlan {
        quadrant: start_q,
        row: f64::from(start_s.row),
        col: f64::from(start_s.col),
        crossed: false,
    };

    for _ in 0..steps {
        plan.row += dr;
        plan.col += dc;
        plan.crossed |= wrap_axis(&mut plan.row, &mut plan.quadrant.row);
        plan.crossed |= wrap_axis(&mut plan.col, &mut plan.quadrant.col);
        if !plan.quadrant.in_bounds() {
            return Err(GameError::GalacticBarrier);
        }
    }
    Ok(plan)
}

fn final_sector(plan: &FlightPlan) -> SectorPosition {
    let size = SECTOR_SIZE as i32;
    SectorPosition::new(
        (plan.row.round_ties_even() as i32).rem_euclid(size),
        (plan.col.round_ties_even() as i32).rem_euclid(size),
    )
}

/// Engage the warp engines.
///
/// Moves `floor(warp * 8)` sectors along `course` for `sectors + 10` energy
/// and `1 / warp` days. Warp 0 is accepted and does nothing. The whole path is
/// checked before anything changes, so a move that would cross the galactic
/// barrier leaves ship, energy and docking state exactly as they were.
///
/// On arrival in a new quadrant its sector map is rebuilt from scratch; within
/// the same quadrant an occupied destination bumps the ship to a random empty
/// sector. Ending next to a starbase docks.
pub fn navigate<R: Rng + ?Sized>(
    enterprise: &mut Enterprise,
    galaxy: &mut Galaxy,
    course: Course,
    warp: WarpFactor,
    rng: &mut R,
) -> GameResult<NavigationReport> {
    if enterprise.is_damaged(Device::WarpEngines) {
        return Err(GameError::DeviceDamaged(Device::WarpEngines));
    }

    let start_q = enterprise.quadrant();
    let start_s = enterprise.sector();

    if warp.is_stationary() {
        return Ok(NavigationReport {
            warp: 0.0,
            energy_used: 0,
            time_used: 0.0,
            quadrant: start_q,
            sector: start_s,
            entered_quadrant: false,
            docked: enterprise.is_docked(),
            counter_attack_due: false,
        });
    }

    let steps = warp.sectors();
    let cost = steps + WARP_ENERGY_OVERHEAD;
    if cost > enterprise.energy() {
        return Err(GameError::InsufficientResources {
            resource: "ENERGY",
            required: cost,
            available: enterprise.energy(),
        });
    }

    let plan = match plan_flight(start_q, start_s, course, steps) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(
                "navigation from {:?} course {} warp {} hit the galactic barrier",
                start_q, course, warp
            );
            return Err(err);
        }
    };

    // Commit.
    enterprise.use_energy(cost);
    enterprise.undock();
    if let Some(origin) = galaxy.quadrant_mut(start_q) {
        origin.remove_enterprise(start_s);
    }

    let requested = final_sector(&plan);
    let (actual, docked, klingons_here) = match galaxy.quadrant_mut(plan.quadrant) {
        Some(destination) => {
            if plan.crossed {
                destination.initialize_sector_map(rng);
            }
            let actual = destination.place_enterprise(requested, rng);
            (
                actual,
                destination.is_adjacent_to_starbase(actual),
                destination.klingon_count(),
            )
        }
        None => (requested, false, 0),
    };

    enterprise.move_to(plan.quadrant, actual);
    if plan.crossed {
        info!("entered quadrant {:?} at {:?}", plan.quadrant, actual);
    }
    if docked {
        enterprise.dock();
        info!("docked at starbase in {:?}", plan.quadrant);
    }

    Ok(NavigationReport {
        warp: warp.value(),
        energy_used: cost,
        time_used: 1.0 / warp.value(),
        quadrant: plan.quadrant,
        sector: actual,
        entered_quadrant: plan.crossed,
        docked,
        counter_attack_due: klingons_here > 0 && !docked,
    })
}
