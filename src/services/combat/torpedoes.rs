use log::info;

use crate::models::constants::{Device, SectorContent, TORPEDO_MAX_STEPS};
use crate::models::enterprise::Enterprise;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Course;
use crate::models::position::SectorPosition;
use crate::services::geometry::course_delta;

/// How a torpedo's flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorpedoOutcome {
    KlingonDestroyed(SectorPosition),
    StarHit(SectorPosition),
    /// A friendly starbase was destroyed. Starfleet will want a word.
    StarbaseDestroyed(SectorPosition),
    /// Left the quadrant or ran out of range.
    Missed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TorpedoReport {
    /// Sectors the torpedo passed through, in order, including the one it hit.
    pub track: Vec<SectorPosition>,
    pub outcome: TorpedoOutcome,
}

impl TorpedoReport {
    pub fn klingons_destroyed(&self) -> usize {
        usize::from(matches!(self.outcome, TorpedoOutcome::KlingonDestroyed(_)))
    }
}

fn check_torpedo_readiness(enterprise: &Enterprise) -> GameResult<()> {
    if enterprise.is_damaged(Device::PhotonTubes) {
        return Err(GameError::DeviceDamaged(Device::PhotonTubes));
    }
    if enterprise.torpedoes() <= 0 {
        return Err(GameError::InsufficientResources {
            resource: "TORPEDOES",
            required: 1,
            available: 0,
        });
    }
    Ok(())
}

/// Launch a photon torpedo along `course` from the ship's sector.
///
/// The torpedo is spent before the flight is resolved. Each step advances one
/// sector length and rounds (ties to even) to the cell it tests; the first
/// occupied cell other than the Enterprise decides the outcome.
pub fn fire_torpedo(
    enterprise: &mut Enterprise,
    galaxy: &mut Galaxy,
    course: Course,
) -> GameResult<TorpedoReport> {
    check_torpedo_readiness(enterprise)?;
    enterprise.fire_torpedo();

    let q = enterprise.quadrant();
    let start = enterprise.sector();
    let (dr, dc) = course_delta(course.value());
    let mut row = f64::from(start.row);
    let mut col = f64::from(start.col);
    let mut track = Vec::with_capacity(TORPEDO_MAX_STEPS);

    for _ in 0..TORPEDO_MAX_STEPS {
        row += dr;
        col += dc;
        let cell = SectorPosition::new(row.round_ties_even() as i32, col.round_ties_even() as i32);
        if !cell.in_bounds() {
            break;
        }
        track.push(cell);

        let content = galaxy
            .quadrant(q)
            .map_or(SectorContent::Empty, |quadrant| quadrant.entity_at(cell));
        let outcome = match content {
            SectorContent::Klingon => {
                galaxy.destroy_klingon(q, cell);
                TorpedoOutcome::KlingonDestroyed(cell)
            }
            SectorContent::Star => TorpedoOutcome::StarHit(cell),
            SectorContent::Starbase => {
                galaxy.destroy_starbase(q, cell);
                info!("torpedo destroyed the starbase at {:?}", cell);
                TorpedoOutcome::StarbaseDestroyed(cell)
            }
            SectorContent::Empty | SectorContent::Enterprise => continue,
        };
        return Ok(TorpedoReport { track, outcome });
    }

    Ok(TorpedoReport {
        track,
        outcome: TorpedoOutcome::Missed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::klingon::Klingon;
    use crate::models::position::QuadrantPosition;
    use crate::models::sector_map::SectorMap;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const Q: QuadrantPosition = QuadrantPosition { row: 5, col: 5 };

    fn setup(ship: SectorPosition, build: impl FnOnce(&mut SectorMap)) -> (Enterprise, Galaxy) {
        let mut rng = StdRng::seed_from_u64(7);
        let mut galaxy = Galaxy::new(&mut rng);
        let mut map = SectorMap::new();
        map.add_enterprise(ship);
        build(&mut map);
        galaxy.install_sector_map(Q, map);
        (Enterprise::new(Q, ship), galaxy)
    }

    fn course(value: f64) -> Course {
        Course::new(value).expect("valid course")
    }

    #[test]
    fn hits_klingon_due_east() {
        let target = SectorPosition::new(4, 6);
        let (mut e, mut g) = setup(SectorPosition::new(4, 1), |m| {
            m.add_klingon(Klingon::with_energy(target, 500));
        });
        let before = g.total_klingons();
        let report = fire_torpedo(&mut e, &mut g, course(1.0)).expect("fires");
        assert_eq!(report.outcome, TorpedoOutcome::KlingonDestroyed(target));
        assert_eq!(report.klingons_destroyed(), 1);
        assert_eq!(report.track.last(), Some(&target));
        assert_eq!(g.total_klingons(), before - 1);
        assert_eq!(e.torpedoes(), 9);
    }

    #[test]
    fn star_absorbs_torpedo() {
        let star = SectorPosition::new(2, 4);
        let klingon = SectorPosition::new(0, 4);
        let (mut e, mut g) = setup(SectorPosition::new(4, 4), |m| {
            m.add_star(star);
            m.add_klingon(Klingon::with_energy(klingon, 500));
        });
        let before = g.total_klingons();
        let report = fire_torpedo(&mut e, &mut g, course(3.0)).expect("fires");
        assert_eq!(report.outcome, TorpedoOutcome::StarHit(star));
        assert_eq!(g.total_klingons(), before);
    }

    #[test]
    fn starbase_hit_clears_both_counters() {
        let base = SectorPosition::new(7, 4);
        let (mut e, mut g) = setup(SectorPosition::new(4, 4), |m| {
            m.add_starbase(base);
        });
        let before = g.total_starbases();
        let report = fire_torpedo(&mut e, &mut g, course(7.0)).expect("fires");
        assert_eq!(report.outcome, TorpedoOutcome::StarbaseDestroyed(base));
        assert_eq!(g.total_starbases(), before - 1);
        let quadrant = g.quadrant(Q).expect("quadrant");
        assert_eq!(quadrant.starbase_count(), 0);
        assert_eq!(quadrant.entity_at(base), SectorContent::Empty);
    }

    #[test]
    fn leaving_the_quadrant_misses() {
        let (mut e, mut g) = setup(SectorPosition::new(0, 0), |m| {
            m.add_klingon(Klingon::with_energy(SectorPosition::new(7, 7), 500));
        });
        let before = g.total_klingons();
        let report = fire_torpedo(&mut e, &mut g, course(5.0)).expect("fires");
        assert_eq!(report.outcome, TorpedoOutcome::Missed);
        assert_eq!(report.klingons_destroyed(), 0);
        assert!(report.track.is_empty());
        assert_eq!(g.total_klingons(), before);
        assert_eq!(e.torpedoes(), 9);
    }

    #[test]
    fn diagonal_track_crosses_open_space() {
        let (mut e, mut g) = setup(SectorPosition::new(0, 0), |_| {});
        let report = fire_torpedo(&mut e, &mut g, course(8.0)).expect("fires");
        assert_eq!(report.outcome, TorpedoOutcome::Missed);
        assert!(!report.track.is_empty());
        assert!(report.track.iter().all(|s| s.in_bounds()));
    }

    #[test]
    fn empty_tubes_are_rejected() {
        let (mut e, mut g) = setup(SectorPosition::new(4, 4), |_| {});
        e.set_torpedoes(0);
        let err = fire_torpedo(&mut e, &mut g, course(1.0)).unwrap_err();
        assert!(matches!(err, GameError::InsufficientResources { .. }));
    }

    #[test]
    fn damaged_tubes_keep_the_torpedo() {
        let (mut e, mut g) = setup(SectorPosition::new(4, 4), |_| {});
        e.damage_device(Device::PhotonTubes, 2.0);
        let err = fire_torpedo(&mut e, &mut g, course(1.0)).unwrap_err();
        assert!(matches!(err, GameError::DeviceDamaged(Device::PhotonTubes)));
        assert_eq!(e.torpedoes(), 10);
    }
}
