use log::debug;
use rand::Rng;

use crate::models::enterprise::{Enterprise, HitReport};
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;
use crate::services::geometry::firing_distance;

/// One Klingon's shot at the Enterprise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackHit {
    pub from: SectorPosition,
    pub damage: i32,
    pub report: HitReport,
}

/// Every Klingon in the Enterprise's quadrant fires once, in order.
///
/// Each shot lands before the next is rolled, and the volley stops as soon
/// as the ship is destroyed. A docked ship sits under the starbase's shields
/// and takes nothing.
pub fn klingons_fire<R: Rng + ?Sized>(
    enterprise: &mut Enterprise,
    galaxy: &Galaxy,
    rng: &mut R,
) -> Vec<AttackHit> {
    let mut hits = Vec::new();
    if enterprise.is_docked() {
        return hits;
    }
    let Some(quadrant) = galaxy.quadrant(enterprise.quadrant()) else {
        return hits;
    };

    for klingon in quadrant.klingons() {
        let d = firing_distance(enterprise.sector(), klingon.sector);
        let damage = (f64::from(klingon.energy) / d * rng.gen_range(0.5..1.0)).floor() as i32;
        let report = enterprise.apply_damage(damage, rng);
        debug!(
            "klingon at {:?} hits for {}, shields {} energy {}",
            klingon.sector,
            damage,
            enterprise.shields(),
            enterprise.energy()
        );
        hits.push(AttackHit {
            from: klingon.sector,
            damage,
            report,
        });
        if enterprise.is_destroyed() {
            break;
        }
    }
    hits
}
