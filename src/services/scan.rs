//! Sensor sweeps. Both check their device before looking at anything.

use crate::models::constants::Device;
use crate::models::enterprise::Enterprise;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::{Galaxy, LongRangeScan};
use crate::models::quadrant::Quadrant;

/// The quadrant the ship is in, ready for display. Read-only.
pub fn short_range_scan<'a>(enterprise: &Enterprise, galaxy: &'a Galaxy) -> GameResult<&'a Quadrant> {
    if enterprise.is_damaged(Device::ShortRangeSensors) {
        return Err(GameError::DeviceDamaged(Device::ShortRangeSensors));
    }
    galaxy
        .quadrant(enterprise.quadrant())
        .ok_or_else(|| GameError::InvalidInput("SHIP OUTSIDE THE GALAXY".to_string()))
}

/// KBS values for the 3x3 block around the ship. Every quadrant seen is
/// recorded in the galactic record.
pub fn long_range_scan(enterprise: &Enterprise, galaxy: &mut Galaxy) -> GameResult<LongRangeScan> {
    if enterprise.is_damaged(Device::LongRangeSensors) {
        return Err(GameError::DeviceDamaged(Device::LongRangeSensors));
    }
    Ok(galaxy.long_range_scan(enterprise.quadrant()))
}
