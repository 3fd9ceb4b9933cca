use crate::models::constants::Device;
use crate::models::enterprise::Enterprise;
use crate::models::errors::{GameError, GameResult};

/// Move `amount` units between the main reactor and the shields. Positive
/// raises the shields, negative lowers them, zero changes nothing.
pub fn shield_control(enterprise: &mut Enterprise, amount: i32) -> GameResult<()> {
    if enterprise.is_damaged(Device::ShieldControl) {
        return Err(GameError::DeviceDamaged(Device::ShieldControl));
    }
    if amount == 0 {
        return Ok(());
    }
    if amount > 0 && amount > enterprise.energy() {
        return Err(GameError::InsufficientResources {
            resource: "ENERGY",
            required: amount,
            available: enterprise.energy(),
        });
    }
    // shields are never negative, so this negation cannot overflow
    if amount < -enterprise.shields() {
        return Err(GameError::InsufficientResources {
            resource: "SHIELD ENERGY",
            required: amount.saturating_neg(),
            available: enterprise.shields(),
        });
    }
    enterprise.transfer_to_shields(amount);
    Ok(())
}
