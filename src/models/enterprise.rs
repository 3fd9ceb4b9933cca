use rand::Rng;

use super::constants::{
    Condition, Device, DOCKED_REPAIR_RATE, FIELD_REPAIR_RATE, INITIAL_SHIELDS, MAX_ENERGY,
    MAX_TORPEDOES, NUM_DEVICES, SYSTEM_DAMAGE_CHANCE,
};
use super::position::{QuadrantPosition, SectorPosition};

/// What a single incoming hit did to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HitReport {
    pub shield_absorbed: i32,
    pub hull_damage: i32,
    /// Device knocked out by the hit, with the repair days it lost.
    pub device_damage: Option<(Device, f64)>,
    pub destroyed: bool,
}

/// The player's starship.
#[derive(Debug, Clone, PartialEq)]
pub struct Enterprise {
    quadrant: QuadrantPosition,
    sector: SectorPosition,
    energy: i32,
    torpedoes: i32,
    shields: i32,
    docked: bool,
    destroyed: bool,
    /// Repair state per device: 0 = operational, negative = days of repair left.
    devices: [f64; NUM_DEVICES],
}

impl Enterprise {
    pub fn new(quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Enterprise {
            quadrant,
            sector,
            energy: MAX_ENERGY,
            torpedoes: MAX_TORPEDOES,
            shields: INITIAL_SHIELDS,
            docked: false,
            destroyed: false,
            devices: [0.0; NUM_DEVICES],
        }
    }

    /// Restore a fresh ship, keeping its position.
    pub fn reset(&mut self) {
        *self = Enterprise::new(self.quadrant, self.sector);
    }

    // ========== Accessor Methods ==========

    pub fn quadrant(&self) -> QuadrantPosition {
        self.quadrant
    }

    pub fn sector(&self) -> SectorPosition {
        self.sector
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn shields(&self) -> i32 {
        self.shields
    }

    /// Energy plus shields.
    pub fn total_energy(&self) -> i32 {
        self.energy + self.shields
    }

    pub fn torpedoes(&self) -> i32 {
        self.torpedoes
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn device_state(&self, device: Device) -> f64 {
        self.devices[device as usize]
    }

    // Test-only setters
    #[cfg(test)]
    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy;
    }

    #[cfg(test)]
    pub fn set_shields(&mut self, shields: i32) {
        self.shields = shields;
    }

    #[cfg(test)]
    pub fn set_torpedoes(&mut self, torpedoes: i32) {
        self.torpedoes = torpedoes;
    }

    // ========== End Accessor Methods ==========

    pub fn is_damaged(&self, device: Device) -> bool {
        self.devices[device as usize] < 0.0
    }

    pub fn any_damage(&self) -> bool {
        self.devices.iter().any(|&d| d < 0.0)
    }

    /// Knock `days` of repair off a device's state.
    pub fn damage_device(&mut self, device: Device, days: f64) {
        self.devices[device as usize] -= days;
    }

    /// Overwrite a device's repair state.
    pub fn set_device_state(&mut self, device: Device, value: f64) {
        self.devices[device as usize] = value;
    }

    pub fn repair_all(&mut self) {
        self.devices = [0.0; NUM_DEVICES];
    }

    /// Advance repairs by `elapsed` days. Returns the devices that came back
    /// online during this tick.
    pub fn repair_systems(&mut self, elapsed: f64) -> Vec<Device> {
        let rate = if self.docked {
            DOCKED_REPAIR_RATE
        } else {
            FIELD_REPAIR_RATE
        };

        let mut repaired = Vec::new();
        for device in Device::ALL {
            let state = &mut self.devices[device as usize];
            if *state < 0.0 {
                *state += rate * elapsed;
                if *state >= 0.0 {
                    *state = 0.0;
                    repaired.push(device);
                }
            }
        }
        repaired
    }

    /// Refit at a starbase: full energy and torpedoes, shields down.
    pub fn dock(&mut self) {
        self.docked = true;
        self.energy = MAX_ENERGY;
        self.torpedoes = MAX_TORPEDOES;
        self.shields = 0;
    }

    pub fn undock(&mut self) {
        self.docked = false;
    }

    pub fn move_to(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.quadrant = quadrant;
        self.sector = sector;
    }

    /// Spend energy. Returns false, changing nothing, if there is not enough.
    pub fn use_energy(&mut self, amount: i32) -> bool {
        if amount > self.energy {
            return false;
        }
        self.energy -= amount;
        true
    }

    /// Positive amounts move energy into the shields, negative amounts move
    /// shield power back. Returns false, changing nothing, if the source
    /// cannot cover the transfer.
    pub fn transfer_to_shields(&mut self, amount: i32) -> bool {
        if amount >= 0 {
            if amount > self.energy {
                return false;
            }
        } else if amount < -self.shields {
            return false;
        }
        self.energy -= amount;
        self.shields += amount;
        true
    }

    pub fn fire_torpedo(&mut self) -> bool {
        if self.torpedoes <= 0 {
            return false;
        }
        self.torpedoes -= 1;
        true
    }

    pub fn condition(&self, klingons_here: i32) -> Condition {
        if self.docked {
            Condition::Docked
        } else if klingons_here > 0 {
            Condition::Red
        } else if self.energy < MAX_ENERGY / 10 {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    /// Take an incoming hit. Shields soak up what they can; anything left
    /// drains energy and may knock out a random device.
    pub fn apply_damage<R: Rng + ?Sized>(&mut self, amount: i32, rng: &mut R) -> HitReport {
        let mut report = HitReport::default();
        let mut remaining = amount.max(0);

        if self.shields >= remaining {
            self.shields -= remaining;
            report.shield_absorbed = remaining;
            remaining = 0;
        } else {
            report.shield_absorbed = self.shields;
            remaining -= self.shields;
            self.shields = 0;
        }

        if remaining > 0 {
            self.energy -= remaining;
            report.hull_damage = remaining;

            if rng.gen::<f64>() < SYSTEM_DAMAGE_CHANCE {
                let device = Device::ALL[rng.gen_range(0..NUM_DEVICES)];
                let days = rng.gen_range(0.5..3.0);
                self.damage_device(device, days);
                report.device_damage = Some((device, days));
            }
        }

        if self.energy <= 0 {
            self.destroyed = true;
        }
        report.destroyed = self.destroyed;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn enterprise() -> Enterprise {
        Enterprise::new(QuadrantPosition::new(0, 0), SectorPosition::new(4, 4))
    }

    #[test]
    fn fresh_ship_is_fully_stocked() {
        let e = enterprise();
        assert_eq!(e.energy(), MAX_ENERGY);
        assert_eq!(e.torpedoes(), MAX_TORPEDOES);
        assert_eq!(e.shields(), 0);
        assert!(!e.is_docked());
        assert!(!e.any_damage());
    }

    #[test]
    fn dock_refits_and_drops_shields() {
        let mut e = enterprise();
        e.set_energy(100);
        e.set_shields(500);
        e.set_torpedoes(2);
        e.dock();
        assert!(e.is_docked());
        assert_eq!(e.energy(), MAX_ENERGY);
        assert_eq!(e.torpedoes(), MAX_TORPEDOES);
        assert_eq!(e.shields(), 0);
        e.undock();
        assert!(!e.is_docked());
        assert_eq!(e.energy(), MAX_ENERGY);
    }

    #[test]
    fn use_energy_rejects_overdraw() {
        let mut e = enterprise();
        assert!(!e.use_energy(MAX_ENERGY + 1));
        assert_eq!(e.energy(), MAX_ENERGY);
        assert!(e.use_energy(MAX_ENERGY));
        assert_eq!(e.energy(), 0);
    }

    #[test]
    fn shield_transfer_both_ways() {
        let mut e = enterprise();
        assert!(e.transfer_to_shields(1000));
        assert_eq!((e.energy(), e.shields()), (2000, 1000));
        assert!(e.transfer_to_shields(-400));
        assert_eq!((e.energy(), e.shields()), (2400, 600));
        assert!(!e.transfer_to_shields(-601));
        assert!(!e.transfer_to_shields(2401));
        assert_eq!((e.energy(), e.shields()), (2400, 600));
    }

    #[test]
    fn most_negative_transfer_changes_nothing() {
        let mut e = enterprise();
        assert!(e.transfer_to_shields(100));
        assert!(!e.transfer_to_shields(i32::MIN));
        assert_eq!((e.energy(), e.shields()), (2900, 100));
    }

    #[test]
    fn torpedoes_run_out() {
        let mut e = enterprise();
        e.set_torpedoes(1);
        assert!(e.fire_torpedo());
        assert!(!e.fire_torpedo());
        assert_eq!(e.torpedoes(), 0);
    }

    #[test]
    fn condition_priority() {
        let mut e = enterprise();
        assert_eq!(e.condition(0), Condition::Green);
        assert_eq!(e.condition(2), Condition::Red);
        e.set_energy(299);
        assert_eq!(e.condition(0), Condition::Yellow);
        e.dock();
        assert_eq!(e.condition(3), Condition::Docked);
    }

    #[test]
    fn shields_absorb_whole_hit() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut e = enterprise();
        e.set_shields(500);
        let report = e.apply_damage(200, &mut rng);
        assert_eq!(e.shields(), 300);
        assert_eq!(e.energy(), MAX_ENERGY);
        assert_eq!(report.hull_damage, 0);
        assert!(report.device_damage.is_none());
        assert!(!e.any_damage());
    }

    #[test]
    fn overflow_hits_energy() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut e = enterprise();
        e.set_shields(100);
        let report = e.apply_damage(250, &mut rng);
        assert_eq!(e.shields(), 0);
        assert_eq!(e.energy(), MAX_ENERGY - 150);
        assert_eq!(report.shield_absorbed, 100);
        assert_eq!(report.hull_damage, 150);
    }

    #[test]
    fn device_damage_is_bounded() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..100 {
            let mut e = enterprise();
            let report = e.apply_damage(10, &mut rng);
            if let Some((device, days)) = report.device_damage {
                assert!((0.5..3.0).contains(&days));
                assert_eq!(e.device_state(device), -days);
            } else {
                assert!(!e.any_damage());
            }
        }
    }

    #[test]
    fn lethal_hit_destroys() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = enterprise();
        e.set_energy(50);
        let report = e.apply_damage(50, &mut rng);
        assert!(report.destroyed);
        assert!(e.is_destroyed());
    }

    #[test]
    fn field_repairs_are_slow() {
        let mut e = enterprise();
        e.set_device_state(Device::WarpEngines, -1.0);
        let repaired = e.repair_systems(5.0);
        assert!(repaired.is_empty());
        assert!((e.device_state(Device::WarpEngines) + 0.5).abs() < 1e-9);
        let repaired = e.repair_systems(5.0);
        assert_eq!(repaired, vec![Device::WarpEngines]);
        assert_eq!(e.device_state(Device::WarpEngines), 0.0);
    }

    #[test]
    fn docked_repairs_snap_to_zero() {
        let mut e = enterprise();
        e.dock();
        e.set_device_state(Device::PhotonTubes, -0.3);
        e.set_device_state(Device::ShieldControl, -2.0);
        let repaired = e.repair_systems(1.0);
        assert_eq!(repaired, vec![Device::PhotonTubes]);
        assert_eq!(e.device_state(Device::PhotonTubes), 0.0);
        assert!((e.device_state(Device::ShieldControl) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_everything() {
        let mut e = enterprise();
        e.set_energy(0);
        e.damage_device(Device::LibraryComputer, 2.0);
        e.dock();
        e.reset();
        assert_eq!(e, enterprise());
    }
}
