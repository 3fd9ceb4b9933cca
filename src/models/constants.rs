pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;
pub const MAX_KLINGONS_PER_QUADRANT: i32 = 3;
pub const MIN_TOTAL_KLINGONS: i32 = 10;

pub const MAX_ENERGY: i32 = 3000;
pub const MAX_TORPEDOES: i32 = 10;
pub const INITIAL_SHIELDS: i32 = 0;

/// Klingon energy is `KLINGON_BASE_ENERGY + U{0..=KLINGON_ENERGY_SPREAD}`.
pub const KLINGON_BASE_ENERGY: i32 = 300;
pub const KLINGON_ENERGY_SPREAD: i32 = 299;

/// Fixed overhead added to every warp move on top of one unit per sector.
pub const WARP_ENERGY_OVERHEAD: i32 = 10;
pub const MAX_WARP: f64 = 8.0;

/// Phaser bursts above this risk overheating the phaser bank.
pub const PHASER_OVERHEAT_THRESHOLD: i32 = 1500;
pub const TORPEDO_MAX_STEPS: usize = 15;
/// Floor applied to any distance used as a divisor.
pub const MIN_FIRING_DISTANCE: f64 = 0.1;

pub const SYSTEM_DAMAGE_CHANCE: f64 = 0.6;
pub const DOCKED_REPAIR_RATE: f64 = 1.0;
pub const FIELD_REPAIR_RATE: f64 = 0.1;

pub const NUM_DEVICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    WarpEngines = 0,
    ShortRangeSensors = 1,
    LongRangeSensors = 2,
    PhaserControl = 3,
    PhotonTubes = 4,
    DamageControl = 5,
    ShieldControl = 6,
    LibraryComputer = 7,
}

impl Device {
    pub fn name(&self) -> &'static str {
        match self {
            Device::WarpEngines => "WARP ENGINES",
            Device::ShortRangeSensors => "SHORT RANGE SENSORS",
            Device::LongRangeSensors => "LONG RANGE SENSORS",
            Device::PhaserControl => "PHASER CONTROL",
            Device::PhotonTubes => "PHOTON TUBES",
            Device::DamageControl => "DAMAGE CONTROL",
            Device::ShieldControl => "SHIELD CONTROL",
            Device::LibraryComputer => "LIBRARY COMPUTER",
        }
    }

    pub const ALL: [Device; NUM_DEVICES] = [
        Device::WarpEngines,
        Device::ShortRangeSensors,
        Device::LongRangeSensors,
        Device::PhaserControl,
        Device::PhotonTubes,
        Device::DamageControl,
        Device::ShieldControl,
        Device::LibraryComputer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorContent {
    Empty = 0,
    Enterprise = 1,
    Klingon = 2,
    Starbase = 3,
    Star = 4,
}

impl SectorContent {
    pub fn symbol(&self) -> &'static str {
        match self {
            SectorContent::Empty => " . ",
            SectorContent::Enterprise => "<*>",
            SectorContent::Klingon => "+K+",
            SectorContent::Starbase => ">!<",
            SectorContent::Star => " * ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "YELLOW",
            Condition::Red => "RED",
            Condition::Docked => "DOCKED",
        }
    }
}

/// Unit steps for courses 1-8 as (delta_row, delta_col). Index 0 is unused.
/// Rows grow southward, so north is a negative row delta.
pub const COURSE_VECTORS: [(f64, f64); 9] = [
    (0.0, 0.0),   // index 0: unused
    (0.0, 1.0),   // course 1: east
    (-1.0, 1.0),  // course 2: northeast
    (-1.0, 0.0),  // course 3: north
    (-1.0, -1.0), // course 4: northwest
    (0.0, -1.0),  // course 5: west
    (1.0, -1.0),  // course 6: southwest
    (1.0, 0.0),   // course 7: south
    (1.0, 1.0),   // course 8: southeast
];
