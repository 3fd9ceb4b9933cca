use std::fmt;

use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{Device, GALAXY_SIZE};
use crate::models::enterprise::Enterprise;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant_names::quadrant_name;
use crate::services::geometry::{direction_to, distance};
use crate::ui::presenters::{ComputerPresenter, StatusPresenter};

/// Region names are cut to this width on the region map.
const REGION_NAME_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerFunction {
    GalacticRecord,
    StatusReport,
    TorpedoData,
    StarbaseNavigation,
    DirectionCalculator,
    RegionMap,
}

impl ComputerFunction {
    pub const ALL: [ComputerFunction; 6] = [
        ComputerFunction::GalacticRecord,
        ComputerFunction::StatusReport,
        ComputerFunction::TorpedoData,
        ComputerFunction::StarbaseNavigation,
        ComputerFunction::DirectionCalculator,
        ComputerFunction::RegionMap,
    ];

    pub fn from_index(index: u32) -> GameResult<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidInput(format!("NO COMPUTER FUNCTION {}", index)))
    }

    pub fn title(&self) -> &'static str {
        match self {
            ComputerFunction::GalacticRecord => "CUMULATIVE GALACTIC RECORD",
            ComputerFunction::StatusReport => "STATUS REPORT",
            ComputerFunction::TorpedoData => "PHOTON TORPEDO DATA",
            ComputerFunction::StarbaseNavigation => "STARBASE NAVIGATION DATA",
            ComputerFunction::DirectionCalculator => "DIRECTION/DISTANCE CALCULATOR",
            ComputerFunction::RegionMap => "GALACTIC REGION MAP",
        }
    }
}

impl fmt::Display for ComputerFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Known KBS value per quadrant; `None` where sensors have never looked.
pub type GalacticRecord = [[Option<i32>; GALAXY_SIZE]; GALAXY_SIZE];

/// Heading and range from one sector to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    pub from: SectorPosition,
    pub to: SectorPosition,
    pub direction: f64,
    pub distance: f64,
}

impl Bearing {
    pub fn between(from: SectorPosition, to: SectorPosition) -> Self {
        Bearing {
            from,
            to,
            direction: direction_to(from, to),
            distance: distance(from, to),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StarbaseNavigation {
    InQuadrant(Bearing),
    Distant {
        quadrant: QuadrantPosition,
        name: String,
        distance: f64,
    },
    NoneRemaining,
}

pub fn galactic_record(galaxy: &Galaxy) -> GalacticRecord {
    let mut record = [[None; GALAXY_SIZE]; GALAXY_SIZE];
    for quadrant in galaxy.quadrants().filter(|q| q.is_scanned()) {
        let pos = quadrant.position();
        record[pos.row as usize][pos.col as usize] = Some(quadrant.lrs_value());
    }
    record
}

/// Firing solution for every Klingon in the current quadrant.
pub fn torpedo_data(enterprise: &Enterprise, galaxy: &Galaxy) -> Vec<Bearing> {
    galaxy
        .quadrant(enterprise.quadrant())
        .map(|q| {
            q.klingons()
                .iter()
                .map(|k| Bearing::between(enterprise.sector(), k.sector))
                .collect()
        })
        .unwrap_or_default()
}

/// Bearing to the starbase here, or else the closest quadrant (straight-line
/// quadrant distance) that still has one. Ties go to the first in row order.
pub fn starbase_navigation(enterprise: &Enterprise, galaxy: &Galaxy) -> StarbaseNavigation {
    let here = enterprise.quadrant();
    if let Some(base) = galaxy.quadrant(here).and_then(|q| q.starbase()) {
        return StarbaseNavigation::InQuadrant(Bearing::between(enterprise.sector(), base));
    }

    let mut nearest: Option<(QuadrantPosition, f64)> = None;
    for quadrant in galaxy.quadrants().filter(|q| q.starbase_count() > 0) {
        let pos = quadrant.position();
        let dr = f64::from(pos.row - here.row);
        let dc = f64::from(pos.col - here.col);
        let d = (dr * dr + dc * dc).sqrt();
        if nearest.map_or(true, |(_, best)| d < best) {
            nearest = Some((pos, d));
        }
    }

    match nearest {
        Some((quadrant, distance)) => StarbaseNavigation::Distant {
            quadrant,
            name: quadrant_name(quadrant),
            distance,
        },
        None => StarbaseNavigation::NoneRemaining,
    }
}

pub fn direction_calculator(from: SectorPosition, to: SectorPosition) -> GameResult<Bearing> {
    if !from.in_bounds() || !to.in_bounds() {
        return Err(GameError::InvalidInput("COORDINATES OUT OF RANGE".to_string()));
    }
    Ok(Bearing::between(from, to))
}

/// Region names for the whole galaxy, row by row, cut to 12 characters.
pub fn region_map() -> Vec<Vec<String>> {
    (0..GALAXY_SIZE as i32)
        .map(|row| {
            (0..GALAXY_SIZE as i32)
                .map(|col| {
                    quadrant_name(QuadrantPosition::new(row, col))
                        .chars()
                        .take(REGION_NAME_WIDTH)
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Read one 1-based coordinate and convert it to 0-based.
fn read_coordinate(input: &mut dyn InputReader, prompt: &str) -> GameResult<i32> {
    let value: i32 = input.read_line(prompt)?.trim().parse()?;
    value
        .checked_sub(1)
        .ok_or_else(|| GameError::InvalidInput("COORDINATES OUT OF RANGE".to_string()))
}

fn read_sector(input: &mut dyn InputReader) -> GameResult<SectorPosition> {
    let row = read_coordinate(input, "  ROW (1-8)?")?;
    let col = read_coordinate(input, "  COLUMN (1-8)?")?;
    Ok(SectorPosition::new(row, col))
}

/// COM: show the function menu, read a choice and run it.
pub fn library_computer(
    enterprise: &Enterprise,
    galaxy: &Galaxy,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    if enterprise.is_damaged(Device::LibraryComputer) {
        return Err(GameError::DeviceDamaged(Device::LibraryComputer));
    }

    ComputerPresenter::show_menu(output);
    let choice: u32 = input.read_line("COMPUTER FUNCTION (0-5)?")?.trim().parse()?;
    let function = ComputerFunction::from_index(choice)?;

    match function {
        ComputerFunction::GalacticRecord => {
            ComputerPresenter::show_galactic_record(&galactic_record(galaxy), output)
        }
        ComputerFunction::StatusReport => {
            StatusPresenter::show_status_report(enterprise, galaxy, output)
        }
        ComputerFunction::TorpedoData => {
            ComputerPresenter::show_torpedo_data(&torpedo_data(enterprise, galaxy), output)
        }
        ComputerFunction::StarbaseNavigation => ComputerPresenter::show_starbase_navigation(
            &starbase_navigation(enterprise, galaxy),
            output,
        ),
        ComputerFunction::DirectionCalculator => {
            output.writeln("ENTER STARTING COORDINATES:");
            let from = read_sector(input)?;
            output.writeln("ENTER DESTINATION COORDINATES:");
            let to = read_sector(input)?;
            let bearing = direction_calculator(from, to)?;
            ComputerPresenter::show_bearing(&bearing, output);
        }
        ComputerFunction::RegionMap => ComputerPresenter::show_region_map(&region_map(), output),
    }
    Ok(())
}
