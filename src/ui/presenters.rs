use crate::game_engine::{DefeatReason, GameState};
use crate::io::OutputWriter;
use crate::models::constants::{Device, SECTOR_SIZE};
use crate::models::enterprise::Enterprise;
use crate::models::galaxy::{Galaxy, LongRangeScan};
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::Quadrant;
use crate::services::combat::{AttackHit, PhaserReport, TorpedoOutcome, TorpedoReport};
use crate::services::computer::{Bearing, ComputerFunction, GalacticRecord, StarbaseNavigation};
use crate::services::navigation::NavigationReport;

const RULE_WIDTH: usize = 78;
const SRS_HEADER: &str = "    1   2   3   4   5   6   7   8";
const LRS_BORDER: &str = "+-----+-----+-----+";

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn grid_border(cell_width: usize) -> String {
    format!("  +{}", format!("{}+", "-".repeat(cell_width)).repeat(SECTOR_SIZE))
}

fn kbs_cell(value: Option<i32>) -> String {
    match value {
        Some(v) => format!("{:03}", v),
        None => "***".to_string(),
    }
}

pub struct ScanPresenter;

impl ScanPresenter {
    /// The sector grid, with ship status alongside the rows.
    pub fn show_short_range_scan(
        enterprise: &Enterprise,
        galaxy: &Galaxy,
        quadrant: &Quadrant,
        output: &mut dyn OutputWriter,
    ) {
        let Some(map) = quadrant.sector_map() else {
            output.writeln("SECTOR MAP NOT YET CHARTED");
            return;
        };

        let condition = enterprise.condition(quadrant.klingon_count());
        let status: [String; SECTOR_SIZE] = [
            format!("STARDATE          {:.1}", galaxy.stardate()),
            format!("CONDITION         {}", condition.label()),
            format!("QUADRANT          {}", quadrant.position()),
            format!("SECTOR            {}", enterprise.sector()),
            format!("ENERGY            {}", enterprise.energy()),
            format!("SHIELDS           {}", enterprise.shields()),
            format!("PHOTON TORPEDOES  {}", enterprise.torpedoes()),
            format!("KLINGONS LEFT     {}", galaxy.total_klingons()),
        ];

        let border = grid_border(3);
        output.writeln("SHORT RANGE SENSORS:");
        output.writeln(SRS_HEADER);
        output.writeln(&border);
        for (row, panel) in status.iter().enumerate() {
            output.writeln(&format!(
                "{} |{}    {}",
                row + 1,
                map.render_row(row as i32),
                panel
            ));
            output.writeln(&border);
        }
    }

    pub fn show_long_range_scan(
        scan: &LongRangeScan,
        center: QuadrantPosition,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!("LONG RANGE SENSOR SCAN FOR QUADRANT {}", center));
        output.writeln(LRS_BORDER);
        for row in scan {
            let cells: Vec<String> = row.iter().map(|v| format!(" {} ", kbs_cell(*v))).collect();
            output.writeln(&format!("|{}|", cells.join("|")));
            output.writeln(LRS_BORDER);
        }
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn show_mission_briefing(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        output.writeln(&rule('='));
        output.writeln("                            MISSION BRIEFING");
        output.writeln(&rule('='));
        output.writeln("");
        output.writeln("  CAPTAIN, YOUR MISSION IS TO DESTROY THE KLINGON INVASION FORCE.");
        output.writeln("");
        output.writeln(&format!("  KLINGON SHIPS TO DESTROY: {}", galaxy.total_klingons()));
        output.writeln(&format!("  STARBASES AVAILABLE:      {}", galaxy.total_starbases()));
        output.writeln(&format!("  STARTING STARDATE:        {:.1}", galaxy.stardate()));
        output.writeln(&format!("  TIME LIMIT:               {} DAYS", galaxy.time_limit()));
        output.writeln("");
        Self::show_command_menu(output);
        output.writeln(&rule('='));
    }

    pub fn show_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("  AVAILABLE COMMANDS:");
        output.writeln("    NAV - NAVIGATE      SRS - SHORT RANGE SCAN   LRS - LONG RANGE SCAN");
        output.writeln("    PHA - PHASERS       TOR - TORPEDOES          SHE - SHIELDS");
        output.writeln("    DAM - DAMAGE REPORT COM - COMPUTER           XXX - RESIGN");
    }

    pub fn show_status_bar(enterprise: &Enterprise, galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        let q = enterprise.quadrant();
        let (name, klingons_here) = galaxy
            .quadrant(q)
            .map_or((String::new(), 0), |quad| (quad.name(), quad.klingon_count()));
        output.writeln(&format!(
            "STARDATE: {:.1}    TIME LEFT: {:.0} DAYS    KLINGONS: {}    STARBASES: {}",
            galaxy.stardate(),
            galaxy.time_remaining(),
            galaxy.total_klingons(),
            galaxy.total_starbases()
        ));
        output.writeln(&format!(
            "QUADRANT: {} {}              CONDITION: {}",
            name,
            q,
            enterprise.condition(klingons_here).label()
        ));
        output.writeln(&rule('-'));
    }

    pub fn show_entering_quadrant(quadrant: &Quadrant, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("NOW ENTERING QUADRANT {}", quadrant.name()));
        if quadrant.klingon_count() > 0 {
            output.writeln(&format!(
                "*** RED ALERT! {} KLINGON(S) DETECTED! ***",
                quadrant.klingon_count()
            ));
        }
        if quadrant.starbase_count() > 0 {
            output.writeln("A FEDERATION STARBASE IS IN THIS QUADRANT.");
        }
        output.writeln("");
    }

    pub fn show_status_report(enterprise: &Enterprise, galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        output.writeln(ComputerFunction::StatusReport.title());
        output.writeln("");
        output.writeln(&format!("STARDATE:           {:.1}", galaxy.stardate()));
        output.writeln(&format!("TIME REMAINING:     {:.1} DAYS", galaxy.time_remaining()));
        output.writeln(&format!("KLINGONS REMAINING: {}", galaxy.total_klingons()));
        output.writeln(&format!("STARBASES:          {}", galaxy.total_starbases()));
        output.writeln(&format!("ENERGY:             {}", enterprise.energy()));
        output.writeln(&format!("SHIELDS:            {}", enterprise.shields()));
        output.writeln(&format!("TORPEDOES:          {}", enterprise.torpedoes()));
    }
}

pub struct EnterprisePresenter;

impl EnterprisePresenter {
    pub fn show_damage_report(enterprise: &Enterprise, output: &mut dyn OutputWriter) {
        output.writeln("DAMAGE CONTROL REPORT");
        output.writeln("");
        output.writeln(&format!("{:<25} {}", "DEVICE", "STATE OF REPAIR"));
        output.writeln(&"-".repeat(40));
        for device in Device::ALL {
            let state = enterprise.device_state(device);
            let status = if state < 0.0 {
                format!("DAMAGED ({:.1} DAYS TO REPAIR)", -state)
            } else {
                "OPERATIONAL".to_string()
            };
            output.writeln(&format!("{:<25} {}", device.name(), status));
        }
    }

    pub fn show_shield_status(enterprise: &Enterprise, output: &mut dyn OutputWriter) {
        output.writeln(&format!("SHIELDS:      {}", enterprise.shields()));
        output.writeln(&format!("ENERGY:       {}", enterprise.energy()));
        output.writeln(&format!("TOTAL:        {}", enterprise.total_energy()));
    }

    pub fn show_repairs(repaired: &[Device], output: &mut dyn OutputWriter) {
        for device in repaired {
            output.writeln(&format!("*** {} REPAIRED ***", device.name()));
        }
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_phaser_report(report: &PhaserReport, output: &mut dyn OutputWriter) {
        if report.overheated {
            output.writeln(&format!(
                "PHASERS OVERHEATED AND DAMAGED! {} UNITS WASTED.",
                report.energy_fired
            ));
            return;
        }

        output.writeln(&format!("PHASERS FIRED WITH {} UNITS OF ENERGY.", report.energy_fired));
        for hit in &report.hits {
            if hit.destroyed {
                output.writeln(&format!("*** KLINGON AT {} DESTROYED ***", hit.sector));
            } else {
                output.writeln(&format!(
                    "{} UNIT HIT ON KLINGON AT SECTOR {}   ({} LEFT)",
                    hit.damage, hit.sector, hit.remaining
                ));
            }
        }
    }

    pub fn show_torpedo_report(report: &TorpedoReport, output: &mut dyn OutputWriter) {
        output.writeln("TORPEDO TRACK:");
        for cell in &report.track {
            output.writeln(&format!("    {}", cell));
        }
        match report.outcome {
            TorpedoOutcome::KlingonDestroyed(pos) => {
                output.writeln(&format!("*** TORPEDO HIT KLINGON AT {} ***", pos));
                output.writeln("*** KLINGON DESTROYED ***");
            }
            TorpedoOutcome::StarHit(pos) => {
                output.writeln(&format!("TORPEDO IMPACTED STAR AT {} - ABSORBED.", pos));
            }
            TorpedoOutcome::StarbaseDestroyed(pos) => {
                output.writeln(&format!("*** TORPEDO HIT STARBASE AT {} ***", pos));
                output.writeln("*** STARBASE DESTROYED ***");
                output.writeln("YOU WILL BE COURT-MARTIALED FOR THIS!");
            }
            TorpedoOutcome::Missed => output.writeln("TORPEDO MISSED"),
        }
    }

    pub fn show_attack(hits: &[AttackHit], output: &mut dyn OutputWriter) {
        for hit in hits {
            output.writeln(&format!("KLINGON AT {} FIRES!", hit.from));
            output.writeln(&format!("   {} UNIT HIT ON ENTERPRISE", hit.damage));
            if hit.report.shield_absorbed > 0 {
                output.writeln(&format!("   SHIELDS ABSORB {}", hit.report.shield_absorbed));
            }
            if hit.report.hull_damage > 0 {
                output.writeln(&format!("   HULL TAKES {}", hit.report.hull_damage));
            }
            if let Some((device, _)) = hit.report.device_damage {
                output.writeln(&format!("   *** {} DAMAGED ***", device.name()));
            }
        }
    }
}

pub struct NavigationPresenter;

impl NavigationPresenter {
    pub fn show_navigation(report: &NavigationReport, output: &mut dyn OutputWriter) {
        output.writeln(&format!("WARP {:.1} ENGAGED.", report.warp));
        output.writeln(&format!("POSITION: SECTOR {}", report.sector));
        output.writeln(&format!("ENERGY USED: {}", report.energy_used));
        if report.docked {
            output.writeln("*** DOCKED AT STARBASE ***");
            output.writeln("SHIELDS LOWERED. REPAIRS AND RESUPPLY AVAILABLE.");
        }
    }
}

pub struct ComputerPresenter;

impl ComputerPresenter {
    pub fn show_menu(output: &mut dyn OutputWriter) {
        output.writeln("COMPUTER FUNCTIONS:");
        for (index, function) in ComputerFunction::ALL.iter().enumerate() {
            output.writeln(&format!("{} = {}", index, function));
        }
    }

    pub fn show_galactic_record(record: &GalacticRecord, output: &mut dyn OutputWriter) {
        let border = grid_border(5);
        output.writeln(ComputerFunction::GalacticRecord.title());
        output.writeln("");
        output.writeln("     1     2     3     4     5     6     7     8");
        output.writeln(&border);
        for (row, cells) in record.iter().enumerate() {
            let cells: Vec<String> = cells.iter().map(|v| kbs_cell(*v)).collect();
            output.writeln(&format!("{} | {} |", row + 1, cells.join(" | ")));
            output.writeln(&border);
        }
    }

    pub fn show_torpedo_data(targets: &[Bearing], output: &mut dyn OutputWriter) {
        if targets.is_empty() {
            output.writeln("NO KLINGONS IN THIS QUADRANT.");
            return;
        }
        output.writeln(ComputerFunction::TorpedoData.title());
        output.writeln("");
        output.writeln(&format!("{:<20} {:<12} {:<10}", "KLINGON POSITION", "DIRECTION", "DISTANCE"));
        output.writeln(&"-".repeat(42));
        for target in targets {
            output.writeln(&format!(
                "{:<20} {:<12.2} {:<10.2}",
                target.to.to_string(),
                target.direction,
                target.distance
            ));
        }
    }

    pub fn show_starbase_navigation(nav: &StarbaseNavigation, output: &mut dyn OutputWriter) {
        output.writeln(ComputerFunction::StarbaseNavigation.title());
        output.writeln("");
        match nav {
            StarbaseNavigation::InQuadrant(bearing) => {
                output.writeln(&format!("STARBASE IN THIS QUADRANT AT {}", bearing.to));
                output.writeln(&format!("DIRECTION: {:.2}", bearing.direction));
                output.writeln(&format!("DISTANCE: {:.2} SECTORS", bearing.distance));
            }
            StarbaseNavigation::Distant {
                quadrant,
                name,
                distance,
            } => {
                output.writeln("NO STARBASE IN CURRENT QUADRANT.");
                output.writeln(&format!("NEAREST STARBASE: {} {}", name, quadrant));
                output.writeln(&format!("QUADRANT DISTANCE: {:.2}", distance));
            }
            StarbaseNavigation::NoneRemaining => output.writeln("NO STARBASES REMAINING!"),
        }
    }

    pub fn show_bearing(bearing: &Bearing, output: &mut dyn OutputWriter) {
        output.writeln(ComputerFunction::DirectionCalculator.title());
        output.writeln("");
        output.writeln(&format!("FROM {} TO {}", bearing.from, bearing.to));
        output.writeln(&format!("DIRECTION: {:.2}", bearing.direction));
        output.writeln(&format!("DISTANCE: {:.2}", bearing.distance));
    }

    pub fn show_region_map(names: &[Vec<String>], output: &mut dyn OutputWriter) {
        output.writeln(ComputerFunction::RegionMap.title());
        output.writeln("");
        for row in names {
            let cells: Vec<String> = row.iter().map(|name| format!("{:<12}", name)).collect();
            output.writeln(&cells.join(" "));
        }
    }
}

pub struct GameOverPresenter;

impl GameOverPresenter {
    /// Closing words for a given efficiency rating.
    pub fn rank_for(rating: f64) -> &'static str {
        if rating > 1000.0 {
            "YOU HAVE BEEN PROMOTED TO ADMIRAL!"
        } else if rating > 500.0 {
            "YOU HAVE BEEN PROMOTED TO COMMODORE!"
        } else if rating > 200.0 {
            "YOU HAVE BEEN COMMENDED FOR YOUR SERVICE."
        } else {
            "YOUR PERFORMANCE WAS... ADEQUATE."
        }
    }

    pub fn show(state: &GameState, galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&rule('='));
        match state {
            GameState::Victory { rating } => {
                output.writeln("                         *** CONGRATULATIONS ***");
                output.writeln("");
                output.writeln("        YOU HAVE DESTROYED THE KLINGON INVASION FORCE!");
                output.writeln("");
                output.writeln(&format!("        KLINGONS DESTROYED: {}", galaxy.initial_klingons()));
                output.writeln(&format!("        DAYS USED:          {:.1}", galaxy.days_used().max(1.0)));
                output.writeln(&format!("        RATING:             {:.0}", rating));
                output.writeln("");
                output.writeln(&format!("        {}", Self::rank_for(*rating)));
            }
            GameState::Defeat { reason } => {
                output.writeln("                           *** GAME OVER ***");
                output.writeln("");
                let lines: [&str; 2] = match reason {
                    DefeatReason::ShipDestroyed => [
                        "THE ENTERPRISE HAS BEEN DESTROYED.",
                        "YOU HAVE FAILED IN YOUR MISSION.",
                    ],
                    DefeatReason::TimeExpired => [
                        "YOU HAVE RUN OUT OF TIME!",
                        "THE FEDERATION HAS FALLEN TO THE KLINGON EMPIRE.",
                    ],
                    DefeatReason::Resigned => [
                        "YOU HAVE RELINQUISHED COMMAND.",
                        "THE FEDERATION WILL BE CONQUERED.",
                    ],
                };
                for line in lines {
                    output.writeln(&format!("        {}", line));
                }
                output.writeln("");
                output.writeln(&format!("        KLINGONS REMAINING: {}", galaxy.total_klingons()));
            }
            GameState::Playing => {}
        }
        output.writeln(&rule('='));
    }
}
