//! Command dispatch
//!
//! Turns a three-letter command into prompts, an engine operation, sounds and
//! presented results. Every path that fails returns `Err` before the engine
//! is touched, so a rejected command costs no time and provokes no attack.

use std::str::FromStr;

use log::debug;

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::Device;
use crate::models::errors::{GameError, GameResult};
use crate::models::navigation_types::{Course, WarpFactor};
use crate::services::combat::TorpedoOutcome;
use crate::services::computer;
use crate::services::scan;
use crate::sound::{SoundEvent, SoundSink};
use crate::ui::presenters::{
    CombatPresenter, EnterprisePresenter, NavigationPresenter, ScanPresenter, StatusPresenter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate,
    ShortRangeScan,
    LongRangeScan,
    Phasers,
    Torpedo,
    Shields,
    DamageReport,
    Computer,
    Resign,
}

impl FromStr for Command {
    type Err = GameError;

    /// Only the first three letters count, in any case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token: String = input.trim().chars().take(3).collect::<String>().to_ascii_uppercase();
        match token.as_str() {
            "NAV" => Ok(Command::Navigate),
            "SRS" => Ok(Command::ShortRangeScan),
            "LRS" => Ok(Command::LongRangeScan),
            "PHA" => Ok(Command::Phasers),
            "TOR" => Ok(Command::Torpedo),
            "SHE" => Ok(Command::Shields),
            "DAM" => Ok(Command::DamageReport),
            "COM" => Ok(Command::Computer),
            "XXX" => Ok(Command::Resign),
            _ => Err(GameError::InvalidInput(format!(
                "UNKNOWN COMMAND '{}'",
                input.trim()
            ))),
        }
    }
}

/// What the game loop has to do after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommandOutcome {
    pub time_used: f64,
    pub counter_attack: bool,
    pub quit: bool,
}

fn require(engine: &GameEngine, device: Device) -> GameResult<()> {
    if engine.enterprise().is_damaged(device) {
        return Err(GameError::DeviceDamaged(device));
    }
    Ok(())
}

fn prompt<T>(input: &mut dyn InputReader, text: &str) -> GameResult<T>
where
    T: FromStr,
    GameError: From<T::Err>,
{
    Ok(input.read_line(text)?.trim().parse::<T>()?)
}

fn confirmed(input: &mut dyn InputReader, text: &str) -> GameResult<bool> {
    Ok(input.read_line(text)?.trim().to_ascii_uppercase().starts_with('Y'))
}

pub fn execute(
    command: Command,
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
    sound: &mut dyn SoundSink,
) -> GameResult<CommandOutcome> {
    debug!("executing {:?}", command);
    match command {
        Command::Navigate => navigate(engine, input, output, sound),
        Command::ShortRangeScan => {
            let quadrant = scan::short_range_scan(engine.enterprise(), engine.galaxy())?;
            ScanPresenter::show_short_range_scan(engine.enterprise(), engine.galaxy(), quadrant, output);
            Ok(CommandOutcome::default())
        }
        Command::LongRangeScan => {
            let result = engine.long_range_scan()?;
            ScanPresenter::show_long_range_scan(&result, engine.enterprise().quadrant(), output);
            Ok(CommandOutcome::default())
        }
        Command::Phasers => phasers(engine, input, output, sound),
        Command::Torpedo => torpedo(engine, input, output, sound),
        Command::Shields => shields(engine, input, output),
        Command::DamageReport => damage_report(engine, input, output),
        Command::Computer => {
            computer::library_computer(engine.enterprise(), engine.galaxy(), input, output)?;
            Ok(CommandOutcome::default())
        }
        Command::Resign => {
            let quit = confirmed(input, "ARE YOU SURE YOU WANT TO QUIT? (Y/N)")?;
            if !quit {
                output.writeln("RETURNING TO GAME.");
            }
            Ok(CommandOutcome {
                quit,
                ..CommandOutcome::default()
            })
        }
    }
}

fn navigate(
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
    sound: &mut dyn SoundSink,
) -> GameResult<CommandOutcome> {
    require(engine, Device::WarpEngines)?;
    let course = Course::new(prompt(input, "COURSE (1-9)?")?)?;
    let warp = WarpFactor::new(prompt(input, "WARP FACTOR (0-8)?")?)?;

    let report = match engine.navigate(course, warp) {
        Ok(report) => report,
        Err(GameError::GalacticBarrier) => {
            sound.play(SoundEvent::HitTaken);
            return Err(GameError::GalacticBarrier);
        }
        Err(err) => return Err(err),
    };

    if warp.is_stationary() {
        output.writeln("NAVIGATION CANCELLED.");
        return Ok(CommandOutcome::default());
    }

    NavigationPresenter::show_navigation(&report, output);
    if report.entered_quadrant {
        sound.play(SoundEvent::Warp);
        if let Some(quadrant) = engine.current_quadrant() {
            StatusPresenter::show_entering_quadrant(quadrant, output);
            if quadrant.klingon_count() > 0 {
                sound.play(SoundEvent::Alert);
            }
        }
    }
    if report.docked {
        sound.play(SoundEvent::Docked);
    }

    Ok(CommandOutcome {
        time_used: report.time_used,
        counter_attack: report.counter_attack_due,
        quit: false,
    })
}

fn phasers(
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
    sound: &mut dyn SoundSink,
) -> GameResult<CommandOutcome> {
    require(engine, Device::PhaserControl)?;
    if engine.klingons_here() == 0 {
        return Err(GameError::NoTargets);
    }

    let text = format!(
        "PHASER ENERGY TO FIRE (AVAILABLE: {})?",
        engine.enterprise().energy()
    );
    let energy: i32 = prompt(input, &text)?;
    let report = engine.fire_phasers(energy)?;

    sound.play(SoundEvent::PhaserFired);
    CombatPresenter::show_phaser_report(&report, output);
    if report.destroyed_count() > 0 {
        sound.play(SoundEvent::Explosion);
    }

    Ok(CommandOutcome {
        counter_attack: engine.klingons_here() > 0 && !report.overheated,
        ..CommandOutcome::default()
    })
}

fn torpedo(
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
    sound: &mut dyn SoundSink,
) -> GameResult<CommandOutcome> {
    require(engine, Device::PhotonTubes)?;
    if engine.enterprise().torpedoes() <= 0 {
        return Err(GameError::InsufficientResources {
            resource: "TORPEDOES",
            required: 1,
            available: 0,
        });
    }

    let text = format!(
        "TORPEDO COURSE (1-9), TORPEDOES REMAINING: {}?",
        engine.enterprise().torpedoes()
    );
    let course = Course::new(prompt(input, &text)?)?;
    let report = engine.fire_torpedo(course)?;

    sound.play(SoundEvent::TorpedoFired);
    CombatPresenter::show_torpedo_report(&report, output);
    if matches!(
        report.outcome,
        TorpedoOutcome::KlingonDestroyed(_) | TorpedoOutcome::StarbaseDestroyed(_)
    ) {
        sound.play(SoundEvent::Explosion);
    }

    Ok(CommandOutcome {
        counter_attack: engine.klingons_here() > 0,
        ..CommandOutcome::default()
    })
}

fn shields(
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<CommandOutcome> {
    require(engine, Device::ShieldControl)?;
    EnterprisePresenter::show_shield_status(engine.enterprise(), output);

    let amount: i32 = prompt(input, "ENERGY TO TRANSFER TO SHIELDS?")?;
    engine.shield_control(amount)?;
    if amount == 0 {
        output.writeln("NO CHANGE TO SHIELDS.");
    } else {
        output.writeln(&format!("SHIELD ENERGY NOW: {}", engine.enterprise().shields()));
        output.writeln(&format!("AVAILABLE ENERGY: {}", engine.enterprise().energy()));
    }
    Ok(CommandOutcome::default())
}

fn damage_report(
    engine: &mut GameEngine,
    input: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<CommandOutcome> {
    EnterprisePresenter::show_damage_report(engine.enterprise(), output);

    let e = engine.enterprise();
    if e.is_docked()
        && e.any_damage()
        && confirmed(input, "REPAIR ALL SYSTEMS? (Y/N)")?
        && engine.repair_all()
    {
        output.writeln("ALL SYSTEMS REPAIRED.");
    }
    Ok(CommandOutcome::default())
}
