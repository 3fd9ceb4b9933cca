use std::io;

use log::debug;

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::services::commands::{self, Command};
use crate::services::scan;
use crate::sound::{SoundEvent, SoundSink};
use crate::ui::presenters::{
    CombatPresenter, EnterprisePresenter, GameOverPresenter, ScanPresenter, StatusPresenter,
};

/// An interactive session: the engine plus the player's terminal.
pub struct Game {
    engine: GameEngine,
    input: Box<dyn InputReader>,
    output: Box<dyn OutputWriter>,
    sound: Box<dyn SoundSink>,
}

fn is_end_of_input(err: &GameError) -> bool {
    matches!(err, GameError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

impl Game {
    pub fn new(
        seed: u64,
        input: Box<dyn InputReader>,
        output: Box<dyn OutputWriter>,
        sound: Box<dyn SoundSink>,
    ) -> Self {
        Game {
            engine: GameEngine::new(seed),
            input,
            output,
            sound,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play games until the captain declines another or input runs out.
    /// Returns the state of the last game; `Playing` means the player walked
    /// away mid-game.
    pub fn run(&mut self) -> GameResult<GameState> {
        loop {
            let state = self.play_one()?;
            if state == GameState::Playing || !self.play_again()? {
                return Ok(state);
            }
            self.engine.restart();
        }
    }

    /// End of input counts as "no".
    fn play_again(&mut self) -> GameResult<bool> {
        self.output.writeln("");
        match self.input.read_line("PLAY AGAIN? (Y/N)") {
            Ok(line) => Ok(line.trim().to_ascii_uppercase().starts_with('Y')),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn play_one(&mut self) -> GameResult<GameState> {
        StatusPresenter::show_mission_briefing(self.engine.galaxy(), self.output.as_mut());
        if let Some(quadrant) = self.engine.current_quadrant() {
            StatusPresenter::show_entering_quadrant(quadrant, self.output.as_mut());
            if quadrant.klingon_count() > 0 {
                self.sound.play(SoundEvent::Alert);
            }
        }

        loop {
            if let Some(state) = self.engine.check_game_over() {
                self.finish(&state);
                return Ok(state);
            }

            self.show_bridge();
            let line = match self.input.read_line("COMMAND?") {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    self.output.writeln("");
                    self.output.writeln("GAME INTERRUPTED.");
                    return Ok(self.engine.state().clone());
                }
                Err(e) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = line.parse::<Command>().and_then(|command| {
                commands::execute(
                    command,
                    &mut self.engine,
                    self.input.as_mut(),
                    self.output.as_mut(),
                    self.sound.as_mut(),
                )
            });

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(err) if is_end_of_input(&err) => {
                    self.output.writeln("");
                    self.output.writeln("GAME INTERRUPTED.");
                    return Ok(self.engine.state().clone());
                }
                Err(err) => {
                    debug!("command '{}' rejected: {}", line.trim(), err);
                    self.output.writeln(&err.to_string());
                    if matches!(err, GameError::InvalidInput(_)) && line.parse::<Command>().is_err() {
                        StatusPresenter::show_command_menu(self.output.as_mut());
                    }
                    continue;
                }
            };

            if outcome.quit {
                self.engine.resign();
                continue;
            }

            let turn = self.engine.end_turn(outcome.time_used, outcome.counter_attack);
            EnterprisePresenter::show_repairs(&turn.repaired, self.output.as_mut());
            if !turn.hits.is_empty() {
                self.sound.play(SoundEvent::HitTaken);
                CombatPresenter::show_attack(&turn.hits, self.output.as_mut());
            }
        }
    }

    /// Status bar and short range scan, shown before every command.
    fn show_bridge(&mut self) {
        let output = self.output.as_mut();
        output.writeln("");
        StatusPresenter::show_status_bar(self.engine.enterprise(), self.engine.galaxy(), output);
        match scan::short_range_scan(self.engine.enterprise(), self.engine.galaxy()) {
            Ok(quadrant) => ScanPresenter::show_short_range_scan(
                self.engine.enterprise(),
                self.engine.galaxy(),
                quadrant,
                output,
            ),
            Err(err) => output.writeln(&err.to_string()),
        }
        output.writeln("COMMANDS: NAV  SRS  LRS  PHA  TOR  SHE  DAM  COM  XXX");
    }

    fn finish(&mut self, state: &GameState) {
        let event = match state {
            GameState::Victory { .. } => SoundEvent::Victory,
            _ => SoundEvent::GameOver,
        };
        self.sound.play(event);
        GameOverPresenter::show(state, self.engine.galaxy(), self.output.as_mut());
    }
}
