use thiserror::Error;

use crate::models::constants::Device;

/// Game-specific error types.
///
/// Every operation validates before it mutates, so an `Err` always means the
/// command had no effect and used no time.
#[derive(Debug, Error)]
pub enum GameError {
    /// Unparseable or out-of-range input from the player
    #[error("INVALID INPUT: {0}")]
    InvalidInput(String),
    /// Not enough energy, shields or torpedoes
    #[error("INSUFFICIENT {resource}: REQUIRED {required}, AVAILABLE {available}")]
    InsufficientResources {
        resource: &'static str,
        required: i32,
        available: i32,
    },
    /// Attempted to use a damaged device
    #[error("{} ARE DAMAGED", .0.name())]
    DeviceDamaged(Device),
    /// Weapons fired with nothing to shoot at
    #[error("NO ENEMY SHIPS IN THIS QUADRANT")]
    NoTargets,
    /// Navigation would leave the galaxy
    #[error("GALACTIC BARRIER: STARFLEET FORBIDS LEAVING THE GALAXY")]
    GalacticBarrier,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl From<std::num::ParseFloatError> for GameError {
    fn from(err: std::num::ParseFloatError) -> Self {
        GameError::InvalidInput(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::InvalidInput(err.to_string())
    }
}
