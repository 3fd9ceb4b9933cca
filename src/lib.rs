//! Star Trek Game Engine
//!
//! A turn-based space-combat game in the tradition of the 1970s Star Trek.
//!
//! # Overview
//!
//! The player commands the USS Enterprise on a mission to destroy every
//! Klingon battle cruiser in an 8x8 galaxy of quadrants before the time limit
//! runs out. Starbases refuel, rearm and repair the ship.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and game-over logic
//! - [`models`] - Domain models (Galaxy, Enterprise, Klingon, etc.)
//! - [`services`] - Game services (combat, navigation, scanning, etc.)
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of game state and reports
//! - [`sound`] - Sound effect sinks
//! - [`cli`] - Command-line options
//!
//! # Example
//!
//! ```rust
//! use startrek::models::navigation_types::{Course, WarpFactor};
//! use startrek::GameEngine;
//!
//! let mut engine = GameEngine::new(42);
//! let course = Course::new(1.0).unwrap();
//! let warp = WarpFactor::new(0.0).unwrap();
//! let report = engine.navigate(course, warp).unwrap();
//! assert_eq!(report.energy_used, 0);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod sound;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameState, TurnReport};
pub use models::errors::{GameError, GameResult};
