//! Game services
//!
//! Business logic for game operations: combat, navigation, scanning, the
//! library computer, command dispatch and the interactive loop.

pub mod combat;
pub mod commands;
pub mod computer;
pub mod game;
pub mod geometry;
pub mod navigation;
pub mod scan;
