//! Navigation system
//!
//! Warp movement across sectors and quadrants, with energy cost, galactic
//! barrier checks and automatic docking.

mod movement;

pub use movement::{navigate, NavigationReport};
