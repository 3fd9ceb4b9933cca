//! User interface and presentation
//!
//! Presenters turn engine state and operation reports into text for an
//! [`OutputWriter`](crate::io::OutputWriter). They never change game state.

pub mod presenters;
