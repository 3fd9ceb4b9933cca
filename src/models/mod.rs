//! Domain models
//!
//! Game entities and the invariants that tie them together. Models own their
//! state behind accessors; counters that are mirrored in more than one place
//! are only changed through methods that update every copy at once.

pub mod constants;
pub mod position;
pub mod enterprise;
pub mod klingon;
pub mod quadrant;
pub mod quadrant_names;
pub mod sector_map;
pub mod galaxy;
pub mod errors;
pub mod navigation_types;
