//! Type-safe wrappers for navigation values

use std::fmt;

use super::constants::MAX_WARP;
use super::errors::{GameError, GameResult};

/// Course direction (1.0 to 9.0)
///
/// - 1 = East
/// - 3 = North
/// - 5 = West
/// - 7 = South
/// - 2, 4, 6, 8 = Diagonal directions
/// - 9 = East again; fractional values interpolate between directions
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Course(f64);

impl Course {
    pub fn new(value: f64) -> GameResult<Self> {
        if (1.0..=9.0).contains(&value) {
            Ok(Course(value))
        } else {
            Err(GameError::InvalidInput(
                "COURSE MUST BE BETWEEN 1 AND 9".to_string(),
            ))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Warp factor (0.0 to 8.0). One warp unit is one quadrant (8 sectors).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WarpFactor(f64);

impl WarpFactor {
    pub fn new(value: f64) -> GameResult<Self> {
        if (0.0..=MAX_WARP).contains(&value) {
            Ok(WarpFactor(value))
        } else {
            Err(GameError::InvalidInput(
                "WARP FACTOR MUST BE BETWEEN 0 AND 8".to_string(),
            ))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_stationary(&self) -> bool {
        self.0 == 0.0
    }

    /// Number of sector steps the move takes.
    pub fn sectors(&self) -> i32 {
        (self.0 * 8.0).floor() as i32
    }
}

impl fmt::Display for WarpFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_valid_range() {
        assert!(Course::new(1.0).is_ok());
        assert!(Course::new(5.5).is_ok());
        assert!(Course::new(9.0).is_ok());
    }

    #[test]
    fn course_invalid_range() {
        assert!(Course::new(0.0).is_err());
        assert!(Course::new(0.99).is_err());
        assert!(Course::new(9.1).is_err());
        assert!(Course::new(f64::NAN).is_err());
    }

    #[test]
    fn warp_valid_range() {
        assert!(WarpFactor::new(0.0).is_ok());
        assert!(WarpFactor::new(4.5).is_ok());
        assert!(WarpFactor::new(8.0).is_ok());
    }

    #[test]
    fn warp_invalid_range() {
        assert!(WarpFactor::new(-0.1).is_err());
        assert!(WarpFactor::new(8.1).is_err());
    }

    #[test]
    fn warp_sector_steps() {
        assert_eq!(WarpFactor::new(1.0).unwrap().sectors(), 8);
        assert_eq!(WarpFactor::new(0.2).unwrap().sectors(), 1);
        assert_eq!(WarpFactor::new(0.1).unwrap().sectors(), 0);
        assert!(WarpFactor::new(0.0).unwrap().is_stationary());
    }
}
