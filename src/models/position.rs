use std::fmt;

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7. (0,0) is upper-left; rows grow southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadrantPosition {
    pub row: i32,
    pub col: i32,
}

/// A position within an 8x8 sector grid.
/// Values range 0-7. (0,0) is upper-left; rows grow southward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorPosition {
    pub row: i32,
    pub col: i32,
}

impl QuadrantPosition {
    pub fn new(row: i32, col: i32) -> Self {
        QuadrantPosition { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.row) && (0..GALAXY_SIZE as i32).contains(&self.col)
    }
}

impl SectorPosition {
    pub fn new(row: i32, col: i32) -> Self {
        SectorPosition { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.row) && (0..SECTOR_SIZE as i32).contains(&self.col)
    }

    /// Chebyshev distance: the number of king moves between two sectors.
    pub fn chebyshev(&self, other: SectorPosition) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

// Players count from 1.
impl fmt::Display for QuadrantPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.row + 1, self.col + 1)
    }
}

impl fmt::Display for SectorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_bounds() {
        assert!(SectorPosition::new(0, 0).in_bounds());
        assert!(SectorPosition::new(7, 7).in_bounds());
        assert!(!SectorPosition::new(-1, 3).in_bounds());
        assert!(!SectorPosition::new(3, 8).in_bounds());
    }

    #[test]
    fn quadrant_bounds() {
        assert!(QuadrantPosition::new(4, 4).in_bounds());
        assert!(!QuadrantPosition::new(8, 0).in_bounds());
    }

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let a = SectorPosition::new(3, 3);
        assert_eq!(a.chebyshev(SectorPosition::new(4, 4)), 1);
        assert_eq!(a.chebyshev(SectorPosition::new(3, 5)), 2);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn displays_one_based() {
        assert_eq!(SectorPosition::new(0, 7).to_string(), "[1,8]");
        assert_eq!(QuadrantPosition::new(3, 2).to_string(), "[4,3]");
    }
}
