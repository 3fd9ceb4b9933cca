use rand::Rng;

use super::constants::{SectorContent, MAX_KLINGONS_PER_QUADRANT, SECTOR_SIZE};
use super::klingon::Klingon;
use super::position::SectorPosition;

/// The 8x8 sector grid of one quadrant.
///
/// The Klingon list, starbase position and star list are caches of the grid.
/// They are only changed by the `add_*`/`remove_*` methods, which update the
/// grid in the same call, so the two views never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorMap {
    /// Internal indexing: grid[row][col].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
    klingons: Vec<Klingon>,
    starbase: Option<SectorPosition>,
    stars: Vec<SectorPosition>,
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
            klingons: Vec::with_capacity(MAX_KLINGONS_PER_QUADRANT as usize),
            starbase: None,
            stars: Vec::new(),
        }
    }

    /// Content at a sector. Anything outside the grid reads as empty.
    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        if pos.in_bounds() {
            self.grid[pos.row as usize][pos.col as usize]
        } else {
            SectorContent::Empty
        }
    }

    fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[pos.row as usize][pos.col as usize] = content;
    }

    /// True if the sector is on the grid and holds nothing.
    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        pos.in_bounds() && self.get(pos) == SectorContent::Empty
    }

    pub fn klingons(&self) -> &[Klingon] {
        &self.klingons
    }

    pub fn klingons_mut(&mut self) -> &mut [Klingon] {
        &mut self.klingons
    }

    pub fn starbase(&self) -> Option<SectorPosition> {
        self.starbase
    }

    pub fn stars(&self) -> &[SectorPosition] {
        &self.stars
    }

    /// Number of cells holding `content`.
    pub fn count(&self, content: SectorContent) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&c| c == content)
            .count()
    }

    pub fn add_klingon(&mut self, klingon: Klingon) -> bool {
        if !self.is_empty(klingon.sector) {
            return false;
        }
        self.set(klingon.sector, SectorContent::Klingon);
        self.klingons.push(klingon);
        true
    }

    /// Place the quadrant's starbase. A quadrant holds at most one.
    pub fn add_starbase(&mut self, pos: SectorPosition) -> bool {
        if self.starbase.is_some() || !self.is_empty(pos) {
            return false;
        }
        self.set(pos, SectorContent::Starbase);
        self.starbase = Some(pos);
        true
    }

    pub fn add_star(&mut self, pos: SectorPosition) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.set(pos, SectorContent::Star);
        self.stars.push(pos);
        true
    }

    pub fn add_enterprise(&mut self, pos: SectorPosition) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.set(pos, SectorContent::Enterprise);
        true
    }

    /// Remove the Klingon at `pos`, returning it. No-op if none is there.
    pub fn remove_klingon(&mut self, pos: SectorPosition) -> Option<Klingon> {
        if self.get(pos) != SectorContent::Klingon {
            return None;
        }
        self.set(pos, SectorContent::Empty);
        let idx = self.klingons.iter().position(|k| k.sector == pos)?;
        Some(self.klingons.remove(idx))
    }

    pub fn remove_starbase(&mut self, pos: SectorPosition) -> bool {
        if self.get(pos) != SectorContent::Starbase {
            return false;
        }
        self.set(pos, SectorContent::Empty);
        self.starbase = None;
        true
    }

    pub fn remove_enterprise(&mut self, pos: SectorPosition) -> bool {
        if self.get(pos) != SectorContent::Enterprise {
            return false;
        }
        self.set(pos, SectorContent::Empty);
        true
    }

    /// Pick random sectors until an empty one turns up. The grid never holds
    /// more than 13 entities, so this always terminates quickly.
    pub fn find_empty_sector<R: Rng + ?Sized>(&self, rng: &mut R) -> SectorPosition {
        loop {
            let pos = SectorPosition {
                row: rng.gen_range(0..SECTOR_SIZE as i32),
                col: rng.gen_range(0..SECTOR_SIZE as i32),
            };
            if self.is_empty(pos) {
                return pos;
            }
        }
    }

    /// Render one row of the grid as 8 three-character cells, each closed
    /// by a `|`.
    pub fn render_row(&self, row: i32) -> String {
        (0..SECTOR_SIZE as i32)
            .map(|col| format!("{}|", self.get(SectorPosition { row, col }).symbol()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn out_of_range_reads_empty() {
        let map = SectorMap::new();
        assert_eq!(map.get(SectorPosition::new(-1, 0)), SectorContent::Empty);
        assert_eq!(map.get(SectorPosition::new(0, 8)), SectorContent::Empty);
        assert!(!map.is_empty(SectorPosition::new(8, 8)));
    }

    #[test]
    fn add_rejects_occupied_cell() {
        let mut map = SectorMap::new();
        let pos = SectorPosition::new(2, 3);
        assert!(map.add_star(pos));
        assert!(!map.add_klingon(Klingon::with_energy(pos, 300)));
        assert!(!map.add_enterprise(pos));
        assert_eq!(map.get(pos), SectorContent::Star);
        assert!(map.klingons().is_empty());
    }

    #[test]
    fn only_one_starbase() {
        let mut map = SectorMap::new();
        assert!(map.add_starbase(SectorPosition::new(1, 1)));
        assert!(!map.add_starbase(SectorPosition::new(5, 5)));
        assert_eq!(map.count(SectorContent::Starbase), 1);
    }

    #[test]
    fn remove_klingon_updates_grid_and_list() {
        let mut map = SectorMap::new();
        let a = SectorPosition::new(0, 0);
        let b = SectorPosition::new(4, 6);
        map.add_klingon(Klingon::with_energy(a, 300));
        map.add_klingon(Klingon::with_energy(b, 400));

        let removed = map.remove_klingon(a).expect("klingon at a");
        assert_eq!(removed.energy, 300);
        assert_eq!(map.get(a), SectorContent::Empty);
        assert_eq!(map.klingons().len(), 1);
        assert_eq!(map.klingons()[0].sector, b);
    }

    #[test]
    fn remove_wrong_entity_is_noop() {
        let mut map = SectorMap::new();
        let pos = SectorPosition::new(3, 3);
        map.add_star(pos);
        assert!(map.remove_klingon(pos).is_none());
        assert!(!map.remove_starbase(pos));
        assert!(!map.remove_enterprise(pos));
        assert_eq!(map.get(pos), SectorContent::Star);
    }

    #[test]
    fn find_empty_sector_skips_occupied() {
        let mut map = SectorMap::new();
        // Fill everything except one cell.
        for row in 0..8 {
            for col in 0..8 {
                if (row, col) != (6, 2) {
                    map.add_star(SectorPosition::new(row, col));
                }
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(map.find_empty_sector(&mut rng), SectorPosition::new(6, 2));
    }

    #[test]
    fn render_row_has_eight_cells() {
        let mut map = SectorMap::new();
        map.add_enterprise(SectorPosition::new(0, 0));
        let row = map.render_row(0);
        assert_eq!(row.len(), SECTOR_SIZE * 4);
        assert!(row.starts_with("<*>| . |"));
    }
}
