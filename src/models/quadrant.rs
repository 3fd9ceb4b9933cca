use rand::Rng;

use super::constants::SectorContent;
use super::klingon::Klingon;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant_names::quadrant_name;
use super::sector_map::SectorMap;

/// Summary counts for a quadrant, as reported by long range sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadrantData {
    pub klingons: i32,
    pub starbases: i32,
    pub stars: i32,
}

impl QuadrantData {
    /// The 3-digit encoded value: klingons*100 + starbases*10 + stars.
    pub fn encoded(&self) -> i32 {
        self.klingons * 100 + self.starbases * 10 + self.stars
    }
}

/// One quadrant of the galaxy.
///
/// Only the summary counts exist until the Enterprise first enters; the
/// detailed sector map is built lazily. Whenever a map exists, its Klingon and
/// starbase cells match the summary counts.
#[derive(Debug, Clone)]
pub struct Quadrant {
    position: QuadrantPosition,
    data: QuadrantData,
    scanned: bool,
    sector_map: Option<SectorMap>,
}

impl Quadrant {
    pub fn new(position: QuadrantPosition, data: QuadrantData) -> Self {
        Quadrant {
            position,
            data,
            scanned: false,
            sector_map: None,
        }
    }

    pub fn position(&self) -> QuadrantPosition {
        self.position
    }

    pub fn name(&self) -> String {
        quadrant_name(self.position)
    }

    pub fn data(&self) -> QuadrantData {
        self.data
    }

    pub fn klingon_count(&self) -> i32 {
        self.data.klingons
    }

    pub fn starbase_count(&self) -> i32 {
        self.data.starbases
    }

    pub fn star_count(&self) -> i32 {
        self.data.stars
    }

    /// Long range sensor (KBS) value.
    pub fn lrs_value(&self) -> i32 {
        self.data.encoded()
    }

    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    pub(crate) fn mark_scanned(&mut self) {
        self.scanned = true;
    }

    pub fn sector_map(&self) -> Option<&SectorMap> {
        self.sector_map.as_ref()
    }

    pub fn klingons(&self) -> &[Klingon] {
        self.sector_map.as_ref().map_or(&[], |m| m.klingons())
    }

    pub fn klingons_mut(&mut self) -> &mut [Klingon] {
        match self.sector_map.as_mut() {
            Some(map) => map.klingons_mut(),
            None => &mut [],
        }
    }

    pub fn starbase(&self) -> Option<SectorPosition> {
        self.sector_map.as_ref().and_then(|m| m.starbase())
    }

    /// Build a fresh sector map and scatter this quadrant's Klingons, starbase
    /// and stars over it. Any previous map is discarded.
    pub fn initialize_sector_map<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut map = SectorMap::new();

        for _ in 0..self.data.klingons {
            let pos = map.find_empty_sector(rng);
            map.add_klingon(Klingon::new(pos, rng));
        }

        if self.data.starbases > 0 {
            let pos = map.find_empty_sector(rng);
            map.add_starbase(pos);
        }

        for _ in 0..self.data.stars {
            let pos = map.find_empty_sector(rng);
            map.add_star(pos);
        }

        self.sector_map = Some(map);
    }

    /// Install a prepared sector map, rederiving the Klingon and starbase
    /// counts from it. Star count is taken from the map as well.
    pub(crate) fn install_sector_map(&mut self, map: SectorMap) {
        self.data = QuadrantData {
            klingons: map.klingons().len() as i32,
            starbases: i32::from(map.starbase().is_some()),
            stars: map.stars().len() as i32,
        };
        self.sector_map = Some(map);
    }

    /// Put the Enterprise at `pos`, or at a random empty sector if `pos` is
    /// taken. Returns where it actually ended up.
    pub fn place_enterprise<R: Rng + ?Sized>(
        &mut self,
        pos: SectorPosition,
        rng: &mut R,
    ) -> SectorPosition {
        if self.sector_map.is_none() {
            self.initialize_sector_map(rng);
        }
        let map = self.sector_map.get_or_insert_with(SectorMap::new);
        let actual = if map.is_empty(pos) {
            pos
        } else {
            map.find_empty_sector(rng)
        };
        map.add_enterprise(actual);
        actual
    }

    pub fn remove_enterprise(&mut self, pos: SectorPosition) -> bool {
        self.sector_map
            .as_mut()
            .is_some_and(|m| m.remove_enterprise(pos))
    }

    /// Remove a Klingon and drop the quadrant count with it.
    /// Returns false, changing nothing, if no Klingon is at `pos`.
    pub(crate) fn remove_klingon(&mut self, pos: SectorPosition) -> bool {
        let removed = self
            .sector_map
            .as_mut()
            .and_then(|m| m.remove_klingon(pos))
            .is_some();
        if removed {
            self.data.klingons -= 1;
        }
        removed
    }

    pub(crate) fn remove_starbase(&mut self, pos: SectorPosition) -> bool {
        let removed = self
            .sector_map
            .as_mut()
            .is_some_and(|m| m.remove_starbase(pos));
        if removed {
            self.data.starbases = 0;
        }
        removed
    }

    /// Bounds-checked lookup; unmapped quadrants read as empty.
    pub fn entity_at(&self, pos: SectorPosition) -> SectorContent {
        self.sector_map
            .as_ref()
            .map_or(SectorContent::Empty, |m| m.get(pos))
    }

    pub fn is_adjacent_to_starbase(&self, pos: SectorPosition) -> bool {
        self.starbase().is_some_and(|base| pos.chebyshev(base) <= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quadrant(klingons: i32, starbases: i32, stars: i32) -> Quadrant {
        Quadrant::new(
            QuadrantPosition::new(2, 5),
            QuadrantData {
                klingons,
                starbases,
                stars,
            },
        )
    }

    fn assert_map_matches_counts(q: &Quadrant) {
        let map = q.sector_map().expect("sector map");
        assert_eq!(map.count(SectorContent::Klingon) as i32, q.klingon_count());
        assert_eq!(map.klingons().len() as i32, q.klingon_count());
        assert_eq!(map.count(SectorContent::Starbase) as i32, q.starbase_count());
        assert_eq!(map.count(SectorContent::Star) as i32, q.star_count());
        assert_eq!(map.starbase().is_some(), q.starbase_count() == 1);
    }

    #[test]
    fn lrs_value_encodes_kbs() {
        assert_eq!(quadrant(2, 1, 3).lrs_value(), 213);
        assert_eq!(quadrant(0, 0, 7).lrs_value(), 7);
    }

    #[test]
    fn initialize_places_every_entity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut q = quadrant(3, 1, 8);
        q.initialize_sector_map(&mut rng);
        assert_map_matches_counts(&q);
    }

    #[test]
    fn initialize_twice_stays_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut q = quadrant(2, 1, 5);
        q.initialize_sector_map(&mut rng);
        q.initialize_sector_map(&mut rng);
        assert_map_matches_counts(&q);
    }

    #[test]
    fn unmapped_quadrant_reads_empty() {
        let q = quadrant(3, 1, 8);
        assert!(q.sector_map().is_none());
        assert_eq!(q.entity_at(SectorPosition::new(0, 0)), SectorContent::Empty);
        assert!(q.klingons().is_empty());
        assert!(!q.is_adjacent_to_starbase(SectorPosition::new(0, 0)));
    }

    #[test]
    fn place_enterprise_on_free_cell_keeps_request() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut q = quadrant(0, 0, 1);
        q.install_sector_map(SectorMap::new());
        let actual = q.place_enterprise(SectorPosition::new(4, 4), &mut rng);
        assert_eq!(actual, SectorPosition::new(4, 4));
        assert_eq!(q.entity_at(actual), SectorContent::Enterprise);
    }

    #[test]
    fn place_enterprise_on_occupied_cell_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut map = SectorMap::new();
        let star = SectorPosition::new(4, 4);
        map.add_star(star);
        let mut q = quadrant(0, 0, 0);
        q.install_sector_map(map);

        let actual = q.place_enterprise(star, &mut rng);
        assert_ne!(actual, star);
        assert_eq!(q.entity_at(star), SectorContent::Star);
        assert_eq!(q.entity_at(actual), SectorContent::Enterprise);
    }

    #[test]
    fn place_enterprise_builds_missing_map() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut q = quadrant(1, 0, 2);
        let actual = q.place_enterprise(SectorPosition::new(0, 0), &mut rng);
        assert_eq!(q.entity_at(actual), SectorContent::Enterprise);
        assert_map_matches_counts(&q);
    }

    #[test]
    fn remove_klingon_decrements_count() {
        let mut map = SectorMap::new();
        let pos = SectorPosition::new(1, 2);
        map.add_klingon(Klingon::with_energy(pos, 350));
        let mut q = quadrant(0, 0, 0);
        q.install_sector_map(map);
        assert_eq!(q.klingon_count(), 1);

        assert!(q.remove_klingon(pos));
        assert_eq!(q.klingon_count(), 0);
        assert!(!q.remove_klingon(pos));
        assert_eq!(q.klingon_count(), 0);
    }

    #[test]
    fn adjacency_is_chebyshev_one() {
        let mut map = SectorMap::new();
        map.add_starbase(SectorPosition::new(4, 4));
        let mut q = quadrant(0, 0, 0);
        q.install_sector_map(map);

        for (row, col) in [(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)] {
            assert!(q.is_adjacent_to_starbase(SectorPosition::new(row, col)));
        }
        assert!(!q.is_adjacent_to_starbase(SectorPosition::new(2, 4)));
        assert!(!q.is_adjacent_to_starbase(SectorPosition::new(6, 6)));
    }
}
