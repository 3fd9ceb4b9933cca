use rand::Rng;

use crate::models::constants::{GALAXY_SIZE, MAX_KLINGONS_PER_QUADRANT, MIN_TOTAL_KLINGONS};
use crate::models::quadrant::QuadrantData;

/// Raw output of galaxy generation, before any sector map exists.
pub(super) struct GeneratedGalaxy {
    pub quadrants: [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE],
    pub total_klingons: i32,
    pub total_starbases: i32,
    pub stardate: f64,
    pub time_limit: f64,
}

/// Klingons for one quadrant: 8% three, 12% two, 30% one, else none.
fn roll_klingons<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let r: f64 = rng.gen();
    if r < 0.08 {
        3
    } else if r < 0.20 {
        2
    } else if r < 0.50 {
        1
    } else {
        0
    }
}

fn random_quadrant<R: Rng + ?Sized>(rng: &mut R) -> (usize, usize) {
    (rng.gen_range(0..GALAXY_SIZE), rng.gen_range(0..GALAXY_SIZE))
}

/// Populate all 64 quadrants, then enforce at least one starbase and at
/// least `MIN_TOTAL_KLINGONS` Klingons.
pub(super) fn generate_galaxy<R: Rng + ?Sized>(rng: &mut R) -> GeneratedGalaxy {
    let mut quadrants = [[QuadrantData::default(); GALAXY_SIZE]; GALAXY_SIZE];
    let mut total_klingons = 0;
    let mut total_starbases = 0;

    for row in quadrants.iter_mut() {
        for data in row.iter_mut() {
            data.klingons = roll_klingons(rng);
            total_klingons += data.klingons;

            if rng.gen::<f64>() < 0.04 {
                data.starbases = 1;
                total_starbases += 1;
            }

            data.stars = rng.gen_range(1..=8);
        }
    }

    if total_starbases == 0 {
        let (row, col) = random_quadrant(rng);
        quadrants[row][col].starbases = 1;
        total_starbases = 1;
    }

    while total_klingons < MIN_TOTAL_KLINGONS {
        let (row, col) = random_quadrant(rng);
        if quadrants[row][col].klingons < MAX_KLINGONS_PER_QUADRANT {
            quadrants[row][col].klingons += 1;
            total_klingons += 1;
        }
    }

    let stardate = f64::from(rng.gen_range(20..=39)) * 100.0;
    let time_limit = f64::from(25 + rng.gen_range(0..=10));

    GeneratedGalaxy {
        quadrants,
        total_klingons,
        total_starbases,
        stardate,
        time_limit,
    }
}
