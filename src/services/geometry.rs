//! Sector geometry shared by weapons, navigation and the library computer.

use std::f64::consts::PI;

use crate::models::constants::{COURSE_VECTORS, MIN_FIRING_DISTANCE};
use crate::models::position::SectorPosition;

/// Euclidean distance between two sectors.
pub fn distance(from: SectorPosition, to: SectorPosition) -> f64 {
    let dr = f64::from(to.row - from.row);
    let dc = f64::from(to.col - from.col);
    (dr * dr + dc * dc).sqrt()
}

/// Distance clamped away from zero, for use as a divisor.
pub fn firing_distance(from: SectorPosition, to: SectorPosition) -> f64 {
    distance(from, to).max(MIN_FIRING_DISTANCE)
}

/// Course (in [1, 9]) that points from `from` to `to`. East is 1, north 3,
/// west 5, south 7. A zero-length vector points east.
pub fn direction_to(from: SectorPosition, to: SectorPosition) -> f64 {
    let dr = f64::from(to.row - from.row);
    let dc = f64::from(to.col - from.col);
    if dr == 0.0 && dc == 0.0 {
        return 1.0;
    }

    // Rows grow southward, so north is -dr.
    let angle = (-dr).atan2(dc);
    let mut course = 1.0 + angle * 4.0 / PI;
    if course < 1.0 {
        course += 8.0;
    }
    if course > 9.0 {
        course -= 8.0;
    }
    course
}

/// Unit step `(d_row, d_col)` for a course in [1, 9]. Fractional courses
/// blend the two neighbouring compass directions; 9 wraps to 1.
pub fn course_delta(course: f64) -> (f64, f64) {
    let mut base = course.floor() as usize;
    if base >= 9 {
        base = 1;
    }
    let base = base.max(1);
    let next = if base < 8 { base + 1 } else { 1 };
    let frac = course - course.floor();

    let (r1, c1) = COURSE_VECTORS[base];
    let (r2, c2) = COURSE_VECTORS[next];
    let dr = r1 * (1.0 - frac) + r2 * frac;
    let dc = c1 * (1.0 - frac) + c2 * frac;

    let magnitude = (dr * dr + dc * dc).sqrt();
    if magnitude > 0.0 {
        (dr / magnitude, dc / magnitude)
    } else {
        (dr, dc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn distance_is_euclidean() {
        let a = SectorPosition::new(0, 0);
        assert!((distance(a, SectorPosition::new(3, 4)) - 5.0).abs() < EPS);
        assert_eq!(distance(a, a), 0.0);
        assert_eq!(firing_distance(a, a), MIN_FIRING_DISTANCE);
    }

    #[test]
    fn compass_points() {
        let c = SectorPosition::new(4, 4);
        let cases = [
            ((4, 6), 1.0),
            ((2, 6), 2.0),
            ((2, 4), 3.0),
            ((2, 2), 4.0),
            ((4, 2), 5.0),
            ((6, 2), 6.0),
            ((6, 4), 7.0),
            ((6, 6), 8.0),
        ];
        for ((row, col), expected) in cases {
            let got = direction_to(c, SectorPosition::new(row, col));
            assert!((got - expected).abs() < EPS, "to ({},{}) got {}", row, col, got);
        }
    }

    #[test]
    fn same_sector_points_east() {
        let c = SectorPosition::new(1, 1);
        assert_eq!(direction_to(c, c), 1.0);
    }

    #[test]
    fn integer_course_deltas_are_unit_vectors() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let cases = [
            (1.0, (0.0, 1.0)),
            (2.0, (-s, s)),
            (3.0, (-1.0, 0.0)),
            (4.0, (-s, -s)),
            (5.0, (0.0, -1.0)),
            (6.0, (s, -s)),
            (7.0, (1.0, 0.0)),
            (8.0, (s, s)),
            (9.0, (0.0, 1.0)),
        ];
        for (course, expected) in cases {
            assert!(approx(course_delta(course), expected), "course {}", course);
        }
    }

    #[test]
    fn fractional_course_interpolates() {
        // Halfway between north and northwest.
        let (dr, dc) = course_delta(3.5);
        assert!(dr < 0.0 && dc < 0.0);
        assert!(((dr * dr + dc * dc).sqrt() - 1.0).abs() < EPS);
        assert!(dr.abs() > dc.abs());

        // Past southeast wraps back toward east.
        let (dr, dc) = course_delta(8.5);
        assert!(dr > 0.0 && dc > 0.0);
        assert!(dc > dr);
    }
}
