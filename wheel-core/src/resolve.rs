use std::f64::consts::{PI, TAU};

use crate::layout::arc_size;
use crate::model::Segment;

/// Fixed pointer position: top of the dial, in the canvas convention where
/// angle 0 points right and angles grow clockwise.
pub const POINTER_ANGLE: f64 = 1.5 * PI;

/// Normalize an angle into `[0, 2π)`. The double modulo guards against the
/// negative results Rust's `%` produces for negative input; every angle
/// comparison in the crate goes through here.
pub fn normalize_angle(a: f64) -> f64 {
    ((a % TAU) + TAU) % TAU
}

/// Shared index primitive: which wedge of a `ring_len`-wedge ring contains
/// `relative` (an angle measured against the ring's own frame). The final
/// `% ring_len` keeps a float landing exactly on 2π in range.
fn sector_index(ring_len: usize, relative: f64) -> usize {
    (normalize_angle(relative) / arc_size(ring_len)).floor() as usize % ring_len
}

/// Wedge under the fixed pointer for the given rotation.
pub fn winner_index(ring_len: usize, rotation: f64) -> usize {
    sector_index(ring_len, POINTER_ANGLE - rotation)
}

/// Wedge under a click at pixel offset (`dx`, `dy`) from the wheel center.
pub fn click_index(ring_len: usize, rotation: f64, dx: f64, dy: f64) -> usize {
    let angle = dy.atan2(dx);
    sector_index(ring_len, angle - rotation)
}

/// `winner_index`, returning the segment itself. Callers must not pass an
/// empty ring.
pub fn resolve_winner(ring: &[Segment], rotation: f64) -> &Segment {
    &ring[winner_index(ring.len(), rotation)]
}

/// `click_index`, returning the segment itself. Callers must not pass an
/// empty ring.
pub fn resolve_click(ring: &[Segment], rotation: f64, dx: f64, dy: f64) -> &Segment {
    &ring[click_index(ring.len(), rotation, dx, dy)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn normalize_maps_into_unit_circle() {
        for a in [-100.0, -TAU, -1e-9, 0.0, 1.5, TAU, 123456.789] {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "{a} -> {n}");
        }
        assert!((normalize_angle(-FRAC_PI_2) - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn four_wedges_rotation_zero_picks_index_three() {
        // arc = π/2, pointer at 3π/2 -> floor((3π/2)/(π/2)) = 3
        assert_eq!(winner_index(4, 0.0), 3);
    }

    #[test]
    fn four_wedges_quarter_turn_picks_index_two() {
        // normalized pointer angle = π -> index 2
        assert_eq!(winner_index(4, FRAC_PI_2), 2);
    }

    #[test]
    fn winner_in_range_for_any_rotation() {
        for len in [1, 2, 5, 12] {
            for rot in [-1e9, -123.4, -TAU, -0.001, 0.0, 0.001, TAU, 987654.3, 1e9] {
                assert!(winner_index(len, rot) < len);
            }
        }
    }

    #[test]
    fn click_pointing_right_with_no_rotation_hits_first_wedge() {
        assert_eq!(click_index(4, 0.0, 100.0, 0.0), 0);
    }

    #[test]
    fn click_tracks_rotation() {
        // After a quarter turn clockwise, the wedge that started at angle 0
        // sits under a click pointing straight down.
        assert_eq!(click_index(4, FRAC_PI_2, 0.0, 100.0), 0);
    }

    #[test]
    fn resolvers_agree_with_indices() {
        let ring: Vec<Segment> = ["A", "B", "C", "D"]
            .iter()
            .map(|l| Segment::new(*l, *l, "#fff"))
            .collect();
        assert_eq!(resolve_winner(&ring, 0.0).label, "D");
        assert_eq!(resolve_winner(&ring, FRAC_PI_2).label, "C");
        assert_eq!(resolve_click(&ring, 0.0, 1.0, 0.0).label, "A");
    }

    #[test]
    fn full_turns_do_not_change_the_winner() {
        for len in [3, 4, 7] {
            for k in 1..5 {
                assert_eq!(
                    winner_index(len, 0.37),
                    winner_index(len, 0.37 + k as f64 * TAU)
                );
            }
        }
    }
}
