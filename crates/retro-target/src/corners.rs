use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// The four logical corners of the winning hull.
///
/// Each role is chosen independently as an extremum over the full point
/// set, so the four fields are *not* guaranteed to be distinct: a
/// near-square or heavily skewed hull may assign the same physical point
/// to more than one role. That collapse is accepted behavior, and
/// downstream edge spans may come out negative because of it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerSet {
    pub upper_left: Point2<f32>,
    pub upper_right: Point2<f32>,
    pub lower_left: Point2<f32>,
    pub lower_right: Point2<f32>,
}

/// Classify the extreme points of a hull into logical corners.
///
/// In the y-down image frame, `x + y` is smallest near the upper-left
/// and largest near the lower-right, while `x - y` separates the
/// upper-right from the lower-left. One pass maintains all four running
/// extrema simultaneously, seeded from the first point so the scan is
/// correct at any coordinate scale; ties keep the earlier point. `None`
/// for an empty point set.
pub fn classify_corners(points: &[Point2<f32>]) -> Option<CornerSet> {
    let first = *points.first()?;
    let mut corners = CornerSet {
        upper_left: first,
        upper_right: first,
        lower_left: first,
        lower_right: first,
    };
    for &p in &points[1..] {
        let sum = p.x + p.y;
        let diff = p.x - p.y;
        if sum < corners.upper_left.x + corners.upper_left.y {
            corners.upper_left = p;
        }
        if sum > corners.lower_right.x + corners.lower_right.y {
            corners.lower_right = p;
        }
        if diff < corners.lower_left.x - corners.lower_left.y {
            corners.lower_left = p;
        }
        if diff > corners.upper_right.x - corners.upper_right.y {
            corners.upper_right = p;
        }
    }
    Some(corners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    fn square_corners() -> [Point2<f32>; 4] {
        [p(10.0, 10.0), p(60.0, 10.0), p(10.0, 60.0), p(60.0, 60.0)]
    }

    fn assert_square_roles(set: &CornerSet) {
        assert_eq!(set.upper_left, p(10.0, 10.0));
        assert_eq!(set.upper_right, p(60.0, 10.0));
        assert_eq!(set.lower_left, p(10.0, 60.0));
        assert_eq!(set.lower_right, p(60.0, 60.0));
    }

    #[test]
    fn square_corners_land_in_their_roles() {
        let set = classify_corners(&square_corners()).expect("non-empty input");
        assert_square_roles(&set);
    }

    #[test]
    fn classification_is_permutation_invariant() {
        let base = square_corners();
        // All rotations plus a couple of swaps cover the orderings the
        // hull routine can realistically emit.
        for start in 0..4 {
            let rotated: Vec<_> = (0..4).map(|i| base[(start + i) % 4]).collect();
            let set = classify_corners(&rotated).expect("non-empty input");
            assert_square_roles(&set);
        }
        let swapped = [base[3], base[1], base[0], base[2]];
        let set = classify_corners(&swapped).expect("non-empty input");
        assert_square_roles(&set);
    }

    #[test]
    fn interior_points_do_not_steal_roles() {
        let mut points = square_corners().to_vec();
        points.push(p(35.0, 35.0));
        points.push(p(30.0, 20.0));
        let set = classify_corners(&points).expect("non-empty input");
        assert_square_roles(&set);
    }

    #[test]
    fn single_point_fills_every_role() {
        let set = classify_corners(&[p(5.0, 7.0)]).expect("non-empty input");
        assert_eq!(set.upper_left, p(5.0, 7.0));
        assert_eq!(set.upper_right, p(5.0, 7.0));
        assert_eq!(set.lower_left, p(5.0, 7.0));
        assert_eq!(set.lower_right, p(5.0, 7.0));
    }

    #[test]
    fn empty_input_classifies_nothing() {
        assert!(classify_corners(&[]).is_none());
    }

    #[test]
    fn ties_keep_the_earlier_point() {
        // Both points share x + y = 20; the first one wins upper_left.
        let set = classify_corners(&[p(5.0, 15.0), p(15.0, 5.0)]).expect("non-empty input");
        assert_eq!(set.upper_left, p(5.0, 15.0));
        assert_eq!(set.lower_right, p(5.0, 15.0));
        // x - y separates them regardless of the tie on the diagonal.
        assert_eq!(set.lower_left, p(5.0, 15.0));
        assert_eq!(set.upper_right, p(15.0, 5.0));
    }
}
