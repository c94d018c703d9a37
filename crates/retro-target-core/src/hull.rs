use std::cmp::Ordering;

use nalgebra::Point2;

#[inline]
fn cross(o: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn lex_cmp(a: &Point2<f32>, b: &Point2<f32>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Convex hull of a point set via Andrew's monotone chain.
///
/// Hull vertices are ordered so that [`signed_area`](crate::signed_area)
/// of the result is positive; collinear points on the boundary are
/// dropped. Inputs with fewer than three distinct points come back
/// deduplicated and lexicographically sorted rather than as a polygon.
pub fn convex_hull(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    let mut pts: Vec<Point2<f32>> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    let n = pts.len();
    if n < 3 {
        return pts;
    }

    let mut hull: Vec<Point2<f32>> = Vec::with_capacity(2 * n);

    // Lower chain, then upper chain over the reversed sweep.
    for &p in pts.iter() {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    // First point re-appears as the last of the upper chain.
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moments::signed_area;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn hull_of_square_with_interior_point() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&p(2.0, 2.0)));
        assert_eq!(signed_area(&hull), 16.0);
    }

    #[test]
    fn hull_drops_collinear_boundary_points() {
        let pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&p(1.0, 0.0)));
    }

    #[test]
    fn hull_orientation_is_positive() {
        let pts = vec![p(0.0, 0.0), p(3.0, 1.0), p(5.0, 4.0), p(1.0, 5.0), p(2.0, 3.0)];
        let hull = convex_hull(&pts);
        assert!(signed_area(&hull) > 0.0);
    }

    #[test]
    fn degenerate_inputs_come_back_deduplicated() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[p(1.0, 1.0), p(1.0, 1.0)]), vec![p(1.0, 1.0)]);
        let segment = convex_hull(&[p(0.0, 0.0), p(2.0, 2.0)]);
        assert_eq!(segment.len(), 2);
    }

    #[test]
    fn collinear_points_reduce_to_a_segment() {
        let pts = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)];
        let hull = convex_hull(&pts);
        // No polygon to form; the chain keeps the extreme points.
        assert!(hull.contains(&p(0.0, 0.0)));
        assert!(hull.contains(&p(3.0, 3.0)));
        assert_eq!(signed_area(&hull), 0.0);
    }
}
