use nalgebra::Point2;

use retro_target_core::signed_area;

/// Pick the candidate hull with the largest enclosed area.
///
/// Comparison uses the absolute shoelace area, so the outcome does not
/// depend on vertex winding; the signed value stays available through
/// [`signed_area`] for callers that care about orientation. The
/// comparison is strictly-greater, so ties keep the first-encountered
/// candidate and the reduction is stable in input order. `None` on an
/// empty set: the caller skips corner classification and descriptor
/// building for that frame instead of operating on a sentinel shape.
pub fn select_best(hulls: Vec<Vec<Point2<f32>>>) -> Option<Vec<Point2<f32>>> {
    let mut best: Option<(f32, Vec<Point2<f32>>)> = None;
    for hull in hulls {
        let area = signed_area(&hull).abs();
        match &best {
            Some((best_area, _)) if area <= *best_area => {}
            _ => best = Some((area, hull)),
        }
    }
    best.map(|(_, hull)| hull)
}
