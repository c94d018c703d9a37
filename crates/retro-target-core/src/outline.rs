use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Ordered boundary of one connected region, as supplied by the region
/// extractor. Point order follows the boundary walk; the polygon is
/// implicitly closed (last point connects back to the first).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub points: Vec<Point2<f32>>,
}

impl Outline {
    pub fn new(points: Vec<Point2<f32>>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest axis-aligned rectangle containing the outline, or `None`
    /// for an empty one.
    pub fn bounding_rect(&self) -> Option<BoundingRect> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(BoundingRect { min, max })
    }
}

/// Axis-aligned bounding rectangle of a point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl BoundingRect {
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Drop boundary points the walk passes straight through.
///
/// A point survives when the incoming and outgoing steps turn (nonzero
/// cross product) or reverse (non-positive dot product), so corners and
/// the endpoints of a one-pixel-wide spur are kept while interior points
/// of straight runs are compressed away. The boundary is treated as
/// closed.
pub fn simplify_colinear(points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        let a = cur - prev;
        let b = next - cur;
        let cross = a.x * b.y - a.y * b.x;
        let dot = a.x * b.x + a.y * b.y;
        if cross != 0.0 || dot <= 0.0 {
            out.push(cur);
        }
    }
    out
}
