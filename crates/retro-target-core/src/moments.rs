use nalgebra::Point2;

/// Polygon area from the shoelace sum.
///
/// The sign follows vertex winding: positive for the ordering produced
/// by [`convex_hull`](crate::convex_hull). Callers selecting "largest"
/// should compare magnitudes.
pub fn signed_area(polygon: &[Point2<f32>]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0f32;
    for (i, p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % polygon.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Zeroth- and first-order polygon moments (Green's theorem form).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub m00: f32,
    pub m10: f32,
    pub m01: f32,
}

impl Moments {
    /// Center of mass `(m10/m00, m01/m00)`.
    ///
    /// `None` when the zeroth moment is zero; the centroid is undefined
    /// there and must not be fabricated from a division by zero.
    pub fn centroid(&self) -> Option<Point2<f32>> {
        if self.m00 == 0.0 {
            return None;
        }
        Some(Point2::new(self.m10 / self.m00, self.m01 / self.m00))
    }
}

/// Area moments of a simple polygon given by its vertices in order.
pub fn polygon_moments(polygon: &[Point2<f32>]) -> Moments {
    if polygon.len() < 3 {
        return Moments::default();
    }
    let mut m00 = 0.0f32;
    let mut m10 = 0.0f32;
    let mut m01 = 0.0f32;
    for (i, p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % polygon.len()];
        let cross = p.x * q.y - q.x * p.y;
        m00 += cross;
        m10 += (p.x + q.x) * cross;
        m01 += (p.y + q.y) * cross;
    }
    Moments {
        m00: 0.5 * m00,
        m10: m10 / 6.0,
        m01: m01 / 6.0,
    }
}
