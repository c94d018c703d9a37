use crate::metrics::GeometryMetrics;
use crate::params::ValidationThresholds;

#[inline]
fn within(lo: f32, value: f32, hi: f32) -> bool {
    lo <= value && value <= hi
}

impl ValidationThresholds {
    /// Accept an outline's metrics iff every band holds.
    ///
    /// Conjunction, not majority vote: one out-of-band value rejects the
    /// outline. Side-effect free.
    pub fn accepts(&self, m: &GeometryMetrics) -> bool {
        within(self.min_area, m.area, self.max_area)
            && within(self.min_area_ratio, m.area_ratio, self.max_area_ratio)
            && within(self.min_aspect, m.aspect, self.max_aspect)
            && within(self.min_width, m.width, self.max_width)
            && within(self.min_height, m.height, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_metrics() -> GeometryMetrics {
        GeometryMetrics {
            area: 0.01,
            convex_area: 0.0105,
            area_ratio: 0.95,
            width: 50.0,
            height: 100.0,
            aspect: 2.0,
        }
    }

    #[test]
    fn reference_candidate_is_accepted() {
        assert!(ValidationThresholds::default().accepts(&reference_metrics()));
    }

    #[test]
    fn any_single_violation_rejects() {
        let t = ValidationThresholds::default();

        let mut m = reference_metrics();
        m.area = 0.0001;
        assert!(!t.accepts(&m));

        let mut m = reference_metrics();
        m.area_ratio = 0.5;
        assert!(!t.accepts(&m));

        let mut m = reference_metrics();
        m.aspect = 20.0;
        assert!(!t.accepts(&m));

        let mut m = reference_metrics();
        m.height = 10.0;
        assert!(!t.accepts(&m));
    }

    #[test]
    fn bounds_are_inclusive() {
        let t = ValidationThresholds::default();
        let mut m = reference_metrics();
        m.area = t.min_area;
        m.area_ratio = t.min_area_ratio;
        m.height = t.min_height;
        m.aspect = m.height / m.width;
        assert!(t.accepts(&m));
    }

    #[test]
    fn aspect_band_is_checked_against_configured_bounds() {
        let mut t = ValidationThresholds::default();
        t.min_aspect = 1.5;
        t.max_aspect = 2.5;
        assert!(t.accepts(&reference_metrics()));
        t.max_aspect = 1.9;
        assert!(!t.accepts(&reference_metrics()));
    }
}
