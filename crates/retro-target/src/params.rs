use serde::{Deserialize, Serialize};

/// Geometric acceptance bands for candidate outlines.
///
/// Every band is inclusive and all of them must hold at once; a single
/// violated bound disqualifies the outline. The `Default` values are the
/// reference configuration for the illuminated ring at 640x480.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationThresholds {
    /// Outline area, normalized by frame area.
    pub min_area: f32,
    pub max_area: f32,
    /// Outline area over convex hull area ("solidity").
    pub min_area_ratio: f32,
    pub max_area_ratio: f32,
    /// Bounding-box height over width.
    pub min_aspect: f32,
    pub max_aspect: f32,
    /// Bounding-box width in pixels.
    pub min_width: f32,
    pub max_width: f32,
    /// Bounding-box height in pixels.
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_area: 0.001,
            max_area: 1.0,
            min_area_ratio: 0.85,
            max_area_ratio: 100.0,
            min_aspect: 0.1,
            max_aspect: 10.0,
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 50.0,
            max_height: f32::INFINITY,
        }
    }
}

/// Inclusive HSV band on OpenCV's encoding (hue 0-180, sat/val 0-255).
///
/// The `Default` band is the reference green of the illuminated ring.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HsvRange {
    pub min_hue: u8,
    pub max_hue: u8,
    pub min_sat: u8,
    pub max_sat: u8,
    pub min_val: u8,
    pub max_val: u8,
}

impl Default for HsvRange {
    fn default() -> Self {
        Self {
            min_hue: 68,
            max_hue: 180,
            min_sat: 140,
            max_sat: 255,
            min_val: 0,
            max_val: 255,
        }
    }
}

impl HsvRange {
    #[inline]
    pub fn contains(&self, hue: u8, sat: u8, val: u8) -> bool {
        self.min_hue <= hue
            && hue <= self.max_hue
            && self.min_sat <= sat
            && sat <= self.max_sat
            && self.min_val <= val
            && val <= self.max_val
    }
}

/// Session-wide detector configuration.
///
/// Constructed once at startup and never mutated, so independent
/// pipelines (and test fixtures) can each hold their own copy without
/// shared state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    #[serde(default)]
    pub thresholds: ValidationThresholds,
    #[serde(default)]
    pub hsv: HsvRange,
    /// Fixed pixel whose HSV reading is attached to the descriptor as a
    /// diagnostic sample. Clamped into the frame at detect time.
    #[serde(default = "default_probe")]
    pub probe: (u32, u32),
    /// Gaussian pre-blur applied before thresholding; zero disables it.
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
}

fn default_probe() -> (u32, u32) {
    (120, 120)
}

fn default_blur_sigma() -> f32 {
    4.0
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            thresholds: ValidationThresholds::default(),
            hsv: HsvRange::default(),
            probe: default_probe(),
            blur_sigma: default_blur_sigma(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_band_is_inclusive() {
        let band = HsvRange::default();
        assert!(band.contains(68, 140, 0));
        assert!(band.contains(180, 255, 255));
        assert!(!band.contains(67, 200, 100));
        assert!(!band.contains(100, 139, 100));
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: DetectorParams = serde_json::from_str("{}").expect("empty config");
        assert_eq!(params, DetectorParams::default());

        let params: DetectorParams =
            serde_json::from_str(r#"{"probe": [10, 20], "blur_sigma": 0.0}"#).expect("overrides");
        assert_eq!(params.probe, (10, 20));
        assert_eq!(params.blur_sigma, 0.0);
        assert_eq!(params.thresholds, ValidationThresholds::default());
    }
}
