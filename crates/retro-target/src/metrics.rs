use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use retro_target_core::{convex_hull, signed_area, Outline};

/// Per-outline geometry summary used for candidate validation.
///
/// Areas are normalized by the frame area and therefore lie in [0, 1]
/// for an outline confined to the frame; the ratios can exceed 1 for
/// extreme shapes. Bounding spans are pixel distances (max minus min),
/// so the metrics shift with translation while the ratios do not.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryMetrics {
    /// Enclosed area / frame area.
    pub area: f32,
    /// Convex hull area / frame area.
    pub convex_area: f32,
    /// `area / convex_area` ("solidity"); near 1 for convex outlines.
    pub area_ratio: f32,
    /// Bounding-box width in pixels.
    pub width: f32,
    /// Bounding-box height in pixels.
    pub height: f32,
    /// `height / width`.
    pub aspect: f32,
}

/// Compute the acceptance metrics for one outline.
///
/// Returns the metrics together with the convex hull they were derived
/// from so the caller can reuse the hull for selection. `None` when the
/// frame, the hull area or the bounding width is degenerate; such an
/// outline carries no usable ratios and is rejected wholesale rather
/// than letting a division by zero leak NaNs downstream.
pub fn compute_metrics(
    outline: &Outline,
    frame_width: usize,
    frame_height: usize,
) -> Option<(GeometryMetrics, Vec<Point2<f32>>)> {
    let frame_area = (frame_width * frame_height) as f32;
    if frame_area == 0.0 {
        return None;
    }

    let rect = outline.bounding_rect()?;
    let hull = convex_hull(&outline.points);

    let area = signed_area(&outline.points).abs() / frame_area;
    let convex_area = signed_area(&hull).abs() / frame_area;
    if convex_area == 0.0 {
        return None;
    }

    let width = rect.width();
    let height = rect.height();
    if width == 0.0 {
        return None;
    }

    let metrics = GeometryMetrics {
        area,
        convex_area,
        area_ratio: area / convex_area,
        width,
        height,
        aspect: height / width,
    };
    Some((metrics, hull))
}
