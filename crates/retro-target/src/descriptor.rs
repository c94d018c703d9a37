use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use retro_target_core::polygon_moments;

use crate::corners::CornerSet;

/// HSV reading taken at the diagnostic probe pixel.
///
/// Pass-through data: the color filter reads it off the frame and the
/// descriptor carries it to the consumer unchanged.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

/// Pose proxy for the detected target: corners, centroid and edge spans.
///
/// Emitted at most once per frame. The edge spans are plain coordinate
/// differences between classified corners and may be negative when
/// corner classification collapses (see [`CornerSet`]); consumers must
/// not assume positivity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    pub corners: CornerSet,
    /// Center of mass of the winning hull.
    pub centroid: Point2<f32>,
    /// `upper_right.x - upper_left.x`.
    pub top_width: f32,
    /// `lower_right.x - lower_left.x`.
    pub bottom_width: f32,
    /// `lower_left.y - upper_left.y`.
    pub left_height: f32,
    /// `lower_right.y - upper_right.y`.
    pub right_height: f32,
    pub sample: ColorSample,
}

/// Assemble the descriptor for the winning hull.
///
/// The centroid comes from the hull's area moments; when the zeroth
/// moment is zero the centroid is undefined and the whole build fails
/// for this frame (`None`), rather than emitting NaN or Inf fields.
pub fn build_descriptor(
    hull: &[Point2<f32>],
    corners: &CornerSet,
    sample: ColorSample,
) -> Option<TargetDescriptor> {
    let centroid = polygon_moments(hull).centroid()?;
    Some(TargetDescriptor {
        corners: *corners,
        centroid,
        top_width: corners.upper_right.x - corners.upper_left.x,
        bottom_width: corners.lower_right.x - corners.lower_left.x,
        left_height: corners.lower_left.y - corners.upper_left.y,
        right_height: corners.lower_right.y - corners.upper_right.y,
        sample,
    })
}
