//! Retro-reflective ring target detection.
//!
//! Given a binary mask of color-matched pixels (or, with the `image`
//! feature, an RGB frame), the detector extracts region outlines,
//! validates each one against geometric acceptance bands, picks the
//! largest valid convex hull, classifies its extreme points into four
//! logical corners and emits a [`TargetDescriptor`] for the
//! motion-control consumer. Frames are independent: nothing is carried
//! from one detect call to the next.
//!
//! ## Quickstart
//!
//! ```
//! use retro_target::{ColorSample, DetectorParams, TargetDetector};
//! use retro_target_core::Outline;
//!
//! let detector = TargetDetector::new(DetectorParams::default());
//!
//! let outlines: Vec<Outline> = Vec::new();
//! let result = detector.detect_from_outlines(&outlines, 640, 480, ColorSample::default());
//! println!("detected: {}", result.is_some());
//! ```
//!
//! ## Pipeline
//!
//! 1. Threshold the frame on the configured HSV band (feature `image`).
//! 2. Border-follow the mask into outlines, holes included, with
//!    colinear boundary points compressed away (feature `image`).
//! 3. Per outline: normalized area, hull area, solidity, bounding box
//!    ([`compute_metrics`]) checked against [`ValidationThresholds`].
//! 4. Keep the accepted hulls, pick the one with the largest area
//!    ([`select_best`]).
//! 5. Classify its extreme points into corners ([`classify_corners`])
//!    and build the descriptor with the hull centroid
//!    ([`build_descriptor`]).
//!
//! A frame where nothing validates yields `None`, not an error.

pub use retro_target_core as core;

mod corners;
mod descriptor;
mod detector;
mod metrics;
mod params;
mod select;
mod validate;

#[cfg(feature = "image")]
pub mod filter;
#[cfg(feature = "image")]
pub mod regions;

pub use corners::{classify_corners, CornerSet};
pub use descriptor::{build_descriptor, ColorSample, TargetDescriptor};
pub use detector::{DetectError, TargetDetector};
pub use metrics::{compute_metrics, GeometryMetrics};
pub use params::{DetectorParams, HsvRange, ValidationThresholds};
pub use select::select_best;
