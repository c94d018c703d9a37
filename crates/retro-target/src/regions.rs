//! Region extraction: Suzuki-Abe border following over a binary mask.
//!
//! Every border is retrieved, holes included, and each boundary is
//! compressed by dropping colinear points before it becomes an
//! [`Outline`].

use image::GrayImage;
use imageproc::contours::find_contours;
use nalgebra::Point2;

use retro_target_core::{simplify_colinear, Outline};

/// Extract every region boundary from the mask (nonzero = foreground).
pub fn extract_outlines(mask: &GrayImage) -> Vec<Outline> {
    find_contours::<u32>(mask)
        .into_iter()
        .map(|contour| {
            let points: Vec<Point2<f32>> = contour
                .points
                .iter()
                .map(|p| Point2::new(p.x as f32, p.y as f32))
                .collect();
            Outline::new(simplify_colinear(&points))
        })
        .filter(|outline| !outline.is_empty())
        .collect()
}
