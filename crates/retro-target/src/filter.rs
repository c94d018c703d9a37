//! HSV color filtering on OpenCV's encoding (hue 0-180, sat/val 0-255).
//!
//! The reference band is expressed in that encoding, so the conversion
//! here reproduces it rather than the 0-360 convention.

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::descriptor::ColorSample;
use crate::params::HsvRange;

/// Convert one RGB pixel to (hue, saturation, value).
pub fn rgb_to_hsv(rgb: Rgb<u8>) -> (u8, u8, u8) {
    let r = rgb[0] as f32;
    let g = rgb[1] as f32;
    let b = rgb[2] as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let sat = if max == 0.0 { 0.0 } else { 255.0 * delta / max };

    // 60 degrees per sector, halved onto the 0-180 byte range.
    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        30.0 * (g - b) / delta
    } else if max == g {
        60.0 + 30.0 * (b - r) / delta
    } else {
        120.0 + 30.0 * (r - g) / delta
    };
    let hue = if hue < 0.0 { hue + 180.0 } else { hue };

    (
        hue.round().clamp(0.0, 180.0) as u8,
        sat.round().clamp(0.0, 255.0) as u8,
        value.round().clamp(0.0, 255.0) as u8,
    )
}

/// Threshold a frame on an inclusive HSV band.
///
/// Returns a mask of the frame's dimensions with 255 where the pixel
/// falls inside the band and 0 elsewhere.
pub fn threshold_hsv(frame: &RgbImage, band: &HsvRange) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let (h, s, v) = rgb_to_hsv(*frame.get_pixel(x, y));
        Luma([if band.contains(h, s, v) { 255 } else { 0 }])
    })
}

/// Read the HSV sample at one pixel.
pub fn sample_hsv(frame: &RgbImage, x: u32, y: u32) -> ColorSample {
    let (hue, saturation, value) = rgb_to_hsv(*frame.get_pixel(x, y));
    ColorSample {
        hue,
        saturation,
        value,
    }
}
