use log::{debug, info};

use retro_target_core::Outline;

use crate::corners::classify_corners;
use crate::descriptor::{build_descriptor, ColorSample, TargetDescriptor};
use crate::metrics::compute_metrics;
use crate::params::DetectorParams;
use crate::select::select_best;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the frame-level entry points.
///
/// Only malformed external input surfaces as an error; frames with no
/// valid candidate are ordinary `Ok(None)` results.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("empty frame (width={width}, height={height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error(transparent)]
    Mask(#[from] retro_target_core::MaskError),
}

/// Stateless per-frame target detector.
///
/// Holds only the immutable session configuration; every detect call is
/// independent, so identical inputs give identical outputs and separate
/// pipelines share nothing.
pub struct TargetDetector {
    params: DetectorParams,
}

impl TargetDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Core per-frame pipeline over externally supplied outlines.
    ///
    /// Computes metrics for each outline, keeps the hulls of the ones
    /// that validate, selects the largest, classifies its corners and
    /// builds the descriptor. `None` when nothing validates or the
    /// winning hull is degenerate.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, outlines), fields(num_outlines = outlines.len()))
    )]
    pub fn detect_from_outlines(
        &self,
        outlines: &[Outline],
        frame_width: usize,
        frame_height: usize,
        sample: ColorSample,
    ) -> Option<TargetDescriptor> {
        let mut hulls = Vec::new();
        for outline in outlines {
            let Some((metrics, hull)) = compute_metrics(outline, frame_width, frame_height)
            else {
                continue;
            };
            if self.params.thresholds.accepts(&metrics) {
                debug!(
                    "accepted outline: area={:.5} ratio={:.3} {}x{}",
                    metrics.area, metrics.area_ratio, metrics.width, metrics.height
                );
                hulls.push(hull);
            }
        }
        info!(
            "{} of {} outlines passed validation",
            hulls.len(),
            outlines.len()
        );

        let best = select_best(hulls)?;
        let corners = classify_corners(&best)?;
        build_descriptor(&best, &corners, sample)
    }
}

#[cfg(feature = "image")]
impl TargetDetector {
    /// Detect in a prebuilt binary mask (nonzero = color-band member).
    ///
    /// The diagnostic color sample cannot be read off a mask, so the
    /// caller supplies it, usually from [`filter::sample_hsv`] on the
    /// source frame.
    ///
    /// [`filter::sample_hsv`]: crate::filter::sample_hsv
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, mask), fields(width = mask.width(), height = mask.height()))
    )]
    pub fn detect_in_mask(
        &self,
        mask: &image::GrayImage,
        sample: ColorSample,
    ) -> Result<Option<TargetDescriptor>, DetectError> {
        let (width, height) = mask.dimensions();
        if width == 0 || height == 0 {
            return Err(DetectError::EmptyFrame { width, height });
        }
        let outlines = crate::regions::extract_outlines(mask);
        Ok(self.detect_from_outlines(&outlines, width as usize, height as usize, sample))
    }

    /// Detect in a raw mask buffer (row-major, nonzero = member).
    ///
    /// Mirrors [`detect_in_mask`](Self::detect_in_mask) for callers
    /// holding plain byte slices; the buffer is validated against the
    /// stated dimensions first.
    pub fn detect_in_mask_u8(
        &self,
        width: u32,
        height: u32,
        data: &[u8],
        sample: ColorSample,
    ) -> Result<Option<TargetDescriptor>, DetectError> {
        let view = retro_target_core::MaskView::new(width as usize, height as usize, data)?;
        let mask = image::GrayImage::from_fn(width, height, |x, y| {
            image::Luma([if view.get(x as i32, y as i32) { 255 } else { 0 }])
        });
        self.detect_in_mask(&mask, sample)
    }

    /// Full per-frame path from an RGB frame.
    ///
    /// Optional Gaussian pre-blur, HSV in-range threshold, probe-pixel
    /// sample, then the mask pipeline.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, frame), fields(width = frame.width(), height = frame.height()))
    )]
    pub fn detect_in_frame(
        &self,
        frame: &image::RgbImage,
    ) -> Result<Option<TargetDescriptor>, DetectError> {
        let (width, height) = frame.dimensions();
        if width == 0 || height == 0 {
            return Err(DetectError::EmptyFrame { width, height });
        }

        let blurred;
        let source = if self.params.blur_sigma > 0.0 {
            blurred = image::imageops::blur(frame, self.params.blur_sigma);
            &blurred
        } else {
            frame
        };

        let mask = crate::filter::threshold_hsv(source, &self.params.hsv);
        let (px, py) = self.params.probe;
        let sample = crate::filter::sample_hsv(source, px.min(width - 1), py.min(height - 1));
        self.detect_in_mask(&mask, sample)
    }
}
