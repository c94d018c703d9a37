//! Core types and utilities for retro-reflective target detection.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete image container or region extractor; masks come
//! in as borrowed byte grids and outlines as ordered point sequences.

mod hull;
mod logger;
mod mask;
mod moments;
mod outline;

pub use hull::convex_hull;
pub use mask::{MaskError, MaskView};
pub use moments::{polygon_moments, signed_area, Moments};
pub use outline::{simplify_colinear, BoundingRect, Outline};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
