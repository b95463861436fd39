//! Processing module for stroke smoothing
//!
//! This module contains the point history, the smoothing algorithms and
//! an offline helper that runs them over a recorded stroke.

pub mod filters;
pub mod history;
pub mod stroke_smoothing;

pub use filters::{apply_filter, FilterState, SmoothedChannels};
pub use history::{PenPoint, PointHistory, Sample, HISTORY_CAPACITY};
pub use stroke_smoothing::{smooth_stroke, SmoothedPoint, TimedPoint};
