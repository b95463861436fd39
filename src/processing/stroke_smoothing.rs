//! Offline stroke smoothing
//!
//! Runs the stabilizer over an already-assembled list of timed pen points
//! (for example a stroke exported from a drawing app) and returns both the
//! raw and the smoothed coordinates, which is handy for tuning strength
//! against recorded input.

use crate::config::StabilizerConfig;
use crate::processing::filters::{apply_filter, FilterState};
use crate::processing::history::{PenPoint, PointHistory};
use serde::{Deserialize, Serialize};

/// A recorded pen point with its capture time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedPoint {
    #[serde(flatten)]
    pub point: PenPoint,
    /// Seconds from the device clock
    pub timestamp: f64,
}

/// Smoothed pen position with both raw and smoothed coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedPoint {
    /// Smoothed X position
    pub x: f64,
    /// Smoothed Y position
    pub y: f64,
    /// Original raw X position
    pub raw_x: f64,
    /// Original raw Y position
    pub raw_y: f64,
    pub pressure: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub timestamp: f64,
}

/// Smooth one stroke from its first to its last point
pub fn smooth_stroke(points: &[TimedPoint], config: &StabilizerConfig) -> Vec<SmoothedPoint> {
    let mut history = PointHistory::new();
    let mut state = FilterState::for_algorithm(config.algorithm());

    points
        .iter()
        .map(|timed| {
            let raw = timed.point;
            history.push(raw);
            let out = apply_filter(&raw, timed.timestamp, config, &mut state, &history);

            SmoothedPoint {
                x: out.x,
                y: out.y,
                raw_x: raw.x,
                raw_y: raw.y,
                pressure: out.pressure,
                tilt_x: out.tilt_x,
                tilt_y: out.tilt_y,
                timestamp: timed.timestamp,
            }
        })
        .collect()
}
