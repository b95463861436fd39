//! Simple moving average over the most recent samples

use super::SmoothedChannels;
use crate::processing::history::{PenPoint, PointHistory};

/// Mean of the newest `window` samples in `history`
///
/// The window is clamped to the samples actually available; an empty
/// history returns `raw` untouched.
pub fn window_average(
    raw: &PenPoint,
    history: &PointHistory,
    window: usize,
    channels: SmoothedChannels,
) -> PenPoint {
    let n = window.max(1).min(history.len());
    if n == 0 {
        return *raw;
    }

    let mut sum = PenPoint::default();
    for (sample, _) in history.iter_recent().take(n) {
        let p = sample.point();
        sum.x += p.x;
        sum.y += p.y;
        sum.pressure += p.pressure;
        sum.tilt_x += p.tilt_x;
        sum.tilt_y += p.tilt_y;
    }

    let n = n as f64;
    let mut out = PenPoint {
        x: sum.x / n,
        y: sum.y / n,
        ..*raw
    };
    if channels.pressure {
        out.pressure = sum.pressure / n;
    }
    if channels.tilt {
        out.tilt_x = sum.tilt_x / n;
        out.tilt_y = sum.tilt_y / n;
    }
    out
}
