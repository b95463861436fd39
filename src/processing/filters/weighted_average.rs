//! Distance-weighted (Gaussian) average
//!
//! Each historical sample is weighted by a Gaussian of the path length
//! travelled since it was recorded, not by its age. Fast strokes cover more
//! distance per sample, so fewer samples fall inside the kernel and the
//! output stays responsive; slow strokes average over more samples.

use super::SmoothedChannels;
use crate::processing::history::{PenPoint, PointHistory};

/// Stop walking once a weight contributes less than this share of the total
pub const NEGLIGIBLE_WEIGHT_RATIO: f64 = 0.001;

pub fn weighted_average(
    raw: &PenPoint,
    history: &PointHistory,
    sigma: f64,
    channels: SmoothedChannels,
) -> PenPoint {
    if sigma <= 0.0 || history.len() < 2 {
        return *raw;
    }

    let two_sigma2 = 2.0 * sigma * sigma;
    let mut sum = PenPoint::default();
    let mut sum_w = 0.0;
    let mut path = 0.0;
    let mut step = 0.0;

    for (sample, age) in history.iter_recent() {
        // distance() links a sample to the older one, so the path to this
        // sample grows by the newer neighbour's step
        path += step;
        step = sample.distance();

        let w = (-(path * path) / two_sigma2).exp();
        if age > 0 && sum_w > 0.0 && w < sum_w * NEGLIGIBLE_WEIGHT_RATIO {
            break;
        }

        let p = sample.point();
        sum.x += w * p.x;
        sum.y += w * p.y;
        sum.pressure += w * p.pressure;
        sum.tilt_x += w * p.tilt_x;
        sum.tilt_y += w * p.tilt_y;
        sum_w += w;
    }

    if sum_w <= 0.0 || !sum_w.is_finite() {
        return *raw;
    }

    let mut out = PenPoint {
        x: sum.x / sum_w,
        y: sum.y / sum_w,
        ..*raw
    };
    if channels.pressure {
        out.pressure = sum.pressure / sum_w;
    }
    if channels.tilt {
        out.tilt_x = sum.tilt_x / sum_w;
        out.tilt_y = sum.tilt_y / sum_w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_all(history: &mut PointHistory, points: &[(f64, f64)]) {
        for &(x, y) in points {
            history.push(PenPoint::new(x, y));
        }
    }

    #[test]
    fn test_single_sample_passes_through() {
        let mut history = PointHistory::new();
        let raw = PenPoint::new(9.0, 9.0);
        history.push(raw);
        assert_eq!(weighted_average(&raw, &history, 100.0, SmoothedChannels::default()), raw);
    }

    #[test]
    fn test_constant_input_converges() {
        let mut history = PointHistory::new();
        push_all(&mut history, &[(300.0, 300.0), (250.0, 310.0)]);
        let raw = PenPoint::new(100.0, 200.0);
        let mut out = raw;
        for _ in 0..64 {
            history.push(raw);
            out = weighted_average(&raw, &history, 50.0, SmoothedChannels::default());
        }
        assert!((out.x - 100.0).abs() < 1e-9, "x {} should converge to 100", out.x);
        assert!((out.y - 200.0).abs() < 1e-9, "y {} should converge to 200", out.y);
    }

    #[test]
    fn test_newest_sample_dominates() {
        let mut history = PointHistory::new();
        push_all(&mut history, &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let out = weighted_average(
            &PenPoint::new(20.0, 0.0),
            &history,
            50.0,
            SmoothedChannels::default(),
        );
        assert!(out.x > 10.0 && out.x < 20.0, "weighted x {} should lean toward newest", out.x);
    }

    #[test]
    fn test_far_samples_are_cut_off() {
        let mut history = PointHistory::new();
        // An old point a long path away contributes nothing
        push_all(&mut history, &[(-100_000.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        let out = weighted_average(
            &PenPoint::new(1.0, 0.0),
            &history,
            50.0,
            SmoothedChannels::default(),
        );
        assert!(out.x > 0.0 && out.x <= 1.0, "x {} should ignore the distant sample", out.x);
    }

    #[test]
    fn test_fast_strokes_use_fewer_samples() {
        // Same sample count, different spacing
        let mut slow = PointHistory::new();
        let mut fast = PointHistory::new();
        for i in 0..20 {
            slow.push(PenPoint::new(i as f64 * 2.0, 0.0));
            fast.push(PenPoint::new(i as f64 * 200.0, 0.0));
        }
        let slow_out = weighted_average(
            &PenPoint::new(38.0, 0.0),
            &slow,
            100.0,
            SmoothedChannels::default(),
        );
        let fast_out = weighted_average(
            &PenPoint::new(3800.0, 0.0),
            &fast,
            100.0,
            SmoothedChannels::default(),
        );

        // Lag relative to sample spacing is far smaller on the fast stroke
        let slow_lag = (38.0 - slow_out.x) / 2.0;
        let fast_lag = (3800.0 - fast_out.x) / 200.0;
        assert!(fast_lag < slow_lag, "fast lag {} should be below slow lag {}", fast_lag, slow_lag);
    }

    #[test]
    fn test_pressure_only_weighted_when_enabled() {
        let mut history = PointHistory::new();
        for (x, pressure) in [(0.0, 1000.0), (1.0, 3000.0)] {
            history.push(PenPoint {
                pressure,
                ..PenPoint::new(x, 0.0)
            });
        }
        let raw = PenPoint {
            pressure: 3000.0,
            ..PenPoint::new(1.0, 0.0)
        };

        let plain = weighted_average(&raw, &history, 500.0, SmoothedChannels::default());
        assert_eq!(plain.pressure, 3000.0);

        let smoothed = weighted_average(
            &raw,
            &history,
            500.0,
            SmoothedChannels {
                pressure: true,
                tilt: false,
            },
        );
        assert!(smoothed.pressure > 1000.0 && smoothed.pressure < 3000.0);
    }
}
