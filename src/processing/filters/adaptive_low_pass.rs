//! Speed-adaptive low-pass filter
//!
//! Two cascaded exponential stages in the style of the 1€ filter
//! (Casiez et al. 2012): a low-passed velocity estimate raises the cutoff
//! of the position stage, so slow precise drawing is smoothed heavily while
//! fast gestures stay responsive.

use super::SmoothedChannels;
use crate::processing::history::PenPoint;
use std::f64::consts::PI;

/// Step used when timestamps do not advance (~500 Hz)
pub const FALLBACK_DT: f64 = 0.002;

/// Tuning for one filter step, derived from strength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassTuning {
    pub min_cutoff: f64,
    pub speed_coefficient: f64,
    pub derivative_cutoff: f64,
}

/// Smoothing coefficient for cutoff `cutoff` (Hz) and step `dt` (s)
pub fn alpha(cutoff: f64, dt: f64) -> f64 {
    if cutoff <= 0.0 {
        return 0.0;
    }
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / dt)
}

fn lowpass(value: f64, prev: f64, a: f64) -> f64 {
    a * value + (1.0 - a) * prev
}

/// Running state of the adaptive low-pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptiveLowPass {
    smoothed: PenPoint,
    velocity: (f64, f64),
    last_time: f64,
    initialized: bool,
}

impl AdaptiveLowPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(
        &mut self,
        raw: &PenPoint,
        timestamp: f64,
        tuning: &LowPassTuning,
        channels: SmoothedChannels,
    ) -> PenPoint {
        if !self.initialized {
            self.smoothed = *raw;
            self.velocity = (0.0, 0.0);
            self.last_time = timestamp;
            self.initialized = true;
            return *raw;
        }

        let mut dt = timestamp - self.last_time;
        if dt <= 0.0 || !dt.is_finite() {
            dt = FALLBACK_DT;
        }
        self.last_time = timestamp;

        let ad = alpha(tuning.derivative_cutoff, dt);
        let vx = lowpass((raw.x - self.smoothed.x) / dt, self.velocity.0, ad);
        let vy = lowpass((raw.y - self.smoothed.y) / dt, self.velocity.1, ad);
        self.velocity = (vx, vy);
        let speed = (vx * vx + vy * vy).sqrt();

        let cutoff = tuning.min_cutoff + tuning.speed_coefficient * speed;
        let a = alpha(cutoff, dt);

        let prev = self.smoothed;
        self.smoothed.x = lowpass(raw.x, prev.x, a);
        self.smoothed.y = lowpass(raw.y, prev.y, a);

        self.smoothed.pressure = if channels.pressure {
            lowpass(raw.pressure, prev.pressure, a)
        } else {
            raw.pressure
        };
        if channels.tilt {
            self.smoothed.tilt_x = lowpass(raw.tilt_x, prev.tilt_x, a);
            self.smoothed.tilt_y = lowpass(raw.tilt_y, prev.tilt_y, a);
        } else {
            self.smoothed.tilt_x = raw.tilt_x;
            self.smoothed.tilt_y = raw.tilt_y;
        }

        self.smoothed
    }

    /// Current velocity estimate in units per second
    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
