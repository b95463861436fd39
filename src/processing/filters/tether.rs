//! Tether (elastic dead-zone) smoothing
//!
//! The output point hangs off the pen on a virtual string of fixed length.
//! Pen motion inside the string's radius never moves the output, so tremor
//! is absorbed completely and a stationary pen has zero latency. Sustained
//! motion drags the anchor along with a constant lag of one string length.

use crate::processing::history::PenPoint;

/// Anchor state for the tether filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tether {
    anchor: Option<(f64, f64)>,
}

impl Tether {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Advance the anchor toward the raw pen position
    ///
    /// The first call of a stroke snaps the anchor to the pen. Afterwards the
    /// anchor only moves when the pen is farther than `length` away, and then
    /// by exactly the excess along the pen direction.
    pub fn step(&mut self, raw_x: f64, raw_y: f64, length: f64) -> (f64, f64) {
        let (mut ax, mut ay) = *self.anchor.get_or_insert((raw_x, raw_y));

        let dx = raw_x - ax;
        let dy = raw_y - ay;
        let distance = (dx * dx + dy * dy).sqrt();

        // distance > length >= 0 keeps the division safe
        if distance > length.max(0.0) {
            let ratio = (distance - length.max(0.0)) / distance;
            ax += dx * ratio;
            ay += dy * ratio;
            self.anchor = Some((ax, ay));
        }

        (ax, ay)
    }

    /// Filter a full pen point; pressure and tilt pass through
    pub fn filter(&mut self, raw: &PenPoint, length: f64) -> PenPoint {
        let (x, y) = self.step(raw.x, raw.y, length);
        PenPoint { x, y, ..*raw }
    }

    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.anchor
    }

    pub fn reset(&mut self) {
        self.anchor = None;
    }
}
