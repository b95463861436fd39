//! Per-frame accumulation of axis values

use crate::input::types::Axis;
use crate::processing::history::PenPoint;

const AXIS_COUNT: usize = Axis::ALL.len();

/// Latest value per axis since the last frame boundary
#[derive(Debug, Clone, Default)]
pub struct AxisAccumulator {
    values: [i32; AXIS_COUNT],
    seen: [bool; AXIS_COUNT],
}

impl AxisAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, axis: Axis, value: i32) {
        self.values[axis.index()] = value;
        self.seen[axis.index()] = true;
    }

    pub fn seen(&self, axis: Axis) -> bool {
        self.seen[axis.index()]
    }

    pub fn has_position(&self) -> bool {
        Axis::ALL.iter().any(|&axis| axis.is_position() && self.seen(axis))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copy every seen value into `carried`
    pub fn commit(&self, carried: &mut CarriedAxes) {
        for axis in Axis::ALL {
            if self.seen(axis) {
                carried.set(axis, self.values[axis.index()]);
            }
        }
    }

    /// Fold the seen values into `carried` and return the completed point
    ///
    /// Axes that were not reported this frame keep their carried value.
    pub fn finalize(&self, carried: &mut CarriedAxes) -> PenPoint {
        self.commit(carried);
        carried.point()
    }
}

/// Last finalized value of every axis
///
/// Digitizers only report axes that changed, so a frame missing an axis
/// means "unchanged", not zero. This survives stroke resets because it
/// mirrors device state rather than filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarriedAxes {
    values: [i32; AXIS_COUNT],
}

impl CarriedAxes {
    pub fn get(&self, axis: Axis) -> i32 {
        self.values[axis.index()]
    }

    pub fn set(&mut self, axis: Axis, value: i32) {
        self.values[axis.index()] = value;
    }

    pub fn point(&self) -> PenPoint {
        PenPoint {
            x: self.get(Axis::X) as f64,
            y: self.get(Axis::Y) as f64,
            pressure: self.get(Axis::Pressure) as f64,
            tilt_x: self.get(Axis::TiltX) as f64,
            tilt_y: self.get(Axis::TiltY) as f64,
        }
    }
}
