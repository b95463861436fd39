use crate::config::{Algorithm, StabilizerConfig};
use crate::input::types::{Axis, InputReport, ReportKind};
use crate::processing::filters::{apply_filter, FilterState};
use crate::processing::history::{PenPoint, PointHistory};
use crate::stream::accumulator::{AxisAccumulator, CarriedAxes};
use serde::Serialize;

/// Pressure below this value means the pen has left the surface
pub const CONTACT_PRESSURE_THRESHOLD: i32 = 50;

/// Every Nth filtered frame is logged at debug level
const DEBUG_LOG_INTERVAL: u64 = 50;

/// Counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub batches: u64,
    pub frames_filtered: u64,
    pub resets: u64,
}

/// Filter engine state for one pointer device
///
/// Owns everything a stroke needs: the configuration snapshot, the point
/// history, the active algorithm's state and the per-frame accumulator.
/// Separate pointers must use separate sessions.
#[derive(Debug, Clone)]
pub struct StrokeSession {
    config: StabilizerConfig,
    history: PointHistory,
    state: FilterState,
    accumulator: AxisAccumulator,
    carried: CarriedAxes,
    stats: SessionStats,
}

impl Default for StrokeSession {
    fn default() -> Self {
        Self::new(StabilizerConfig::default())
    }
}

impl StrokeSession {
    pub fn new(config: StabilizerConfig) -> Self {
        tracing::info!(
            "Stroke session opened (algorithm={}, strength={:.2}, \
             pressure_smoothing={}, tilt_smoothing={})",
            config.algorithm(),
            config.strength(),
            config.pressure_smoothing(),
            config.tilt_smoothing()
        );

        Self {
            state: FilterState::for_algorithm(config.algorithm()),
            config,
            history: PointHistory::new(),
            accumulator: AxisAccumulator::new(),
            carried: CarriedAxes::default(),
            stats: SessionStats::default(),
        }
    }

    /// Start a new session on a reopened device with a fresh configuration
    pub fn reopen(&mut self, config: StabilizerConfig) {
        *self = Self::new(config);
    }

    pub fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    pub fn history(&self) -> &PointHistory {
        &self.history
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Forget the current stroke: history, filter state and pending axes
    ///
    /// Pending axis values still reach the carried device state, since the
    /// device will not send them again.
    pub fn reset_stroke(&mut self) {
        self.history.clear();
        self.state.reset();
        self.accumulator.commit(&mut self.carried);
        self.accumulator.clear();
        self.stats.resets += 1;
    }

    /// Filter a batch of reports in place
    ///
    /// Only axis values of frames that close inside this batch are
    /// rewritten. The number, order and kinds of reports never change.
    pub fn process_batch(&mut self, reports: &mut [InputReport]) {
        self.stats.batches += 1;

        if self.config.algorithm() == Algorithm::Off {
            return;
        }

        // First report of the frame currently being assembled
        let mut frame_start = 0;

        for i in 0..reports.len() {
            let report = reports[i];
            match report.kind {
                ReportKind::Axis { axis } => {
                    if axis == Axis::Pressure && report.value < CONTACT_PRESSURE_THRESHOLD {
                        tracing::debug!("Pen lifted (pressure={}), resetting stroke", report.value);
                        self.reset_stroke();
                        self.carried.set(Axis::Pressure, report.value);
                        frame_start = i + 1;
                    } else {
                        self.accumulator.record(axis, report.value);
                    }
                }
                ReportKind::Key { key } => {
                    if report.value == 0 && key.ends_contact() {
                        tracing::debug!("Tool {:?} released, resetting stroke", key);
                        self.reset_stroke();
                        frame_start = i + 1;
                    }
                }
                ReportKind::FrameEnd => {
                    if self.accumulator.has_position() {
                        let filtered = self.finish_frame(report.timestamp);
                        self.patch_frame(&mut reports[frame_start..i], &filtered);
                    } else {
                        self.accumulator.commit(&mut self.carried);
                    }
                    self.accumulator.clear();
                    frame_start = i + 1;
                }
                ReportKind::Other { .. } => {}
            }
        }
    }

    fn finish_frame(&mut self, timestamp: f64) -> PenPoint {
        let raw = self.accumulator.finalize(&mut self.carried);
        self.history.push(raw);
        let filtered = apply_filter(&raw, timestamp, &self.config, &mut self.state, &self.history);

        if self.stats.frames_filtered % DEBUG_LOG_INTERVAL == 0 {
            tracing::debug!(
                "raw=({}, {}) filtered=({:.0}, {:.0}) delta=({:.1}, {:.1})",
                raw.x,
                raw.y,
                filtered.x,
                filtered.y,
                filtered.x - raw.x,
                filtered.y - raw.y
            );
        }
        self.stats.frames_filtered += 1;

        filtered
    }

    fn patch_frame(&self, frame: &mut [InputReport], filtered: &PenPoint) {
        let pressure = self.config.pressure_smoothing();
        let tilt = self.config.tilt_smoothing();

        for report in frame.iter_mut().rev() {
            let value = match report.axis_kind() {
                Some(Axis::X) => filtered.x,
                Some(Axis::Y) => filtered.y,
                Some(Axis::Pressure) if pressure => filtered.pressure,
                Some(Axis::TiltX) if tilt => filtered.tilt_x,
                Some(Axis::TiltY) if tilt => filtered.tilt_y,
                _ => continue,
            };
            report.value = round_half_up(value);
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
