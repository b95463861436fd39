//! Smoothing algorithms and the dispatcher that selects between them
//!
//! Exactly one algorithm is active per session. Its running state lives in
//! a `FilterState` variant; the dispatcher advances only that variant.

pub mod adaptive_low_pass;
pub mod moving_average;
pub mod tether;
pub mod weighted_average;

use crate::config::{Algorithm, StabilizerConfig};
use crate::processing::history::{PenPoint, PointHistory};

pub use adaptive_low_pass::{AdaptiveLowPass, LowPassTuning};
pub use tether::Tether;

/// Which secondary channels an algorithm should smooth alongside position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothedChannels {
    pub pressure: bool,
    pub tilt: bool,
}

impl SmoothedChannels {
    pub fn from_config(config: &StabilizerConfig) -> Self {
        Self {
            pressure: config.pressure_smoothing(),
            tilt: config.tilt_smoothing(),
        }
    }
}

/// Per-algorithm running state
#[derive(Debug, Clone, PartialEq)]
pub enum FilterState {
    Passthrough,
    /// Window averages read everything they need from the history
    WindowAverage,
    WeightedAverage,
    Tether(Tether),
    AdaptiveLowPass(AdaptiveLowPass),
}

impl FilterState {
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Off => FilterState::Passthrough,
            Algorithm::WindowAverage => FilterState::WindowAverage,
            Algorithm::WeightedAverage => FilterState::WeightedAverage,
            Algorithm::Tether => FilterState::Tether(Tether::new()),
            Algorithm::AdaptiveLowPass => FilterState::AdaptiveLowPass(AdaptiveLowPass::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            FilterState::Passthrough => Algorithm::Off,
            FilterState::WindowAverage => Algorithm::WindowAverage,
            FilterState::WeightedAverage => Algorithm::WeightedAverage,
            FilterState::Tether(_) => Algorithm::Tether,
            FilterState::AdaptiveLowPass(_) => Algorithm::AdaptiveLowPass,
        }
    }

    /// Return to the uninitialized state of a fresh stroke
    pub fn reset(&mut self) {
        match self {
            FilterState::Tether(tether) => tether.reset(),
            FilterState::AdaptiveLowPass(filter) => filter.reset(),
            FilterState::Passthrough
            | FilterState::WindowAverage
            | FilterState::WeightedAverage => {}
        }
    }
}

/// Filter one raw point
///
/// `history` must already contain `raw` as its newest sample. Never fails:
/// every degenerate case resolves to a pass-through of `raw`.
pub fn apply_filter(
    raw: &PenPoint,
    timestamp: f64,
    config: &StabilizerConfig,
    state: &mut FilterState,
    history: &PointHistory,
) -> PenPoint {
    if state.algorithm() != config.algorithm() {
        *state = FilterState::for_algorithm(config.algorithm());
    }

    let params = config.params();
    let channels = SmoothedChannels::from_config(config);

    match state {
        FilterState::Passthrough => *raw,
        FilterState::WindowAverage => {
            moving_average::window_average(raw, history, params.window_size, channels)
        }
        FilterState::WeightedAverage => {
            weighted_average::weighted_average(raw, history, params.kernel_sigma, channels)
        }
        FilterState::Tether(tether) => tether.filter(raw, params.tether_length),
        FilterState::AdaptiveLowPass(filter) => {
            let tuning = LowPassTuning {
                min_cutoff: params.min_cutoff,
                speed_coefficient: params.speed_coefficient,
                derivative_cutoff: params.derivative_cutoff,
            };
            filter.filter(raw, timestamp, &tuning, channels)
        }
    }
}
