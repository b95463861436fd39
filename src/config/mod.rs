//! Stabilizer configuration
//!
//! A configuration is a small set of user-facing tunables (algorithm,
//! strength, smoothing flags). Every algorithm-specific number is derived
//! from the single `strength` knob, so the derived set is recomputed
//! whenever strength changes and can never drift from it.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use loader::{load_config, parse_config};

/// Smoothing algorithm applied to pen positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Pass every report through unchanged
    Off,
    /// Arithmetic mean over a fixed number of recent samples
    WindowAverage,
    /// Gaussian weights over cumulative path distance
    WeightedAverage,
    /// Elastic dead zone: output trails the pen by at most a fixed radius
    #[default]
    Tether,
    /// Speed-sensitive exponential low-pass (1€ style)
    AdaptiveLowPass,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Off => "off",
            Algorithm::WindowAverage => "window_average",
            Algorithm::WeightedAverage => "weighted_average",
            Algorithm::Tether => "tether",
            Algorithm::AdaptiveLowPass => "adaptive_low_pass",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Legacy names from older config files are still accepted
        match s.trim() {
            "off" => Ok(Algorithm::Off),
            "window_average" | "moving_avg" => Ok(Algorithm::WindowAverage),
            "weighted_average" | "gaussian" => Ok(Algorithm::WeightedAverage),
            "tether" | "string_pull" => Ok(Algorithm::Tether),
            "adaptive_low_pass" | "one_euro" => Ok(Algorithm::AdaptiveLowPass),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

pub const DEFAULT_STRENGTH: f64 = 0.5;

/// Derivative cutoff (Hz) used to smooth the velocity estimate
pub const DERIVATIVE_CUTOFF: f64 = 1.0;

/// Algorithm parameters derived from strength
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedParams {
    /// Number of samples averaged by the window average (4..=32)
    pub window_size: usize,
    /// Gaussian kernel width in coordinate units (50..=500)
    pub kernel_sigma: f64,
    /// Tether dead-zone radius in coordinate units (100..=1000)
    pub tether_length: f64,
    /// Adaptive low-pass cutoff at rest in Hz (1.5 down to 0.2)
    pub min_cutoff: f64,
    /// How much speed raises the cutoff
    pub speed_coefficient: f64,
    pub derivative_cutoff: f64,
}

impl DerivedParams {
    /// Derive parameters from a strength value. Out-of-range strength is clamped.
    pub fn from_strength(strength: f64) -> Self {
        let s = clamp_strength(strength);
        Self {
            window_size: 4 + (s * 28.0) as usize,
            kernel_sigma: 50.0 + s * 450.0,
            tether_length: 100.0 + s * 900.0,
            min_cutoff: 1.5 - s * 1.3,
            speed_coefficient: 0.001 + s * 0.01,
            derivative_cutoff: DERIVATIVE_CUTOFF,
        }
    }
}

/// Clamp strength into [0, 1]; NaN falls back to the default
pub fn clamp_strength(strength: f64) -> f64 {
    if strength.is_nan() {
        DEFAULT_STRENGTH
    } else {
        strength.clamp(0.0, 1.0)
    }
}

/// Immutable configuration snapshot handed to a stroke session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ConfigFile")]
pub struct StabilizerConfig {
    algorithm: Algorithm,
    strength: f64,
    pressure_smoothing: bool,
    tilt_smoothing: bool,
    params: DerivedParams,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self::new(Algorithm::default(), DEFAULT_STRENGTH)
    }
}

impl StabilizerConfig {
    pub fn new(algorithm: Algorithm, strength: f64) -> Self {
        let strength = clamp_strength(strength);
        Self {
            algorithm,
            strength,
            pressure_smoothing: false,
            tilt_smoothing: false,
            params: DerivedParams::from_strength(strength),
        }
    }

    pub fn with_pressure_smoothing(mut self, enabled: bool) -> Self {
        self.pressure_smoothing = enabled;
        self
    }

    pub fn with_tilt_smoothing(mut self, enabled: bool) -> Self {
        self.tilt_smoothing = enabled;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replace strength and re-derive every dependent parameter
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = clamp_strength(strength);
        self.params = DerivedParams::from_strength(self.strength);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn pressure_smoothing(&self) -> bool {
        self.pressure_smoothing
    }

    pub fn tilt_smoothing(&self) -> bool {
        self.tilt_smoothing
    }

    pub fn params(&self) -> &DerivedParams {
        &self.params
    }
}

/// Serialized form; derived parameters are never read back from disk
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    #[serde(default)]
    algorithm: Algorithm,
    #[serde(default = "default_strength")]
    strength: f64,
    #[serde(default)]
    pressure_smoothing: bool,
    #[serde(default)]
    tilt_smoothing: bool,
}

fn default_strength() -> f64 {
    DEFAULT_STRENGTH
}

impl From<ConfigFile> for StabilizerConfig {
    fn from(file: ConfigFile) -> Self {
        StabilizerConfig::new(file.algorithm, file.strength)
            .with_pressure_smoothing(file.pressure_smoothing)
            .with_tilt_smoothing(file.tilt_smoothing)
    }
}
