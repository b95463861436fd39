//! `key=value` configuration file reader
//!
//! ```text
//! # ~/.stabilizer.conf
//! algorithm=tether
//! strength=0.7
//! pressure_smoothing=true
//! ```
//!
//! Unknown keys and malformed values are skipped with a warning; the value
//! already in effect is kept.

use super::{Algorithm, StabilizerConfig};
use crate::error::{StabilizerError, StabilizerResult};
use std::path::Path;

/// Load a configuration file, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> StabilizerResult<StabilizerConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = StabilizerConfig::default();
            tracing::info!(
                "No config file at {:?}, using defaults: \
                 algorithm={} strength={:.2} tether_length={:.1}",
                path,
                config.algorithm(),
                config.strength(),
                config.params().tether_length
            );
            return Ok(config);
        }
        Err(source) => {
            return Err(StabilizerError::ConfigError {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse_config(&content, StabilizerConfig::default());
    tracing::info!(
        "Config loaded from {:?}: algorithm={} strength={:.2} tether_length={:.1}",
        path,
        config.algorithm(),
        config.strength(),
        config.params().tether_length
    );
    Ok(config)
}

/// Apply every recognized entry in `content` on top of `base`
pub fn parse_config(content: &str, base: StabilizerConfig) -> StabilizerConfig {
    let mut config = base;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!("Ignoring config line {}: expected key=value", line_no + 1);
            continue;
        };

        config = apply_entry(config, key.trim(), value.trim());
    }

    config
}

fn apply_entry(config: StabilizerConfig, key: &str, value: &str) -> StabilizerConfig {
    match key {
        "algorithm" => match value.parse::<Algorithm>() {
            Ok(algorithm) => config.with_algorithm(algorithm),
            Err(e) => {
                tracing::warn!("Ignoring algorithm entry: {}", e);
                config
            }
        },
        "strength" => match value.parse::<f64>() {
            Ok(strength) if strength.is_finite() => config.with_strength(strength),
            _ => {
                tracing::warn!("Ignoring malformed strength '{}'", value);
                config
            }
        },
        "pressure_smoothing" => match parse_bool(value) {
            Some(enabled) => config.with_pressure_smoothing(enabled),
            None => {
                tracing::warn!("Ignoring malformed pressure_smoothing '{}'", value);
                config
            }
        },
        "tilt_smoothing" => match parse_bool(value) {
            Some(enabled) => config.with_tilt_smoothing(enabled),
            None => {
                tracing::warn!("Ignoring malformed tilt_smoothing '{}'", value);
                config
            }
        },
        other => {
            tracing::warn!("Ignoring unknown config key '{}'", other);
            config
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
