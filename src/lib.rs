//! Stroke Stabilizer - smoothing for pen digitizer input.
//!
//! This is the main library crate. It provides the stroke-filtering engine
//! (point history, smoothing algorithms, stream reconstruction) and the
//! tooling to replay recorded input through it.

pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod replay;
pub mod stream;

pub use config::{Algorithm, StabilizerConfig};
pub use error::{StabilizerError, StabilizerResult};
pub use input::{Axis, InputReport, ReportKind, ToolKey};
pub use stream::StrokeSession;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Honours `RUST_LOG`; defaults to info for this crate.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stroke_stabilizer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
