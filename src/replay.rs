//! Replay of recorded pen input through a stroke session
//!
//! Used for tuning and regression checks: a recorded stream is filtered
//! exactly as the live interception layer would filter it, and written back
//! out in the same format.

use crate::config::StabilizerConfig;
use crate::error::StabilizerResult;
use crate::input::evdev::{self, RawEvent};
use crate::input::types::InputReport;
use crate::processing::stroke_smoothing::{smooth_stroke, TimedPoint};
use crate::stream::{SessionStats, StrokeSession};
use std::path::Path;

/// Events per simulated device read when replaying evdev dumps
pub const EVDEV_READ_CHUNK: usize = 64;

/// On-disk format of a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReplayFormat {
    /// JSON array of report batches
    Json,
    /// Raw 64-bit Linux `input_event` dump
    Evdev,
    /// JSON array of timed pen points (one stroke)
    Points,
}

/// Filter each batch in order through `session`
pub fn replay_batches(session: &mut StrokeSession, batches: &mut [Vec<InputReport>]) {
    for batch in batches.iter_mut() {
        session.process_batch(batch);
    }
}

/// Filter an evdev dump, returning the rewritten dump
pub fn replay_evdev(session: &mut StrokeSession, bytes: &[u8]) -> StabilizerResult<Vec<u8>> {
    let events = evdev::decode_events(bytes)?;
    let mut out = Vec::with_capacity(events.len());

    for chunk in events.chunks(EVDEV_READ_CHUNK) {
        let mut reports: Vec<InputReport> = chunk.iter().map(RawEvent::to_report).collect();
        session.process_batch(&mut reports);
        out.extend(
            chunk
                .iter()
                .zip(&reports)
                .map(|(event, report)| event.with_report(report)),
        );
    }

    Ok(evdev::encode_events(&out))
}

/// Replay `input` into `output` with a fresh session
pub fn replay_file(
    input: &Path,
    output: &Path,
    format: ReplayFormat,
    config: StabilizerConfig,
) -> StabilizerResult<SessionStats> {
    tracing::info!(
        "Replaying {:?} -> {:?} as {:?} (algorithm={}, strength={:.2})",
        input,
        output,
        format,
        config.algorithm(),
        config.strength()
    );

    let mut session = StrokeSession::new(config);

    match format {
        ReplayFormat::Json => {
            let content = std::fs::read_to_string(input)?;
            let mut batches: Vec<Vec<InputReport>> = serde_json::from_str(&content)?;
            replay_batches(&mut session, &mut batches);
            std::fs::write(output, serde_json::to_vec_pretty(&batches)?)?;
        }
        ReplayFormat::Evdev => {
            let bytes = std::fs::read(input)?;
            let filtered = replay_evdev(&mut session, &bytes)?;
            std::fs::write(output, filtered)?;
        }
        ReplayFormat::Points => {
            let content = std::fs::read_to_string(input)?;
            let points: Vec<TimedPoint> = serde_json::from_str(&content)?;
            let smoothed = smooth_stroke(&points, session.config());
            std::fs::write(output, serde_json::to_vec_pretty(&smoothed)?)?;
            tracing::info!("Wrote {} smoothed points to {:?}", smoothed.len(), output);
        }
    }

    let stats = session.stats();
    tracing::info!(
        "Replay finished (batches={}, frames={}, resets={})",
        stats.batches,
        stats.frames_filtered,
        stats.resets
    );
    Ok(stats)
}
