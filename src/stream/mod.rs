//! Stream reconstruction
//!
//! Turns batches of per-axis reports into complete pen samples, runs the
//! configured filter on each finished frame and writes the result back into
//! the same batch.

pub mod accumulator;
pub mod session;

pub use session::{round_half_up, SessionStats, StrokeSession, CONTACT_PRESSURE_THRESHOLD};
