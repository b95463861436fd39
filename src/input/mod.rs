//! Pen input reports
//!
//! Typed reports delivered by a digitizer in batches, plus the evdev wire
//! codec used to read and write recorded streams.

pub mod evdev;
pub mod types;

pub use evdev::RawEvent;
pub use types::{Axis, InputReport, ReportKind, ToolKey};
