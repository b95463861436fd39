//! Linux evdev `struct input_event` codec
//!
//! Layout on 64-bit targets (24 bytes, native little-endian):
//! `tv_sec: i64, tv_usec: i64, type: u16, code: u16, value: i32`.
//! Events the stabilizer does not interpret survive a decode/encode cycle
//! unchanged through `ReportKind::Other`.

use crate::error::{StabilizerError, StabilizerResult};
use crate::input::types::{Axis, InputReport, ReportKind, ToolKey};

pub const EVENT_SIZE: usize = 24;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;

pub const SYN_REPORT: u16 = 0x00;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_PRESSURE: u16 = 0x18;
pub const ABS_TILT_X: u16 = 0x1a;
pub const ABS_TILT_Y: u16 = 0x1b;

pub const BTN_TOOL_PEN: u16 = 0x140;
pub const BTN_TOOL_RUBBER: u16 = 0x141;
pub const BTN_TOUCH: u16 = 0x14a;

/// A raw evdev event as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub sec: i64,
    pub usec: i64,
    pub event_type: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn timestamp(&self) -> f64 {
        self.sec as f64 + self.usec as f64 / 1e6
    }

    pub fn decode(bytes: &[u8; EVENT_SIZE]) -> Self {
        let mut i64_buf = [0u8; 8];
        i64_buf.copy_from_slice(&bytes[0..8]);
        let sec = i64::from_le_bytes(i64_buf);
        i64_buf.copy_from_slice(&bytes[8..16]);
        let usec = i64::from_le_bytes(i64_buf);
        let event_type = u16::from_le_bytes([bytes[16], bytes[17]]);
        let code = u16::from_le_bytes([bytes[18], bytes[19]]);
        let value = i32::from_le_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);

        Self {
            sec,
            usec,
            event_type,
            code,
            value,
        }
    }

    pub fn encode(&self) -> [u8; EVENT_SIZE] {
        let mut out = [0u8; EVENT_SIZE];
        out[0..8].copy_from_slice(&self.sec.to_le_bytes());
        out[8..16].copy_from_slice(&self.usec.to_le_bytes());
        out[16..18].copy_from_slice(&self.event_type.to_le_bytes());
        out[18..20].copy_from_slice(&self.code.to_le_bytes());
        out[20..24].copy_from_slice(&self.value.to_le_bytes());
        out
    }

    /// Interpret the event as a stabilizer report
    pub fn to_report(&self) -> InputReport {
        let kind = match (self.event_type, self.code) {
            (EV_ABS, ABS_X) => ReportKind::Axis { axis: Axis::X },
            (EV_ABS, ABS_Y) => ReportKind::Axis { axis: Axis::Y },
            (EV_ABS, ABS_PRESSURE) => ReportKind::Axis {
                axis: Axis::Pressure,
            },
            (EV_ABS, ABS_TILT_X) => ReportKind::Axis { axis: Axis::TiltX },
            (EV_ABS, ABS_TILT_Y) => ReportKind::Axis { axis: Axis::TiltY },
            (EV_SYN, SYN_REPORT) => ReportKind::FrameEnd,
            (EV_KEY, BTN_TOOL_PEN) => ReportKind::Key { key: ToolKey::Pen },
            (EV_KEY, BTN_TOOL_RUBBER) => ReportKind::Key {
                key: ToolKey::Rubber,
            },
            (EV_KEY, BTN_TOUCH) => ReportKind::Key {
                key: ToolKey::Touch,
            },
            (EV_KEY, code) => ReportKind::Key {
                key: ToolKey::Other(code),
            },
            (event_type, code) => ReportKind::Other { event_type, code },
        };

        InputReport {
            kind,
            value: self.value,
            timestamp: self.timestamp(),
        }
    }

    /// Rebuild the wire event for `report`, keeping this event's timestamp
    pub fn with_report(&self, report: &InputReport) -> RawEvent {
        let (event_type, code) = type_and_code(report.kind);
        RawEvent {
            event_type,
            code,
            value: report.value,
            ..*self
        }
    }
}

fn type_and_code(kind: ReportKind) -> (u16, u16) {
    match kind {
        ReportKind::Axis { axis } => (
            EV_ABS,
            match axis {
                Axis::X => ABS_X,
                Axis::Y => ABS_Y,
                Axis::Pressure => ABS_PRESSURE,
                Axis::TiltX => ABS_TILT_X,
                Axis::TiltY => ABS_TILT_Y,
            },
        ),
        ReportKind::Key { key } => (
            EV_KEY,
            match key {
                ToolKey::Pen => BTN_TOOL_PEN,
                ToolKey::Rubber => BTN_TOOL_RUBBER,
                ToolKey::Touch => BTN_TOUCH,
                ToolKey::Other(code) => code,
            },
        ),
        ReportKind::FrameEnd => (EV_SYN, SYN_REPORT),
        ReportKind::Other { event_type, code } => (event_type, code),
    }
}

/// Decode a buffer of whole events
pub fn decode_events(bytes: &[u8]) -> StabilizerResult<Vec<RawEvent>> {
    let trailing = bytes.len() % EVENT_SIZE;
    if trailing != 0 {
        return Err(StabilizerError::TruncatedStream {
            trailing,
            event_size: EVENT_SIZE,
        });
    }

    Ok(bytes
        .chunks_exact(EVENT_SIZE)
        .map(|chunk| {
            let mut event = [0u8; EVENT_SIZE];
            event.copy_from_slice(chunk);
            RawEvent::decode(&event)
        })
        .collect())
}

pub fn encode_events(events: &[RawEvent]) -> Vec<u8> {
    let mut out = Vec::with_capacity(events.len() * EVENT_SIZE);
    for event in events {
        out.extend_from_slice(&event.encode());
    }
    out
}
