use serde::{Deserialize, Serialize};

/// Absolute axes the stabilizer reads from a pen digitizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    X,
    Y,
    Pressure,
    TiltX,
    TiltY,
}

impl Axis {
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Pressure, Axis::TiltX, Axis::TiltY];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Pressure => 2,
            Axis::TiltX => 3,
            Axis::TiltY => 4,
        }
    }

    pub fn is_position(self) -> bool {
        matches!(self, Axis::X | Axis::Y)
    }
}

/// Key codes that carry tool/contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolKey {
    Pen,
    Rubber,
    Touch,
    /// Any other key or button, identified by its raw code
    Other(u16),
}

impl ToolKey {
    /// Whether a release (value 0) of this key ends the current stroke
    pub fn ends_contact(self) -> bool {
        !matches!(self, ToolKey::Other(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ReportKind {
    /// Absolute axis value
    Axis { axis: Axis },
    /// Key or tool-state change
    Key { key: ToolKey },
    /// End of one logical pointer observation
    FrameEnd,
    /// Anything the stabilizer does not interpret; always passed through
    Other { event_type: u16, code: u16 },
}

/// One report in a batch delivered by the input device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputReport {
    pub kind: ReportKind,
    pub value: i32,
    /// Seconds, from the device clock
    pub timestamp: f64,
}

impl InputReport {
    pub fn axis(axis: Axis, value: i32, timestamp: f64) -> Self {
        Self {
            kind: ReportKind::Axis { axis },
            value,
            timestamp,
        }
    }

    pub fn key(key: ToolKey, value: i32, timestamp: f64) -> Self {
        Self {
            kind: ReportKind::Key { key },
            value,
            timestamp,
        }
    }

    pub fn frame_end(timestamp: f64) -> Self {
        Self {
            kind: ReportKind::FrameEnd,
            value: 0,
            timestamp,
        }
    }

    /// Axis carried by this report, if it is an axis report
    pub fn axis_kind(&self) -> Option<Axis> {
        match self.kind {
            ReportKind::Axis { axis } => Some(axis),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices_are_distinct() {
        let mut seen = [false; 5];
        for axis in Axis::ALL {
            assert!(!seen[axis.index()]);
            seen[axis.index()] = true;
        }
    }

    #[test]
    fn test_tool_keys_ending_contact() {
        assert!(ToolKey::Pen.ends_contact());
        assert!(ToolKey::Rubber.ends_contact());
        assert!(ToolKey::Touch.ends_contact());
        assert!(!ToolKey::Other(0x14b).ends_contact());
    }

    #[test]
    fn test_report_json_shape() {
        let report = InputReport::axis(Axis::TiltX, -12, 1.5);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"kind":{"type":"axis","axis":"tiltX"},"value":-12,"timestamp":1.5}"#
        );
        let back: InputReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
