//! Mock data for the demo dashboard.
//!
//! None of this comes from a sensor. The arrays describe one illustrative day
//! at a customer plant and never change at runtime.

use serde::Serialize;

/// Readings above this are flagged on the chart.
pub const WARNING_THRESHOLD_F: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleReading {
    pub time: &'static str,
    pub temperature_f: f64,
    pub panel: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u32,
    pub timestamp: &'static str,
    pub panel: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelStatus {
    Ok,
    Warning,
    Hot,
}

impl PanelStatus {
    pub fn label(self) -> &'static str {
        match self {
            PanelStatus::Ok => "OK",
            PanelStatus::Warning => "Warning",
            PanelStatus::Hot => "Hot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelRow {
    pub name: &'static str,
    pub location: &'static str,
    pub last_temp: &'static str,
    pub status: PanelStatus,
    pub last_seen: &'static str,
}

pub const SAMPLE_DAY: [SampleReading; 9] = [
    SampleReading { time: "6 AM", temperature_f: 78.0, panel: "Panel B-2" },
    SampleReading { time: "8 AM", temperature_f: 81.5, panel: "Panel B-2" },
    SampleReading { time: "10 AM", temperature_f: 86.0, panel: "Panel B-2" },
    SampleReading { time: "12 PM", temperature_f: 92.5, panel: "Panel B-2" },
    SampleReading { time: "2 PM", temperature_f: 101.0, panel: "Panel B-2" },
    SampleReading { time: "4 PM", temperature_f: 104.5, panel: "Panel B-2" },
    SampleReading { time: "6 PM", temperature_f: 97.0, panel: "Panel B-2" },
    SampleReading { time: "8 PM", temperature_f: 89.0, panel: "Panel B-2" },
    SampleReading { time: "10 PM", temperature_f: 83.5, panel: "Panel B-2" },
];

pub const ALERTS: [Alert; 3] = [
    Alert {
        id: 1,
        timestamp: "Today 4:12 PM",
        panel: "Panel B-2",
        severity: Severity::High,
        message: "Temperature exceeded 104°F. HVAC contractor notified.",
    },
    Alert {
        id: 2,
        timestamp: "Today 1:47 PM",
        panel: "Panel C-1",
        severity: Severity::Medium,
        message: "Temperature rising faster than normal (+6°F in 30 min).",
    },
    Alert {
        id: 3,
        timestamp: "Yesterday 3:05 PM",
        panel: "Panel B-2",
        severity: Severity::Medium,
        message: "Sustained reading above 95°F for 20 minutes.",
    },
];

pub const PANELS: [PanelRow; 3] = [
    PanelRow {
        name: "Panel A-1",
        location: "Press Line 1",
        last_temp: "82°F",
        status: PanelStatus::Ok,
        last_seen: "1 min ago",
    },
    PanelRow {
        name: "Panel B-2",
        location: "Paint Booth",
        last_temp: "104°F",
        status: PanelStatus::Hot,
        last_seen: "just now",
    },
    PanelRow {
        name: "Panel C-1",
        location: "Compressor Room",
        last_temp: "96°F",
        status: PanelStatus::Warning,
        last_seen: "2 min ago",
    },
];

/// Highest reading of the sample day.
pub fn peak_reading() -> SampleReading {
    SAMPLE_DAY
        .iter()
        .copied()
        .fold(SAMPLE_DAY[0], |peak, r| {
            if r.temperature_f > peak.temperature_f {
                r
            } else {
                peak
            }
        })
}
