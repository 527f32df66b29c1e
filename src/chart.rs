//! SVG geometry for the sample-day chart.

use crate::mock::SampleReading;

/// Plot area in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub const DASHBOARD: Frame = Frame {
        width: 640.0,
        height: 240.0,
        padding: 24.0,
    };

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn top(&self) -> f64 {
        self.padding
    }

    fn bottom(&self) -> f64 {
        self.height - self.padding
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Linear temperature scale over the min..max of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    min: f64,
    max: f64,
    frame: Frame,
}

impl Scale {
    pub fn fit(readings: &[SampleReading], frame: Frame) -> Option<Self> {
        let first = readings.first()?.temperature_f;
        let (min, max) = readings
            .iter()
            .fold((first, first), |(lo, hi), r| {
                (lo.min(r.temperature_f), hi.max(r.temperature_f))
            });
        Some(Self { min, max, frame })
    }

    /// Higher temperatures map to smaller y.
    pub fn y(&self, temperature_f: f64) -> f64 {
        let (top, bottom) = (self.frame.top(), self.frame.bottom());
        if self.max == self.min {
            return (top + bottom) / 2.0;
        }
        let t = (temperature_f - self.min) / (self.max - self.min);
        (bottom - t * (bottom - top)).clamp(top, bottom)
    }
}

/// One point per reading, evenly spaced left to right.
pub fn points(readings: &[SampleReading], frame: Frame) -> Vec<Point> {
    let Some(scale) = Scale::fit(readings, frame) else {
        return Vec::new();
    };

    let inner = frame.width - 2.0 * frame.padding;
    let step = if readings.len() > 1 {
        inner / (readings.len() - 1) as f64
    } else {
        0.0
    };

    readings
        .iter()
        .enumerate()
        .map(|(i, r)| Point {
            x: frame.padding + step * i as f64,
            y: scale.y(r.temperature_f),
        })
        .collect()
}

/// `points` attribute of an SVG polyline.
pub fn polyline(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Y position of a threshold line, clamped into the plot area.
pub fn threshold_y(readings: &[SampleReading], frame: Frame, threshold_f: f64) -> Option<f64> {
    Scale::fit(readings, frame).map(|scale| scale.y(threshold_f))
}
