//! Demo operations dashboard.
//!
//! Everything shown here comes straight from [`crate::mock`]; alerts and
//! panel rows are rendered exactly as defined.

use dioxus::prelude::*;

use crate::chart::{self, Frame};
use crate::mock::{self, Alert, PanelRow, ALERTS, PANELS, SAMPLE_DAY, WARNING_THRESHOLD_F};
use crate::ui::components::{Badge, BadgeTone, Card};

#[component]
pub fn Dashboard() -> Element {
    let peak = mock::peak_reading();
    let panel_count = PANELS.len();
    let alert_count = ALERTS.len();
    let peak_temp = format!("{:.1}°F", peak.temperature_f);

    rsx! {
        section { class: "section dashboard",
            hgroup {
                h1 { "Operations Dashboard" }
                p { "Demo data for a sample plant. Nothing here is live." }
            }

            div { class: "grid grid-3 stats",
                Card { class: "stat",
                    small { "Panels monitored" }
                    strong { "{panel_count}" }
                }
                Card { class: "stat",
                    small { "Active alerts" }
                    strong { "{alert_count}" }
                }
                Card { class: "stat",
                    small { "Peak today" }
                    strong { {peak_temp} }
                    small { {peak.panel} " at " {peak.time} }
                }
            }

            Card { class: "chart-card",
                h2 { "Panel B-2, sample day" }
                TemperatureChart {}
            }

            div { class: "grid grid-2",
                Card {
                    h2 { "Recent alerts" }
                    ul { class: "alert-list",
                        for alert in ALERTS {
                            AlertItem { key: "{alert.id}", alert }
                        }
                    }
                }
                Card {
                    h2 { "Panels" }
                    table { class: "panel-table",
                        thead {
                            tr {
                                th { "Panel" }
                                th { "Location" }
                                th { "Last temp" }
                                th { "Status" }
                                th { "Last seen" }
                            }
                        }
                        tbody {
                            for row in PANELS {
                                PanelItem { key: "{row.name}", row }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertItem(alert: Alert) -> Element {
    rsx! {
        li { class: "alert-item",
            Badge { tone: BadgeTone::from(alert.severity), label: alert.severity.label() }
            div {
                strong { {alert.panel} }
                small { class: "timestamp", {alert.timestamp} }
                p { {alert.message} }
            }
        }
    }
}

#[component]
fn PanelItem(row: PanelRow) -> Element {
    rsx! {
        tr {
            td { {row.name} }
            td { {row.location} }
            td { {row.last_temp} }
            td { Badge { tone: BadgeTone::from(row.status), label: row.status.label() } }
            td { {row.last_seen} }
        }
    }
}

#[component]
fn TemperatureChart() -> Element {
    let frame = Frame::DASHBOARD;
    let points = chart::points(&SAMPLE_DAY, frame);
    let trace = chart::polyline(&points);
    let threshold = chart::threshold_y(&SAMPLE_DAY, frame, WARNING_THRESHOLD_F);
    let right = frame.width - frame.padding;
    let label_y = frame.height - 4.0;

    rsx! {
        svg {
            class: "chart",
            view_box: frame.view_box(),
            role: "img",
            "aria-label": "Panel temperature over a sample day",
            {threshold.map(|y| rsx! {
                line {
                    class: "threshold",
                    x1: frame.padding,
                    x2: right,
                    y1: y,
                    y2: y,
                    stroke_dasharray: "4 4",
                }
            })}
            polyline { class: "trace", points: trace, fill: "none" }
            for (point, reading) in points.iter().zip(SAMPLE_DAY.iter()) {
                g { key: "{reading.time}",
                    circle { cx: point.x, cy: point.y, r: 3.0 }
                    text { x: point.x, y: label_y, text_anchor: "middle", {reading.time} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_a_point_per_reading() {
        let html = dioxus_ssr::render_element(rsx! { TemperatureChart {} });
        assert_eq!(html.matches("<circle").count(), SAMPLE_DAY.len(), "{html}");
        assert!(html.contains("class=\"threshold\""));
        assert!(html.contains("10 PM"));
    }
}
