//! Marketing copy and site metadata.

use serde::Serialize;

pub const BRAND: &str = "Thermonitor WNY";
pub const PAGE_TITLE: &str = "Thermonitor WNY | Temperature Monitoring for Panels";
pub const PAGE_DESCRIPTION: &str = "Prevent costly panel failures with real-time temperature monitoring and alerts. Thermonitor WNY installs and monitors sensors, coordinating with HVAC/AC contractors.";
pub const VIEWPORT: &str = "width=device-width, initial-scale=1";
pub const FAVICON: &str = "/assets/thermometer-sun.svg";
pub const HERO_IMAGE: &str = "/assets/Engineer.jpeg";
pub const CONTACT_EMAIL: &str = "aaron@thermonitorwny.com";
pub const TAGLINE: &str = "Real-time temperature monitoring for your plant panels.";

pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// A titled blurb with an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blurb {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub includes: &'static [&'static str],
    pub highlighted: bool,
}

pub const HOW_IT_WORKS: [Blurb; 3] = [
    Blurb {
        icon: "🌡",
        title: "1. Install",
        body: "Industrial-grade temperature sensors are installed on your key panels. Non-invasive, no downtime.",
    },
    Blurb {
        icon: "📶",
        title: "2. Monitor",
        body: "Temperatures are monitored in real time by our team. Alerts are triggered before issues become critical.",
    },
    Blurb {
        icon: "📞",
        title: "3. Action",
        body: "If a problem is detected, we contact your HVAC or AC contractor immediately to prevent costly downtime.",
    },
];

pub const WHY_US: [Blurb; 3] = [
    Blurb {
        icon: "✔",
        title: "Peace of Mind",
        body: "Know your panels are safe 24/7 with continuous monitoring.",
    },
    Blurb {
        icon: "⚠",
        title: "Prevent Downtime",
        body: "Early alerts prevent costly equipment failures before they happen.",
    },
    Blurb {
        icon: "📍",
        title: "Local & Responsive",
        body: "Based in WNY, we understand your plant's specific needs.",
    },
];

pub const RISING_TEMPERATURES: &str = "Summers are getting hotter every year. Overheating panels are a leading cause of unexpected downtime in manufacturing plants. Even a small temperature spike can cause equipment failure or production stoppages. Thermonitor WNY provides real-time monitoring to catch problems before they become costly.";

pub const FEATURES: [Blurb; 4] = [
    Blurb {
        icon: "🔔",
        title: "Threshold Alerts",
        body: "Per-panel limits with high and medium severity, escalated to the right person.",
    },
    Blurb {
        icon: "📈",
        title: "Daily Trends",
        body: "See how each enclosure heats up through the shift and where it peaks.",
    },
    Blurb {
        icon: "🛠",
        title: "Contractor Coordination",
        body: "We call your HVAC or AC contractor with the readings they need.",
    },
    Blurb {
        icon: "📋",
        title: "Panel Inventory",
        body: "Every monitored panel with its location, last reading and status.",
    },
];

pub const PILOT_STEPS: [Blurb; 3] = [
    Blurb {
        icon: "1",
        title: "Walkthrough",
        body: "We tour the plant with you and pick the panels most at risk.",
    },
    Blurb {
        icon: "2",
        title: "Install",
        body: "Sensors go in during a normal shift. Nothing is powered down.",
    },
    Blurb {
        icon: "3",
        title: "30-Day Review",
        body: "After a month of monitoring we review the data together and decide next steps.",
    },
];

pub const PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "Pilot",
        price: "Free",
        blurb: "Try it on your hottest panels.",
        includes: &["Up to 3 panels", "30 days of monitoring", "Email alerts"],
        highlighted: false,
    },
    PricingTier {
        name: "Plant",
        price: "$149/mo",
        blurb: "Continuous coverage for a single site.",
        includes: &[
            "Up to 20 panels",
            "24/7 monitoring",
            "Phone and SMS escalation",
            "Contractor coordination",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        blurb: "Multiple plants and custom thresholds.",
        includes: &["Unlimited panels", "Dedicated contact", "Quarterly reports"],
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_highlighted_tier() {
        assert_eq!(PRICING.iter().filter(|t| t.highlighted).count(), 1);
        assert!(PRICING.iter().all(|t| !t.includes.is_empty()));
    }

    #[test]
    fn mailto_uses_contact_address() {
        assert_eq!(mailto(), "mailto:aaron@thermonitorwny.com");
    }
}
