//! Top-level view selection.
//!
//! The page has exactly two variants. The selector starts on the landing view
//! and only ever moves forward to the dashboard; there is no way back short of
//! reloading the page.

use serde::Serialize;

/// Which page variant is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Dashboard,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Dashboard => "dashboard",
        }
    }
}

/// UI actions that reveal the demo dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTrigger {
    /// Header "View demo" button.
    ViewDemo,
    /// Header "Sign in" button.
    SignIn,
    /// Lead-capture form submitted.
    LeadSubmitted,
}

impl ViewTrigger {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewTrigger::ViewDemo => "view_demo",
            ViewTrigger::SignIn => "sign_in",
            ViewTrigger::LeadSubmitted => "lead_submitted",
        }
    }
}

/// Owns the current [`View`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    view: View,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Apply a trigger and return the resulting view.
    ///
    /// Every trigger lands on [`View::Dashboard`]; repeated triggers are no-ops.
    pub fn apply(&mut self, trigger: ViewTrigger) -> View {
        let next = match trigger {
            ViewTrigger::ViewDemo | ViewTrigger::SignIn | ViewTrigger::LeadSubmitted => {
                View::Dashboard
            }
        };

        if next != self.view {
            tracing::info!(
                from = self.view.as_str(),
                to = next.as_str(),
                ?trigger,
                "view changed"
            );
            self.view = next;
        } else {
            tracing::debug!(view = self.view.as_str(), ?trigger, "view unchanged");
        }

        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing() {
        assert_eq!(ViewSelector::new().view(), View::Landing);
        assert_eq!(View::default(), View::Landing);
    }

    #[test]
    fn every_trigger_reveals_dashboard() {
        for trigger in [
            ViewTrigger::ViewDemo,
            ViewTrigger::SignIn,
            ViewTrigger::LeadSubmitted,
        ] {
            let mut selector = ViewSelector::new();
            assert_eq!(selector.apply(trigger), View::Dashboard);
            assert_eq!(selector.view(), View::Dashboard);
        }
    }

    #[test]
    fn dashboard_is_sticky() {
        let mut selector = ViewSelector::new();
        selector.apply(ViewTrigger::SignIn);
        selector.apply(ViewTrigger::ViewDemo);
        selector.apply(ViewTrigger::LeadSubmitted);
        assert_eq!(selector.view(), View::Dashboard);
    }

    #[test]
    fn view_names() {
        assert_eq!(View::Landing.as_str(), "landing");
        assert_eq!(View::Dashboard.as_str(), "dashboard");
        assert_eq!(ViewTrigger::SignIn.as_str(), "sign_in");
        assert_eq!(ViewTrigger::LeadSubmitted.as_str(), "lead_submitted");
    }
}
