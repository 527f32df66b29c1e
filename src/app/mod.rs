//! Root Dioxus component.
//!
//! [`App`] owns the [`ViewSelector`] as a signal; everything below it gets the
//! current [`View`] by value and reports triggers back through a handler.

pub mod pages;

use dioxus::prelude::*;

use crate::content::{FAVICON, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::ui::components::Layout;
use crate::view::{View, ViewSelector, ViewTrigger};
use pages::{Dashboard, Landing};

const STYLESHEET: &str = "/assets/site.css";

#[component]
pub fn App() -> Element {
    let mut selector = use_signal(ViewSelector::new);
    let view = selector.read().view();

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        document::Link { rel: "icon", href: FAVICON, r#type: "image/svg+xml" }
        document::Stylesheet { href: STYLESHEET }

        Page {
            view,
            on_trigger: move |trigger: ViewTrigger| {
                selector.write().apply(trigger);
            },
        }
    }
}

/// Renders the page for `view`. A pure function of its props.
///
/// Without `on_trigger` the page is static: trigger controls are left out and
/// the form is not wired.
#[component]
pub fn Page(view: View, on_trigger: Option<EventHandler<ViewTrigger>>) -> Element {
    rsx! {
        Layout { view, on_trigger,
            {match view {
                View::Landing => rsx! { Landing { on_trigger } },
                View::Dashboard => rsx! { Dashboard {} },
            }}
        }
    }
}

/// Server-side render of the page body for `view`.
///
/// The page is rendered static; see [`Page`].
#[cfg(any(feature = "server", test))]
pub fn prerender(view: View) -> String {
    let mut dom = VirtualDom::new_with_props(Page, PageProps { view, on_trigger: None });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ALERTS, PANELS};
    use crate::scroll::Section;

    fn anchor_attr(section: Section) -> String {
        format!(r#"id="{}""#, section.anchor())
    }

    #[test]
    fn landing_has_every_section() {
        let html = prerender(View::Landing);
        for section in Section::ALL {
            assert!(html.contains(&anchor_attr(section)), "missing {section:?}");
        }
        assert!(html.contains("mailto:aaron@thermonitorwny.com"));
        assert!(html.contains("Schedule Consultation"));
        assert!(html.contains(r#"placeholder="Message / Notes""#));
    }

    #[test]
    fn landing_hides_dashboard() {
        let html = prerender(View::Landing);
        assert!(!html.contains("panel-table"));
        assert!(!html.contains("alert-list"));
        assert!(!html.contains("Operations Dashboard"));
    }

    #[test]
    fn dashboard_shows_mock_data_verbatim() {
        let html = prerender(View::Dashboard);
        assert!(html.contains("panel-table"));
        assert_eq!(html.matches(r#"class="alert-item""#).count(), ALERTS.len());
        assert_eq!(html.matches("<tr>").count(), PANELS.len() + 1, "{html}");
        for alert in &ALERTS {
            assert!(html.contains(alert.message), "{}", alert.message);
            assert!(html.contains(alert.timestamp));
        }
        for row in &PANELS {
            assert!(html.contains(row.location));
            assert!(html.contains(row.last_seen));
        }
    }

    #[test]
    fn dashboard_hides_landing_sections() {
        let html = prerender(View::Dashboard);
        for section in Section::ALL {
            assert!(!html.contains(&anchor_attr(section)), "unexpected {section:?}");
        }
        assert!(!html.contains("contact-form"));
    }

    #[component]
    fn Wired(view: View) -> Element {
        rsx! {
            Page { view, on_trigger: move |trigger: ViewTrigger| tracing::debug!(?trigger) }
        }
    }

    fn render_wired(view: View) -> String {
        let mut dom = VirtualDom::new_with_props(Wired, WiredProps { view });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Markup from the tag carrying `trigger` up to the next `</span>` or
    /// `</form>`.
    fn control_for(html: &str, trigger: ViewTrigger) -> &str {
        let marker = format!(r#"data-trigger="{}""#, trigger.as_str());
        let at = html.find(&marker).unwrap_or_else(|| panic!("no {marker} in {html}"));
        let start = html[..at].rfind('<').unwrap();
        let rest = &html[start..];
        let end = ["</span>", "</form>"]
            .iter()
            .filter_map(|close| rest.find(close))
            .min()
            .unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn header_is_shared() {
        for view in [View::Landing, View::Dashboard] {
            let html = prerender(view);
            assert!(html.contains(&format!(r#"data-view="{}""#, view.as_str())));
            assert!(html.contains("How It Works"));
        }
    }

    #[test]
    fn static_render_has_no_trigger_controls() {
        for view in [View::Landing, View::Dashboard] {
            let html = prerender(view);
            assert!(!html.contains("data-trigger"), "{html}");
            assert!(!html.contains("View demo"));
            assert!(!html.contains("Sign in"));
        }
        // The form is still there, just not wired.
        assert!(prerender(View::Landing).contains("contact-form"));
    }

    #[test]
    fn each_control_is_tagged_with_its_trigger() {
        let html = render_wired(View::Landing);
        let sign_in = control_for(&html, ViewTrigger::SignIn);
        assert!(sign_in.starts_with("<span"), "{sign_in}");
        assert!(sign_in.contains("Sign in"));
        assert!(control_for(&html, ViewTrigger::ViewDemo).contains("View demo"));

        let form = control_for(&html, ViewTrigger::LeadSubmitted);
        assert!(form.starts_with("<form"), "{form}");
        assert!(form.contains("contact-form"));
        assert!(form.contains("Schedule Consultation"));

        assert_eq!(html.matches("data-trigger=").count(), 3, "{html}");
    }

    #[test]
    fn dashboard_keeps_header_actions() {
        let html = render_wired(View::Dashboard);
        assert!(control_for(&html, ViewTrigger::ViewDemo).contains("View demo"));
        assert!(!html.contains(r#"data-trigger="lead_submitted""#));
    }

    #[test]
    fn pricing_tiers_link_to_contact() {
        let html = render_wired(View::Landing);
        let start = html.find(r#"id="pricing""#).unwrap();
        let end = html.find(r#"id="contact""#).unwrap();
        let pricing = &html[start..end];
        assert_eq!(pricing.matches(r##"href="#contact""##).count(), 3, "{pricing}");
        assert!(!pricing.contains("data-trigger"));
    }
}
