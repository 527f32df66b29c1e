//! Smooth-scroll navigation to page sections.
//!
//! The sticky header only takes up space at wider breakpoints, so the scroll
//! target is pulled up by the header height there and left alone on narrow
//! screens.

use serde::Serialize;

/// Viewports narrower than this have no sticky header.
pub const COMPACT_BREAKPOINT_PX: f64 = 640.0;

/// Height of the sticky header at wide breakpoints.
pub const STICKY_HEADER_PX: f64 = 70.0;

/// Anchor ids of the page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Home,
    HowItWorks,
    WhyUs,
    Features,
    How,
    Pricing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::HowItWorks,
        Section::WhyUs,
        Section::Features,
        Section::How,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::HowItWorks => "how-it-works",
            Section::WhyUs => "why-us",
            Section::Features => "features",
            Section::How => "how",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    /// `#anchor`, for use as a link target.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Layout geometry the navigator reads, plus the one side effect it issues.
pub trait Viewport {
    /// Viewport width in logical pixels.
    fn width(&self) -> f64;

    /// Document-relative top of the element with this id, if present.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Start an animated scroll to `top`.
    fn smooth_scroll_to(&self, top: f64);
}

/// Vertical correction for the sticky header.
pub fn header_offset(viewport_width: f64) -> f64 {
    if viewport_width < COMPACT_BREAKPOINT_PX {
        0.0
    } else {
        -STICKY_HEADER_PX
    }
}

pub fn scroll_target(element_top: f64, viewport_width: f64) -> f64 {
    element_top + header_offset(viewport_width)
}

/// Scroll to the section with id `id`.
///
/// Returns the position scrolled to, or `None` when no such element exists,
/// in which case nothing happens.
pub fn scroll_to_section<V: Viewport + ?Sized>(viewport: &V, id: &str) -> Option<f64> {
    let Some(top) = viewport.element_top(id) else {
        tracing::debug!(id, "scroll target not found");
        return None;
    };

    let target = scroll_target(top, viewport.width());
    tracing::trace!(id, top, target, "smooth scroll");
    viewport.smooth_scroll_to(target);
    Some(target)
}

/// Scroll the live document, if there is one.
///
/// Outside the browser build this only logs.
pub fn smooth_scroll(id: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(viewport) = browser::BrowserViewport::current() {
            scroll_to_section(&viewport, id);
        }
    }

    #[cfg(not(feature = "web"))]
    tracing::trace!(id, "no browser viewport, scroll skipped");
}

#[cfg(feature = "web")]
pub mod browser {
    //! [`Viewport`] backed by `web-sys`.

    use super::Viewport;
    use web_sys::{ScrollBehavior, ScrollToOptions, Window};

    pub struct BrowserViewport {
        window: Window,
    }

    impl BrowserViewport {
        pub fn current() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }
    }

    impl Viewport for BrowserViewport {
        fn width(&self) -> f64 {
            self.window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or_default()
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            let element = self.window.document()?.get_element_by_id(id)?;
            let scroll_y = self.window.scroll_y().unwrap_or_default();
            Some(element.get_bounding_client_rect().top() + scroll_y)
        }

        fn smooth_scroll_to(&self, top: f64) {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            self.window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct RecordingViewport {
        width: f64,
        tops: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl RecordingViewport {
        fn new(width: f64) -> Self {
            let tops = HashMap::from([("pricing", 2400.0), ("contact", 3100.0)]);
            Self {
                width,
                tops,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn width(&self) -> f64 {
            self.width
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn wide_viewport_compensates_for_header() {
        let viewport = RecordingViewport::new(1280.0);
        assert_eq!(scroll_to_section(&viewport, "pricing"), Some(2330.0));
        assert_eq!(*viewport.scrolls.borrow(), vec![2330.0]);
    }

    #[test]
    fn breakpoint_width_counts_as_wide() {
        let viewport = RecordingViewport::new(640.0);
        assert_eq!(scroll_to_section(&viewport, "contact"), Some(3030.0));
    }

    #[test]
    fn narrow_viewport_scrolls_to_element_top() {
        let viewport = RecordingViewport::new(639.0);
        assert_eq!(scroll_to_section(&viewport, "contact"), Some(3100.0));
        assert_eq!(*viewport.scrolls.borrow(), vec![3100.0]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let viewport = RecordingViewport::new(1024.0);
        assert_eq!(scroll_to_section(&viewport, "nope"), None);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn offsets() {
        assert_eq!(header_offset(320.0), 0.0);
        assert_eq!(header_offset(1920.0), -STICKY_HEADER_PX);
        assert_eq!(scroll_target(100.0, 800.0), 30.0);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
        assert_eq!(Section::HowItWorks.href(), "#how-it-works");
    }
}
