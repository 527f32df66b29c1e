#![allow(non_snake_case)]

use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::content::{BRAND, TAGLINE};
use crate::scroll::{self, Section};
use crate::view::{View, ViewTrigger};

/// Header navigation, in display order.
const NAV: [(Section, &str); 4] = [
    (Section::HowItWorks, "How It Works"),
    (Section::WhyUs, "Why Us"),
    (Section::Pricing, "Pricing"),
    (Section::Contact, "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub view: View,
    /// Absent in the static prerender, where no trigger controls render.
    pub on_trigger: Option<EventHandler<ViewTrigger>>,
    pub children: Element,
}

/// Header actions, in display order.
const ACTIONS: [(ViewTrigger, ButtonVariant, &str); 2] = [
    (ViewTrigger::SignIn, ButtonVariant::Ghost, "Sign in"),
    (ViewTrigger::ViewDemo, ButtonVariant::Outline, "View demo"),
];

/// Sticky header, main slot and footer shared by both views.
pub fn Layout(props: LayoutProps) -> Element {
    let on_trigger = props.on_trigger;
    let year = Utc::now().year();

    rsx! {
        header { class: "site-header", "data-view": props.view.as_str(),
            div { class: "site-header-inner",
                a {
                    class: "brand",
                    href: Section::Home.href(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll::smooth_scroll(Section::Home.anchor());
                    },
                    {BRAND}
                }
                nav { class: "site-nav",
                    for (section, label) in NAV {
                        NavLink { key: "{label}", section, label }
                    }
                }
                {on_trigger.map(|on_trigger| rsx! {
                    div { class: "site-actions",
                        for (trigger, variant, label) in ACTIONS {
                            TriggerButton { key: "{label}", trigger, variant, label, on_trigger }
                        }
                    }
                })}
            }
        }

        main { class: "site-main", {props.children} }

        footer { class: "site-footer",
            p { "{BRAND} – {TAGLINE}" }
            p { class: "copyright", "© {year} {BRAND}" }
        }
    }
}

#[component]
fn TriggerButton(
    trigger: ViewTrigger,
    variant: ButtonVariant,
    label: &'static str,
    on_trigger: EventHandler<ViewTrigger>,
) -> Element {
    rsx! {
        span { class: "trigger", "data-trigger": trigger.as_str(),
            Button { variant, onclick: move |_| on_trigger.call(trigger), {label} }
        }
    }
}

#[component]
fn NavLink(section: Section, label: &'static str) -> Element {
    rsx! {
        a {
            href: section.href(),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll::smooth_scroll(section.anchor());
            },
            {label}
        }
    }
}
