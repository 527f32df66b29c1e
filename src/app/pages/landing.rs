//! Marketing sections.

use dioxus::prelude::*;

use crate::content::{
    self, Blurb, PricingTier, CONTACT_EMAIL, FEATURES, HERO_IMAGE, HOW_IT_WORKS, PILOT_STEPS,
    PRICING, RISING_TEMPERATURES, WHY_US,
};
use crate::scroll::{self, Section};
use crate::ui::components::{Button, ButtonKind, ButtonSize, ButtonVariant, Card};
use crate::view::ViewTrigger;

/// Fired by the lead-capture form.
const SUBMIT_TRIGGER: ViewTrigger = ViewTrigger::LeadSubmitted;

#[component]
pub fn Landing(on_trigger: Option<EventHandler<ViewTrigger>>) -> Element {
    rsx! {
        Hero {}

        section { id: Section::HowItWorks.anchor(), class: "section section-light",
            h2 { "How It Works" }
            div { class: "grid grid-3",
                for step in HOW_IT_WORKS {
                    BlurbCard { key: "{step.title}", blurb: step }
                }
            }
        }

        section { id: Section::WhyUs.anchor(), class: "section section-brand",
            h2 { "Why Thermonitor WNY?" }
            div { class: "grid grid-3",
                for benefit in WHY_US {
                    div { key: "{benefit.title}", class: "benefit",
                        span { class: "icon", {benefit.icon} }
                        h3 { {benefit.title} }
                        p { {benefit.body} }
                    }
                }
            }
        }

        section { class: "section callout",
            span { class: "icon icon-xl", "☀" }
            div {
                h2 { "Rising Temperatures Put Your Panels at Risk" }
                p { {RISING_TEMPERATURES} }
            }
        }

        section { id: Section::Features.anchor(), class: "section section-light",
            h2 { "Features" }
            div { class: "grid grid-4",
                for feature in FEATURES {
                    BlurbCard { key: "{feature.title}", blurb: feature }
                }
            }
        }

        section { id: Section::How.anchor(), class: "section",
            h2 { "How a Pilot Works" }
            ol { class: "pilot-steps",
                for step in PILOT_STEPS {
                    li { key: "{step.title}",
                        span { class: "step-number", {step.icon} }
                        h3 { {step.title} }
                        p { {step.body} }
                    }
                }
            }
        }

        section { id: Section::Pricing.anchor(), class: "section section-light",
            h2 { "Pricing" }
            div { class: "grid grid-3",
                for tier in PRICING {
                    Tier { key: "{tier.name}", tier }
                }
            }
        }

        Contact { on_trigger }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section {
            id: Section::Home.anchor(),
            class: "hero",
            style: "background-image: url('{HERO_IMAGE}')",
            div { class: "hero-overlay" }
            div { class: "hero-content",
                h1 { "Prevent Costly Panel Failures" }
                p {
                    "Thermonitor WNY installs and monitors temperature sensors on your equipment, "
                    "alerting you before panels overheat, and coordinates with HVAC/AC contractors."
                }
                a {
                    href: Section::Contact.href(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll::smooth_scroll(Section::Contact.anchor());
                    },
                    Button {
                        variant: ButtonVariant::Destructive,
                        size: ButtonSize::Large,
                        "Schedule a Quick Consultation"
                    }
                }
            }
        }
    }
}

#[component]
fn BlurbCard(blurb: Blurb) -> Element {
    rsx! {
        Card { class: "blurb",
            span { class: "icon", {blurb.icon} }
            h3 { {blurb.title} }
            p { {blurb.body} }
        }
    }
}

#[component]
fn Tier(tier: PricingTier) -> Element {
    let variant = if tier.highlighted {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        Card { highlighted: tier.highlighted, class: "tier",
            h3 { {tier.name} }
            p { class: "price", {tier.price} }
            p { {tier.blurb} }
            ul {
                for item in tier.includes.iter().copied() {
                    li { key: "{item}", {item} }
                }
            }
            a {
                href: Section::Contact.href(),
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    scroll::smooth_scroll(Section::Contact.anchor());
                },
                Button { variant, "Request a pilot" }
            }
        }
    }
}

#[component]
fn Contact(on_trigger: Option<EventHandler<ViewTrigger>>) -> Element {
    rsx! {
        section { id: Section::Contact.anchor(), class: "section section-light contact",
            h2 { "Interested in a Pilot Installation?" }
            p { "Fill out the form below or email me directly to schedule a free consultation." }

            form {
                class: "contact-form",
                "data-trigger": on_trigger.map(|_| SUBMIT_TRIGGER.as_str()),
                onsubmit: move |evt: FormEvent| {
                    if let Some(handler) = on_trigger {
                        evt.prevent_default();
                        handler.call(SUBMIT_TRIGGER);
                    }
                },
                input { r#type: "text", name: "name", placeholder: "Name", required: true }
                input { r#type: "text", name: "company", placeholder: "Company" }
                input { r#type: "email", name: "email", placeholder: "Email", required: true }
                input { r#type: "tel", name: "phone", placeholder: "Phone" }
                textarea { name: "message", placeholder: "Message / Notes", rows: "4" }
                Button {
                    kind: ButtonKind::Submit,
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Large,
                    "Schedule Consultation"
                }
            }

            p { class: "mailto",
                "Or email: "
                a { href: content::mailto(), {CONTACT_EMAIL} }
            }
        }
    }
}
