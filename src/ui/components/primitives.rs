#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::mock::{PanelStatus, Severity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Destructive,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Regular,
    Large,
}

/// The `type` attribute of the rendered `<button>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
}

impl ButtonKind {
    fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub kind: ButtonKind,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

pub(crate) fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Destructive => "btn-destructive",
        ButtonVariant::Outline => "btn-outline",
        ButtonVariant::Ghost => "btn-ghost",
    };
    match size {
        ButtonSize::Regular => format!("btn {variant}"),
        ButtonSize::Large => format!("btn {variant} btn-lg"),
    }
}

pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.size);
    let onclick = props.onclick;

    rsx! {
        button {
            class,
            r#type: props.kind.as_str(),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Emphasised border, used for the recommended pricing tier.
    #[props(default)]
    pub highlighted: bool,
    #[props(into, default)]
    pub class: String,
    pub children: Element,
}

pub fn Card(props: CardProps) -> Element {
    let mut class = String::from("card");
    if props.highlighted {
        class.push_str(" card-highlighted");
    }
    if !props.class.is_empty() {
        class.push(' ');
        class.push_str(&props.class);
    }

    rsx! {
        div { class, {props.children} }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Danger => "badge badge-danger",
            BadgeTone::Neutral => "badge",
        }
    }
}

impl From<Severity> for BadgeTone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::High => BadgeTone::Danger,
            Severity::Medium => BadgeTone::Warning,
        }
    }
}

impl From<PanelStatus> for BadgeTone {
    fn from(status: PanelStatus) -> Self {
        match status {
            PanelStatus::Ok => BadgeTone::Success,
            PanelStatus::Warning => BadgeTone::Warning,
            PanelStatus::Hot => BadgeTone::Danger,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    pub tone: BadgeTone,
    pub label: &'static str,
}

pub fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span { class: props.tone.class(), {props.label} }
    }
}
