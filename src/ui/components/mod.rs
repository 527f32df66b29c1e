//! Shared Dioxus components.
//!
//! Primitives carry explicit props records so every call site spells out
//! its variant instead of passing free-form class strings.

mod layout;
mod primitives;

pub use layout::{Layout, LayoutProps};
pub use primitives::{
    Badge, BadgeProps, BadgeTone, Button, ButtonKind, ButtonProps, ButtonSize, ButtonVariant,
    Card, CardProps,
};
