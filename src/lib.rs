//! Thermonitor WNY marketing site.
//!
//! The crate renders a single page in two variants:
//! - a landing view with the marketing sections (hero, how it works,
//!   features, pricing, contact)
//! - a demo dashboard view filled with compile-time mock data
//!
//! The view is switched client-side by the [`view::ViewSelector`] owned by
//! [`app::App`]. Header navigation goes through the smooth-scroll navigator in
//! [`scroll`]. Nothing is fetched or persisted.

pub mod app;
pub mod chart;
pub mod content;
pub mod error;
pub mod mock;
pub mod scroll;
pub mod ui;
pub mod view;

#[cfg(feature = "server")]
pub mod config;

pub use error::{ConfigError, Error};
pub use view::{View, ViewSelector, ViewTrigger};
