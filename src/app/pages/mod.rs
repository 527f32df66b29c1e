//! Page components for the two views.
//!
//! Pages receive the view trigger as an event handler and never own state.

mod dashboard;
mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
