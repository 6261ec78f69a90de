//! Reusable UI components for the LOUPE TUI.
//!
//! Components are stateless: they take plain values and a palette and draw
//! them.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages
//! - [`tabs`] - One-row tab strip used by the Deals, Team and Statistics pages
//! - [`locked`] - Notice shown on pages the current plan does not open

pub mod locked;
pub mod tabs;
pub mod toast;

pub use locked::render_locked_notice;
pub use tabs::render_tabs;
pub use toast::render_toast;
