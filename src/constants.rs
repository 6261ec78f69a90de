//! Application constants for the LOUPE TUI.
//!
//! Timing, layout and external link values used across the state and UI
//! layers live here so they stay consistent.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Interval of the main loop tick (redraw, toast countdown).
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Lifetime of a regular toast, in ticks.
pub const TOAST_TICKS: u8 = 20;

/// Lifetime of an error toast, in ticks.
pub const ERROR_TOAST_TICKS: u8 = 30;

/// Time between "I have paid" and the payment being confirmed.
pub const PAYMENT_CONFIRM_DELAY: Duration = Duration::from_secs(5);

/// Time the confirmed payment dialog stays open.
pub const PAYMENT_CLOSE_DELAY: Duration = Duration::from_secs(2);

// ============================================================================
// Layout
// ============================================================================

/// Height of the application header (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer: page tabs and key hints.
pub const FOOTER_HEIGHT: u16 = 2;

/// Height of the Home search bar, borders included.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

// ============================================================================
// Links
// ============================================================================

pub const SUPPORT_TELEGRAM_URL: &str = "https://t.me/loupe_support";

pub const SUPPORT_EMAIL_URL: &str = "mailto:support@loupe.app";

// ============================================================================
// Text
// ============================================================================

/// Shown on Home while no app feedback is stored.
pub const FEEDBACK_REMINDER: &str = "Leave feedback to continue counterparty checks";

/// Exchange rate label in the header.
pub const HEADER_RATE: &str = "USDT 85.64 ₽";
