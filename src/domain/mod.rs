//! Domain types for LOUPE.
//!
//! Plain data shared by the client, the store and the UI. Nothing here
//! performs I/O.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for domain operations
//! - [`exchange`] - Supported P2P exchanges
//! - [`counterparty`] - Counterparty profiles and risk levels
//! - [`deal`] - Deals, risk chips, filters
//! - [`team`] - Roster, chat, notes, invite codes
//! - [`subscription`] - Plans, capabilities, payment flow
//! - [`stats`] - Statistics summaries and charts
//! - [`feedback`] - App feedback

// ============================================================================
// Module Declarations
// ============================================================================

pub mod counterparty;
pub mod deal;
pub mod error;
pub mod exchange;
pub mod feedback;
pub mod stats;
pub mod subscription;
pub mod team;

// ============================================================================
// Re-exports
// ============================================================================

pub use counterparty::{CounterpartyProfile, DealOutcome, HistoryEntry, RiskLevel};
pub use deal::{
    Deal, DealEvent, DealFilter, DealReview, DealScope, DealSide, DealStatus, DealSummary,
    RiskChip,
};
pub use error::LoupeError;
pub use exchange::Exchange;
pub use feedback::{FEEDBACK_TAGS, Feedback};
pub use stats::{
    ActivityItem, ChartPoint, MemberPerformance, StatsRange, StatsSummary, StatsTab, team_points,
};
pub use subscription::{Capabilities, PaymentNetwork, PaymentStatus, Plan};
pub use team::{
    ChatMessage, MemberRole, Presence, TeamMember, TeamNote, TeamState, invite_code,
};
