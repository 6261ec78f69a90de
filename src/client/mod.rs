//! Data source for counterparties, deals, team and statistics.
//!
//! LOUPE has no backend yet: [`LoupeClient`] serves a built-in directory
//! with the same async surface a remote API would have, so the UI already
//! dispatches lookups off the event loop.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::LoupeClient;
//! use crate::search::classify;
//!
//! let client = LoupeClient::new();
//! let profiles = client.lookup(&classify("132465789")).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ActivityItem, ChatMessage, CounterpartyProfile, Deal, LoupeError, MemberPerformance,
    StatsSummary, TeamMember, TeamNote,
};

mod directory;
mod lookup;

#[cfg(test)]
mod tests;

pub use lookup::search_hint;

/// Simulated round-trip of a directory lookup.
const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

// ============================================================================
// LOUPE Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct LoupeClient {
    profiles: Arc<Vec<CounterpartyProfile>>,
    latency: Duration,
}

impl Default for LoupeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LoupeClient {
    /// Creates a client over the built-in directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(directory::profiles()),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Overrides the simulated lookup latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    // ========================================================================
    // Deals
    // ========================================================================

    /// Our own deals, newest first.
    #[must_use]
    pub fn my_deals(&self) -> Vec<Deal> {
        directory::my_deals()
    }

    /// Deals of the whole team, each with its owner.
    #[must_use]
    pub fn team_deals(&self) -> Vec<Deal> {
        directory::team_deals()
    }

    // ========================================================================
    // Team
    // ========================================================================

    #[must_use]
    pub fn team_members(&self) -> Vec<TeamMember> {
        directory::members()
    }

    /// Chat history used when nothing is stored locally.
    #[must_use]
    pub fn default_messages(&self) -> Vec<ChatMessage> {
        directory::messages()
    }

    /// Notes used when nothing is stored locally.
    #[must_use]
    pub fn default_notes(&self) -> Vec<TeamNote> {
        directory::notes()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    #[must_use]
    pub fn my_stats(&self) -> StatsSummary {
        directory::my_stats()
    }

    #[must_use]
    pub fn team_stats(&self) -> StatsSummary {
        directory::team_stats()
    }

    #[must_use]
    pub fn team_performance(&self) -> Vec<MemberPerformance> {
        directory::performance()
    }

    #[must_use]
    pub fn team_activity(&self) -> Vec<ActivityItem> {
        directory::activity()
    }

    /// Looks up a counterparty by deal uid.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::NotFound` when no profile has that uid.
    pub fn profile_by_uid(&self, uid: &str) -> Result<CounterpartyProfile, LoupeError> {
        self.profiles
            .iter()
            .find(|p| p.uid == uid)
            .cloned()
            .ok_or_else(|| LoupeError::not_found("counterparty", uid))
    }
}
