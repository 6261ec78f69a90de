//! Counterparty profiles returned by directory lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Exchange;

// ============================================================================
// Risk Level
// ============================================================================

/// Risk level derived from a counterparty's reliability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps a 0–100 score to a risk level.
    ///
    /// Scores above 70 are low risk, above 30 medium, anything else high.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::Low
        } else if score > 30 {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Deal History
// ============================================================================

/// Outcome of a past deal reported by another team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealOutcome {
    Success,
    Cancelled,
    Dispute,
}

impl DealOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Cancelled => "Cancelled",
            Self::Dispute => "Dispute",
        }
    }
}

/// One entry of a counterparty's cross-team deal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Team that reported the deal.
    pub trader: String,
    pub outcome: DealOutcome,
    pub tag: String,
    pub comment: String,
    /// Date in `DD.MM.YYYY`.
    pub date: String,
}

// ============================================================================
// Counterparty Profile
// ============================================================================

/// Everything known about a counterparty across teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyProfile {
    pub uid: String,
    pub nickname: String,
    pub exchange: Exchange,
    /// Reliability score, 0–100.
    pub score: u8,
    pub deals_count: u32,
    pub complaints_count: u32,
    /// Human readable account age, e.g. "2 months".
    pub account_age: String,
    /// Phones in `+7XXXXXXXXXX` form.
    pub phones: Vec<String>,
    /// Cards as 16 bare digits.
    pub cards: Vec<String>,
    pub names: Vec<String>,
    pub banks: Vec<String>,
    /// Number of times other teams checked this counterparty.
    pub check_count: u32,
    pub deal_history: Vec<HistoryEntry>,
    pub tags: Vec<String>,
}

impl CounterpartyProfile {
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }

    /// Cards in display form, see [`mask_card`].
    #[must_use]
    pub fn masked_cards(&self) -> Vec<String> {
        self.cards.iter().map(|card| mask_card(card)).collect()
    }
}

/// Masks a card number as `1234 •••• •••• 3456`.
///
/// Inputs shorter than eight characters are returned unchanged.
#[must_use]
pub fn mask_card(card: &str) -> String {
    let chars: Vec<char> = card.chars().collect();
    if chars.len() < 8 {
        return card.to_string();
    }
    let first: String = chars[..4].iter().collect();
    let last: String = chars[chars.len() - 4..].iter().collect();
    format!("{first} •••• •••• {last}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::top(100, RiskLevel::Low)]
    #[case::low_boundary(71, RiskLevel::Low)]
    #[case::seventy(70, RiskLevel::Medium)]
    #[case::medium_boundary(31, RiskLevel::Medium)]
    #[case::thirty(30, RiskLevel::High)]
    #[case::zero(0, RiskLevel::High)]
    fn test_risk_level_from_score(#[case] score: u8, #[case] expected: RiskLevel) {
        assert_eq!(RiskLevel::from_score(score), expected);
    }

    #[rstest]
    #[case::sixteen("1234567890123456", "1234 •••• •••• 3456")]
    #[case::short("1234", "1234")]
    #[case::eight("12345678", "1234 •••• •••• 5678")]
    fn test_mask_card(#[case] card: &str, #[case] expected: &str) {
        assert_eq!(mask_card(card), expected);
    }
}
