//! Deals tracked by the team, with their risk chip and review rules.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::Exchange;

/// Risk reasons that escalate a deal straight to [`RiskChip::Risk`].
static SEVERE_REASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)complaint|scam|fraud|жалоб|скам|мошен").unwrap_or_else(|_| unreachable!())
});

// ============================================================================
// Enums
// ============================================================================

/// Lifecycle status of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Active,
    Completed,
    Cancelled,
    Dispute,
}

impl DealStatus {
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Completed,
        Self::Cancelled,
        Self::Dispute,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Dispute => "Dispute",
        }
    }

    /// Whether a deal in this status accepts reviews.
    #[must_use]
    pub const fn is_reviewable(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Dispute)
    }
}

impl fmt::Display for DealStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side of the trade we are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealSide {
    Buy,
    Sell,
}

impl DealSide {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

/// Three-level risk badge shown next to a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskChip {
    Normal,
    Suspicious,
    Risk,
}

impl RiskChip {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Suspicious => "Suspicious",
            Self::Risk => "Risk",
        }
    }
}

// ============================================================================
// Deal
// ============================================================================

/// One step in a deal's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealEvent {
    /// `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    pub action: String,
}

/// A review left on a finished deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealReview {
    pub author: String,
    /// 1–5 stars.
    pub rating: u8,
    pub text: String,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub exchange: Exchange,
    pub counterparty: String,
    pub uid: String,
    pub amount: f64,
    pub currency: String,
    pub status: DealStatus,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub rate: f64,
    /// Fiat total in rubles.
    pub total: f64,
    pub side: DealSide,
    /// Team member who owns the deal, set in the team view.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub history: Vec<DealEvent>,
    #[serde(default)]
    pub reviews: Vec<DealReview>,
}

impl Deal {
    /// Classifies the deal's risk reasons into a chip.
    #[must_use]
    pub fn risk_chip(&self) -> RiskChip {
        if self.risks.is_empty() {
            RiskChip::Normal
        } else if self.risks.len() >= 2 || self.risks.iter().any(|r| SEVERE_REASON.is_match(r)) {
            RiskChip::Risk
        } else {
            RiskChip::Suspicious
        }
    }

    /// Short explanation shown with the chip.
    #[must_use]
    pub fn risk_reason(&self) -> &str {
        self.risks
            .first()
            .map_or("No negative signals", String::as_str)
    }

    #[must_use]
    pub const fn can_review(&self) -> bool {
        self.status.is_reviewable()
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Whose deals are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealScope {
    #[default]
    My,
    Team,
}

impl DealScope {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::My => "My deals",
            Self::Team => "Team deals",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::My => Self::Team,
            Self::Team => Self::My,
        }
    }
}

/// Status and exchange filters; `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealFilter {
    pub status: Option<DealStatus>,
    pub exchange: Option<Exchange>,
}

impl DealFilter {
    #[must_use]
    pub fn matches(&self, deal: &Deal) -> bool {
        self.status.is_none_or(|s| deal.status == s)
            && self.exchange.is_none_or(|e| deal.exchange == e)
    }

    /// Advances the status filter: all → active → … → dispute → all.
    pub fn cycle_status(&mut self) {
        self.status = cycle(&DealStatus::ALL, self.status);
    }

    /// Advances the exchange filter through every exchange and back to all.
    pub fn cycle_exchange(&mut self) {
        self.exchange = cycle(&Exchange::ALL, self.exchange);
    }
}

fn cycle<T: Copy + PartialEq>(values: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(value) => values
            .iter()
            .position(|v| *v == value)
            .and_then(|i| values.get(i + 1).copied()),
    }
}

/// Totals shown above the deal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealSummary {
    pub total: usize,
    pub active: usize,
}

impl DealSummary {
    #[must_use]
    pub fn of(deals: &[Deal]) -> Self {
        Self {
            total: deals.len(),
            active: deals
                .iter()
                .filter(|d| d.status == DealStatus::Active)
                .count(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DealMother;
    use rstest::rstest;

    #[rstest]
    #[case::none(&[], RiskChip::Normal)]
    #[case::single_soft(&["Low rating"], RiskChip::Suspicious)]
    #[case::two_soft(&["Low rating", "New account"], RiskChip::Risk)]
    #[case::complaints(&["Complaints from other teams"], RiskChip::Risk)]
    #[case::scam_lowercase(&["possible scam"], RiskChip::Risk)]
    #[case::russian(&["Есть жалобы"], RiskChip::Risk)]
    #[case::fraud_upper(&["FRAUD"], RiskChip::Risk)]
    fn test_risk_chip(#[case] risks: &[&str], #[case] expected: RiskChip) {
        let deal = DealMother::with_risks(risks);
        assert_eq!(deal.risk_chip(), expected);
    }

    #[test]
    fn test_risk_reason_defaults() {
        assert_eq!(DealMother::with_risks(&[]).risk_reason(), "No negative signals");
        assert_eq!(
            DealMother::with_risks(&["Confirmation delay", "Has complaints"]).risk_reason(),
            "Confirmation delay"
        );
    }

    #[rstest]
    #[case(DealStatus::Active, false)]
    #[case(DealStatus::Completed, true)]
    #[case(DealStatus::Cancelled, true)]
    #[case(DealStatus::Dispute, true)]
    fn test_can_review(#[case] status: DealStatus, #[case] expected: bool) {
        let deal = DealMother::with_status(status);
        assert_eq!(deal.can_review(), expected);
    }

    #[test]
    fn test_filter_matches_status_and_exchange() {
        let deal = DealMother::with_status(DealStatus::Completed);
        let mut filter = DealFilter::default();
        assert!(filter.matches(&deal));

        filter.status = Some(DealStatus::Completed);
        filter.exchange = Some(deal.exchange);
        assert!(filter.matches(&deal));

        filter.status = Some(DealStatus::Active);
        assert!(!filter.matches(&deal));
    }

    #[test]
    fn test_filter_cycles_back_to_all() {
        let mut filter = DealFilter::default();
        let mut seen = Vec::new();
        for _ in 0..=DealStatus::ALL.len() {
            filter.cycle_status();
            seen.push(filter.status);
        }
        assert_eq!(seen.first(), Some(&Some(DealStatus::Active)));
        assert_eq!(seen.last(), Some(&None));

        for _ in 0..Exchange::ALL.len() {
            filter.cycle_exchange();
        }
        assert_eq!(filter.exchange, Some(Exchange::Bitget));
        filter.cycle_exchange();
        assert_eq!(filter.exchange, None);
    }

    #[test]
    fn test_summary_counts_active() {
        let deals = vec![
            DealMother::with_status(DealStatus::Active),
            DealMother::with_status(DealStatus::Completed),
            DealMother::with_status(DealStatus::Active),
        ];
        assert_eq!(DealSummary::of(&deals), DealSummary { total: 3, active: 2 });
    }
}
