//! Application data: deals, team, statistics, plan and lookup results.
//!
//! `DataState` only holds values. Loading from and saving to the
//! key-value store is done by the `App`.

use std::collections::BTreeMap;

use crate::client::LoupeClient;
use crate::domain::{
    ActivityItem, Capabilities, CounterpartyProfile, Deal, DealFilter, DealReview, DealScope,
    DealSummary, Feedback, LoupeError, MemberPerformance, Plan, StatsSummary, TeamState,
};
use crate::search::ParsedSearch;

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // === Deals ===
    pub my_deals: Vec<Deal>,
    pub team_deals: Vec<Deal>,
    /// Reviews we left, keyed by deal id.
    pub deal_reviews: BTreeMap<String, Vec<DealReview>>,

    // === Team ===
    pub team: TeamState,
    pub invite_code: Option<String>,

    // === Statistics ===
    pub my_stats: StatsSummary,
    pub team_stats: StatsSummary,
    pub performance: Vec<MemberPerformance>,
    pub activity: Vec<ActivityItem>,

    // === Account ===
    pub plan: Plan,
    pub feedback: Option<Feedback>,
    /// Counterparty lookups performed so far.
    pub checks: u32,

    // === Lookup ===
    pub last_query: Option<ParsedSearch>,
    pub results: Vec<CounterpartyProfile>,
}

impl DataState {
    /// Seeds the state from the client's directory.
    #[must_use]
    pub fn from_client(client: &LoupeClient, team_name: &str) -> Self {
        Self {
            my_deals: client.my_deals(),
            team_deals: client.team_deals(),
            team: TeamState {
                name: team_name.to_string(),
                members: client.team_members(),
                messages: client.default_messages(),
                notes: client.default_notes(),
            },
            my_stats: client.my_stats(),
            team_stats: client.team_stats(),
            performance: client.team_performance(),
            activity: client.team_activity(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.plan.capabilities()
    }

    // ========================================================================
    // Deals
    // ========================================================================

    fn deals_in_scope(&self, scope: DealScope) -> &[Deal] {
        match scope {
            DealScope::My => &self.my_deals,
            DealScope::Team => &self.team_deals,
        }
    }

    fn with_local_reviews(&self, deal: &Deal) -> Deal {
        let mut deal = deal.clone();
        if let Some(reviews) = self.deal_reviews.get(&deal.id) {
            deal.reviews.extend(reviews.iter().cloned());
        }
        deal
    }

    /// Deals of `scope` passing `filter`, with our stored reviews merged in.
    #[must_use]
    pub fn visible_deals(&self, scope: DealScope, filter: &DealFilter) -> Vec<Deal> {
        self.deals_in_scope(scope)
            .iter()
            .filter(|d| filter.matches(d))
            .map(|d| self.with_local_reviews(d))
            .collect()
    }

    /// Totals for the header of the deal list, ignoring filters.
    #[must_use]
    pub fn deal_summary(&self, scope: DealScope) -> DealSummary {
        DealSummary::of(self.deals_in_scope(scope))
    }

    #[must_use]
    pub fn find_deal(&self, id: &str) -> Option<Deal> {
        self.my_deals
            .iter()
            .chain(self.team_deals.iter())
            .find(|d| d.id == id)
            .map(|d| self.with_local_reviews(d))
    }

    /// Records a review on a finished deal.
    ///
    /// # Errors
    ///
    /// Fails when the deal does not exist, is still active, the rating is
    /// outside 1–5 or the text is blank.
    pub fn add_deal_review(
        &mut self,
        deal_id: &str,
        author: &str,
        rating: u8,
        text: &str,
    ) -> Result<(), LoupeError> {
        let deal = self
            .find_deal(deal_id)
            .ok_or_else(|| LoupeError::not_found("deal", deal_id))?;
        if !deal.can_review() {
            return Err(LoupeError::forbidden("active deals cannot be reviewed"));
        }
        if !(1..=5).contains(&rating) {
            return Err(LoupeError::invalid_input("rating must be between 1 and 5"));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(LoupeError::invalid_input("Review text cannot be empty"));
        }
        self.deal_reviews
            .entry(deal_id.to_string())
            .or_default()
            .push(DealReview {
                author: author.to_string(),
                rating,
                text: text.to_string(),
            });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DealStatus, Exchange};

    fn data() -> DataState {
        DataState::from_client(&LoupeClient::new(), "Arbitrage")
    }

    #[test]
    fn test_from_client_seeds_everything() {
        let data = data();
        assert_eq!(data.my_deals.len(), 5);
        assert_eq!(data.team.name, "Arbitrage");
        assert_eq!(data.team.members.len(), 3);
        assert_eq!(data.plan, Plan::Free);
        assert!(data.feedback.is_none());
    }

    #[test]
    fn test_visible_deals_apply_filter() {
        let data = data();
        let filter = DealFilter {
            status: Some(DealStatus::Completed),
            exchange: Some(Exchange::Bybit),
        };
        let deals = data.visible_deals(DealScope::My, &filter);
        assert_eq!(deals.len(), 2);
        assert!(deals.iter().all(|d| d.status == DealStatus::Completed));

        let team = data.visible_deals(DealScope::Team, &DealFilter::default());
        assert_eq!(team.len(), 7);
    }

    #[test]
    fn test_summary_counts_scope() {
        let data = data();
        assert_eq!(
            data.deal_summary(DealScope::My),
            DealSummary { total: 5, active: 1 }
        );
        assert_eq!(
            data.deal_summary(DealScope::Team),
            DealSummary { total: 7, active: 2 }
        );
    }

    #[test]
    fn test_add_deal_review_merges_into_deal() {
        let mut data = data();
        data.add_deal_review("3", "@me", 2, "  slow appeal  ").unwrap();

        let deal = data.find_deal("3").unwrap();
        let review = deal.reviews.last().unwrap();
        assert_eq!(review.text, "slow appeal");
        assert_eq!(review.rating, 2);
    }

    #[test]
    fn test_add_deal_review_rejections() {
        let mut data = data();
        assert!(matches!(
            data.add_deal_review("1", "@me", 5, "ok"),
            Err(LoupeError::Forbidden(_))
        ));
        assert!(matches!(
            data.add_deal_review("2", "@me", 0, "ok"),
            Err(LoupeError::InvalidInput(_))
        ));
        assert!(matches!(
            data.add_deal_review("2", "@me", 4, "   "),
            Err(LoupeError::InvalidInput(_))
        ));
        assert!(matches!(
            data.add_deal_review("nope", "@me", 4, "ok"),
            Err(LoupeError::NotFound { .. })
        ));
        assert!(data.deal_reviews.is_empty());
    }
}
