//! Navigation state: the active page, per-page tabs and list selections.
//!
//! Selections are plain indices; they are clamped against the current data
//! by [`NavigationState::clamp`] whenever the lists change.

use serde::{Deserialize, Serialize};

use crate::domain::{Capabilities, DealFilter, DealScope, StatsRange, StatsTab};

// ============================================================================
// Page
// ============================================================================

/// Top-level pages, in footer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Deals,
    Team,
    Statistics,
    Settings,
}

impl Page {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Deals,
        Self::Team,
        Self::Statistics,
        Self::Settings,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Deals => "Deals",
            Self::Team => "Team",
            Self::Statistics => "Statistics",
            Self::Settings => "Settings",
        }
    }

    /// Position in the footer, starting at 0.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Deals => 1,
            Self::Team => 2,
            Self::Statistics => 3,
            Self::Settings => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether `caps` grant access to this page.
    #[must_use]
    pub const fn is_unlocked(self, caps: &Capabilities) -> bool {
        match self {
            Self::Home | Self::Settings => true,
            Self::Deals => caps.can_use_deals,
            Self::Team => caps.can_use_team,
            Self::Statistics => caps.can_use_stats,
        }
    }

    /// Cheapest plan that unlocks this page.
    #[must_use]
    pub const fn required_plan(self) -> &'static str {
        match self {
            Self::Home | Self::Settings => "Free",
            Self::Deals | Self::Statistics => "Light",
            Self::Team => "Basic",
        }
    }
}

// ============================================================================
// Team Tab
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamTab {
    #[default]
    Members,
    Chat,
    Notes,
}

impl TeamTab {
    pub const ALL: [Self; 3] = [Self::Members, Self::Chat, Self::Notes];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::Chat => "Chat",
            Self::Notes => "Notes",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Members => Self::Chat,
            Self::Chat => Self::Notes,
            Self::Notes => Self::Members,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Members => Self::Notes,
            Self::Chat => Self::Members,
            Self::Notes => Self::Chat,
        }
    }
}

// ============================================================================
// Navigation State
// ============================================================================

/// Lengths of every selectable list, used for clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListLengths {
    pub results: usize,
    pub deals: usize,
    pub members: usize,
    pub messages: usize,
    pub notes: usize,
    pub performers: usize,
    pub plans: usize,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub page: Page,

    // === Home ===
    pub selected_result: usize,

    // === Deals ===
    pub deal_scope: DealScope,
    pub deal_filter: DealFilter,
    pub selected_deal: usize,

    // === Team ===
    pub team_tab: TeamTab,
    pub selected_member: usize,
    pub selected_message: usize,
    pub selected_note: usize,

    // === Statistics ===
    pub stats_tab: StatsTab,
    pub stats_range: StatsRange,
    pub selected_performer: usize,

    // === Settings ===
    pub selected_plan: usize,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `page`, keeping per-page selections.
    pub fn go_to(&mut self, page: Page) {
        self.page = page;
    }

    /// Index of the selection the arrow keys move on the current page.
    fn current_selection_mut(&mut self) -> &mut usize {
        match self.page {
            Page::Home => &mut self.selected_result,
            Page::Deals => &mut self.selected_deal,
            Page::Team => match self.team_tab {
                TeamTab::Members => &mut self.selected_member,
                TeamTab::Chat => &mut self.selected_message,
                TeamTab::Notes => &mut self.selected_note,
            },
            Page::Statistics => &mut self.selected_performer,
            Page::Settings => &mut self.selected_plan,
        }
    }

    pub fn move_up(&mut self) {
        let index = self.current_selection_mut();
        *index = index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        let index = self.current_selection_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Keeps every selection inside its list.
    pub fn clamp(&mut self, lengths: ListLengths) {
        let clamp = |index: &mut usize, len: usize| {
            *index = (*index).min(len.saturating_sub(1));
        };
        clamp(&mut self.selected_result, lengths.results);
        clamp(&mut self.selected_deal, lengths.deals);
        clamp(&mut self.selected_member, lengths.members);
        clamp(&mut self.selected_message, lengths.messages);
        clamp(&mut self.selected_note, lengths.notes);
        clamp(&mut self.selected_performer, lengths.performers);
        clamp(&mut self.selected_plan, lengths.plans);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use rstest::rstest;

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Home.next(), Page::Deals);
        assert_eq!(Page::Settings.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Settings);
        for page in Page::ALL {
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(5), None);
    }

    #[rstest]
    #[case::free(Plan::Free, &[Page::Home, Page::Settings])]
    #[case::light(Plan::Light, &[Page::Home, Page::Deals, Page::Statistics, Page::Settings])]
    #[case::basic(Plan::Basic, &Page::ALL)]
    #[case::pro(Plan::Pro, &Page::ALL)]
    fn test_unlocked_pages(#[case] plan: Plan, #[case] expected: &[Page]) {
        let caps = plan.capabilities();
        let unlocked: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| p.is_unlocked(&caps))
            .collect();
        assert_eq!(unlocked, expected);
    }

    #[test]
    fn test_team_tab_cycle() {
        assert_eq!(TeamTab::Members.next(), TeamTab::Chat);
        assert_eq!(TeamTab::Notes.next(), TeamTab::Members);
        assert_eq!(TeamTab::Members.prev(), TeamTab::Notes);
    }

    #[test]
    fn test_selection_follows_page_and_tab() {
        let mut nav = NavigationState::new();
        nav.go_to(Page::Team);
        nav.team_tab = TeamTab::Chat;
        nav.move_down(3);
        nav.move_down(3);
        nav.move_down(3);
        assert_eq!(nav.selected_message, 2);
        assert_eq!(nav.selected_member, 0);

        nav.move_up();
        assert_eq!(nav.selected_message, 1);
    }

    #[test]
    fn test_clamp() {
        let mut nav = NavigationState {
            selected_deal: 9,
            selected_note: 4,
            ..NavigationState::default()
        };
        nav.clamp(ListLengths {
            deals: 3,
            notes: 0,
            ..ListLengths::default()
        });
        assert_eq!(nav.selected_deal, 2);
        assert_eq!(nav.selected_note, 0);
    }
}
