//! Popup state types for the LOUPE TUI.
//!
//! Every modal owns its own draft data, so closing a popup discards what
//! was typed into it.

use crate::domain::{
    CounterpartyProfile, FEEDBACK_TAGS, Feedback, LoupeError, MemberPerformance, PaymentNetwork,
    PaymentStatus, Plan, StatsRange,
};
use crate::domain::feedback::MAX_RATING;
use crate::search::ParsedSearch;

// ============================================================================
// Confirmations
// ============================================================================

/// A destructive action waiting for `y`/Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveMember { id: String, username: String },
    DeleteMessage(u64),
    DeleteNote(u64),
    CancelSubscription,
}

impl ConfirmAction {
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::RemoveMember { username, .. } => format!("Remove {username} from the team?"),
            Self::DeleteMessage(_) => "Delete this message?".to_string(),
            Self::DeleteNote(_) => "Delete this note?".to_string(),
            Self::CancelSubscription => {
                "Cancel the subscription? The plan returns to Free.".to_string()
            }
        }
    }
}

// ============================================================================
// Feedback Form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackField {
    #[default]
    Rating,
    Tags,
    Text,
}

impl FeedbackField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Rating => Self::Tags,
            Self::Tags => Self::Text,
            Self::Text => Self::Rating,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Rating => Self::Text,
            Self::Tags => Self::Rating,
            Self::Text => Self::Tags,
        }
    }
}

/// Draft of the app feedback dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackForm {
    pub rating: u8,
    /// One flag per entry of [`FEEDBACK_TAGS`].
    pub selected_tags: [bool; FEEDBACK_TAGS.len()],
    pub tag_cursor: usize,
    pub text: String,
    pub field: FeedbackField,
    /// Validation message from the last submit.
    pub warning: Option<String>,
    /// Lookup held back until feedback is left.
    pub pending_query: Option<ParsedSearch>,
}

impl FeedbackForm {
    #[must_use]
    pub fn new(pending_query: Option<ParsedSearch>) -> Self {
        Self {
            pending_query,
            ..Self::default()
        }
    }

    /// Left/Right: stars on the rating row, cursor on the tags row.
    pub fn move_left(&mut self) {
        match self.field {
            FeedbackField::Rating => self.rating = self.rating.saturating_sub(1),
            FeedbackField::Tags => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            FeedbackField::Text => {}
        }
    }

    pub fn move_right(&mut self) {
        match self.field {
            FeedbackField::Rating => self.rating = (self.rating + 1).min(MAX_RATING),
            FeedbackField::Tags => {
                self.tag_cursor = (self.tag_cursor + 1).min(FEEDBACK_TAGS.len() - 1);
            }
            FeedbackField::Text => {}
        }
    }

    /// Space toggles the tag under the cursor; everything else types.
    pub fn type_char(&mut self, c: char) {
        match self.field {
            FeedbackField::Text => self.text.push(c),
            FeedbackField::Tags if c == ' ' => {
                if let Some(flag) = self.selected_tags.get_mut(self.tag_cursor) {
                    *flag = !*flag;
                }
            }
            FeedbackField::Rating => {
                if let Some(digit) = c.to_digit(10)
                    && digit <= u32::from(MAX_RATING)
                {
                    self.rating = u8::try_from(digit).unwrap_or(MAX_RATING);
                }
            }
            FeedbackField::Tags => {}
        }
        self.warning = None;
    }

    pub fn backspace(&mut self) {
        if self.field == FeedbackField::Text {
            self.text.pop();
        }
    }

    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        FEEDBACK_TAGS
            .iter()
            .zip(self.selected_tags)
            .filter(|(_, on)| *on)
            .map(|(tag, _)| (*tag).to_string())
            .collect()
    }

    /// Validates the draft.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::InvalidInput` when the text is blank.
    pub fn to_feedback(&self) -> Result<Feedback, LoupeError> {
        Feedback::new(self.rating, self.tags(), &self.text)
    }
}

// ============================================================================
// Deal Review Form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub deal_id: String,
    /// 1–5 stars.
    pub rating: u8,
    pub text: String,
    pub warning: Option<String>,
}

impl ReviewForm {
    #[must_use]
    pub fn new(deal_id: impl Into<String>) -> Self {
        Self {
            deal_id: deal_id.into(),
            rating: MAX_RATING,
            text: String::new(),
            warning: None,
        }
    }

    pub fn decrease(&mut self) {
        self.rating = self.rating.saturating_sub(1).max(1);
    }

    pub fn increase(&mut self) {
        self.rating = (self.rating + 1).min(MAX_RATING);
    }
}

// ============================================================================
// Text Input
// ============================================================================

/// What a single-line text prompt writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    SendMessage,
    EditMessage(u64),
    AddNote,
    EditNote(u64),
}

impl TextTarget {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SendMessage => "New message",
            Self::EditMessage(_) => "Edit message",
            Self::AddNote => "New note",
            Self::EditNote(_) => "Edit note",
        }
    }
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentState {
    pub plan: Plan,
    pub network: PaymentNetwork,
    pub status: PaymentStatus,
}

impl PaymentState {
    #[must_use]
    pub fn new(plan: Plan) -> Self {
        Self {
            plan,
            network: PaymentNetwork::default(),
            status: PaymentStatus::Pending,
        }
    }

    /// The network can only change before "I have paid".
    pub fn toggle_network(&mut self) {
        if self.status == PaymentStatus::Pending {
            self.network = self.network.toggle();
        }
    }
}

// ============================================================================
// Custom Range Form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeField {
    #[default]
    From,
    To,
}

impl RangeField {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeForm {
    pub from: String,
    pub to: String,
    pub field: RangeField,
}

impl RangeForm {
    /// Prefills the dates of an existing custom range.
    #[must_use]
    pub fn from_range(range: &StatsRange) -> Self {
        match range {
            StatsRange::Custom { from, to } => Self {
                from: from.clone(),
                to: to.clone(),
                field: RangeField::From,
            },
            _ => Self::default(),
        }
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            RangeField::From => &mut self.from,
            RangeField::To => &mut self.to,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.current_mut().push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.current_mut().pop();
    }

    #[must_use]
    pub fn to_range(&self) -> StatsRange {
        StatsRange::Custom {
            from: self.from.trim().to_string(),
            to: self.to.trim().to_string(),
        }
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Message/notification popup.
    Message(String),
    /// Quit confirmation popup.
    ConfirmQuit,
    Confirm(ConfirmAction),
    /// Full profile of one counterparty.
    Counterparty(Box<CounterpartyProfile>),
    /// Several lookup hits to choose from.
    SearchResults {
        results: Vec<CounterpartyProfile>,
        selected: usize,
    },
    Feedback(FeedbackForm),
    DealReview(ReviewForm),
    /// Expanded deal: history, reviews and risk reasons.
    DealDetail(String),
    TextInput {
        target: TextTarget,
        input: String,
    },
    Payment(PaymentState),
    /// Freshly generated invite code.
    Invite(String),
    MemberDrawer(MemberPerformance),
    RangeForm(RangeForm),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether Esc may close the popup.
    ///
    /// The payment dialog stays up once payment confirmation has started.
    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        match self {
            Self::Payment(payment) => payment.status == PaymentStatus::Pending,
            _ => true,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_state_variants() {
        assert!(!PopupState::None.is_active());
        assert!(PopupState::Message("test".to_string()).is_active());
        assert!(PopupState::Invite("LOUPE-ABCDEFGH".to_string()).is_active());
        assert!(PopupState::Confirm(ConfirmAction::CancelSubscription).is_dismissable());
        assert!(PopupState::Feedback(FeedbackForm::default()).is_dismissable());
    }

    #[test]
    fn test_payment_locks_after_confirming() {
        let mut payment = PaymentState::new(Plan::Basic);
        payment.toggle_network();
        assert_eq!(payment.network, PaymentNetwork::Bep20);
        assert!(PopupState::Payment(payment).is_dismissable());

        payment.status = PaymentStatus::Confirming;
        payment.toggle_network();
        assert_eq!(payment.network, PaymentNetwork::Bep20);
        assert!(!PopupState::Payment(payment).is_dismissable());
    }

    #[test]
    fn test_feedback_form_fields() {
        let mut form = FeedbackForm::new(None);
        form.move_right();
        form.move_right();
        form.type_char('4');
        assert_eq!(form.rating, 4);
        form.type_char('9');
        assert_eq!(form.rating, 4);

        form.field = form.field.next();
        form.move_right();
        form.type_char(' ');
        assert_eq!(form.tags(), vec!["Accuracy".to_string()]);

        form.field = form.field.next();
        "ok ".chars().for_each(|c| form.type_char(c));
        form.backspace();
        assert_eq!(form.text, "ok");
        assert_eq!(form.field.prev(), FeedbackField::Tags);

        let feedback = form.to_feedback().unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.text, "ok");
    }

    #[test]
    fn test_blank_feedback_rejected() {
        let mut form = FeedbackForm::new(None);
        form.field = FeedbackField::Text;
        form.type_char(' ');
        let err = form.to_feedback().unwrap_err();
        assert!(err.to_string().contains("Please leave at least a text review!"));
    }

    #[test]
    fn test_review_rating_bounds() {
        let mut form = ReviewForm::new("3");
        form.increase();
        assert_eq!(form.rating, 5);
        for _ in 0..10 {
            form.decrease();
        }
        assert_eq!(form.rating, 1);
    }

    #[test]
    fn test_range_form_accepts_dates_only() {
        let mut form = RangeForm::default();
        "01.05.2025x".chars().for_each(|c| form.type_char(c));
        form.field = form.field.toggle();
        "31.05.2025".chars().for_each(|c| form.type_char(c));
        form.backspace();
        assert_eq!(
            form.to_range(),
            StatsRange::Custom {
                from: "01.05.2025".to_string(),
                to: "31.05.202".to_string(),
            }
        );
        assert_eq!(RangeForm::from_range(&form.to_range()).from, "01.05.2025");
    }
}
