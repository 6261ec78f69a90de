//! Command execution and input handling for the LOUPE application.
//!
//! Key events are mapped to [`AppCommand`]s for the current
//! [`InputContext`], and each command is executed against the state here.
//! Longer actions (lookups, persistence, payment) live in `app_actions`.

use crossterm::event::KeyEvent;

use super::{App, ConfirmAction, Page, PaymentState, PopupState, RangeForm, ReviewForm, TeamTab, TextTarget};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{ERROR_TOAST_TICKS, SUPPORT_EMAIL_URL, SUPPORT_TELEGRAM_URL, TOAST_TICKS};
use crate::domain::{Deal, LoupeError, Plan, StatsTab};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context based on application state.
    ///
    /// Help takes precedence over popups, popups over the focused search
    /// bar, and the search bar over the page itself.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }

        match &self.ui.popup_state {
            PopupState::None => {
                if self.nav.page == Page::Home && self.ui.search.focused {
                    InputContext::InlineSearch
                } else {
                    InputContext::for_page(self.nav.page)
                }
            }
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::Confirm(_) => InputContext::ConfirmAction,
            PopupState::Counterparty(_) => InputContext::CounterpartyCard,
            PopupState::SearchResults { .. } => InputContext::SearchResults,
            PopupState::Feedback(_) => InputContext::FeedbackForm,
            PopupState::DealReview(_) => InputContext::ReviewForm,
            PopupState::DealDetail(_) => InputContext::DealDetail,
            PopupState::TextInput { .. } => InputContext::TextInput,
            PopupState::Payment(_) => InputContext::Payment,
            PopupState::Invite(_) => InputContext::Invite,
            PopupState::MemberDrawer(_) => InputContext::MemberDrawer,
            PopupState::RangeForm(_) => InputContext::RangeForm,
        }
    }

    /// Executes an application command.
    ///
    /// Page actions on a page the plan does not unlock are refused with a
    /// toast instead of running.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        if Self::is_page_action(command)
            && !self.ui.has_active_popup()
            && !self.ui.show_help
            && !self.current_page_unlocked()
        {
            self.report_locked_page();
            return;
        }

        match command {
            // === Application Control ===
            AppCommand::RequestQuit => self.ui.open_confirm_quit(),
            AppCommand::ConfirmQuit => self.exit = true,
            AppCommand::ToggleHelp => self.ui.toggle_help(),
            AppCommand::ScrollHelpUp => self.ui.scroll_help_up(),
            AppCommand::ScrollHelpDown => self.ui.scroll_help_down(),
            AppCommand::ToggleTheme => self.toggle_theme(),
            AppCommand::ToggleLocale => self.toggle_locale(),

            // === Page Navigation ===
            AppCommand::NextPage => self.go_to_page(self.nav.page.next()),
            AppCommand::PrevPage => self.go_to_page(self.nav.page.prev()),
            AppCommand::GoToPage(page) => self.go_to_page(page),

            // === Lists and Popups ===
            AppCommand::MoveUp => self.move_vertical(false),
            AppCommand::MoveDown => self.move_vertical(true),
            AppCommand::MoveLeft => self.move_horizontal(false),
            AppCommand::MoveRight => self.move_horizontal(true),
            AppCommand::Select => self.select(),
            AppCommand::Dismiss => self.dismiss(),
            AppCommand::Confirm => self.confirm_action(),
            AppCommand::Copy => self.copy_current(),

            // === Inline Search ===
            AppCommand::FocusSearch => self.ui.search.focus(),
            AppCommand::TypeChar(c) => self.type_char(c),
            AppCommand::Backspace => self.backspace(),
            AppCommand::CursorLeft => self.ui.search.cursor_left(),
            AppCommand::CursorRight => self.ui.search.cursor_right(),
            AppCommand::HistoryPrev => self.ui.search.history_prev(),
            AppCommand::HistoryNext => self.ui.search.history_next(),
            AppCommand::CycleSearchType => self.ui.search.cycle_type(),
            AppCommand::SubmitSearch => self.submit_search(),

            // === Deals ===
            AppCommand::ToggleDealScope => {
                self.nav.deal_scope = self.nav.deal_scope.toggle();
                self.nav.selected_deal = 0;
            }
            AppCommand::CycleStatusFilter => {
                self.nav.deal_filter.cycle_status();
                self.nav.selected_deal = 0;
            }
            AppCommand::CycleExchangeFilter => {
                self.nav.deal_filter.cycle_exchange();
                self.nav.selected_deal = 0;
            }
            AppCommand::ReviewDeal => self.open_review_form(),
            AppCommand::OpenCounterparty => self.open_deal_counterparty(),

            // === Team ===
            AppCommand::NewEntry => self.new_entry(),
            AppCommand::EditEntry => self.edit_entry(),
            AppCommand::DeleteEntry => self.delete_entry(),
            AppCommand::UnpinMessage => self.unpin_selected_message(),
            AppCommand::InviteMember => self.invite_member(),

            // === Statistics ===
            AppCommand::CycleRange => {
                self.nav.stats_range = self.nav.stats_range.next();
            }
            AppCommand::EditCustomRange => {
                self.ui.popup_state =
                    PopupState::RangeForm(RangeForm::from_range(&self.nav.stats_range));
            }

            // === Settings ===
            AppCommand::CancelSubscription => self.request_cancel_subscription(),
            AppCommand::OpenSupportTelegram => self.open_link(SUPPORT_TELEGRAM_URL),
            AppCommand::OpenSupportEmail => self.open_link(SUPPORT_EMAIL_URL),
            AppCommand::OpenFeedback => self.open_feedback(None),

            // === Forms ===
            AppCommand::NextField => self.change_field(true),
            AppCommand::PrevField => self.change_field(false),
            AppCommand::Submit => self.submit_popup(),

            AppCommand::Noop => {}
        }
    }

    /// Commands that act on the content of a plan-gated page.
    const fn is_page_action(command: AppCommand) -> bool {
        matches!(
            command,
            AppCommand::Select
                | AppCommand::MoveLeft
                | AppCommand::MoveRight
                | AppCommand::ToggleDealScope
                | AppCommand::CycleStatusFilter
                | AppCommand::CycleExchangeFilter
                | AppCommand::ReviewDeal
                | AppCommand::OpenCounterparty
                | AppCommand::NewEntry
                | AppCommand::EditEntry
                | AppCommand::DeleteEntry
                | AppCommand::UnpinMessage
                | AppCommand::InviteMember
                | AppCommand::CycleRange
                | AppCommand::EditCustomRange
        )
    }

    fn report_locked_page(&mut self) {
        let page = self.nav.page;
        self.report_error(&LoupeError::PlanRequired {
            feature: page.as_str(),
            plan: self.data.plan.as_str(),
        });
        tracing::debug!(page = page.as_str(), "page action refused by plan");
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    fn go_to_page(&mut self, page: Page) {
        if page != self.nav.page {
            tracing::debug!(page = page.as_str(), "page changed");
        }
        self.ui.search.unfocus();
        self.nav.go_to(page);
    }

    fn move_vertical(&mut self, down: bool) {
        if matches!(self.ui.popup_state, PopupState::SearchResults { .. }) {
            self.ui.move_result_selection(down);
            return;
        }
        if self.ui.has_active_popup() {
            return;
        }
        if down {
            let len = self.current_list_len();
            self.nav.move_down(len);
        } else {
            self.nav.move_up();
        }
    }

    /// Left/Right: form controls in popups, tabs on Team and Statistics.
    fn move_horizontal(&mut self, forward: bool) {
        if !self.ui.has_active_popup() {
            match self.nav.page {
                Page::Team => {
                    self.nav.team_tab = if forward {
                        self.nav.team_tab.next()
                    } else {
                        self.nav.team_tab.prev()
                    };
                }
                Page::Statistics => self.toggle_stats_tab(),
                _ => {}
            }
            return;
        }

        match &mut self.ui.popup_state {
            PopupState::Feedback(form) if forward => form.move_right(),
            PopupState::Feedback(form) => form.move_left(),
            PopupState::DealReview(form) if forward => form.increase(),
            PopupState::DealReview(form) => form.decrease(),
            PopupState::Payment(payment) => payment.toggle_network(),
            _ => {}
        }
    }

    fn toggle_stats_tab(&mut self) {
        let next = self.nav.stats_tab.toggle();
        if next == StatsTab::Team && !self.data.capabilities().can_use_team {
            self.report_error(&LoupeError::PlanRequired {
                feature: "Team statistics",
                plan: self.data.plan.as_str(),
            });
            return;
        }
        self.nav.stats_tab = next;
        self.nav.selected_performer = 0;
    }

    // ========================================================================
    // Select / Dismiss / Confirm
    // ========================================================================

    fn select(&mut self) {
        if let PopupState::SearchResults { results, selected } = &self.ui.popup_state {
            let picked = results.get(*selected).cloned().map(|p| (*selected, p));
            if let Some((index, profile)) = picked {
                self.nav.selected_result = index;
                self.ui.open_counterparty(profile);
            }
            return;
        }
        if self.ui.has_active_popup() {
            return;
        }

        match self.nav.page {
            Page::Home => match self.data.results.get(self.nav.selected_result).cloned() {
                Some(profile) => self.ui.open_counterparty(profile),
                None => self.ui.search.focus(),
            },
            Page::Deals => {
                if let Some(deal) = self.selected_deal() {
                    self.ui.popup_state = PopupState::DealDetail(deal.id);
                }
            }
            Page::Team => match self.nav.team_tab {
                TeamTab::Members => {}
                TeamTab::Chat | TeamTab::Notes => self.edit_entry(),
            },
            Page::Statistics => {
                if self.nav.stats_tab == StatsTab::Team
                    && let Some(member) = self.data.performance.get(self.nav.selected_performer)
                {
                    self.ui.popup_state = PopupState::MemberDrawer(member.clone());
                }
            }
            Page::Settings => self.choose_plan(),
        }
    }

    fn dismiss(&mut self) {
        if !self.ui.has_active_popup() {
            self.ui.search.unfocus();
            return;
        }
        if !self.ui.popup_state.is_dismissable() {
            self.ui
                .show_toast("Waiting for payment confirmation", TOAST_TICKS);
            return;
        }
        if let PopupState::Feedback(form) = &self.ui.popup_state
            && form.pending_query.is_some()
        {
            tracing::debug!("feedback dismissed, pending lookup dropped");
        }
        self.ui.dismiss_popup();
    }

    fn confirm_action(&mut self) {
        let PopupState::Confirm(action) = &self.ui.popup_state else {
            return;
        };
        let action = action.clone();
        self.ui.dismiss_popup();

        match action {
            ConfirmAction::RemoveMember { id, username } => {
                match self.data.team.remove_member(&id) {
                    Ok(_) => {
                        tracing::info!(member = %username, "member removed");
                        self.ui
                            .show_toast(format!("[+] {username} removed from the team"), TOAST_TICKS);
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            ConfirmAction::DeleteMessage(id) => match self.data.team.delete_message(id) {
                Ok(()) => {
                    self.persist_chat();
                    self.ui.show_toast("[+] Message deleted", TOAST_TICKS);
                }
                Err(err) => self.report_error(&err),
            },
            ConfirmAction::DeleteNote(id) => match self.data.team.delete_note(id) {
                Ok(()) => {
                    self.persist_notes();
                    self.ui.show_toast("[+] Note deleted", TOAST_TICKS);
                }
                Err(err) => self.report_error(&err),
            },
            ConfirmAction::CancelSubscription => {
                tracing::info!(from = self.data.plan.id(), "subscription cancelled");
                self.data.plan = Plan::Free;
                self.persist_plan();
                self.ui
                    .show_toast("[+] Subscription cancelled, back on Free", TOAST_TICKS);
            }
        }
    }

    // ========================================================================
    // Text Entry
    // ========================================================================

    fn type_char(&mut self, c: char) {
        match &mut self.ui.popup_state {
            PopupState::None => self.ui.search.type_char(c),
            PopupState::Feedback(form) => form.type_char(c),
            PopupState::DealReview(form) => {
                form.text.push(c);
                form.warning = None;
            }
            PopupState::TextInput { input, .. } => input.push(c),
            PopupState::RangeForm(form) => form.type_char(c),
            _ => {}
        }
    }

    fn backspace(&mut self) {
        match &mut self.ui.popup_state {
            PopupState::None => self.ui.search.backspace(),
            PopupState::Feedback(form) => form.backspace(),
            PopupState::DealReview(form) => {
                form.text.pop();
            }
            PopupState::TextInput { input, .. } => {
                input.pop();
            }
            PopupState::RangeForm(form) => form.backspace(),
            _ => {}
        }
    }

    fn change_field(&mut self, forward: bool) {
        match &mut self.ui.popup_state {
            PopupState::Feedback(form) => {
                form.field = if forward {
                    form.field.next()
                } else {
                    form.field.prev()
                };
            }
            PopupState::RangeForm(form) => form.field = form.field.toggle(),
            _ => {}
        }
    }

    fn submit_popup(&mut self) {
        match &self.ui.popup_state {
            PopupState::Feedback(_) => self.submit_feedback(),
            PopupState::DealReview(_) => self.submit_review(),
            PopupState::TextInput { .. } => self.submit_text(),
            PopupState::Payment(_) => self.confirm_payment(),
            PopupState::RangeForm(_) => self.apply_custom_range(),
            _ => {}
        }
    }

    // ========================================================================
    // Deals
    // ========================================================================

    /// Deal under the cursor of the Deals list.
    pub(crate) fn selected_deal(&self) -> Option<Deal> {
        self.data
            .visible_deals(self.nav.deal_scope, &self.nav.deal_filter)
            .into_iter()
            .nth(self.nav.selected_deal)
    }

    /// The expanded deal when its detail is open, the list selection otherwise.
    fn focused_deal(&self) -> Option<Deal> {
        match &self.ui.popup_state {
            PopupState::DealDetail(id) => self.data.find_deal(id),
            _ => self.selected_deal(),
        }
    }

    fn open_review_form(&mut self) {
        let Some(deal) = self.focused_deal() else {
            return;
        };
        if !deal.can_review() {
            self.ui
                .show_toast("[x] Active deals cannot be reviewed yet", ERROR_TOAST_TICKS);
            return;
        }
        self.ui.popup_state = PopupState::DealReview(ReviewForm::new(deal.id));
    }

    fn open_deal_counterparty(&mut self) {
        let Some(deal) = self.focused_deal() else {
            return;
        };
        match self.client.profile_by_uid(&deal.uid) {
            Ok(profile) => self.ui.open_counterparty(profile),
            Err(err) => self.report_error(&err),
        }
    }

    // ========================================================================
    // Team
    // ========================================================================

    fn new_entry(&mut self) {
        match self.nav.team_tab {
            TeamTab::Members => self.invite_member(),
            TeamTab::Chat => {
                if !self.data.capabilities().can_write_chat {
                    self.report_error(&LoupeError::PlanRequired {
                        feature: "Team chat",
                        plan: self.data.plan.as_str(),
                    });
                    return;
                }
                self.open_text_input(TextTarget::SendMessage, String::new());
            }
            TeamTab::Notes => self.open_text_input(TextTarget::AddNote, String::new()),
        }
    }

    fn edit_entry(&mut self) {
        match self.nav.team_tab {
            TeamTab::Members => {}
            TeamTab::Chat => {
                let Some(message) = self.data.team.messages.get(self.nav.selected_message) else {
                    return;
                };
                if !message.from_me {
                    self.report_error(&LoupeError::forbidden(
                        "only your own messages can be changed",
                    ));
                    return;
                }
                let (id, text) = (message.id, message.text.clone());
                self.open_text_input(TextTarget::EditMessage(id), text);
            }
            TeamTab::Notes => {
                let Some(note) = self.data.team.notes.get(self.nav.selected_note) else {
                    return;
                };
                if !note.from_me {
                    self.report_error(&LoupeError::forbidden("only your own notes can be changed"));
                    return;
                }
                let (id, text) = (note.id, note.text.clone());
                self.open_text_input(TextTarget::EditNote(id), text);
            }
        }
    }

    fn delete_entry(&mut self) {
        let action = match self.nav.team_tab {
            TeamTab::Members => {
                let Some(member) = self.data.team.members.get(self.nav.selected_member) else {
                    return;
                };
                if member.is_owner() {
                    self.report_error(&LoupeError::forbidden("the team owner cannot be removed"));
                    return;
                }
                ConfirmAction::RemoveMember {
                    id: member.id.clone(),
                    username: member.username.clone(),
                }
            }
            TeamTab::Chat => {
                let Some(message) = self.data.team.messages.get(self.nav.selected_message) else {
                    return;
                };
                if !message.from_me {
                    self.report_error(&LoupeError::forbidden(
                        "only your own messages can be changed",
                    ));
                    return;
                }
                ConfirmAction::DeleteMessage(message.id)
            }
            TeamTab::Notes => {
                let Some(note) = self.data.team.notes.get(self.nav.selected_note) else {
                    return;
                };
                if !note.from_me {
                    self.report_error(&LoupeError::forbidden("only your own notes can be changed"));
                    return;
                }
                ConfirmAction::DeleteNote(note.id)
            }
        };
        self.ui.open_confirm(action);
    }

    fn unpin_selected_message(&mut self) {
        if self.nav.team_tab != TeamTab::Chat {
            return;
        }
        let Some(id) = self
            .data
            .team
            .messages
            .get(self.nav.selected_message)
            .map(|m| m.id)
        else {
            return;
        };
        match self.data.team.unpin_message(id) {
            Ok(()) => {
                self.persist_chat();
                self.ui.show_toast("[+] Message unpinned", TOAST_TICKS);
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn open_text_input(&mut self, target: TextTarget, input: String) {
        self.ui.popup_state = PopupState::TextInput { target, input };
    }

    // ========================================================================
    // Settings
    // ========================================================================

    fn choose_plan(&mut self) {
        let Some(plan) = Plan::ALL.get(self.nav.selected_plan).copied() else {
            return;
        };
        if plan == self.data.plan {
            self.ui
                .show_toast(format!("{plan} plan is already active"), TOAST_TICKS);
        } else if plan == Plan::Free {
            self.request_cancel_subscription();
        } else {
            self.ui.popup_state = PopupState::Payment(PaymentState::new(plan));
        }
    }

    fn request_cancel_subscription(&mut self) {
        if self.data.plan == Plan::Free {
            self.ui
                .show_toast("You are already on the Free plan", TOAST_TICKS);
            return;
        }
        self.ui.open_confirm(ConfirmAction::CancelSubscription);
    }
}
