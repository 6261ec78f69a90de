//! Application actions for LOUPE.
//!
//! Counterparty lookups, form submissions, persistence, clipboard and
//! browser integration.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use super::{App, AppMessage, FeedbackForm, Page, PopupState, SearchBar, TextTarget};
use crate::client::search_hint;
use crate::constants::{ERROR_TOAST_TICKS, PAYMENT_CONFIRM_DELAY, TOAST_TICKS};
use crate::domain::{
    ChatMessage, DealReview, Feedback, LoupeError, PaymentStatus, Plan, TeamNote, invite_code,
};
use crate::search::{ParsedSearch, label_long_in};
use crate::store::{StoreError, keys, load_json, save_json};

/// Text shown to the user for a refused operation.
///
/// Validation messages are already phrased for the user and drop the
/// "Invalid input" prefix.
pub(crate) fn user_message(err: &LoupeError) -> String {
    match err {
        LoupeError::InvalidInput(message) => message.clone(),
        other => other.to_string(),
    }
}

impl App {
    // ========================================================================
    // Counterparty Lookup
    // ========================================================================

    /// Submits the search bar.
    ///
    /// Blank input only shows the hint. Without stored feedback the
    /// feedback dialog opens first and the lookup runs once it is sent.
    pub(crate) fn submit_search(&mut self) {
        let query = self.ui.search.parsed();
        if query.normalized.is_empty() {
            self.ui.show_toast(search_hint(&query), ERROR_TOAST_TICKS);
            return;
        }

        self.ui.search.add_to_history(&query.value);
        let result = save_json(&mut *self.store, keys::SEARCH_HISTORY, &self.ui.search.history);
        self.report_save(result);
        self.ui.search.unfocus();

        if self.data.feedback.is_none() {
            self.open_feedback(Some(query));
            return;
        }
        self.dispatch_lookup(query);
    }

    /// Counts the check and runs the lookup on a spawned task.
    pub(crate) fn dispatch_lookup(&mut self, query: ParsedSearch) {
        self.data.checks = self.data.checks.saturating_add(1);
        let result = save_json(&mut *self.store, keys::CHECKS, &self.data.checks);
        self.report_save(result);

        tracing::debug!(
            search_type = query.search_type.as_str(),
            label = label_long_in(query.search_type, self.config.locale),
            checks = self.data.checks,
            "dispatching lookup"
        );
        self.ui.search.loading = true;
        self.data.last_query = Some(query.clone());

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client.lookup(&query).await;
            let message = AppMessage::SearchCompleted(result.map_err(|e| user_message(&e)));
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Forms
    // ========================================================================

    pub(crate) fn open_feedback(&mut self, pending_query: Option<ParsedSearch>) {
        self.ui.popup_state = PopupState::Feedback(FeedbackForm::new(pending_query));
    }

    pub(crate) fn submit_feedback(&mut self) {
        let PopupState::Feedback(form) = &mut self.ui.popup_state else {
            return;
        };
        let feedback = match form.to_feedback() {
            Ok(feedback) => feedback,
            Err(err) => {
                form.warning = Some(user_message(&err));
                return;
            }
        };
        let pending = form.pending_query.take();

        let result = save_json(&mut *self.store, keys::USER_REVIEW, &feedback);
        self.report_save(result);
        tracing::info!(rating = feedback.rating, tags = feedback.tags.len(), "feedback saved");
        self.data.feedback = Some(feedback);
        self.ui.dismiss_popup();
        self.ui.show_toast("[+] Thanks for the feedback!", TOAST_TICKS);

        if let Some(query) = pending {
            self.dispatch_lookup(query);
        }
    }

    pub(crate) fn submit_review(&mut self) {
        let PopupState::DealReview(form) = &self.ui.popup_state else {
            return;
        };
        let (deal_id, rating, text) = (form.deal_id.clone(), form.rating, form.text.clone());

        match self
            .data
            .add_deal_review(&deal_id, &self.config.username, rating, &text)
        {
            Ok(()) => {
                let result = save_json(&mut *self.store, keys::DEAL_REVIEWS, &self.data.deal_reviews);
                self.report_save(result);
                self.ui.popup_state = PopupState::DealDetail(deal_id);
                self.ui.show_toast("[+] Review saved", TOAST_TICKS);
            }
            Err(err) => {
                if let PopupState::DealReview(form) = &mut self.ui.popup_state {
                    form.warning = Some(user_message(&err));
                }
            }
        }
    }

    /// Applies the single-line text prompt to the chat or the notes.
    pub(crate) fn submit_text(&mut self) {
        let PopupState::TextInput { target, input } = &self.ui.popup_state else {
            return;
        };
        let (target, input) = (*target, input.clone());
        let now = chrono::Local::now();
        let can_write_chat = self.data.capabilities().can_write_chat;
        let plan = self.data.plan.as_str();
        let username = self.config.username.as_str();
        let team = &mut self.data.team;

        let result = match target {
            TextTarget::SendMessage if !can_write_chat => Err(LoupeError::PlanRequired {
                feature: "Team chat",
                plan,
            }),
            TextTarget::SendMessage => team
                .send_message(username, &input, now.format("%H:%M").to_string())
                .map(|_| ()),
            TextTarget::EditMessage(id) => team.edit_message(id, &input),
            TextTarget::AddNote => team
                .add_note(username, &input, now.format("%d.%m.%Y").to_string())
                .map(|_| ()),
            TextTarget::EditNote(id) => team.edit_note(id, &input),
        };

        if let Err(err) = result {
            self.report_error(&err);
            return;
        }

        let toast = match target {
            TextTarget::SendMessage => {
                self.nav.selected_message = self.data.team.messages.len().saturating_sub(1);
                "[+] Message sent"
            }
            TextTarget::EditMessage(_) => "[+] Message updated",
            TextTarget::AddNote => {
                self.nav.selected_note = 0;
                "[+] Note added"
            }
            TextTarget::EditNote(_) => "[+] Note updated",
        };
        match target {
            TextTarget::SendMessage | TextTarget::EditMessage(_) => self.persist_chat(),
            TextTarget::AddNote | TextTarget::EditNote(_) => self.persist_notes(),
        }
        self.ui.dismiss_popup();
        self.ui.show_toast(toast, TOAST_TICKS);
    }

    pub(crate) fn apply_custom_range(&mut self) {
        let PopupState::RangeForm(form) = &self.ui.popup_state else {
            return;
        };
        self.nav.stats_range = form.to_range();
        self.ui.dismiss_popup();
    }

    // ========================================================================
    // Team Invite
    // ========================================================================

    pub(crate) fn invite_member(&mut self) {
        let limit = self.data.capabilities().max_team_members;
        if let Err(err) = self.data.team.ensure_can_invite(limit) {
            self.report_error(&err);
            return;
        }
        let code = invite_code(&self.data.team.name, chrono::Utc::now().timestamp());
        tracing::info!(team = %self.data.team.name, "invite code generated");
        self.data.invite_code = Some(code.clone());
        self.ui.popup_state = PopupState::Invite(code);
    }

    // ========================================================================
    // Payment
    // ========================================================================

    /// "I have paid": starts the confirmation timer.
    pub(crate) fn confirm_payment(&mut self) {
        let PopupState::Payment(payment) = &mut self.ui.popup_state else {
            return;
        };
        if payment.status != PaymentStatus::Pending {
            return;
        }
        payment.status = PaymentStatus::Confirming;
        let plan = payment.plan;
        tracing::info!(
            plan = plan.id(),
            network = payment.network.as_str(),
            "payment submitted"
        );
        self.spawn_after(PAYMENT_CONFIRM_DELAY, AppMessage::PaymentConfirmed(plan));
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Loads every persisted value; unreadable values keep their defaults.
    pub(crate) fn load_persisted(&mut self) {
        if let Some(plan) = self.load_key::<Plan>(keys::PLAN) {
            self.data.plan = plan;
        }
        self.data.feedback = self.load_key::<Feedback>(keys::USER_REVIEW);
        if let Some(reviews) = self.load_key::<BTreeMap<String, Vec<DealReview>>>(keys::DEAL_REVIEWS)
        {
            self.data.deal_reviews = reviews;
        }
        if let Some(messages) = self.load_key::<Vec<ChatMessage>>(keys::TEAM_CHAT) {
            self.data.team.messages = messages;
        }
        if let Some(notes) = self.load_key::<Vec<TeamNote>>(keys::TEAM_NOTES) {
            self.data.team.notes = notes;
        }
        self.data.checks = self.load_key::<u32>(keys::CHECKS).unwrap_or_default();
        if let Some(history) = self.load_key::<Vec<String>>(keys::SEARCH_HISTORY) {
            self.ui.search = SearchBar::with_history(history);
        }
        tracing::debug!(
            plan = self.data.plan.id(),
            checks = self.data.checks,
            has_feedback = self.data.feedback.is_some(),
            "persisted state loaded"
        );
    }

    fn load_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match load_json(&*self.store, key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, "ignoring unreadable stored value: {err}");
                None
            }
        }
    }

    pub(crate) fn persist_plan(&mut self) {
        let result = save_json(&mut *self.store, keys::PLAN, &self.data.plan);
        self.report_save(result);
    }

    pub(crate) fn persist_chat(&mut self) {
        let result = save_json(&mut *self.store, keys::TEAM_CHAT, &self.data.team.messages);
        self.report_save(result);
    }

    pub(crate) fn persist_notes(&mut self) {
        let result = save_json(&mut *self.store, keys::TEAM_NOTES, &self.data.team.notes);
        self.report_save(result);
    }

    fn report_save(&mut self, result: Result<(), StoreError>) {
        if let Err(err) = result {
            tracing::warn!("store write failed: {err}");
            self.ui
                .show_toast(format!("[x] Could not save: {err}"), ERROR_TOAST_TICKS);
        }
    }

    pub(crate) fn report_error(&mut self, err: &LoupeError) {
        tracing::debug!("operation refused: {err}");
        self.ui
            .show_toast(format!("[x] {}", user_message(err)), ERROR_TOAST_TICKS);
    }

    // ========================================================================
    // Config
    // ========================================================================

    pub(crate) fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggle();
        self.save_config();
        self.ui.show_toast(
            format!("Theme: {}", self.config.theme.as_str()),
            TOAST_TICKS,
        );
    }

    pub(crate) fn toggle_locale(&mut self) {
        self.config.locale = self.config.locale.toggle();
        self.save_config();
        self.ui.show_toast(
            format!("Labels: {}", self.config.locale.as_str()),
            TOAST_TICKS,
        );
    }

    fn save_config(&mut self) {
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("failed to save configuration: {err}");
            self.ui
                .show_toast(format!("[x] Could not save settings: {err}"), ERROR_TOAST_TICKS);
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copies what the current context offers: the card's UID, the invite
    /// code, the wallet address, or the normalized query on Home.
    pub(crate) fn copy_current(&mut self) {
        let copied = match &self.ui.popup_state {
            PopupState::Counterparty(profile) => Some(("UID", profile.uid.clone())),
            PopupState::Invite(code) => Some(("Invite code", code.clone())),
            PopupState::Payment(payment) => {
                Some(("Wallet address", payment.network.wallet().to_string()))
            }
            PopupState::None if self.nav.page == Page::Home => {
                let parsed = self.ui.search.parsed();
                let normalized = if parsed.normalized.is_empty() {
                    self.data
                        .last_query
                        .as_ref()
                        .map(|q| q.normalized.clone())
                        .unwrap_or_default()
                } else {
                    parsed.normalized
                };
                (!normalized.is_empty()).then_some(("Query", normalized))
            }
            _ => None,
        };

        let Some((what, text)) = copied else {
            return;
        };
        match self.clipboard.copy_text(&text) {
            Ok(()) => self.ui.show_toast(format!("[+] {what} copied"), TOAST_TICKS),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.ui
                    .show_toast(format!("[x] Clipboard unavailable: {e}"), ERROR_TOAST_TICKS);
            }
        }
    }

    // ========================================================================
    // Browser
    // ========================================================================

    pub(crate) fn open_link(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => {
                tracing::info!(url, "opened link");
                self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!(url, "failed to open link: {e}");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), ERROR_TOAST_TICKS);
            }
        }
    }
}
