//! Message processing for the LOUPE application.
//!
//! Spawned tasks (lookups, payment timers) report back through the app
//! channel; this module folds those messages into state.

use std::time::Duration;

use super::{App, AppMessage, PopupState};
use crate::constants::{PAYMENT_CLOSE_DELAY, TOAST_TICKS};
use crate::domain::{CounterpartyProfile, PaymentStatus, Plan};
use crate::search::label_long_in;

impl App {
    /// Drains every pending message without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SearchCompleted(Ok(results)) => {
                self.ui.search.loading = false;
                self.handle_search_results(results);
            }
            AppMessage::SearchCompleted(Err(error)) => {
                self.ui.search.loading = false;
                tracing::warn!("lookup failed: {error}");
                self.ui.show_message(format!("Search error: {error}"));
            }
            AppMessage::PaymentConfirmed(plan) => self.handle_payment_confirmed(plan),
            AppMessage::PaymentClosed => {
                if matches!(
                    &self.ui.popup_state,
                    PopupState::Payment(payment) if payment.status == PaymentStatus::Confirmed
                ) {
                    self.ui.dismiss_popup();
                }
            }
        }
    }

    pub(crate) fn handle_search_results(&mut self, results: Vec<CounterpartyProfile>) {
        tracing::debug!(count = results.len(), "lookup finished");
        self.data.results.clone_from(&results);
        self.nav.selected_result = 0;

        match results.len() {
            0 => {
                let message = self.data.last_query.as_ref().map_or_else(
                    || "Nothing found".to_string(),
                    |query| {
                        format!(
                            "Nothing found {}: {}",
                            label_long_in(query.search_type, self.config.locale),
                            query.value
                        )
                    },
                );
                self.ui.show_message(message);
            }
            1 => {
                if let Some(profile) = results.into_iter().next() {
                    self.ui.open_counterparty(profile);
                }
            }
            _ => self.ui.show_search_results(results),
        }
    }

    fn handle_payment_confirmed(&mut self, plan: Plan) {
        tracing::info!(plan = plan.id(), "payment confirmed");
        self.data.plan = plan;
        self.persist_plan();

        if let PopupState::Payment(payment) = &mut self.ui.popup_state {
            payment.status = PaymentStatus::Confirmed;
            self.spawn_after(PAYMENT_CLOSE_DELAY, AppMessage::PaymentClosed);
        }
        self.ui
            .show_toast(format!("[+] {plan} plan activated"), TOAST_TICKS);
    }

    /// Sends `message` to the app channel once `delay` has passed.
    pub(crate) fn spawn_after(&self, delay: Duration, message: AppMessage) {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(message);
        });
    }
}
