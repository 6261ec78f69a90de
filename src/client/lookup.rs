//! Counterparty lookup by classified query.

use crate::domain::{CounterpartyProfile, Exchange, LoupeError};
use crate::search::{ParsedSearch, SearchType, label_long, last_path_segment};

use super::LoupeClient;

impl LoupeClient {
    /// Finds every profile matching `query`.
    ///
    /// Phones and cards are compared in normalized form, names and
    /// nicknames as case-insensitive substrings. A profile link matches by
    /// uid when its last path segment is numeric and by nickname otherwise,
    /// restricted to the link's exchange when one was detected.
    #[must_use]
    pub fn find(&self, query: &ParsedSearch) -> Vec<CounterpartyProfile> {
        let needle = query.normalized.as_str();
        let matches = |profile: &&CounterpartyProfile| match query.search_type {
            SearchType::Uid => profile.uid == needle,
            SearchType::Phone => profile.phones.iter().any(|p| p == needle),
            SearchType::Card => profile.cards.iter().any(|c| c == needle),
            SearchType::Fio => {
                let needle = needle.to_lowercase();
                profile
                    .names
                    .iter()
                    .any(|name| name.to_lowercase().contains(&needle))
            }
            SearchType::Nickname => nickname_matches(profile, needle),
            SearchType::ProfileUrl => link_matches(profile, needle, query.exchange),
        };

        self.profiles.iter().filter(matches).cloned().collect()
    }

    /// Resolves `query` against the directory.
    ///
    /// # Errors
    ///
    /// Returns `LoupeError::InvalidInput` for an empty query.
    pub async fn lookup(
        &self,
        query: &ParsedSearch,
    ) -> Result<Vec<CounterpartyProfile>, LoupeError> {
        if query.normalized.is_empty() {
            return Err(LoupeError::invalid_input("Enter a UID, phone, card, name or link"));
        }
        tracing::debug!(
            search_type = query.search_type.as_str(),
            normalized = %query.normalized,
            "counterparty lookup"
        );
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.find(query))
    }
}

fn nickname_matches(profile: &CounterpartyProfile, needle: &str) -> bool {
    !needle.is_empty()
        && profile
            .nickname
            .to_lowercase()
            .contains(&needle.to_lowercase())
}

fn link_matches(profile: &CounterpartyProfile, url: &str, exchange: Option<Exchange>) -> bool {
    if exchange.is_some_and(|e| e != profile.exchange) {
        return false;
    }
    match last_path_segment(url) {
        Some(segment) if segment.chars().all(|c| c.is_ascii_digit()) => profile.uid == segment,
        Some(segment) => nickname_matches(profile, segment),
        None => false,
    }
}

/// One-line hint shown under the search bar while typing.
#[must_use]
pub fn search_hint(query: &ParsedSearch) -> String {
    if query.value.is_empty() {
        return "Enter a UID, phone, card, full name, nickname or profile link".to_string();
    }
    let mut hint = format!("Search {}: {}", label_long(query.search_type), query.normalized);
    if let Some(exchange) = query.exchange {
        hint.push_str(&format!(" ({exchange})"));
    }
    hint
}
