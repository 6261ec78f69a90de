//! Counterparty search-query classification.
//!
//! A trader pastes whatever they have about a counterparty: an exchange UID,
//! a phone number, a card number, a full name, a nickname or a profile
//! link. [`classify`] decides which of these the text is, brings it into a
//! canonical form and, for links, names the exchange.
//!
//! Classification is total. Rules are tried in a fixed order and the first
//! one that recognizes the text wins; anything left over is a nickname.
//!
//! ```ignore
//! use crate::search::{classify, SearchType};
//!
//! let parsed = classify("8 (999) 123-45-67");
//! assert_eq!(parsed.search_type, SearchType::Phone);
//! assert_eq!(parsed.normalized, "+79991234567");
//! ```

mod fio;
mod normalize;
mod profile_url;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::Exchange;

pub use fio::looks_like_fio;
pub use normalize::{normalize_card, normalize_phone_ru, normalize_spaces};
pub use profile_url::{detect_exchange, is_url, last_path_segment};

// ============================================================================
// Search Type
// ============================================================================

/// What a search query identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Numeric exchange user identifier.
    Uid,
    /// Russian mobile number.
    Phone,
    /// 16-digit bank card.
    Card,
    /// Full name (surname, given name, patronymic).
    Fio,
    /// Exchange handle. Also the fallback for unrecognized text.
    Nickname,
    /// Link to a public exchange profile.
    ProfileUrl,
}

impl SearchType {
    pub const ALL: [Self; 6] = [
        Self::Uid,
        Self::Phone,
        Self::Card,
        Self::Fio,
        Self::Nickname,
        Self::ProfileUrl,
    ];

    /// Machine tag, identical to the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::Phone => "phone",
            Self::Card => "card",
            Self::Fio => "fio",
            Self::Nickname => "nickname",
            Self::ProfileUrl => "profile_url",
        }
    }

    /// Cycles to the next search type (manual override in the search bar).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Uid => Self::Phone,
            Self::Phone => Self::Card,
            Self::Card => Self::Fio,
            Self::Fio => Self::Nickname,
            Self::Nickname => Self::ProfileUrl,
            Self::ProfileUrl => Self::Uid,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Language of user-facing search labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ru,
            Self::Ru => Self::En,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

/// Descriptive phrase for a search type, e.g. "by phone".
#[must_use]
pub const fn label_long(search_type: SearchType) -> &'static str {
    label_long_in(search_type, Locale::En)
}

/// Short tag for a search type, e.g. "Phone".
#[must_use]
pub const fn label_short(search_type: SearchType) -> &'static str {
    label_short_in(search_type, Locale::En)
}

/// Localized form of [`label_long`].
#[must_use]
pub const fn label_long_in(search_type: SearchType, locale: Locale) -> &'static str {
    match (locale, search_type) {
        (Locale::En, SearchType::Uid) => "by UID",
        (Locale::En, SearchType::Phone) => "by phone",
        (Locale::En, SearchType::Card) => "by card",
        (Locale::En, SearchType::Fio) => "by full name",
        (Locale::En, SearchType::Nickname) => "by nickname",
        (Locale::En, SearchType::ProfileUrl) => "by link",
        (Locale::Ru, SearchType::Uid) => "по UID",
        (Locale::Ru, SearchType::Phone) => "по телефону",
        (Locale::Ru, SearchType::Card) => "по карте",
        (Locale::Ru, SearchType::Fio) => "по ФИО",
        (Locale::Ru, SearchType::Nickname) => "по нику",
        (Locale::Ru, SearchType::ProfileUrl) => "по ссылке",
    }
}

/// Localized form of [`label_short`].
#[must_use]
pub const fn label_short_in(search_type: SearchType, locale: Locale) -> &'static str {
    match (locale, search_type) {
        (Locale::En, SearchType::Uid) | (Locale::Ru, SearchType::Uid) => "UID",
        (Locale::En, SearchType::Phone) => "Phone",
        (Locale::En, SearchType::Card) => "Card",
        (Locale::En, SearchType::Fio) => "Name",
        (Locale::En, SearchType::Nickname) => "Nickname",
        (Locale::En, SearchType::ProfileUrl) => "Link",
        (Locale::Ru, SearchType::Phone) => "Телефон",
        (Locale::Ru, SearchType::Card) => "Карта",
        (Locale::Ru, SearchType::Fio) => "ФИО",
        (Locale::Ru, SearchType::Nickname) => "Ник",
        (Locale::Ru, SearchType::ProfileUrl) => "Ссылка",
    }
}

// ============================================================================
// Parsed Search
// ============================================================================

/// Result of classifying a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSearch {
    #[serde(rename = "type")]
    pub search_type: SearchType,
    /// The query with surrounding whitespace removed.
    pub value: String,
    /// Canonical form used for lookups.
    pub normalized: String,
    /// Exchange a profile link belongs to, when recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<Exchange>,
}

impl ParsedSearch {
    /// Reinterprets the query as `search_type`.
    ///
    /// Phone and card overrides normalize the digits when they can; every
    /// other type keeps the whitespace-normalized text.
    #[must_use]
    pub fn with_type(&self, search_type: SearchType) -> Self {
        if search_type == self.search_type {
            return self.clone();
        }

        let collapsed = normalize_spaces(&self.value);
        let normalized = match search_type {
            SearchType::Phone => normalize_phone_ru(&collapsed).unwrap_or(collapsed),
            SearchType::Card => normalize_card(&collapsed).unwrap_or(collapsed),
            _ => collapsed,
        };
        let exchange = match search_type {
            SearchType::ProfileUrl => detect_exchange(&normalized),
            _ => None,
        };

        Self {
            search_type,
            value: self.value.clone(),
            normalized,
            exchange,
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// What a single rule recognized.
struct Detection {
    search_type: SearchType,
    normalized: String,
    exchange: Option<Exchange>,
}

impl Detection {
    fn new(search_type: SearchType, normalized: impl Into<String>) -> Self {
        Self {
            search_type,
            normalized: normalized.into(),
            exchange: None,
        }
    }
}

/// A named detection rule over whitespace-normalized text.
struct Rule {
    name: &'static str,
    detect: fn(&str) -> Option<Detection>,
}

/// Detection rules in priority order. The first match wins.
const RULES: &[Rule] = &[
    Rule {
        name: "profile_url",
        detect: detect_profile_url,
    },
    Rule {
        name: "pure_digits",
        detect: detect_pure_digits,
    },
    Rule {
        name: "separated_phone",
        detect: detect_separated_phone,
    },
    Rule {
        name: "separated_card",
        detect: detect_separated_card,
    },
    Rule {
        name: "fio",
        detect: detect_fio,
    },
];

/// Shortest and longest all-digit strings treated as identifiers.
const MIN_DIGITS: usize = 6;
const MAX_DIGITS: usize = 20;

fn detect_profile_url(s: &str) -> Option<Detection> {
    if !is_url(s) {
        return None;
    }
    Some(Detection {
        search_type: SearchType::ProfileUrl,
        normalized: s.to_string(),
        exchange: detect_exchange(s),
    })
}

fn detect_pure_digits(s: &str) -> Option<Detection> {
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if s.len() == 16 {
        return Some(Detection::new(SearchType::Card, s));
    }

    if matches!(s.len(), 10 | 11)
        && let Some(phone) = normalize_phone_ru(s)
    {
        return Some(Detection::new(SearchType::Phone, phone));
    }

    Some(Detection::new(SearchType::Uid, s))
}

/// Any text whose digits form a RU number, whatever surrounds them.
fn detect_separated_phone(s: &str) -> Option<Detection> {
    normalize_phone_ru(s).map(|phone| Detection::new(SearchType::Phone, phone))
}

fn detect_separated_card(s: &str) -> Option<Detection> {
    normalize_card(s).map(|card| Detection::new(SearchType::Card, card))
}

fn detect_fio(s: &str) -> Option<Detection> {
    looks_like_fio(s).then(|| Detection::new(SearchType::Fio, s))
}

/// Classifies a free-text counterparty query.
///
/// Never fails: text no rule recognizes, including the empty string, is a
/// [`SearchType::Nickname`].
#[must_use]
pub fn classify(raw: &str) -> ParsedSearch {
    let value = raw.trim().to_string();
    let s = normalize_spaces(raw);

    let detection = RULES
        .iter()
        .find_map(|rule| {
            let detection = (rule.detect)(&s)?;
            tracing::trace!(rule = rule.name, "query classified");
            Some(detection)
        })
        .unwrap_or_else(|| Detection::new(SearchType::Nickname, s));

    ParsedSearch {
        search_type: detection.search_type,
        value,
        normalized: detection.normalized,
        exchange: detection.exchange,
    }
}

// ============================================================================
// Tests
// ============================================================================
