//! Canonical forms for counterparty identifiers.
//!
//! These are the leaves of the classifier: each either produces the one
//! textual representation used for lookups or reports that the input does
//! not have the expected shape.

/// Collapses every run of whitespace into a single space and trims the ends.
#[must_use]
pub fn normalize_spaces(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps only the ASCII digits of `raw`.
fn ascii_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes a Russian mobile number to `+7XXXXXXXXXX`.
///
/// All non-digit characters are ignored. Eleven digits with a leading `8`
/// or `7`, or ten digits with the country code omitted, are accepted.
///
/// # Returns
///
/// The normalized number, or `None` for any other digit count.
#[must_use]
pub fn normalize_phone_ru(raw: &str) -> Option<String> {
    let digits = ascii_digits(raw);

    match digits.len() {
        11 if digits.starts_with('8') || digits.starts_with('7') => {
            Some(format!("+7{}", &digits[1..]))
        }
        10 => Some(format!("+7{digits}")),
        _ => None,
    }
}

/// Normalizes a bank card number to its 16 bare digits.
///
/// Only 16-digit cards are recognized.
#[must_use]
pub fn normalize_card(raw: &str) -> Option<String> {
    let digits = ascii_digits(raw);
    (digits.len() == 16).then_some(digits)
}
