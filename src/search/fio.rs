//! Full-name (FIO) heuristic.
//!
//! Russian names are accepted as a bare surname or as two or three parts,
//! initials included. Latin names need at least two parts and one
//! capitalized token so that lowercase handles such as `cryptoguy` stay
//! nicknames.

use regex::Regex;
use std::sync::LazyLock;

/// A single initial, optionally followed by a period: `И`, `И.`, `J.`.
static INITIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-ЯЁ]\.?$").unwrap_or_else(|_| unreachable!()));

/// A name word with at most one internal hyphen: `Анна-Мария`.
static NAME_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zА-Яа-яЁё]+(?:-[A-Za-zА-Яа-яЁё]+)?$").unwrap_or_else(|_| unreachable!())
});

static CYRILLIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[А-Яа-яЁё]").unwrap_or_else(|_| unreachable!()));

static LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").unwrap_or_else(|_| unreachable!()));

/// Maximum number of name parts (surname, given name, patronymic).
const MAX_TOKENS: usize = 3;

fn token_ok(token: &str) -> bool {
    INITIAL.is_match(token) || NAME_WORD.is_match(token)
}

/// Returns `true` when `text` reads as a person's full name.
///
/// `text` is expected to be whitespace-normalized already.
#[must_use]
pub fn looks_like_fio(text: &str) -> bool {
    let tokens: Vec<&str> = text.split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.is_empty() || tokens.len() > MAX_TOKENS {
        return false;
    }

    if !tokens.iter().all(|t| token_ok(t)) {
        return false;
    }

    if CYRILLIC.is_match(text) {
        return true;
    }

    LATIN.is_match(text)
        && tokens.len() >= 2
        && tokens
            .iter()
            .any(|t| t.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_surname("Иванов", true)]
    #[case::lowercase_surname("иванов", true)]
    #[case::full_ru("Иванов Иван Иванович", true)]
    #[case::with_initials("Иванов И. И.", true)]
    #[case::hyphenated("Анна-Мария Петрова", true)]
    #[case::latin_title("John Smith", true)]
    #[case::latin_initial("J. Smith", true)]
    #[case::latin_lowercase("john smith", false)]
    #[case::latin_single("John", false)]
    #[case::too_many_tokens("Иванов Иван Иванович Младший", false)]
    #[case::digits("Иван 2", false)]
    #[case::double_hyphen("Анна-Мария-Луиза", false)]
    #[case::lowercase_cyrillic_initial("Иванов и.", false)]
    #[case::empty("", false)]
    fn test_looks_like_fio(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(looks_like_fio(input), expected, "input: {input:?}");
    }
}
