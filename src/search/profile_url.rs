//! Profile link detection and exchange attribution.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Exchange;

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap_or_else(|_| unreachable!()));

/// Exchange domain rules, tested in order.
static EXCHANGE_URL_RULES: LazyLock<Vec<(Exchange, Regex)>> = LazyLock::new(|| {
    [
        (Exchange::Htx, r"(?i)https?://(?:www\.)?(?:htx|huobi)\.[^\s/]+"),
        (Exchange::Bybit, r"(?i)https?://(?:www\.)?bybit\.[^\s/]+"),
        (Exchange::Okx, r"(?i)https?://(?:www\.)?okx\.[^\s/]+"),
        (Exchange::Gate, r"(?i)https?://(?:www\.)?gate\.(?:io|com)(?-u:\b)"),
        (Exchange::Mexc, r"(?i)https?://(?:www\.)?mexc\.[^\s/]+"),
        (Exchange::Bitget, r"(?i)https?://(?:www\.)?bitget\.[^\s/]+"),
    ]
    .into_iter()
    .map(|(exchange, pattern)| {
        (
            exchange,
            Regex::new(pattern).unwrap_or_else(|_| unreachable!()),
        )
    })
    .collect()
});

/// Returns `true` when `text` starts with an `http://` or `https://` scheme.
#[must_use]
pub fn is_url(text: &str) -> bool {
    URL_SCHEME.is_match(text)
}

/// Attributes a link to the first exchange whose domain rule matches.
#[must_use]
pub fn detect_exchange(url: &str) -> Option<Exchange> {
    EXCHANGE_URL_RULES
        .iter()
        .find(|(_, re)| re.is_match(url))
        .map(|(exchange, _)| *exchange)
}

/// Last non-empty path segment of a link, without query or fragment.
///
/// Used by lookups to pull a UID or nickname out of a profile URL.
#[must_use]
pub fn last_path_segment(url: &str) -> Option<&str> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    // The first segment is the host.
    segments.next()?;
    segments.last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::htx("https://www.htx.com/ru-ru/fiat/trade/user/1", Some(Exchange::Htx))]
    #[case::huobi("http://huobi.com/user/1", Some(Exchange::Htx))]
    #[case::bybit("https://www.bybit.com/profile/123", Some(Exchange::Bybit))]
    #[case::okx_upper("HTTPS://OKX.COM/p2p/abc", Some(Exchange::Okx))]
    #[case::gate_io("https://gate.io/c2c/u/7", Some(Exchange::Gate))]
    #[case::gate_com("https://www.gate.com", Some(Exchange::Gate))]
    #[case::gate_other_tld("https://gate.xyz/u/7", None)]
    #[case::gate_cyrillic_suffix("https://gate.ioя/u/7", Some(Exchange::Gate))]
    #[case::gate_longer_tld("https://gate.iox/u/7", None)]
    #[case::mexc("https://mexc.com/u", Some(Exchange::Mexc))]
    #[case::bitget("https://www.bitget.com/p2p/x", Some(Exchange::Bitget))]
    #[case::unknown("https://example.com/profile/1", None)]
    fn test_detect_exchange(#[case] url: &str, #[case] expected: Option<Exchange>) {
        assert_eq!(detect_exchange(url), expected);
    }

    #[rstest]
    #[case::https("https://x.y", true)]
    #[case::mixed_case("HtTp://x.y", true)]
    #[case::no_scheme("www.bybit.com", false)]
    #[case::ftp("ftp://x.y", false)]
    fn test_is_url(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_url(text), expected);
    }

    #[rstest]
    #[case::uid("https://www.bybit.com/profile/123", Some("123"))]
    #[case::trailing_slash("https://okx.com/p2p/trader_x/", Some("trader_x"))]
    #[case::query("https://mexc.com/u/77?lang=ru#top", Some("77"))]
    #[case::host_only("https://gate.io", None)]
    fn test_last_path_segment(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(last_path_segment(url), expected);
    }
}
