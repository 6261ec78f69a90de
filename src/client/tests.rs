use std::time::Duration;

use super::*;
use crate::domain::{DealStatus, Exchange};
use crate::search::{SearchType, classify};
use rstest::rstest;

fn client() -> LoupeClient {
    LoupeClient::new().with_latency(Duration::ZERO)
}

fn uids(profiles: &[CounterpartyProfile]) -> Vec<&str> {
    profiles.iter().map(|p| p.uid.as_str()).collect()
}

#[rstest]
#[case::uid("132465789", &["132465789"])]
#[case::phone_eight("8 (999) 123-45-67", &["132465789", "700800900"])]
#[case::card_spaced("1234 5678 9012 3456", &["132465789"])]
#[case::fio_surname("Иванов", &["555666777"])]
#[case::fio_latin("Petrov Petr", &["700800900"])]
#[case::nickname_substring("crypto", &["555666777", "700800900"])]
#[case::nickname_case("TRADER", &["987654321", "111222333"])]
#[case::link_uid("https://www.bybit.com/profile/987654321", &["987654321"])]
#[case::link_wrong_exchange("https://www.okx.com/profile/987654321", &[])]
#[case::link_nickname("https://www.okx.com/p2p/crypto_king", &["700800900"])]
#[case::link_unknown_domain("https://example.com/u/132465789", &["132465789"])]
#[case::unknown_uid("000000001", &[])]
fn test_find(#[case] query: &str, #[case] expected: &[&str]) {
    let found = client().find(&classify(query));
    assert_eq!(uids(&found), expected, "query: {query:?}");
}

#[test]
fn test_empty_nickname_finds_nothing() {
    let parsed = classify("");
    assert_eq!(parsed.search_type, SearchType::Nickname);
    assert!(client().find(&parsed).is_empty());
}

#[tokio::test]
async fn test_lookup_rejects_empty_query() {
    let err = client().lookup(&classify("   ")).await.unwrap_err();
    assert!(matches!(err, LoupeError::InvalidInput(_)));
}

#[tokio::test]
async fn test_lookup_returns_matches() {
    let found = client().lookup(&classify("89991234567")).await.unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_team_deals_carry_owner() {
    let client = client();
    let my = client.my_deals();
    let team = client.team_deals();
    assert_eq!(team.len(), my.len() + 2);
    assert!(my.iter().all(|d| d.owner.is_none()));
    assert!(team.iter().all(|d| d.owner.is_some()));
    assert!(
        team.iter()
            .any(|d| d.exchange == Exchange::Bitget && d.status == DealStatus::Dispute)
    );
}

#[test]
fn test_profile_by_uid() {
    let client = client();
    assert_eq!(client.profile_by_uid("987654321").unwrap().nickname, "trader123");
    assert!(matches!(
        client.profile_by_uid("42"),
        Err(LoupeError::NotFound { .. })
    ));
}

#[test]
fn test_search_hint() {
    assert!(search_hint(&classify("")).starts_with("Enter a UID"));
    insta::assert_snapshot!(
        search_hint(&classify("8 999 123 45 67")),
        @"Search by phone: +79991234567"
    );
    insta::assert_snapshot!(
        search_hint(&classify("https://www.bybit.com/profile/1")),
        @"Search by link: https://www.bybit.com/profile/1 (ByBit)"
    );
}
