//! Seed data for the built-in counterparty directory, deals, team and
//! statistics.

use crate::domain::{
    ActivityItem, ChatMessage, CounterpartyProfile, Deal, DealEvent, DealOutcome, DealReview,
    DealSide, DealStatus, Exchange, HistoryEntry, MemberPerformance, MemberRole, Presence,
    StatsSummary, TeamMember, TeamNote,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ============================================================================
// Counterparties
// ============================================================================

struct ProfileSeed {
    uid: &'static str,
    nickname: &'static str,
    exchange: Exchange,
    score: u8,
    deals: u32,
    complaints: u32,
    age: &'static str,
    phones: &'static [&'static str],
    cards: &'static [&'static str],
    names: &'static [&'static str],
    banks: &'static [&'static str],
    checks: u32,
    tags: &'static [&'static str],
}

const PROFILES: [ProfileSeed; 8] = [
    ProfileSeed {
        uid: "132465789",
        nickname: "billigans",
        exchange: Exchange::Htx,
        score: 45,
        deals: 89,
        complaints: 7,
        age: "2 months",
        phones: &["+79991234567"],
        cards: &["1234567890123456"],
        names: &["Петров Петр"],
        banks: &["Sber", "Tinkoff"],
        checks: 234,
        tags: &["normal"],
    },
    ProfileSeed {
        uid: "987654321",
        nickname: "trader123",
        exchange: Exchange::Bybit,
        score: 92,
        deals: 412,
        complaints: 0,
        age: "3 years",
        phones: &["+79035557788"],
        cards: &["4276380012345678"],
        names: &["Smirnov Alexey", "Смирнов Алексей"],
        banks: &["Sber"],
        checks: 518,
        tags: &["reliable", "fast"],
    },
    ProfileSeed {
        uid: "555666777",
        nickname: "crypto_pro",
        exchange: Exchange::Htx,
        score: 22,
        deals: 31,
        complaints: 12,
        age: "3 weeks",
        phones: &["+79260001122"],
        cards: &["5536913700001111"],
        names: &["Иванов Иван Иванович"],
        banks: &["Tinkoff", "Alfa"],
        checks: 147,
        tags: &["complaints", "dispute"],
    },
    ProfileSeed {
        uid: "111222333",
        nickname: "fast_trader",
        exchange: Exchange::Bybit,
        score: 88,
        deals: 260,
        complaints: 1,
        age: "1 year",
        phones: &["+79161112233"],
        cards: &["2200150012345678"],
        names: &["Кузнецова Анна"],
        banks: &["VTB"],
        checks: 301,
        tags: &["reliable"],
    },
    ProfileSeed {
        uid: "999888777",
        nickname: "mexc_user",
        exchange: Exchange::Mexc,
        score: 60,
        deals: 74,
        complaints: 2,
        age: "8 months",
        phones: &[],
        cards: &["4100110022003300"],
        names: &["John Miller"],
        banks: &["Raiffeisen"],
        checks: 66,
        tags: &["normal"],
    },
    ProfileSeed {
        uid: "445566778",
        nickname: "gate_friendly",
        exchange: Exchange::Gate,
        score: 80,
        deals: 150,
        complaints: 1,
        age: "1 year",
        phones: &["+79847776655"],
        cards: &[],
        names: &["Соколов Дмитрий"],
        banks: &["Sber"],
        checks: 98,
        tags: &["reliable"],
    },
    ProfileSeed {
        uid: "120045500",
        nickname: "bitget_slow",
        exchange: Exchange::Bitget,
        score: 35,
        deals: 40,
        complaints: 4,
        age: "5 months",
        phones: &["+79501234000"],
        cards: &["5469380041112222"],
        names: &["Морозов Олег"],
        banks: &["Tinkoff"],
        checks: 120,
        tags: &["slow"],
    },
    ProfileSeed {
        uid: "700800900",
        nickname: "crypto_king",
        exchange: Exchange::Okx,
        score: 74,
        deals: 198,
        complaints: 2,
        age: "2 years",
        phones: &["+79991234567"],
        cards: &[],
        names: &["Petrov Petr"],
        banks: &["Alfa"],
        checks: 210,
        tags: &["normal"],
    },
];

/// All counterparty profiles known to the directory.
pub(super) fn profiles() -> Vec<CounterpartyProfile> {
    PROFILES
        .iter()
        .map(|seed| CounterpartyProfile {
            uid: seed.uid.to_string(),
            nickname: seed.nickname.to_string(),
            exchange: seed.exchange,
            score: seed.score,
            deals_count: seed.deals,
            complaints_count: seed.complaints,
            account_age: seed.age.to_string(),
            phones: strings(seed.phones),
            cards: strings(seed.cards),
            names: strings(seed.names),
            banks: strings(seed.banks),
            check_count: seed.checks,
            deal_history: history_for(seed.uid),
            tags: strings(seed.tags),
        })
        .collect()
}

fn history_for(uid: &str) -> Vec<HistoryEntry> {
    let entry = |id: &str, trader: &str, outcome, tag: &str, comment: &str, date: &str| {
        HistoryEntry {
            id: id.to_string(),
            trader: trader.to_string(),
            outcome,
            tag: tag.to_string(),
            comment: comment.to_string(),
            date: date.to_string(),
        }
    };
    match uid {
        "132465789" => vec![entry(
            "h1",
            "Team Pro",
            DealOutcome::Success,
            "Exchange",
            "Normal deal",
            "22.01.2026",
        )],
        "555666777" => vec![
            entry(
                "h1",
                "Alpha Desk",
                DealOutcome::Dispute,
                "Chargeback",
                "Payment reversed after release",
                "18.01.2026",
            ),
            entry(
                "h2",
                "Team Pro",
                DealOutcome::Cancelled,
                "Exchange",
                "Stopped answering",
                "12.01.2026",
            ),
        ],
        "987654321" => vec![entry(
            "h1",
            "North P2P",
            DealOutcome::Success,
            "Exchange",
            "Paid in two minutes",
            "20.01.2026",
        )],
        _ => Vec::new(),
    }
}

// ============================================================================
// Deals
// ============================================================================

struct DealSeed {
    id: &'static str,
    exchange: Exchange,
    counterparty: &'static str,
    uid: &'static str,
    amount: f64,
    status: DealStatus,
    date: &'static str,
    rate: f64,
    total: f64,
    side: DealSide,
    risks: &'static [&'static str],
}

const MY_DEALS: [DealSeed; 5] = [
    DealSeed {
        id: "1",
        exchange: Exchange::Htx,
        counterparty: "billigans",
        uid: "132465789",
        amount: 1500.0,
        status: DealStatus::Active,
        date: "2026-01-25",
        rate: 85.64,
        total: 128_460.0,
        side: DealSide::Buy,
        risks: &["Low rating", "New account"],
    },
    DealSeed {
        id: "2",
        exchange: Exchange::Bybit,
        counterparty: "trader123",
        uid: "987654321",
        amount: 3200.0,
        status: DealStatus::Completed,
        date: "2026-01-24",
        rate: 85.20,
        total: 272_640.0,
        side: DealSide::Sell,
        risks: &[],
    },
    DealSeed {
        id: "3",
        exchange: Exchange::Htx,
        counterparty: "crypto_pro",
        uid: "555666777",
        amount: 850.0,
        status: DealStatus::Dispute,
        date: "2026-01-23",
        rate: 85.10,
        total: 72_335.0,
        side: DealSide::Buy,
        risks: &["Complaints from other teams"],
    },
    DealSeed {
        id: "4",
        exchange: Exchange::Bybit,
        counterparty: "fast_trader",
        uid: "111222333",
        amount: 2000.0,
        status: DealStatus::Completed,
        date: "2026-01-22",
        rate: 84.90,
        total: 169_800.0,
        side: DealSide::Buy,
        risks: &[],
    },
    DealSeed {
        id: "5",
        exchange: Exchange::Mexc,
        counterparty: "mexc_user",
        uid: "999888777",
        amount: 5000.0,
        status: DealStatus::Cancelled,
        date: "2026-01-20",
        rate: 85.50,
        total: 427_500.0,
        side: DealSide::Sell,
        risks: &[],
    },
];

const TEAM_DEALS: [(DealSeed, &str); 2] = [
    (
        DealSeed {
            id: "t1",
            exchange: Exchange::Gate,
            counterparty: "gate_friendly",
            uid: "445566778",
            amount: 900.0,
            status: DealStatus::Active,
            date: "2026-01-26",
            rate: 86.05,
            total: 77_445.0,
            side: DealSide::Sell,
            risks: &[],
        },
        "@team_member1",
    ),
    (
        DealSeed {
            id: "t2",
            exchange: Exchange::Bitget,
            counterparty: "bitget_slow",
            uid: "120045500",
            amount: 2500.0,
            status: DealStatus::Dispute,
            date: "2026-01-26",
            rate: 85.8,
            total: 214_500.0,
            side: DealSide::Buy,
            risks: &["Confirmation delay", "Has complaints"],
        },
        "@team_member2",
    ),
];

/// Owner under whom our own deals appear in the team view.
pub(super) const TEAM_OWNER: &str = "@owner_user";

fn build_deal(seed: &DealSeed, owner: Option<&str>) -> Deal {
    let created = DealEvent {
        timestamp: format!("{} 10:00", seed.date),
        action: "Deal created".to_string(),
    };
    let mut history = vec![created];
    history.push(DealEvent {
        timestamp: format!("{} 10:05", seed.date),
        action: match seed.status {
            DealStatus::Active => "Awaiting payment",
            DealStatus::Completed => "Deal completed",
            DealStatus::Cancelled => "Deal cancelled",
            DealStatus::Dispute => "Appeal opened",
        }
        .to_string(),
    });

    let reviews = match seed.id {
        "2" => vec![DealReview {
            author: "@me".to_string(),
            rating: 5,
            text: "Fast and reliable!".to_string(),
        }],
        "4" => vec![DealReview {
            author: "@me".to_string(),
            rating: 5,
            text: "Great counterparty".to_string(),
        }],
        _ => Vec::new(),
    };

    Deal {
        id: seed.id.to_string(),
        exchange: seed.exchange,
        counterparty: seed.counterparty.to_string(),
        uid: seed.uid.to_string(),
        amount: seed.amount,
        currency: "USDT".to_string(),
        status: seed.status,
        date: seed.date.to_string(),
        rate: seed.rate,
        total: seed.total,
        side: seed.side,
        owner: owner.map(str::to_string),
        risks: strings(seed.risks),
        history,
        reviews,
    }
}

pub(super) fn my_deals() -> Vec<Deal> {
    MY_DEALS.iter().map(|seed| build_deal(seed, None)).collect()
}

pub(super) fn team_deals() -> Vec<Deal> {
    TEAM_DEALS
        .iter()
        .map(|(seed, owner)| build_deal(seed, Some(owner)))
        .chain(MY_DEALS.iter().map(|seed| build_deal(seed, Some(TEAM_OWNER))))
        .collect()
}

// ============================================================================
// Team
// ============================================================================

pub(super) fn members() -> Vec<TeamMember> {
    let member = |id: &str, username: &str, role, presence, deals_count| TeamMember {
        id: id.to_string(),
        username: username.to_string(),
        role,
        presence,
        deals_count,
    };
    vec![
        member("U-10001", "@owner_user", MemberRole::Owner, Presence::Online, 47),
        member("U-10002", "@team_member1", MemberRole::Member, Presence::Online, 23),
        member("U-10003", "@team_member2", MemberRole::Member, Presence::Offline, 15),
    ]
}

pub(super) fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            sender: "@owner_user".to_string(),
            text: "Check counterparty 132465789".to_string(),
            timestamp: "14:30".to_string(),
            pinned: false,
            from_me: false,
        },
        ChatMessage {
            id: 2,
            sender: "@me".to_string(),
            text: "Checked, high risk, not recommended".to_string(),
            timestamp: "14:32".to_string(),
            pinned: true,
            from_me: true,
        },
    ]
}

pub(super) fn notes() -> Vec<TeamNote> {
    vec![
        TeamNote {
            id: 1,
            author: "@owner_user".to_string(),
            text: "Counterparty 132465789 on HTX is a scammer, do not trade".to_string(),
            date: "24.01.2026".to_string(),
            pinned: true,
            from_me: false,
        },
        TeamNote {
            id: 2,
            author: "@me".to_string(),
            text: "Verified counterparty 987654321 is a reliable partner".to_string(),
            date: "25.01.2026".to_string(),
            pinned: false,
            from_me: true,
        },
    ]
}

// ============================================================================
// Statistics
// ============================================================================

pub(super) fn my_stats() -> StatsSummary {
    StatsSummary {
        deals: 142,
        completed: 118,
        cancelled: 15,
        appeals: 9,
        checks: 234,
        avg_check: 128_000,
        last_activity: None,
    }
}

pub(super) fn team_stats() -> StatsSummary {
    StatsSummary {
        deals: 487,
        completed: 423,
        cancelled: 38,
        appeals: 26,
        checks: 892,
        avg_check: 145_000,
        last_activity: Some("2 minutes ago".to_string()),
    }
}

pub(super) fn performance() -> Vec<MemberPerformance> {
    let row = |id: &str, username: &str, deals, completed, appeals, checks, last: &str| {
        MemberPerformance {
            id: id.to_string(),
            username: username.to_string(),
            deals,
            completed,
            appeals,
            checks,
            last_active: last.to_string(),
        }
    };
    vec![
        row("U-10001", "@owner_user", 142, 118, 9, 234, "2 min ago"),
        row("U-10002", "@team_member1", 185, 170, 7, 361, "12 min ago"),
        row("U-10003", "@team_member2", 160, 135, 10, 297, "1 h ago"),
    ]
}

pub(super) fn activity() -> Vec<ActivityItem> {
    let item = |id: &str, username: &str, action: &str, details: &str, time: &str| ActivityItem {
        id: id.to_string(),
        username: username.to_string(),
        action: action.to_string(),
        details: details.to_string(),
        time: time.to_string(),
    };
    vec![
        item(
            "a1",
            "@owner_user",
            "Counterparty check",
            "UID 132465789 (HTX)",
            "2 min ago",
        ),
        item(
            "a2",
            "@team_member1",
            "Created deal",
            "1500 USDT (ByBit)",
            "12 min ago",
        ),
        item(
            "a3",
            "@team_member2",
            "Closed deal",
            "2000 USDT (OKX)",
            "1 h ago",
        ),
    ]
}
