//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting setup code across tests.
#![allow(dead_code)]

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::client::LoupeClient;
use crate::domain::{
    CounterpartyProfile, Deal, DealEvent, DealSide, DealStatus, Exchange, Feedback, Plan,
    TeamState,
};
use crate::state::platform::ClipboardManager;
use crate::state::{App, AppConfig, StartupOptions};
use crate::store::MemoryStore;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Counterparty profiles from the built-in directory.
pub struct ProfileMother;

impl ProfileMother {
    fn by_uid(uid: &str) -> CounterpartyProfile {
        LoupeClient::new()
            .profile_by_uid(uid)
            .expect("directory should contain the profile")
    }

    /// HTX, medium risk, shares a phone with `crypto_king`.
    #[must_use]
    pub fn billigans() -> CounterpartyProfile {
        Self::by_uid("132465789")
    }

    /// ByBit, low risk, no complaints.
    #[must_use]
    pub fn trader123() -> CounterpartyProfile {
        Self::by_uid("987654321")
    }

    #[must_use]
    pub fn crypto_king() -> CounterpartyProfile {
        Self::by_uid("700800900")
    }
}

pub struct DealMother;

impl DealMother {
    /// A completed ByBit buy with no risk reasons.
    #[must_use]
    pub fn basic(id: &str) -> Deal {
        Deal {
            id: id.to_string(),
            exchange: Exchange::Bybit,
            counterparty: "trader123".to_string(),
            uid: "987654321".to_string(),
            amount: 1_000.0,
            currency: "USDT".to_string(),
            status: DealStatus::Completed,
            date: "2026-01-25".to_string(),
            rate: 85.64,
            total: 85_640.0,
            side: DealSide::Buy,
            owner: None,
            risks: Vec::new(),
            history: vec![DealEvent {
                timestamp: "2026-01-25 14:30".to_string(),
                action: "Deal created".to_string(),
            }],
            reviews: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_status(status: DealStatus) -> Deal {
        Deal {
            status,
            ..Self::basic("D-1")
        }
    }

    #[must_use]
    pub fn with_risks(risks: &[&str]) -> Deal {
        Deal {
            risks: risks.iter().map(|r| (*r).to_string()).collect(),
            ..Self::basic("D-1")
        }
    }
}

pub struct TeamMother;

impl TeamMother {
    /// The seeded "Arbitrage" team: an owner, two members, one message and
    /// one note of ours next to ones from the owner.
    #[must_use]
    pub fn arbitrage() -> TeamState {
        let client = LoupeClient::new();
        TeamState {
            name: "Arbitrage".to_string(),
            members: client.team_members(),
            messages: client.default_messages(),
            notes: client.default_notes(),
        }
    }
}

pub struct FeedbackMother;

impl FeedbackMother {
    #[must_use]
    pub fn happy() -> Feedback {
        Feedback::new(5, vec!["Speed".to_string()], "Works great").expect("valid feedback")
    }
}

// ============================================================================
// App Factories
// ============================================================================

pub struct AppMother;

impl AppMother {
    /// In-memory app without stored feedback, on the Free plan.
    #[must_use]
    pub fn fresh() -> App {
        Self::with_store(MemoryStore::default())
    }

    /// In-memory app over `store`, instant lookups and a fake clipboard.
    #[must_use]
    pub fn with_store(store: MemoryStore) -> App {
        App::with_services(
            StartupOptions::default(),
            AppConfig::default(),
            None,
            Box::new(store),
            LoupeClient::new().with_latency(Duration::ZERO),
            ClipboardManager::in_memory(),
        )
    }

    /// Feedback already left, so lookups run straight away.
    #[must_use]
    pub fn onboarded() -> App {
        let mut app = Self::fresh();
        app.data.feedback = Some(FeedbackMother::happy());
        app
    }

    #[must_use]
    pub fn on_plan(plan: Plan) -> App {
        let mut app = Self::onboarded();
        app.data.plan = plan;
        app
    }
}

// ============================================================================
// Terminal Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Rendered buffer as plain text, one line per row.
#[must_use]
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
