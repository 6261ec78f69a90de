//! Subscription plans, the capabilities they grant, and the USDT payment
//! flow used to buy them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange rate shown in the header and used for USDT prices, ₽ per USDT.
pub const USDT_RATE: f64 = 85.64;

// ============================================================================
// Plans
// ============================================================================

/// A subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Light,
    Basic,
    Pro,
}

/// Feature switches derived from a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_write_chat: bool,
    pub can_use_deals: bool,
    pub can_use_team: bool,
    pub can_use_stats: bool,
    /// `None` means unlimited.
    pub max_team_members: Option<usize>,
}

impl Plan {
    pub const ALL: [Self; 4] = [Self::Free, Self::Light, Self::Basic, Self::Pro];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Light => "light",
            Self::Basic => "basic",
            Self::Pro => "pro",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Light => "Light",
            Self::Basic => "Basic",
            Self::Pro => "Pro",
        }
    }

    /// Monthly price in rubles.
    #[must_use]
    pub const fn price_rub(&self) -> u32 {
        match self {
            Self::Free => 0,
            Self::Light => 990,
            Self::Basic => 2490,
            Self::Pro => 4990,
        }
    }

    /// Monthly price converted to USDT at [`USDT_RATE`], rounded to cents.
    #[must_use]
    pub fn price_usdt(&self) -> f64 {
        usdt_amount(self.price_rub())
    }

    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::Free => Capabilities {
                can_write_chat: false,
                can_use_deals: false,
                can_use_team: false,
                can_use_stats: false,
                max_team_members: Some(1),
            },
            Self::Light => Capabilities {
                can_write_chat: true,
                can_use_deals: true,
                can_use_team: false,
                can_use_stats: true,
                max_team_members: Some(1),
            },
            Self::Basic => Capabilities {
                can_write_chat: true,
                can_use_deals: true,
                can_use_team: true,
                can_use_stats: true,
                max_team_members: Some(3),
            },
            Self::Pro => Capabilities {
                can_write_chat: true,
                can_use_deals: true,
                can_use_team: true,
                can_use_stats: true,
                max_team_members: None,
            },
        }
    }

    /// Marketing feature list shown on the plan card.
    #[must_use]
    pub const fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Free => &["Counterparty checks", "Search history"],
            Self::Light => &[
                "Up to 50 checks/month",
                "Up to 20 deals/month",
                "Basic statistics",
                "Email support",
            ],
            Self::Basic => &[
                "Up to 200 checks/month",
                "Up to 100 deals/month",
                "Extended statistics",
                "Team work (up to 3)",
                "Priority support",
            ],
            Self::Pro => &[
                "Unlimited checks",
                "Unlimited deals",
                "Full analytics",
                "Team work (unlimited)",
                "VIP support 24/7",
                "API access",
            ],
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Converts a ruble price to USDT, rounded to two decimals.
#[must_use]
pub fn usdt_amount(price_rub: u32) -> f64 {
    (f64::from(price_rub) / USDT_RATE * 100.0).round() / 100.0
}

// ============================================================================
// Payment
// ============================================================================

/// Blockchain network used to pay in USDT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentNetwork {
    #[default]
    Trc20,
    Bep20,
}

impl PaymentNetwork {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trc20 => "TRC20",
            Self::Bep20 => "BEP20",
        }
    }

    /// Wallet that receives payments on this network.
    #[must_use]
    pub const fn wallet(&self) -> &'static str {
        match self {
            Self::Trc20 => "TYourWalletAddressHere123456789",
            Self::Bep20 => "0xYourWalletAddressHere123456789",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Trc20 => Self::Bep20,
            Self::Bep20 => Self::Trc20,
        }
    }
}

/// Progress of a payment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    /// Waiting for the user to pay.
    #[default]
    Pending,
    /// The user reported the transfer; confirmation is in progress.
    Confirming,
    /// The plan has been activated.
    Confirmed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Awaiting payment",
            Self::Confirming => "Confirming payment...",
            Self::Confirmed => "Payment confirmed",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::free(Plan::Free, false, false, false, false, Some(1))]
    #[case::light(Plan::Light, true, true, false, true, Some(1))]
    #[case::basic(Plan::Basic, true, true, true, true, Some(3))]
    #[case::pro(Plan::Pro, true, true, true, true, None)]
    fn test_capabilities(
        #[case] plan: Plan,
        #[case] chat: bool,
        #[case] deals: bool,
        #[case] team: bool,
        #[case] stats: bool,
        #[case] max: Option<usize>,
    ) {
        let caps = plan.capabilities();
        assert_eq!(caps.can_write_chat, chat);
        assert_eq!(caps.can_use_deals, deals);
        assert_eq!(caps.can_use_team, team);
        assert_eq!(caps.can_use_stats, stats);
        assert_eq!(caps.max_team_members, max);
    }

    #[rstest]
    #[case(990, 11.56)]
    #[case(2490, 29.08)]
    #[case(4990, 58.27)]
    #[case(0, 0.0)]
    fn test_usdt_amount(#[case] rub: u32, #[case] expected: f64) {
        assert!((usdt_amount(rub) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_default_and_serde() {
        assert_eq!(Plan::default(), Plan::Free);
        assert_eq!(serde_json::to_string(&Plan::Basic).unwrap(), "\"basic\"");
    }

    #[test]
    fn test_payment_network_wallets_differ() {
        assert_ne!(
            PaymentNetwork::Trc20.wallet(),
            PaymentNetwork::Bep20.wallet()
        );
        assert_eq!(PaymentNetwork::Trc20.toggle(), PaymentNetwork::Bep20);
    }
}
