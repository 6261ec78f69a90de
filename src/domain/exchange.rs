//! Supported P2P exchanges.
//!
//! Every deal and counterparty profile belongs to one of these venues, and
//! profile links are attributed to them by the search classifier.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Exchange
// ============================================================================

/// A P2P exchange the team trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Htx,
    Bybit,
    Okx,
    Gate,
    Mexc,
    Bitget,
}

impl Exchange {
    /// All exchanges in display order.
    pub const ALL: [Self; 6] = [
        Self::Htx,
        Self::Bybit,
        Self::Okx,
        Self::Gate,
        Self::Mexc,
        Self::Bitget,
    ];

    /// Stable lowercase identifier, as used in JSON and on the command line.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Htx => "htx",
            Self::Bybit => "bybit",
            Self::Okx => "okx",
            Self::Gate => "gate",
            Self::Mexc => "mexc",
            Self::Bitget => "bitget",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Htx => "HTX",
            Self::Bybit => "ByBit",
            Self::Okx => "OKX",
            Self::Gate => "Gate",
            Self::Mexc => "MEXC",
            Self::Bitget => "Bitget",
        }
    }

    /// Brand color used for exchange badges.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Htx | Self::Mexc => Color::Rgb(0x00, 0xC8, 0x53),
            Self::Bybit => Color::Rgb(0xFF, 0xA0, 0x00),
            Self::Okx => Color::Rgb(0xFF, 0xFF, 0xFF),
            Self::Gate => Color::Rgb(0x21, 0x96, 0xF3),
            Self::Bitget => Color::Rgb(0xDD, 0xFF, 0x00),
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase_ids() {
        for exchange in Exchange::ALL {
            let json = serde_json::to_string(&exchange).unwrap();
            assert_eq!(json, format!("\"{}\"", exchange.id()));
        }
        assert_eq!(Exchange::Okx.to_string(), "OKX");
    }
}
