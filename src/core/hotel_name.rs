//! The seven hotel chains.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// A hotel chain name. Variants are declared alphabetically, so `Ord`
/// matches the alphabetical order used for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HotelName {
    American,
    Continental,
    Festival,
    Imperial,
    Sackson,
    Tower,
    Worldwide,
}

/// Price table grouping.
///
/// Tier A is the cheapest chain pair, tier C the most expensive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    /// Worldwide, Sackson.
    A,
    /// Festival, Imperial, American.
    B,
    /// Continental, Tower.
    C,
}

impl HotelName {
    /// All chains, alphabetical.
    pub const ALL: [HotelName; 7] = [
        HotelName::American,
        HotelName::Continental,
        HotelName::Festival,
        HotelName::Imperial,
        HotelName::Sackson,
        HotelName::Tower,
        HotelName::Worldwide,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HotelName::American => "American",
            HotelName::Continental => "Continental",
            HotelName::Festival => "Festival",
            HotelName::Imperial => "Imperial",
            HotelName::Sackson => "Sackson",
            HotelName::Tower => "Tower",
            HotelName::Worldwide => "Worldwide",
        }
    }

    /// Board color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            HotelName::American => "red",
            HotelName::Continental => "blue",
            HotelName::Festival => "green",
            HotelName::Imperial => "yellow",
            HotelName::Sackson => "purple",
            HotelName::Tower => "brown",
            HotelName::Worldwide => "orange",
        }
    }

    #[must_use]
    pub const fn tier(self) -> PriceTier {
        match self {
            HotelName::Worldwide | HotelName::Sackson => PriceTier::A,
            HotelName::Festival | HotelName::Imperial | HotelName::American => PriceTier::B,
            HotelName::Continental | HotelName::Tower => PriceTier::C,
        }
    }
}

impl std::fmt::Display for HotelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelName {
    type Err = EngineError;

    /// Exact, case-sensitive match on the chain name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotelName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| EngineError::UnknownHotel(s.to_string()))
    }
}
