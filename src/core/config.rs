//! Rules configuration.
//!
//! Fixed rule constants (grid size, safety threshold, share cap) are plain
//! consts. The knobs a table may house-rule live in `RulesConfig`, built
//! with `Default` plus `with_*` setters:
//!
//! ```
//! use acquire_engine::core::RulesConfig;
//!
//! let config = RulesConfig::default()
//!     .with_starting_cash(8000)
//!     .with_founder_shares(2);
//! assert_eq!(config.starting_cash, 8000);
//! assert_eq!(config.bonus.majority_multiple, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Hotels with at least this many tiles are safe from acquisition.
pub const SAFE_HOTEL_SIZE: usize = 11;

/// Maximum shares a hotel may have outstanding.
pub const MAX_SHARES: u32 = 25;

/// Smallest hotel that can exist (and the smallest that has a price).
pub const MIN_HOTEL_SIZE: usize = 2;

/// Merger bonus schedule, in multiples of the dissolving hotel's share price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusSchedule {
    /// Paid to the single largest holder.
    pub majority_multiple: u32,

    /// Split among the second-largest holders.
    pub minority_multiple: u32,

    /// When one player holds every share, pay them both bonuses instead of
    /// rejecting the merger.
    pub sole_shareholder_takes_both: bool,
}

impl Default for BonusSchedule {
    fn default() -> Self {
        Self {
            majority_multiple: 10,
            minority_multiple: 5,
            sole_shareholder_takes_both: false,
        }
    }
}

impl BonusSchedule {
    /// Combined pool, shared when the majority is tied.
    #[must_use]
    pub const fn pooled_multiple(&self) -> u32 {
        self.majority_multiple + self.minority_multiple
    }
}

/// Table rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Cash each player starts with.
    pub starting_cash: u32,

    /// Tiles dealt to each rack at setup.
    pub hand_size: usize,

    /// Free shares granted to the founder of a hotel.
    pub founder_shares: u32,

    /// Maximum shares one player may buy per turn.
    pub shares_per_turn: usize,

    /// Largest roster `Setup` accepts.
    pub max_players: usize,

    /// Merger bonus schedule.
    pub bonus: BonusSchedule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_cash: 6000,
            hand_size: 6,
            founder_shares: 1,
            shares_per_turn: 3,
            max_players: 6,
            bonus: BonusSchedule::default(),
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_starting_cash(mut self, cash: u32) -> Self {
        self.starting_cash = cash;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_founder_shares(mut self, shares: u32) -> Self {
        self.founder_shares = shares;
        self
    }

    #[must_use]
    pub fn with_shares_per_turn(mut self, shares: usize) -> Self {
        self.shares_per_turn = shares;
        self
    }

    #[must_use]
    pub fn with_max_players(mut self, players: usize) -> Self {
        self.max_players = players;
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: BonusSchedule) -> Self {
        self.bonus = bonus;
        self
    }

    /// Let a sole shareholder collect both merger bonuses.
    #[must_use]
    pub fn sole_shareholder_takes_both(mut self) -> Self {
        self.bonus.sole_shareholder_takes_both = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.starting_cash, 6000);
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.founder_shares, 1);
        assert_eq!(config.shares_per_turn, 3);
        assert_eq!(config.bonus.pooled_multiple(), 15);
        assert!(!config.bonus.sole_shareholder_takes_both);
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_hand_size(4)
            .with_shares_per_turn(2)
            .with_max_players(4)
            .sole_shareholder_takes_both();

        assert_eq!(config.hand_size, 4);
        assert_eq!(config.shares_per_turn, 2);
        assert_eq!(config.max_players, 4);
        assert!(config.bonus.sole_shareholder_takes_both);
    }

    #[test]
    fn test_config_serde() {
        let config = RulesConfig::default().with_founder_shares(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
