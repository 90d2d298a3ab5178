//! Core value types: tiles, hotel names, players, configuration, RNG.
//!
//! Everything here is game-state agnostic: no board, no rules. The board
//! and rules modules build on these.

pub mod tile;
pub mod hotel_name;
pub mod player;
pub mod config;
pub mod rng;

pub use tile::{Tile, COLUMNS, ROWS};
pub use hotel_name::{HotelName, PriceTier};
pub use player::{Player, PlayerId, PlayerMap, MAX_SEATS};
pub use config::{BonusSchedule, RulesConfig, MAX_SHARES, MIN_HOTEL_SIZE, SAFE_HOTEL_SIZE};
pub use rng::GameRng;
