//! # acquire-engine
//!
//! A rules engine for the hotel-chain tile game Acquire.
//!
//! Given a board and a candidate tile, the engine classifies the move,
//! validates it against the game's invariants and applies the transition:
//! placing an unclaimed tile, founding a hotel, growing one, or merging two
//! or more with shareholder bonuses paid out.
//!
//! ## Design Principles
//!
//! 1. **Classify, then execute**: `rules::classify` is a pure function of
//!    board and tile. The executors in `rules::executor` are the only
//!    rule-driven mutators.
//!
//! 2. **No partial moves**: every check runs before anything changes.
//!    Multi-hotel moves run on staged copies and commit together.
//!
//! 3. **Persistent Data Structures**: O(1) cloning via `im-rs`, so a caller
//!    can snapshot a `Game` before every command.
//!
//! ## Modules
//!
//! - `core`: tiles, hotel names, players, rules configuration, RNG
//! - `board`: board state, hotels, certificates, connectivity
//! - `rules`: classifier, executors, dividends, pricing
//! - `game`: setup, commands and turn order
//! - `error`: `EngineError` and its stable error codes

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BonusSchedule, HotelName, Player, PlayerId, PlayerMap, PriceTier, RulesConfig, Tile,
};

pub use crate::board::{Board, Certificate, Hotel, Occupant};

pub use crate::rules::{
    classify, ImpossibleReason, MergeOutcome, MoveClassification, Payout,
};

pub use crate::game::{Command, CommandOutcome, Game, Placement, Setup};

pub use crate::error::{EngineError, EngineResult, ErrorKind};
