//! Acquire rules: what a tile placement means and how it changes the board.
//!
//! - `classify`: pure inspection of a candidate tile
//! - `executor`: singleton, founding, growing and merging transitions
//! - `dividends`: majority/minority bonuses on dissolution
//! - `pricing`: share price table and stock purchase

pub mod classify;
pub mod dividends;
pub mod executor;
pub mod pricing;

pub use classify::{classify, ImpossibleReason, MoveClassification};
pub use dividends::{distribute_dividends, BonusKind, Payout};
pub use executor::{
    found_hotel, grow_hotel, merge_hotels, place_singleton, plan_merge, AcquiredHotel,
    MergeOutcome, MergePlan,
};
pub use pricing::{buy_share, current_price, share_price};
