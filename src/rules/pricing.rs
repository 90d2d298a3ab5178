//! Share prices and stock purchase.
//!
//! Price is a step function of hotel size. Each tier has one price per size
//! threshold; a hotel is priced at the highest threshold not above its size.
//!
//! | size   | tier A | tier B | tier C |
//! |--------|--------|--------|--------|
//! | 2      | 200    | 300    | 400    |
//! | 3      | 300    | 400    | 500    |
//! | 4      | 400    | 500    | 600    |
//! | 5      | 500    | 600    | 700    |
//! | 6-10   | 600    | 700    | 800    |
//! | 11-20  | 700    | 800    | 900    |
//! | 21-30  | 800    | 900    | 1000   |
//! | 31-40  | 900    | 1000   | 1100   |
//! | 41+    | 1000   | 1100   | 1200   |

use tracing::debug;

use crate::board::{Board, Hotel};
use crate::core::{HotelName, Player, PriceTier};
use crate::error::{EngineError, EngineResult};

/// Minimum size for each price step.
const THRESHOLDS: [usize; 9] = [2, 3, 4, 5, 6, 11, 21, 31, 41];

const TIER_A: [u32; 9] = [200, 300, 400, 500, 600, 700, 800, 900, 1000];
const TIER_B: [u32; 9] = [300, 400, 500, 600, 700, 800, 900, 1000, 1100];
const TIER_C: [u32; 9] = [400, 500, 600, 700, 800, 900, 1000, 1100, 1200];

fn table(tier: PriceTier) -> &'static [u32; 9] {
    match tier {
        PriceTier::A => &TIER_A,
        PriceTier::B => &TIER_B,
        PriceTier::C => &TIER_C,
    }
}

/// Per-share price of chain `name` at `size` tiles.
///
/// Hotels below two tiles cannot exist and have no price.
///
/// ```
/// use acquire_engine::core::HotelName;
/// use acquire_engine::rules::share_price;
///
/// assert_eq!(share_price(HotelName::Tower, 6).unwrap(), 800);
/// assert_eq!(share_price(HotelName::Sackson, 2).unwrap(), 200);
/// assert!(share_price(HotelName::American, 1).is_err());
/// ```
pub fn share_price(name: HotelName, size: usize) -> EngineResult<u32> {
    let step = THRESHOLDS
        .iter()
        .rposition(|&threshold| threshold <= size)
        .ok_or_else(|| {
            EngineError::inconsistent(format!("{name} has {size} tiles and no share price"))
        })?;
    Ok(table(name.tier())[step])
}

/// Current per-share price of an active hotel.
pub fn current_price(hotel: &Hotel) -> EngineResult<u32> {
    share_price(hotel.name(), hotel.size())
}

/// Buy one share of `name` for `player` at the current price.
///
/// Returns the price paid. Nothing changes unless the purchase succeeds.
pub fn buy_share(board: &mut Board, player: &mut Player, name: HotelName) -> EngineResult<u32> {
    let hotel = board.require_hotel(name)?;
    let price = current_price(hotel)?;
    if player.cash() < price {
        return Err(EngineError::InsufficientFunds {
            player: player.id(),
            cash: player.cash(),
            price,
        });
    }
    hotel.check_issue(1)?;

    board.issue_shares(name, player.id(), 1)?;
    player.debit(price)?;

    debug!(player = %player.id(), hotel = %name, price, "share bought");
    Ok(price)
}
