//! Majority and minority shareholder bonuses paid when a hotel dissolves.
//!
//! Lots are ranked by share count (stable, so equal counts keep ledger
//! order). The first run of equal counts is the majority group:
//!
//! - several majority holders split the pooled majority + minority bonus;
//! - a single majority holder takes the majority bonus and the next run of
//!   equal counts splits the minority bonus;
//! - a single holder with nobody behind them is an inconsistent ledger
//!   unless the schedule lets a sole shareholder take both bonuses.
//!
//! Every split truncates toward zero.

use serde::{Deserialize, Serialize};

use crate::board::Certificate;
use crate::core::{BonusSchedule, PlayerId};
use crate::error::{EngineError, EngineResult};

/// Which bonus a payout comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// Single largest holder.
    Majority,
    /// Second-largest holders.
    Minority,
    /// Tied largest holders sharing the pooled bonus.
    SharedMajority,
    /// Only holder, paid the pooled bonus.
    Sole,
}

/// Cash owed to one shareholder of a dissolving hotel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub owner: PlayerId,
    /// Shares held at dissolution.
    pub shares: u32,
    pub amount: u32,
    pub kind: BonusKind,
}

/// Compute merger bonuses for a dissolving hotel's ledger at `price` per share.
///
/// Zero-count lots are ignored. Payouts come out majority first, in rank
/// order.
///
/// ```
/// use acquire_engine::board::Certificate;
/// use acquire_engine::core::{BonusSchedule, HotelName, PlayerId};
/// use acquire_engine::rules::distribute_dividends;
///
/// let ledger = [
///     Certificate::new(HotelName::Tower, PlayerId::new(0), 4),
///     Certificate::new(HotelName::Tower, PlayerId::new(1), 2),
/// ];
/// let payouts = distribute_dividends(&ledger, 400, &BonusSchedule::default()).unwrap();
/// assert_eq!(payouts[0].amount, 4000);
/// assert_eq!(payouts[1].amount, 2000);
/// ```
pub fn distribute_dividends(
    ledger: &[Certificate],
    price: u32,
    bonus: &BonusSchedule,
) -> EngineResult<Vec<Payout>> {
    let mut lots: Vec<&Certificate> = ledger.iter().filter(|c| c.count() > 0).collect();
    lots.sort_by(|a, b| b.count().cmp(&a.count()));

    let top = match lots.first() {
        Some(lot) => lot.count(),
        None => return Err(EngineError::inconsistent("no shareholders found")),
    };
    let majority_len = lots.iter().take_while(|c| c.count() == top).count();
    let (majority, rest) = lots.split_at(majority_len);

    if majority.len() > 1 {
        let each = price * bonus.pooled_multiple() / majority.len() as u32;
        return Ok(split(majority, each, BonusKind::SharedMajority));
    }

    let holder = majority[0];
    let second = match rest.first() {
        Some(lot) => lot.count(),
        None if bonus.sole_shareholder_takes_both => {
            return Ok(split(majority, price * bonus.pooled_multiple(), BonusKind::Sole));
        }
        None => {
            return Err(EngineError::inconsistent(format!(
                "no minority shareholders found for {}",
                holder.hotel()
            )))
        }
    };
    let minority_len = rest.iter().take_while(|c| c.count() == second).count();
    let minority = &rest[..minority_len];

    let mut payouts = split(majority, price * bonus.majority_multiple, BonusKind::Majority);
    let each = price * bonus.minority_multiple / minority.len() as u32;
    payouts.extend(split(minority, each, BonusKind::Minority));
    Ok(payouts)
}

fn split(lots: &[&Certificate], each: u32, kind: BonusKind) -> Vec<Payout> {
    lots.iter()
        .map(|lot| Payout {
            owner: lot.owner(),
            shares: lot.count(),
            amount: each,
            kind,
        })
        .collect()
}
