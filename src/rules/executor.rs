//! Move executors: the only rule-driven mutators of board and rack state.
//!
//! Each executor checks that the acting player holds the tile, runs every
//! check for its move, and only then mutates. Moves that touch more than one
//! hotel or player run on staged copies that are committed together, so a
//! failed move leaves everything as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::classify::ranked_adjacent_hotels;
use super::dividends::{distribute_dividends, Payout};
use super::pricing::current_price;
use crate::board::{connected_group, Board, Hotel};
use crate::core::{BonusSchedule, HotelName, Player, PlayerId, PlayerMap, Tile};
use crate::error::{EngineError, EngineResult};

/// Put `tile` on the board as an unclaimed single.
pub fn place_singleton(board: &mut Board, player: &mut Player, tile: Tile) -> EngineResult<()> {
    player.require_tile(tile)?;
    if board.is_occupied(tile) {
        return Err(EngineError::OccupiedTile(tile));
    }
    if board.touches_hotel(tile) {
        return Err(EngineError::IllegalAdjacency {
            tile,
            reason: "singleton would touch a hotel",
        });
    }

    board.add_single(tile)?;
    player.remove_tile(tile);
    debug!(player = %player.id(), %tile, "singleton placed");
    Ok(())
}

/// Found hotel `name` from `tile` and the one single it connects to.
///
/// The founder receives `founder_shares` free shares.
pub fn found_hotel(
    board: &mut Board,
    founder: &mut Player,
    name: HotelName,
    tile: Tile,
    founder_shares: u32,
) -> EngineResult<()> {
    founder.require_tile(tile)?;
    if board.has_hotel(name) {
        return Err(EngineError::HotelInPlay(name));
    }
    if board.is_occupied(tile) {
        return Err(EngineError::OccupiedTile(tile));
    }
    let group = connected_group(board.single_set(), tile);
    let [partner] = group.as_slice() else {
        return Err(EngineError::IllegalAdjacency {
            tile,
            reason: "founding needs exactly one connected singleton",
        });
    };

    let mut hotel = Hotel::new(name, [*partner, tile])?;
    hotel.issue(founder.id(), founder_shares)?;

    let mut staged = board.clone();
    staged.remove_single(*partner);
    staged.add_hotel(hotel)?;

    *board = staged;
    founder.remove_tile(tile);
    info!(hotel = %name, founder = %founder.id(), %tile, "hotel founded");
    Ok(())
}

/// Add `tile` to the only hotel it touches. Returns that hotel's name.
pub fn grow_hotel(board: &mut Board, player: &mut Player, tile: Tile) -> EngineResult<HotelName> {
    player.require_tile(tile)?;
    if board.is_occupied(tile) {
        return Err(EngineError::OccupiedTile(tile));
    }
    let name = match board.adjacent_hotels(tile).as_slice() {
        [only] => only.name(),
        [] => {
            return Err(EngineError::IllegalAdjacency {
                tile,
                reason: "tile is not adjacent to a hotel",
            })
        }
        _ => {
            return Err(EngineError::IllegalAdjacency {
                tile,
                reason: "ambiguous growth, use merge",
            })
        }
    };

    board.hotel_mut(name)?.add_tile(tile);
    player.remove_tile(tile);
    debug!(player = %player.id(), hotel = %name, %tile, "hotel grown");
    Ok(name)
}

/// One hotel dissolved by a merger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredHotel {
    pub name: HotelName,
    /// Tiles at dissolution.
    pub size: usize,
    /// Share price used for the bonuses.
    pub price: u32,
    pub payouts: Vec<Payout>,
}

/// A fully validated merger, ready to run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    pub tile: Tile,
    pub acquirer: HotelName,
    /// Dissolving hotels in merge order: size descending, ties in discovery
    /// order.
    pub acquired: Vec<AcquiredHotel>,
}

impl MergePlan {
    /// Total bonus cash paid out by the merger.
    #[must_use]
    pub fn total_paid(&self) -> u32 {
        self.acquired
            .iter()
            .flat_map(|a| &a.payouts)
            .map(|p| p.amount)
            .sum()
    }
}

/// Result of a committed merger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub acquirer: HotelName,
    /// Acquirer size after the merger, including the placed tile.
    pub size: usize,
    pub acquired: Vec<AcquiredHotel>,
}

/// Validate a merger at `tile` led by `acquirer` and price its bonuses,
/// without touching the board.
pub fn plan_merge(
    board: &Board,
    tile: Tile,
    acquirer: HotelName,
    bonus: &BonusSchedule,
) -> EngineResult<MergePlan> {
    if board.is_occupied(tile) {
        return Err(EngineError::OccupiedTile(tile));
    }
    let leader = board.require_hotel(acquirer)?;
    let ranked = ranked_adjacent_hotels(board, tile);
    if ranked.len() < 2 {
        return Err(EngineError::IllegalAdjacency {
            tile,
            reason: "a merger needs at least two adjacent hotels",
        });
    }
    if !ranked.iter().any(|h| h.name() == acquirer) {
        return Err(EngineError::IllegalAdjacency {
            tile,
            reason: "acquirer is not adjacent to the tile",
        });
    }
    if let Some(safe) = ranked.iter().find(|h| h.is_safe()) {
        return Err(EngineError::SafeHotel(safe.name()));
    }

    let mut acquired = Vec::with_capacity(ranked.len() - 1);
    for hotel in ranked.iter().filter(|h| h.name() != acquirer) {
        if hotel.size() > leader.size() {
            return Err(EngineError::SizeViolation {
                acquirer,
                acquirer_size: leader.size(),
                acquired: hotel.name(),
                acquired_size: hotel.size(),
            });
        }
        let price = current_price(hotel)?;
        let payouts = distribute_dividends(hotel.certificates(), price, bonus)?;
        acquired.push(AcquiredHotel {
            name: hotel.name(),
            size: hotel.size(),
            price,
            payouts,
        });
    }

    Ok(MergePlan {
        tile,
        acquirer,
        acquired,
    })
}

/// Merge every hotel touching `tile` into `acquirer`, paying bonuses to the
/// shareholders of each dissolved hotel.
pub fn merge_hotels(
    board: &mut Board,
    players: &mut PlayerMap<Player>,
    actor: PlayerId,
    tile: Tile,
    acquirer: HotelName,
    bonus: &BonusSchedule,
) -> EngineResult<MergeOutcome> {
    players.get(actor).ok_or_else(|| unseated(actor))?.require_tile(tile)?;
    let plan = plan_merge(board, tile, acquirer, bonus)?;

    let mut staged_board = board.clone();
    let mut staged_players = players.clone();
    for acquired in &plan.acquired {
        let dissolved = staged_board.retire(acquired.name)?;
        staged_board.hotel_mut(acquirer)?.absorb(&dissolved);
        for payout in &acquired.payouts {
            staged_players
                .get_mut(payout.owner)
                .ok_or_else(|| unseated(payout.owner))?
                .credit(payout.amount);
        }
        debug!(acquirer = %acquirer, acquired = %acquired.name, size = acquired.size, "hotel absorbed");
    }
    let leader = staged_board.hotel_mut(acquirer)?;
    leader.add_tile(tile);
    let size = leader.size();
    staged_players
        .get_mut(actor)
        .ok_or_else(|| unseated(actor))?
        .remove_tile(tile);

    *board = staged_board;
    *players = staged_players;
    info!(
        acquirer = %acquirer,
        size,
        dissolved = plan.acquired.len(),
        paid = plan.total_paid(),
        "merger complete"
    );
    Ok(MergeOutcome {
        acquirer,
        size,
        acquired: plan.acquired,
    })
}

fn unseated(player: PlayerId) -> EngineError {
    EngineError::InvalidPlayer(format!("{player} is not seated at this table"))
}
