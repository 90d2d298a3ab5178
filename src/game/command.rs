//! Commands a transport layer submits to a [`Game`](super::Game) and what
//! they produce.

use serde::{Deserialize, Serialize};

use crate::core::{HotelName, PlayerId, Tile};
use crate::rules::MergeOutcome;

/// One player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Play a tile. `hotel` names the chain to found, or the acquirer of a
    /// merger; it is ignored for other moves.
    Place { tile: Tile, hotel: Option<HotelName> },
    /// Buy one share of each listed hotel, in order.
    Buy { hotels: Vec<HotelName> },
    /// Draw a replacement tile and pass to the next seat.
    EndTurn,
}

/// What a tile placement did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Singleton,
    Founded(HotelName),
    Grew(HotelName),
    Merged(MergeOutcome),
}

impl Placement {
    /// The hotel the tile ended up in, if any.
    #[must_use]
    pub fn hotel(&self) -> Option<HotelName> {
        match self {
            Placement::Singleton => None,
            Placement::Founded(name) | Placement::Grew(name) => Some(*name),
            Placement::Merged(outcome) => Some(outcome.acquirer),
        }
    }
}

/// Result of applying a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Placed(Placement),
    /// Price paid for each share, in purchase order.
    Bought(Vec<u32>),
    TurnEnded {
        drawn: Option<Tile>,
        next: PlayerId,
    },
}
