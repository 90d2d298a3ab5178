//! Engine errors.
//!
//! Every rule violation is reported as an [`EngineError`]. Each variant maps
//! to a coarse [`ErrorKind`] with a stable string code, which is what a
//! transport layer should expose to clients.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{HotelName, PlayerId, Tile};

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// A rule or invariant violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Placement target is already a singleton or part of a hotel.
    #[error("tile {0} is already on the board")]
    OccupiedTile(Tile),

    /// Coordinates outside the 9x12 grid, or an unparsable tile label.
    #[error("invalid tile: {0}")]
    InvalidTile(String),

    /// Name outside the seven chains.
    #[error("not a valid hotel name: {0}")]
    UnknownHotel(String),

    /// Founding a chain that is already on the board.
    #[error("hotel {0} is already in play")]
    HotelInPlay(HotelName),

    /// Referring to a chain that is not on the board.
    #[error("hotel {0} is not in play")]
    HotelNotInPlay(HotelName),

    /// A founding or merging move was submitted without the hotel it needs.
    #[error("a hotel name is required: {0}")]
    MissingHotelName(&'static str),

    /// The tile touches the wrong number of hotels or singletons for the move.
    #[error("illegal adjacency at {tile}: {reason}")]
    IllegalAdjacency { tile: Tile, reason: &'static str },

    /// A merger would involve a hotel at or above the safety threshold.
    #[error("safe hotel {0} cannot be involved in a merger")]
    SafeHotel(HotelName),

    /// A smaller hotel is trying to absorb a larger one.
    #[error("{acquirer} ({acquirer_size} tiles) cannot acquire the larger {acquired} ({acquired_size} tiles)")]
    SizeViolation {
        acquirer: HotelName,
        acquirer_size: usize,
        acquired: HotelName,
        acquired_size: usize,
    },

    /// Issuing shares would exceed the hotel's share cap.
    #[error("{hotel} has {outstanding} shares outstanding, cannot issue {requested} more")]
    ShareCapExceeded {
        hotel: HotelName,
        outstanding: u32,
        requested: u32,
    },

    /// More purchases in one turn than the rules allow.
    #[error("at most {limit} shares may be bought per turn, {requested} requested")]
    PurchaseLimit { limit: usize, requested: usize },

    /// The player cannot afford the share.
    #[error("{player} has {cash} cash, share costs {price}")]
    InsufficientFunds { player: PlayerId, cash: u32, price: u32 },

    /// The played tile is not in the acting player's rack.
    #[error("{player} does not hold tile {tile}")]
    NotInHand { player: PlayerId, tile: Tile },

    /// Bad player roster: unknown id, duplicate name, shared tiles, bad count.
    #[error("invalid player: {0}")]
    InvalidPlayer(String),

    /// Internal invariant violated.
    #[error("inconsistent state: {0}")]
    InconsistentState(String),
}

/// Coarse error classification with stable external codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    OccupiedTile,
    InvalidTile,
    InvalidHotelName,
    IllegalAdjacency,
    SafeHotel,
    SizeViolation,
    ShareCapExceeded,
    PurchaseLimit,
    InsufficientFunds,
    NotInHand,
    InvalidPlayer,
    InconsistentState,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::OccupiedTile => "occupied-tile",
            ErrorKind::InvalidTile => "invalid-tile",
            ErrorKind::InvalidHotelName => "invalid-hotel-name",
            ErrorKind::IllegalAdjacency => "illegal-adjacency",
            ErrorKind::SafeHotel => "safe-hotel",
            ErrorKind::SizeViolation => "size-violation",
            ErrorKind::ShareCapExceeded => "share-cap-exceeded",
            ErrorKind::PurchaseLimit => "purchase-limit",
            ErrorKind::InsufficientFunds => "insufficient-funds",
            ErrorKind::NotInHand => "not-in-hand",
            ErrorKind::InvalidPlayer => "invalid-player",
            ErrorKind::InconsistentState => "inconsistent-state",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl EngineError {
    /// The kind this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::OccupiedTile(_) => ErrorKind::OccupiedTile,
            EngineError::InvalidTile(_) => ErrorKind::InvalidTile,
            EngineError::UnknownHotel(_)
            | EngineError::HotelInPlay(_)
            | EngineError::HotelNotInPlay(_)
            | EngineError::MissingHotelName(_) => ErrorKind::InvalidHotelName,
            EngineError::IllegalAdjacency { .. } => ErrorKind::IllegalAdjacency,
            EngineError::SafeHotel(_) => ErrorKind::SafeHotel,
            EngineError::SizeViolation { .. } => ErrorKind::SizeViolation,
            EngineError::ShareCapExceeded { .. } => ErrorKind::ShareCapExceeded,
            EngineError::PurchaseLimit { .. } => ErrorKind::PurchaseLimit,
            EngineError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            EngineError::NotInHand { .. } => ErrorKind::NotInHand,
            EngineError::InvalidPlayer(_) => ErrorKind::InvalidPlayer,
            EngineError::InconsistentState(_) => ErrorKind::InconsistentState,
        }
    }

    pub(crate) fn inconsistent(message: impl Into<String>) -> Self {
        EngineError::InconsistentState(message.into())
    }
}
