//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index, 0-based.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Cash and tile rack. Share holdings are not stored here: the hotel
//! ledgers own certificates, and `Game::portfolio` reads them back.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::tile::Tile;
use crate::error::{EngineError, EngineResult};

/// Most seats a table can have. Seats are numbered by `u8`.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Player identifier (seat index).
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use acquire_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    /// Counts above `MAX_SEATS` are clamped.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_SEATS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use acquire_engine::core::{PlayerId, PlayerMap};
///
/// let mut cash = PlayerMap::from_vec(vec![6000u32; 3]).unwrap();
/// cash[PlayerId::new(1)] -= 300;
/// assert_eq!(cash[PlayerId::new(1)], 5700);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap an existing per-seat vector.
    pub fn from_vec(data: Vec<T>) -> EngineResult<Self> {
        if data.is_empty() || data.len() > MAX_SEATS {
            return Err(EngineError::InvalidPlayer(format!(
                "unsupported player count {}",
                data.len()
            )));
        }
        Ok(Self { data })
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// True if `player` is a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a player's data, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, or `None` for an unknown seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seat at the table: name, cash and tile rack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    cash: u32,
    tiles: OrdSet<Tile>,
}

impl Player {
    /// Create a player with an empty rack.
    pub fn new(id: PlayerId, name: impl Into<String>, cash: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cash,
            tiles: OrdSet::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cash(&self) -> u32 {
        self.cash
    }

    /// Rack tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn holds(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Put a tile in the rack. A rack never holds the same tile twice.
    pub fn add_tile(&mut self, tile: Tile) -> EngineResult<()> {
        if self.tiles.insert(tile).is_some() {
            return Err(EngineError::InvalidPlayer(format!(
                "{} already holds tile {tile}",
                self.name
            )));
        }
        Ok(())
    }

    /// Fail with `NotInHand` unless the rack holds `tile`.
    pub(crate) fn require_tile(&self, tile: Tile) -> EngineResult<()> {
        if self.holds(tile) {
            Ok(())
        } else {
            Err(EngineError::NotInHand {
                player: self.id,
                tile,
            })
        }
    }

    pub(crate) fn remove_tile(&mut self, tile: Tile) -> bool {
        self.tiles.remove(&tile).is_some()
    }

    pub(crate) fn credit(&mut self, amount: u32) {
        self.cash = self.cash.saturating_add(amount);
    }

    /// Deduct `amount`; cash never goes negative.
    pub(crate) fn debit(&mut self, amount: u32) -> EngineResult<()> {
        self.cash = self
            .cash
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientFunds {
                player: self.id,
                cash: self.cash,
                price: amount,
            })?;
        Ok(())
    }
}
