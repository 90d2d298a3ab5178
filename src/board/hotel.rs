//! Hotel chains on the board.

use im::OrdSet;

use super::certificate::Certificate;
use super::connectivity::is_connected;
use crate::core::{HotelName, PlayerId, PriceTier, Tile, MAX_SHARES, MIN_HOTEL_SIZE, SAFE_HOTEL_SIZE};
use crate::error::{EngineError, EngineResult};

/// An active chain: its tiles and its share ledger.
///
/// The ledger never has more than [`MAX_SHARES`] shares outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotel {
    name: HotelName,
    tiles: OrdSet<Tile>,
    certificates: Vec<Certificate>,
}

impl Hotel {
    /// Create a hotel with no shares issued.
    ///
    /// The tiles must be at least [`MIN_HOTEL_SIZE`] distinct, connected
    /// tiles. A hotel needs at least one certificate before a board will
    /// accept it.
    pub fn new(name: HotelName, tiles: impl IntoIterator<Item = Tile>) -> EngineResult<Self> {
        let tiles: OrdSet<Tile> = tiles.into_iter().collect();
        if tiles.len() < MIN_HOTEL_SIZE {
            return Err(EngineError::inconsistent(format!(
                "{name} needs at least {MIN_HOTEL_SIZE} tiles, got {}",
                tiles.len()
            )));
        }
        if !is_connected(&tiles) {
            return Err(EngineError::inconsistent(format!(
                "{name} tiles are not one connected group"
            )));
        }
        Ok(Self {
            name,
            tiles,
            certificates: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> HotelName {
        self.name
    }

    #[must_use]
    pub fn tier(&self) -> PriceTier {
        self.name.tier()
    }

    /// Tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Number of tiles.
    #[must_use]
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// True if any hotel tile shares an edge with `tile`.
    #[must_use]
    pub fn touches(&self, tile: Tile) -> bool {
        tile.adjacent().iter().any(|t| self.tiles.contains(t))
    }

    /// Safe hotels cannot be acquired.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.size() >= SAFE_HOTEL_SIZE
    }

    /// Certificate ledger in issue order.
    #[must_use]
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// The owner's certificate, if any shares were ever issued to them.
    #[must_use]
    pub fn certificate(&self, owner: PlayerId) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.is_for(self.name, owner))
    }

    /// Shares held by all owners.
    #[must_use]
    pub fn shares_outstanding(&self) -> u32 {
        self.certificates.iter().map(Certificate::count).sum()
    }

    /// Shares still available to issue.
    #[must_use]
    pub fn shares_available(&self) -> u32 {
        MAX_SHARES.saturating_sub(self.shares_outstanding())
    }

    /// Fail with `ShareCapExceeded` if `count` more shares would break the cap.
    pub fn check_issue(&self, count: u32) -> EngineResult<()> {
        let outstanding = self.shares_outstanding();
        if outstanding + count > MAX_SHARES {
            return Err(EngineError::ShareCapExceeded {
                hotel: self.name,
                outstanding,
                requested: count,
            });
        }
        Ok(())
    }

    /// Issue `count` shares to `owner`, adding to their certificate if they
    /// already hold one.
    pub fn issue(&mut self, owner: PlayerId, count: u32) -> EngineResult<()> {
        self.check_issue(count)?;
        if count == 0 {
            return Ok(());
        }
        let name = self.name;
        match self.certificates.iter_mut().find(|c| c.is_for(name, owner)) {
            Some(existing) => existing.add(count),
            None => self.certificates.push(Certificate::new(name, owner, count)),
        }
        Ok(())
    }

    pub(crate) fn add_tile(&mut self, tile: Tile) {
        self.tiles.insert(tile);
    }

    pub(crate) fn absorb(&mut self, other: &Hotel) {
        for tile in other.tiles() {
            self.tiles.insert(tile);
        }
    }

    /// Void every certificate, keeping the records.
    pub(crate) fn dissolve(&mut self) {
        for certificate in &mut self.certificates {
            certificate.void();
        }
    }
}
