//! The board: unclaimed singleton tiles plus active hotels.
//!
//! ## Invariants
//!
//! - A tile is in at most one of: the singles, any hotel.
//! - Active hotel names are unique.
//! - No two active hotels have edge-adjacent tiles.
//! - Every active hotel has at least two tiles and at least one share
//!   issued, and no more than 25 outstanding.
//!
//! The public mutators (`add_single`, `add_hotel`, `issue_shares`) keep these
//! invariants and are what a transport layer uses to rebuild a decoded
//! board. Rule-driven transitions live in `rules::executor`.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::hotel::Hotel;
use crate::core::{HotelName, PlayerId, Tile};
use crate::error::{EngineError, EngineResult};

/// What occupies a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    /// An unclaimed tile.
    Single,
    /// A tile of the named hotel.
    Hotel(HotelName),
}

/// Board state.
///
/// Hotels are kept in registration order. That order is the
/// discovery order used to break ties between equally sized hotels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    singles: OrdSet<Tile>,
    hotels: Vec<Hotel>,
    /// Hotels dissolved by mergers, certificates voided.
    retired: Vec<Hotel>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Singleton tiles, row-major.
    pub fn singles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.singles.iter().copied()
    }

    pub(crate) fn single_set(&self) -> &OrdSet<Tile> {
        &self.singles
    }

    #[must_use]
    pub fn has_single(&self, tile: Tile) -> bool {
        self.singles.contains(&tile)
    }

    /// Active hotels in registration order.
    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.iter()
    }

    /// Number of active hotels.
    #[must_use]
    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    #[must_use]
    pub fn hotel(&self, name: HotelName) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.name() == name)
    }

    /// The active hotel called `name`, or `HotelNotInPlay`.
    pub fn require_hotel(&self, name: HotelName) -> EngineResult<&Hotel> {
        self.hotel(name).ok_or(EngineError::HotelNotInPlay(name))
    }

    #[must_use]
    pub fn has_hotel(&self, name: HotelName) -> bool {
        self.hotel(name).is_some()
    }

    /// Hotels dissolved by mergers, oldest first.
    #[must_use]
    pub fn retired(&self) -> &[Hotel] {
        &self.retired
    }

    /// Chains not currently on the board, alphabetical.
    #[must_use]
    pub fn available_hotels(&self) -> Vec<HotelName> {
        HotelName::ALL
            .into_iter()
            .filter(|&name| !self.has_hotel(name))
            .collect()
    }

    /// What, if anything, occupies `tile`.
    #[must_use]
    pub fn occupant(&self, tile: Tile) -> Option<Occupant> {
        if self.singles.contains(&tile) {
            return Some(Occupant::Single);
        }
        self.hotels
            .iter()
            .find(|h| h.has_tile(tile))
            .map(|h| Occupant::Hotel(h.name()))
    }

    #[must_use]
    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.occupant(tile).is_some()
    }

    /// Tiles on the board, singles and hotels together.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.singles.len() + self.hotels.iter().map(Hotel::size).sum::<usize>()
    }

    /// Distinct hotels with a tile adjacent to `tile`, in discovery order.
    #[must_use]
    pub fn adjacent_hotels(&self, tile: Tile) -> SmallVec<[&Hotel; 4]> {
        self.hotels.iter().filter(|h| h.touches(tile)).collect()
    }

    #[must_use]
    pub fn touches_hotel(&self, tile: Tile) -> bool {
        self.hotels.iter().any(|h| h.touches(tile))
    }

    // === Invariant-keeping mutators ===

    /// Add an unclaimed tile.
    pub fn add_single(&mut self, tile: Tile) -> EngineResult<()> {
        if self.is_occupied(tile) {
            return Err(EngineError::OccupiedTile(tile));
        }
        self.singles.insert(tile);
        Ok(())
    }

    /// Register a hotel.
    ///
    /// Rejects a name already in play, tiles already on the board, tiles
    /// touching another hotel, and hotels with no shares issued.
    pub fn add_hotel(&mut self, hotel: Hotel) -> EngineResult<()> {
        if self.has_hotel(hotel.name()) {
            return Err(EngineError::HotelInPlay(hotel.name()));
        }
        for tile in hotel.tiles() {
            if self.is_occupied(tile) {
                return Err(EngineError::OccupiedTile(tile));
            }
            if self.touches_hotel(tile) {
                return Err(EngineError::IllegalAdjacency {
                    tile,
                    reason: "hotel would touch another hotel",
                });
            }
        }
        if hotel.shares_outstanding() == 0 {
            return Err(EngineError::inconsistent(format!(
                "{} must issue a certificate before it is placed",
                hotel.name()
            )));
        }
        self.hotels.push(hotel);
        Ok(())
    }

    /// Issue shares of an active hotel.
    pub fn issue_shares(&mut self, name: HotelName, owner: PlayerId, count: u32) -> EngineResult<()> {
        self.hotel_mut(name)?.issue(owner, count)
    }

    /// Check every board invariant.
    pub fn validate(&self) -> EngineResult<()> {
        let mut seen = OrdSet::new();
        for tile in self.singles() {
            seen.insert(tile);
        }
        for (i, hotel) in self.hotels.iter().enumerate() {
            if self.hotels[..i].iter().any(|h| h.name() == hotel.name()) {
                return Err(EngineError::HotelInPlay(hotel.name()));
            }
            for tile in hotel.tiles() {
                if seen.insert(tile).is_some() {
                    return Err(EngineError::OccupiedTile(tile));
                }
            }
            if hotel.shares_outstanding() == 0 {
                return Err(EngineError::inconsistent(format!(
                    "{} has no shares issued",
                    hotel.name()
                )));
            }
            hotel.check_issue(0)?;
        }
        for (i, a) in self.hotels.iter().enumerate() {
            for b in &self.hotels[i + 1..] {
                if let Some(tile) = a.tiles().find(|&t| b.touches(t)) {
                    return Err(EngineError::IllegalAdjacency {
                        tile,
                        reason: "two hotels touch",
                    });
                }
            }
        }
        Ok(())
    }

    // === Crate-internal transitions ===

    pub(crate) fn hotel_mut(&mut self, name: HotelName) -> EngineResult<&mut Hotel> {
        self.hotels
            .iter_mut()
            .find(|h| h.name() == name)
            .ok_or(EngineError::HotelNotInPlay(name))
    }

    pub(crate) fn remove_single(&mut self, tile: Tile) -> bool {
        self.singles.remove(&tile).is_some()
    }

    /// Remove an active hotel, void its certificates and keep it as history.
    /// Returns a copy of the hotel as it was before dissolution.
    pub(crate) fn retire(&mut self, name: HotelName) -> EngineResult<Hotel> {
        let index = self
            .hotels
            .iter()
            .position(|h| h.name() == name)
            .ok_or(EngineError::HotelNotInPlay(name))?;
        let hotel = self.hotels.remove(index);
        let mut record = hotel.clone();
        record.dissolve();
        self.retired.push(record);
        Ok(hotel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(label: &str) -> Tile {
        label.parse().unwrap()
    }

    fn hotel(name: HotelName, tiles: &[&str]) -> Hotel {
        let mut hotel = Hotel::new(name, tiles.iter().map(|l| t(l))).unwrap();
        hotel.issue(PlayerId::new(0), 1).unwrap();
        hotel
    }

    #[test]
    fn test_singles() {
        let mut board = Board::new();
        assert!(!board.has_single(t("A1")));

        board.add_single(t("C1")).unwrap();
        board.add_single(t("A1")).unwrap();
        board.add_single(t("B3")).unwrap();

        assert_eq!(
            board.add_single(t("A1")),
            Err(EngineError::OccupiedTile(t("A1")))
        );
        assert_eq!(board.singles().collect::<Vec<_>>(), vec![t("A1"), t("B3"), t("C1")]);
        assert_eq!(board.occupant(t("A1")), Some(Occupant::Single));
        assert_eq!(board.tile_count(), 3);
    }

    #[test]
    fn test_add_hotel() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::American, &["A1", "A2"])).unwrap();

        assert!(board.has_hotel(HotelName::American));
        assert_eq!(board.occupant(t("A2")), Some(Occupant::Hotel(HotelName::American)));
        assert_eq!(board.occupant(t("A3")), None);
        assert_eq!(board.available_hotels().len(), 6);
        assert!(!board.available_hotels().contains(&HotelName::American));
        assert_eq!(board.add_single(t("A1")), Err(EngineError::OccupiedTile(t("A1"))));
    }

    #[test]
    fn test_add_hotel_rejections() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::American, &["A1", "A2"])).unwrap();
        board.add_single(t("E5")).unwrap();

        assert_eq!(
            board.add_hotel(hotel(HotelName::American, &["G1", "G2"])),
            Err(EngineError::HotelInPlay(HotelName::American))
        );
        assert_eq!(
            board.add_hotel(hotel(HotelName::Tower, &["E5", "E6"])),
            Err(EngineError::OccupiedTile(t("E5")))
        );
        assert!(matches!(
            board.add_hotel(hotel(HotelName::Tower, &["A3", "A4"])),
            Err(EngineError::IllegalAdjacency { .. })
        ));

        let unissued = Hotel::new(HotelName::Tower, [t("G1"), t("G2")]).unwrap();
        assert!(matches!(
            board.add_hotel(unissued),
            Err(EngineError::InconsistentState(_))
        ));
        assert_eq!(board.hotel_count(), 1);
    }

    #[test]
    fn test_adjacent_hotels_discovery_order() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::Tower, &["A3", "A4"])).unwrap();
        board.add_hotel(hotel(HotelName::American, &["B1", "C1"])).unwrap();

        let names: Vec<_> = board.adjacent_hotels(t("B3")).iter().map(|h| h.name()).collect();
        assert_eq!(names, vec![HotelName::Tower]);

        let names: Vec<_> = board.adjacent_hotels(t("B2")).iter().map(|h| h.name()).collect();
        assert_eq!(names, vec![HotelName::American]);

        assert!(board.adjacent_hotels(t("F6")).is_empty());
    }

    #[test]
    fn test_retire_keeps_history() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::Festival, &["D4", "D5"])).unwrap();
        board.issue_shares(HotelName::Festival, PlayerId::new(1), 4).unwrap();

        let before = board.retire(HotelName::Festival).unwrap();
        assert_eq!(before.shares_outstanding(), 5);
        assert!(!board.has_hotel(HotelName::Festival));
        assert_eq!(board.retired().len(), 1);
        assert_eq!(board.retired()[0].shares_outstanding(), 0);
        assert_eq!(board.retired()[0].certificates().len(), 2);

        assert_eq!(
            board.issue_shares(HotelName::Festival, PlayerId::new(1), 1),
            Err(EngineError::HotelNotInPlay(HotelName::Festival))
        );
    }

    #[test]
    fn test_validate() {
        let mut board = Board::new();
        board.add_single(t("I12")).unwrap();
        board.add_hotel(hotel(HotelName::Sackson, &["A1", "A2"])).unwrap();
        board.add_hotel(hotel(HotelName::Imperial, &["C1", "C2"])).unwrap();
        assert!(board.validate().is_ok());

        // Growing Imperial up to Sackson's edge breaks the invariant.
        board.hotel_mut(HotelName::Imperial).unwrap().add_tile(t("B2"));
        assert!(matches!(
            board.validate(),
            Err(EngineError::IllegalAdjacency { .. })
        ));
    }
}
