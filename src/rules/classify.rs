//! Move classification.
//!
//! `classify` inspects a candidate tile against the board and reports which
//! executor applies. It never mutates the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::board::{connected_group, Board, Hotel};
use crate::core::{HotelName, Tile};

/// Why a tile cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpossibleReason {
    /// The tile is already on the board.
    Occupied,
    /// The tile would merge the named hotel, which is safe.
    SafeHotelInMerge(HotelName),
}

impl ImpossibleReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ImpossibleReason::Occupied => "occupied",
            ImpossibleReason::SafeHotelInMerge(_) => "safe hotel in merge",
        }
    }
}

/// The kind of move a tile placement makes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveClassification {
    /// The tile stays unclaimed.
    Singleton,
    /// The tile and exactly one adjacent single found a new hotel.
    Founding,
    /// The tile joins the only adjacent hotel.
    Growing(HotelName),
    /// The tile joins two or more hotels.
    Merging {
        /// First hotel after sorting by size, descending, ties in discovery order.
        acquirer: HotelName,
        /// Every other participant, in the same order.
        acquired: SmallVec<[HotelName; 3]>,
        /// Hotels sharing the largest size. Any of them may be chosen as
        /// the acquirer; a single entry means the choice is forced.
        tied: SmallVec<[HotelName; 4]>,
    },
    Impossible(ImpossibleReason),
}

impl MoveClassification {
    #[must_use]
    pub fn is_possible(&self) -> bool {
        !matches!(self, MoveClassification::Impossible(_))
    }
}

/// Hotels adjacent to `tile`, largest first. The sort is stable, so equal
/// sizes keep discovery order.
pub(crate) fn ranked_adjacent_hotels(board: &Board, tile: Tile) -> SmallVec<[&Hotel; 4]> {
    let mut hotels = board.adjacent_hotels(tile);
    hotels.sort_by(|a, b| b.size().cmp(&a.size()));
    hotels
}

/// Classify the placement of `tile` on `board`.
///
/// ```
/// use acquire_engine::board::Board;
/// use acquire_engine::rules::{classify, MoveClassification};
///
/// let mut board = Board::new();
/// board.add_single("A1".parse().unwrap()).unwrap();
/// assert_eq!(classify(&board, "A2".parse().unwrap()), MoveClassification::Founding);
/// assert_eq!(classify(&board, "C5".parse().unwrap()), MoveClassification::Singleton);
/// ```
#[must_use]
pub fn classify(board: &Board, tile: Tile) -> MoveClassification {
    let classification = inspect(board, tile);
    trace!(%tile, ?classification, "classified");
    classification
}

fn inspect(board: &Board, tile: Tile) -> MoveClassification {
    if board.is_occupied(tile) {
        return MoveClassification::Impossible(ImpossibleReason::Occupied);
    }

    let hotels = ranked_adjacent_hotels(board, tile);
    match hotels.as_slice() {
        [] => {
            if connected_group(board.single_set(), tile).len() == 1 {
                MoveClassification::Founding
            } else {
                MoveClassification::Singleton
            }
        }
        [only] => MoveClassification::Growing(only.name()),
        [largest, rest @ ..] => {
            if let Some(safe) = hotels.iter().find(|h| h.is_safe()) {
                return MoveClassification::Impossible(ImpossibleReason::SafeHotelInMerge(safe.name()));
            }
            let tied = hotels
                .iter()
                .take_while(|h| h.size() == largest.size())
                .map(|h| h.name())
                .collect();
            MoveClassification::Merging {
                acquirer: largest.name(),
                acquired: rest.iter().map(|h| h.name()).collect(),
                tied,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use smallvec::smallvec;

    fn t(label: &str) -> Tile {
        label.parse().unwrap()
    }

    fn hotel(name: HotelName, tiles: &[&str]) -> Hotel {
        let mut hotel = Hotel::new(name, tiles.iter().map(|l| t(l))).unwrap();
        hotel.issue(PlayerId::new(0), 1).unwrap();
        hotel
    }

    #[test]
    fn test_empty_board_is_singleton() {
        assert_eq!(classify(&Board::new(), t("E6")), MoveClassification::Singleton);
    }

    #[test]
    fn test_occupied() {
        let mut board = Board::new();
        board.add_single(t("A1")).unwrap();
        board.add_hotel(hotel(HotelName::Tower, &["C1", "C2"])).unwrap();

        let occupied = MoveClassification::Impossible(ImpossibleReason::Occupied);
        assert_eq!(classify(&board, t("A1")), occupied);
        assert_eq!(classify(&board, t("C2")), occupied);
        assert!(!occupied.is_possible());
    }

    #[test]
    fn test_founding_needs_exactly_one_single() {
        let mut board = Board::new();
        board.add_single(t("A1")).unwrap();
        assert_eq!(classify(&board, t("A2")), MoveClassification::Founding);
        assert_eq!(classify(&board, t("B1")), MoveClassification::Founding);
        assert_eq!(classify(&board, t("B2")), MoveClassification::Singleton);

        // Two singles joined through the new tile.
        board.add_single(t("A3")).unwrap();
        assert_eq!(classify(&board, t("A2")), MoveClassification::Singleton);
    }

    #[test]
    fn test_existing_pair_of_singles_reports_singleton() {
        let mut board = Board::new();
        board.add_single(t("D4")).unwrap();
        board.add_single(t("D5")).unwrap();
        assert_eq!(classify(&board, t("D6")), MoveClassification::Singleton);
    }

    #[test]
    fn test_growing() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::American, &["A1", "A2"])).unwrap();
        board.add_single(t("C2")).unwrap();

        assert_eq!(classify(&board, t("B2")), MoveClassification::Growing(HotelName::American));
    }

    #[test]
    fn test_merging_sorted_by_size() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::Tower, &["A3", "A4"])).unwrap();
        board.add_hotel(hotel(HotelName::Festival, &["C1", "C2", "C3"])).unwrap();

        assert_eq!(
            classify(&board, t("B3")),
            MoveClassification::Merging {
                acquirer: HotelName::Festival,
                acquired: smallvec![HotelName::Tower],
                tied: smallvec![HotelName::Festival],
            }
        );
    }

    #[test]
    fn test_merging_tie_keeps_discovery_order() {
        let mut board = Board::new();
        board.add_hotel(hotel(HotelName::Continental, &["C3", "D3"])).unwrap();
        board.add_hotel(hotel(HotelName::American, &["B1", "B2"])).unwrap();

        assert_eq!(
            classify(&board, t("B3")),
            MoveClassification::Merging {
                acquirer: HotelName::Continental,
                acquired: smallvec![HotelName::American],
                tied: smallvec![HotelName::Continental, HotelName::American],
            }
        );
    }

    #[test]
    fn test_safe_hotel_blocks_merge() {
        let mut board = Board::new();
        let safe: Vec<String> = (1..=11).map(|c| format!("A{c}")).collect();
        let safe: Vec<&str> = safe.iter().map(String::as_str).collect();
        board.add_hotel(hotel(HotelName::Imperial, &safe)).unwrap();
        board.add_hotel(hotel(HotelName::Sackson, &["C5", "C6"])).unwrap();

        assert_eq!(
            classify(&board, t("B5")),
            MoveClassification::Impossible(ImpossibleReason::SafeHotelInMerge(HotelName::Imperial))
        );
        // Growing a safe hotel is fine.
        assert_eq!(classify(&board, t("B1")), MoveClassification::Growing(HotelName::Imperial));
    }

    #[test]
    fn test_classify_is_idempotent_and_pure() {
        let mut board = Board::new();
        board.add_single(t("F6")).unwrap();
        board.add_hotel(hotel(HotelName::Worldwide, &["H1", "H2"])).unwrap();
        let before = board.clone();

        for tile in Tile::all() {
            assert_eq!(classify(&board, tile), classify(&board, tile));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_classification_serde() {
        let merging = MoveClassification::Merging {
            acquirer: HotelName::Tower,
            acquired: smallvec![HotelName::American, HotelName::Sackson],
            tied: smallvec![HotelName::Tower],
        };
        let json = serde_json::to_string(&merging).unwrap();
        let back: MoveClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, merging);
    }
}
