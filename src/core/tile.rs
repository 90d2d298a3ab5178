//! Board coordinates.
//!
//! A `Tile` is a cell on the 9x12 Acquire grid: a row letter `A`-`I` and a
//! column `1`-`12`. Tiles are plain `Copy` values; every constructor
//! validates the range, so a `Tile` in hand is always on the board.
//!
//! Tiles order row-major (`A1 < A2 < ... < A12 < B1`), which is the order
//! board and rack views are reported in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Number of rows (`A`-`I`).
pub const ROWS: u8 = 9;

/// Number of columns (`1`-`12`).
pub const COLUMNS: u8 = 12;

const FIRST_ROW: u8 = b'A';

/// A board coordinate.
///
/// ```
/// use acquire_engine::core::Tile;
///
/// let tile: Tile = "B7".parse().unwrap();
/// assert_eq!(tile.row(), 'B');
/// assert_eq!(tile.column(), 7);
/// assert_eq!(tile.to_string(), "B7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRepr", into = "TileRepr")]
pub struct Tile {
    /// 0-based row index.
    row: u8,
    /// 1-based column.
    column: u8,
}

impl Tile {
    /// Create a tile from a row letter and a column number.
    ///
    /// Lowercase row letters are accepted.
    pub fn new(row: char, column: u8) -> EngineResult<Self> {
        let upper = row.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() || upper as u8 >= FIRST_ROW + ROWS {
            return Err(EngineError::InvalidTile(format!("row {row} is outside A-I")));
        }
        if column == 0 || column > COLUMNS {
            return Err(EngineError::InvalidTile(format!(
                "column {column} is outside 1-{COLUMNS}"
            )));
        }
        Ok(Self {
            row: upper as u8 - FIRST_ROW,
            column,
        })
    }

    /// Parse a label such as `"A1"` or `"i12"`.
    pub fn parse(label: &str) -> EngineResult<Self> {
        let mut chars = label.trim().chars();
        let row = chars
            .next()
            .ok_or_else(|| EngineError::InvalidTile("empty tile label".to_string()))?;
        // Plain decimal digits only: no sign, no zero padding.
        let digits = chars.as_str();
        let bad_column = || EngineError::InvalidTile(format!("bad column in {label:?}"));
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad_column());
        }
        let column = digits.parse::<u8>().map_err(|_| bad_column())?;
        Self::new(row, column)
    }

    /// Row letter, `A`-`I`.
    #[must_use]
    pub const fn row(self) -> char {
        (FIRST_ROW + self.row) as char
    }

    /// 0-based row index.
    #[must_use]
    pub const fn row_index(self) -> u8 {
        self.row
    }

    /// Column number, `1`-`12`.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The up to four tiles sharing an edge with this one.
    ///
    /// Neighbours come out in the order row above, column left, row below,
    /// column right. Off-grid neighbours are skipped; there is no wraparound.
    #[must_use]
    pub fn adjacent(self) -> SmallVec<[Tile; 4]> {
        let mut around = SmallVec::new();
        if self.row > 0 {
            around.push(Tile { row: self.row - 1, column: self.column });
        }
        if self.column > 1 {
            around.push(Tile { row: self.row, column: self.column - 1 });
        }
        if self.row + 1 < ROWS {
            around.push(Tile { row: self.row + 1, column: self.column });
        }
        if self.column < COLUMNS {
            around.push(Tile { row: self.row, column: self.column + 1 });
        }
        around
    }

    /// True iff `other` shares an edge with this tile.
    #[must_use]
    pub fn is_adjacent(self, other: Tile) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }

    /// Every tile on the board, row-major.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..ROWS).flat_map(|row| (1..=COLUMNS).map(move |column| Tile { row, column }))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row(), self.column)
    }
}

impl FromStr for Tile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Serialized shape: `{ "row": "B", "column": 7 }`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct TileRepr {
    row: char,
    column: u8,
}

impl TryFrom<TileRepr> for Tile {
    type Error = EngineError;

    fn try_from(repr: TileRepr) -> Result<Self, Self::Error> {
        Tile::new(repr.row, repr.column)
    }
}

impl From<Tile> for TileRepr {
    fn from(tile: Tile) -> Self {
        TileRepr {
            row: tile.row(),
            column: tile.column(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(label: &str) -> Tile {
        label.parse().unwrap()
    }

    #[test]
    fn test_new_and_accessors() {
        let tile = Tile::new('c', 4).unwrap();
        assert_eq!(tile.row(), 'C');
        assert_eq!(tile.row_index(), 2);
        assert_eq!(tile.column(), 4);
        assert_eq!(tile.to_string(), "C4");
    }

    #[test]
    fn test_out_of_range() {
        assert!(Tile::new('J', 1).is_err());
        assert!(Tile::new('A', 0).is_err());
        assert!(Tile::new('A', 13).is_err());
        assert!(Tile::new('Z', 27).is_err());
        assert!(Tile::new('1', 1).is_err());
        assert!(Tile::parse("").is_err());
        assert!(Tile::parse("A").is_err());
        assert!(Tile::parse("Ax").is_err());
    }

    #[test]
    fn test_parse_rejects_loose_columns() {
        for label in ["A+1", "A01", "A012", "B-3", "C 4", "D1x", "E٣"] {
            assert!(
                matches!(Tile::parse(label), Err(EngineError::InvalidTile(_))),
                "{label} should not parse"
            );
        }
        assert_eq!(Tile::parse("A10").unwrap(), Tile::new('A', 10).unwrap());
        assert_eq!(Tile::parse(" i12 ").unwrap(), Tile::new('I', 12).unwrap());
    }

    #[test]
    fn test_corner_adjacency() {
        let around = t("A1").adjacent();
        assert_eq!(around.as_slice(), &[t("B1"), t("A2")]);

        let around = t("I12").adjacent();
        assert_eq!(around.as_slice(), &[t("H12"), t("I11")]);
    }

    #[test]
    fn test_interior_adjacency_order() {
        let around = t("E6").adjacent();
        assert_eq!(around.as_slice(), &[t("D6"), t("E5"), t("F6"), t("E7")]);
    }

    #[test]
    fn test_is_adjacent() {
        assert!(t("A1").is_adjacent(t("A2")));
        assert!(t("B2").is_adjacent(t("A2")));
        assert!(!t("A1").is_adjacent(t("B2")));
        assert!(!t("A1").is_adjacent(t("A1")));
        assert!(!t("A12").is_adjacent(t("B1")));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut tiles = vec![t("C1"), t("B3"), t("A1"), t("A12"), t("A2")];
        tiles.sort();
        assert_eq!(tiles, vec![t("A1"), t("A2"), t("A12"), t("B3"), t("C1")]);
    }

    #[test]
    fn test_all_tiles() {
        let all: Vec<_> = Tile::all().collect();
        assert_eq!(all.len(), 108);
        assert_eq!(all[0], t("A1"));
        assert_eq!(all[107], t("I12"));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&t("B7")).unwrap();
        assert_eq!(json, r#"{"row":"B","column":7}"#);
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("B7"));

        let bad: Result<Tile, _> = serde_json::from_str(r#"{"row":"Q","column":7}"#);
        assert!(bad.is_err());
    }
}
