//! Connected-component search over tile sets.

use im::OrdSet;

use crate::core::Tile;

/// Every tile of `tiles` reachable from `start` through edge adjacency,
/// excluding `start` itself, in discovery order.
///
/// Works on its own copy of the set (an O(1) clone for `im::OrdSet`) with an
/// explicit stack, so large groups cannot overflow the call stack and the
/// caller's set is untouched.
///
/// ```
/// use acquire_engine::board::connected_group;
/// use acquire_engine::core::Tile;
///
/// let tiles: im::OrdSet<Tile> = ["A1", "A2", "A3", "C3"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
/// let group = connected_group(&tiles, "A1".parse().unwrap());
/// assert_eq!(group.len(), 2);
/// ```
#[must_use]
pub fn connected_group(tiles: &OrdSet<Tile>, start: Tile) -> Vec<Tile> {
    let mut remaining = tiles.clone();
    remaining.remove(&start);

    let mut group = Vec::new();
    let mut stack = vec![start];

    while let Some(tile) = stack.pop() {
        for next in tile.adjacent() {
            if remaining.remove(&next).is_some() {
                group.push(next);
                stack.push(next);
            }
        }
    }

    group
}

/// True if `tiles` is non-empty and forms a single connected component.
#[must_use]
pub fn is_connected(tiles: &OrdSet<Tile>) -> bool {
    match tiles.get_min() {
        Some(&first) => connected_group(tiles, first).len() + 1 == tiles.len(),
        None => false,
    }
}
