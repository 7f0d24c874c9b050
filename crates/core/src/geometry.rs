//! Coordinate math: stepping in a direction and inferring the direction
//! between neighbouring coordinates.

use crate::types::{Coord, Direction};

/// The coordinate one step away in `direction`
pub fn step(coord: Coord, direction: Direction) -> Coord {
    let (dr, dc) = direction.delta();
    Coord::new(coord.row + dr, coord.col + dc)
}

/// Direction of travel from `from` to `to`
///
/// Returns `None` unless the coordinates are 4-adjacent.
pub fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| step(from, d) == to)
}
