//! Food placement and reward tier rolls.
//!
//! Both draws come from the game's `SimpleRng` and are independent of each
//! other: the tier is rolled after placement, never derived from it.

use std::collections::HashSet;

use crate::rng::SimpleRng;
use crate::types::{CellId, RewardTier};

/// Pick a food cell uniformly from `[1, max_cell]`
///
/// Rejection-samples until the cell is neither occupied nor the previous food
/// cell. Returns `None` when no such cell exists, so the loop always ends.
pub fn place_food(
    rng: &mut SimpleRng,
    occupied: &HashSet<CellId>,
    max_cell: CellId,
    previous: Option<CellId>,
) -> Option<CellId> {
    let blocked_previous = previous
        .filter(|p| (1..=max_cell).contains(p) && !occupied.contains(p))
        .map_or(0, |_| 1);
    let blocked_occupied = occupied
        .iter()
        .filter(|c| (1..=max_cell).contains(*c))
        .count() as u32;
    if blocked_occupied + blocked_previous >= max_cell {
        return None;
    }

    loop {
        let cell = rng.next_inclusive(1, max_cell);
        if occupied.contains(&cell) || previous == Some(cell) {
            continue;
        }
        return Some(cell);
    }
}

/// Draw a reward tier: Rare below 0.05, Uncommon below 0.20, else Common
pub fn roll_reward_tier(rng: &mut SimpleRng) -> RewardTier {
    RewardTier::from_draw(rng.next_f64())
}
