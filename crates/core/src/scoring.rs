//! Scoring module - reward points and speed progression
//!
//! Every `score_per_tier` points the game speeds up by one tier: the tick
//! interval shrinks by a fixed decrement, clamped at a floor. A score of zero
//! puts speed back to its initial values.

use crate::config::GameConfig;
use crate::types::RewardTier;

/// Tick speed after progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    pub tier: u32,
    pub interval_ms: u32,
}

impl Speed {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            tier: 0,
            interval_ms: config.initial_tick_ms,
        }
    }
}

/// Points awarded for eating food of `tier`
pub fn reward_points(tier: RewardTier) -> u32 {
    tier.points()
}

/// Recompute speed for the current score
///
/// Steps up one tier for each threshold `score_per_tier * (tier + 1)` the
/// score has reached.
pub fn apply_speed_progression(score: u32, speed: Speed, config: &GameConfig) -> Speed {
    if score == 0 {
        return Speed::initial(config);
    }

    let mut next = speed;
    while score >= config.score_per_speed_tier.saturating_mul(next.tier + 1) {
        next.tier += 1;
        next.interval_ms = next
            .interval_ms
            .saturating_sub(config.tick_decrement_ms)
            .max(config.min_tick_ms);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_no_progress_below_threshold() {
        let c = config();
        let s = apply_speed_progression(49, Speed::initial(&c), &c);
        assert_eq!(s, Speed { tier: 0, interval_ms: 150 });
    }

    #[test]
    fn test_first_tier_at_fifty() {
        let c = config();
        let s = apply_speed_progression(50, Speed::initial(&c), &c);
        assert_eq!(s, Speed { tier: 1, interval_ms: 130 });

        // Same score again does not step twice
        let s = apply_speed_progression(55, s, &c);
        assert_eq!(s, Speed { tier: 1, interval_ms: 130 });
    }

    #[test]
    fn test_interval_floor() {
        let c = config();
        let mut s = Speed::initial(&c);
        for score in (50..=500).step_by(50) {
            s = apply_speed_progression(score, s, &c);
        }
        assert_eq!(s.tier, 10);
        assert_eq!(s.interval_ms, 50);
    }

    #[test]
    fn test_multiple_thresholds_at_once() {
        let c = config();
        let s = apply_speed_progression(120, Speed::initial(&c), &c);
        assert_eq!(s, Speed { tier: 2, interval_ms: 110 });
    }

    #[test]
    fn test_zero_score_resets() {
        let c = config();
        let s = Speed { tier: 4, interval_ms: 70 };
        assert_eq!(apply_speed_progression(0, s, &c), Speed::initial(&c));
    }

    #[test]
    fn test_reward_points() {
        assert_eq!(reward_points(RewardTier::Common), 1);
        assert_eq!(reward_points(RewardTier::Uncommon), 5);
        assert_eq!(reward_points(RewardTier::Rare), 10);
    }
}
