//! Experience, level and coin rewards.

use serde::{Deserialize, Serialize};

pub const STARTING_THRESHOLD: u32 = 100;
pub const STARTING_COINS: u32 = 50;
/// Added to the threshold on every level-up.
pub const THRESHOLD_GROWTH: u32 = 50;
/// Coins awarded on every level-up.
pub const LEVEL_UP_COINS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub coins: u32,
}

/// Result of a level transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub coins_awarded: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Progression {
            level: 1,
            experience: 0,
            experience_to_next: STARTING_THRESHOLD,
            coins: STARTING_COINS,
        }
    }
}

impl Progression {
    pub fn grant(&mut self, experience: u32, coins: u32) {
        self.experience = self.experience.saturating_add(experience);
        self.coins = self.coins.saturating_add(coins);
    }

    /// Evaluate the level threshold once.
    ///
    /// A grant large enough to cross two thresholds still yields a single
    /// level; the remainder carries into the next evaluation.
    pub fn check_level_up(&mut self) -> Option<LevelUp> {
        if self.experience < self.experience_to_next {
            return None;
        }

        let old_level = self.level;
        self.level += 1;
        self.experience -= self.experience_to_next;
        self.experience_to_next = self.experience_to_next.saturating_add(THRESHOLD_GROWTH);
        self.coins = self.coins.saturating_add(LEVEL_UP_COINS);

        Some(LevelUp {
            old_level,
            new_level: self.level,
            coins_awarded: LEVEL_UP_COINS,
        })
    }

    /// Fraction of the way to the next level, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.experience as f64 / self.experience_to_next as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_level_below_threshold() {
        let mut p = Progression::default();
        p.grant(99, 0);
        assert_eq!(p.check_level_up(), None);
        assert_eq!(p.level, 1);
        assert_eq!(p.experience, 99);
    }

    #[test]
    fn test_level_up_carries_remainder() {
        let mut p = Progression {
            experience: 95,
            ..Progression::default()
        };
        p.grant(15, 5);
        let level_up = p.check_level_up().unwrap();

        assert_eq!(level_up.old_level, 1);
        assert_eq!(level_up.new_level, 2);
        assert_eq!(p.experience, 10);
        assert_eq!(p.experience_to_next, 150);
        assert_eq!(p.coins, 50 + 5 + 20);
    }

    #[test]
    fn test_exact_threshold_levels_to_zero() {
        let mut p = Progression::default();
        p.grant(100, 0);
        assert!(p.check_level_up().is_some());
        assert_eq!(p.experience, 0);
    }

    #[test]
    fn test_single_step_per_evaluation() {
        let mut p = Progression::default();
        p.grant(300, 0);
        p.check_level_up();
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 200);
        assert_eq!(p.experience_to_next, 150);

        p.check_level_up();
        assert_eq!(p.level, 3);
        assert_eq!(p.experience, 50);
    }

    #[test]
    fn test_progress_fraction() {
        let p = Progression {
            experience: 25,
            ..Progression::default()
        };
        assert!((p.progress() - 0.25).abs() < 1e-9);
    }
}
