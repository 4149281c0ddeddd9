use serde::{Deserialize, Serialize};

pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;

/// One of the six pet attributes. Higher is always better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Hunger,
    Thirst,
    Energy,
    Happiness,
    Cleanliness,
    Health,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hunger,
        Stat::Thirst,
        Stat::Energy,
        Stat::Happiness,
        Stat::Cleanliness,
        Stat::Health,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hunger => "Hunger",
            Stat::Thirst => "Thirst",
            Stat::Energy => "Energy",
            Stat::Happiness => "Happiness",
            Stat::Cleanliness => "Cleanliness",
            Stat::Health => "Health",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamp a raw value into the stat range. NaN collapses to the floor.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// The six attributes of a pet, each kept in `[0, 100]`.
///
/// Fields are private so that every write goes through [`StatVector::adjust`]
/// or [`StatVector::set`], both of which clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatVector {
    hunger: f64,
    thirst: f64,
    energy: f64,
    happiness: f64,
    cleanliness: f64,
    health: f64,
}

impl StatVector {
    pub fn new(
        hunger: f64,
        thirst: f64,
        energy: f64,
        happiness: f64,
        cleanliness: f64,
        health: f64,
    ) -> Self {
        StatVector {
            hunger: clamp_stat(hunger),
            thirst: clamp_stat(thirst),
            energy: clamp_stat(energy),
            happiness: clamp_stat(happiness),
            cleanliness: clamp_stat(cleanliness),
            health: clamp_stat(health),
        }
    }

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Energy => self.energy,
            Stat::Happiness => self.happiness,
            Stat::Cleanliness => self.cleanliness,
            Stat::Health => self.health,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Hunger => &mut self.hunger,
            Stat::Thirst => &mut self.thirst,
            Stat::Energy => &mut self.energy,
            Stat::Happiness => &mut self.happiness,
            Stat::Cleanliness => &mut self.cleanliness,
            Stat::Health => &mut self.health,
        }
    }

    /// Apply a signed delta and clamp. Returns the delta actually applied.
    pub fn adjust(&mut self, stat: Stat, delta: f64) -> f64 {
        let slot = self.slot(stat);
        let before = *slot;
        let delta = if delta.is_nan() { 0.0 } else { delta };
        *slot = clamp_stat(before + delta);
        *slot - before
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        *self.slot(stat) = clamp_stat(value);
    }

    pub fn hunger(&self) -> f64 {
        self.hunger
    }

    pub fn thirst(&self) -> f64 {
        self.thirst
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn happiness(&self) -> f64 {
        self.happiness
    }

    pub fn cleanliness(&self) -> f64 {
        self.cleanliness
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn average(&self) -> f64 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum::<f64>() / Stat::ALL.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

impl Default for StatVector {
    /// Starting profile of a fresh pet.
    fn default() -> Self {
        StatVector::new(80.0, 75.0, 60.0, 85.0, 90.0, 95.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let stats = StatVector::default();
        assert_eq!(stats.hunger(), 80.0);
        assert_eq!(stats.thirst(), 75.0);
        assert_eq!(stats.energy(), 60.0);
        assert_eq!(stats.happiness(), 85.0);
        assert_eq!(stats.cleanliness(), 90.0);
        assert_eq!(stats.health(), 95.0);
    }

    #[test]
    fn test_adjust_clamps_both_ends() {
        let mut stats = StatVector::default();
        let applied = stats.adjust(Stat::Hunger, 25.0);
        assert_eq!(stats.hunger(), 100.0);
        assert_eq!(applied, 20.0);

        stats.adjust(Stat::Energy, -1_000.0);
        assert_eq!(stats.energy(), 0.0);
    }

    #[test]
    fn test_nan_cannot_escape_range() {
        let mut stats = StatVector::default();
        stats.adjust(Stat::Thirst, f64::NAN);
        assert_eq!(stats.thirst(), 75.0);

        stats.set(Stat::Health, f64::NAN);
        assert_eq!(stats.health(), 0.0);

        let built = StatVector::new(f64::INFINITY, -5.0, 50.0, 50.0, 50.0, 50.0);
        assert_eq!(built.hunger(), 100.0);
        assert_eq!(built.thirst(), 0.0);
    }

    #[test]
    fn test_average() {
        let stats = StatVector::default();
        let expected = (80.0 + 75.0 + 60.0 + 85.0 + 90.0 + 95.0) / 6.0;
        assert!((stats.average() - expected).abs() < 1e-9);
    }
}
