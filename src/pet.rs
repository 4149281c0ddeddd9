use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::{derive_mood, Mood};
use crate::progression::Progression;
use crate::stats::StatVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Cat,
}

impl std::fmt::Display for PetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetKind::Cat => write!(f, "cat"),
        }
    }
}

/// The simulated pet.
///
/// Mutable state is only reachable inside the crate. Stat writes are paired
/// with [`PetState::refresh_mood`] so `mood` always matches `stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub(crate) name: String,
    pub(crate) kind: PetKind,
    #[serde(flatten)]
    pub(crate) progression: Progression,
    pub(crate) stats: StatVector,
    pub(crate) mood: Mood,
    pub(crate) sleeping: bool,
    pub(crate) last_update: DateTime<Utc>,
}

impl PetState {
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let stats = StatVector::default();
        PetState {
            name: name.into(),
            kind: PetKind::Cat,
            progression: Progression::default(),
            mood: derive_mood(&stats),
            stats,
            sleeping: false,
            last_update: now,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PetKind {
        self.kind
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn experience(&self) -> u32 {
        self.progression.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.progression.experience_to_next
    }

    pub fn coins(&self) -> u32 {
        self.progression.coins
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn stats(&self) -> &StatVector {
        &self.stats
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub(crate) fn refresh_mood(&mut self) {
        self.mood = derive_mood(&self.stats);
    }

    /// Replace the stat vector, keeping mood in step.
    #[cfg(test)]
    pub(crate) fn with_stats(mut self, stats: StatVector) -> Self {
        self.stats = stats;
        self.refresh_mood();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_profile() {
        let now = Utc::now();
        let pet = PetState::new("Minnoş", now);

        assert_eq!(pet.name(), "Minnoş");
        assert_eq!(pet.kind(), PetKind::Cat);
        assert_eq!(pet.level(), 1);
        assert_eq!(pet.experience(), 0);
        assert_eq!(pet.experience_to_next(), 100);
        assert_eq!(pet.coins(), 50);
        assert_eq!(pet.mood(), Mood::Happy);
        assert!(!pet.is_sleeping());
        assert_eq!(pet.last_update(), now);
    }

    #[test]
    fn test_serializes_flat_progression() {
        let pet = PetState::new("Minnoş", Utc::now());
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["experience_to_next"], 100);
        assert_eq!(json["kind"], "cat");
        assert_eq!(json["mood"], "happy");
    }
}
