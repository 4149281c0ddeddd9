//! Time-based stat drift.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pet::PetState;
use crate::stats::Stat;

// Per-minute rates
const HUNGER_DECAY: f64 = 0.5;
const THIRST_DECAY: f64 = 0.7;
const ENERGY_DECAY: f64 = 0.3;
const CLEANLINESS_DECAY: f64 = 0.2;
const SLEEP_ENERGY_GAIN: f64 = 1.5;
const HEALTH_DRIFT: f64 = 0.1;
const UNHAPPY_DECAY: f64 = 0.8;

// Happiness only drops while a need is below its threshold
const HUNGER_DISTRESS: f64 = 30.0;
const THIRST_DISTRESS: f64 = 30.0;
const ENERGY_DISTRESS: f64 = 20.0;

/// Below this many minutes a decay call is ignored.
pub const MIN_ELAPSED_MINUTES: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecayReport {
    pub elapsed_minutes: f64,
    pub applied: bool,
}

/// Minutes between two instants, never negative.
pub fn elapsed_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = to.signed_duration_since(from).num_milliseconds();
    (millis as f64 / 60_000.0).max(0.0)
}

/// Advance `pet` to `now`.
///
/// Does nothing (and leaves `last_update` alone) when less than a minute has
/// passed or `now` is before the last update.
pub fn apply_decay(pet: &mut PetState, now: DateTime<Utc>) -> DecayReport {
    let elapsed = elapsed_minutes(pet.last_update, now);
    if elapsed < MIN_ELAPSED_MINUTES {
        tracing::trace!("Decay skipped: {:.3} min elapsed", elapsed);
        return DecayReport {
            elapsed_minutes: elapsed,
            applied: false,
        };
    }

    let stats = &mut pet.stats;
    if pet.sleeping {
        stats.adjust(Stat::Energy, SLEEP_ENERGY_GAIN * elapsed);
    } else {
        stats.adjust(Stat::Hunger, -HUNGER_DECAY * elapsed);
        stats.adjust(Stat::Thirst, -THIRST_DECAY * elapsed);
        stats.adjust(Stat::Energy, -ENERGY_DECAY * elapsed);
        stats.adjust(Stat::Cleanliness, -CLEANLINESS_DECAY * elapsed);
    }

    // Health sinks toward the worst need but never rises here
    let floor = stats.hunger().min(stats.thirst()).min(stats.cleanliness());
    let current = stats.health();
    let drifted = floor.max(current - HEALTH_DRIFT * elapsed);
    stats.set(Stat::Health, drifted.min(current));

    if stats.hunger() < HUNGER_DISTRESS
        || stats.thirst() < THIRST_DISTRESS
        || stats.energy() < ENERGY_DISTRESS
    {
        stats.adjust(Stat::Happiness, -UNHAPPY_DECAY * elapsed);
    }

    pet.refresh_mood();
    pet.last_update = now;

    tracing::debug!(
        "Decay applied: {:.2} min, sleeping={}, mood={}",
        elapsed,
        pet.sleeping,
        pet.mood
    );

    DecayReport {
        elapsed_minutes: elapsed,
        applied: true,
    }
}
