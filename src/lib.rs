//! Virtual pet simulation engine.
//!
//! A single pet whose stats decay over elapsed time and are restored by
//! player actions. Mood is derived from the stats, and experience earned from
//! actions drives leveling and coin rewards.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stats`] | Six clamped attributes and the only write path into them |
//! | [`decay`] | Elapsed-time drift, branching on sleep |
//! | [`mood`] | Stat average to mood category |
//! | [`action`] | Player actions, preconditions and effects |
//! | [`progression`] | Experience, level and coin rewards |
//! | [`events`] | Bounded notification and activity streams |
//! | [`engine`] | Owns the pet and ties the above together |
//! | [`scheduler`] | Async fixed-cadence decay ticker |
//! | [`format`] | Terminal rendering of engine output |
//! | [`config`] | Runtime configuration |

pub mod action;
pub mod config;
pub mod decay;
pub mod engine;
pub mod error;
pub mod events;
pub mod format;
pub mod mood;
pub mod pet;
pub mod progression;
pub mod scheduler;
pub mod stats;

pub use action::{Action, Rejection};
pub use config::Config;
pub use decay::{apply_decay, DecayReport};
pub use engine::{ActionReport, PetEngine};
pub use error::{PetError, Result};
pub use events::{ActivityRecord, EventFeed, Notification, Severity};
pub use mood::{derive_mood, Mood};
pub use pet::{PetKind, PetState};
pub use progression::{LevelUp, Progression};
pub use stats::{Stat, StatVector};
