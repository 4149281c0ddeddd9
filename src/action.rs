//! Player actions: preconditions, effects and rewards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PetError;
use crate::pet::PetState;
use crate::stats::Stat;

/// A stat is considered full from this value up.
pub const FULL_THRESHOLD: f64 = 95.0;
/// Minimum energy needed to play.
pub const PLAY_MIN_ENERGY: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Feed,
    GiveDrink,
    Play,
    Clean,
    ToggleSleep,
}

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Asleep,
    AlreadyFull(Stat),
    TooTired,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Asleep => write!(f, "asleep"),
            Rejection::AlreadyFull(stat) => {
                write!(f, "{} already full", stat.label().to_lowercase())
            }
            Rejection::TooTired => write!(f, "too tired"),
        }
    }
}

impl Rejection {
    pub fn message(&self, name: &str) -> String {
        match self {
            Rejection::Asleep => format!("{} is sleeping. Wake them up first!", name),
            Rejection::AlreadyFull(Stat::Hunger) => format!("{} is already full!", name),
            Rejection::AlreadyFull(Stat::Thirst) => format!("{} isn't thirsty!", name),
            Rejection::AlreadyFull(Stat::Cleanliness) => {
                format!("{} is already squeaky clean!", name)
            }
            Rejection::AlreadyFull(stat) => {
                format!("{}'s {} is already full!", name, stat.label().to_lowercase())
            }
            Rejection::TooTired => format!("{} is too tired, they need to rest first!", name),
        }
    }
}

/// The stat changes and rewards of an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub deltas: &'static [(Stat, f64)],
    pub experience: u32,
    pub coins: u32,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Feed,
        Action::GiveDrink,
        Action::Play,
        Action::Clean,
        Action::ToggleSleep,
    ];

    pub fn effect(&self) -> Effect {
        match self {
            Action::Feed => Effect {
                deltas: &[(Stat::Hunger, 25.0), (Stat::Happiness, 5.0)],
                experience: 10,
                coins: 0,
            },
            Action::GiveDrink => Effect {
                deltas: &[(Stat::Thirst, 30.0), (Stat::Happiness, 3.0)],
                experience: 8,
                coins: 0,
            },
            Action::Play => Effect {
                deltas: &[(Stat::Happiness, 20.0), (Stat::Energy, -15.0)],
                experience: 15,
                coins: 5,
            },
            Action::Clean => Effect {
                deltas: &[
                    (Stat::Cleanliness, 35.0),
                    (Stat::Happiness, 10.0),
                    (Stat::Health, 5.0),
                ],
                experience: 12,
                coins: 0,
            },
            Action::ToggleSleep => Effect {
                deltas: &[],
                experience: 5,
                coins: 0,
            },
        }
    }

    /// Validate the action against the current state without touching it.
    pub fn check(&self, pet: &PetState) -> Result<(), Rejection> {
        if *self == Action::ToggleSleep {
            return Ok(());
        }
        if pet.is_sleeping() {
            return Err(Rejection::Asleep);
        }

        let stats = pet.stats();
        match self {
            Action::Feed if stats.hunger() >= FULL_THRESHOLD => {
                Err(Rejection::AlreadyFull(Stat::Hunger))
            }
            Action::GiveDrink if stats.thirst() >= FULL_THRESHOLD => {
                Err(Rejection::AlreadyFull(Stat::Thirst))
            }
            Action::Clean if stats.cleanliness() >= FULL_THRESHOLD => {
                Err(Rejection::AlreadyFull(Stat::Cleanliness))
            }
            Action::Play if stats.energy() < PLAY_MIN_ENERGY => Err(Rejection::TooTired),
            _ => Ok(()),
        }
    }

    /// Activity log label. Sleep toggling is labelled by direction.
    pub fn label(&self, was_sleeping: bool) -> &'static str {
        match self {
            Action::Feed => "Feed",
            Action::GiveDrink => "Drink",
            Action::Play => "Play",
            Action::Clean => "Clean",
            Action::ToggleSleep if was_sleeping => "Wake up",
            Action::ToggleSleep => "Sleep",
        }
    }

    pub fn success_message(&self, name: &str, was_sleeping: bool) -> String {
        match self {
            Action::Feed => format!("{} loved the meal! 😋", name),
            Action::GiveDrink => format!("{} drank the water! 💧", name),
            Action::Play => format!("{} had a blast playing! 🎾", name),
            Action::Clean => format!("{} is sparkling clean! ✨", name),
            Action::ToggleSleep if was_sleeping => format!("{} woke up! ☀️", name),
            Action::ToggleSleep => format!("{} went to sleep... 😴", name),
        }
    }

    /// Summary of the stat changes actually applied, e.g. `+20 Hunger, +5 Happiness`.
    pub fn summary(&self, applied: &[(Stat, f64)], was_sleeping: bool) -> String {
        let effect = self.effect();
        if effect.deltas.is_empty() {
            return if was_sleeping { "Rested" } else { "Resting" }.to_string();
        }

        let mut parts: Vec<String> = applied
            .iter()
            .map(|(stat, delta)| format!("{} {}", format_delta(*delta), stat.label()))
            .collect();
        if effect.coins > 0 {
            parts.push(format!("+{} Coins", effect.coins));
        }
        parts.join(", ")
    }
}

/// Whole deltas print as integers, clamped fractional ones with one decimal.
fn format_delta(delta: f64) -> String {
    let rounded = (delta * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:+}", rounded as i64)
    } else {
        format!("{:+.1}", rounded)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Feed => write!(f, "feed"),
            Action::GiveDrink => write!(f, "drink"),
            Action::Play => write!(f, "play"),
            Action::Clean => write!(f, "clean"),
            Action::ToggleSleep => write!(f, "sleep"),
        }
    }
}

impl FromStr for Action {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feed" | "f" | "eat" => Ok(Action::Feed),
            "drink" | "d" | "water" | "give_drink" => Ok(Action::GiveDrink),
            "play" | "p" => Ok(Action::Play),
            "clean" | "c" | "wash" => Ok(Action::Clean),
            "sleep" | "s" | "wake" | "toggle_sleep" => Ok(Action::ToggleSleep),
            other => Err(PetError::UnknownAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatVector;
    use chrono::Utc;

    fn pet_with(stats: StatVector) -> PetState {
        PetState::new("Minnoş", Utc::now()).with_stats(stats)
    }

    #[test]
    fn test_preconditions() {
        let full = pet_with(StatVector::new(96.0, 95.0, 19.0, 50.0, 99.0, 50.0));
        assert_eq!(Action::Feed.check(&full), Err(Rejection::AlreadyFull(Stat::Hunger)));
        assert_eq!(Action::GiveDrink.check(&full), Err(Rejection::AlreadyFull(Stat::Thirst)));
        assert_eq!(Action::Clean.check(&full), Err(Rejection::AlreadyFull(Stat::Cleanliness)));
        assert_eq!(Action::Play.check(&full), Err(Rejection::TooTired));
        assert_eq!(Action::ToggleSleep.check(&full), Ok(()));

        let ready = pet_with(StatVector::new(94.9, 10.0, 20.0, 50.0, 0.0, 50.0));
        for action in Action::ALL {
            assert_eq!(action.check(&ready), Ok(()), "{} should be allowed", action);
        }
    }

    #[test]
    fn test_sleeping_blocks_everything_but_waking() {
        let mut pet = pet_with(StatVector::new(10.0, 10.0, 90.0, 50.0, 10.0, 50.0));
        pet.sleeping = true;

        assert_eq!(Action::Feed.check(&pet), Err(Rejection::Asleep));
        assert_eq!(Action::GiveDrink.check(&pet), Err(Rejection::Asleep));
        assert_eq!(Action::Play.check(&pet), Err(Rejection::Asleep));
        assert_eq!(Action::Clean.check(&pet), Err(Rejection::Asleep));
        assert_eq!(Action::ToggleSleep.check(&pet), Ok(()));
    }

    fn nominal_summary(action: Action) -> String {
        action.summary(action.effect().deltas, false)
    }

    #[test]
    fn test_summaries() {
        assert_eq!(nominal_summary(Action::Feed), "+25 Hunger, +5 Happiness");
        assert_eq!(nominal_summary(Action::GiveDrink), "+30 Thirst, +3 Happiness");
        assert_eq!(nominal_summary(Action::Play), "+20 Happiness, -15 Energy, +5 Coins");
        assert_eq!(
            nominal_summary(Action::Clean),
            "+35 Cleanliness, +10 Happiness, +5 Health"
        );
        assert_eq!(Action::ToggleSleep.summary(&[], false), "Resting");
        assert_eq!(Action::ToggleSleep.summary(&[], true), "Rested");
    }

    #[test]
    fn test_summary_reports_clamped_amounts() {
        let applied = [(Stat::Hunger, 20.0), (Stat::Happiness, 0.0)];
        assert_eq!(Action::Feed.summary(&applied, false), "+20 Hunger, +0 Happiness");

        let fractional = [(Stat::Thirst, 4.5), (Stat::Happiness, 3.0)];
        assert_eq!(
            Action::GiveDrink.summary(&fractional, false),
            "+4.5 Thirst, +3 Happiness"
        );

        // float noise from non-clamped adds is hidden
        let noisy = [(Stat::Hunger, 25.000000000000004), (Stat::Happiness, 5.0)];
        assert_eq!(Action::Feed.summary(&noisy, false), "+25 Hunger, +5 Happiness");
    }

    #[test]
    fn test_parse() {
        assert_eq!("feed".parse::<Action>().unwrap(), Action::Feed);
        assert_eq!(" Drink ".parse::<Action>().unwrap(), Action::GiveDrink);
        assert_eq!("wake".parse::<Action>().unwrap(), Action::ToggleSleep);
        assert!(matches!("shop".parse::<Action>(), Err(PetError::UnknownAction(_))));
    }

    #[test]
    fn test_display_round_trips() {
        for action in Action::ALL {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }
}
