//! The pet engine: owns the state and the event streams.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::action::{Action, Rejection};
use crate::decay::{self, DecayReport};
use crate::events::{
    ActivityRecord, EventFeed, Notification, Severity, ACTIVITY_CAPACITY, NOTIFICATION_CAPACITY,
};
use crate::pet::PetState;
use crate::progression::LevelUp;

/// What a single action call produced.
#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    pub action: Action,
    pub notification: Notification,
    pub activity: Option<ActivityRecord>,
    pub level_up: Option<LevelUp>,
    #[serde(skip)]
    pub rejection: Option<Rejection>,
}

impl ActionReport {
    pub fn applied(&self) -> bool {
        self.rejection.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PetEngine {
    pet: PetState,
    notifications: EventFeed<Notification>,
    activities: EventFeed<ActivityRecord>,
}

impl PetEngine {
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::from_state(PetState::new(name, now))
    }

    pub(crate) fn from_state(pet: PetState) -> Self {
        let mut engine = PetEngine {
            pet,
            notifications: EventFeed::with_capacity(NOTIFICATION_CAPACITY),
            activities: EventFeed::with_capacity(ACTIVITY_CAPACITY),
        };
        let created = engine.pet.last_update;
        engine.settle_progression(created);
        engine
    }

    pub fn state(&self) -> &PetState {
        &self.pet
    }

    pub fn snapshot(&self) -> PetState {
        self.pet.clone()
    }

    pub fn notifications(&self) -> &EventFeed<Notification> {
        &self.notifications
    }

    pub fn activities(&self) -> &EventFeed<ActivityRecord> {
        &self.activities
    }

    pub fn apply_decay(&mut self, now: DateTime<Utc>) -> DecayReport {
        decay::apply_decay(&mut self.pet, now)
    }

    pub fn feed(&mut self) -> ActionReport {
        self.perform(Action::Feed)
    }

    pub fn give_drink(&mut self) -> ActionReport {
        self.perform(Action::GiveDrink)
    }

    pub fn play(&mut self) -> ActionReport {
        self.perform(Action::Play)
    }

    pub fn clean(&mut self) -> ActionReport {
        self.perform(Action::Clean)
    }

    pub fn toggle_sleep(&mut self) -> ActionReport {
        self.perform(Action::ToggleSleep)
    }

    pub fn can_perform(&self, action: Action) -> Result<(), Rejection> {
        action.check(&self.pet)
    }

    pub fn perform(&mut self, action: Action) -> ActionReport {
        self.perform_at(action, Utc::now())
    }

    /// Run `action` to completion, stamping any events with `now`.
    pub fn perform_at(&mut self, action: Action, now: DateTime<Utc>) -> ActionReport {
        if let Err(rejection) = action.check(&self.pet) {
            tracing::debug!("Rejected {}: {}", action, rejection);
            let notification = Notification::new(
                rejection.message(&self.pet.name),
                Severity::Warning,
                now,
            );
            self.notifications.push(notification.clone());
            return ActionReport {
                action,
                notification,
                activity: None,
                level_up: None,
                rejection: Some(rejection),
            };
        }

        let was_sleeping = self.pet.sleeping;
        let effect = action.effect();

        let applied: Vec<_> = effect
            .deltas
            .iter()
            .map(|(stat, delta)| (*stat, self.pet.stats.adjust(*stat, *delta)))
            .collect();
        if action == Action::ToggleSleep {
            self.pet.sleeping = !was_sleeping;
        }
        self.pet.progression.grant(effect.experience, effect.coins);
        self.pet.refresh_mood();

        let severity = match action {
            Action::ToggleSleep => Severity::Info,
            _ => Severity::Success,
        };
        let notification = Notification::new(
            action.success_message(&self.pet.name, was_sleeping),
            severity,
            now,
        );
        let activity = ActivityRecord::new(
            action.label(was_sleeping),
            action.summary(&applied, was_sleeping),
            now,
        );
        self.notifications.push(notification.clone());
        self.activities.push(activity.clone());

        let level_up = self.settle_progression(now);

        ActionReport {
            action,
            notification,
            activity: Some(activity),
            level_up,
            rejection: None,
        }
    }

    fn settle_progression(&mut self, now: DateTime<Utc>) -> Option<LevelUp> {
        let level_up = self.pet.progression.check_level_up()?;
        tracing::info!(
            "{} reached level {} (+{} coins)",
            self.pet.name,
            level_up.new_level,
            level_up.coins_awarded
        );
        self.notifications.push(Notification::new(
            format!("🎉 Level up! Level {}", level_up.new_level),
            Severity::Success,
            now,
        ));
        Some(level_up)
    }
}
