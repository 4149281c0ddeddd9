//! Terminal rendering of pet state and engine events.

use chrono::{DateTime, Duration, Utc};

use crate::engine::ActionReport;
use crate::events::{ActivityRecord, EventFeed, Notification, Severity};
use crate::pet::PetState;
use crate::stats::Stat;

pub struct PetFormatter;

impl PetFormatter {
    /// Face shown for the pet; sleep overrides mood.
    pub fn face(pet: &PetState) -> &'static str {
        if pet.is_sleeping() {
            "😴"
        } else {
            pet.mood().face()
        }
    }

    pub fn status_line(pet: &PetState) -> String {
        if pet.is_sleeping() {
            "Sleeping".to_string()
        } else {
            format!("Mood: {}", pet.mood().label())
        }
    }

    pub fn format_status(pet: &PetState) -> String {
        let mut stats = String::new();
        for (stat, value) in pet.stats().iter() {
            stats.push_str(&format!(
                "{} {:<12} {} {:>3}\n",
                Self::stat_icon(stat),
                stat.label(),
                Self::format_bar(value / 100.0),
                value.round() as i64
            ));
        }

        format!(
            r#"
╔══════════════════════════════════════════════╗
  {} {} the {}
╚══════════════════════════════════════════════╝
⭐ Level {}    🎁 {} Coins
✨ XP {} {}/{}

        {}
   {}

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
"#,
            Self::face(pet),
            pet.name(),
            pet.kind(),
            pet.level(),
            pet.coins(),
            Self::format_bar(pet.progression().progress()),
            pet.experience(),
            pet.experience_to_next(),
            Self::face(pet),
            Self::status_line(pet),
            stats
        )
    }

    pub fn format_report(report: &ActionReport) -> String {
        let mut out = Self::format_notification(&report.notification);
        if let Some(level_up) = &report.level_up {
            out.push_str(&format!(
                "\n🎉 Level up! Lv.{} → Lv.{} (+{} coins)",
                level_up.old_level, level_up.new_level, level_up.coins_awarded
            ));
        }
        out
    }

    pub fn format_notification(notification: &Notification) -> String {
        format!("{} {}", Self::severity_icon(notification.severity), notification.message)
    }

    pub fn format_notifications(
        feed: &EventFeed<Notification>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> String {
        feed.visible(now, ttl)
            .map(Self::format_notification)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_activities(feed: &EventFeed<ActivityRecord>) -> String {
        if feed.is_empty() {
            return "No activity yet.".to_string();
        }

        feed.iter()
            .map(|a| format!("{}  {:<8} {}", a.timestamp.format("%H:%M:%S"), a.action, a.result))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "ℹ️ ",
            Severity::Success => "✅",
            Severity::Warning => "⚠️ ",
        }
    }

    fn stat_icon(stat: Stat) -> &'static str {
        match stat {
            Stat::Hunger => "🍖",
            Stat::Thirst => "💧",
            Stat::Energy => "⚡",
            Stat::Happiness => "💖",
            Stat::Cleanliness => "🧼",
            Stat::Health => "❤️ ",
        }
    }

    /// Ten-cell bar for a fraction in `[0, 1]`.
    pub fn format_bar(fraction: f64) -> String {
        let filled = (fraction.clamp(0.0, 1.0) * 10.0).round() as usize;
        format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PetEngine;

    #[test]
    fn test_format_bar() {
        assert_eq!(PetFormatter::format_bar(0.0), "[░░░░░░░░░░]");
        assert_eq!(PetFormatter::format_bar(0.54), "[█████░░░░░]");
        assert_eq!(PetFormatter::format_bar(3.0), "[██████████]");
    }

    #[test]
    fn test_status_shows_core_fields() {
        let pet = PetState::new("Minnoş", Utc::now());
        let text = PetFormatter::format_status(&pet);
        assert!(text.contains("Minnoş the cat"));
        assert!(text.contains("Level 1"));
        assert!(text.contains("0/100"));
        assert!(text.contains("Mood: Happy"));
        assert!(text.contains("😸"));
    }

    #[test]
    fn test_sleeping_face() {
        let mut engine = PetEngine::new("Minnoş", Utc::now());
        engine.toggle_sleep();
        assert_eq!(PetFormatter::face(engine.state()), "😴");
        assert_eq!(PetFormatter::status_line(engine.state()), "Sleeping");
    }

    #[test]
    fn test_report_mentions_level_up() {
        let mut engine = PetEngine::new("Minnoş", Utc::now());
        let mut last = None;
        for _ in 0..20 {
            let report = engine.toggle_sleep();
            if report.level_up.is_some() {
                last = Some(report);
                break;
            }
        }
        let text = PetFormatter::format_report(&last.unwrap());
        assert!(text.contains("Lv.1 → Lv.2"));
    }

    #[test]
    fn test_activities_empty() {
        let engine = PetEngine::new("Minnoş", Utc::now());
        assert_eq!(PetFormatter::format_activities(engine.activities()), "No activity yet.");
    }
}
