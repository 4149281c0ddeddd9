//! Notification and activity streams handed to the presentation layer.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NOTIFICATION_CAPACITY: usize = 5;
pub const ACTIVITY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, timestamp: DateTime<Utc>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            timestamp,
        }
    }

    /// Whether a consumer showing this for `ttl` should have dropped it by `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.timestamp >= ttl
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub action: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityRecord {
    pub fn new(action: impl Into<String>, result: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        ActivityRecord {
            id: Uuid::new_v4(),
            action: action.into(),
            result: result.into(),
            timestamp,
        }
    }
}

/// Newest-first list that evicts its oldest entry past `capacity`.
#[derive(Debug, Clone, Serialize)]
pub struct EventFeed<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> EventFeed<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        EventFeed {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl EventFeed<Notification> {
    /// Notifications still visible at `now`, newest first.
    pub fn visible(&self, now: DateTime<Utc>, ttl: Duration) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| !n.is_expired(now, ttl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_is_newest_first_and_bounded() {
        let mut feed = EventFeed::with_capacity(3);
        for i in 0..5 {
            feed.push(i);
        }
        assert_eq!(feed.len(), 3);
        assert_eq!(feed.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
        assert_eq!(feed.latest(), Some(&4));
    }

    #[test]
    fn test_notification_expiry() {
        let now = Utc::now();
        let n = Notification::new("hello", Severity::Info, now);
        let ttl = Duration::seconds(5);

        assert!(!n.is_expired(now + Duration::seconds(4), ttl));
        assert!(n.is_expired(now + Duration::seconds(5), ttl));
    }

    #[test]
    fn test_visible_filters_expired() {
        let now = Utc::now();
        let mut feed = EventFeed::with_capacity(NOTIFICATION_CAPACITY);
        feed.push(Notification::new("old", Severity::Info, now - Duration::seconds(10)));
        feed.push(Notification::new("new", Severity::Success, now));

        let visible: Vec<_> = feed
            .visible(now, Duration::seconds(5))
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(visible, vec!["new"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = ActivityRecord::new("Feed", "+25 Hunger", now);
        let b = ActivityRecord::new("Feed", "+25 Hunger", now);
        assert_ne!(a.id, b.id);
    }
}
