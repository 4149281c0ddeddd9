use serde::{Deserialize, Serialize};

use crate::stats::StatVector;

/// Mood category, derived from the stat average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,     // >= 80
    Content,   // >= 60
    Sad,       // >= 40
    Critical,  // < 40
}

impl Mood {
    pub fn from_average(avg: f64) -> Self {
        match avg {
            a if a >= 80.0 => Mood::Happy,
            a if a >= 60.0 => Mood::Content,
            a if a >= 40.0 => Mood::Sad,
            _ => Mood::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::Critical => "Critical",
        }
    }

    pub fn face(&self) -> &'static str {
        match self {
            Mood::Happy => "😸",
            Mood::Content => "😺",
            Mood::Sad => "😿",
            Mood::Critical => "🙀",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Happy => write!(f, "happy"),
            Mood::Content => write!(f, "content"),
            Mood::Sad => write!(f, "sad"),
            Mood::Critical => write!(f, "critical"),
        }
    }
}

pub fn derive_mood(stats: &StatVector) -> Mood {
    Mood::from_average(stats.average())
}
