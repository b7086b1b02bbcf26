use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the listener is feeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Chill,
    Focused,
}

/// What the listener is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Situation {
    Working,
    Commuting,
    Gym,
    Party,
    Relaxing,
}

/// How much intensity the listener wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Medium,
    High,
    Max,
}

impl Mood {
    /// All moods in the order they are offered on screen
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Chill,
        Mood::Focused,
    ];

    /// Lowercase identifier used in lookup keys and descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Chill => "chill",
            Mood::Focused => "focused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Melancholic",
            Mood::Energetic => "Energetic",
            Mood::Chill => "Chill",
            Mood::Focused => "Focused",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😔",
            Mood::Energetic => "⚡",
            Mood::Chill => "🌊",
            Mood::Focused => "🎯",
        }
    }
}

impl Situation {
    /// All situations in the order they are offered on screen
    pub const ALL: [Situation; 5] = [
        Situation::Working,
        Situation::Commuting,
        Situation::Gym,
        Situation::Party,
        Situation::Relaxing,
    ];

    /// Lowercase identifier used in lookup keys and descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Situation::Working => "working",
            Situation::Commuting => "commuting",
            Situation::Gym => "gym",
            Situation::Party => "party",
            Situation::Relaxing => "relaxing",
        }
    }

    /// Human-readable label, also used as the second half of generated names
    pub fn label(&self) -> &'static str {
        match self {
            Situation::Working => "Deep Work",
            Situation::Commuting => "On the Move",
            Situation::Gym => "Powering Through",
            Situation::Party => "Socializing",
            Situation::Relaxing => "Unwinding",
        }
    }
}

impl Energy {
    /// All energy levels from gentlest to most intense
    pub const ALL: [Energy; 4] = [Energy::Low, Energy::Medium, Energy::High, Energy::Max];

    /// Lowercase identifier used in lookup keys and descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
            Energy::Max => "max",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Energy::Low => "Low",
            Energy::Medium => "Medium",
            Energy::High => "High",
            Energy::Max => "Max",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Energy::Low => "Gentle & Soft",
            Energy::Medium => "Steady Rhythm",
            Energy::High => "Upbeat & Driving",
            Energy::Max => "Pure Adrenaline",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A playlist description, either hand-curated or generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResult {
    pub name: String,
    pub description: String,
    pub genres: Vec<String>,   // 2-3 tags, display order matters
    pub bpm_range: String,     // e.g. "124 - 128 BPM"
    pub bpm_value: u8,         // 0-100 intensity, authored independently of bpm_range
    pub sounds_like: Vec<String>,
}

impl PlaylistResult {
    /// Whether the playlist has everything the result card shows
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && (2..=3).contains(&self.genres.len())
            && !self.bpm_range.is_empty()
            && self.bpm_value <= 100
            && self.sounds_like.len() >= 3
    }
}

/// The record persisted under the last-playlist key.
///
/// Carries the selections that produced the result so a restored session
/// still knows its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlaylist {
    pub mood: Mood,
    pub situation: Situation,
    pub energy: Energy,
    pub playlist: PlaylistResult,
    pub saved_at: DateTime<Utc>,
}
