use crate::models::{Mood, PlaylistResult, Situation};

use super::resolver::RandomSource;

/// Playlist naming utilities
pub struct PlaylistNaming;

impl PlaylistNaming {
    /// The three adjectives a generated name can start with for a mood
    pub fn adjectives(mood: Mood) -> [&'static str; 3] {
        match mood {
            Mood::Happy => ["Sun-Drenched", "Vibrant", "Joyride"],
            Mood::Sad => ["Echoes", "Blue", "Solitude"],
            Mood::Energetic => ["Voltage", "Kinetic", "Ignition"],
            Mood::Chill => ["Drift", "Mist", "Lush"],
            Mood::Focused => ["Nexus", "Core", "Precision"],
        }
    }

    /// Generate a name for an uncurated combination, e.g. "Drift Powering Through"
    pub fn fallback_name(mood: Mood, situation: Situation, rng: &mut dyn RandomSource) -> String {
        let candidates = Self::adjectives(mood);
        // Sources are not trusted to stay in range
        let adjective = candidates[rng.pick_index(candidates.len()) % candidates.len()];
        format!("{} {}", adjective, situation.label())
    }
}

/// Plain-text rendering of a playlist
pub struct PlaylistFormatting;

impl PlaylistFormatting {
    /// Text placed on the clipboard by the copy action
    pub fn clipboard_text(result: &PlaylistResult) -> String {
        format!(
            "Playlist: {}\nDescription: {}\nGenres: {}\nBPM: {}\nSounds Like: {}",
            result.name,
            result.description,
            result.genres.join(", "),
            result.bpm_range,
            result.sounds_like.join(", ")
        )
    }

    /// Horizontal intensity bar filled to `bpm_value` percent
    pub fn intensity_bar(bpm_value: u8, width: usize) -> String {
        let percent = usize::from(bpm_value.min(100));
        let filled = (percent * width + 50) / 100;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}
