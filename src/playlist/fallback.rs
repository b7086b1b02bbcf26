use crate::models::{Energy, Mood, PlaylistResult, Situation};

use super::resolver::RandomSource;
use super::utils::PlaylistNaming;

/// Reference artists shown for every generated playlist
pub const FALLBACK_SOUNDS_LIKE: [&str; 3] = ["Various Artists", "Curated Selection", "AI Discovery"];

/// Tempo band for an energy level: display range and 0-100 intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoBand {
    pub range: &'static str,
    pub value: u8,
}

/// Genre tags for a mood. Situation and energy play no part.
pub fn genres_for(mood: Mood) -> [&'static str; 3] {
    match mood {
        Mood::Happy => ["Pop", "Funk", "Disco"],
        Mood::Sad => ["Indie", "Slowcore", "Ambient"],
        Mood::Energetic => ["Rock", "EDM", "Drum & Bass"],
        Mood::Chill => ["R&B", "Lo-fi", "Soul"],
        Mood::Focused => ["IDM", "Classical", "Techno"],
    }
}

pub fn tempo_for(energy: Energy) -> TempoBand {
    match energy {
        Energy::Low => TempoBand { range: "60-85", value: 25 },
        Energy::Medium => TempoBand { range: "90-115", value: 55 },
        Energy::High => TempoBand { range: "120-140", value: 80 },
        Energy::Max => TempoBand { range: "145-175", value: 95 },
    }
}

/// Build a playlist for a combination that has no curated entry.
///
/// Only the name adjective comes from `rng`; everything else is fixed by the
/// inputs.
pub fn synthesize(
    mood: Mood,
    situation: Situation,
    energy: Energy,
    rng: &mut dyn RandomSource,
) -> PlaylistResult {
    let tempo = tempo_for(energy);

    PlaylistResult {
        name: PlaylistNaming::fallback_name(mood, situation, rng),
        description: format!(
            "A carefully curated selection of {mood} sounds tailored for {situation}. Designed to match your {energy} energy preference."
        ),
        genres: genres_for(mood).iter().map(|g| g.to_string()).collect(),
        bpm_range: format!("{} BPM", tempo.range),
        bpm_value: tempo.value,
        sounds_like: FALLBACK_SOUNDS_LIKE.iter().map(|a| a.to_string()).collect(),
    }
}
