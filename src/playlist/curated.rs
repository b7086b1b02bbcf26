use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::PlaylistResult;

/// Hand-written playlists for a handful of combinations, keyed by
/// `mood-situation-energy`
static CURATED: LazyLock<HashMap<&'static str, PlaylistResult>> = LazyLock::new(|| {
    HashMap::from([
        (
            "happy-party-max",
            entry(
                "Electric Euphoria",
                "A high-octane explosion of joy designed for the peak of the night. Pure dopamine in audio form.",
                &["Nu-Disco", "Future House", "Pop"],
                "124 - 128 BPM",
                85,
                &["Dua Lipa", "Kaytranada", "Purple Disco Machine"],
            ),
        ),
        (
            "sad-relaxing-low",
            entry(
                "Midnight Reflections",
                "Soft, cinematic textures for when you just need to feel everything. A gentle embrace in the dark.",
                &["Ambient", "Modern Classical", "Post-Rock"],
                "60 - 75 BPM",
                20,
                &["Olafur Arnalds", "Sigur Rós", "Explosions in the Sky"],
            ),
        ),
        (
            "focused-working-medium",
            entry(
                "Flow State Protocol",
                "Steady, non-intrusive rhythms to keep your brain in the zone. Perfect for deep coding or writing.",
                &["Lo-fi Beats", "Deep Techno", "Minimal"],
                "90 - 110 BPM",
                50,
                &["Bonobo", "Christian Löffler", "Tycho"],
            ),
        ),
        (
            "energetic-gym-max",
            entry(
                "Iron & Pulse",
                "Aggressive beats and heavy basslines to push you past your limits. No excuses, just power.",
                &["Phonk", "Hardstyle", "Industrial"],
                "140 - 160 BPM",
                95,
                &["Kordhell", "Gesaffelstein", "Mick Gordon"],
            ),
        ),
        (
            "chill-commuting-low",
            entry(
                "Urban Transit",
                "Smooth jazz-infused hip hop for watching the city lights blur past your window.",
                &["Jazz Hop", "Neo-Soul", "Chillhop"],
                "80 - 95 BPM",
                35,
                &["Nujabes", "Erykah Badu", "Tom Misch"],
            ),
        ),
        (
            "happy-relaxing-medium",
            entry(
                "Golden Hour Glow",
                "Warm, acoustic melodies that feel like a sunset on a summer evening. Pure relaxation.",
                &["Indie Folk", "Acoustic Pop", "Tropical House"],
                "100 - 115 BPM",
                55,
                &["Jack Johnson", "Kygo", "Maggie Rogers"],
            ),
        ),
    ])
});

fn entry(
    name: &str,
    description: &str,
    genres: &[&str],
    bpm_range: &str,
    bpm_value: u8,
    sounds_like: &[&str],
) -> PlaylistResult {
    PlaylistResult {
        name: name.to_string(),
        description: description.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        bpm_range: bpm_range.to_string(),
        bpm_value,
        sounds_like: sounds_like.iter().map(|a| a.to_string()).collect(),
    }
}

/// Look up a curated playlist by its combination key
pub fn lookup(key: &str) -> Option<&'static PlaylistResult> {
    CURATED.get(key)
}

