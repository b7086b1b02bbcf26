use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{Energy, Mood, PlaylistResult, Situation};

use super::{curated, fallback};

/// Source of the one random decision made while resolving a playlist
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// `RandomSource` backed by any `rand` generator
pub struct RngSource<R>(R);

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible picks for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Key used to look up curated combinations, e.g. `happy-party-max`
pub fn combination_key(mood: Mood, situation: Situation, energy: Energy) -> String {
    format!("{mood}-{situation}-{energy}")
}

/// Maps a mood, situation and energy selection to a playlist
pub struct PlaylistResolver {
    rng: Box<dyn RandomSource>,
}

impl PlaylistResolver {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn with_thread_rng() -> Self {
        Self::new(Box::new(RngSource::thread()))
    }

    /// Resolve a playlist for every possible combination.
    ///
    /// Curated combinations come back verbatim. Anything else is generated,
    /// and only the generated name's adjective may differ between calls.
    pub fn resolve(&mut self, mood: Mood, situation: Situation, energy: Energy) -> PlaylistResult {
        let key = combination_key(mood, situation, energy);

        if let Some(curated) = curated::lookup(&key) {
            debug!(%key, "resolved curated playlist");
            return curated.clone();
        }

        let result = fallback::synthesize(mood, situation, energy, self.rng.as_mut());
        debug!(%key, name = %result.name, "generated fallback playlist");
        result
    }
}
