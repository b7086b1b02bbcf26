use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::models::{Energy, Mood, PlaylistResult, SavedPlaylist, Situation};
use crate::playlist::{PlaylistFormatting, PlaylistResolver};

use super::storage::{KeyValueStore, SAVED_PLAYLIST_KEY, StoreError};

/// Screens of the questionnaire, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Mood,
    Situation,
    Energy,
    Result,
}

impl Step {
    /// 1-indexed screen number
    pub fn number(&self) -> u8 {
        match self {
            Step::Mood => 1,
            Step::Situation => 2,
            Step::Energy => 3,
            Step::Result => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Mood => "Step 1: Your Mood",
            Step::Situation => "Step 2: Your Situation",
            Step::Energy => "Step 3: Energy Level",
            Step::Result => "Your Custom Vibe",
        }
    }

    /// Question asked on an input screen
    pub fn question(&self) -> Option<&'static str> {
        match self {
            Step::Mood => Some("How are you feeling right now?"),
            Step::Situation => Some("What's your current situation?"),
            Step::Energy => Some("What energy level do you want?"),
            Step::Result => None,
        }
    }

    /// Fraction of the three input screens reached, shown as a progress bar
    pub fn progress_percent(&self) -> Option<u8> {
        match self {
            Step::Result => None,
            step => Some((u16::from(step.number()) * 100 / 3) as u8),
        }
    }
}

/// Selections and outcome of one questionnaire session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    mood: Option<Mood>,
    situation: Option<Situation>,
    energy: Option<Energy>,
    result: Option<PlaylistResult>,
}

impl WizardState {
    fn fresh() -> Self {
        Self {
            step: Step::Mood,
            mood: None,
            situation: None,
            energy: None,
            result: None,
        }
    }

    fn restored(saved: SavedPlaylist) -> Self {
        Self {
            step: Step::Result,
            mood: Some(saved.mood),
            situation: Some(saved.situation),
            energy: Some(saved.energy),
            result: Some(saved.playlist),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn situation(&self) -> Option<Situation> {
        self.situation
    }

    pub fn energy(&self) -> Option<Energy> {
        self.energy
    }

    /// Present exactly when the step is `Result`
    pub fn result(&self) -> Option<&PlaylistResult> {
        self.result.as_ref()
    }
}

/// Drives a questionnaire session and keeps the last result persisted.
///
/// Operations never fail. Calls that do not apply to the current step are
/// ignored, and storage failures are logged and otherwise swallowed.
pub struct Wizard {
    state: WizardState,
    saved_at: Option<DateTime<Utc>>,
    store: Box<dyn KeyValueStore>,
    resolver: PlaylistResolver,
}

impl Wizard {
    /// Start a session, resuming on the result screen if a playlist was saved
    pub fn start(store: Box<dyn KeyValueStore>, resolver: PlaylistResolver) -> Self {
        let (state, saved_at) = match load_saved(store.as_ref()) {
            Some(saved) => {
                debug!(name = %saved.playlist.name, "restored saved playlist");
                let saved_at = saved.saved_at;
                (WizardState::restored(saved), Some(saved_at))
            }
            None => (WizardState::fresh(), None),
        };

        Self {
            state,
            saved_at,
            store,
            resolver,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn result(&self) -> Option<&PlaylistResult> {
        self.state.result()
    }

    /// When the current result was persisted, if it was
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn select_mood(&mut self, mood: Mood) {
        if self.state.step == Step::Mood {
            self.state.mood = Some(mood);
        } else {
            debug!(%mood, step = ?self.state.step, "ignoring mood selection off its step");
        }
    }

    pub fn select_situation(&mut self, situation: Situation) {
        if self.state.step == Step::Situation {
            self.state.situation = Some(situation);
        } else {
            debug!(%situation, step = ?self.state.step, "ignoring situation selection off its step");
        }
    }

    pub fn select_energy(&mut self, energy: Energy) {
        if self.state.step == Step::Energy {
            self.state.energy = Some(energy);
        } else {
            debug!(%energy, step = ?self.state.step, "ignoring energy selection off its step");
        }
    }

    /// Move forward once the current step has a selection.
    ///
    /// Advancing from the energy step resolves and persists the playlist.
    pub fn advance(&mut self) {
        let state = &self.state;
        match (state.step, state.mood, state.situation, state.energy) {
            (Step::Mood, Some(_), _, _) => self.state.step = Step::Situation,
            (Step::Situation, _, Some(_), _) => self.state.step = Step::Energy,
            (Step::Energy, Some(mood), Some(situation), Some(energy)) => {
                self.complete(mood, situation, energy)
            }
            (step, ..) => debug!(?step, "advance ignored"),
        }
    }

    /// Step back from the situation or energy screen, keeping selections
    pub fn back(&mut self) {
        match self.state.step {
            Step::Situation => self.state.step = Step::Mood,
            Step::Energy => self.state.step = Step::Situation,
            step => debug!(?step, "back ignored"),
        }
    }

    /// Forget everything, including the persisted playlist
    pub fn reset(&mut self) {
        self.state = WizardState::fresh();
        self.saved_at = None;
        if let Err(e) = self.store.remove(SAVED_PLAYLIST_KEY) {
            warn!(error = %e, "failed to remove saved playlist");
        }
    }

    /// Text for the copy action, available on the result screen
    pub fn clipboard_text(&self) -> Option<String> {
        self.result().map(PlaylistFormatting::clipboard_text)
    }

    fn complete(&mut self, mood: Mood, situation: Situation, energy: Energy) {
        let playlist = self.resolver.resolve(mood, situation, energy);
        let saved = SavedPlaylist {
            mood,
            situation,
            energy,
            playlist: playlist.clone(),
            saved_at: Utc::now(),
        };

        self.saved_at = match persist(self.store.as_mut(), &saved) {
            Ok(()) => Some(saved.saved_at),
            Err(e) => {
                warn!(error = %e, "failed to persist playlist");
                None
            }
        };
        self.state.result = Some(playlist);
        self.state.step = Step::Result;
    }
}

fn persist(store: &mut dyn KeyValueStore, saved: &SavedPlaylist) -> Result<(), StoreError> {
    let json = serde_json::to_string(saved)?;
    store.save(SAVED_PLAYLIST_KEY, &json)?;
    Ok(())
}

/// Read the saved playlist, treating anything unreadable as absent
fn load_saved(store: &dyn KeyValueStore) -> Option<SavedPlaylist> {
    let json = match store.load(SAVED_PLAYLIST_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "could not read saved playlist");
            return None;
        }
    };

    match serde_json::from_str::<SavedPlaylist>(&json) {
        Ok(saved) if saved.playlist.is_valid() => Some(saved),
        Ok(saved) => {
            warn!(name = %saved.playlist.name, "discarding incomplete saved playlist");
            None
        }
        Err(e) => {
            warn!(error = %e, "discarding unreadable saved playlist");
            None
        }
    }
}
