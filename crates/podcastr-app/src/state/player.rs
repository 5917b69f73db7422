//! Shared playback context.

use dioxus::prelude::*;
use podcastr_core::{Episode, PlaybackState};

/// Handle to the playback state shared by every component.
///
/// The handle is `Copy`; all copies point at the same signal, so a mutation
/// made from a page is immediately visible to the player. Reads subscribe the
/// calling component to future changes.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerContext {
    state: Signal<PlaybackState>,
}

impl PlayerContext {
    /// Create a new player context with an empty queue.
    pub fn new() -> Self {
        Self {
            state: Signal::new(PlaybackState::new()),
        }
    }

    /// Snapshot of the queue.
    pub fn episode_list(&self) -> Vec<Episode> {
        self.state.read().episode_list().to_vec()
    }

    pub fn current_episode_index(&self) -> usize {
        self.state.read().current_episode_index()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping()
    }

    pub fn is_shuffling(&self) -> bool {
        self.state.read().is_shuffling()
    }

    pub fn has_next(&self) -> bool {
        self.state.read().has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.state.read().has_previous()
    }

    /// Number of episodes in the queue.
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Whether `episode` is the one currently loaded.
    pub fn is_current(&self, episode: &Episode) -> bool {
        self.state
            .read()
            .current_episode()
            .is_some_and(|current| current.url == episode.url)
    }

    pub fn play(&mut self, episode: Episode) {
        self.state.write().play(episode);
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.state.write().play_list(list, index);
    }

    pub fn toggle_play(&mut self) {
        self.state.write().toggle_play();
    }

    pub fn toggle_loop(&mut self) {
        self.state.write().toggle_loop();
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.write().toggle_shuffle();
    }

    /// Sync with the media element; skips the write when nothing changed so
    /// element callbacks don't trigger redundant renders.
    pub fn set_playing_state(&mut self, state: bool) {
        if self.state.peek().is_playing() != state {
            self.state.write().set_playing_state(state);
        }
    }

    pub fn clear_player_state(&mut self) {
        self.state.write().clear_player_state();
    }

    pub fn play_next(&mut self) {
        self.state.write().play_next();
    }

    pub fn play_previous(&mut self) {
        self.state.write().play_previous();
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the player context provided by the app root.
pub fn use_player() -> PlayerContext {
    use_context::<PlayerContext>()
}
