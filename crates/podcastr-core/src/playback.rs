//! Playback queue and transport state.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use rand::Rng;
use tracing::{debug, trace};

use crate::types::Episode;

/// The episode queue plus the play/loop/shuffle flags.
///
/// Fields are only reachable through the operations below. When the queue
/// is non-empty, `current_episode_index` is in range unless a caller handed
/// an out-of-range index to [`PlaybackState::play_list`], in which case
/// [`PlaybackState::current_episode`] returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Loaded episodes, in queue order.
    episode_list: Vec<Episode>,
    /// Position of the current episode in `episode_list`.
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all episodes in the queue.
    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    /// Get the current index.
    pub const fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    /// Get the current episode.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn len(&self) -> usize {
        self.episode_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episode_list.is_empty()
    }

    pub const fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub const fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub const fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether a "next" step is available. Always true while shuffling.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index < self.episode_list.len().saturating_sub(1)
    }

    /// Whether a "previous" step is available. Always true while shuffling.
    pub const fn has_previous(&self) -> bool {
        self.is_shuffling || self.current_episode_index > 0
    }

    /// Replace the queue with a single episode and start playing it.
    pub fn play(&mut self, episode: Episode) {
        debug!("Playing single episode: {}", episode.title);
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the queue with `list` and start playing at `index`.
    ///
    /// The index is taken as given; keeping it in range is up to the caller.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        debug!("Playing list of {} episodes from index {index}", list.len());
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        trace!("is_playing = {}", self.is_playing);
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        trace!("is_looping = {}", self.is_looping);
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        trace!("is_shuffling = {}", self.is_shuffling);
    }

    /// Mirror the media element's actual play/pause state.
    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    /// Empty the queue. Transport flags are left alone.
    pub fn clear_player_state(&mut self) {
        debug!("Clearing player state");
        self.episode_list.clear();
        self.current_episode_index = 0;
    }

    /// Move to the next episode using the thread-local RNG for shuffle.
    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::rng());
    }

    /// Move to the next episode.
    ///
    /// While shuffling, picks a uniformly random position in the queue (which
    /// may be the current one). Otherwise advances by one if possible.
    pub fn play_next_with<R: Rng>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if self.episode_list.is_empty() {
                return;
            }
            self.current_episode_index = rng.random_range(0..self.episode_list.len());
            debug!("Shuffled to index {}", self.current_episode_index);
        } else if self.has_next() {
            self.current_episode_index += 1;
            debug!("Advanced to index {}", self.current_episode_index);
        }
    }

    /// Move to the previous episode. Stays at 0, shuffle or not.
    pub fn play_previous(&mut self) {
        if self.has_previous() && self.current_episode_index > 0 {
            self.current_episode_index -= 1;
            debug!("Moved back to index {}", self.current_episode_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_episode(id: &str) -> Episode {
        Episode::new(format!("Episode {id}"), format!("https://cdn.example.com/{id}.m4a"))
    }

    fn make_list(n: usize) -> Vec<Episode> {
        (0..n).map(|i| make_episode(&i.to_string())).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PlaybackState::new();
        assert!(state.is_empty());
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.current_episode().is_none());
        assert!(!state.is_playing());
        assert!(!state.is_looping());
        assert!(!state.is_shuffling());
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn test_play_replaces_queue() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(3), 2);
        state.set_playing_state(false);

        let episode = make_episode("solo");
        state.play(episode.clone());
        assert_eq!(state.episode_list(), &[episode]);
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.is_playing());
    }

    #[test]
    fn test_play_list() {
        let mut state = PlaybackState::new();
        let list = make_list(4);
        state.play_list(list.clone(), 2);
        assert_eq!(state.episode_list(), list.as_slice());
        assert_eq!(state.current_episode_index(), 2);
        assert_eq!(state.current_episode().unwrap().title, "Episode 2");
        assert!(state.is_playing());
    }

    #[test]
    fn test_play_list_out_of_range_index() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(2), 5);
        assert_eq!(state.current_episode_index(), 5);
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn test_toggle_play_twice() {
        let mut state = PlaybackState::new();
        state.toggle_play();
        assert!(state.is_playing());
        state.toggle_play();
        assert!(!state.is_playing());
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = PlaybackState::new();
        let list = make_list(3);
        state.play_list(list.clone(), 1);

        state.toggle_loop();
        assert!(state.is_looping());
        assert!(!state.is_shuffling());

        state.toggle_shuffle();
        assert!(state.is_looping());
        assert!(state.is_shuffling());

        assert!(state.is_playing());
        assert_eq!(state.episode_list(), list.as_slice());
        assert_eq!(state.current_episode_index(), 1);
    }

    #[test]
    fn test_set_playing_state() {
        let mut state = PlaybackState::new();
        state.set_playing_state(true);
        state.set_playing_state(true);
        assert!(state.is_playing());
        state.set_playing_state(false);
        assert!(!state.is_playing());
    }

    #[test]
    fn test_clear_player_state() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(3), 2);
        state.toggle_loop();

        state.clear_player_state();
        assert!(state.is_empty());
        assert_eq!(state.current_episode_index(), 0);
        assert!(state.is_looping());
    }

    #[test]
    fn test_play_next_walks_to_end() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(3), 0);

        state.play_next();
        assert_eq!(state.current_episode_index(), 1);
        state.play_next();
        assert_eq!(state.current_episode_index(), 2);
        assert!(!state.has_next());
        state.play_next();
        assert_eq!(state.current_episode_index(), 2);
    }

    #[test]
    fn test_play_previous_at_start_is_noop() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(3), 1);

        state.play_previous();
        assert_eq!(state.current_episode_index(), 0);
        assert!(!state.has_previous());
        state.play_previous();
        assert_eq!(state.current_episode_index(), 0);
    }

    #[test]
    fn test_shuffle_reports_neighbours() {
        let mut state = PlaybackState::new();
        state.toggle_shuffle();
        assert!(state.has_next());
        assert!(state.has_previous());

        state.play(make_episode("only"));
        assert!(state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn test_shuffle_next_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = PlaybackState::new();
        state.play_list(make_list(5), 4);
        state.toggle_shuffle();

        for _ in 0..100 {
            state.play_next_with(&mut rng);
            assert!(state.current_episode_index() < 5);
        }
    }

    #[test]
    fn test_shuffle_next_on_empty_queue() {
        let mut state = PlaybackState::new();
        state.toggle_shuffle();
        state.play_next();
        assert_eq!(state.current_episode_index(), 0);
    }

    #[test]
    fn test_shuffle_previous_at_start_clamps() {
        let mut state = PlaybackState::new();
        state.play_list(make_list(3), 0);
        state.toggle_shuffle();

        assert!(state.has_previous());
        state.play_previous();
        assert_eq!(state.current_episode_index(), 0);
    }

    proptest::proptest! {
        #[test]
        fn play_list_sets_queue_and_index(len in 1usize..20, seed in 0usize..20) {
            let index = seed % len;
            let list = make_list(len);
            let mut state = PlaybackState::new();
            state.play_list(list.clone(), index);
            proptest::prop_assert_eq!(state.episode_list(), list.as_slice());
            proptest::prop_assert_eq!(state.current_episode_index(), index);
            proptest::prop_assert!(state.is_playing());
        }

        #[test]
        fn index_stays_in_range_after_random_ops(
            len in 1usize..10,
            ops in proptest::collection::vec(0u8..7, 1..200),
            seed in proptest::prelude::any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = PlaybackState::new();
            state.play_list(make_list(len), 0);

            for op in ops {
                match op {
                    0 => state.play_next_with(&mut rng),
                    1 => state.play_previous(),
                    2 => state.toggle_shuffle(),
                    3 => state.toggle_loop(),
                    4 => state.toggle_play(),
                    5 => state.play(make_episode("single")),
                    _ => state.play_list(make_list(len), len - 1),
                }
                proptest::prop_assert!(state.current_episode_index() < state.len());
                proptest::prop_assert!(state.current_episode().is_some());
            }
        }

        #[test]
        fn clear_always_empties(len in 0usize..10, shuffle in proptest::prelude::any::<bool>()) {
            let mut state = PlaybackState::new();
            state.play_list(make_list(len), 0);
            if shuffle {
                state.toggle_shuffle();
            }
            state.clear_player_state();
            proptest::prop_assert!(state.is_empty());
            proptest::prop_assert_eq!(state.current_episode_index(), 0);
        }
    }
}
