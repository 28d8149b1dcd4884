// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playlist state and playback sequencing.
//!
//! This module provides [`PlaylistController`], which owns the loaded videos,
//! tracks which one is selected, and decides what to play in response to
//! user input and end-of-stream notifications. It is independent of any
//! particular player implementation: every item carries a handle
//! implementing [`MediaPlayer`].
//!
//! # Organization
//!
//! * [`mode`]: The playback modes cycled by the user.
//! * [`speed`]: The speed ladder stepped by the directional keys.
//! * [`keys`]: Control key mapping and repeat detection.

pub(crate) mod keys;
pub(crate) mod mode;
pub(crate) mod speed;

use rand::seq::index;
use tracing::{debug, info, warn};

use crate::{
    model::{MediaId, MediaItem},
    player::{MediaPlayer, PlayerError},
    playlist::{
        keys::{ControlKey, KeyHistory},
        mode::PlaybackMode,
        speed::{Direction, SpeedLadder},
    },
};

/// Chooses an index for random playback.
pub(crate) trait IndexPicker {
    /// Returns an index in `0..len`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Picks uniformly at random using the thread-local generator.
#[derive(Debug, Default)]
pub(crate) struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        index::sample(&mut rand::rng(), len, 1).index(0)
    }
}

/// Owns the ordered list of loaded videos and all playback sequencing state.
///
/// The selection is `Some` exactly when the list is non-empty. Operations
/// taking an index require it to be in bounds and panic otherwise; callers
/// validate indices they obtain from the user before passing them on.
pub(crate) struct PlaylistController<P> {
    items: Vec<MediaItem<P>>,
    selected: Option<usize>,
    keys: KeyHistory,
    speed: SpeedLadder,
    mode: PlaybackMode,
    picker: Box<dyn IndexPicker>,
}

impl<P: MediaPlayer> PlaylistController<P> {
    pub(crate) fn new(mode: PlaybackMode) -> Self {
        Self::with_picker(mode, Box::new(ThreadRngPicker))
    }

    pub(crate) fn with_picker(mode: PlaybackMode, picker: Box<dyn IndexPicker>) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            keys: KeyHistory::default(),
            speed: SpeedLadder::default(),
            mode,
            picker,
        }
    }

    pub(crate) fn items(&self) -> &[MediaItem<P>] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn selected_item(&self) -> Option<&MediaItem<P>> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    fn selected_item_mut(&mut self) -> Option<&mut MediaItem<P>> {
        self.selected.and_then(|idx| self.items.get_mut(idx))
    }

    /// Finds the current position of an item by identity.
    pub(crate) fn position_of(&self, id: MediaId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Whether `id` is the selected item. End-of-stream reports from any
    /// other item, including removed ones, are stale.
    pub(crate) fn is_selected(&self, id: MediaId) -> bool {
        self.position_of(id).is_some_and(|idx| self.selected == Some(idx))
    }

    pub(crate) fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: PlaybackMode) {
        debug!(?mode, "playback mode set");
        self.mode = mode;
    }

    /// The speed ladder magnitude most recently applied by the speed keys.
    pub(crate) fn speed(&self) -> f32 {
        self.speed.value()
    }

    /// Appends a probed item to the end of the playlist.
    ///
    /// Playback is never started here. The first item added to an empty
    /// playlist becomes the selection, with a fresh key history so the first
    /// speed key it receives starts at normal speed.
    pub(crate) fn add(&mut self, item: MediaItem<P>) {
        info!(name = %item.name, "added to playlist");
        self.items.push(item);
        if self.selected.is_none() {
            self.selected = Some(0);
            self.keys.reset();
        }
    }

    /// Removes the item at `index`, stopping its playback.
    ///
    /// If the removed item was selected, the item that took its place (or the
    /// new last item) is selected instead; a selection after the removed item
    /// follows its item down. Whenever items remain, the selected one is then
    /// played.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn remove(&mut self, index: usize) -> Result<(), PlayerError> {
        let len = self.items.len();
        assert!(index < len, "remove index {index} out of range for playlist of {len}");

        let mut item = self.items.remove(index);
        if let Err(e) = item.player.stop() {
            warn!(name = %item.name, "failed to stop removed item: {}", e);
        }
        info!(name = %item.name, "removed from playlist");

        self.keys.reset();

        let remaining = self.items.len();
        self.selected = match self.selected {
            _ if remaining == 0 => None,
            Some(sel) if sel > index => Some(sel - 1),
            Some(sel) if sel == index || sel >= remaining => Some(index.min(remaining - 1)),
            other => other,
        };

        match self.selected_item_mut() {
            Some(item) => item.player.play(),
            None => Ok(()),
        }
    }

    /// Selects the item at `index`, pausing the previously selected one.
    ///
    /// The newly selected item is not started.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        let len = self.items.len();
        assert!(index < len, "select index {index} out of range for playlist of {len}");

        if let Some(item) = self.selected_item_mut() {
            item.player.pause()?;
        }
        self.selected = Some(index);
        self.keys.reset();

        debug!(index, "selected");
        Ok(())
    }

    /// Pauses the selected item if it is playing, otherwise resumes it.
    pub(crate) fn toggle_play_pause(&mut self) -> Result<(), PlayerError> {
        let Some(item) = self.selected_item_mut() else {
            return Ok(());
        };

        if item.player.rate() == 0.0 {
            item.player.play()
        } else {
            item.player.pause()
        }
    }

    /// Processes each character of `input` as a playback control key.
    ///
    /// Characters without a binding are ignored.
    pub(crate) fn handle_key(&mut self, input: &str) -> Result<(), PlayerError> {
        for key in input.chars().filter_map(ControlKey::from_char) {
            let result = match key {
                ControlKey::TogglePlayPause => self.toggle_play_pause(),
                ControlKey::Step(direction) => self.step_speed(key, direction),
            };
            self.keys.record(key);
            result?;
        }

        Ok(())
    }

    /// Applies a directional speed step to the selected item.
    ///
    /// Repeating the previous key moves one rung up the ladder; any other
    /// previous key restarts from normal speed.
    fn step_speed(&mut self, key: ControlKey, direction: Direction) -> Result<(), PlayerError> {
        if self.items.is_empty() {
            return Ok(());
        }

        if self.keys.is_repeat(key) {
            self.speed.advance();
        } else {
            self.speed.reset();
        }
        let rate = self.speed.rate(direction);
        debug!(rate, "playback rate");

        if let Some(item) = self.selected_item_mut() {
            item.player.set_rate(rate)?;
            if !item.player.is_playing() {
                item.player.play()?;
            }
        }

        Ok(())
    }

    /// Moves to the next playback mode, returning it.
    pub(crate) fn toggle_playback_mode(&mut self) -> PlaybackMode {
        self.mode = self.mode.next();
        debug!(mode = ?self.mode, "playback mode toggled");
        self.mode
    }

    /// Reacts to the selected item reaching the end of its stream.
    pub(crate) fn on_playback_finished(&mut self) -> Result<(), PlayerError> {
        let Some(selected) = self.selected else {
            return Ok(());
        };

        match self.mode {
            PlaybackMode::Sequential => {
                if selected + 1 >= self.items.len() {
                    debug!("end of playlist");
                    self.items[selected].player.pause()
                } else {
                    self.play_from_start(selected + 1)
                }
            }
            PlaybackMode::LoopSingle => {
                let player = &mut self.items[selected].player;
                player.seek_to_start()?;
                player.play()
            }
            PlaybackMode::Single => Ok(()),
            PlaybackMode::Random => {
                let next = self.picker.pick(self.items.len());
                self.play_from_start(next)
            }
        }
    }

    /// Selects `index` and plays it from the beginning, pausing the previous
    /// selection if it differs.
    ///
    /// Moving to another item restarts the speed ladder.
    fn play_from_start(&mut self, index: usize) -> Result<(), PlayerError> {
        if let Some(previous) = self.selected.filter(|&sel| sel != index) {
            self.items[previous].player.pause()?;
            self.keys.reset();
            self.speed.reset();
        }
        self.selected = Some(index);
        debug!(index, "advancing");

        let player = &mut self.items[index].player;
        player.seek_to_start()?;
        player.play()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, path::PathBuf, time::Duration};

    use super::*;
    use crate::{
        model::{DisplaySize, ProbedMedia},
        player::fake::{Call, FakePlayer},
    };

    /// Returns a fixed sequence of picks.
    struct ScriptedPicker(VecDeque<usize>);

    impl IndexPicker for ScriptedPicker {
        fn pick(&mut self, len: usize) -> usize {
            let pick = self.0.pop_front().expect("no scripted pick left");
            assert!(pick < len);
            pick
        }
    }

    fn item(id: u64, name: &str) -> MediaItem<FakePlayer> {
        let probed = ProbedMedia {
            name: name.to_string(),
            path: PathBuf::from(format!("/videos/{name}.mp4")),
            size: DisplaySize {
                width: 1920,
                height: 1080,
            },
            duration: Duration::from_secs(60),
            metadata: None,
        };
        MediaItem::new(MediaId(id), probed, FakePlayer::default())
    }

    fn playlist(names: &[&str]) -> PlaylistController<FakePlayer> {
        let mut controller = PlaylistController::new(PlaybackMode::Sequential);
        for (id, name) in names.iter().enumerate() {
            controller.add(item(id as u64, name));
        }
        controller
    }

    fn names(controller: &PlaylistController<FakePlayer>) -> Vec<&str> {
        controller.items().iter().map(|i| i.name.as_str()).collect()
    }

    fn player(controller: &PlaylistController<FakePlayer>, index: usize) -> &FakePlayer {
        &controller.items()[index].player
    }

    fn selected_rate(controller: &PlaylistController<FakePlayer>) -> f32 {
        controller.selected_item().unwrap().player.rate()
    }

    #[test]
    fn add_appends_in_arrival_order_without_playing() {
        let controller = playlist(&["a", "b", "c"]);

        assert_eq!(names(&controller), vec!["a", "b", "c"]);
        assert_eq!(controller.selected_index(), Some(0));
        assert!(controller.items().iter().all(|i| i.player.calls.is_empty()));
    }

    #[test]
    fn add_keeps_existing_selection() {
        let mut controller = playlist(&["a", "b"]);
        controller.select(1).unwrap();
        controller.add(item(9, "c"));
        assert_eq!(controller.selected_index(), Some(1));
    }

    #[test]
    fn empty_playlist_has_no_selection() {
        let controller = playlist(&[]);
        assert!(controller.is_empty());
        assert_eq!(controller.selected_index(), None);
        assert!(controller.selected_item().is_none());
    }

    #[test]
    fn select_pauses_previous_and_does_not_play() {
        let mut controller = playlist(&["a", "b"]);
        controller.handle_key(" ").unwrap();
        assert!(player(&controller, 0).playing);

        controller.select(1).unwrap();

        assert_eq!(controller.selected_index(), Some(1));
        assert!(!player(&controller, 0).playing);
        assert!(player(&controller, 1).calls.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn select_out_of_range_panics() {
        let mut controller = playlist(&["a"]);
        let _ = controller.select(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_from_empty_playlist_panics() {
        let mut controller = playlist(&[]);
        let _ = controller.remove(0);
    }

    #[test]
    fn remove_selected_selects_replacement_and_plays_it() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(1).unwrap();

        controller.remove(1).unwrap();

        assert_eq!(names(&controller), vec!["a", "c"]);
        assert_eq!(controller.selected_index(), Some(1));
        assert!(player(&controller, 1).playing);
    }

    #[test]
    fn remove_selected_last_item_clamps_selection() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(2).unwrap();

        controller.remove(2).unwrap();

        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.selected_item().unwrap().name, "b");
    }

    #[test]
    fn remove_before_selection_keeps_selected_item() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(2).unwrap();

        controller.remove(0).unwrap();

        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.selected_item().unwrap().name, "c");
    }

    #[test]
    fn remove_last_remaining_item_clears_selection() {
        let mut controller = playlist(&["a"]);
        controller.remove(0).unwrap();
        assert!(controller.is_empty());
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn remove_stops_removed_player_even_if_it_is_gone() {
        let mut controller = playlist(&["a"]);
        controller.add(MediaItem::new(
            MediaId(7),
            ProbedMedia {
                name: "broken".to_string(),
                path: PathBuf::from("/videos/broken.mp4"),
                size: DisplaySize { width: 4, height: 3 },
                duration: Duration::from_secs(1),
                metadata: None,
            },
            FakePlayer::disconnected(),
        ));

        controller.remove(1).unwrap();
        assert_eq!(names(&controller), vec!["a"]);
    }

    #[test]
    fn selection_stays_valid_after_any_removal() {
        for len in 1..=4 {
            for selected in 0..len {
                for removed in 0..len {
                    let all = ["a", "b", "c", "d"];
                    let mut controller = playlist(&all[..len]);
                    controller.select(selected).unwrap();

                    controller.remove(removed).unwrap();

                    match controller.selected_index() {
                        Some(sel) => assert!(sel < controller.len()),
                        None => assert!(controller.is_empty()),
                    }
                    assert_eq!(controller.selected_index().is_none(), controller.is_empty());
                }
            }
        }
    }

    #[test]
    fn remove_resets_key_repeat() {
        let mut controller = playlist(&["a", "b"]);
        controller.handle_key("ll").unwrap();
        assert_eq!(controller.speed(), 2.0);

        controller.remove(1).unwrap();
        controller.handle_key("l").unwrap();

        assert_eq!(controller.speed(), 1.0);
    }

    #[test]
    fn toggle_play_pause_on_empty_playlist_is_noop() {
        let mut controller = playlist(&[]);
        controller.toggle_play_pause().unwrap();
        controller.handle_key(" kjl").unwrap();
        assert!(controller.is_empty());
    }

    #[test]
    fn space_and_k_toggle_playback() {
        let mut controller = playlist(&["a"]);

        controller.handle_key(" ").unwrap();
        assert!(player(&controller, 0).playing);

        controller.handle_key("k").unwrap();
        assert!(!player(&controller, 0).playing);
    }

    #[test]
    fn other_characters_are_ignored() {
        let mut controller = playlist(&["a"]);
        controller.handle_key("xyz?").unwrap();
        assert!(player(&controller, 0).calls.is_empty());
    }

    #[test]
    fn repeated_forward_presses_climb_and_wrap() {
        let mut controller = playlist(&["a"]);
        let mut rates = Vec::new();
        for _ in 0..9 {
            controller.handle_key("l").unwrap();
            rates.push(selected_rate(&controller));
        }
        assert_eq!(rates, vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 1.0, 2.0]);
    }

    #[test]
    fn reverse_after_forward_streak_resets_to_normal_speed() {
        let mut controller = playlist(&["a"]);
        controller.handle_key("lllll").unwrap();
        assert_eq!(selected_rate(&controller), 16.0);

        controller.handle_key("j").unwrap();
        assert_eq!(selected_rate(&controller), -1.0);

        controller.handle_key("j").unwrap();
        assert_eq!(selected_rate(&controller), -2.0);
    }

    #[test]
    fn toggle_between_steps_restarts_the_ladder() {
        let mut controller = playlist(&["a"]);
        controller.handle_key("ll").unwrap();
        controller.handle_key("k").unwrap();
        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 1.0);
    }

    #[test]
    fn speed_step_starts_paused_item() {
        let mut controller = playlist(&["a"]);
        controller.handle_key("l").unwrap();

        assert_eq!(
            player(&controller, 0).calls,
            vec![Call::SetRate(1.0), Call::Play]
        );
    }

    #[test]
    fn speed_step_does_not_replay_playing_item() {
        let mut controller = playlist(&[]);
        controller.add(MediaItem::new(
            MediaId(1),
            ProbedMedia {
                name: "a".to_string(),
                path: PathBuf::from("/videos/a.mp4"),
                size: DisplaySize { width: 4, height: 3 },
                duration: Duration::from_secs(1),
                metadata: None,
            },
            FakePlayer::playing(),
        ));

        controller.handle_key("l").unwrap();
        assert_eq!(player(&controller, 0).calls, vec![Call::SetRate(1.0)]);
    }

    #[test]
    fn select_resets_key_repeat() {
        let mut controller = playlist(&["a", "b"]);
        controller.handle_key("lll").unwrap();
        controller.select(1).unwrap();
        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 1.0);
    }

    #[test]
    fn speed_keys_before_the_first_item_do_not_count_as_repeats() {
        let mut controller = playlist(&[]);
        controller.handle_key("l").unwrap();
        controller.add(item(0, "a"));

        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 1.0);
        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 2.0);
    }

    #[test]
    fn advancing_to_another_item_restarts_the_ladder() {
        let mut controller = playlist(&["a", "b"]);
        controller.handle_key("lll").unwrap();
        assert_eq!(controller.speed(), 4.0);

        controller.on_playback_finished().unwrap();
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(controller.speed(), 1.0);

        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 1.0);
    }

    #[test]
    fn looping_the_same_item_keeps_the_ladder() {
        let mut controller = playlist(&["a"]);
        controller.set_mode(PlaybackMode::Random);
        controller.picker = Box::new(ScriptedPicker(VecDeque::from([0])));
        controller.handle_key("ll").unwrap();

        controller.on_playback_finished().unwrap();
        controller.handle_key("l").unwrap();
        assert_eq!(selected_rate(&controller), 4.0);
    }

    #[test]
    fn only_the_selected_item_is_current() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(1).unwrap();
        assert!(controller.is_selected(MediaId(1)));
        assert!(!controller.is_selected(MediaId(0)));

        controller.remove(1).unwrap();
        assert!(!controller.is_selected(MediaId(1)));
        assert!(controller.is_selected(MediaId(2)));
        assert!(!controller.is_selected(MediaId(42)));
    }

    #[test]
    fn pause_resumes_at_remembered_rate() {
        let mut controller = playlist(&["a"]);
        controller.handle_key("lll").unwrap();
        controller.handle_key(" ").unwrap();
        assert_eq!(selected_rate(&controller), 0.0);

        controller.handle_key(" ").unwrap();
        assert_eq!(selected_rate(&controller), 4.0);
    }

    #[test]
    fn mode_toggle_cycles_back_after_four() {
        let mut controller = playlist(&["a"]);
        let start = controller.mode();
        let modes: Vec<_> = (0..4).map(|_| controller.toggle_playback_mode()).collect();
        assert_eq!(
            modes,
            vec![
                PlaybackMode::LoopSingle,
                PlaybackMode::Single,
                PlaybackMode::Random,
                PlaybackMode::Sequential
            ]
        );
        assert_eq!(controller.mode(), start);
        assert!(player(&controller, 0).calls.is_empty());
    }

    #[test]
    fn sequential_finish_advances_to_next() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(1).unwrap();
        controller.handle_key(" ").unwrap();

        controller.on_playback_finished().unwrap();

        assert_eq!(controller.selected_index(), Some(2));
        assert!(player(&controller, 2).playing);
        assert!(!player(&controller, 1).playing);
    }

    #[test]
    fn sequential_finish_at_end_halts() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.select(2).unwrap();
        controller.handle_key(" ").unwrap();

        controller.on_playback_finished().unwrap();

        assert_eq!(controller.selected_index(), Some(2));
        assert!(!player(&controller, 2).playing);
        assert!(!player(&controller, 0).playing);
    }

    #[test]
    fn loop_single_finish_restarts_current() {
        let mut controller = playlist(&["a", "b"]);
        controller.set_mode(PlaybackMode::LoopSingle);

        controller.on_playback_finished().unwrap();

        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(
            player(&controller, 0).calls,
            vec![Call::SeekToStart, Call::Play]
        );
    }

    #[test]
    fn single_finish_does_nothing() {
        let mut controller = playlist(&["a", "b"]);
        controller.set_mode(PlaybackMode::Single);

        controller.on_playback_finished().unwrap();

        assert_eq!(controller.selected_index(), Some(0));
        assert!(controller.items().iter().all(|i| i.player.calls.is_empty()));
    }

    #[test]
    fn random_finish_plays_picked_index() {
        let picker = ScriptedPicker(VecDeque::from([2, 2]));
        let mut controller = PlaylistController::with_picker(PlaybackMode::Random, Box::new(picker));
        for (id, name) in ["a", "b", "c"].iter().enumerate() {
            controller.add(item(id as u64, name));
        }

        controller.on_playback_finished().unwrap();
        assert_eq!(controller.selected_index(), Some(2));
        assert!(player(&controller, 2).playing);

        // Picking the same index again restarts it
        controller.on_playback_finished().unwrap();
        assert_eq!(controller.selected_index(), Some(2));
        assert_eq!(
            player(&controller, 2).calls,
            vec![Call::SeekToStart, Call::Play, Call::SeekToStart, Call::Play]
        );
    }

    #[test]
    fn random_finish_stays_in_bounds() {
        let mut controller = playlist(&["a", "b", "c"]);
        controller.set_mode(PlaybackMode::Random);
        for _ in 0..50 {
            controller.on_playback_finished().unwrap();
            assert!(controller.selected_index().unwrap() < 3);
        }
    }

    #[test]
    fn finish_on_empty_playlist_is_noop() {
        let mut controller = playlist(&[]);
        for _ in 0..4 {
            controller.on_playback_finished().unwrap();
            controller.toggle_playback_mode();
        }
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn player_failures_are_reported() {
        let mut controller = playlist(&[]);
        controller.add(MediaItem::new(
            MediaId(3),
            ProbedMedia {
                name: "gone".to_string(),
                path: PathBuf::from("/videos/gone.mp4"),
                size: DisplaySize { width: 4, height: 3 },
                duration: Duration::from_secs(1),
                metadata: None,
            },
            FakePlayer::disconnected(),
        ));

        assert!(matches!(
            controller.handle_key(" "),
            Err(PlayerError::Disconnected(_))
        ));
    }

    #[test]
    fn position_of_follows_removals() {
        let mut controller = playlist(&["a", "b", "c"]);
        assert_eq!(controller.position_of(MediaId(2)), Some(2));
        controller.remove(0).unwrap();
        assert_eq!(controller.position_of(MediaId(2)), Some(1));
        assert_eq!(controller.position_of(MediaId(0)), None);
    }
}
