//! Application model types: `App`, `Pane` and `PlaybackState`.

use crate::catalog::{Album, Track};
use crate::player::{next_index, prev_index};
use crate::player::PlaybackHandle;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Which pane has keyboard focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pane {
    Albums,
    Tracks,
}

/// The main application model.
pub struct App {
    pub albums: Vec<Album>,
    pub selected_album: usize,

    /// Playlist of the most recently selected album; replaced wholesale
    /// on album selection.
    pub tracks: Vec<Track>,
    pub selected_track: usize,

    pub focus: Pane,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    pub library_root: Option<String>,
}

impl App {
    /// Create a new `App` with the provided albums and an empty playlist.
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums,
            selected_album: 0,
            tracks: Vec::new(),
            selected_track: 0,
            focus: Pane::Albums,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            library_root: None,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the resource root in the app state.
    pub fn set_library_root(&mut self, root: String) {
        self.library_root = Some(root);
    }

    pub fn has_albums(&self) -> bool {
        !self.albums.is_empty()
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// The album the playlist currently belongs to.
    pub fn current_album(&self) -> Option<&Album> {
        self.albums.get(self.selected_album)
    }

    /// Replace the playlist with a newly selected album's tracks.
    pub fn set_playlist(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.selected_track = 0;
    }

    /// Move the selection in the focused pane down, wrapping.
    pub fn select_next(&mut self) {
        match self.focus {
            Pane::Albums => {
                if let Some(i) = next_index(Some(self.selected_album), self.albums.len()) {
                    self.selected_album = i;
                }
            }
            Pane::Tracks => {
                if let Some(i) = next_index(Some(self.selected_track), self.tracks.len()) {
                    self.selected_track = i;
                }
            }
        }
    }

    /// Move the selection in the focused pane up, wrapping.
    pub fn select_prev(&mut self) {
        match self.focus {
            Pane::Albums => {
                if let Some(i) = prev_index(Some(self.selected_album), self.albums.len()) {
                    self.selected_album = i;
                }
            }
            Pane::Tracks => {
                if let Some(i) = prev_index(Some(self.selected_track), self.tracks.len()) {
                    self.selected_track = i;
                }
            }
        }
    }

    /// Flip keyboard focus between the albums and tracks panes.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Albums => Pane::Tracks,
            Pane::Tracks => Pane::Albums,
        };
    }
}
