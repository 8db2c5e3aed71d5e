//! Player-facing small types and shared handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::catalog::Track;

/// Commands accepted by the audio thread.
#[derive(Debug)]
pub enum PlayerCmd {
    /// Replace the playlist wholesale. Stops playback; never auto-plays.
    SetPlaylist(Vec<Track>),
    /// Load and start the track at the given playlist index. The same
    /// index while a sink is loaded toggles pause/resume instead of
    /// reloading.
    Play { index: usize, start_paused: bool },
    /// Toggle pause/resume on the loaded sink; no-op without one.
    TogglePause,
    /// Stop playback and forget the current track.
    Stop,
    /// Move the position to `fraction` of the track's total duration.
    /// Silent no-op when nothing is loaded or the duration is unknown.
    Seek(f32),
    /// Set the default volume, clamped to [0, 1]; unmutes implicitly.
    SetVolume(f32),
    /// Flip the mute flag.
    ToggleMute,
    /// Play the next track, wrapping at the end of the playlist.
    Next,
    /// Play the previous track, wrapping at the start of the playlist.
    Prev,
    /// Stop playback and shut the audio thread down.
    Quit,
}

/// Notifications emitted by the audio thread for the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A different track was loaded, or playback stopped entirely.
    TrackChanged(Option<usize>),
    /// The playing/paused flag changed.
    PlayState { playing: bool },
    /// The current track drained: position reset, state paused, sink
    /// discarded. Playback does not advance on its own.
    Ended,
}

/// Snapshot of the playback state, shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Playlist index of the current track, if any.
    pub index: Option<usize>,
    /// Elapsed playback position within the current track.
    pub elapsed: Duration,
    /// Whether audio is actively playing.
    pub playing: bool,
    /// Whether a sink is currently loaded. After end-of-track the index
    /// stays while the sink is gone.
    pub loaded: bool,
    /// Default volume applied to sinks, always in [0, 1].
    pub volume: f32,
    /// Whether output is muted.
    pub muted: bool,
}

impl PlaybackInfo {
    /// Transition taken when the current track drains: position back to
    /// zero, state paused, handle gone, current track kept. Playback
    /// never advances on its own.
    pub fn finish_track(&mut self) {
        self.elapsed = Duration::ZERO;
        self.playing = false;
        self.loaded = false;
    }
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            playing: false,
            loaded: false,
            volume: 1.0,
            muted: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
