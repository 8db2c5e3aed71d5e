//! Pure transport arithmetic, kept free of audio plumbing so the
//! wraparound and clamping rules stay unit-testable.

use std::time::Duration;

/// Index of the track `Next` should play: `(i + 1) mod n`.
///
/// An out-of-range current index is treated as 0 (the playlist may have
/// been replaced underneath the current track). With no current track,
/// playback starts at the front. Empty playlists yield `None`.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) => {
            let i = if i < len { i } else { 0 };
            Some((i + 1) % len)
        }
    }
}

/// Index of the track `Prev` should play: `(i + n - 1) mod n`.
///
/// With no current track, playback starts from the back. Empty playlists
/// yield `None`.
pub fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(len - 1),
        Some(i) => {
            let i = if i < len { i } else { 0 };
            Some((i + len - 1) % len)
        }
    }
}

/// Whether a play request targets the already loaded track, in which
/// case it toggles pause/resume in place instead of recreating the
/// sink. Without a live sink (fresh start, after a stop, after the
/// track drained) even the same index reloads from position zero.
pub fn should_toggle(current: Option<usize>, requested: usize, sink_present: bool) -> bool {
    sink_present && current == Some(requested)
}

/// Clamp a requested volume level into [0, 1].
pub fn clamp_volume(level: f32) -> f32 {
    level.clamp(0.0, 1.0)
}

/// Absolute position for a seek to `fraction` of `duration`. The
/// fraction is clamped into [0, 1] first.
pub fn seek_target(fraction: f32, duration: Duration) -> Duration {
    duration.mul_f64(f64::from(fraction.clamp(0.0, 1.0)))
}
