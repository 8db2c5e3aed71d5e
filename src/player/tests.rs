use std::time::Duration;

use super::transport::{clamp_volume, next_index, prev_index, seek_target, should_toggle};
use super::types::PlaybackInfo;

#[test]
fn next_and_prev_wrap_around() {
    // Playlist ["A", "B", "C"], current "B".
    assert_eq!(next_index(Some(1), 3), Some(2));
    assert_eq!(prev_index(Some(1), 3), Some(0));

    // Wraparound at both ends.
    assert_eq!(next_index(Some(2), 3), Some(0));
    assert_eq!(prev_index(Some(0), 3), Some(2));
}

#[test]
fn next_called_n_times_is_cyclic() {
    for n in [1usize, 3, 5] {
        for start in 0..n {
            let mut cur = Some(start);
            for _ in 0..n {
                cur = next_index(cur, n);
            }
            assert_eq!(cur, Some(start), "next^{n} from {start}");

            let mut cur = Some(start);
            for _ in 0..n {
                cur = prev_index(cur, n);
            }
            assert_eq!(cur, Some(start), "prev^{n} from {start}");
        }
    }
}

#[test]
fn empty_playlist_is_a_no_op() {
    assert_eq!(next_index(None, 0), None);
    assert_eq!(next_index(Some(3), 0), None);
    assert_eq!(prev_index(None, 0), None);
    assert_eq!(prev_index(Some(3), 0), None);
}

#[test]
fn out_of_range_current_falls_back_to_zero() {
    // The playlist was replaced underneath the current track.
    assert_eq!(next_index(Some(9), 3), Some(1));
    assert_eq!(prev_index(Some(9), 3), Some(2));
}

#[test]
fn no_current_track_starts_at_front_or_back() {
    assert_eq!(next_index(None, 3), Some(0));
    assert_eq!(prev_index(None, 3), Some(2));
}

#[test]
fn volume_clamps_to_unit_interval() {
    assert_eq!(clamp_volume(-0.5), 0.0);
    assert_eq!(clamp_volume(0.0), 0.0);
    assert_eq!(clamp_volume(0.37), 0.37);
    assert_eq!(clamp_volume(1.0), 1.0);
    assert_eq!(clamp_volume(7.0), 1.0);
}

#[test]
fn seek_target_scales_duration_by_fraction() {
    let d = Duration::from_secs(200);
    assert_eq!(seek_target(0.0, d), Duration::ZERO);
    assert_eq!(seek_target(0.25, d), Duration::from_secs(50));
    assert_eq!(seek_target(1.0, d), d);

    // Out-of-range fractions clamp instead of overshooting.
    assert_eq!(seek_target(1.5, d), d);
    assert_eq!(seek_target(-0.1, d), Duration::ZERO);
}

#[test]
fn replaying_the_loaded_track_toggles_instead_of_reloading() {
    // Same index with a live sink: toggle pause/resume in place.
    assert!(should_toggle(Some(1), 1, true));

    // A different track always reloads.
    assert!(!should_toggle(Some(1), 2, true));

    // After a stop or end-of-track the sink is gone; even the same
    // index starts over from position zero.
    assert!(!should_toggle(Some(1), 1, false));
    assert!(!should_toggle(None, 0, true));
}

#[test]
fn finish_track_leaves_paused_at_zero_without_advancing() {
    let mut info = PlaybackInfo {
        index: Some(2),
        elapsed: Duration::from_secs(137),
        playing: true,
        loaded: true,
        volume: 0.8,
        muted: false,
    };

    info.finish_track();

    // Position 0, paused, handle gone; the track itself stays current
    // and the volume settings survive.
    assert_eq!(info.elapsed, Duration::ZERO);
    assert!(!info.playing);
    assert!(!info.loaded);
    assert_eq!(info.index, Some(2));
    assert_eq!(info.volume, 0.8);
    assert!(!info.muted);
}

#[test]
fn playback_info_defaults_are_idle() {
    let info = PlaybackInfo::default();
    assert_eq!(info.index, None);
    assert_eq!(info.elapsed, Duration::ZERO);
    assert!(!info.playing);
    assert!(!info.loaded);
    assert_eq!(info.volume, 1.0);
    assert!(!info.muted);
}
