use std::path::Path;

use crate::app::{App, PlaybackState};
use crate::catalog::load_playlist;
use crate::config::Settings;
use crate::player::{Player, PlayerCmd};

/// Load the first album's playlist and prime the player with its first
/// track, paused by default, mirroring a fresh page load.
pub fn load_initial_album(app: &mut App, player: &Player, root: &Path, settings: &Settings) {
    let Some(album_id) = app.albums.first().map(|a| a.id.clone()) else {
        return;
    };

    let tracks = load_playlist(root, &album_id, &settings.library.fallback_playlists);
    app.set_playlist(tracks.clone());
    let _ = player.send(PlayerCmd::SetPlaylist(tracks));

    if app.has_tracks() {
        let start_paused = settings.playback.start_paused;
        let _ = player.send(PlayerCmd::Play {
            index: 0,
            start_paused,
        });
        app.playback = if start_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };
    }
}
