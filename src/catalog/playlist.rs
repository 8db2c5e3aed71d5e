use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use log::{debug, warn};

use super::meta::AlbumMeta;
use super::model::Track;

/// Audio files are addressed as `{root}/{album}/{name}.mp3`, with the
/// name taken verbatim from the track list.
pub const TRACK_EXTENSION: &str = "mp3";

/// Degraded-mode table mapping album ids to track names, consulted when
/// an album's metadata names no songs. Supplied through configuration.
pub type FallbackPlaylists = HashMap<String, Vec<String>>;

/// Compute the audio file path for a named track of an album.
pub fn track_path(root: &Path, album_id: &str, name: &str) -> PathBuf {
    root.join(album_id).join(format!("{name}.{TRACK_EXTENSION}"))
}

fn probe_duration(path: &Path) -> Option<Duration> {
    match lofty::read_from_path(path) {
        Ok(tagged) => Some(tagged.properties().duration()),
        Err(e) => {
            debug!("no duration for {path:?}: {e}");
            None
        }
    }
}

fn make_track(root: &Path, album_id: &str, name: &str) -> Track {
    let path = track_path(root, album_id, name);
    let duration = probe_duration(&path);
    Track {
        name: name.to_string(),
        path,
        duration,
    }
}

/// Load the ordered track list for an album.
///
/// Prefers the `songs` array in the album's `info.json`. On any failure
/// (missing file, parse error, absent or empty array) the configured
/// fallback table is used, then the empty list. Never fails outward.
pub fn load_playlist(root: &Path, album_id: &str, fallback: &FallbackPlaylists) -> Vec<Track> {
    let names = AlbumMeta::read(&root.join(album_id))
        .and_then(|meta| meta.songs)
        .filter(|songs| !songs.is_empty())
        .unwrap_or_else(|| {
            warn!("album {album_id}: no track list in metadata, using fallback table");
            fallback.get(album_id).cloned().unwrap_or_default()
        });

    names
        .iter()
        .map(|name| make_track(root, album_id, name))
        .collect()
}
