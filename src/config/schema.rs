use serde::Deserialize;

use crate::catalog::FallbackPlaylists;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/rondo/config.toml` or `~/.config/rondo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RONDO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            playback: PlaybackSettings::default(),
            controls: ControlsSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Resource root whose subdirectories are album folders.
    pub root: String,

    /// Track lists used when an album's metadata names no songs:
    /// `{album id -> ordered track names}`.
    pub fallback_playlists: FallbackPlaylists,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            root: "Songs".to_string(),
            fallback_playlists: default_fallback_playlists(),
        }
    }
}

/// The built-in degraded-mode table for the stock demo library.
fn default_fallback_playlists() -> FallbackPlaylists {
    FallbackPlaylists::from([
        (
            "1".to_string(),
            vec!["Aavan Javan".to_string(), "Janaab e Aali".to_string()],
        ),
        (
            "2".to_string(),
            vec!["Manwa Laage".to_string(), "Tere Liye".to_string()],
        ),
        ("3".to_string(), vec!["Maiyya Mainu".to_string()]),
    ])
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Default volume for new sinks, clamped into [0, 1] at use.
    pub volume: f32,
    /// Whether the startup track is loaded paused instead of playing.
    pub start_paused: bool,
    /// Whether selecting an album starts its first track.
    pub play_on_album_select: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            start_paused: true,
            play_on_album_select: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Fraction of the track duration to scrub per seek keypress.
    pub seek_step: f32,
    /// Volume change per volume keypress.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step: 0.05,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which time fields to show next to the position gauge, in order.
    ///
    /// Example: ["elapsed", "total", "remaining"]
    pub now_playing_time_fields: Vec<TimeField>,

    /// Separator used to join `now_playing_time_fields`.
    pub now_playing_time_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ rondo: albums, in order ~ ".to_string(),
            now_playing_time_fields: vec![TimeField::Elapsed, TimeField::Total],
            now_playing_time_separator: " / ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeField {
    Elapsed,
    Total,
    Remaining,
}
