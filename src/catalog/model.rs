use std::path::PathBuf;
use std::time::Duration;

/// A single playable item, identified by name within its album.
#[derive(Clone, Debug)]
pub struct Track {
    /// Track name, verbatim from the track list (spaces included).
    pub name: String,
    /// Resolved audio file path: `{root}/{album}/{name}.mp3`.
    pub path: PathBuf,
    /// Total duration read from the file's audio properties, when the
    /// file exists and decodes. Seeking needs this.
    pub duration: Option<Duration>,
}

/// Where an album's cover artwork lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverRef {
    File(PathBuf),
    Url(String),
    /// No usable artwork was found; render a generic icon.
    Placeholder,
}

/// A named collection of tracks with display metadata. Immutable for the
/// session once loaded.
#[derive(Clone, Debug)]
pub struct Album {
    /// Folder name under the resource root.
    pub id: String,
    pub folder: PathBuf,
    pub title: String,
    pub description: String,
    pub cover: CoverRef,
}
