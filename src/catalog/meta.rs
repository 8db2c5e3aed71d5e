use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use super::model::{Album, CoverRef};

/// Per-album metadata file name.
pub const META_FILE: &str = "info.json";

/// Cover file names probed, in order, when `info.json` names no image.
const COVER_CANDIDATES: [&str; 6] = [
    "cover.jpg",
    "cover.png",
    "album.jpg",
    "album.png",
    "1.jpg",
    "1.png",
];

/// The on-disk shape of an album's `info.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub songs: Option<Vec<String>>,
}

impl AlbumMeta {
    /// Read and parse `{folder}/info.json`. Unreadable or invalid files
    /// yield `None` with a logged warning.
    pub fn read(folder: &Path) -> Option<Self> {
        let path = folder.join(META_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("no readable {META_FILE} in {folder:?}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!("invalid {META_FILE} in {folder:?}: {e}");
                None
            }
        }
    }
}

/// Load one album's metadata. Any failure means the caller skips the
/// album; it is never fatal.
pub fn load_album_meta(root: &Path, id: &str) -> Option<Album> {
    let folder = root.join(id);
    let meta = AlbumMeta::read(&folder)?;
    let cover = resolve_cover(&folder, meta.image.as_deref());
    Some(Album {
        id: id.to_string(),
        folder,
        title: meta.title,
        description: meta.description,
        cover,
    })
}

/// Resolve an album's cover reference.
///
/// URLs and absolute paths are taken verbatim; a bare file name is looked
/// up inside the album folder. When the metadata names no image at all,
/// probe the conventional file names and fall back to a placeholder.
pub fn resolve_cover(folder: &Path, image: Option<&str>) -> CoverRef {
    match image {
        Some(img) if img.starts_with("http://") || img.starts_with("https://") => {
            CoverRef::Url(img.to_string())
        }
        Some(img) if Path::new(img).is_absolute() => CoverRef::File(PathBuf::from(img)),
        Some(img) => CoverRef::File(folder.join(img)),
        None => COVER_CANDIDATES
            .iter()
            .map(|name| folder.join(name))
            .find(|p| p.is_file())
            .map(CoverRef::File)
            .unwrap_or(CoverRef::Placeholder),
    }
}
