use std::path::Path;

use walkdir::WalkDir;

use super::meta::load_album_meta;
use super::model::Album;

// Numeric-aware ordering so folder "2" sorts before "10".
fn album_key(id: &str) -> (u8, u64, String) {
    match id.parse::<u64>() {
        Ok(n) => (0, n, String::new()),
        Err(_) => (1, 0, id.to_ascii_lowercase()),
    }
}

/// Discover albums: every immediate subdirectory of the resource root
/// with a parseable `info.json`. Folders without one are skipped.
pub fn scan_albums(root: &Path) -> Vec<Album> {
    let mut albums: Vec<Album> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .filter_map(|e| {
            let id = e.file_name().to_str()?;
            load_album_meta(root, id)
        })
        .collect();

    albums.sort_by_key(|a| album_key(&a.id));
    albums
}
