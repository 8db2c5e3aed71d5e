use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_meta(dir: &Path, id: &str, json: &str) {
    let folder = dir.join(id);
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join(META_FILE), json).unwrap();
}

#[test]
fn track_path_keeps_names_verbatim() {
    let p = track_path(Path::new("Songs"), "2", "Manwa Laage");
    assert_eq!(p, PathBuf::from("Songs/2/Manwa Laage.mp3"));
}

#[test]
fn resolve_cover_takes_urls_and_absolute_paths_verbatim() {
    let folder = Path::new("/music/1");
    assert_eq!(
        resolve_cover(folder, Some("https://example.com/a.jpg")),
        CoverRef::Url("https://example.com/a.jpg".to_string())
    );
    assert_eq!(
        resolve_cover(folder, Some("/srv/covers/a.png")),
        CoverRef::File(PathBuf::from("/srv/covers/a.png"))
    );
}

#[test]
fn resolve_cover_joins_bare_names_into_the_album_folder() {
    let folder = Path::new("/music/1");
    assert_eq!(
        resolve_cover(folder, Some("front.jpg")),
        CoverRef::File(PathBuf::from("/music/1/front.jpg"))
    );
}

#[test]
fn resolve_cover_probes_conventional_names_then_placeholder() {
    let dir = tempdir().unwrap();

    // Nothing on disk: placeholder.
    assert_eq!(resolve_cover(dir.path(), None), CoverRef::Placeholder);

    // `album.png` exists but `cover.*` does not: the probe finds it.
    fs::write(dir.path().join("album.png"), b"png").unwrap();
    assert_eq!(
        resolve_cover(dir.path(), None),
        CoverRef::File(dir.path().join("album.png"))
    );

    // `cover.jpg` wins over `album.png` once present.
    fs::write(dir.path().join("cover.jpg"), b"jpg").unwrap();
    assert_eq!(
        resolve_cover(dir.path(), None),
        CoverRef::File(dir.path().join("cover.jpg"))
    );
}

#[test]
fn load_album_meta_parses_info_json() {
    let dir = tempdir().unwrap();
    write_meta(
        dir.path(),
        "1",
        r#"{ "title": "First", "description": "opener", "image": "front.jpg" }"#,
    );

    let album = load_album_meta(dir.path(), "1").unwrap();
    assert_eq!(album.id, "1");
    assert_eq!(album.title, "First");
    assert_eq!(album.description, "opener");
    assert_eq!(
        album.cover,
        CoverRef::File(dir.path().join("1").join("front.jpg"))
    );
}

#[test]
fn load_album_meta_defaults_optional_fields() {
    let dir = tempdir().unwrap();
    write_meta(dir.path(), "1", r#"{ "title": "Bare" }"#);

    let album = load_album_meta(dir.path(), "1").unwrap();
    assert_eq!(album.description, "");
    assert_eq!(album.cover, CoverRef::Placeholder);
}

#[test]
fn load_album_meta_skips_missing_or_invalid_metadata() {
    let dir = tempdir().unwrap();
    assert!(load_album_meta(dir.path(), "nope").is_none());

    write_meta(dir.path(), "bad", "{ not json");
    assert!(load_album_meta(dir.path(), "bad").is_none());
}

#[test]
fn load_playlist_uses_songs_from_metadata_in_order() {
    let dir = tempdir().unwrap();
    write_meta(
        dir.path(),
        "2",
        r#"{ "title": "Second", "songs": ["Manwa Laage", "Tere Liye"] }"#,
    );

    let tracks = load_playlist(dir.path(), "2", &HashMap::new());
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Manwa Laage", "Tere Liye"]);
    assert_eq!(tracks[0].path, dir.path().join("2").join("Manwa Laage.mp3"));
    // The files do not exist, so durations stay unknown.
    assert!(tracks[0].duration.is_none());
}

#[test]
fn load_playlist_falls_back_when_metadata_is_missing() {
    let dir = tempdir().unwrap();
    let fallback: FallbackPlaylists =
        HashMap::from([("7".to_string(), vec!["Known".to_string()])]);

    // Album "7" has no info.json at all: the fallback table answers.
    let tracks = load_playlist(dir.path(), "7", &fallback);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Known");

    // Unknown album id: empty, not an error.
    let tracks = load_playlist(dir.path(), "8", &fallback);
    assert!(tracks.is_empty());
}

#[test]
fn load_playlist_falls_back_when_songs_is_absent_or_empty() {
    let dir = tempdir().unwrap();
    write_meta(dir.path(), "3", r#"{ "title": "Third" }"#);
    write_meta(dir.path(), "4", r#"{ "title": "Fourth", "songs": [] }"#);

    let fallback: FallbackPlaylists =
        HashMap::from([("3".to_string(), vec!["Maiyya Mainu".to_string()])]);

    let tracks = load_playlist(dir.path(), "3", &fallback);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Maiyya Mainu");

    assert!(load_playlist(dir.path(), "4", &fallback).is_empty());
}

#[test]
fn scan_albums_orders_numerically_and_skips_broken_folders() {
    let dir = tempdir().unwrap();
    write_meta(dir.path(), "10", r#"{ "title": "Ten" }"#);
    write_meta(dir.path(), "2", r#"{ "title": "Two" }"#);
    write_meta(dir.path(), "1", r#"{ "title": "One" }"#);
    // A folder without metadata is skipped, not an error.
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    // A stray file at the root is ignored.
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    let albums = scan_albums(dir.path());
    let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "10"]);
}
