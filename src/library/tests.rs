use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;

use super::testing::{FakeTagReader, song};
use super::*;
use crate::config::{LibrarySettings, SongColumn};
use crate::error::{LibraryError, SongError};

#[test]
fn add_grows_library_and_song_is_findable() {
    let mut lib = SongLibrary::new();
    let a = song("a");

    assert!(lib.add(a.clone()).is_ok());
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.find_by_path(Path::new("/music/a.mp3")), Some(&a));
}

#[test]
fn add_is_idempotent() {
    let mut lib = SongLibrary::new();
    lib.add(song("a")).unwrap();

    let again = lib.add(song("a"));
    assert_eq!(
        again,
        Err(LibraryError::Duplicate(PathBuf::from("/music/a.mp3")))
    );
    assert_eq!(lib.len(), 1);
}

#[test]
fn add_rejects_songs_without_a_path() {
    let mut lib = SongLibrary::new();
    assert_eq!(lib.add(Song::default()), Err(LibraryError::InvalidSong));
    assert!(lib.is_empty());
}

#[test]
fn delete_of_absent_song_reports_not_found_and_leaves_library_alone() {
    let mut lib = SongLibrary::new();
    lib.add(song("a")).unwrap();

    let res = lib.delete(&song("b"));
    assert_eq!(
        res,
        Err(LibraryError::NotFound(PathBuf::from("/music/b.mp3")))
    );
    assert_eq!(lib.len(), 1);
    assert!(lib.find_by_path(Path::new("/music/a.mp3")).is_some());
}

#[test]
fn add_then_delete_restores_size() {
    let mut lib = SongLibrary::new();
    lib.add(song("a")).unwrap();
    let before = lib.len();

    lib.add(song("b")).unwrap();
    let removed = lib.delete(&song("b")).unwrap();

    assert_eq!(removed.title(), "b");
    assert_eq!(lib.len(), before);
    assert!(lib.find_by_path(Path::new("/music/b.mp3")).is_none());
}

#[test]
fn get_is_bounds_checked() {
    let mut lib = SongLibrary::new();
    lib.add(song("a")).unwrap();
    lib.add(song("b")).unwrap();

    assert_eq!(lib.get(1).unwrap().title(), "b");
    assert_eq!(
        lib.get(2),
        Err(LibraryError::IndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn insertion_order_is_preserved() {
    let mut lib = SongLibrary::new();
    let outcomes = lib.add_many(vec![song("c"), song("a"), song("c"), song("b")]);

    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 3);
    let titles: Vec<&str> = lib.iter().map(Song::title).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
    assert_eq!(lib.position_of(Path::new("/music/b.mp3")), Some(2));
}

#[test]
fn songs_compare_by_path_only() {
    let a = song("a");
    let retagged = Song::with_metadata(
        PathBuf::from("/music/a.mp3"),
        TagMetadata {
            title: "Different".into(),
            ..TagMetadata::default()
        },
    );
    assert_eq!(a, retagged);
    assert_ne!(a, song("b"));
}

#[test]
fn display_title_falls_back_to_file_stem() {
    let untitled = Song::with_metadata(
        PathBuf::from("/music/Track 01.mp3"),
        TagMetadata::default(),
    );
    assert_eq!(untitled.display_title(), "Track 01");
    assert_eq!(untitled.title_and_artist(), "Track 01");

    let tagged = Song::with_metadata(
        PathBuf::from("/music/x.mp3"),
        TagMetadata {
            title: "Song".into(),
            artist: "  Artist ".into(),
            year: "1999".into(),
            duration: Some(Duration::from_secs(200)),
            ..TagMetadata::default()
        },
    );
    assert_eq!(tagged.title_and_artist(), "Artist - Song");
    assert_eq!(tagged.field(SongColumn::Year), "1999");
    assert_eq!(tagged.field(SongColumn::Path), "/music/x.mp3");
    assert_eq!(tagged.duration(), Some(Duration::from_secs(200)));
}

#[test]
fn from_file_canonicalizes_and_reads_tags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tune.mp3");
    fs::write(&path, b"x").unwrap();

    let song = Song::from_file(&dir.path().join(".").join("tune.mp3"), &FakeTagReader).unwrap();
    assert_eq!(song.path(), Some(fs::canonicalize(&path).unwrap().as_path()));
    assert_eq!(song.title(), "tune");
    assert!(song.is_valid());
}

#[test]
fn from_file_rejects_unreadable_and_missing_files() {
    let dir = tempdir().unwrap();
    let txt = dir.path().join("notes.txt");
    fs::write(&txt, b"x").unwrap();

    assert!(matches!(
        Song::from_file(&txt, &FakeTagReader),
        Err(SongError::InvalidFile { .. })
    ));
    assert!(matches!(
        Song::from_file(&dir.path().join("missing.mp3"), &FakeTagReader),
        Err(SongError::InvalidFile { .. })
    ));
    assert!(matches!(
        Song::from_file(dir.path(), &FakeTagReader),
        Err(SongError::InvalidFile { .. })
    ));
}

#[test]
fn import_counts_added_duplicates_and_invalid_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.mp3"), b"x").unwrap();
    fs::write(dir.path().join("two.mp3"), b"x").unwrap();
    let bogus = dir.path().join("bogus.txt");
    fs::write(&bogus, b"x").unwrap();

    let mut lib = SongLibrary::new();
    let settings = LibrarySettings::default();

    let first = import_paths(
        &mut lib,
        &[dir.path().to_path_buf(), bogus.clone()],
        &settings,
        &FakeTagReader,
    );
    assert_eq!(first.added, 2);
    assert_eq!(first.duplicates, 0);
    assert_eq!(first.invalid, vec![bogus]);

    let second = import_paths(
        &mut lib,
        &[dir.path().join("one.mp3")],
        &settings,
        &FakeTagReader,
    );
    assert_eq!(second.added, 0);
    assert_eq!(second.duplicates, 1);
    assert_eq!(lib.len(), 2);
}
