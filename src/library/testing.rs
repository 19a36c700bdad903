use std::path::{Path, PathBuf};

use crate::error::TagError;

use super::song::Song;
use super::tags::{TagMetadata, TagReader};

/// Accepts any file whose extension is `mp3` and titles it after the stem.
pub(crate) struct FakeTagReader;

impl TagReader for FakeTagReader {
    fn read_tags(&self, path: &Path) -> Result<TagMetadata, TagError> {
        let is_mp3 = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("mp3"));
        if !is_mp3 {
            return Err(TagError("no MPEG frames".into()));
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(TagMetadata {
            title: stem,
            artist: "Fake Artist".into(),
            ..TagMetadata::default()
        })
    }
}

/// A song at `/music/<name>.mp3` with `name` as its title.
pub(crate) fn song(name: &str) -> Song {
    Song::with_metadata(
        PathBuf::from(format!("/music/{name}.mp3")),
        TagMetadata {
            title: name.to_string(),
            ..TagMetadata::default()
        },
    )
}
