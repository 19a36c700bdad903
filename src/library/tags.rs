//! Tag reading seam.
//!
//! Songs get their metadata through `TagReader` so the library can be
//! exercised without real audio files. `LoftyTagReader` is the production
//! implementation.

use std::path::Path;
use std::time::Duration;

use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use lofty::tag::{Accessor, Tag};

use crate::error::TagError;

/// Metadata extracted from an audio file. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub genre: String,
    pub comment: String,
    pub duration: Option<Duration>,
}

pub trait TagReader {
    /// Read tags from `path`. An error means the file is not usable audio.
    fn read_tags(&self, path: &Path) -> Result<TagMetadata, TagError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<TagMetadata, TagError> {
        let tagged = lofty::read_from_path(path).map_err(|e| TagError(e.to_string()))?;

        let mut meta = TagMetadata {
            duration: Some(tagged.properties().duration()),
            ..TagMetadata::default()
        };

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            meta.title = clean(tag.title().as_deref());
            meta.artist = clean(tag.artist().as_deref());
            meta.album = clean(tag.album().as_deref());
            meta.genre = clean(tag.genre().as_deref());
            meta.comment = clean(tag.comment().as_deref());
            meta.year = year_of(tag);
        }

        Ok(meta)
    }
}

fn clean(v: Option<&str>) -> String {
    v.map(str::trim).unwrap_or_default().to_string()
}

// ID3v2.4 files often carry only a recording date ("2004-05-01").
fn year_of(tag: &Tag) -> String {
    if let Some(y) = tag.year() {
        return y.to_string();
    }
    tag.get_string(&ItemKey::RecordingDate)
        .map(|d| d.trim().chars().take(4).collect())
        .unwrap_or_default()
}
