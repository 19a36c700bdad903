use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::SongColumn;
use crate::error::SongError;

use super::tags::{TagMetadata, TagReader};

/// One track of the library.
///
/// Songs are identified by their absolute path: two songs are equal iff their
/// paths are. `Song::default()` has no path and is the invalid sentinel that a
/// library refuses to store.
#[derive(Debug, Clone, Default)]
pub struct Song {
    path: Option<PathBuf>,
    title: String,
    artist: String,
    album: String,
    year: String,
    genre: String,
    comment: String,
    duration: Option<Duration>,
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl Song {
    /// Build a song from a file on disk, reading its tags with `reader`.
    pub fn from_file(path: &Path, reader: &dyn TagReader) -> Result<Self, SongError> {
        let invalid = |reason: String| SongError::InvalidFile {
            path: path.to_path_buf(),
            reason,
        };

        let absolute = fs::canonicalize(path).map_err(|e| invalid(e.to_string()))?;
        if !absolute.is_file() {
            return Err(invalid("not a regular file".to_string()));
        }
        let meta = reader
            .read_tags(&absolute)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self::with_metadata(absolute, meta))
    }

    /// Build a song from an already known path and metadata.
    pub fn with_metadata(path: PathBuf, meta: TagMetadata) -> Self {
        Self {
            path: Some(path),
            title: meta.title,
            artist: meta.artist,
            album: meta.album,
            year: meta.year,
            genre: meta.genre,
            comment: meta.comment,
            duration: meta.duration,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.path.is_some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// The title tag, or the file stem when the tag is empty.
    pub fn display_title(&self) -> String {
        if !self.title.trim().is_empty() {
            return self.title.clone();
        }
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string()
    }

    /// `"Artist - Title"`, or just the title when the artist is unknown.
    pub fn title_and_artist(&self) -> String {
        let title = self.display_title();
        match self.artist.trim() {
            "" => title,
            artist => format!("{artist} - {title}"),
        }
    }

    /// Text shown in the table cell for `column`.
    pub fn field(&self, column: SongColumn) -> String {
        match column {
            SongColumn::Title => self.display_title(),
            SongColumn::Artist => self.artist.clone(),
            SongColumn::Album => self.album.clone(),
            SongColumn::Year => self.year.clone(),
            SongColumn::Genre => self.genre.clone(),
            SongColumn::Comment => self.comment.clone(),
            SongColumn::Path => self
                .path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}
