use std::path::Path;

use tracing::{debug, info};

use crate::error::LibraryError;

use super::song::Song;

/// Ordered, duplicate-free collection of songs.
///
/// Insertion order is preserved and is the order prev/next walk through.
/// Lookups are linear scans; a personal library is a few hundred songs.
#[derive(Debug, Default, Clone)]
pub struct SongLibrary {
    songs: Vec<Song>,
}

impl SongLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `song` unless it has no path or is already present.
    pub fn add(&mut self, song: Song) -> Result<(), LibraryError> {
        let Some(path) = song.path() else {
            debug!("refusing to add a song without a path");
            return Err(LibraryError::InvalidSong);
        };
        if self.position_of(path).is_some() {
            debug!(path = %path.display(), "song already in library");
            return Err(LibraryError::Duplicate(path.to_path_buf()));
        }

        info!(path = %path.display(), title = %song.display_title(), "song added to library");
        self.songs.push(song);
        Ok(())
    }

    /// Add every song in order, returning one outcome per song.
    pub fn add_many<I>(&mut self, songs: I) -> Vec<Result<(), LibraryError>>
    where
        I: IntoIterator<Item = Song>,
    {
        songs.into_iter().map(|s| self.add(s)).collect()
    }

    /// Remove the entry whose path equals `song`'s path and return it.
    pub fn delete(&mut self, song: &Song) -> Result<Song, LibraryError> {
        let path = song.path().ok_or(LibraryError::InvalidSong)?;
        let Some(index) = self.position_of(path) else {
            debug!(path = %path.display(), "song not in library");
            return Err(LibraryError::NotFound(path.to_path_buf()));
        };

        let removed = self.songs.remove(index);
        info!(path = %path.display(), "song deleted from library");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<&Song, LibraryError> {
        self.songs.get(index).ok_or(LibraryError::IndexOutOfRange {
            index,
            len: self.songs.len(),
        })
    }

    pub fn find_by_path(&self, path: &Path) -> Option<&Song> {
        self.songs.iter().find(|s| s.path() == Some(path))
    }

    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.songs.iter().position(|s| s.path() == Some(path))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }
}
