//! Error types for the song model, the library and the audio engine.
//!
//! None of these are fatal: the app turns them into notices and keeps going.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure to read tags from an audio file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TagError(pub String);

/// A file could not be turned into a `Song`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SongError {
    #[error("{} is not a valid audio file: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The song has no path (the tombstone sentinel).
    #[error("song has no path and cannot be stored")]
    InvalidSong,
    #[error("{} is already in the library", .0.display())]
    Duplicate(PathBuf),
    #[error("{} is not in the library", .0.display())]
    NotFound(PathBuf),
    #[error("index {index} out of range for library of {len} songs")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("failed to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("no song is loaded")]
    NothingLoaded,
    #[error("audio engine did not answer within {0:?}")]
    Timeout(Duration),
    #[error("audio engine is gone")]
    Disconnected,
}
