//! Song model, the in-memory song library and file import.
//!
//! `Song` is the immutable record for one track, `SongLibrary` the ordered,
//! duplicate-free list the UI renders, and `import` turns paths from the
//! command line, prompts or dropped files into library entries.

mod collection;
mod import;
mod song;
mod tags;

pub use collection::SongLibrary;
pub use import::import_paths;
pub use song::Song;
pub use tags::{LoftyTagReader, TagMetadata, TagReader};

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
