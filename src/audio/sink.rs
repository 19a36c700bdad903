//! Utilities for creating `rodio` sinks from song paths.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested volume.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::EngineError;

/// Create a paused `Sink` for the file at `path`.
pub(super) fn create_sink(
    handle: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<Sink, EngineError> {
    let file = File::open(path).map_err(|e| EngineError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let sink = Sink::connect_new(handle.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
