use std::path::Path;

use crate::error::EngineError;

/// What the engine reports it is doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EngineStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Audio decode/output capability.
///
/// The engine holds at most one open file. `open` replaces whatever was
/// loaded before and leaves the new file ready but not playing.
pub trait AudioEngine {
    fn open(&mut self, path: &Path) -> Result<(), EngineError>;
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self) -> Result<(), EngineError>;
    fn resume(&mut self) -> Result<(), EngineError>;
    /// Stop playback and release the open file.
    fn stop(&mut self) -> Result<(), EngineError>;
    /// `level` is in `0.0..=1.0`.
    fn set_volume(&mut self, level: f32) -> Result<(), EngineError>;
    fn status(&self) -> EngineStatus;
}
