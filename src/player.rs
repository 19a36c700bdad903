//! Playback transport: the state machine that owns the current song and is
//! the only caller of the audio engine.

mod controller;

pub use controller::{Boundary, PlaybackController, PlaybackState};
