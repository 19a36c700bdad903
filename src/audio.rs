//! Audio engine seam and the `rodio` implementation behind it.
//!
//! The playback controller only ever talks to `AudioEngine`. `RodioEngine`
//! forwards each call to a dedicated audio thread that owns the output stream
//! and waits (bounded) for the answer.

mod engine;
mod rodio_engine;
mod sink;
mod thread;
mod types;

pub use engine::{AudioEngine, EngineStatus};
pub use rodio_engine::RodioEngine;

#[cfg(test)]
pub(crate) mod fake;
