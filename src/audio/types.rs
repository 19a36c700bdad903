//! Messages exchanged with the audio thread.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::EngineError;

use super::engine::EngineStatus;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum EngineOp {
    /// Decode `path` into a fresh, paused sink, dropping the previous one.
    Open(PathBuf),
    Play,
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
}

#[derive(Debug)]
pub(super) enum EngineCmd {
    Request {
        op: EngineOp,
        reply: Sender<Result<(), EngineError>>,
        deadline: Deadline,
    },
    /// Stop playback and end the audio thread.
    Quit,
}

/// When the caller stops waiting for a reply.
///
/// Work finished after this point is thrown away: a late `Open` must not
/// replace the sink the caller believes is still loaded.
#[derive(Debug, Copy, Clone)]
pub(super) struct Deadline {
    at: Instant,
    timeout: Duration,
}

impl Deadline {
    pub(super) fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
            timeout,
        }
    }

    pub(super) fn expired(&self) -> bool {
        Instant::now() >= self.at
    }

    pub(super) fn error(&self) -> EngineError {
        EngineError::Timeout(self.timeout)
    }
}

/// Engine status shared between the audio thread and callers.
pub(super) type StatusHandle = Arc<Mutex<EngineStatus>>;
