//! Scripted engine for tests: records every call and can be told to fail.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::EngineError;

use super::engine::{AudioEngine, EngineStatus};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Open(PathBuf),
    Play,
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
}

/// Clones share state, so a test can keep a handle after moving one into a
/// controller.
#[derive(Clone, Default)]
pub(crate) struct FakeEngine {
    calls: Rc<RefCell<Vec<Call>>>,
    status: Rc<Cell<EngineStatus>>,
    fail_open: Rc<Cell<bool>>,
    fail_volume: Rc<Cell<bool>>,
}

impl FakeEngine {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn fail_open(&self, fail: bool) {
        self.fail_open.set(fail);
    }

    pub(crate) fn fail_volume(&self, fail: bool) {
        self.fail_volume.set(fail);
    }

    /// Pretend the current song ran out.
    pub(crate) fn finish_song(&self) {
        self.status.set(EngineStatus::Stopped);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl AudioEngine for FakeEngine {
    fn open(&mut self, path: &Path) -> Result<(), EngineError> {
        self.record(Call::Open(path.to_path_buf()));
        if self.fail_open.get() {
            return Err(EngineError::Open {
                path: path.to_path_buf(),
                reason: "No such file or directory".into(),
            });
        }
        self.status.set(EngineStatus::Stopped);
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.record(Call::Play);
        self.status.set(EngineStatus::Playing);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.record(Call::Pause);
        self.status.set(EngineStatus::Paused);
        Ok(())
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.record(Call::Resume);
        self.status.set(EngineStatus::Playing);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.record(Call::Stop);
        self.status.set(EngineStatus::Stopped);
        Ok(())
    }

    fn set_volume(&mut self, level: f32) -> Result<(), EngineError> {
        self.record(Call::SetVolume(level));
        if self.fail_volume.get() {
            return Err(EngineError::Disconnected);
        }
        Ok(())
    }

    fn status(&self) -> EngineStatus {
        self.status.get()
    }
}
