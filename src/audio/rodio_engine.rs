use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::error::EngineError;

use super::engine::{AudioEngine, EngineStatus};
use super::thread::spawn_audio_thread;
use super::types::{Deadline, EngineCmd, EngineOp, StatusHandle};

/// `AudioEngine` backed by a `rodio` output stream on its own thread.
///
/// Every call is a request/reply round trip bounded by `timeout`. A request
/// the audio thread gets to after the caller gave up is refused, so a timed
/// out `open` never swaps the loaded song behind the controller's back.
pub struct RodioEngine {
    tx: Sender<EngineCmd>,
    status: StatusHandle,
    timeout: Duration,
    join: Option<JoinHandle<()>>,
}

impl RodioEngine {
    pub fn spawn(settings: &AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let status: StatusHandle = Arc::new(Mutex::new(EngineStatus::Stopped));
        let join = spawn_audio_thread(rx, status.clone(), settings.initial_volume);

        Self {
            tx,
            status,
            timeout: Duration::from_millis(settings.open_timeout_ms),
            join: Some(join),
        }
    }

    fn call(&self, op: EngineOp) -> Result<(), EngineError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(EngineCmd::Request {
                op,
                reply: reply_tx,
                deadline: Deadline::after(self.timeout),
            })
            .map_err(|_| EngineError::Disconnected)?;

        match reply_rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(EngineError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::Disconnected),
        }
    }
}

impl AudioEngine for RodioEngine {
    fn open(&mut self, path: &Path) -> Result<(), EngineError> {
        self.call(EngineOp::Open(path.to_path_buf()))
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.call(EngineOp::Play)
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.call(EngineOp::Pause)
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.call(EngineOp::Resume)
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.call(EngineOp::Stop)
    }

    fn set_volume(&mut self, level: f32) -> Result<(), EngineError> {
        self.call(EngineOp::SetVolume(level))
    }

    fn status(&self) -> EngineStatus {
        self.status.lock().map(|s| *s).unwrap_or_default()
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        let _ = self.tx.send(EngineCmd::Quit);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::thread;

    /// An engine whose "audio thread" is a scripted responder.
    fn scripted<F>(timeout: Duration, respond: F) -> RodioEngine
    where
        F: Fn(EngineOp, Deadline) -> Option<Result<(), EngineError>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let join = thread::spawn(move || {
            // Unanswered replies stay alive so the caller sees a timeout.
            let mut parked = Vec::new();
            while let Ok(cmd) = rx.recv() {
                match cmd {
                    EngineCmd::Request {
                        op,
                        reply,
                        deadline,
                    } => match respond(op, deadline) {
                        Some(result) => {
                            let _ = reply.send(result);
                        }
                        None => parked.push(reply),
                    },
                    EngineCmd::Quit => break,
                }
            }
        });
        RodioEngine {
            tx,
            status: Arc::new(Mutex::new(EngineStatus::Stopped)),
            timeout,
            join: Some(join),
        }
    }

    #[test]
    fn call_returns_the_threads_answer() {
        let mut engine = scripted(Duration::from_secs(1), |op, _| match op {
            EngineOp::Open(path) => Some(Err(EngineError::Decode {
                path,
                reason: "bad header".into(),
            })),
            _ => Some(Ok(())),
        });

        assert!(engine.play().is_ok());
        assert_eq!(
            engine.open(Path::new("/music/broken.mp3")),
            Err(EngineError::Decode {
                path: PathBuf::from("/music/broken.mp3"),
                reason: "bad header".into(),
            })
        );
    }

    #[test]
    fn unanswered_call_times_out() {
        let mut engine = scripted(Duration::from_millis(20), |_, _| None);
        assert_eq!(
            engine.pause(),
            Err(EngineError::Timeout(Duration::from_millis(20)))
        );
    }

    #[test]
    fn status_reads_the_shared_handle() {
        let engine = scripted(Duration::from_millis(20), |_, _| Some(Ok(())));
        assert_eq!(engine.status(), EngineStatus::Stopped);

        *engine.status.lock().unwrap() = EngineStatus::Paused;
        assert_eq!(engine.status(), EngineStatus::Paused);
    }

    #[test]
    fn requests_carry_a_live_deadline() {
        let mut engine = scripted(Duration::from_secs(1), |_, deadline| {
            Some(if deadline.expired() {
                Err(deadline.error())
            } else {
                Ok(())
            })
        });
        assert_eq!(engine.stop(), Ok(()));
    }
}
