use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info};

use crate::error::EngineError;

use super::engine::EngineStatus;
use super::sink::create_sink;
use super::types::{Deadline, EngineCmd, EngineOp, StatusHandle};

/// How often the thread checks whether the current song ran out.
const FINISH_POLL: Duration = Duration::from_millis(200);

struct Playback {
    sink: Option<Sink>,
    volume: f32,
    status: StatusHandle,
}

impl Playback {
    fn set_status(&self, status: EngineStatus) {
        if let Ok(mut s) = self.status.lock() {
            *s = status;
        }
    }

    fn status(&self) -> EngineStatus {
        self.status.lock().map(|s| *s).unwrap_or_default()
    }

    fn loaded(&self) -> Result<&Sink, EngineError> {
        self.sink.as_ref().ok_or(EngineError::NothingLoaded)
    }

    fn open(
        &mut self,
        stream: &OutputStream,
        path: &Path,
        deadline: &Deadline,
    ) -> Result<(), EngineError> {
        // Decode first so a bad file leaves the current song untouched.
        let sink = create_sink(stream, path, self.volume)?;
        if deadline.expired() {
            debug!(path = %path.display(), "open finished after the caller gave up; discarded");
            return Err(deadline.error());
        }
        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        self.set_status(EngineStatus::Stopped);
        debug!(path = %path.display(), "opened");
        Ok(())
    }

    fn release(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.set_status(EngineStatus::Stopped);
    }

    fn apply(
        &mut self,
        stream: &OutputStream,
        op: EngineOp,
        deadline: &Deadline,
    ) -> Result<(), EngineError> {
        match op {
            EngineOp::Open(path) => self.open(stream, &path, deadline)?,
            EngineOp::Play | EngineOp::Resume => {
                self.loaded()?.play();
                self.set_status(EngineStatus::Playing);
            }
            EngineOp::Pause => {
                self.loaded()?.pause();
                self.set_status(EngineStatus::Paused);
            }
            EngineOp::Stop => self.release(),
            EngineOp::SetVolume(level) => {
                self.volume = level.clamp(0.0, 1.0);
                if let Some(s) = self.sink.as_ref() {
                    s.set_volume(self.volume);
                }
            }
        }
        Ok(())
    }

    fn check_finished(&mut self) {
        let ran_out = self.sink.as_ref().is_some_and(Sink::empty);
        if ran_out && self.status() == EngineStatus::Playing {
            info!("song finished");
            self.sink = None;
            self.set_status(EngineStatus::Stopped);
        }
    }
}

/// Run `apply` unless the caller has already stopped waiting.
fn unless_expired<F>(deadline: &Deadline, apply: F) -> Result<(), EngineError>
where
    F: FnOnce() -> Result<(), EngineError>,
{
    if deadline.expired() {
        debug!("dropping a request whose caller timed out");
        return Err(deadline.error());
    }
    apply()
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<EngineCmd>,
    status: StatusHandle,
    initial_volume: f32,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Ok(stream)
            }
            Err(e) => {
                error!("no audio output device: {e}");
                Err(e.to_string())
            }
        };

        let mut playback = Playback {
            sink: None,
            volume: initial_volume.clamp(0.0, 1.0),
            status,
        };

        loop {
            match rx.recv_timeout(FINISH_POLL) {
                Ok(EngineCmd::Request {
                    op,
                    reply,
                    deadline,
                }) => {
                    let result = unless_expired(&deadline, || match &stream {
                        Ok(stream) => playback.apply(stream, op, &deadline),
                        Err(reason) => Err(EngineError::NoOutputDevice(reason.clone())),
                    });
                    // The caller may have timed out and gone away.
                    let _ = reply.send(result);
                }
                Ok(EngineCmd::Quit) => {
                    playback.release();
                    break;
                }
                Err(RecvTimeoutError::Timeout) => playback.check_finished(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("audio thread exiting");
    })
}
