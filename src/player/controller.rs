//! `PlaybackController`: translates transport commands into engine calls.
//!
//! ```text
//! Stopped --play()--> Playing
//! Playing --pause()--> Paused
//! Paused  --resume()--> Playing
//! Playing --stop()--> Stopped
//! Paused  --stop()--> Stopped
//! Playing --play()--> Playing  (restart)
//! ```
//!
//! Every other (state, command) pair is a no-op that makes no engine call.
//! An engine error never moves the state machine.

use tracing::{debug, error, info, warn};

use crate::audio::{AudioEngine, EngineStatus};
use crate::error::EngineError;
use crate::library::{Song, SongLibrary};

/// The playback state of the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What prev/next do at the first and last song of the library.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Go around to the other end.
    #[default]
    Wrap,
    /// Stay put: prev on the first song and next on the last are no-ops.
    Clamp,
}

#[derive(Copy, Clone)]
enum Step {
    Prev,
    Next,
}

pub struct PlaybackController<E> {
    engine: E,
    current: Option<Song>,
    state: PlaybackState,
    volume: f32,
    boundary: Boundary,
}

impl<E: AudioEngine> PlaybackController<E> {
    pub fn new(engine: E, boundary: Boundary) -> Self {
        Self {
            engine,
            current: None,
            state: PlaybackState::Stopped,
            volume: 1.0,
            boundary,
        }
    }

    pub fn status(&self) -> PlaybackState {
        self.state
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Replace the current song. Does not touch the engine.
    pub fn set_current_song(&mut self, song: Option<Song>) {
        self.current = song;
    }

    /// Open and start the current song.
    ///
    /// No-op without a current song or while paused. While playing, the song
    /// restarts from the beginning.
    pub fn play(&mut self) -> Result<(), EngineError> {
        if self.state == PlaybackState::Paused {
            debug!("play ignored while paused");
            return Ok(());
        }
        let Some(song) = self.current.as_ref() else {
            debug!("play ignored: no current song");
            return Ok(());
        };
        let Some(path) = song.path() else {
            debug!("play ignored: current song has no path");
            return Ok(());
        };

        let started = self.engine.open(path).and_then(|()| self.engine.play());
        if let Err(e) = started {
            error!(path = %path.display(), "playback failed: {e}");
            return Err(e);
        }

        info!(song = %song.title_and_artist(), "playing");
        self.state = PlaybackState::Playing;
        Ok(())
    }

    pub fn play_song(&mut self, song: Song) -> Result<(), EngineError> {
        self.set_current_song(Some(song));
        self.play()
    }

    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.state != PlaybackState::Playing {
            debug!(state = ?self.state, "pause ignored");
            return Ok(());
        }
        self.engine.pause().inspect_err(|e| error!("pause failed: {e}"))?;
        info!("paused");
        self.state = PlaybackState::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), EngineError> {
        if self.state != PlaybackState::Paused {
            debug!(state = ?self.state, "resume ignored");
            return Ok(());
        }
        self.engine.resume().inspect_err(|e| error!("resume failed: {e}"))?;
        info!("resumed");
        self.state = PlaybackState::Playing;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), EngineError> {
        if self.state == PlaybackState::Stopped {
            debug!("stop ignored: already stopped");
            return Ok(());
        }
        self.engine.stop().inspect_err(|e| error!("stop failed: {e}"))?;
        info!("stopped");
        self.state = PlaybackState::Stopped;
        Ok(())
    }

    pub fn play_prev(&mut self, library: &SongLibrary) -> Result<(), EngineError> {
        self.play_adjacent(library, Step::Prev)
    }

    pub fn play_next(&mut self, library: &SongLibrary) -> Result<(), EngineError> {
        self.play_adjacent(library, Step::Next)
    }

    /// Prev/next always start the neighbour. When paused the paused song is
    /// stopped first, since `play` leaves a paused song alone.
    fn play_adjacent(&mut self, library: &SongLibrary, step: Step) -> Result<(), EngineError> {
        match self.adjacent(library, step) {
            Some(song) => {
                if self.state == PlaybackState::Paused {
                    self.stop()?;
                }
                self.play_song(song)
            }
            None => {
                debug!("no adjacent song to play");
                Ok(())
            }
        }
    }

    fn adjacent(&self, library: &SongLibrary, step: Step) -> Option<Song> {
        let path = self.current.as_ref()?.path()?;
        let index = library.position_of(path)?;
        let last = library.len() - 1;

        let target = match (step, self.boundary) {
            (Step::Next, _) if index < last => index + 1,
            (Step::Next, Boundary::Wrap) => 0,
            (Step::Prev, _) if index > 0 => index - 1,
            (Step::Prev, Boundary::Wrap) => last,
            (_, Boundary::Clamp) => return None,
        };
        library.get(target).ok().cloned()
    }

    /// Set the volume, clamped to `0.0..=1.0`. Engine failures are only logged.
    pub fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
        if let Err(e) = self.engine.set_volume(self.volume) {
            warn!("engine rejected volume {:.2}: {e}", self.volume);
        }
    }

    /// Notice a song that ended on its own.
    ///
    /// When the controller thinks it is playing but the engine has stopped,
    /// the controller moves to `Stopped` and, with `auto_advance`, plays the
    /// next song of `library`.
    pub fn sync_with_engine(
        &mut self,
        library: &SongLibrary,
        auto_advance: bool,
    ) -> Result<(), EngineError> {
        if self.state != PlaybackState::Playing || self.engine.status() != EngineStatus::Stopped {
            return Ok(());
        }

        info!("song ended");
        self.state = PlaybackState::Stopped;
        if auto_advance {
            self.play_next(library)?;
        }
        Ok(())
    }
}
