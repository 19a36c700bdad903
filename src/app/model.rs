//! Application model: `App`, its notices and prompts.
//!
//! The `App` struct holds the library, the playback controller and the view
//! state (selection, sorting, visible columns, theme) the renderer reads.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::audio::AudioEngine;
use crate::config::{LibrarySettings, Settings, SongColumn, ThemeName};
use crate::error::EngineError;
use crate::library::{Song, SongLibrary, TagReader, import_paths};
use crate::player::{PlaybackController, PlaybackState};

use super::dropped::parse_dropped_paths;
use super::intent::{Flow, Intent, PromptKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A one-line message for the status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// An open path prompt and what has been typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SongColumn,
    pub descending: bool,
}

/// The main application model.
pub struct App<E> {
    pub library: SongLibrary,
    pub player: PlaybackController<E>,
    /// Library index of the highlighted row.
    pub selected: usize,
    pub sort: Option<SortOrder>,
    pub columns: Vec<SongColumn>,
    pub theme: ThemeName,
    pub prompt: Option<Prompt>,
    pub notice: Option<Notice>,
    pub info_window: bool,
    pub help_window: bool,

    auto_advance: bool,
    volume_step: f32,
    library_settings: LibrarySettings,
    tag_reader: Box<dyn TagReader>,
}

impl<E: AudioEngine> App<E> {
    /// Create an empty `App` around `player`.
    pub fn new(
        player: PlaybackController<E>,
        settings: &Settings,
        tag_reader: Box<dyn TagReader>,
    ) -> Self {
        let mut columns = settings.ui.columns.clone();
        if !columns.contains(&SongColumn::Title) {
            columns.insert(0, SongColumn::Title);
        }

        Self {
            library: SongLibrary::new(),
            player,
            selected: 0,
            sort: None,
            columns,
            theme: settings.ui.theme,
            prompt: None,
            notice: None,
            info_window: false,
            help_window: false,

            auto_advance: settings.playback.auto_advance,
            volume_step: settings.ui.volume_step,
            library_settings: settings.library.clone(),
            tag_reader,
        }
    }

    /// Handle one user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Flow {
        debug!(?intent, "dispatch");
        match intent {
            Intent::PlayPause => self.play_pause(),
            Intent::PlaySelected => match self.selected_song() {
                Some(song) => self.start(song),
                None => self.notice = Some(Notice::info("Library is empty")),
            },
            Intent::Stop => {
                let r = self.player.stop();
                self.report(r);
            }
            Intent::Next => {
                let r = self.player.play_next(&self.library);
                self.report(r);
            }
            Intent::Prev => {
                let r = self.player.play_prev(&self.library);
                self.report(r);
            }
            Intent::VolumeUp => self
                .player
                .set_volume(self.player.volume() + self.volume_step),
            Intent::VolumeDown => self
                .player
                .set_volume(self.player.volume() - self.volume_step),
            Intent::SetVolume(level) => self.player.set_volume(level),

            Intent::SelectNext => self.select_step(1),
            Intent::SelectPrev => self.select_step(-1),
            Intent::SelectFirst => {
                if let Some(&first) = self.display_indices().first() {
                    self.selected = first;
                }
            }
            Intent::SelectLast => {
                if let Some(&last) = self.display_indices().last() {
                    self.selected = last;
                }
            }

            Intent::AddPaths(paths) => self.add_paths(&paths),
            Intent::OpenAndPlay(path) => self.open_and_play(&path),
            Intent::DeleteSelected => self.delete_selected(),

            Intent::SortBy(column) => self.sort_by(column),
            Intent::ToggleColumn(column) => self.toggle_column(column),
            Intent::CycleTheme => self.theme = self.theme.next(),
            Intent::ToggleInfo => self.info_window = !self.info_window,
            Intent::ToggleHelp => self.help_window = !self.help_window,

            Intent::BeginPrompt(kind) => {
                self.prompt = Some(Prompt {
                    kind,
                    input: String::new(),
                })
            }
            Intent::PromptInput(text) => {
                if let Some(p) = self.prompt.as_mut() {
                    p.input.push_str(&text);
                }
            }
            Intent::PromptBackspace => {
                if let Some(p) = self.prompt.as_mut() {
                    p.input.pop();
                }
            }
            Intent::PromptSubmit => self.submit_prompt(),
            Intent::PromptCancel => self.prompt = None,
            Intent::DismissNotice => self.notice = None,

            Intent::Quit => {
                let r = self.player.stop();
                self.report(r);
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Periodic work between input events.
    pub fn tick(&mut self) {
        let r = self.player.sync_with_engine(&self.library, self.auto_advance);
        self.report(r);
    }

    /// Import `paths` and say how it went.
    pub fn add_paths(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            return;
        }
        let was_empty = self.library.is_empty();
        let report = import_paths(
            &mut self.library,
            paths,
            &self.library_settings,
            self.tag_reader.as_ref(),
        );
        if was_empty && !self.library.is_empty() {
            self.selected = 0;
        }

        self.notice = Some(if report.has_problems() {
            Notice::error(report.summary())
        } else {
            Notice::info(report.summary())
        });
    }

    /// Library indices in table order (sorted view of insertion order).
    pub fn display_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.library.len()).collect();
        let Some(order) = self.sort else {
            return indices;
        };

        let keys: Vec<String> = self
            .library
            .iter()
            .map(|s| s.field(order.column).to_lowercase())
            .collect();
        indices.sort_by(|&a, &b| {
            let ord = keys[a].cmp(&keys[b]);
            if order.descending { ord.reverse() } else { ord }
        });
        indices
    }

    pub fn selected_song(&self) -> Option<Song> {
        self.library.get(self.selected).ok().cloned()
    }

    /// Library index of the current song, if it is in the library.
    pub fn current_index(&self) -> Option<usize> {
        let path = self.player.current_song()?.path()?;
        self.library.position_of(path)
    }

    fn report(&mut self, result: Result<(), EngineError>) {
        if let Err(e) = result {
            self.notice = Some(Notice::error(e.to_string()));
        }
    }

    fn play_pause(&mut self) {
        let r = match self.player.status() {
            PlaybackState::Playing => self.player.pause(),
            PlaybackState::Paused => self.player.resume(),
            PlaybackState::Stopped => match self.selected_song() {
                Some(song) => self.player.play_song(song),
                None => {
                    self.notice = Some(Notice::info("Nothing to play: the library is empty"));
                    Ok(())
                }
            },
        };
        self.report(r);
    }

    /// Start `song` from the top regardless of the current state.
    fn start(&mut self, song: Song) {
        if self.player.status() == PlaybackState::Paused {
            let r = self.player.stop();
            self.report(r);
        }
        let r = self.player.play_song(song);
        self.report(r);
    }

    fn open_and_play(&mut self, path: &Path) {
        match Song::from_file(path, self.tag_reader.as_ref()) {
            Ok(song) => self.start(song),
            Err(e) => {
                warn!("{e}");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    fn delete_selected(&mut self) {
        let Ok(song) = self.library.get(self.selected).cloned() else {
            self.notice = Some(Notice::info("Nothing selected to delete"));
            return;
        };

        match self.library.delete(&song) {
            Ok(removed) => {
                self.notice = Some(Notice::info(format!(
                    "Deleted '{}'",
                    removed.title_and_artist()
                )));
                if self.selected >= self.library.len() {
                    self.selected = self.library.len().saturating_sub(1);
                }
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let paths = parse_dropped_paths(&prompt.input);
        match prompt.kind {
            PromptKind::AddPath => self.add_paths(&paths),
            PromptKind::OpenPath => match paths.as_slice() {
                [path] => self.open_and_play(path),
                [] => {}
                _ => self.notice = Some(Notice::error("Open takes a single file")),
            },
        }
    }

    /// Move the selection `delta` rows through the table, wrapping around.
    fn select_step(&mut self, delta: isize) {
        let display = self.display_indices();
        if display.is_empty() {
            return;
        }
        let len = display.len() as isize;
        let pos = display
            .iter()
            .position(|&i| i == self.selected)
            .map_or(0, |p| p as isize);
        let next = (pos + delta).rem_euclid(len) as usize;
        self.selected = display[next];
    }

    fn sort_by(&mut self, column: SongColumn) {
        self.sort = Some(match self.sort {
            Some(order) if order.column == column => SortOrder {
                column,
                descending: !order.descending,
            },
            _ => SortOrder {
                column,
                descending: false,
            },
        });
    }

    fn toggle_column(&mut self, column: SongColumn) {
        if column == SongColumn::Title {
            self.notice = Some(Notice::info("The title column is always shown"));
            return;
        }
        if let Some(pos) = self.columns.iter().position(|&c| c == column) {
            self.columns.remove(pos);
            return;
        }
        // Re-insert in the canonical column order.
        let at = self
            .columns
            .iter()
            .position(|c| rank(*c) > rank(column))
            .unwrap_or(self.columns.len());
        self.columns.insert(at, column);
    }
}

fn rank(column: SongColumn) -> usize {
    SongColumn::ALL
        .iter()
        .position(|&c| c == column)
        .unwrap_or(usize::MAX)
}
