//! Everything a user can ask the app to do.
//!
//! The runtime turns key presses and pasted text into `Intent`s and
//! `App::dispatch` handles each one. There is no other way in.

use std::path::PathBuf;

use crate::config::SongColumn;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Pause when playing, resume when paused, play the selected song when stopped.
    PlayPause,
    /// Start the selected song from the beginning.
    PlaySelected,
    Stop,
    Next,
    Prev,
    VolumeUp,
    VolumeDown,
    SetVolume(f32),

    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    /// Import files or directories (add-file prompt, dropped files).
    AddPaths(Vec<PathBuf>),
    /// Play a file without adding it to the library.
    OpenAndPlay(PathBuf),
    DeleteSelected,

    /// Sort the table by a column; again on the same column flips direction.
    SortBy(SongColumn),
    ToggleColumn(SongColumn),
    CycleTheme,
    ToggleInfo,
    ToggleHelp,

    BeginPrompt(PromptKind),
    PromptInput(String),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    DismissNotice,

    Quit,
}

/// Which path prompt is open.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PromptKind {
    AddPath,
    OpenPath,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::AddPath => "add to library",
            PromptKind::OpenPath => "open and play",
        }
    }
}

/// Whether the event loop should keep going after an intent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
