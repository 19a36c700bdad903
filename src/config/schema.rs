use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunebox/config.toml` or
/// `~/.config/tunebox/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNEBOX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, from 0.0 (mute) to 1.0 (full).
    pub initial_volume: f32,
    /// How long to wait for the audio thread to answer a command (milliseconds).
    pub open_timeout_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.8,
            open_timeout_ms: 5_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// What prev/next do at the first and last song of the library.
    pub boundary: BoundarySetting,
    /// Start the next song when the current one finishes on its own.
    pub auto_advance: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            boundary: BoundarySetting::Wrap,
            auto_advance: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundarySetting {
    #[serde(alias = "wrap-around", alias = "loop")]
    Wrap,
    #[serde(alias = "stop", alias = "no-wrap", alias = "no_wrap")]
    Clamp,
}

/// A column of the song table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SongColumn {
    Title,
    Artist,
    Album,
    Year,
    Genre,
    Comment,
    Path,
}

impl SongColumn {
    pub const ALL: [SongColumn; 7] = [
        SongColumn::Title,
        SongColumn::Artist,
        SongColumn::Album,
        SongColumn::Year,
        SongColumn::Genre,
        SongColumn::Comment,
        SongColumn::Path,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SongColumn::Title => "Title",
            SongColumn::Artist => "Artist",
            SongColumn::Album => "Album",
            SongColumn::Year => "Year",
            SongColumn::Genre => "Genre",
            SongColumn::Comment => "Comment",
            SongColumn::Path => "Path",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    Default,
    Light,
    Ocean,
    Mono,
}

impl ThemeName {
    /// The theme after this one when cycling.
    pub fn next(self) -> Self {
        match self {
            ThemeName::Default => ThemeName::Light,
            ThemeName::Light => ThemeName::Ocean,
            ThemeName::Ocean => ThemeName::Mono,
            ThemeName::Mono => ThemeName::Default,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Colour theme used at startup.
    pub theme: ThemeName,
    /// Visible table columns, in order.
    ///
    /// Example: ["title", "artist", "album"]
    pub columns: Vec<SongColumn>,
    /// Volume change per `+` / `-` key press.
    pub volume_step: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ tunebox ~ ".to_string(),
            theme: ThemeName::Default,
            columns: vec![
                SongColumn::Title,
                SongColumn::Artist,
                SongColumn::Album,
                SongColumn::Year,
                SongColumn::Genre,
            ],
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when importing directories.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub enabled: bool,
    /// Directory for the rolling log file. Defaults to the XDG state dir.
    pub directory: Option<PathBuf>,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
            filter: "info".to_string(),
        }
    }
}
