//! Turning user-supplied paths (command line, add prompt, dropped files)
//! into library entries.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::LibraryError;

use super::collection::SongLibrary;
use super::song::Song;
use super::tags::TagReader;

/// Outcome of importing a batch of paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
    /// Paths that were not usable audio files.
    pub invalid: Vec<PathBuf>,
}

impl ImportReport {
    /// A one-line summary for the status area.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} added", self.added)];
        if self.duplicates > 0 {
            parts.push(format!("{} already in library", self.duplicates));
        }
        if !self.invalid.is_empty() {
            parts.push(format!("{} not valid audio", self.invalid.len()));
        }
        parts.join(", ")
    }

    pub fn has_problems(&self) -> bool {
        self.duplicates > 0 || !self.invalid.is_empty()
    }
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Expand `inputs` into candidate audio files.
///
/// Directories are walked according to `settings`. Explicit files are kept
/// even when their extension is unknown so the tag reader can reject them and
/// the user hears about it.
pub fn collect_audio_paths(inputs: &[PathBuf], settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            out.push(input.clone());
            continue;
        }

        let mut walker = WalkDir::new(input).follow_links(settings.follow_links);

        // Non-recursive = only the root directory.
        let depth_cap = if settings.recursive {
            settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        let mut found: Vec<PathBuf> = walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(Result::ok)
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && is_audio_file(p, settings))
            .collect();
        found.sort();
        out.extend(found);
    }

    out
}

/// Import every path in `inputs` into `library`.
pub fn import_paths(
    library: &mut SongLibrary,
    inputs: &[PathBuf],
    settings: &LibrarySettings,
    reader: &dyn TagReader,
) -> ImportReport {
    let mut report = ImportReport::default();

    for path in collect_audio_paths(inputs, settings) {
        let song = match Song::from_file(&path, reader) {
            Ok(song) => song,
            Err(e) => {
                warn!("{e}");
                report.invalid.push(path);
                continue;
            }
        };
        match library.add(song) {
            Ok(()) => report.added += 1,
            Err(LibraryError::Duplicate(_)) => report.duplicates += 1,
            Err(e) => {
                warn!("{e}");
                report.invalid.push(path);
            }
        }
    }

    info!(
        added = report.added,
        duplicates = report.duplicates,
        invalid = report.invalid.len(),
        "import finished"
    );
    report
}
