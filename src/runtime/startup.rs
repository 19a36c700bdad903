use std::path::PathBuf;

use tracing::info;

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config::{BoundarySetting, Settings};
use crate::library::TagReader;
use crate::player::{Boundary, PlaybackController};

pub fn boundary_from(setting: BoundarySetting) -> Boundary {
    match setting {
        BoundarySetting::Wrap => Boundary::Wrap,
        BoundarySetting::Clamp => Boundary::Clamp,
    }
}

/// Build the app around `engine`, apply startup volume and import `inputs`
/// (command line paths) into the library.
pub fn build_app<E: AudioEngine>(
    engine: E,
    settings: &Settings,
    tag_reader: Box<dyn TagReader>,
    inputs: &[PathBuf],
) -> App<E> {
    let mut player = PlaybackController::new(engine, boundary_from(settings.playback.boundary));
    player.set_volume(settings.audio.initial_volume);

    let mut app = App::new(player, settings, tag_reader);
    if !inputs.is_empty() {
        info!(count = inputs.len(), "importing command line paths");
        app.add_paths(inputs);
    }
    app
}
