use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Flow};
use crate::audio::AudioEngine;
use crate::config;
use crate::ui;

use super::keymap::{self, KeyState};

/// How long to wait for input before ticking the app. Also bounds how late a
/// natural end of song is noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main terminal event loop: draw, tick, read input, dispatch. Returns
/// `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut keys = KeyState::default();

    loop {
        app.tick();

        let display = app.display_indices();
        terminal.draw(|f| ui::draw(f, app, &display, &settings.ui))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let ev = event::read()?;
        let Some(intent) = keymap::map_event(&ev, app.prompt.is_some(), &mut keys) else {
            continue;
        };
        if app.dispatch(intent) == Flow::Quit {
            return Ok(());
        }
    }
}
