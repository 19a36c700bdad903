use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, warn};

use crate::app::Notice;
use crate::audio::RodioEngine;
use crate::library::LoftyTagReader;

mod event_loop;
mod keymap;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    let _log_guard = logging::init_logging(&settings.logging);
    info!(version = env!("CARGO_PKG_VERSION"), "tunebox starting");
    if let Some(msg) = &fallback {
        warn!("{msg}");
    }

    // Every argument is a file or directory to import.
    let inputs: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();

    let engine = RodioEngine::spawn(&settings.audio);
    let mut app = startup::build_app(engine, &settings, Box::new(LoftyTagReader), &inputs);
    if app.notice.is_none() {
        app.notice = fallback.map(Notice::error);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);
    if let Err(e) = &run_result {
        error!("event loop failed: {e}");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("tunebox exiting");
    run_result
}
