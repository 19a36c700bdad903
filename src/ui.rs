//! UI rendering for the terminal user interface.
//!
//! This module draws `App` state with `ratatui`. It reads the model and never
//! changes it.

mod theme;

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table, TableState, Wrap},
};

use crate::app::{App, NoticeLevel};
use crate::audio::AudioEngine;
use crate::config::{SongColumn, UiSettings};
use crate::player::PlaybackState;

use theme::Theme;

/// Key bindings, in the order the help popup lists them.
const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play selected song"),
    ("space/p", "play/pause"),
    ("s", "stop"),
    ("h/l", "prev/next song"),
    ("+/-", "volume"),
    ("a", "add file or folder"),
    ("o", "open and play file"),
    ("d", "delete from library"),
    ("1-7", "sort by column"),
    ("c 1-7", "show/hide column"),
    ("t", "theme"),
    ("K", "song info"),
    ("?", "help"),
    ("q", "quit"),
];

/// Bindings shown in the footer.
const FOOTER_KEYS: &[&str] = &["space/p", "enter", "h/l", "+/-", "a", "?", "q"];

fn controls_text(keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| {
            CONTROLS
                .iter()
                .find(|(key, _)| key == k)
                .map(|(key, desc)| format!("[{key}] {desc}"))
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn column_width(column: SongColumn) -> Constraint {
    match column {
        SongColumn::Title => Constraint::Fill(3),
        SongColumn::Artist | SongColumn::Album | SongColumn::Comment => Constraint::Fill(2),
        SongColumn::Year => Constraint::Length(6),
        SongColumn::Genre => Constraint::Fill(1),
        SongColumn::Path => Constraint::Fill(4),
    }
}

fn left_padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn status_text<E: AudioEngine>(app: &App<E>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match app.player.status() {
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
        PlaybackState::Stopped => "Stopped",
    };
    parts.push(state.to_string());

    if let Some(song) = app.player.current_song() {
        match song.duration() {
            Some(d) => parts.push(format!(
                "Song: {} [{}]",
                song.title_and_artist(),
                format_mmss(d)
            )),
            None => parts.push(format!("Song: {}", song.title_and_artist())),
        }
    }

    parts.push(format!("Volume: {:.0}%", app.player.volume() * 100.0));
    parts.push(format!("Library: {} songs", app.library.len()));
    parts.join(" • ")
}

/// Render the entire UI into `frame`. `display` is the table order from
/// `App::display_indices`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    app: &App<E>,
    display: &[usize],
    ui_settings: &UiSettings,
) {
    let theme = Theme::named(app.theme);
    frame.render_widget(Block::default().style(theme.base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .style(theme.header)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" tunebox ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box: playback line, then the latest notice.
    let mut status_lines = vec![Line::from(status_text(app))];
    if let Some(notice) = &app.notice {
        let style = match notice.level {
            NoticeLevel::Info => theme.base,
            NoticeLevel::Error => theme.error,
        };
        status_lines.push(Line::from(Span::styled(notice.text.clone(), style)));
    }
    let status = Paragraph::new(status_lines)
        .block(
            Block::bordered()
                .border_style(theme.border)
                .padding(left_padded())
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    draw_table(frame, app, display, &theme, chunks[2]);

    if app.info_window {
        draw_info(frame, app, &theme, chunks[2]);
    }
    if app.help_window {
        draw_help(frame, &theme, chunks[2]);
    }

    // Footer doubles as the prompt line.
    let footer = match &app.prompt {
        Some(prompt) => Paragraph::new(format!("{}_", prompt.input)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.header)
                .title(format!(" {} (enter accepts, esc cancels) ", prompt.kind.label()))
                .padding(left_padded()),
        ),
        None => Paragraph::new(controls_text(FOOTER_KEYS)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" controls ")
                .padding(left_padded()),
        ),
    };
    frame.render_widget(footer, chunks[3]);
}

fn draw_table<E: AudioEngine>(
    frame: &mut Frame,
    app: &App<E>,
    display: &[usize],
    theme: &Theme,
    area: Rect,
) {
    let header_cells = app.columns.iter().map(|&col| {
        let mut label = col.label().to_string();
        if let Some(order) = app.sort.filter(|o| o.column == col) {
            label.push_str(if order.descending { " ▼" } else { " ▲" });
        }
        Cell::from(label)
    });
    let header = Row::new(header_cells).style(theme.header);

    let current = app.current_index();
    let rows = display.iter().filter_map(|&i| {
        let song = app.library.get(i).ok()?;
        let cells = app.columns.iter().map(|&col| match col {
            SongColumn::Title => Cell::from(song.display_title()),
            other => Cell::from(song.field(other)),
        });
        let row = Row::new(cells);
        Some(if current == Some(i) {
            row.style(theme.now_playing)
        } else {
            row
        })
    });

    let widths: Vec<Constraint> = app.columns.iter().map(|&c| column_width(c)).collect();
    let title = if app.library.is_empty() {
        " library (press a or drop files here) ".to_string()
    } else {
        format!(" library ({}) ", app.library.len())
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(title),
        )
        .row_highlight_style(theme.selected)
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !display.is_empty() {
        state.select(display.iter().position(|&i| i == app.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Overlay with the selected song's tags, kept inside the table area.
fn draw_info<E: AudioEngine>(frame: &mut Frame, app: &App<E>, theme: &Theme, area: Rect) {
    let popup_area = centered_rect_sized(72, 11, area);
    frame.render_widget(Clear, popup_area);

    let text = match app.selected_song() {
        Some(song) => {
            let or_dash = |s: &str| {
                if s.trim().is_empty() {
                    "-".to_string()
                } else {
                    s.to_string()
                }
            };
            [
                format!("Title: {}", song.display_title()),
                format!("Artist: {}", or_dash(song.artist())),
                format!("Album: {}", or_dash(song.album())),
                format!("Year: {}", or_dash(song.year())),
                format!("Genre: {}", or_dash(song.genre())),
                format!("Comment: {}", or_dash(song.comment())),
                format!(
                    "Duration: {}",
                    song.duration().map_or_else(|| "-".to_string(), format_mmss)
                ),
                format!("Path: {}", song.field(SongColumn::Path)),
            ]
            .join("\n")
        }
        None => "No song selected".to_string(),
    };
    let info = Paragraph::new(text)
        .style(theme.base)
        .block(
            Block::default()
                .padding(left_padded())
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" song info (K closes) "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(info, popup_area);
}

fn draw_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect_sized(48, CONTROLS.len() as u16 + 2, area);
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = CONTROLS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:>8}  "), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*desc),
            ])
        })
        .collect();
    let help = Paragraph::new(lines).style(theme.base).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title(" help (? closes) "),
    );
    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_lists_known_keys_in_order() {
        assert_eq!(
            controls_text(&["space/p", "nope", "q"]),
            "[space/p] play/pause | [q] quit"
        );
    }

    #[test]
    fn mmss_formats_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(245)), "04:05");
    }

    #[test]
    fn popup_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 20, 8);
        let popup = centered_rect_sized(72, 11, area);
        assert!(popup.width <= area.width && popup.height <= area.height);
        assert_eq!(popup.x, 1);
    }
}
