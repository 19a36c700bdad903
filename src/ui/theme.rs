use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;

/// Colours for one named theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base: Style,
    pub border: Style,
    pub header: Style,
    pub selected: Style,
    pub now_playing: Style,
    pub error: Style,
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self {
                base: Style::default(),
                border: Style::default().fg(Color::Gray),
                header: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                now_playing: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
            },
            ThemeName::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                border: Style::default().fg(Color::DarkGray).bg(Color::White),
                header: Style::default()
                    .fg(Color::Blue)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().fg(Color::White).bg(Color::Blue),
                now_playing: Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red).bg(Color::White),
            },
            ThemeName::Ocean => Self {
                base: Style::default().fg(Color::Cyan),
                border: Style::default().fg(Color::Blue),
                header: Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().fg(Color::Black).bg(Color::Cyan),
                now_playing: Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::LightRed),
            },
            ThemeName::Mono => Self {
                base: Style::default(),
                border: Style::default(),
                header: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                now_playing: Style::default().add_modifier(Modifier::UNDERLINED),
                error: Style::default().add_modifier(Modifier::BOLD),
            },
        }
    }
}
