//! Terminal events to `Intent`s. No side effects here; the event loop
//! dispatches whatever comes out.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Intent, PromptKind, parse_dropped_paths};
use crate::config::SongColumn;

/// Two-key prefixes (`gg`, `c<digit>`) waiting for their second key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyState {
    pending_g: bool,
    pending_column: bool,
}

/// Map one terminal event. `prompt_open` routes typing into the path prompt.
pub fn map_event(event: &Event, prompt_open: bool, state: &mut KeyState) -> Option<Intent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if prompt_open {
                *state = KeyState::default();
                map_prompt_key(key)
            } else {
                map_key(key, state)
            }
        }
        // Files dropped onto the terminal arrive as a bracketed paste.
        Event::Paste(text) => {
            if prompt_open {
                return Some(Intent::PromptInput(text.replace(['\r', '\n'], " ")));
            }
            let paths = parse_dropped_paths(text);
            (!paths.is_empty()).then_some(Intent::AddPaths(paths))
        }
        _ => None,
    }
}

fn map_prompt_key(key: &KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Esc => Some(Intent::PromptCancel),
        KeyCode::Enter => Some(Intent::PromptSubmit),
        KeyCode::Backspace => Some(Intent::PromptBackspace),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Intent::PromptCancel)
        }
        KeyCode::Char(c) if !c.is_control() => Some(Intent::PromptInput(c.to_string())),
        _ => None,
    }
}

fn map_key(key: &KeyEvent, state: &mut KeyState) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        *state = KeyState::default();
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            KeyCode::Char('n') => Some(Intent::SelectNext),
            KeyCode::Char('p') => Some(Intent::SelectPrev),
            _ => None,
        };
    }

    if state.pending_column {
        state.pending_column = false;
        return column_for(key.code).map(Intent::ToggleColumn);
    }
    if let KeyCode::Char('g') = key.code {
        if state.pending_g {
            state.pending_g = false;
            return Some(Intent::SelectFirst);
        }
        state.pending_g = true;
        return None;
    }
    state.pending_g = false;

    let intent = match key.code {
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Intent::PlayPause,
        KeyCode::Enter => Intent::PlaySelected,
        KeyCode::Char('s') => Intent::Stop,
        KeyCode::Char('l') | KeyCode::Right => Intent::Next,
        KeyCode::Char('h') | KeyCode::Left => Intent::Prev,
        KeyCode::Char('+') | KeyCode::Char('=') => Intent::VolumeUp,
        KeyCode::Char('-') => Intent::VolumeDown,

        KeyCode::Char('j') | KeyCode::Down => Intent::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Intent::SelectPrev,
        KeyCode::Home => Intent::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Intent::SelectLast,

        KeyCode::Char('a') => Intent::BeginPrompt(PromptKind::AddPath),
        KeyCode::Char('o') => Intent::BeginPrompt(PromptKind::OpenPath),
        KeyCode::Char('d') | KeyCode::Delete => Intent::DeleteSelected,

        KeyCode::Char('c') => {
            state.pending_column = true;
            return None;
        }
        KeyCode::Char('t') => Intent::CycleTheme,
        KeyCode::Char('K') | KeyCode::Char('i') => Intent::ToggleInfo,
        KeyCode::Char('?') => Intent::ToggleHelp,
        KeyCode::Esc => Intent::DismissNotice,
        code => return column_for(code).map(Intent::SortBy),
    };
    Some(intent)
}

/// `1`..`7` name the columns in their canonical order.
fn column_for(code: KeyCode) -> Option<SongColumn> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    let n = c.to_digit(10)? as usize;
    SongColumn::ALL.get(n.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn map(ev: Event) -> Option<Intent> {
        map_event(&ev, false, &mut KeyState::default())
    }

    #[test]
    fn transport_keys() {
        assert_eq!(map(press(KeyCode::Char(' '))), Some(Intent::PlayPause));
        assert_eq!(map(press(KeyCode::Enter)), Some(Intent::PlaySelected));
        assert_eq!(map(press(KeyCode::Char('s'))), Some(Intent::Stop));
        assert_eq!(map(press(KeyCode::Char('l'))), Some(Intent::Next));
        assert_eq!(map(press(KeyCode::Left)), Some(Intent::Prev));
        assert_eq!(map(press(KeyCode::Char('-'))), Some(Intent::VolumeDown));
        assert_eq!(map(press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(map(ctrl('c')), Some(Intent::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map(release), None);
    }

    #[test]
    fn gg_needs_two_presses_and_resets_on_other_keys() {
        let mut state = KeyState::default();
        let g = press(KeyCode::Char('g'));

        assert_eq!(map_event(&g, false, &mut state), None);
        assert_eq!(map_event(&g, false, &mut state), Some(Intent::SelectFirst));

        assert_eq!(map_event(&g, false, &mut state), None);
        assert_eq!(
            map_event(&press(KeyCode::Char('j')), false, &mut state),
            Some(Intent::SelectNext)
        );
        assert_eq!(map_event(&g, false, &mut state), None);
    }

    #[test]
    fn digits_sort_and_c_prefix_toggles_columns() {
        assert_eq!(
            map(press(KeyCode::Char('2'))),
            Some(Intent::SortBy(SongColumn::Artist))
        );
        assert_eq!(map(press(KeyCode::Char('0'))), None);
        assert_eq!(map(press(KeyCode::Char('8'))), None);

        let mut state = KeyState::default();
        assert_eq!(map_event(&press(KeyCode::Char('c')), false, &mut state), None);
        assert_eq!(
            map_event(&press(KeyCode::Char('7')), false, &mut state),
            Some(Intent::ToggleColumn(SongColumn::Path))
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('7')), false, &mut state),
            Some(Intent::SortBy(SongColumn::Path))
        );
    }

    #[test]
    fn prompt_captures_typing() {
        let mut state = KeyState::default();
        assert_eq!(
            map_event(&press(KeyCode::Char('q')), true, &mut state),
            Some(Intent::PromptInput("q".into()))
        );
        assert_eq!(
            map_event(&press(KeyCode::Enter), true, &mut state),
            Some(Intent::PromptSubmit)
        );
        assert_eq!(
            map_event(&press(KeyCode::Esc), true, &mut state),
            Some(Intent::PromptCancel)
        );
        assert_eq!(
            map_event(&Event::Paste("/a b\n".into()), true, &mut state),
            Some(Intent::PromptInput("/a b ".into()))
        );
    }

    #[test]
    fn paste_outside_prompt_adds_dropped_files() {
        assert_eq!(
            map(Event::Paste("'/music/a song.mp3' /music/b.mp3".into())),
            Some(Intent::AddPaths(vec![
                PathBuf::from("/music/a song.mp3"),
                PathBuf::from("/music/b.mp3"),
            ]))
        );
        assert_eq!(map(Event::Paste("   ".into())), None);
    }
}
