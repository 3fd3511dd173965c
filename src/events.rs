//! Keybindings: Enter send, Esc/Ctrl+C quit, Ctrl+L clear, Ctrl+T theme, Up/Down history,
//! PgUp/PgDn scroll. Mouse: wheel scrolls, click on Send submits.

use crate::actions::Action;
use crate::ui::LayoutRegions;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::ClearInput),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Home => Some(Action::ChatScrollTop),
            KeyCode::End => Some(Action::ChatScrollBottom),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Up => Some(Action::HistoryUp),
        KeyCode::Down => Some(Action::HistoryDown),
        KeyCode::PageUp => Some(Action::ChatScrollPageUp),
        KeyCode::PageDown => Some(Action::ChatScrollPageDown),
        // Any other character goes to input (allow Alt for accented chars; only block Cmd).
        KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) => Some(Action::Char(c)),
        _ => None,
    }
}

pub fn mouse_to_action(event: &MouseEvent, regions: &LayoutRegions) -> Option<Action> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(Action::ChatScrollUp),
        MouseEventKind::ScrollDown => Some(Action::ChatScrollDown),
        MouseEventKind::Down(MouseButton::Left)
            if regions
                .send_button
                .contains(Position::new(event.column, event.row)) =>
        {
            Some(Action::Submit)
        }
        _ => None,
    }
}
