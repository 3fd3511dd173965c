//! Single-column layout: header, chat, input bar (with Send button), status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_CHAT_LINES, SEND_LABEL, STATUS_HEIGHT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Rect,
    pub chat: Rect,
    pub input: Rect,
    /// Clickable; lives on the text row of `input`.
    pub send_button: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_CHAT_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let chat = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    let input = chunks[2];
    let label_width = (SEND_LABEL.chars().count() as u16).min(input.width);
    let send_button = Rect {
        x: input.right().saturating_sub(label_width + MARGIN_X),
        // Row below the input bar's top border.
        y: input.y + input.height.saturating_sub(1),
        width: label_width,
        height: input.height.min(1),
    };
    LayoutRegions {
        header: chunks[0],
        chat,
        input,
        send_button,
        status: chunks[3],
    }
}
