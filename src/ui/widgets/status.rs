//! Status bar: pending replies + shortcuts.

use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::Palette;

const HINTS: &str = " ↑↓ history  PgUp/PgDn scroll  Ctrl+T theme  Enter send  Esc quit ";

pub fn render(f: &mut Frame, area: Rect, pending: usize, spinner_char: char, palette: &Palette) {
    let left = match pending {
        0 => " Ready".to_string(),
        1 => format!(" {spinner_char} Waiting for a reply…"),
        n => format!(" {spinner_char} Waiting for {n} replies…"),
    };
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + HINTS.chars().count());
    let line = format!("{left}{}{HINTS}", " ".repeat(pad));
    let span = Span::styled(line, Style::default().fg(palette.muted).bg(palette.elevated));
    f.render_widget(Paragraph::new(span), area);
}
