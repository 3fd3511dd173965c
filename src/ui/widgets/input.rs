//! Input bar: prompt, draft with cursor, placeholder, Send button.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::state::Draft;
use crate::ui::theme::{Palette, SEND_LABEL};

const PROMPT: &str = " ▸ ";
const PLACEHOLDER: &str = "Type your message...";

pub fn render(f: &mut Frame, draft: &Draft, area: Rect, send_button: Rect, palette: &Palette) {
    let block = Block::default()
        .style(Style::default().bg(palette.elevated))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = if draft.text().is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(palette.muted))
    } else {
        Span::styled(draft.text(), Style::default().fg(palette.text))
    };
    let prompt_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let text_area = Rect {
        width: send_button.x.saturating_sub(inner.x).saturating_sub(1),
        ..inner
    };

    // Keep the cursor in view when the draft is wider than the bar.
    let prompt_width = PROMPT.chars().count() as u16;
    let before_cursor = draft.text().get(..draft.cursor()).map(|s| s.chars().count()).unwrap_or(0) as u16;
    let visible = text_area.width.saturating_sub(prompt_width + 1);
    let h_scroll = before_cursor.saturating_sub(visible);

    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(PROMPT, prompt_style), text])).scroll((0, h_scroll)),
        text_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            SEND_LABEL,
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        send_button,
    );

    let x = (text_area.x + prompt_width + before_cursor - h_scroll)
        .min(text_area.right().saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
