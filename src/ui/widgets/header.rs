//! Header: chatbot title on the left, endpoint host on the right.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;

const TITLE: &str = " YouMatter Chatbot";

pub fn render(f: &mut Frame, area: Rect, endpoint_label: &str, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.elevated));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let right = format!("{endpoint_label} ");
    let pad = (inner.width as usize).saturating_sub(TITLE.chars().count() + right.chars().count());
    let line = Line::from(vec![
        Span::styled(
            TITLE,
            Style::default().fg(palette.accent_soft).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(palette.muted)),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}
