//! Chat log: user turns right-aligned, assistant turns left-aligned with Markdown.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ConversationLog, Origin, ScrollState};
use crate::ui::markdown;
use crate::ui::theme::{Palette, MESSAGE_GAP};

const EMPTY_PLACEHOLDER: &str = "Start the conversation!";
const USER_LABEL: &str = "You";
const ASSISTANT_LABEL: &str = "YouMatter";

/// Draws the log and returns how far it can scroll (rows hidden above the bottom view).
pub fn render(
    f: &mut Frame,
    log: &ConversationLog,
    scroll: &ScrollState,
    area: Rect,
    pending: usize,
    spinner_char: char,
    palette: &Palette,
) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if log.is_empty() && pending == 0 {
        let para = Paragraph::new(Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(palette.muted),
        )))
        .alignment(Alignment::Center);
        // A little below the top, like a hero line.
        let row = Rect {
            y: inner.y + inner.height.min(2),
            height: inner.height.saturating_sub(2).min(1),
            ..inner
        };
        f.render_widget(para, row);
        return 0;
    }

    let para = Paragraph::new(build_lines(log, pending, spinner_char, palette))
        .style(Style::default().fg(palette.text).bg(palette.bg))
        .wrap(Wrap { trim: false });
    // Measured with the same word wrapping the paragraph renders with.
    let max_offset = para
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);
    let offset = scroll.resolve(max_offset);
    f.render_widget(para.scroll((offset.min(u16::MAX as usize) as u16, 0)), inner);
    max_offset
}

fn build_lines(
    log: &ConversationLog,
    pending: usize,
    spinner_char: char,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for turn in log.turns() {
        if !lines.is_empty() {
            push_gap(&mut lines);
        }
        match turn.origin() {
            Origin::User => {
                let style = Style::default().fg(palette.user_text).bg(palette.user_bg);
                lines.push(
                    Line::from(Span::styled(
                        USER_LABEL,
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Right),
                );
                for text in turn.text().lines() {
                    lines.push(
                        Line::from(Span::styled(format!(" {text} "), style)).alignment(Alignment::Right),
                    );
                }
            }
            Origin::Assistant => {
                lines.push(Line::from(Span::styled(
                    ASSISTANT_LABEL,
                    Style::default().fg(palette.accent_soft).add_modifier(Modifier::BOLD),
                )));
                for line in markdown::to_lines(turn.text(), palette) {
                    let mut spans = vec![Span::raw(" ")];
                    spans.extend(line.spans);
                    spans.push(Span::raw(" "));
                    lines.push(Line::from(spans).patch_style(Style::default().bg(palette.assistant_bg)));
                }
            }
        }
    }

    if pending > 0 {
        if !lines.is_empty() {
            push_gap(&mut lines);
        }
        lines.push(Line::from(vec![
            Span::styled(
                ASSISTANT_LABEL,
                Style::default().fg(palette.accent_soft).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {spinner_char} "), Style::default().fg(palette.accent)),
            Span::styled("Thinking…", Style::default().fg(palette.text_dim)),
        ]));
    }
    lines
}

fn push_gap(lines: &mut Vec<Line<'static>>) {
    for _ in 0..MESSAGE_GAP {
        lines.push(Line::from(""));
    }
}
