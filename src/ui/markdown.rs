//! Markdown to ratatui Lines for assistant replies: headings, code, emphasis, lists, rules.

use pulldown_cmark::{Event, Options, Parser, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::Palette;

/// Convert markdown string to a list of Lines (owned, no lifetime).
pub fn to_lines(md: &str, palette: &Palette) -> Vec<Line<'static>> {
    let body = Style::default().fg(palette.assistant_text);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut in_code_block = false;
    let mut in_heading = false;
    let mut strong = false;
    let mut emphasis = false;
    // One entry per open list: the next number for ordered lists, `None` for bullets.
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in Parser::new_ext(md, Options::all()) {
        match event {
            // ── Code blocks ──────────────────────────────────────
            Event::Start(Tag::CodeBlock(_)) => {
                flush_spans(&mut current, &mut lines);
                in_code_block = true;
            }
            Event::End(Tag::CodeBlock(_)) => {
                in_code_block = false;
                lines.push(Line::from(""));
            }

            // ── Headings ─────────────────────────────────────────
            Event::Start(Tag::Heading(..)) => {
                flush_spans(&mut current, &mut lines);
                in_heading = true;
            }
            Event::End(Tag::Heading(..)) => {
                in_heading = false;
                flush_spans(&mut current, &mut lines);
            }

            // ── Lists ────────────────────────────────────────────
            Event::Start(Tag::List(start)) => {
                flush_spans(&mut current, &mut lines);
                lists.push(start);
            }
            Event::End(Tag::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                let depth = lists.len();
                let indent = "  ".repeat(depth.saturating_sub(1));
                let bullet = match lists.last_mut() {
                    Some(Some(idx)) => {
                        let n = *idx;
                        *idx += 1;
                        format!("{indent}{n}. ")
                    }
                    _ if depth <= 1 => format!("{indent}• "),
                    _ => format!("{indent}◦ "),
                };
                current.push(Span::styled(bullet, Style::default().fg(palette.accent)));
            }
            Event::End(Tag::Item) => {
                flush_spans(&mut current, &mut lines);
            }

            // ── Text ─────────────────────────────────────────────
            Event::Text(t) => {
                if in_code_block {
                    let code = Style::default().fg(palette.assistant_text).bg(palette.code_bg);
                    for line in t.lines() {
                        lines.push(Line::from(vec![
                            Span::styled(" ┃ ", Style::default().fg(palette.border).bg(palette.code_bg)),
                            Span::styled(line.to_string(), code),
                        ]));
                    }
                } else {
                    let mut style = if in_heading {
                        Style::default().fg(palette.heading).add_modifier(Modifier::BOLD)
                    } else {
                        body
                    };
                    if strong {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if emphasis {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    current.push(Span::styled(t.to_string(), style));
                }
            }

            // ── Inline code ──────────────────────────────────────
            Event::Code(t) => {
                current.push(Span::styled(
                    format!(" {t} "),
                    Style::default().fg(palette.accent).bg(palette.code_bg),
                ));
            }

            Event::Start(Tag::Strong) => strong = true,
            Event::End(Tag::Strong) => strong = false,
            Event::Start(Tag::Emphasis) => emphasis = true,
            Event::End(Tag::Emphasis) => emphasis = false,

            // ── Line breaks ──────────────────────────────────────
            Event::SoftBreak | Event::HardBreak | Event::End(Tag::Paragraph) => {
                flush_spans(&mut current, &mut lines);
            }

            Event::Rule => {
                flush_spans(&mut current, &mut lines);
                lines.push(Line::from(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(palette.border),
                )));
            }

            _ => {}
        }
    }
    flush_spans(&mut current, &mut lines);
    // Trailing spacer from a closing code block.
    while lines.len() > 1 && lines.last().is_some_and(|l| l.width() == 0) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn flush_spans(current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}
