//! Single-panel render: header, chat, input bar, status.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout::{self, LayoutRegions};
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{render_chat, render_header, render_input, render_status};

/// What the event loop needs to know about the frame it just drew.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInfo {
    pub regions: LayoutRegions,
    pub chat_max_scroll: usize,
}

pub fn render(f: &mut Frame, app: &App, tick: usize) -> FrameInfo {
    let regions = layout::compute(f.area());
    let palette = app.theme.palette();
    let spinner_char = SPINNER[tick % SPINNER.len()];
    let pending = app.state.in_flight;

    render_header(f, regions.header, &app.endpoint_label, palette);
    let chat_max_scroll = render_chat(
        f,
        &app.state.log,
        &app.state.scroll,
        regions.chat,
        pending,
        spinner_char,
        palette,
    );
    render_input(f, &app.state.draft, regions.input, regions.send_button, palette);
    render_status(f, regions.status, pending, spinner_char, palette);

    FrameInfo {
        regions,
        chat_max_scroll,
    }
}
