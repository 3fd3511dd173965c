//! TUI widgets: header, chat log, input bar, status.

mod chat;
mod header;
mod input;
mod status;

pub use chat::render as render_chat;
pub use header::render as render_header;
pub use input::render as render_input;
pub use status::render as render_status;
