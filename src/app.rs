//! Global state container, action dispatch, and chat call bookkeeping.

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::actions::Action;
use crate::backend::ChatBackend;
use crate::error::TransportError;
use crate::services::turn_text;
use crate::state::{AppState, Origin};
use crate::ui::ThemeMode;

const PAGE_ROWS: usize = 10;
const WHEEL_ROWS: usize = 3;

/// Outcome of one chat call, tagged with the submission that started it.
#[derive(Debug)]
pub struct Completion {
    pub submission: u64,
    pub outcome: Result<Value, TransportError>,
}

pub struct App {
    pub state: AppState,
    backend: Arc<dyn ChatBackend>,
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    next_submission: u64,
    pub theme: ThemeMode,
    /// Shown in the header.
    pub endpoint_label: String,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            backend,
            runtime,
            completions_tx,
            completions_rx,
            next_submission: 0,
            theme: ThemeMode::default(),
            endpoint_label: String::new(),
            should_quit: false,
            tick: 0,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => self.state.draft.insert_char(c),
            Action::Backspace => self.state.draft.backspace(),
            Action::Delete => self.state.draft.delete_forward(),
            Action::CursorLeft => self.state.draft.move_left(),
            Action::CursorRight => self.state.draft.move_right(),
            Action::CursorHome => self.state.draft.move_home(),
            Action::CursorEnd => self.state.draft.move_end(),
            Action::ClearInput => self.state.draft.clear(),
            Action::Submit => self.submit(),

            Action::ChatScrollUp => self.state.scroll.up(WHEEL_ROWS),
            Action::ChatScrollDown => self.state.scroll.down(WHEEL_ROWS),
            Action::ChatScrollPageUp => self.state.scroll.up(PAGE_ROWS),
            Action::ChatScrollPageDown => self.state.scroll.down(PAGE_ROWS),
            Action::ChatScrollTop => self.state.scroll.top(),
            Action::ChatScrollBottom => self.state.scroll.follow_bottom(),

            Action::HistoryUp => {
                if let Some(text) = self.state.history.previous(self.state.draft.text()) {
                    self.state.draft.set(text);
                }
            }
            Action::HistoryDown => {
                if let Some(text) = self.state.history.next() {
                    self.state.draft.set(text);
                }
            }

            Action::ToggleTheme => self.theme = self.theme.toggled(),
        }
    }

    /// Appends the user turn and clears the draft right away, then fires the call.
    fn submit(&mut self) {
        if self.state.draft.is_blank() {
            return;
        }
        let text = self.state.draft.take();
        self.state.history.record(&text);
        self.state.log.push(Origin::User, text.as_str());
        self.state.scroll.follow_bottom();

        let submission = self.next_submission;
        self.next_submission += 1;
        self.state.in_flight += 1;
        info!(submission, chars = text.chars().count(), "sending message");

        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let outcome = backend.send(&text).await;
            // Receiver only goes away when the app is shutting down.
            let _ = tx.send(Completion { submission, outcome });
        });
    }

    /// Appends one assistant turn per finished call, in completion order.
    pub fn poll_results(&mut self) {
        while let Ok(Completion { submission, outcome }) = self.completions_rx.try_recv() {
            match &outcome {
                Ok(_) => debug!(submission, "reply received"),
                Err(e) => warn!(submission, error = %e, "chat call failed"),
            }
            self.state.log.push(Origin::Assistant, turn_text(outcome));
            self.state.in_flight = self.state.in_flight.saturating_sub(1);
            self.state.scroll.follow_bottom();
        }
    }

    /// Feeds back the chat overflow measured by the last draw.
    pub fn sync_scroll(&mut self, max_offset: usize) {
        self.state.scroll.sync(max_offset);
    }
}
