//! App state: conversation log, draft input, history, scroll follow.

/// Who wrote a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// One entry in the conversation. Fields are private so a pushed turn cannot change.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    id: u64,
    origin: Origin,
    text: String,
}

impl Turn {
    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn origin(&self) -> Origin {
        self.origin
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered, append-only list of turns.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Appends a turn and returns its id (its position in the log).
    pub fn push(&mut self, origin: Origin, text: impl Into<String>) -> u64 {
        let id = self.turns.len() as u64;
        self.turns.push(Turn {
            id,
            origin,
            text: text.into(),
        });
        id
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// The unsent input line. `cursor` is a byte offset that always sits on a char boundary.
#[derive(Clone, Debug, Default)]
pub struct Draft {
    text: String,
    cursor: usize,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replaces the whole draft, cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Returns the draft and leaves it empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Previously submitted drafts, walked with Up/Down.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// `entries.len()` means "past the newest", i.e. the draft being typed.
    index: usize,
    /// Draft that was in progress when browsing started.
    stash: Option<String>,
}

impl History {
    pub fn record(&mut self, text: &str) {
        if self.entries.last().map(String::as_str) != Some(text) {
            self.entries.push(text.to_string());
        }
        self.index = self.entries.len();
        self.stash = None;
    }

    /// Steps back; `draft` is kept aside when leaving the in-progress line.
    pub fn previous(&mut self, draft: &str) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        if self.index == self.entries.len() {
            self.stash = Some(draft.to_string());
        }
        self.index -= 1;
        self.entries.get(self.index).map(String::as_str)
    }

    /// Stepping past the newest entry gives back the stashed draft.
    pub fn next(&mut self) -> Option<&str> {
        if self.index >= self.entries.len() {
            return None;
        }
        self.index += 1;
        match self.entries.get(self.index) {
            Some(entry) => Some(entry.as_str()),
            None => Some(self.stash.as_deref().unwrap_or("")),
        }
    }
}

/// Chat viewport position. While `follow` is set the view is pinned to the newest turn.
#[derive(Clone, Debug)]
pub struct ScrollState {
    offset: usize,
    follow: bool,
    max_offset: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: 0,
        }
    }
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Offset to draw with, given the current content overflow.
    pub fn resolve(&self, max_offset: usize) -> usize {
        if self.follow {
            max_offset
        } else {
            self.offset.min(max_offset)
        }
    }

    /// Records the overflow measured by the last draw.
    pub fn sync(&mut self, max_offset: usize) {
        self.max_offset = max_offset;
        self.offset = self.resolve(max_offset);
    }

    pub fn up(&mut self, rows: usize) {
        if self.follow {
            self.offset = self.max_offset;
            self.follow = false;
        }
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows);
        if self.offset >= self.max_offset {
            self.follow_bottom();
        }
    }

    pub fn top(&mut self) {
        self.follow = false;
        self.offset = 0;
    }

    pub fn follow_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset;
    }
}

/// Global app state (single chat panel).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub log: ConversationLog,
    pub draft: Draft,
    pub history: History,
    pub scroll: ScrollState,
    /// Calls sent but not yet answered.
    pub in_flight: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_assigns_positions_in_order() {
        let mut log = ConversationLog::default();
        assert!(log.is_empty());
        assert_eq!(log.push(Origin::User, "Hello"), 0);
        assert_eq!(log.push(Origin::Assistant, "Hi there"), 1);

        let turns = log.turns();
        assert_eq!(log.len(), 2);
        assert_eq!(turns[0].origin(), Origin::User);
        assert_eq!(turns[0].text(), "Hello");
        assert_eq!(turns[1].origin(), Origin::Assistant);
        assert_eq!(turns[1].id(), 1);
    }

    #[test]
    fn draft_edits_at_cursor() {
        let mut draft = Draft::default();
        for c in "Hllo".chars() {
            draft.insert_char(c);
        }
        draft.move_home();
        draft.move_right();
        draft.insert_char('e');
        assert_eq!(draft.text(), "Hello");
        assert_eq!(draft.cursor(), 2);

        draft.move_end();
        draft.backspace();
        assert_eq!(draft.text(), "Hell");

        draft.move_home();
        draft.delete_forward();
        assert_eq!(draft.text(), "ell");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn draft_respects_multibyte_chars() {
        let mut draft = Draft::default();
        draft.insert_char('é');
        draft.insert_char('ü');
        assert_eq!(draft.cursor(), 4);

        draft.move_left();
        assert_eq!(draft.cursor(), 2);
        draft.backspace();
        assert_eq!(draft.text(), "ü");
        assert_eq!(draft.cursor(), 0);

        // No-ops at the edges.
        draft.backspace();
        draft.move_left();
        draft.move_end();
        draft.delete_forward();
        draft.move_right();
        assert_eq!(draft.text(), "ü");
    }

    #[test]
    fn draft_blank_and_take() {
        let mut draft = Draft::default();
        assert!(draft.is_blank());
        draft.set("   ");
        assert!(draft.is_blank());
        draft.set("Hello");
        assert!(!draft.is_blank());

        assert_eq!(draft.take(), "Hello");
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn history_walks_back_and_forth() {
        let mut history = History::default();
        assert_eq!(history.previous(""), None);

        history.record("one");
        history.record("two");
        history.record("two");

        assert_eq!(history.previous(""), Some("two"));
        assert_eq!(history.previous(""), Some("one"));
        assert_eq!(history.previous(""), None);
        assert_eq!(history.next(), Some("two"));
        assert_eq!(history.next(), Some(""));
        assert_eq!(history.next(), None);
    }

    #[test]
    fn history_restores_half_typed_draft() {
        let mut history = History::default();
        history.record("sent earlier");

        assert_eq!(history.previous("half typ"), Some("sent earlier"));
        assert_eq!(history.previous("sent earlier"), None);
        assert_eq!(history.next(), Some("half typ"));

        // A new submission forgets the stash.
        history.record("half typed");
        assert_eq!(history.previous(""), Some("half typed"));
        assert_eq!(history.next(), Some(""));
    }

    #[test]
    fn scroll_follows_until_user_scrolls_up() {
        let mut scroll = ScrollState::default();
        scroll.sync(30);
        assert_eq!(scroll.resolve(30), 30);

        scroll.up(10);
        assert!(!scroll.is_following());
        assert_eq!(scroll.resolve(30), 20);

        // Content grew: a detached view stays put.
        scroll.sync(40);
        assert_eq!(scroll.resolve(40), 20);

        scroll.down(25);
        assert!(scroll.is_following());
        assert_eq!(scroll.resolve(50), 50);
    }

    #[test]
    fn scroll_top_detaches() {
        let mut scroll = ScrollState::default();
        scroll.sync(12);
        scroll.top();
        assert_eq!(scroll.resolve(12), 0);
        scroll.follow_bottom();
        assert_eq!(scroll.resolve(12), 12);
    }
}
