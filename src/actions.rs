//! User and system actions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,
    /// Enter key and the Send button both land here.
    Submit,

    ChatScrollUp,
    ChatScrollDown,
    ChatScrollPageUp,
    ChatScrollPageDown,
    ChatScrollTop,
    ChatScrollBottom,

    HistoryUp,
    HistoryDown,

    ToggleTheme,
}
