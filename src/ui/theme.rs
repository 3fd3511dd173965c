//! Theme: dark and light palettes sharing one set of roles.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Palette {
    /// Chat canvas.
    pub bg: Color,
    /// Header, input bar, status.
    pub elevated: Color,
    pub border: Color,
    /// Prompt, Send button, "You" label.
    pub accent: Color,
    /// Assistant label, title.
    pub accent_soft: Color,
    pub text: Color,
    pub text_dim: Color,
    /// Hints and placeholders.
    pub muted: Color,
    pub code_bg: Color,
    pub heading: Color,
    pub user_bg: Color,
    pub user_text: Color,
    pub assistant_bg: Color,
    pub assistant_text: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x23, 0x27, 0x2f),
    elevated: Color::Rgb(0x18, 0x18, 0x1b),
    border: Color::Rgb(0x37, 0x41, 0x51),
    accent: Color::Rgb(0x4f, 0x8c, 0xff),
    accent_soft: Color::Rgb(0xa7, 0x8b, 0xfa),
    text: Color::Rgb(0xed, 0xe9, 0xfe),
    text_dim: Color::Rgb(0xbc, 0xc5, 0xd0),
    muted: Color::Rgb(0x9c, 0xa3, 0xaf),
    code_bg: Color::Rgb(0x1e, 0x24, 0x2e),
    heading: Color::Rgb(0xc4, 0xb5, 0xfd),
    user_bg: Color::Rgb(0x18, 0x18, 0x1b),
    user_text: Color::Rgb(0xed, 0xe9, 0xfe),
    assistant_bg: Color::Rgb(0x35, 0x39, 0x45),
    assistant_text: Color::Rgb(0xed, 0xe9, 0xfe),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xed, 0xe9, 0xfe),
    elevated: Color::Rgb(0xf5, 0xf7, 0xfa),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    accent: Color::Rgb(0x7c, 0x3a, 0xed),
    accent_soft: Color::Rgb(0x93, 0x33, 0xea),
    text: Color::Rgb(0x23, 0x27, 0x2f),
    text_dim: Color::Rgb(0x4b, 0x55, 0x63),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    code_bg: Color::Rgb(0xe0, 0xe7, 0xff),
    heading: Color::Rgb(0x6d, 0x28, 0xd9),
    user_bg: Color::Rgb(0xf5, 0xf7, 0xfa),
    user_text: Color::Rgb(0x23, 0x27, 0x2f),
    assistant_bg: Color::Rgb(0xe0, 0xe7, 0xff),
    assistant_text: Color::Rgb(0x23, 0x27, 0x2f),
};

pub const HEADER_HEIGHT: u16 = 2;
/// Top border plus one text row.
pub const INPUT_HEIGHT: u16 = 2;
pub const STATUS_HEIGHT: u16 = 1;
pub const MIN_CHAT_LINES: u16 = 3;
/// Blank line between messages.
pub const MESSAGE_GAP: usize = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
pub const SEND_LABEL: &str = "[ Send ]";
pub const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
