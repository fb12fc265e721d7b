//! Card color palettes.

/// Visual theme of a card. Unrecognized request values fall back to dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Named colors of one theme. Read-only lookup tables; nothing mutates
/// these after initialization.
#[derive(Debug)]
pub struct ThemeTokens {
    pub base: &'static str,
    pub grain: &'static str,
    pub card: &'static str,
    pub card_accent: &'static str,
    pub border: &'static str,
    pub rail: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub link: &'static str,
}

static DARK: ThemeTokens = ThemeTokens {
    base: "#0b0b0b",
    grain: "#1b1b1b",
    card: "#101010",
    card_accent: "#181818",
    border: "#2f2f2f",
    rail: "#ffffff",
    accent: "#00ab6c",
    accent_soft: "#4fd08a",
    text: "#ffffff",
    muted: "#b3b3b3",
    link: "#ffffff",
};

static LIGHT: ThemeTokens = ThemeTokens {
    base: "#f7f7f5",
    grain: "#d7d7d2",
    card: "#ffffff",
    card_accent: "#f2f2ee",
    border: "#d8d8d2",
    rail: "#111111",
    accent: "#00ab6c",
    accent_soft: "#4fd08a",
    text: "#111111",
    muted: "#5e5e5e",
    link: "#111111",
};
