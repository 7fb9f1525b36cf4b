use crate::config::ThemeKind;
use crate::engine::Button;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colours derived from the selected skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub dark: Color,
    pub accent: Color,
    pub text: Color,
}

impl Palette {
    pub fn for_theme(kind: ThemeKind) -> Self {
        let (primary, dark) = match kind {
            ThemeKind::Indigo => (0x3F51B5, 0x1A237E),
            ThemeKind::Pink => (0xE91E63, 0x880E4F),
            ThemeKind::Teal => (0x009688, 0x004D40),
            ThemeKind::Orange => (0xFF9800, 0xE65100),
            ThemeKind::Brown => (0x795548, 0x3E2723),
            ThemeKind::Green => (0x4CAF50, 0x1B5E20),
            ThemeKind::Grey => (0x607D8B, 0x212121),
            ThemeKind::Miku => (0x39C5BB, 0x137A7F),
            ThemeKind::Macaron => (0xFF9CB3, 0x80C4FF),
            ThemeKind::CottonCandy => (0xE0BBE4, 0xFFDFD3),
            ThemeKind::Unicorn => (0xA8E6CF, 0xDCD3FF),
            ThemeKind::Sherbet => (0xFFF6B2, 0xFFD8A8),
            ThemeKind::PeachMilk => (0xFFDAB9, 0xFFE4E1),
            ThemeKind::Pistachio => (0xE2F0CB, 0xB5EAD7),
            ThemeKind::Lavender => (0xE6E6FA, 0xD8BFD8),
        };
        // Pastel skins are light, so they get dark text and a softer accent
        let (accent, text) = if kind.is_pastel() {
            (rgb(0xFFA0A0), rgb(0x37474F))
        } else {
            (rgb(0xE91E63), Color::White)
        };
        Self {
            primary: rgb(primary),
            dark: rgb(dark),
            accent,
            text,
        }
    }

    pub fn display(&self) -> Style {
        Style::default().fg(self.text).bg(self.dark)
    }

    pub fn display_text(&self) -> Style {
        self.display().add_modifier(Modifier::BOLD)
    }

    pub fn key(&self, button: Button, flashed: bool) -> Style {
        let bg = if button.is_accent() {
            self.accent
        } else {
            match button {
                Button::Digit(_) | Button::DoubleZero | Button::Decimal => self.primary,
                _ => self.dark,
            }
        };
        let style = Style::default()
            .fg(self.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        if flashed {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn key_border(&self, button: Button) -> Style {
        if button.is_accent() {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.primary)
        }
    }

    pub fn key_border_type(round: bool) -> BorderType {
        if round {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn overlay_border(&self) -> Style {
        Style::default().fg(self.primary)
    }
}

/// Colours shared by every skin.
pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(30, 30, 36);
    pub const TEXT_PRIMARY: Color = Color::Rgb(224, 224, 224);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 150, 160);
    pub const KEY_HINT: Color = Color::Rgb(255, 193, 7);

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn surface() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::KEY_HINT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn memory_indicator(palette: &Palette) -> Style {
        palette.display().fg(palette.accent).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
