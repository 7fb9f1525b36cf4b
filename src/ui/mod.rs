mod display;
mod help;
mod history;
mod i18n;
mod keypad;
pub mod layout;
mod settings;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Palette;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.config.settings.theme);
    let app_layout = layout::compute_layout(area);

    frame.render_widget(Block::default().style(theme::Theme::surface()), area);

    display::render(frame, app_layout.display, state, &palette);
    keypad::render(frame, app_layout.keypad, state, &palette);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays, lowest first
    history::render(frame, state, &palette);
    settings::render(frame, state, &palette);
    help::render(frame, state, &palette);
}

/// Centred popup taking a percentage of the screen.
fn popup_area(area: Rect, percent_w: u16, percent_h: u16) -> Rect {
    let w = ((u32::from(area.width) * u32::from(percent_w) / 100) as u16)
        .max(20)
        .min(area.width);
    let h = ((u32::from(area.height) * u32::from(percent_h) / 100) as u16)
        .max(5)
        .min(area.height);
    popup_fixed(area, w, h)
}

/// Centred popup of a fixed size, clamped to the screen.
fn popup_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ThemeKind};
    use crate::engine::{Button, Operator};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_popup_is_clamped_and_centred() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = popup_fixed(area, 40, 4);
        assert_eq!(popup, Rect::new(0, 3, 30, 4));
    }

    #[test]
    fn test_render_shows_display_and_keys() {
        let mut config = AppConfig::default();
        config.settings.theme = ThemeKind::Miku;
        let mut state = AppState::new(config);
        for button in [Button::Digit(1), Button::Digit(2), Button::Digit(3), Button::Digit(4)] {
            state.apply(button);
        }
        state.apply(Button::MemoryAdd);

        let mut terminal = Terminal::new(TestBackend::new(60, 32)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("1,234"));
        assert!(text.contains("TAX+"));
        assert!(text.contains(" M"));
    }

    #[test]
    fn test_render_overlays_on_small_terminal() {
        let mut state = AppState::new(AppConfig::default());
        state.history_view.visible = true;
        state.settings_menu.open();
        state.help_visible = true;
        state.tax_dialog.visible = true;
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
    }

    fn display_row(text: &str) -> Option<&str> {
        text.lines().find(|row| row.contains(",000,000"))
    }

    #[test]
    fn test_render_marks_display_overflow() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..10 {
            state.apply(Button::Digit(9));
        }
        for _ in 0..6 {
            state.apply(Button::Operator(Operator::Multiply));
            for _ in 0..10 {
                state.apply(Button::Digit(9));
            }
        }
        state.apply(Button::Equals);
        assert!(state.display.starts_with("9,999,999,99"));

        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = screen_text(&terminal);
        let row = display_row(&text).unwrap();
        assert!(row.contains('…'));
        assert!(!row.contains(state.display.as_str()));
    }

    #[test]
    fn test_history_overlay_lists_newest_first() {
        let mut state = AppState::new(AppConfig::default());
        for digit in [1u8, 2] {
            state.apply(Button::Digit(digit));
            state.apply(Button::Operator(Operator::Add));
            state.apply(Button::Digit(digit));
            state.apply(Button::Equals);
        }
        state.history_view.visible = true;

        let mut terminal = Terminal::new(TestBackend::new(60, 32)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = screen_text(&terminal);
        let newest = text.find("2 + 2 = 4").unwrap();
        let oldest = text.find("1 + 1 = 2").unwrap();
        assert!(newest < oldest);
    }
}
