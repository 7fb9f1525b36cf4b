use crate::app::action::Action;
use crate::config::{AppConfig, Language, ThemeKind};
use crate::engine::{Button, CalculatorEngine};
use bigdecimal::BigDecimal;
use ratatui::layout::Rect;
use tracing::info;

/// Ticks a pressed key stays highlighted.
pub const FLASH_TICKS: u8 = 3;

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[derive(Debug, Default)]
pub struct HistoryView {
    pub visible: bool,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    Main,
    Theme,
    Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Theme,
    Language,
    Shape,
    Vibration,
    TaxRate,
    Help,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Theme,
        MenuItem::Language,
        MenuItem::Shape,
        MenuItem::Vibration,
        MenuItem::TaxRate,
        MenuItem::Help,
    ];
}

#[derive(Debug)]
pub struct SettingsMenu {
    pub visible: bool,
    pub mode: MenuMode,
    pub selected: usize,
}

impl SettingsMenu {
    pub fn new() -> Self {
        Self {
            visible: false,
            mode: MenuMode::Main,
            selected: 0,
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.mode = MenuMode::Main;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.mode = MenuMode::Main;
    }

    pub fn item_count(&self) -> usize {
        match self.mode {
            MenuMode::Main => MenuItem::ALL.len(),
            MenuMode::Theme => ThemeKind::ALL.len(),
            MenuMode::Language => Language::ALL.len(),
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        }
    }
}

#[derive(Debug)]
pub struct TaxDialog {
    pub visible: bool,
    pub input: InputState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFlash {
    pub button: Button,
    pub ticks_left: u8,
}

/// View-state holder: owns the engine and everything the UI renders.
pub struct AppState {
    pub config: AppConfig,
    pub engine: CalculatorEngine,
    pub display: String,
    pub has_memory: bool,
    pub history: Vec<String>,
    /// History lines not yet written to the history log.
    pub new_history: Vec<String>,
    pub history_view: HistoryView,
    pub settings_menu: SettingsMenu,
    pub tax_dialog: TaxDialog,
    pub help_visible: bool,
    pub flash: Option<KeyFlash>,
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let engine = CalculatorEngine::new();
        let initial = engine.state();
        Self {
            config,
            engine,
            display: initial.display,
            has_memory: initial.has_memory,
            history: Vec::new(),
            new_history: Vec::new(),
            history_view: HistoryView::default(),
            settings_menu: SettingsMenu::new(),
            tax_dialog: TaxDialog {
                visible: false,
                input: InputState::new(),
            },
            help_visible: false,
            flash: None,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Press a calculator key.
    pub fn apply(&mut self, button: Button) {
        let rate = self.tax_rate();
        let result = self.engine.press(button, &rate);
        self.display = result.display;
        self.has_memory = result.has_memory;
        if let Some(line) = result.history_line {
            self.push_history(line);
        }
        if self.config.settings.vibration {
            self.flash = Some(KeyFlash {
                button,
                ticks_left: FLASH_TICKS,
            });
        }
        self.status_message = None;
        self.dirty = true;
    }

    fn push_history(&mut self, line: String) {
        self.new_history.push(line.clone());
        self.history.push(line);
        let max = self.config.history.max_entries.max(1);
        if self.history.len() > max {
            let excess = self.history.len() - max;
            self.history.drain(..excess);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history_view.scroll_offset = 0;
        self.dirty = true;
    }

    pub fn tax_rate(&self) -> BigDecimal {
        self.config.settings.tax_rate_value()
    }

    pub fn flashed_button(&self) -> Option<Button> {
        self.flash.map(|f| f.button)
    }

    /// Advance the key flash by one tick.
    pub fn tick(&mut self) {
        if let Some(flash) = self.flash.as_mut() {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
            if flash.ticks_left == 0 {
                self.flash = None;
            }
            self.dirty = true;
        }
    }

    pub fn set_theme(&mut self, theme: ThemeKind) -> Action {
        info!(theme = theme.key(), "theme changed");
        self.config.settings.theme = theme;
        self.dirty = true;
        Action::SaveConfig
    }

    pub fn set_language(&mut self, language: Language) -> Action {
        info!(language = language.code(), "language changed");
        self.config.settings.language = language;
        self.dirty = true;
        Action::SaveConfig
    }

    pub fn toggle_shape(&mut self) -> Action {
        self.config.settings.round_buttons = !self.config.settings.round_buttons;
        info!(round = self.config.settings.round_buttons, "button shape changed");
        self.dirty = true;
        Action::SaveConfig
    }

    pub fn toggle_vibration(&mut self) -> Action {
        self.config.settings.vibration = !self.config.settings.vibration;
        if !self.config.settings.vibration {
            self.flash = None;
        }
        info!(enabled = self.config.settings.vibration, "key feedback changed");
        self.dirty = true;
        Action::SaveConfig
    }

    /// Store the tax rate text as typed; it is parsed when used.
    pub fn set_tax_rate_text(&mut self, text: &str) -> Action {
        self.config.settings.tax_rate = text.trim().to_string();
        info!(rate = %self.config.settings.tax_rate, "tax rate changed");
        self.dirty = true;
        Action::SaveConfig
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "TAX {}% | {} | {} entries",
            self.tax_rate(),
            self.config.settings.theme.key(),
            self.history.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn press_all(state: &mut AppState, buttons: &[Button]) {
        for b in buttons {
            state.apply(*b);
        }
    }

    #[test]
    fn test_history_grows_only_on_completed_computation() {
        let mut state = AppState::new(AppConfig::default());
        press_all(
            &mut state,
            &[Button::Digit(3), Button::Operator(Operator::Add), Button::Digit(4)],
        );
        assert!(state.history.is_empty());
        state.apply(Button::Equals);
        assert_eq!(state.display, "7");
        assert_eq!(state.history, vec!["3 + 4 = 7".to_string()]);
        assert_eq!(state.new_history, vec!["3 + 4 = 7".to_string()]);

        state.apply(Button::Equals);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_clear_history() {
        let mut state = AppState::new(AppConfig::default());
        press_all(
            &mut state,
            &[
                Button::Digit(1),
                Button::Operator(Operator::Add),
                Button::Digit(1),
                Button::Equals,
            ],
        );
        assert_eq!(state.history.len(), 1);
        state.clear_history();
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_history_cap_drops_oldest() {
        let mut config = AppConfig::default();
        config.history.max_entries = 2;
        let mut state = AppState::new(config);
        for d in 1..=3u8 {
            press_all(
                &mut state,
                &[
                    Button::Digit(d),
                    Button::Operator(Operator::Add),
                    Button::Digit(d),
                    Button::Equals,
                ],
            );
        }
        assert_eq!(
            state.history,
            vec!["2 + 2 = 4".to_string(), "3 + 3 = 6".to_string()]
        );
    }

    #[test]
    fn test_tax_uses_configured_rate() {
        let mut config = AppConfig::default();
        config.settings.tax_rate = "8".into();
        let mut state = AppState::new(config);
        press_all(&mut state, &[Button::Digit(1), Button::DoubleZero, Button::TaxPlus]);
        assert_eq!(state.display, "108");
    }

    #[test]
    fn test_invalid_tax_text_falls_back_to_ten() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.set_tax_rate_text("ten percent"), Action::SaveConfig);
        press_all(&mut state, &[Button::Digit(1), Button::DoubleZero, Button::TaxPlus]);
        assert_eq!(state.display, "110");
    }

    #[test]
    fn test_flash_follows_vibration_setting() {
        let mut state = AppState::new(AppConfig::default());
        state.apply(Button::Digit(5));
        assert_eq!(state.flashed_button(), Some(Button::Digit(5)));
        for _ in 0..FLASH_TICKS {
            state.tick();
        }
        assert_eq!(state.flashed_button(), None);

        state.toggle_vibration();
        state.apply(Button::Digit(6));
        assert_eq!(state.flashed_button(), None);
    }

    #[test]
    fn test_memory_flag_tracks_engine() {
        let mut state = AppState::new(AppConfig::default());
        press_all(&mut state, &[Button::Digit(9), Button::MemoryAdd]);
        assert!(state.has_memory);
        state.apply(Button::MemoryClear);
        assert!(!state.has_memory);
    }

    #[test]
    fn test_settings_mutators_request_save() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.set_theme(ThemeKind::Miku), Action::SaveConfig);
        assert_eq!(state.set_language(Language::En), Action::SaveConfig);
        assert_eq!(state.toggle_shape(), Action::SaveConfig);
        assert_eq!(state.config.settings.theme, ThemeKind::Miku);
        assert_eq!(state.config.settings.language, Language::En);
        assert!(state.config.settings.round_buttons);
    }

    #[test]
    fn test_input_state_editing() {
        let mut input = InputState::new();
        input.set_text("10");
        input.insert_char('5');
        assert_eq!(input.text, "105");
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "15");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "5");
        input.move_end();
        assert_eq!(input.cursor, 1);
        input.move_right();
        assert_eq!(input.cursor, 1);
    }
}
