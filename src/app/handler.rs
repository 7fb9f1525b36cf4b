use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::config::{Language, ThemeKind};
use crate::engine::{Button, Operator};
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Calculator key bound to a keyboard key, if any.
pub fn button_for_key(key: &KeyEvent) -> Option<Button> {
    let button = match key.code {
        KeyCode::Char(c @ '0'..='9') => Button::Digit(c as u8 - b'0'),
        KeyCode::Char('d') => Button::DoubleZero,
        KeyCode::Char('.') | KeyCode::Char(',') => Button::Decimal,
        KeyCode::Char('+') => Button::Operator(Operator::Add),
        KeyCode::Char('-') => Button::Operator(Operator::Subtract),
        KeyCode::Char('*') | KeyCode::Char('x') => Button::Operator(Operator::Multiply),
        KeyCode::Char('/') => Button::Operator(Operator::Divide),
        KeyCode::Enter | KeyCode::Char('=') => Button::Equals,
        KeyCode::Backspace => Button::Backspace,
        KeyCode::Delete | KeyCode::Char('c') => Button::ClearEntry,
        KeyCode::Esc => Button::ClearAll,
        KeyCode::Char('p') => Button::MemoryAdd,
        KeyCode::Char('m') => Button::MemorySubtract,
        KeyCode::Char('l') => Button::MemoryClear,
        KeyCode::Char('r') => Button::MemoryRecall,
        KeyCode::Char('n') => Button::ToggleSign,
        KeyCode::Char('s') => Button::SquareRoot,
        KeyCode::Char('%') => Button::Percent,
        KeyCode::Char('t') => Button::TaxPlus,
        KeyCode::Char('T') => Button::TaxMinus,
        _ => return None,
    };
    Some(button)
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Overlays capture all input while visible
    if state.tax_dialog.visible {
        return handle_tax_dialog_key(state, key);
    }
    if state.settings_menu.visible {
        return handle_settings_key(state, key);
    }
    if state.history_view.visible {
        return handle_history_key(state, key);
    }
    if state.help_visible {
        state.help_visible = false;
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::F(1) | KeyCode::Char('?') => {
            state.help_visible = true;
            return vec![];
        }
        KeyCode::F(2) | KeyCode::Char('o') => {
            state.settings_menu.open();
            return vec![];
        }
        KeyCode::Char('h') => {
            state.history_view.visible = true;
            state.history_view.scroll_offset = 0;
            return vec![];
        }
        _ => {}
    }

    if let Some(button) = button_for_key(&key) {
        state.apply(button);
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let overlay_open = state.tax_dialog.visible
        || state.settings_menu.visible
        || state.history_view.visible
        || state.help_visible;
    if overlay_open {
        return vec![];
    }
    if let Some(button) = layout::button_at(state.viewport, mouse.column, mouse.row) {
        state.apply(button);
    }
    vec![]
}

fn handle_history_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Delete | KeyCode::Char('x')) {
        state.clear_history();
        return vec![];
    }
    let last = state.history.len().saturating_sub(1);
    let view = &mut state.history_view;
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => view.visible = false,
        KeyCode::Up => view.scroll_offset = view.scroll_offset.saturating_sub(1),
        KeyCode::Down => view.scroll_offset = (view.scroll_offset + 1).min(last),
        KeyCode::PageUp => view.scroll_offset = view.scroll_offset.saturating_sub(10),
        KeyCode::PageDown => view.scroll_offset = (view.scroll_offset + 10).min(last),
        KeyCode::Home => view.scroll_offset = 0,
        KeyCode::End => view.scroll_offset = last,
        _ => {}
    }
    vec![]
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.settings_menu.move_up(),
        KeyCode::Down => state.settings_menu.move_down(),
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => match state.settings_menu.mode {
            MenuMode::Main => state.settings_menu.close(),
            MenuMode::Theme | MenuMode::Language => {
                state.settings_menu.mode = MenuMode::Main;
                state.settings_menu.selected = 0;
            }
        },
        KeyCode::Enter | KeyCode::Right => return select_menu_entry(state),
        _ => {}
    }
    vec![]
}

fn select_menu_entry(state: &mut AppState) -> Vec<Action> {
    let selected = state.settings_menu.selected;
    match state.settings_menu.mode {
        MenuMode::Main => match MenuItem::ALL.get(selected) {
            Some(MenuItem::Theme) => {
                let current = state.config.settings.theme;
                state.settings_menu.mode = MenuMode::Theme;
                state.settings_menu.selected =
                    ThemeKind::ALL.iter().position(|t| *t == current).unwrap_or(0);
                vec![]
            }
            Some(MenuItem::Language) => {
                let current = state.config.settings.language;
                state.settings_menu.mode = MenuMode::Language;
                state.settings_menu.selected =
                    Language::ALL.iter().position(|l| *l == current).unwrap_or(0);
                vec![]
            }
            Some(MenuItem::Shape) => {
                state.settings_menu.close();
                vec![state.toggle_shape()]
            }
            // Stays open so the switch can be flipped back
            Some(MenuItem::Vibration) => vec![state.toggle_vibration()],
            Some(MenuItem::TaxRate) => {
                state.settings_menu.close();
                let current = state.config.settings.tax_rate.clone();
                state.tax_dialog.input.set_text(&current);
                state.tax_dialog.visible = true;
                vec![]
            }
            Some(MenuItem::Help) => {
                state.settings_menu.close();
                state.help_visible = true;
                vec![]
            }
            None => vec![],
        },
        MenuMode::Theme => match ThemeKind::ALL.get(selected) {
            Some(theme) => {
                state.settings_menu.close();
                vec![state.set_theme(*theme)]
            }
            None => vec![],
        },
        MenuMode::Language => match Language::ALL.get(selected) {
            Some(language) => {
                state.settings_menu.close();
                vec![state.set_language(*language)]
            }
            None => vec![],
        },
    }
}

fn handle_tax_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.tax_dialog.visible = false,
        KeyCode::Enter => {
            state.tax_dialog.visible = false;
            let text = state.tax_dialog.input.text.clone();
            return vec![state.set_tax_rate_text(&text)];
        }
        KeyCode::Backspace => state.tax_dialog.input.delete_back(),
        KeyCode::Delete => state.tax_dialog.input.delete_forward(),
        KeyCode::Left => state.tax_dialog.input.move_left(),
        KeyCode::Right => state.tax_dialog.input.move_right(),
        KeyCode::Home => state.tax_dialog.input.move_home(),
        KeyCode::End => state.tax_dialog.input.move_end(),
        KeyCode::Char(c) if !c.is_control() => state.tax_dialog.input.insert_char(c),
        _ => {}
    }
    vec![]
}
