use crate::app::state::{AppState, MenuItem, MenuMode};
use crate::config::{Language, ThemeKind};
use crate::ui::i18n::{self, Strings};
use crate::ui::theme::{Palette, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette) {
    if state.settings_menu.visible {
        render_menu(frame, state, palette);
    }
    if state.tax_dialog.visible {
        render_tax_dialog(frame, state, palette);
    }
}

fn menu_label(item: MenuItem, state: &AppState, text: &Strings) -> String {
    let settings = &state.config.settings;
    let (name, value) = match item {
        MenuItem::Theme => (
            text.menu_theme,
            i18n::theme_name(settings.language, settings.theme).to_string(),
        ),
        MenuItem::Language => (text.menu_language, settings.language.native_name().to_string()),
        MenuItem::Shape => (
            text.menu_shape,
            if settings.round_buttons {
                text.shape_round
            } else {
                text.shape_square
            }
            .to_string(),
        ),
        MenuItem::Vibration => (
            text.menu_vibration,
            if settings.vibration { text.on } else { text.off }.to_string(),
        ),
        MenuItem::TaxRate => (text.menu_tax_rate, format!("{}%", settings.tax_rate)),
        MenuItem::Help => (text.menu_help, String::new()),
    };
    if value.is_empty() {
        format!(" {}", name)
    } else {
        format!(" {}: {}", name, value)
    }
}

fn render_menu(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let text = i18n::strings(state.config.settings.language);
    let settings = &state.config.settings;
    let menu = &state.settings_menu;

    let (title, entries): (&str, Vec<String>) = match menu.mode {
        MenuMode::Main => (
            text.settings_title,
            MenuItem::ALL
                .iter()
                .map(|item| menu_label(*item, state, text))
                .collect(),
        ),
        MenuMode::Theme => (
            text.menu_theme,
            ThemeKind::ALL
                .iter()
                .map(|theme| {
                    let mark = if *theme == settings.theme { "●" } else { " " };
                    format!(" {} {}", mark, i18n::theme_name(settings.language, *theme))
                })
                .collect(),
        ),
        MenuMode::Language => (
            text.menu_language,
            Language::ALL
                .iter()
                .map(|language| {
                    let mark = if *language == settings.language { "●" } else { " " };
                    format!(" {} {}", mark, language.native_name())
                })
                .collect(),
        ),
    };

    let height = (entries.len() as u16 + 2).min(frame.area().height);
    let popup_area = super::popup_fixed(frame.area(), 40, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Palette::key_border_type(settings.round_buttons))
        .border_style(palette.overlay_border())
        .style(Theme::surface());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let visible = inner.height as usize;
    let start = menu.selected.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = entries
        .into_iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, entry)| {
            let style = if i == menu.selected {
                palette.selected()
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            Line::from(Span::styled(entry, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_tax_dialog(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let text = i18n::strings(state.config.settings.language);
    let input = &state.tax_dialog.input;

    let popup_area = super::popup_fixed(frame.area(), 36, 4);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", text.tax_title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Palette::key_border_type(state.config.settings.round_buttons))
        .border_style(palette.overlay_border())
        .style(Theme::surface());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", input.text),
            Style::default().fg(Theme::TEXT_PRIMARY),
        )),
        Line::from(Span::styled(format!(" {}", text.tax_hint), Theme::secondary())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let before_cursor = unicode_width::UnicodeWidthStr::width(&input.text[..input.cursor]);
    let cursor_x = inner.x + 1 + before_cursor as u16;
    if cursor_x < inner.x + inner.width {
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
