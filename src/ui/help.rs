use crate::app::state::AppState;
use crate::ui::i18n;
use crate::ui::theme::{Palette, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette) {
    if !state.help_visible {
        return;
    }
    let text = i18n::strings(state.config.settings.language);

    let height = (text.help_keys.len() as u16 + 4).min(frame.area().height);
    let popup_area = super::popup_fixed(frame.area(), 46, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", text.help_title))
        .title_style(Theme::title())
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", text.help_hint),
            Theme::secondary(),
        )))
        .borders(Borders::ALL)
        .border_type(Palette::key_border_type(state.config.settings.round_buttons))
        .border_style(palette.overlay_border())
        .style(Theme::surface());

    let mut lines = vec![Line::default()];
    for (keys, meaning) in text.help_keys {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<12}", keys), Theme::key_hint()),
            Span::styled(*meaning, Style::default().fg(Theme::TEXT_PRIMARY)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
