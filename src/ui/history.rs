use crate::app::state::AppState;
use crate::ui::i18n;
use crate::ui::theme::{Palette, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette) {
    if !state.history_view.visible {
        return;
    }
    let text = i18n::strings(state.config.settings.language);

    let popup_area = super::popup_area(frame.area(), 80, 80);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", text.history_title))
        .title_style(Theme::title())
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", text.history_hint),
            Theme::secondary(),
        )))
        .borders(Borders::ALL)
        .border_type(Palette::key_border_type(state.config.settings.round_buttons))
        .border_style(palette.overlay_border())
        .style(Theme::surface());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height == 0 || inner.width < 2 {
        return;
    }

    if state.history.is_empty() {
        let empty = Paragraph::new(Span::styled(text.history_empty, Theme::secondary()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let list_h = inner.height as usize;
    let total = state.history.len();
    // Newest entry first; keep the selected line on screen
    let selected = state.history_view.scroll_offset.min(total - 1);
    let start = selected.saturating_sub(list_h.saturating_sub(1));

    let lines: Vec<Line> = state
        .history
        .iter()
        .rev()
        .enumerate()
        .skip(start)
        .take(list_h)
        .map(|(i, entry)| {
            let style = if i == selected {
                palette.selected()
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            Line::from(Span::styled(format!(" {}", entry), style))
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width - 1, inner.height);
    frame.render_widget(Paragraph::new(lines), list_area);

    if total > list_h {
        let scrollbar_area = Rect::new(inner.x + inner.width - 1, inner.y, 1, inner.height);
        let mut scrollbar_state = ScrollbarState::new(total).position(selected);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}
