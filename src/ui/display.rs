use crate::app::state::AppState;
use crate::ui::theme::{Palette, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const OVERFLOW_MARK: &str = "…";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Palette::key_border_type(state.config.settings.round_buttons))
        .border_style(palette.overlay_border())
        .style(palette.display());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }
    let width = inner.width as usize;

    let memory = if state.has_memory { " M" } else { "" };
    let caption = state
        .history
        .last()
        .map(|line| keep_right(line, width))
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(memory, Theme::memory_indicator(palette))),
        Line::from(Span::styled(
            keep_right(&state.display, width),
            palette.display_text(),
        ))
        .alignment(Alignment::Right),
    ];
    if inner.height > 3 {
        lines.insert(1, Line::default());
    }
    lines.push(
        Line::from(Span::styled(caption, palette.display().add_modifier(Modifier::DIM)))
            .alignment(Alignment::Right),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Tail of `text` that fits in `width` columns. Numbers overflow on the left,
/// so the least significant digits stay visible and a leading `…` marks the
/// cut.
fn keep_right(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - OVERFLOW_MARK.width();
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = i;
    }
    format!("{}{}", OVERFLOW_MARK, &text[start..])
}
