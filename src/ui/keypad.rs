use crate::app::state::AppState;
use crate::ui::layout;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let border_type = Palette::key_border_type(state.config.settings.round_buttons);
    let flashed = state.flashed_button();

    for (button, cell) in layout::keypad_cells(area) {
        let style = palette.key(button, flashed == Some(button));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(palette.key_border(button).bg(style.bg.unwrap_or(Color::Reset)))
            .style(style);
        let inner = block.inner(cell);
        frame.render_widget(block, cell);

        // Centre the label vertically inside the key
        let label_area = if inner.height > 1 {
            Rect::new(inner.x, inner.y + (inner.height - 1) / 2, inner.width, 1)
        } else {
            inner
        };
        let label = Paragraph::new(button.label())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(label, label_area);
    }
}
