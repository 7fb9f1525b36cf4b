use crate::engine::{Button, Operator};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the calculator body is allowed to grow.
const MAX_WIDTH: u16 = 64;

/// Keypad rows, each cell paired with its column span.
pub const KEYPAD_ROWS: [&[(Button, u16)]; 6] = [
    &[
        (Button::TaxMinus, 1),
        (Button::TaxPlus, 1),
        (Button::Backspace, 1),
        (Button::ClearEntry, 1),
        (Button::ClearAll, 1),
    ],
    &[
        (Button::MemoryAdd, 1),
        (Button::MemorySubtract, 1),
        (Button::MemoryClear, 1),
        (Button::MemoryRecall, 1),
        (Button::ToggleSign, 1),
    ],
    &[
        (Button::Digit(7), 1),
        (Button::Digit(8), 1),
        (Button::Digit(9), 1),
        (Button::Percent, 1),
        (Button::SquareRoot, 1),
    ],
    &[
        (Button::Digit(4), 1),
        (Button::Digit(5), 1),
        (Button::Digit(6), 1),
        (Button::Operator(Operator::Multiply), 1),
        (Button::Operator(Operator::Divide), 1),
    ],
    &[
        (Button::Digit(1), 1),
        (Button::Digit(2), 1),
        (Button::Digit(3), 1),
        (Button::Operator(Operator::Add), 1),
        (Button::Operator(Operator::Subtract), 1),
    ],
    &[
        (Button::Digit(0), 1),
        (Button::DoubleZero, 1),
        (Button::Decimal, 1),
        (Button::Equals, 2),
    ],
];

const KEYPAD_COLUMNS: u32 = 5;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Centre the calculator body horizontally
    let width = area.width.min(MAX_WIDTH);
    let body = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Display
            Constraint::Min(12),   // Keypad
            Constraint::Length(1), // Status bar
        ])
        .split(body);

    AppLayout {
        display: chunks[0],
        keypad: chunks[1],
        status_bar: chunks[2],
    }
}

/// Screen rectangle of every keypad button.
pub fn keypad_cells(keypad: Rect) -> Vec<(Button, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD_ROWS.iter().map(|_| Constraint::Ratio(1, KEYPAD_ROWS.len() as u32)))
        .split(keypad);

    let mut cells = Vec::with_capacity(30);
    for (row_area, row) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..KEYPAD_COLUMNS).map(|_| Constraint::Ratio(1, KEYPAD_COLUMNS)))
            .split(*row_area);

        let mut col = 0usize;
        for &(button, span) in row.iter() {
            let first = columns[col];
            let last = columns[(col + span as usize - 1).min(columns.len() - 1)];
            let width = last.x + last.width - first.x;
            cells.push((button, Rect::new(first.x, first.y, width, first.height)));
            col += span as usize;
        }
    }
    cells
}

/// Keypad button under a screen position, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let layout = compute_layout(area);
    keypad_cells(layout.keypad)
        .into_iter()
        .find(|(_, r)| column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height)
        .map(|(button, _)| button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_has_every_button_once() {
        let cells = keypad_cells(Rect::new(0, 0, 50, 24));
        assert_eq!(cells.len(), 29);
        let mut seen = std::collections::HashSet::new();
        for (button, _) in &cells {
            assert!(seen.insert(*button), "duplicate {:?}", button);
        }
    }

    #[test]
    fn test_equals_spans_two_columns() {
        let cells = keypad_cells(Rect::new(0, 0, 50, 24));
        let equals = cells.iter().find(|(b, _)| *b == Button::Equals).unwrap().1;
        let zero = cells.iter().find(|(b, _)| *b == Button::Digit(0)).unwrap().1;
        assert_eq!(equals.width, zero.width * 2);
        assert_eq!(equals.x + equals.width, 50);
    }

    #[test]
    fn test_button_at_hits_cells() {
        let area = Rect::new(0, 0, 50, 31);
        let layout = compute_layout(area);
        for (button, rect) in keypad_cells(layout.keypad) {
            assert_eq!(button_at(area, rect.x, rect.y), Some(button));
        }
        // display area is not a button
        assert_eq!(button_at(area, 1, 1), None);
    }

    #[test]
    fn test_body_is_centred() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.display.width, MAX_WIDTH);
        assert_eq!(layout.display.x, (100 - MAX_WIDTH) / 2);
    }
}
