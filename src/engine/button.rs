//! Calculator keys and their dispatch onto the engine.

use bigdecimal::BigDecimal;

use super::{CalculatorEngine, EngineState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used on the keypad and in history lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "÷",
        }
    }
}

/// Every key on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// A single digit, 0 through 9.
    Digit(u8),
    DoubleZero,
    Decimal,
    Operator(Operator),
    Equals,
    ClearEntry,
    ClearAll,
    Backspace,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
    MemoryRecall,
    ToggleSign,
    SquareRoot,
    Percent,
    TaxPlus,
    TaxMinus,
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGITS.get(d as usize).copied().unwrap_or("?"),
            Button::DoubleZero => "00",
            Button::Decimal => ".",
            Button::Operator(op) => op.symbol(),
            Button::Equals => "=",
            Button::ClearEntry => "C",
            Button::ClearAll => "AC",
            Button::Backspace => "▶",
            Button::MemoryAdd => "M+",
            Button::MemorySubtract => "M-",
            Button::MemoryClear => "CM",
            Button::MemoryRecall => "RM",
            Button::ToggleSign => "+/-",
            Button::SquareRoot => "√",
            Button::Percent => "%",
            Button::TaxPlus => "TAX+",
            Button::TaxMinus => "TAX-",
        }
    }

    /// Clear keys are drawn with the accent colour.
    pub fn is_accent(self) -> bool {
        matches!(self, Button::ClearEntry | Button::ClearAll)
    }
}

impl CalculatorEngine {
    /// Apply one key press. `tax_rate` is a percentage, used only by the
    /// tax keys.
    pub fn press(&mut self, button: Button, tax_rate: &BigDecimal) -> EngineState {
        match button {
            Button::Digit(d) => match DIGITS.get(d as usize) {
                Some(digit) => self.input_number(digit),
                None => self.state(),
            },
            Button::DoubleZero => self.input_number("00"),
            Button::Decimal => self.input_number("."),
            Button::Operator(op) => self.operator_click(op),
            Button::Equals => self.equal_click(),
            Button::ClearEntry => self.clear_entry(),
            Button::ClearAll => self.clear_all(),
            Button::Backspace => self.backspace(),
            Button::MemoryAdd => self.memory_add(),
            Button::MemorySubtract => self.memory_subtract(),
            Button::MemoryClear => self.memory_clear(),
            Button::MemoryRecall => self.memory_recall(),
            Button::ToggleSign => self.toggle_sign(),
            Button::SquareRoot => self.square_root(),
            Button::Percent => self.percent(),
            Button::TaxPlus => self.tax_plus(tax_rate),
            Button::TaxMinus => self.tax_minus(tax_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut CalculatorEngine, buttons: &[Button]) -> EngineState {
        let rate = BigDecimal::from(10);
        let mut last = engine.state();
        for b in buttons {
            last = engine.press(*b, &rate);
        }
        last
    }

    #[test]
    fn test_labels() {
        assert_eq!(Button::Digit(7).label(), "7");
        assert_eq!(Button::Operator(Operator::Multiply).label(), "x");
        assert_eq!(Button::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Button::TaxMinus.label(), "TAX-");
        assert!(Button::ClearAll.is_accent());
        assert!(!Button::Equals.is_accent());
    }

    #[test]
    fn test_press_sequence() {
        let mut engine = CalculatorEngine::new();
        let state = run(
            &mut engine,
            &[
                Button::Digit(1),
                Button::Digit(2),
                Button::Operator(Operator::Multiply),
                Button::Digit(3),
                Button::Equals,
            ],
        );
        assert_eq!(state.display, "36");
        assert_eq!(state.history_line.as_deref(), Some("12 x 3 = 36"));
    }

    #[test]
    fn test_press_double_zero_and_decimal() {
        let mut engine = CalculatorEngine::new();
        let state = run(
            &mut engine,
            &[Button::Digit(5), Button::DoubleZero, Button::Decimal, Button::Digit(5)],
        );
        assert_eq!(state.display, "500.5");
    }

    #[test]
    fn test_press_tax_uses_rate() {
        let mut engine = CalculatorEngine::new();
        let state = run(
            &mut engine,
            &[Button::Digit(2), Button::DoubleZero, Button::TaxPlus],
        );
        assert_eq!(state.display, "220");
    }

    #[test]
    fn test_invalid_digit_ignored() {
        let mut engine = CalculatorEngine::new();
        let state = run(&mut engine, &[Button::Digit(4), Button::Digit(42)]);
        assert_eq!(state.display, "4");
    }
}
