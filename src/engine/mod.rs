//! Calculator state machine.
//!
//! The engine accumulates one pending operand, one pending operator and the
//! text currently being typed. Every operation returns a fresh
//! [`EngineState`] snapshot for the presentation layer. Failures never
//! propagate: they turn the current input into the `"Error"` sentinel, which
//! only clearing or a new number leaves.

mod button;
mod error;
mod format;

pub use button::{Button, Operator};
pub use error::CalcError;
pub use format::{display_text, ERROR_SENTINEL};

use bigdecimal::{BigDecimal, RoundingMode};
use tracing::{debug, warn};

use format::{add_commas, format_decimal, parse_input, zero, DIVISION_SCALE};

/// What the presentation layer shows after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    pub display: String,
    pub has_memory: bool,
    /// Set only when equals completed a pending computation.
    pub history_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    current: String,
    previous: BigDecimal,
    operator: Option<Operator>,
    memory: BigDecimal,
    awaiting_number: bool,
    last_was_operator: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: zero(),
            operator: None,
            memory: zero(),
            awaiting_number: true,
            last_was_operator: false,
        }
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            display: display_text(&self.current),
            has_memory: self.memory != zero(),
            history_line: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.current == ERROR_SENTINEL
    }

    fn trace(&self, action: &str) {
        debug!(
            action,
            current = %self.current,
            previous = %self.previous,
            operator = ?self.operator,
            memory = %self.memory,
            awaiting = self.awaiting_number,
            last_op = self.last_was_operator,
            "engine transition"
        );
    }

    fn fail(&mut self, action: &str, err: CalcError) {
        warn!(action, error = %err, "computation degraded to error");
        self.current = ERROR_SENTINEL.to_string();
    }

    fn current_value(&self) -> Result<BigDecimal, CalcError> {
        parse_input(&self.current)
    }

    /// Finish a function key: the next digit starts a new number.
    fn settle(&mut self, action: &str) -> EngineState {
        self.awaiting_number = true;
        self.last_was_operator = false;
        self.trace(action);
        self.state()
    }

    /// Replace the current input with a computed value, or the sentinel.
    fn store_result(&mut self, action: &str, result: Result<BigDecimal, CalcError>) {
        match result {
            Ok(value) => self.current = format_decimal(&value),
            Err(err) => self.fail(action, err),
        }
    }

    /// Enter `"0"`..`"9"`, `"00"` or `"."`.
    pub fn input_number(&mut self, digits: &str) -> EngineState {
        if self.awaiting_number {
            self.current = match digits {
                "." => "0.".to_string(),
                "00" => "0".to_string(),
                other => other.to_string(),
            };
            self.awaiting_number = false;
        } else {
            if digits == "." && self.current.contains('.') {
                return self.state();
            }
            if self.current == "0" && digits != "." {
                self.current = if digits == "00" { "0" } else { digits }.to_string();
            } else {
                self.current.push_str(digits);
            }
        }
        self.last_was_operator = false;
        self.trace("input_number");
        self.state()
    }

    pub fn operator_click(&mut self, operator: Operator) -> EngineState {
        if self.is_error() {
            return self.state();
        }
        if !self.last_was_operator {
            self.resolve_pending();
        }
        self.operator = if self.is_error() { None } else { Some(operator) };
        self.awaiting_number = true;
        self.last_was_operator = true;
        self.trace("operator_click");
        self.state()
    }

    pub fn equal_click(&mut self) -> EngineState {
        if self.is_error() {
            self.operator = None;
            return self.settle("equal_click");
        }

        let calculable = self.operator.is_some() && !self.awaiting_number;
        let left = add_commas(&format_decimal(&self.previous));
        let right = add_commas(
            &self
                .current_value()
                .map(|value| format_decimal(&value))
                .unwrap_or_else(|_| "0".to_string()),
        );
        let symbol = self.operator.map(Operator::symbol).unwrap_or_default();

        self.resolve_pending();

        let history_line = if calculable && !self.is_error() {
            Some(format!(
                "{} {} {} = {}",
                left,
                symbol,
                right,
                display_text(&self.current)
            ))
        } else {
            None
        };

        self.operator = None;
        let mut state = self.settle("equal_click");
        state.history_line = history_line;
        state
    }

    /// Apply the pending operator between the accumulated value and the
    /// current input. With no operator the input becomes the accumulator.
    fn resolve_pending(&mut self) {
        let result = self.current_value().and_then(|operand| self.apply(&operand));
        match result {
            Ok(value) => {
                self.current = format_decimal(&value);
                self.previous = value;
            }
            Err(err) => self.fail("resolve_pending", err),
        }
        self.trace("resolve_pending");
    }

    fn apply(&self, operand: &BigDecimal) -> Result<BigDecimal, CalcError> {
        let previous = &self.previous;
        match self.operator {
            None => Ok(operand.clone()),
            Some(Operator::Add) => Ok(previous + operand),
            Some(Operator::Subtract) => Ok(previous - operand),
            Some(Operator::Multiply) => Ok(previous * operand),
            Some(Operator::Divide) => divide(previous, operand),
        }
    }

    /// CE: drop the entry, keep the pending computation.
    pub fn clear_entry(&mut self) -> EngineState {
        self.current = "0".to_string();
        self.awaiting_number = true;
        self.trace("clear_entry");
        self.state()
    }

    /// AC: back to a freshly constructed engine, memory included.
    pub fn clear_all(&mut self) -> EngineState {
        *self = Self::new();
        self.trace("clear_all");
        self.state()
    }

    pub fn backspace(&mut self) -> EngineState {
        if self.awaiting_number {
            return self.state();
        }
        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
        }
        self.trace("backspace");
        self.state()
    }

    pub fn memory_add(&mut self) -> EngineState {
        match self.current_value() {
            Ok(value) => self.memory = &self.memory + &value,
            Err(err) => self.fail("memory_add", err),
        }
        self.settle("memory_add")
    }

    pub fn memory_subtract(&mut self) -> EngineState {
        match self.current_value() {
            Ok(value) => self.memory = &self.memory - &value,
            Err(err) => self.fail("memory_subtract", err),
        }
        self.settle("memory_subtract")
    }

    pub fn memory_clear(&mut self) -> EngineState {
        self.memory = zero();
        self.trace("memory_clear");
        self.state()
    }

    pub fn memory_recall(&mut self) -> EngineState {
        self.current = format_decimal(&self.memory);
        self.settle("memory_recall")
    }

    pub fn toggle_sign(&mut self) -> EngineState {
        if self.current == "0" || self.is_error() {
            return self.state();
        }
        self.current = match self.current.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current),
        };
        self.last_was_operator = false;
        self.trace("toggle_sign");
        self.state()
    }

    pub fn square_root(&mut self) -> EngineState {
        let result = self.current_value().and_then(|value| {
            if value < zero() {
                return Err(CalcError::NegativeRoot(self.current.clone()));
            }
            value
                .sqrt()
                .ok_or_else(|| CalcError::NegativeRoot(self.current.clone()))
        });
        self.store_result("square_root", result);
        self.settle("square_root")
    }

    pub fn percent(&mut self) -> EngineState {
        let result = self
            .current_value()
            .and_then(|value| divide(&value, &BigDecimal::from(100)));
        self.store_result("percent", result);
        self.settle("percent")
    }

    /// Add `rate` percent and truncate to an integer.
    pub fn tax_plus(&mut self, rate: &BigDecimal) -> EngineState {
        let result = self.current_value().map(|value| {
            (value * tax_multiplier(rate)).with_scale_round(0, RoundingMode::Down)
        });
        self.store_result("tax_plus", result);
        self.settle("tax_plus")
    }

    /// Remove `rate` percent and truncate to an integer.
    pub fn tax_minus(&mut self, rate: &BigDecimal) -> EngineState {
        let result = self.current_value().and_then(|value| {
            divide(&value, &tax_multiplier(rate))
                .map(|net| net.with_scale_round(0, RoundingMode::Down))
        });
        self.store_result("tax_minus", result);
        self.settle("tax_minus")
    }
}

fn divide(dividend: &BigDecimal, divisor: &BigDecimal) -> Result<BigDecimal, CalcError> {
    if *divisor == zero() {
        return Err(CalcError::DivisionByZero);
    }
    Ok((dividend / divisor).with_scale_round(DIVISION_SCALE, RoundingMode::HalfUp))
}

fn tax_multiplier(rate: &BigDecimal) -> BigDecimal {
    BigDecimal::from(1) + rate / &BigDecimal::from(100)
}
