use thiserror::Error;

/// Reasons a computation step can fail. The engine never surfaces these to
/// callers; they collapse into the `"Error"` display sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("not a number: {0:?}")]
    InvalidInput(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative value {0}")]
    NegativeRoot(String),
}
