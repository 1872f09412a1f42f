//! The four binary operators and their floating-point semantics.

use thiserror::Error;

/// Failure of a single calculation.
///
/// Never escapes the state machine: it moves the calculator into its error
/// phase and the display shows the matching localized message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
}

impl CalcError {
    /// Translation key of the message shown in place of the display.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::DivisionByZero => crate::i18n::keys::ERROR_MESSAGE,
            Self::NonFinite => crate::i18n::keys::OVERFLOW_MESSAGE,
        }
    }
}

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Division by an exact zero (including `-0`) is rejected, and so is any
    /// result that overflows to infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFinite)
        }
    }

    /// Symbol printed on the keypad.
    pub fn symbol(self) -> char {
        match self {
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Add => '+',
            Self::Subtract => '−',
        }
    }

    /// Map a typed character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(12.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Subtract.apply(12.0, 3.0), Ok(9.0));
        assert_eq!(Operator::Multiply.apply(12.0, 3.0), Ok(36.0));
        assert_eq!(Operator::Divide.apply(12.0, 3.0), Ok(4.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(0.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(5.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Operator::Multiply.apply(f64::MAX, 10.0), Err(CalcError::NonFinite));
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(CalcError::DivisionByZero.message_key(), "ERROR_MESSAGE");
        assert_eq!(CalcError::NonFinite.message_key(), "OVERFLOW_MESSAGE");
    }
}
