//! Binary operators for the four-function keypad
//!
//! Every operator binds equally; chained presses are collapsed left-to-right
//! by the engine, so there is no precedence table here.

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Pending binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (×)
    Mul,
    /// Division (÷)
    Div,
}

impl Operator {
    /// All operators in keypad column order
    pub const ALL: [Self; 4] = [Self::Div, Self::Mul, Self::Sub, Self::Add];

    /// Returns the symbol shown on the keypad
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Returns the ASCII spelling of the operator
    #[must_use]
    pub const fn ascii(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps a typed character to an operator
    ///
    /// Accepts both the keypad glyphs and their ASCII stand-ins.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Sub),
            '*' | 'x' | 'X' | '×' => Some(Self::Mul),
            '/' | ':' | '÷' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    ///
    /// Division by exactly zero fails with [`CalcError::DivisionByZero`];
    /// any other NaN or infinite outcome fails with
    /// [`CalcError::InvalidResult`].
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        check_finite(result)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() || result.is_infinite() {
        Err(CalcError::InvalidResult(result))
    } else {
        Ok(result)
    }
}
