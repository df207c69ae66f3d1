//! keycalc - key-press driven four-function calculator
//!
//! The engine accepts one key at a time (digits, decimal point, operators,
//! equals, clear) and keeps a display string a front-end reads back after
//! every press. Chained operators evaluate strictly left-to-right, so
//! `2 + 3 × 4 =` shows `20`.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.press_str("2+3*4=").unwrap();
//! assert_eq!(calc.display(), "20");
//!
//! // Invalid operations reset to the clear state
//! calc.press_str("5/0").unwrap();
//! assert_eq!(calc.on_equals(), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod driver;
pub mod engine;
mod error;
pub mod keypad;
pub mod number;
mod operator;
mod snapshot;

pub use config::{EngineConfig, TrailingDecimal};
pub use engine::{CalculatorEngine, PressOutcome, PressReport};
pub use error::{CalcError, CalcResult};
pub use keypad::{parse_keys, Key, Keypad, KeypadButton};
pub use number::{format_result, parse_number, parse_number_with};
pub use operator::Operator;
pub use snapshot::Snapshot;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::{
        format_result, parse_number, CalcError, CalcResult, CalculatorEngine, EngineConfig, Key,
        Keypad, Operator, PressReport, Snapshot, TrailingDecimal,
    };
}
