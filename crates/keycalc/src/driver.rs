//! Front-end driver abstraction
//!
//! A front-end (terminal, GUI, test harness) only needs to forward keys and
//! read the display back. [`CalculatorDriver`] captures that surface so the
//! `verify_*` checks below can run against any front-end.

use crate::engine::CalculatorEngine;
use crate::error::{CalcError, CalcResult};
use crate::keypad::{parse_keys, Key};

/// Key-forwarding surface of a calculator front-end
pub trait CalculatorDriver {
    /// Forwards one key press
    fn press(&mut self, key: Key) -> CalcResult<()>;

    /// Current display text
    fn display(&self) -> String;

    /// Presses the clear key
    fn clear(&mut self) {
        // Clear is infallible
        let _ = self.press(Key::Clear);
    }

    /// Types a key string, returning the last error raised, if any
    ///
    /// Unknown characters fail before any key is forwarded.
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        let mut last = Ok(());
        for key in parse_keys(keys)? {
            if let Err(e) = self.press(key) {
                last = Err(e);
            }
        }
        last
    }
}

/// Driver that talks to an in-process engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing engine
    #[must_use]
    pub const fn with_engine(engine: CalculatorEngine) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Consumes the driver, returning the engine
    #[must_use]
    pub fn into_engine(self) -> CalculatorEngine {
        self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) -> CalcResult<()> {
        self.engine.press(key)
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }
}

// ===== Shared checks =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("2+3=", "5"), ("10-3=", "7"), ("3*4=", "12"), ("8/2=", "4")] {
        driver.clear();
        driver.enter_keys(keys).unwrap();
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.clear();
}

/// Verifies strict left-to-right chaining
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("2+3*4=").unwrap();
    assert_eq!(driver.display(), "20");

    driver.clear();
    driver.enter_keys("8-2/3=").unwrap();
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Verifies decimal entry and result formatting
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("..").unwrap();
    assert_eq!(driver.display(), "0.");

    driver.clear();
    driver.enter_keys("1,5+3=").unwrap();
    assert_eq!(driver.display(), "4.50");

    driver.clear();
    driver.enter_keys("6/2=").unwrap();
    assert_eq!(driver.display(), "3");
    driver.clear();
}

/// Verifies recovery from invalid operations
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let result = driver.enter_keys("5/0=");
    assert_eq!(result, Err(CalcError::DivisionByZero));
    assert_eq!(driver.display(), "0");

    driver.enter_keys("1+1=").unwrap();
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Runs every check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chained_evaluation(driver);
    verify_decimal_entry(driver);
    verify_error_recovery(driver);
}
