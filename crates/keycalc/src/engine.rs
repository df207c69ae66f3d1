//! Calculator engine: the key-press state machine
//!
//! The engine holds four fields (operand text, pending operator, frozen
//! left operand, new-input flag) and changes them only through the five key
//! operations. Chained operators collapse the pending operation before the
//! next one is stored, which gives strict left-to-right evaluation:
//! `2 + 3 × 4 =` shows `20`.
//!
//! Failures never leave the engine half-updated. Errors that mean the
//! operand or result is unusable reset to the clear state; bounded-input
//! rejections leave the state untouched.

use crate::config::EngineConfig;
use crate::error::{CalcError, CalcResult};
use crate::keypad::{parse_keys, Key};
use crate::number::{format_result, parse_number_with};
use crate::operator::Operator;
use crate::snapshot::Snapshot;
use tracing::{debug, trace, warn};

/// Outcome of a single key press within a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct PressOutcome {
    /// The key that was pressed
    pub key: Key,
    /// What the engine returned
    pub result: CalcResult<()>,
    /// Display text after the press
    pub display: String,
}

/// Per-key outcomes of a key sequence, in press order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressReport {
    /// One entry per key
    pub outcomes: Vec<PressOutcome>,
}

impl PressReport {
    /// Display text after the last key, if any key was pressed
    #[must_use]
    pub fn final_display(&self) -> Option<&str> {
        self.outcomes.last().map(|o| o.display.as_str())
    }

    /// Errors raised along the way
    pub fn errors(&self) -> impl Iterator<Item = &CalcError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    /// The most recent error, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.errors().last()
    }

    /// Returns true if every key was accepted
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Four-function calculator driven by key presses
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    current_input: String,
    operator: Option<Operator>,
    operand1: f64,
    is_new_input: bool,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in the clear state with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine in the clear state with `config`
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current_input: String::new(),
            operator: None,
            operand1: 0.0,
            is_new_input: true,
            config,
        }
    }

    /// Returns the active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Operand text under construction (may be empty)
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Pending operator
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Frozen left-hand operand
    #[must_use]
    pub const fn operand1(&self) -> f64 {
        self.operand1
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub const fn is_new_input(&self) -> bool {
        self.is_new_input
    }

    /// Text to show on the display: the operand, or `"0"` when empty
    #[must_use]
    pub fn display(&self) -> &str {
        if self.current_input.is_empty() {
            "0"
        } else {
            &self.current_input
        }
    }

    /// Pending left operand and operator, e.g. `"12 +"`
    ///
    /// Empty when no operator is pending.
    #[must_use]
    pub fn expression(&self) -> String {
        match self.operator {
            Some(op) => format!("{} {}", format_result(self.operand1), op),
            None => String::new(),
        }
    }

    // ===== Key operations =====

    /// Digit key
    ///
    /// Starts a fresh operand after a boundary, otherwise appends. Appending
    /// past the configured length fails with [`CalcError::InputTooLong`]
    /// and leaves the state unchanged.
    pub fn on_digit(&mut self, d: char) -> CalcResult<()> {
        if !d.is_ascii_digit() {
            trace!(key = %d, "rejected non-digit");
            return Err(CalcError::InvalidKey(d));
        }

        if self.is_new_input {
            self.current_input.clear();
            self.current_input.push(d);
            self.is_new_input = false;
        } else {
            self.check_append()?;
            self.current_input.push(d);
        }

        debug!(input = %self.current_input, "digit");
        Ok(())
    }

    /// Decimal key
    ///
    /// Starts `"0."` after a boundary. Otherwise appends `.` unless the
    /// operand already has a separator, which is a silent no-op.
    pub fn on_decimal(&mut self) -> CalcResult<()> {
        if self.is_new_input {
            self.current_input = "0.".to_string();
            self.is_new_input = false;
        } else {
            if self.current_input.contains(['.', ',']) {
                trace!(input = %self.current_input, "separator already present");
                return Ok(());
            }
            self.check_append()?;
            self.current_input.push('.');
        }

        debug!(input = %self.current_input, "decimal");
        Ok(())
    }

    /// Operator key
    ///
    /// With a second operand typed since the last operator, the pending
    /// operation is collapsed first and its result becomes the new left
    /// operand. Pressing an operator right after another one replaces it.
    pub fn on_operator(&mut self, op: Operator) -> CalcResult<()> {
        if self.current_input.is_empty() {
            trace!(%op, "operator with empty input ignored");
            return Ok(());
        }

        match self.operator {
            Some(pending) if !self.is_new_input => {
                self.operand1 = self.collapse(pending)?;
            }
            Some(_) => {}
            None => {
                self.operand1 = self.parse_operand()?;
            }
        }

        self.operator = Some(op);
        self.is_new_input = true;
        debug!(operand1 = self.operand1, %op, "operator");
        Ok(())
    }

    /// Equals key
    ///
    /// Does nothing without a pending operator or operand text.
    pub fn on_equals(&mut self) -> CalcResult<()> {
        let Some(op) = self.operator else {
            trace!("equals without pending operator ignored");
            return Ok(());
        };
        if self.current_input.is_empty() {
            return Ok(());
        }

        self.collapse(op)?;
        self.operator = None;
        debug!(result = %self.current_input, "equals");
        Ok(())
    }

    /// Clear key. Always succeeds.
    pub fn on_clear(&mut self) {
        self.reset();
        debug!("clear");
    }

    /// Dispatches a key to its operation
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.on_digit(char::from(b'0'.saturating_add(d))),
            Key::Decimal => self.on_decimal(),
            Key::Operator(op) => self.on_operator(op),
            Key::Equals => self.on_equals(),
            Key::Clear => {
                self.on_clear();
                Ok(())
            }
        }
    }

    /// Presses every key in order, collecting each outcome
    ///
    /// An error does not stop the sequence; later keys see the state the
    /// error left behind.
    pub fn press_all<I>(&mut self, keys: I) -> PressReport
    where
        I: IntoIterator<Item = Key>,
    {
        let outcomes = keys
            .into_iter()
            .map(|key| {
                let result = self.press(key);
                PressOutcome {
                    key,
                    result,
                    display: self.display().to_string(),
                }
            })
            .collect();
        PressReport { outcomes }
    }

    /// Parses `input` into keys and presses them
    ///
    /// Fails with [`CalcError::InvalidKey`] before any key is pressed if
    /// the text contains a character that is not a key.
    pub fn press_str(&mut self, input: &str) -> CalcResult<PressReport> {
        let keys = parse_keys(input)?;
        Ok(self.press_all(keys))
    }

    // ===== Lifecycle =====

    /// Captures the four state fields
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_input: self.current_input.clone(),
            operator: self.operator,
            operand1: self.operand1,
            is_new_input: self.is_new_input,
        }
    }

    /// Replaces the four state fields with a captured snapshot
    ///
    /// The snapshot is trusted; the configuration is kept.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.current_input = snapshot.current_input;
        self.operator = snapshot.operator;
        self.operand1 = snapshot.operand1;
        self.is_new_input = snapshot.is_new_input;
        debug!(input = %self.current_input, operator = ?self.operator, "restored");
    }

    // ===== Internals =====

    fn check_append(&self) -> CalcResult<()> {
        let len = self.current_input.chars().count();
        if self.config.accepts_append(len) {
            return Ok(());
        }
        let max = self.config.max_input_len.unwrap_or(len);
        trace!(len, max, "input too long");
        Err(CalcError::InputTooLong { len: len + 1, max })
    }

    /// Applies `op` to the left operand and the current text, storing the
    /// formatted result as the new operand text
    fn collapse(&mut self, op: Operator) -> CalcResult<f64> {
        let operand2 = self.parse_operand()?;
        let result = op
            .apply(self.operand1, operand2)
            .map_err(|err| self.fail(err))?;

        self.current_input = format_result(result);
        self.is_new_input = true;
        Ok(result)
    }

    fn parse_operand(&mut self) -> CalcResult<f64> {
        match parse_number_with(&self.current_input, &self.config) {
            Ok(value) => Ok(value),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Resets on errors that invalidate the state, then hands the error back
    fn fail(&mut self, err: CalcError) -> CalcError {
        if err.resets_state() {
            warn!(error = %err, "resetting calculator");
            self.reset();
        } else {
            trace!(error = %err, "key press rejected");
        }
        err
    }

    fn reset(&mut self) {
        self.current_input.clear();
        self.operator = None;
        self.operand1 = 0.0;
        self.is_new_input = true;
    }
}
