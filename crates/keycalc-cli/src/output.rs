//! Output rendering

use keycalc::{parse_number_with, CalcError, CalculatorEngine, PressReport};
use serde::Serialize;

/// Text shown in place of the display after a reset-class error
pub const ERROR_DISPLAY: &str = "Error";

/// Display line for the end of a key sequence
///
/// When the last key caused a reset the engine already shows `0`; the
/// front-end shows `Error` for that one frame instead.
#[must_use]
pub fn display_line(report: &PressReport, engine: &CalculatorEngine) -> String {
    match report.outcomes.last() {
        Some(outcome) if outcome.result.as_ref().is_err_and(|e| e.resets_state()) => {
            ERROR_DISPLAY.to_string()
        }
        _ => engine.display().to_string(),
    }
}

/// One line per key: `key -> display`
#[must_use]
pub fn render_trace(report: &PressReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let shown = match &outcome.result {
            Ok(()) => outcome.display.clone(),
            Err(e) if e.resets_state() => ERROR_DISPLAY.to_string(),
            Err(e) => format!("{} ({})", outcome.display, e.label()),
        };
        out.push_str(&format!("{} -> {}\n", outcome.key.label(), shown));
    }
    out
}

/// Warning lines for every error in the report
///
/// When a result is too long to be used as an operand, a final line says
/// that only Clear (or a fresh number) gets past it.
#[must_use]
pub fn render_warnings(report: &PressReport, engine: &CalculatorEngine) -> Vec<String> {
    let mut lines: Vec<String> = report
        .errors()
        .map(|e| format!("warning: {}: {e}", e.label()))
        .collect();

    let rejected_long = report
        .errors()
        .any(|e| matches!(e, CalcError::InputTooLong { .. }));
    if rejected_long && result_too_long(engine) {
        lines.push(format!(
            "hint: {} is too long to calculate with, press C to clear",
            engine.display()
        ));
    }
    lines
}

fn result_too_long(engine: &CalculatorEngine) -> bool {
    engine.is_new_input()
        && matches!(
            parse_number_with(engine.current_input(), engine.config()),
            Err(CalcError::InputTooLong { .. })
        )
}

/// JSON shape of an eval result
#[derive(Debug, Serialize)]
pub struct EvalOutput {
    /// Display line
    pub display: String,
    /// Pending left operand and operator
    pub expression: String,
    /// Messages for every rejected or failed key
    pub errors: Vec<String>,
}

impl EvalOutput {
    /// Builds the output from a finished key sequence
    #[must_use]
    pub fn new(report: &PressReport, engine: &CalculatorEngine) -> Self {
        Self {
            display: display_line(report, engine),
            expression: engine.expression(),
            errors: report.errors().map(ToString::to_string).collect(),
        }
    }

    /// Serializes to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(keys: &str) -> (PressReport, CalculatorEngine) {
        let mut engine = CalculatorEngine::new();
        let report = engine.press_str(keys).unwrap();
        (report, engine)
    }

    #[test]
    fn test_display_line_normal() {
        let (report, engine) = run("2+3=");
        assert_eq!(display_line(&report, &engine), "5");
    }

    #[test]
    fn test_display_line_error() {
        let (report, engine) = run("5/0=");
        assert_eq!(display_line(&report, &engine), "Error");
    }

    #[test]
    fn test_display_line_after_recovery() {
        let (report, engine) = run("5/0=7");
        assert_eq!(display_line(&report, &engine), "7");
    }

    #[test]
    fn test_display_line_empty_report() {
        let (report, engine) = run("");
        assert_eq!(display_line(&report, &engine), "0");
    }

    #[test]
    fn test_render_trace() {
        let (report, _) = run("9/0=");
        assert_eq!(render_trace(&report), "9 -> 9\n÷ -> 9\n0 -> 0\n= -> Error\n");
    }

    #[test]
    fn test_render_trace_rejected_key() {
        let (report, _) = run("12345678901");
        let last = render_trace(&report).lines().last().unwrap().to_string();
        assert_eq!(last, "1 -> 1234567890 (Number too long)");
    }

    #[test]
    fn test_render_warnings() {
        let (report, engine) = run("5/0=");
        let warnings = render_warnings(&report, &engine);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot divide by zero"));
    }

    #[test]
    fn test_render_warnings_long_result_hints_clear() {
        let (report, engine) = run("9999999999*9999999999=+");
        let warnings = render_warnings(&report, &engine);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Number too long"));
        assert_eq!(
            warnings[1],
            "hint: 99999999980000000000 is too long to calculate with, press C to clear"
        );
    }

    #[test]
    fn test_render_warnings_long_typing_has_no_hint() {
        let (report, engine) = run("12345678901");
        let warnings = render_warnings(&report, &engine);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Number too long"));
    }

    #[test]
    fn test_eval_output_json() {
        let (report, engine) = run("12+");
        let json = EvalOutput::new(&report, &engine).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "12");
        assert_eq!(value["expression"], "12 +");
        assert_eq!(value["errors"].as_array().unwrap().len(), 0);
    }
}
