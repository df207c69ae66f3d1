//! Engine configuration

use serde::{Deserialize, Serialize};

/// How a trailing decimal separator is normalized before parsing
///
/// Both variants parse to the same value; they differ only in the
/// intermediate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingDecimal {
    /// `"5."` becomes `"5"`
    #[default]
    Strip,
    /// `"5."` becomes `"5.0"`
    PadZero,
}

/// Calculator engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum operand length while typing (`None` = unbounded)
    pub max_input_len: Option<usize>,
    /// Extra characters tolerated when parsing, for sign and separator
    pub parse_tolerance: usize,
    /// Trailing separator normalization
    pub trailing_decimal: TrailingDecimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: Some(Self::DEFAULT_MAX_INPUT_LEN),
            parse_tolerance: Self::DEFAULT_PARSE_TOLERANCE,
            trailing_decimal: TrailingDecimal::Strip,
        }
    }
}

impl EngineConfig {
    /// Default operand length limit
    pub const DEFAULT_MAX_INPUT_LEN: usize = 10;
    /// Default parse tolerance (sign plus separator)
    pub const DEFAULT_PARSE_TOLERANCE: usize = 2;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no length limits
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_input_len: None,
            parse_tolerance: Self::DEFAULT_PARSE_TOLERANCE,
            trailing_decimal: TrailingDecimal::Strip,
        }
    }

    /// Set the operand length limit
    #[must_use]
    pub const fn with_max_input_len(mut self, max: Option<usize>) -> Self {
        self.max_input_len = max;
        self
    }

    /// Set the parse tolerance
    #[must_use]
    pub const fn with_parse_tolerance(mut self, tolerance: usize) -> Self {
        self.parse_tolerance = tolerance;
        self
    }

    /// Set the trailing separator policy
    #[must_use]
    pub const fn with_trailing_decimal(mut self, policy: TrailingDecimal) -> Self {
        self.trailing_decimal = policy;
        self
    }

    /// Longest text accepted by the parser, if bounded
    #[must_use]
    pub const fn max_parse_len(&self) -> Option<usize> {
        match self.max_input_len {
            Some(max) => Some(max + self.parse_tolerance),
            None => None,
        }
    }

    /// Returns true if an operand of `len` characters can still grow
    #[must_use]
    pub const fn accepts_append(&self, len: usize) -> bool {
        match self.max_input_len {
            Some(max) => len < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_input_len, Some(10));
        assert_eq!(config.parse_tolerance, 2);
        assert_eq!(config.trailing_decimal, TrailingDecimal::Strip);
        assert_eq!(config.max_parse_len(), Some(12));
    }

    #[test]
    fn test_unbounded_config() {
        let config = EngineConfig::unbounded();
        assert_eq!(config.max_parse_len(), None);
        assert!(config.accepts_append(10_000));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_max_input_len(Some(4))
            .with_parse_tolerance(0)
            .with_trailing_decimal(TrailingDecimal::PadZero);
        assert_eq!(config.max_input_len, Some(4));
        assert_eq!(config.max_parse_len(), Some(4));
        assert_eq!(config.trailing_decimal, TrailingDecimal::PadZero);
    }

    #[test]
    fn test_accepts_append_boundary() {
        let config = EngineConfig::default();
        assert!(config.accepts_append(9));
        assert!(!config.accepts_append(10));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"trailing_decimal":"pad_zero"}"#).unwrap();
        assert_eq!(config.max_input_len, Some(10));
        assert_eq!(config.trailing_decimal, TrailingDecimal::PadZero);
    }
}
