//! CLI configuration

use crate::error::{CliError, CliResult};
use keycalc::EngineConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings about rejected keys
    #[default]
    Normal,
    /// Verbose - engine transitions
    Verbose,
    /// Debug - everything
    Debug,
}

impl Verbosity {
    /// Derive from the `-v` count and `--quiet` flag
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "keycalc=debug,keycalc_cli=debug,warn",
            Self::Debug => "trace",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Engine limits and normalization
    pub engine: EngineConfig,
    /// Where to persist the in-progress calculation
    pub state_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set engine configuration
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Set state file path
    #[must_use]
    pub fn with_state_path(mut self, path: Option<PathBuf>) -> Self {
        self.state_path = path;
        self
    }
}

/// Loads an engine configuration from a YAML file
///
/// Missing fields take their defaults.
pub fn load_engine_config(path: &Path) -> CliResult<EngineConfig> {
    let yaml = fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_engine_config(&yaml)
        .map_err(|e| CliError::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Parses an engine configuration from YAML text
pub fn parse_engine_config(yaml: &str) -> Result<EngineConfig, serde_yaml_ng::Error> {
    if yaml.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    serde_yaml_ng::from_str(yaml)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use keycalc::TrailingDecimal;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
        assert!(Verbosity::Quiet.is_quiet());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(Verbosity::Normal.filter_directive(), "warn");
        assert!(Verbosity::Verbose.filter_directive().contains("keycalc=debug"));
    }

    #[test]
    fn test_cli_config_builders() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_engine(EngineConfig::unbounded())
            .with_state_path(Some(PathBuf::from("calc.json")));
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.engine.max_input_len, None);
        assert_eq!(config.state_path, Some(PathBuf::from("calc.json")));
    }

    #[test]
    fn test_parse_engine_config_yaml() {
        let config =
            parse_engine_config("max_input_len: 6\ntrailing_decimal: pad_zero\n").unwrap();
        assert_eq!(config.max_input_len, Some(6));
        assert_eq!(config.parse_tolerance, 2);
        assert_eq!(config.trailing_decimal, TrailingDecimal::PadZero);
    }

    #[test]
    fn test_parse_engine_config_unbounded() {
        let config = parse_engine_config("max_input_len: null\n").unwrap();
        assert_eq!(config.max_input_len, None);
    }

    #[test]
    fn test_parse_empty_yaml_is_default() {
        assert_eq!(parse_engine_config("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse_engine_config("trailing_decimal: sideways\n").is_err());
    }

    #[test]
    fn test_load_engine_config_missing_file() {
        let err = load_engine_config(Path::new("/nonexistent/keycalc.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_load_engine_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keycalc.yaml");
        fs::write(&path, "max_input_len: 4\n").unwrap();
        assert_eq!(load_engine_config(&path).unwrap().max_input_len, Some(4));
    }
}
