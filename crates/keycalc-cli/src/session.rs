//! Calculator session with optional state-file persistence
//!
//! The engine itself does no I/O. A session restores the last snapshot from
//! the state file on open and writes the current one back on save, so a
//! calculation can continue across invocations.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use keycalc::{CalculatorEngine, Key, PressReport, Snapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Engine plus where its state lives
#[derive(Debug)]
pub struct Session {
    engine: CalculatorEngine,
    state_path: Option<PathBuf>,
}

impl Session {
    /// Opens a session, restoring state from the configured file if present
    pub fn open(config: &CliConfig) -> CliResult<Self> {
        let mut engine = CalculatorEngine::with_config(config.engine.clone());
        if let Some(path) = &config.state_path {
            if let Some(snapshot) = load_snapshot(path)? {
                info!(path = %path.display(), "restoring calculation");
                engine.restore(snapshot);
            }
        }
        Ok(Self {
            engine,
            state_path: config.state_path.clone(),
        })
    }

    /// Presses the keys in `input`
    pub fn run_keys(&mut self, input: &str) -> CliResult<PressReport> {
        Ok(self.engine.press_str(input)?)
    }

    /// Presses already-parsed keys
    pub fn press_all(&mut self, keys: Vec<Key>) -> PressReport {
        self.engine.press_all(keys)
    }

    /// Returns the engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Writes the current snapshot to the state file, if one is configured
    pub fn save(&self) -> CliResult<()> {
        match &self.state_path {
            Some(path) => save_snapshot(path, &self.engine.snapshot()),
            None => Ok(()),
        }
    }
}

/// Reads a snapshot; a missing file yields `None`
pub fn load_snapshot(path: &Path) -> CliResult<Option<Snapshot>> {
    if !path.exists() {
        debug!(path = %path.display(), "no state file");
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&json).map_err(|e| {
        CliError::state(format!("Failed to parse {}: {e}", path.display()))
    })?;
    Ok(Some(snapshot))
}

/// Writes a snapshot, creating parent directories as needed
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> CliResult<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| CliError::state(format!("Failed to serialize state: {e}")))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;
    debug!(path = %path.display(), "state saved");
    Ok(())
}
