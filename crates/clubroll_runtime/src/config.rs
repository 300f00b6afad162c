//! Runtime configuration.

use std::path::{Path, PathBuf};

/// Default snapshot file name.
pub const DEFAULT_DATA_PATH: &str = "clubs.json";

/// Configuration for a command session.
///
/// Controls where the roster is persisted and when it is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Snapshot file location.
    pub data_path: PathBuf,

    /// Write the snapshot after every successful mutation.
    pub save_on_mutation: bool,

    /// Emit debug-level logs.
    pub verbose: bool,

    /// Treat a missing snapshot file as an empty roster.
    pub create_missing_snapshot: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            save_on_mutation: true,
            verbose: false,
            create_missing_snapshot: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration persisting to the given file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Self::default()
        }
    }

    /// Creates a configuration that never writes to disk.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            save_on_mutation: false,
            ..Self::default()
        }
    }

    /// Builder method to set the snapshot file.
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Builder method to enable/disable saving after mutations.
    #[must_use]
    pub fn with_save_on_mutation(mut self, save: bool) -> Self {
        self.save_on_mutation = save;
        self
    }

    /// Builder method to enable/disable debug logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder method to allow/forbid a missing snapshot file.
    #[must_use]
    pub fn with_create_missing_snapshot(mut self, create: bool) -> Self {
        self.create_missing_snapshot = create;
        self
    }

    /// Returns the snapshot file location.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Returns the default log filter directive for this configuration.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
