//! Snapshots, CSV import, commands, REPL, and CLI for Clubroll.
//!
//! This crate provides:
//! - [`snapshot`] - JSON persistence of a whole roster
//! - [`import`] - Player records from CSV
//! - [`Command`] - The line-oriented command surface
//! - [`Session`] - Command execution with save-after-mutation
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`Cli`] - Command-line flags for one-shot use

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod command;
pub mod config;
pub mod editor;
pub mod format;
pub mod import;
pub mod logging;
pub mod repl;
pub mod session;
pub mod snapshot;

pub use cli::Cli;
pub use command::{Action, Command, Resource};
pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
pub use session::{Outcome, Session};
pub use snapshot::{JsonFileStore, SnapshotStore};
