//! Clubroll - Club and player roster engine
//!
//! This crate re-exports all layers of the Clubroll system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: clubroll_runtime    — Snapshots, CSV import, commands, REPL, CLI
//! Layer 1: clubroll_storage    — Roster, player lifecycle, bulk merge, remote store
//! Layer 0: clubroll_foundation — Core types (Location, Error)
//! ```

pub use clubroll_foundation as foundation;
pub use clubroll_runtime as runtime;
pub use clubroll_storage as storage;
