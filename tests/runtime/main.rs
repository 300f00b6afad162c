//! Integration tests for Layer 2: Runtime
//!
//! Tests for snapshots on disk, CSV import, and end-to-end sessions.

mod repl;
mod session;
mod snapshot;
