//! Integration tests for Layer 1: Storage
//!
//! Tests for the club registry, player lifecycle, bulk merge, and the
//! remote-store contract.

mod bulk;
mod lifecycle;
mod remote;
mod scenarios;
