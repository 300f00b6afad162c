//! Integration tests for Layer 0: Foundation
//!
//! Tests for locations and the error taxonomy.

mod errors;
