//! Core value types and errors for Clubroll.
//!
//! This crate provides:
//! - [`Location`] - 2D map coordinates for clubs and players
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod location;

pub use error::{Error, ErrorContext, ErrorKind, Subject};
pub use location::Location;

/// Result type for Clubroll operations.
pub type Result<T> = std::result::Result<T, Error>;
