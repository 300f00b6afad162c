//! Club registry, player lifecycle, and bulk merge for Clubroll.
//!
//! This crate provides:
//! - [`Club`] and [`Player`] - The two entities
//! - [`Roster`] - The club registry and sole owner of all players
//! - [`MergePolicy`] - Which patch values count as provided
//! - [`BulkMerger`] - Ordered application of player records
//! - [`RemoteStore`] - Optional per-club document store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bulk;
pub mod club;
pub mod lifecycle;
pub mod locator;
pub mod player;
pub mod policy;
pub mod remote;
pub mod roster;

pub use bulk::{BulkMerger, MergeReport};
pub use club::Club;
pub use locator::Located;
pub use player::Player;
pub use policy::MergePolicy;
pub use remote::{MemoryStore, RemoteStore};
pub use roster::Roster;
