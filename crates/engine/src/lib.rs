// crates/engine/src/lib.rs
//! Aggregate queries over per-year name frequency records.
//!
//! Records are loaded once with [`loader::load_records`] and then queried
//! through the pure functions in [`query`] and [`series`].

pub mod config;
pub mod error;
pub mod loader;
pub mod options;
pub mod query;
pub mod record;
pub mod series;

pub use crate::config::{LoadOptions, LoadOptionsBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::loader::{load_records, read_records};
pub use crate::record::{Gender, Record};
pub use crate::series::{Series, evolution_series, rank_names, top_names_series};
