//! Data layer for the admin console.
//!
//! Typed models, the embedded mock dataset, and an in-memory query engine
//! (search, filter, sort, paginate) that feeds the list pages.

pub mod error;
pub mod mock;
pub mod model;
pub mod query;
pub mod stats;

pub use error::{Error, Result};
pub use mock::MockData;
