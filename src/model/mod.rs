//! Request-scoped data carriers and the value-conversion seam.
//!
//! # Modules
//!
//! - [`wrapper`] - The mutable request envelope and the read-mostly decision model
//! - [`converter`] - Extension seam for entity/model value conversion

pub mod converter;
pub mod wrapper;

pub use converter::{DefaultConverter, ValueConverter};
pub use wrapper::{DataModel, DataWrapper};
