//! The parsed stylesheet data model.

mod stylesheet;

pub use stylesheet::{PropertyTable, Stylesheet};
