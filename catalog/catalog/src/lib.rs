//! The part catalog, and the search/filter engine over it.
//!
//! The catalog is loaded once and never mutated, everything here is a pure function of it.

pub mod availability;
pub mod catalog;
pub mod facets;
pub mod filter;
pub mod part;
pub mod pricing;
pub mod selection;

pub use crate::catalog::{Catalog, CatalogError};
