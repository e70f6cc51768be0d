use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::facets;
use crate::filter::PartFilter;
use crate::part::{Part, PartId};

/// An ordered, read-only, collection of parts.
///
/// The manufacturer facet values are computed once, when the catalog is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    parts: IndexMap<PartId, Part>,
    manufacturers: Vec<String>,
}

impl Catalog {
    /// Build a catalog, preserving the order of the given parts.
    pub fn new(parts: Vec<Part>) -> Result<Self, CatalogError> {
        let mut indexed_parts = IndexMap::with_capacity(parts.len());
        for part in parts {
            if indexed_parts.contains_key(&part.id) {
                return Err(CatalogError::DuplicatePartId(part.id));
            }
            indexed_parts.insert(part.id.clone(), part);
        }

        let manufacturers = facets::manufacturers(indexed_parts.values());
        debug!(
            "Built catalog. parts: {}, manufacturers: {}",
            indexed_parts.len(),
            manufacturers.len()
        );

        Ok(Self {
            parts: indexed_parts,
            manufacturers,
        })
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Distinct manufacturers across the whole catalog, sorted ascending.
    pub fn manufacturers(&self) -> &[String] {
        &self.manufacturers
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn search(&self, filter: &PartFilter) -> Vec<&Part> {
        filter.apply(self.parts.values())
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate part id. id: {0}")]
    DuplicatePartId(PartId),
}
