use std::fmt::Debug;

use tracing::trace;

use crate::availability::Availability;
use crate::part::Part;
use crate::selection::Selection;

pub trait PartCriterion: Debug {
    fn matches(&self, part: &Part) -> bool;
}

/// Case-insensitive substring match against the mpn, manufacturer and description.
#[derive(Debug)]
pub struct TextCriterion {
    needle: String,
}

impl TextCriterion {
    /// Returns `None` for a query that is empty after trimming, such a query matches everything.
    pub fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        Some(Self {
            needle,
        })
    }
}

impl PartCriterion for TextCriterion {
    fn matches(&self, part: &Part) -> bool {
        [&part.mpn, &part.manufacturer, &part.description]
            .iter()
            .any(|haystack| {
                haystack
                    .to_lowercase()
                    .contains(self.needle.as_str())
            })
    }
}

/// Exact, case-sensitive, manufacturer membership.
#[derive(Debug)]
pub struct ManufacturerCriterion<'a> {
    manufacturers: &'a Selection<String>,
}

impl PartCriterion for ManufacturerCriterion<'_> {
    fn matches(&self, part: &Part) -> bool {
        self.manufacturers
            .contains(&part.manufacturer)
    }
}

/// Passes if any of the selected availability classes matches.
#[derive(Debug)]
pub struct AvailabilityCriterion<'a> {
    availability: &'a Selection<Availability>,
}

impl PartCriterion for AvailabilityCriterion<'_> {
    fn matches(&self, part: &Part) -> bool {
        self.availability
            .iter()
            .any(|availability| availability.matches(part))
    }
}

/// The current search; free-text query plus facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PartFilter {
    pub query: String,
    pub manufacturers: Selection<String>,
    pub availability: Selection<Availability>,
}

impl PartFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_manufacturers<'a>(mut self, manufacturers: impl IntoIterator<Item = &'a str>) -> Self {
        self.manufacturers = manufacturers
            .into_iter()
            .map(str::to_string)
            .collect();
        self
    }

    pub fn with_availability(mut self, availability: impl IntoIterator<Item = Availability>) -> Self {
        self.availability = availability.into_iter().collect();
        self
    }

    /// The criteria for the enabled stages only, an empty query or selection disables its stage.
    pub fn criteria(&self) -> Vec<Box<dyn PartCriterion + '_>> {
        let mut criteria: Vec<Box<dyn PartCriterion + '_>> = vec![];

        if let Some(text) = TextCriterion::new(&self.query) {
            criteria.push(Box::new(text));
        }
        if !self.manufacturers.is_empty() {
            criteria.push(Box::new(ManufacturerCriterion {
                manufacturers: &self.manufacturers,
            }));
        }
        if !self.availability.is_empty() {
            criteria.push(Box::new(AvailabilityCriterion {
                availability: &self.availability,
            }));
        }

        criteria
    }

    /// The parts that pass every enabled stage, in their original order.
    pub fn apply<'p>(&self, parts: impl IntoIterator<Item = &'p Part>) -> Vec<&'p Part> {
        let criteria = self.criteria();
        trace!("applying filter. filter: {:?}, criteria: {:?}", self, criteria);

        parts
            .into_iter()
            .filter(|part| {
                criteria
                    .iter()
                    .all(|criterion| criterion.matches(part))
            })
            .collect()
    }

    /// Reset the query and both selections.
    pub fn clear(&mut self) {
        self.query.clear();
        self.manufacturers.clear();
        self.availability.clear();
    }
}
