use strum_macros::{Display, EnumIter, EnumString};

use crate::part::{Part, PartStatus};

/// Availability classes, selectable as a facet.
///
/// Declaration order is the display order of the facet.
#[derive(Debug, Clone, Copy)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Availability {
    #[strum(serialize = "In Stock")]
    #[serde(rename = "In Stock")]
    InStock,
    #[strum(serialize = "Lead Time")]
    #[serde(rename = "Lead Time")]
    LeadTime,
    #[strum(serialize = "Obsolete")]
    Obsolete,
}

impl Availability {
    /// The translation key of the facet label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::LeadTime => "lead-time",
            Availability::Obsolete => "obsolete",
        }
    }

    /// Classify a part.
    ///
    /// The classes overlap and do not cover every (stock, status) combination. `LeadTime` deliberately
    /// includes any part with no stock that is not obsolete, whatever its declared status.
    pub fn matches(&self, part: &Part) -> bool {
        match self {
            Availability::InStock => part.stock > 0,
            Availability::Obsolete => part.status == PartStatus::Obsolete,
            Availability::LeadTime => {
                part.status == PartStatus::LeadTime || (part.stock == 0 && part.status != PartStatus::Obsolete)
            }
        }
    }
}
