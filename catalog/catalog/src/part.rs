use std::collections::BTreeMap;
use std::fmt::Formatter;

use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter, EnumString};

use crate::pricing::PricingTier;

#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PartId(String);

impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for PartId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The declared status of a part.
///
/// Note: the status can be inconsistent with the stock quantity, e.g. `Obsolete` with stock on hand.
#[derive(Debug, Clone, Copy)]
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Display, EnumString, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum PartStatus {
    #[strum(serialize = "In Stock")]
    #[serde(rename = "In Stock")]
    InStock,
    #[strum(serialize = "Low Stock")]
    #[serde(rename = "Low Stock")]
    LowStock,
    #[strum(serialize = "Obsolete")]
    Obsolete,
    #[strum(serialize = "Lead Time")]
    #[serde(rename = "Lead Time")]
    LeadTime,
    #[strum(serialize = "RFQ")]
    #[serde(rename = "RFQ")]
    Rfq,
}

#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Part {
    pub id: PartId,
    /// Manufacturer part number
    pub mpn: String,
    pub manufacturer: String,
    pub description: String,
    pub category: String,
    pub stock: u32,
    /// Base price, zero when the part is quoted on request.
    pub price: Decimal,
    pub currency: String,
    /// Volume pricing, ascending by `min_qty` by convention.
    pub pricing_tiers: Vec<PricingTier>,
    pub specs: BTreeMap<String, String>,
    pub datasheet_url: Option<String>,
    pub status: PartStatus,
    pub rohs: bool,
}

impl Part {
    pub fn new(id: impl Into<String>, mpn: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            id: PartId::new(id),
            mpn: mpn.into(),
            manufacturer: manufacturer.into(),
            description: String::new(),
            category: String::new(),
            stock: 0,
            price: Decimal::ZERO,
            currency: "USD".to_string(),
            pricing_tiers: vec![],
            specs: BTreeMap::new(),
            datasheet_url: None,
            status: PartStatus::Rfq,
            rohs: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_stock(mut self, stock: u32, status: PartStatus) -> Self {
        self.stock = stock;
        self.status = status;
        self
    }

    pub fn with_price(mut self, price: Decimal, currency: impl Into<String>) -> Self {
        self.price = price;
        self.currency = currency.into();
        self
    }

    pub fn with_pricing_tiers(mut self, pricing_tiers: Vec<PricingTier>) -> Self {
        self.pricing_tiers = pricing_tiers;
        self
    }

    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specs.insert(name.into(), value.into());
        self
    }

    pub fn with_datasheet_url(mut self, url: impl Into<String>) -> Self {
        self.datasheet_url = Some(url.into());
        self
    }

    pub fn with_rohs(mut self, rohs: bool) -> Self {
        self.rohs = rohs;
        self
    }
}

#[cfg(feature = "testing")]
impl Default for Part {
    fn default() -> Self {
        Part::new("default-id", "Default MPN", "Default Manufacturer")
    }
}
