use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::{anyhow, Context, Error};
use catalog::part::{Part, PartStatus};
use catalog::pricing::PricingTier;
use rust_decimal::Decimal;

const LIST_SEPARATOR: char = ';';
const PAIR_SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartRecord {
    pub id: String,
    pub mpn: String,
    pub manufacturer: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub stock: u32,
    /// e.g. '4.50', empty or zero when quoted on request.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub rohs: bool,
    #[serde(default)]
    pub datasheet_url: Option<String>,
    /// e.g. '1=4.50;10=4.10;100=3.80'
    #[serde(default)]
    pub pricing_tiers: String,
    /// e.g. 'Core=ARM Cortex-M4;Flash=1MB'
    #[serde(default)]
    pub specs: String,
}

impl PartRecord {
    pub fn build_part(&self) -> Result<Part, Error> {
        if self.id.trim().is_empty() {
            return Err(anyhow!("Part id is empty"));
        }

        let status = PartStatus::from_str(self.status.trim())
            .map_err(|_| anyhow!("Unknown part status. status: '{}'", self.status))?;

        let price = match self.price.trim() {
            "" => Decimal::ZERO,
            price => Decimal::from_str(price).with_context(|| format!("Invalid price. price: '{}'", price))?,
        };

        let currency = match self.currency.trim() {
            "" => "USD",
            currency => currency,
        };

        let mut part = Part::new(self.id.as_str(), self.mpn.as_str(), self.manufacturer.as_str())
            .with_description(self.description.as_str())
            .with_category(self.category.as_str())
            .with_stock(self.stock, status)
            .with_price(price, currency)
            .with_pricing_tiers(parse_pricing_tiers(&self.pricing_tiers)?)
            .with_rohs(self.rohs);

        for (name, value) in parse_pairs(&self.specs)? {
            part = part.with_spec(name, value);
        }

        if let Some(url) = self
            .datasheet_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
        {
            part = part.with_datasheet_url(url.trim());
        }

        Ok(part)
    }

    /// Fails for specs that cannot be written as '<name>=<value>' list entries.
    pub fn from_part(part: &Part) -> Result<Self, Error> {
        let pricing_tiers = part
            .pricing_tiers
            .iter()
            .map(|tier| format!("{}{}{}", tier.min_qty, PAIR_SEPARATOR, tier.price))
            .collect::<Vec<_>>()
            .join(&LIST_SEPARATOR.to_string());

        let specs = part
            .specs
            .iter()
            .map(|(name, value)| {
                if name.contains([LIST_SEPARATOR, PAIR_SEPARATOR]) {
                    return Err(anyhow!(
                        "Spec name contains a separator. part: {}, name: '{}', separators: '{}{}'",
                        part.id,
                        name,
                        LIST_SEPARATOR,
                        PAIR_SEPARATOR
                    ));
                }
                if value.contains(LIST_SEPARATOR) {
                    return Err(anyhow!(
                        "Spec value contains a separator. part: {}, name: '{}', value: '{}', separator: '{}'",
                        part.id,
                        name,
                        value,
                        LIST_SEPARATOR
                    ));
                }
                Ok(format!("{}{}{}", name, PAIR_SEPARATOR, value))
            })
            .collect::<Result<Vec<_>, Error>>()?
            .join(&LIST_SEPARATOR.to_string());

        Ok(Self {
            id: part.id.to_string(),
            mpn: part.mpn.clone(),
            manufacturer: part.manufacturer.clone(),
            description: part.description.clone(),
            category: part.category.clone(),
            stock: part.stock,
            price: part.price.to_string(),
            currency: part.currency.clone(),
            status: part.status.to_string(),
            rohs: part.rohs,
            datasheet_url: part.datasheet_url.clone(),
            pricing_tiers,
            specs,
        })
    }
}

/// Parse '<name>=<value>' pairs, separated by ';', empty chunks are ignored.
fn parse_pairs(value: &str) -> Result<BTreeMap<String, String>, Error> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .split_once(PAIR_SEPARATOR)
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| anyhow!("Invalid pair. Required format: '<NAME>=<VALUE>', found: '{}'", chunk))
        })
        .collect()
}

fn parse_pricing_tiers(value: &str) -> Result<Vec<PricingTier>, Error> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let (min_qty, price) = chunk.split_once(PAIR_SEPARATOR).ok_or_else(|| {
                anyhow!(
                    "Invalid pricing tier. Required format: '<MIN_QTY>=<PRICE>', found: '{}'",
                    chunk
                )
            })?;

            let min_qty = min_qty
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid pricing tier quantity. tier: '{}'", chunk))?;
            let price = Decimal::from_str(price.trim())
                .with_context(|| format!("Invalid pricing tier price. tier: '{}'", chunk))?;

            Ok(PricingTier::new(min_qty, price))
        })
        .collect()
}
