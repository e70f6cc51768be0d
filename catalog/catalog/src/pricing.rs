use rust_decimal::Decimal;

use crate::part::Part;

/// The number of tiers shown alongside a part in a result listing.
pub const DISPLAYED_TIERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PricingTier {
    pub min_qty: u32,
    pub price: Decimal,
}

impl PricingTier {
    pub fn new(min_qty: u32, price: Decimal) -> Self {
        Self {
            min_qty,
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum PriceDisplay {
    RequestQuote,
    Tiers(Vec<PricingTier>),
}

impl PriceDisplay {
    pub fn for_part(part: &Part) -> Self {
        if part.price <= Decimal::ZERO {
            return PriceDisplay::RequestQuote;
        }

        PriceDisplay::Tiers(
            part.pricing_tiers
                .iter()
                .take(DISPLAYED_TIERS)
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::part::PartStatus;

    #[test]
    fn zero_price_is_quoted_on_request() {
        // given
        let part = Part::new("1", "LM317", "TI")
            .with_stock(0, PartStatus::Rfq)
            .with_pricing_tiers(vec![PricingTier::new(1, dec!(0.50))]);

        // then
        assert_eq!(PriceDisplay::for_part(&part), PriceDisplay::RequestQuote);
    }

    #[test]
    fn first_two_tiers_are_displayed() {
        // given
        let part = Part::new("1", "LM317", "TI")
            .with_price(dec!(0.50), "USD")
            .with_pricing_tiers(vec![
                PricingTier::new(1, dec!(0.50)),
                PricingTier::new(10, dec!(0.45)),
                PricingTier::new(100, dec!(0.40)),
            ]);

        // when
        let display = PriceDisplay::for_part(&part);

        // then
        assert_eq!(
            display,
            PriceDisplay::Tiers(vec![PricingTier::new(1, dec!(0.50)), PricingTier::new(10, dec!(0.45))])
        );
    }

    #[test]
    fn priced_part_without_tiers() {
        // given
        let part = Part::new("1", "LM317", "TI").with_price(dec!(0.50), "USD");

        // then
        assert_eq!(PriceDisplay::for_part(&part), PriceDisplay::Tiers(vec![]));
    }
}
