//! # Product Catalog
//!
//! Base unit prices and quantity-discount tiers.
//!
//! ## Catalog
//! ```text
//! ┌──────────────┬────────────┬──────────────────────────────────────────┐
//! │ Product      │ Unit price │ Quantity discount (strict ">")           │
//! ├──────────────┼────────────┼──────────────────────────────────────────┤
//! │ diesel       │   R$3.99   │ qty > 1000 → ×0.90, qty > 500 → ×0.95    │
//! │ gasolina     │   R$5.19   │ qty > 200  → −R$100.00                   │
//! │ etanol       │   R$3.59   │ qty > 80   → ×0.97                       │
//! │ lubrificante │  R$25.00   │ none                                     │
//! └──────────────┴────────────┴──────────────────────────────────────────┘
//! ```
//!
//! A quantity exactly on a threshold gets no discount from that tier.

use crate::money::{Money, PriceFactor};
use crate::types::Product;

// =============================================================================
// Adjustment
// =============================================================================

/// A price adjustment: either a multiplier or a fixed subtraction.
///
/// Shared by quantity discounts and coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Price passes through untouched.
    Unchanged,
    /// Price is multiplied by the factor.
    Scale(PriceFactor),
    /// A fixed amount is subtracted.
    Subtract(Money),
}

impl Adjustment {
    /// Applies the adjustment to a price.
    pub fn apply(&self, price: Money) -> Money {
        match *self {
            Adjustment::Unchanged => price,
            Adjustment::Scale(factor) => price.scale(factor),
            Adjustment::Subtract(amount) => price - amount,
        }
    }
}

// =============================================================================
// Prices and Tiers
// =============================================================================

impl Product {
    /// Catalog unit price.
    pub fn base_price(&self) -> Money {
        match self {
            Product::Diesel => Money::from_cents(399),
            Product::Gasolina => Money::from_cents(519),
            Product::Etanol => Money::from_cents(359),
            Product::Lubrificante => Money::from_cents(2500),
        }
    }

    /// The quantity discount earned by ordering `quantity` units.
    pub fn quantity_discount(&self, quantity: i64) -> Adjustment {
        match self {
            Product::Diesel if quantity > 1000 => Adjustment::Scale(PriceFactor::from_bps(9000)),
            Product::Diesel if quantity > 500 => Adjustment::Scale(PriceFactor::from_bps(9500)),
            Product::Gasolina if quantity > 200 => Adjustment::Subtract(Money::from_cents(10_000)),
            Product::Etanol if quantity > 80 => Adjustment::Scale(PriceFactor::from_bps(9700)),
            _ => Adjustment::Unchanged,
        }
    }
}

/// Looks up the unit price for a product identifier.
pub fn base_price(product: &str) -> Option<Money> {
    Product::from_id(product).map(|p| p.base_price())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prices() {
        assert_eq!(base_price("diesel"), Some(Money::from_cents(399)));
        assert_eq!(base_price("gasolina"), Some(Money::from_cents(519)));
        assert_eq!(base_price("etanol"), Some(Money::from_cents(359)));
        assert_eq!(base_price("lubrificante"), Some(Money::from_cents(2500)));
        assert_eq!(base_price("agua"), None);
    }

    #[test]
    fn test_diesel_tiers_are_strict() {
        let d = Product::Diesel;
        assert_eq!(d.quantity_discount(500), Adjustment::Unchanged);
        assert_eq!(
            d.quantity_discount(501),
            Adjustment::Scale(PriceFactor::from_bps(9500))
        );
        assert_eq!(
            d.quantity_discount(1000),
            Adjustment::Scale(PriceFactor::from_bps(9500))
        );
        assert_eq!(
            d.quantity_discount(1001),
            Adjustment::Scale(PriceFactor::from_bps(9000))
        );
    }

    #[test]
    fn test_other_tiers() {
        assert_eq!(Product::Gasolina.quantity_discount(200), Adjustment::Unchanged);
        assert_eq!(
            Product::Gasolina.quantity_discount(201),
            Adjustment::Subtract(Money::from_cents(10_000))
        );
        assert_eq!(Product::Etanol.quantity_discount(80), Adjustment::Unchanged);
        assert_eq!(
            Product::Etanol.quantity_discount(81),
            Adjustment::Scale(PriceFactor::from_bps(9700))
        );
        assert_eq!(
            Product::Lubrificante.quantity_discount(10_000),
            Adjustment::Unchanged
        );
    }

    #[test]
    fn test_adjustment_apply() {
        let price = Money::from_cents(5000);
        assert_eq!(Adjustment::Unchanged.apply(price), price);
        assert_eq!(
            Adjustment::Subtract(Money::from_cents(200)).apply(price),
            Money::from_cents(4800)
        );
        assert_eq!(
            Adjustment::Scale(PriceFactor::from_bps(9000)).apply(price),
            Money::from_cents(4500)
        );
    }
}
