//! # Price Calculator
//!
//! Maps (product, quantity) to a quantity-discounted base price.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_price("etanol", 100)                                        │
//! │       │                                                                 │
//! │       ├── not in catalog? → warn + R$0.00                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base_price × quantity          R$3.59 × 100 = R$359.00                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quantity discount              qty > 80 → ×0.97 = R$348.2300          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round to 2 decimals            R$348.23                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::money::Money;
use crate::types::Product;

/// Computes the quantity-discounted price of an order line.
///
/// This is the seam the order processor calls through, so alternative
/// pricing sources can be substituted.
pub trait PriceCalculator {
    /// Returns the price for `quantity` units of `product`, or zero for an
    /// unknown product.
    fn calculate_price(&self, product: &str, quantity: i64) -> Money;
}

/// Prices orders from the fixed PetroBahia catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogCalculator;

impl PriceCalculator for CatalogCalculator {
    fn calculate_price(&self, product: &str, quantity: i64) -> Money {
        calculate_price(product, quantity)
    }
}

/// Calculates the catalog price with quantity discount, rounded to cents.
///
/// ## Example
/// ```rust
/// use petro_core::pricing::calculate_price;
/// use petro_core::money::Money;
///
/// assert_eq!(calculate_price("diesel", 1200), Money::from_cents(430_920));
/// assert_eq!(calculate_price("agua", 10), Money::zero());
/// ```
pub fn calculate_price(product: &str, quantity: i64) -> Money {
    let Some(known) = Product::from_id(product) else {
        warn!(product, "Unknown product, pricing as zero");
        return Money::zero();
    };

    let gross = known.base_price().multiply_quantity(quantity);
    let discounted = known.quantity_discount(quantity).apply(gross);
    let price = discounted.round_dp(2);

    debug!(
        product,
        quantity,
        gross = %gross.amount(),
        price = %price.amount(),
        "Quantity price calculated"
    );
    price
}

// =============================================================================
// Unit Tests
// =============================================================================
