//! # Rounding Policy
//!
//! Product-specific final rounding.
//!
//! ```text
//! diesel        → nearest integer      3878.51 → 3879
//! gasolina      → nearest cent         1457.996 → 1458.00
//! anything else → truncate to cents    170.525 → 170.52
//! ```
//!
//! The default branch truncates; it is not the same rule as gasolina's.

use crate::money::Money;
use crate::types::Product;

/// How a final price is brought to its charged precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingPolicy {
    /// Round to 0 decimal places.
    NearestInteger,
    /// Round to 2 decimal places.
    NearestCent,
    /// Drop every digit past the second decimal.
    TruncateCent,
}

impl RoundingPolicy {
    /// Selects the policy for a product identifier.
    pub fn for_product(product: &str) -> Self {
        match Product::from_id(product) {
            Some(Product::Diesel) => RoundingPolicy::NearestInteger,
            Some(Product::Gasolina) => RoundingPolicy::NearestCent,
            Some(Product::Etanol) | Some(Product::Lubrificante) | None => {
                RoundingPolicy::TruncateCent
            }
        }
    }

    pub fn apply(&self, price: Money) -> Money {
        match self {
            RoundingPolicy::NearestInteger => price.round_dp(0),
            RoundingPolicy::NearestCent => price.round_dp(2),
            RoundingPolicy::TruncateCent => price.truncate_dp(2),
        }
    }
}

/// Rounds a final price according to the product's policy.
pub fn round_final(price: Money, product: &str) -> Money {
    RoundingPolicy::for_product(product).apply(price)
}
