//! # Coupon Applier
//!
//! Maps (price, coupon, product) to an adjusted price.
//!
//! ## Coupon Table
//! ```text
//! ┌─────────┬──────────────────┬─────────────────────────┐
//! │ Code    │ Discount         │ Restriction             │
//! ├─────────┼──────────────────┼─────────────────────────┤
//! │ MEGA10  │ ×0.90            │ -                       │
//! │ NOVO5   │ ×0.95            │ -                       │
//! │ LUB2    │ −R$2.00          │ lubrificante only       │
//! └─────────┴──────────────────┴─────────────────────────┘
//! ```
//!
//! Unknown codes are ignored silently: no discount and no diagnostic.

use tracing::debug;

use crate::catalog::Adjustment;
use crate::money::{Money, PriceFactor};
use crate::types::Product;

/// A known coupon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupon {
    /// 10% off any product.
    Mega10,
    /// 5% off any product.
    Novo5,
    /// R$2.00 off lubricant orders.
    Lub2,
}

impl Coupon {
    /// Every known coupon.
    pub const ALL: [Coupon; 3] = [Coupon::Mega10, Coupon::Novo5, Coupon::Lub2];

    /// Looks up a coupon by its code (exact, case-sensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MEGA10" => Some(Coupon::Mega10),
            "NOVO5" => Some(Coupon::Novo5),
            "LUB2" => Some(Coupon::Lub2),
            _ => None,
        }
    }

    /// Returns the coupon code.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Mega10 => "MEGA10",
            Coupon::Novo5 => "NOVO5",
            Coupon::Lub2 => "LUB2",
        }
    }

    /// The only product this coupon applies to, if restricted.
    pub const fn restricted_to(&self) -> Option<Product> {
        match self {
            Coupon::Lub2 => Some(Product::Lubrificante),
            Coupon::Mega10 | Coupon::Novo5 => None,
        }
    }

    /// The adjustment this coupon grants on an order of `product`.
    pub fn adjustment_for(&self, product: &str) -> Adjustment {
        if let Some(required) = self.restricted_to() {
            if product != required.id() {
                return Adjustment::Unchanged;
            }
        }

        match self {
            Coupon::Mega10 => Adjustment::Scale(PriceFactor::from_bps(9000)),
            Coupon::Novo5 => Adjustment::Scale(PriceFactor::from_bps(9500)),
            Coupon::Lub2 => Adjustment::Subtract(Money::from_cents(200)),
        }
    }
}

/// Applies a coupon to a price.
///
/// ## Rules
/// - absent or empty coupon → price unchanged
/// - unknown code → price unchanged
/// - restricted coupon on another product → price unchanged
///
/// ## Example
/// ```rust
/// use petro_core::coupon::apply_coupon;
/// use petro_core::money::Money;
///
/// let price = Money::from_cents(5000);
/// assert_eq!(apply_coupon(price, Some("LUB2"), "lubrificante"), Money::from_cents(4800));
/// assert_eq!(apply_coupon(price, Some("LUB2"), "diesel"), price);
/// ```
pub fn apply_coupon(price: Money, coupon: Option<&str>, product: &str) -> Money {
    let Some(coupon) = coupon.and_then(Coupon::from_code) else {
        return price;
    };

    let adjusted = coupon.adjustment_for(product).apply(price);
    debug!(
        coupon = coupon.code(),
        product,
        before = %price.amount(),
        after = %adjusted.amount(),
        "Coupon evaluated"
    );
    adjusted
}

// =============================================================================
// Unit Tests
// =============================================================================
