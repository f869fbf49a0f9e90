//! # Order Processor
//!
//! Orchestrates validation, pricing, coupon and rounding for one order.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order ──► validate ──✗──► warn "invalid order" ──► R$0.00 (terminal)  │
//! │              │                                                          │
//! │              ✓                                                          │
//! │              ▼                                                          │
//! │  PriceCalculator::calculate_price(product, qty)                        │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  apply_coupon(price, coupon, product)                                  │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  round_final(price, product)                                           │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  info "order OK" ──► final price                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected order is a normal outcome worth R$0.00, never an `Err`.

use tracing::{info, warn};

use crate::coupon::apply_coupon;
use crate::money::Money;
use crate::pricing::{CatalogCalculator, PriceCalculator};
use crate::rounding::round_final;
use crate::types::Order;
use crate::validation::validate_order;

// =============================================================================
// Order Processor
// =============================================================================

/// Runs orders through the pricing pipeline.
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor<C = CatalogCalculator> {
    calculator: C,
}

impl OrderProcessor<CatalogCalculator> {
    /// Creates a processor backed by the catalog calculator.
    pub fn new() -> Self {
        OrderProcessor {
            calculator: CatalogCalculator,
        }
    }
}

impl<C: PriceCalculator> OrderProcessor<C> {
    /// Creates a processor with a custom price calculator.
    pub fn with_calculator(calculator: C) -> Self {
        OrderProcessor { calculator }
    }

    /// Returns the calculator in use.
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Processes one order and returns its final price.
    ///
    /// ## Outcomes
    /// - invalid shape (missing product, quantity ≤ 0) → `Money::zero()`,
    ///   the calculator is not invoked
    /// - unknown product → `Money::zero()` from the calculator
    /// - otherwise → priced, coupon applied, rounded
    ///
    /// ## Example
    /// ```rust
    /// use petro_core::order::OrderProcessor;
    /// use petro_core::types::Order;
    /// use petro_core::money::Money;
    ///
    /// let processor = OrderProcessor::new();
    /// let order = Order::new("etanol", 50).with_coupon("NOVO5");
    /// // 179.50 × 0.95 = 170.525 → truncated
    /// assert_eq!(processor.process_order(&order), Money::from_cents(17052));
    /// ```
    pub fn process_order(&self, order: &Order) -> Money {
        let valid = match validate_order(order) {
            Ok(valid) => valid,
            Err(reason) => {
                match order.customer_name.as_deref() {
                    Some(customer) => warn!(
                        customer,
                        %reason,
                        "Invalid order: zero quantity or missing product"
                    ),
                    None => warn!(%reason, "Invalid order: zero quantity or missing product"),
                }
                return Money::zero();
            }
        };

        let price = self
            .calculator
            .calculate_price(valid.product, valid.quantity);
        let price = apply_coupon(price, valid.coupon, valid.product);
        let price = round_final(price, valid.product);

        info!(
            customer = valid.customer_name.unwrap_or("-"),
            product = valid.product,
            quantity = valid.quantity,
            price = %price,
            "Order OK"
        );
        price
    }

    /// Processes orders in sequence and sums their final prices.
    ///
    /// Rejected orders contribute R$0.00 to the total.
    pub fn process_orders(&self, orders: &[Order]) -> OrderBatch {
        let values: Vec<Money> = orders.iter().map(|o| self.process_order(o)).collect();
        let total: Money = values.iter().sum();

        info!(orders = values.len(), total = %total, "Order batch processed");
        OrderBatch { values, total }
    }
}

/// Processes a single order with the catalog calculator.
pub fn process_order(order: &Order) -> Money {
    OrderProcessor::new().process_order(order)
}

// =============================================================================
// Order Batch
// =============================================================================

/// Final values for a sequence of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBatch {
    /// One final price per input order, in input order.
    pub values: Vec<Money>,
    /// Sum of `values`.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Calculator that returns a fixed price and records every call.
    struct RecordingCalculator {
        price: Money,
        calls: RefCell<Vec<(String, i64)>>,
    }

    impl RecordingCalculator {
        fn returning(price: Money) -> Self {
            RecordingCalculator {
                price,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PriceCalculator for RecordingCalculator {
        fn calculate_price(&self, product: &str, quantity: i64) -> Money {
            self.calls.borrow_mut().push((product.to_string(), quantity));
            self.price
        }
    }

    #[test]
    fn test_missing_product_is_rejected_without_pricing() {
        let processor =
            OrderProcessor::with_calculator(RecordingCalculator::returning(Money::from_cents(100)));
        let order = Order {
            customer_name: Some("Teste".to_string()),
            product: None,
            quantity: 10,
            coupon: None,
        };

        assert_eq!(processor.process_order(&order), Money::zero());
        assert!(processor.calculator().calls.borrow().is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let processor =
            OrderProcessor::with_calculator(RecordingCalculator::returning(Money::from_cents(100)));
        let order = Order::new("diesel", 0).with_customer("Teste");

        assert_eq!(processor.process_order(&order), Money::zero());
        assert!(processor.calculator().calls.borrow().is_empty());
    }

    #[test]
    fn test_pipeline_with_mocked_calculator() {
        let processor = OrderProcessor::with_calculator(RecordingCalculator::returning(
            Money::from_cents(10000),
        ));
        let order = Order::new("etanol", 100)
            .with_customer("Teste")
            .with_coupon("NOVO5");

        // 100.00 × 0.95 = 95.00, truncated → 95.00
        assert_eq!(processor.process_order(&order), Money::from_cents(9500));
        assert_eq!(
            *processor.calculator().calls.borrow(),
            vec![("etanol".to_string(), 100)]
        );
    }

    #[test]
    fn test_unknown_product_is_zero() {
        assert_eq!(process_order(&Order::new("agua", 10)), Money::zero());
    }

    #[test]
    fn test_end_to_end_catalog_orders() {
        let processor = OrderProcessor::new();

        // 4788.00 × 0.90 = 4309.20, MEGA10 → 3878.28, diesel → 3878
        let diesel = Order::new("diesel", 1200)
            .with_customer("TransLog")
            .with_coupon("MEGA10");
        assert_eq!(processor.process_order(&diesel), Money::from_cents(387_800));

        let gasoline = Order::new("gasolina", 300).with_customer("MoveMais");
        assert_eq!(processor.process_order(&gasoline), Money::from_cents(145_700));

        // 25.00 × 12 = 300.00 − 2.00
        let lubricant = Order::new("lubrificante", 12).with_coupon("LUB2");
        assert_eq!(processor.process_order(&lubricant), Money::from_cents(29_800));
    }

    #[test]
    fn test_unknown_coupon_ignored_end_to_end() {
        let order = Order::new("gasolina", 100).with_coupon("XYZ");
        assert_eq!(process_order(&order), Money::from_cents(51_900));
    }

    #[test]
    fn test_process_orders_total() {
        let orders = vec![
            Order::new("diesel", 1200).with_coupon("MEGA10"),
            Order::new("gasolina", 300),
            Order::new("etanol", 50).with_coupon("NOVO5"),
            Order::new("lubrificante", 12).with_coupon("LUB2"),
            Order::new("diesel", 0),
        ];

        let batch = OrderProcessor::new().process_orders(&orders);
        assert_eq!(batch.values.len(), 5);
        assert_eq!(batch.values[4], Money::zero());
        assert_eq!(batch.total, "5803.52".parse::<Money>().unwrap());
    }

    #[test]
    fn test_process_orders_empty() {
        let batch = OrderProcessor::new().process_orders(&[]);
        assert!(batch.values.is_empty());
        assert_eq!(batch.total, Money::zero());
    }
}
