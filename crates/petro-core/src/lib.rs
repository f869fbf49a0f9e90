//! # petro-core: Pure Pricing Logic for PetroBahia
//!
//! This crate is the **heart** of the PetroBahia order pricing system. It
//! contains all business rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PetroBahia Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    petro-batch (app)                            │   │
//! │  │    config ──► register customers ──► process orders ──► TOTAL  │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │                             │                        │
//! │  ┌───────────────▼──────────────┐  ┌───────────▼───────────────────┐   │
//! │  │     petro-store              │  │  ★ petro-core (THIS CRATE) ★  │   │
//! │  │  CustomerRegistrar           │  │                               │   │
//! │  │  TextFileStore (append)      │──►  pricing ─► coupon ─► rounding│   │
//! │  └──────────────────────────────┘  │  order    validation  money   │   │
//! │                                    │                               │   │
//! │                                    │  NO I/O • PURE FUNCTIONS      │   │
//! │                                    └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Customer)
//! - [`money`] - Exact decimal Money and PriceFactor
//! - [`catalog`] - Base prices and quantity-discount tiers
//! - [`pricing`] - Price Calculator
//! - [`coupon`] - Coupon Applier
//! - [`rounding`] - Rounding Policy
//! - [`order`] - Order Processor
//! - [`validation`] - Order / customer validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use petro_core::{Money, Order, OrderProcessor};
//!
//! let processor = OrderProcessor::new();
//! let order = Order::new("diesel", 1200)
//!     .with_customer("TransLog")
//!     .with_coupon("MEGA10");
//!
//! // 4788.00 → ×0.90 tier → ×0.90 coupon = 3878.28 → diesel rounds to 3878
//! assert_eq!(processor.process_order(&order), Money::from_cents(387_800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod coupon;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Adjustment;
pub use coupon::{apply_coupon, Coupon};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, PriceFactor};
pub use order::{process_order, OrderBatch, OrderProcessor};
pub use pricing::{calculate_price, CatalogCalculator, PriceCalculator};
pub use rounding::{round_final, RoundingPolicy};
pub use types::*;
pub use validation::{is_valid_email, validate_customer, validate_order, ValidationResult};
