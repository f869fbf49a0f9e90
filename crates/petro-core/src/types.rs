//! # Domain Types
//!
//! Core domain types used throughout PetroBahia.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │ CustomerInput   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Diesel         │   │  customer_name? │   │  name?          │       │
//! │  │  Gasolina       │   │  product?       │   │  email?         │       │
//! │  │  Etanol         │   │  quantity       │   │  tax_id?        │       │
//! │  │  Lubrificante   │   │  coupon?        │   └────────┬────────┘       │
//! │  └─────────────────┘   └─────────────────┘            │ validate       │
//! │                                                        ▼                │
//! │                                               ┌─────────────────┐       │
//! │                                               │    Customer     │       │
//! │                                               │  name/email/    │       │
//! │                                               │  tax_id         │       │
//! │                                               └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders and customer inputs come straight from the caller and may be
//! incomplete; nothing here is mutated after creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Product
// =============================================================================

/// A product in the PetroBahia catalog.
///
/// Identifiers are the lowercase Portuguese names used by callers
/// (`"diesel"`, `"gasolina"`, `"etanol"`, `"lubrificante"`). Any other
/// identifier is an unknown product and handled by the default branches
/// of the pricing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Diesel,
    Gasolina,
    Etanol,
    Lubrificante,
}

impl Product {
    /// Every catalog product, in catalog order.
    pub const ALL: [Product; 4] = [
        Product::Diesel,
        Product::Gasolina,
        Product::Etanol,
        Product::Lubrificante,
    ];

    /// Looks up a product by its identifier (exact, case-sensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "diesel" => Some(Product::Diesel),
            "gasolina" => Some(Product::Gasolina),
            "etanol" => Some(Product::Etanol),
            "lubrificante" => Some(Product::Lubrificante),
            _ => None,
        }
    }

    /// Returns the product identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Product::Diesel => "diesel",
            Product::Gasolina => "gasolina",
            Product::Etanol => "etanol",
            Product::Lubrificante => "lubrificante",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Product {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::from_id(s).ok_or_else(|| CoreError::ProductNotFound(s.to_string()))
    }
}

// =============================================================================
// Order
// =============================================================================

/// A product order as supplied by the caller.
///
/// ## Field Aliases
/// Input files written for the legacy system use `cliente`, `produto`,
/// `qtd` and `cupom`; both spellings deserialize.
///
/// A missing quantity deserializes as 0, which the validation step rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Who placed the order (used in diagnostics only).
    #[serde(default, alias = "cliente")]
    pub customer_name: Option<String>,

    /// Product identifier.
    #[serde(default, alias = "produto")]
    pub product: Option<String>,

    /// Ordered quantity (units / litres).
    #[serde(default, alias = "qtd")]
    pub quantity: i64,

    /// Optional coupon code.
    #[serde(default, alias = "cupom")]
    pub coupon: Option<String>,
}

impl Order {
    /// Creates an order for `product` × `quantity` with no customer or coupon.
    pub fn new(product: impl Into<String>, quantity: i64) -> Self {
        Order {
            customer_name: None,
            product: Some(product.into()),
            quantity,
            coupon: None,
        }
    }

    /// Sets the customer name.
    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Sets the coupon code.
    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon = Some(code.into());
        self
    }
}

/// An order that passed validation, borrowing from the source `Order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidOrder<'a> {
    pub customer_name: Option<&'a str>,
    pub product: &'a str,
    pub quantity: i64,
    pub coupon: Option<&'a str>,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer registration request; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Tax identifier (CNPJ).
    #[serde(default, alias = "cnpj")]
    pub tax_id: Option<String>,
}

impl CustomerInput {
    /// Creates a request with every field present.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        CustomerInput {
            name: Some(name.into()),
            email: Some(email.into()),
            tax_id: Some(tax_id.into()),
        }
    }
}

/// A customer with every required field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub tax_id: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
