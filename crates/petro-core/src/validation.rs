//! # Validation Module
//!
//! Input validation for orders and customer records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Is Checked                                    │
//! │                                                                         │
//! │  Order                                                                 │
//! │  ├── product present and non-empty      → else Required("product")     │
//! │  └── quantity > 0                        → else MustBePositive          │
//! │                                                                         │
//! │  Customer                                                              │
//! │  ├── name, email, tax_id present        → else Required(<field>)       │
//! │  └── email format                        → checked separately; a bad   │
//! │                                            email is WARNED, not         │
//! │                                            rejected (see petro-store)   │
//! │                                                                         │
//! │  Nothing else: no schema, no catalog lookup, no length limits.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::{Customer, CustomerInput, Order, ValidOrder};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `local@domain.tld`: no whitespace or `@` in either part, and at least
/// one `.` in the domain.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid email regex literal")
});

// =============================================================================
// Order Validation
// =============================================================================

/// Validates the shape of an order before pricing.
///
/// ## Rules
/// - `product` must be present and non-empty
/// - `quantity` must be greater than zero
///
/// Whether the product exists in the catalog is NOT checked here; an
/// unknown product is priced as zero by the calculator.
///
/// ## Example
/// ```rust
/// use petro_core::types::Order;
/// use petro_core::validation::validate_order;
///
/// assert!(validate_order(&Order::new("diesel", 10)).is_ok());
/// assert!(validate_order(&Order::new("diesel", 0)).is_err());
/// ```
pub fn validate_order(order: &Order) -> ValidationResult<ValidOrder<'_>> {
    let product = match order.product.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ValidationError::required("product")),
    };

    if order.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(ValidOrder {
        customer_name: order.customer_name.as_deref(),
        product,
        quantity: order.quantity,
        coupon: order.coupon.as_deref(),
    })
}

// =============================================================================
// Customer Validation
// =============================================================================

/// Checks that name, email and tax id are all present.
///
/// Presence only: an empty string counts as present.
pub fn validate_customer(input: &CustomerInput) -> ValidationResult<Customer> {
    let name = input
        .name
        .clone()
        .ok_or_else(|| ValidationError::required("name"))?;
    let email = input
        .email
        .clone()
        .ok_or_else(|| ValidationError::required("email"))?;
    let tax_id = input
        .tax_id
        .clone()
        .ok_or_else(|| ValidationError::required("tax_id"))?;

    Ok(Customer {
        name,
        email,
        tax_id,
    })
}

/// Validates the email format.
///
/// ## Example
/// ```rust
/// use petro_core::validation::validate_email;
///
/// assert!(validate_email("a@b.com").is_ok());
/// assert!(validate_email("a@@b").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local-part@domain.tld".to_string(),
        })
    }
}

/// Returns true when the email matches `local-part@domain.tld`.
#[inline]
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_order_ok() {
        let order = Order::new("etanol", 100)
            .with_customer("Teste")
            .with_coupon("NOVO5");
        let valid = validate_order(&order).unwrap();
        assert_eq!(valid.product, "etanol");
        assert_eq!(valid.quantity, 100);
        assert_eq!(valid.coupon, Some("NOVO5"));
        assert_eq!(valid.customer_name, Some("Teste"));
    }

    #[test]
    fn test_validate_order_missing_product() {
        let order = Order {
            customer_name: Some("Teste".to_string()),
            quantity: 10,
            ..Order::default()
        };
        assert_eq!(
            validate_order(&order).unwrap_err(),
            ValidationError::required("product")
        );
        assert!(validate_order(&Order::new("", 10)).is_err());
    }

    #[test]
    fn test_validate_order_quantity() {
        assert!(validate_order(&Order::new("diesel", 1)).is_ok());
        assert!(matches!(
            validate_order(&Order::new("diesel", 0)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_order(&Order::new("diesel", -5)).is_err());
    }

    #[test]
    fn test_unknown_product_passes_validation() {
        assert!(validate_order(&Order::new("agua", 10)).is_ok());
    }

    #[test]
    fn test_validate_customer_complete() {
        let input = CustomerInput::new("Teste", "teste@valido.com", "1234");
        let customer = validate_customer(&input).unwrap();
        assert_eq!(customer.name, "Teste");
        assert_eq!(customer.tax_id, "1234");
    }

    #[test]
    fn test_validate_customer_missing_field() {
        let input = CustomerInput {
            name: Some("Teste".to_string()),
            email: None,
            tax_id: Some("1234".to_string()),
        };
        assert_eq!(
            validate_customer(&input).unwrap_err(),
            ValidationError::required("email")
        );

        let input = CustomerInput {
            tax_id: None,
            ..CustomerInput::new("Teste", "teste@valido.com", "")
        };
        assert_eq!(
            validate_customer(&input).unwrap_err(),
            ValidationError::required("tax_id")
        );
    }

    #[test]
    fn test_empty_field_counts_as_present() {
        assert!(validate_customer(&CustomerInput::new("", "", "")).is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("contato@empresa.com.br"));
        assert!(is_valid_email("carlos@petrobahia.com"));

        assert!(!is_valid_email("a@@b"));
        assert!(!is_valid_email("usuario@@dominio.com"));
        assert!(!is_valid_email("contatoempresa.com"));
        assert!(!is_valid_email("ana@@petrobahia"));
        assert!(!is_valid_email("no space@x.com"));
        assert!(!is_valid_email("user@nodot"));
    }
}
