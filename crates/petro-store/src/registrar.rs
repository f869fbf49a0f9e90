//! # Customer Registrar
//!
//! Validates and stores customer registrations.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_customer(input)                                              │
//! │       │                                                                 │
//! │       ├── name / email / tax_id missing? → warn, Ok(false), no write   │
//! │       │                                                                 │
//! │       ├── email malformed? → warn, CONTINUE (accepted anyway)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.append(record) ──✗──► Err(StoreError)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  info "sending welcome email" ──► Ok(true)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The welcome email is a log notice only; no mail is sent.

use petro_core::validation::{is_valid_email, validate_customer};
use petro_core::CustomerInput;
use tracing::{info, warn};

use crate::customer::{CustomerRecord, CustomerStore, TextFileStore};
use crate::error::StoreResult;

/// Registers customers into a [`CustomerStore`].
#[derive(Debug)]
pub struct CustomerRegistrar<S = TextFileStore> {
    store: S,
}

impl<S: CustomerStore> CustomerRegistrar<S> {
    /// Creates a registrar writing to `store`.
    pub fn new(store: S) -> Self {
        CustomerRegistrar { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a customer.
    ///
    /// ## Returns
    /// - `Ok(true)` - record appended (even with a malformed email)
    /// - `Ok(false)` - a required field is missing; nothing written
    /// - `Err(StoreError)` - the store could not be written
    pub fn register_customer(&mut self, input: &CustomerInput) -> StoreResult<bool> {
        let customer = match validate_customer(input) {
            Ok(customer) => customer,
            Err(reason) => {
                warn!(%reason, "Incomplete customer data, registration skipped");
                return Ok(false);
            }
        };

        if !is_valid_email(&customer.email) {
            warn!(email = %customer.email, "Invalid email, accepted anyway");
        }

        let email = customer.email.clone();
        self.store.append(&CustomerRecord::from_customer(customer))?;

        info!(%email, "Sending welcome email");
        Ok(true)
    }
}
