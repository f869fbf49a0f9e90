//! # petro-store: Customer Store for PetroBahia
//!
//! Customer registration and the append-only customer file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  petro-batch ──► CustomerRegistrar::register_customer                  │
//! │                        │                                                │
//! │                        ├──► petro_core::validation (presence, email)   │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                  CustomerStore::append ──► clientes.txt (one line)     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`customer`] - Record type, store trait, text-file store
//! - [`registrar`] - Registration flow
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use petro_core::CustomerInput;
//! use petro_store::{CustomerRegistrar, TextFileStore};
//!
//! let mut registrar = CustomerRegistrar::new(TextFileStore::new("clientes.txt"));
//! let ok = registrar.register_customer(&CustomerInput::new(
//!     "Carlos",
//!     "carlos@petrobahia.com",
//!     "456",
//! ))?;
//! assert!(ok);
//! # Ok::<(), petro_store::StoreError>(())
//! ```

pub mod customer;
pub mod error;
pub mod registrar;

pub use customer::{CustomerRecord, CustomerStore, TextFileStore, DEFAULT_CUSTOMER_FILE};
pub use error::{StoreError, StoreResult};
pub use registrar::CustomerRegistrar;
