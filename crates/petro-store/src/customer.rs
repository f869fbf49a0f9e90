//! # Customer Store
//!
//! Append-only persistence for registered customers.
//!
//! ## File Format
//! ```text
//! clientes.txt
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ {"name":"Ana Paula","email":"ana@@petrobahia","tax_id":"123",...}\n    │
//! │ {"name":"Carlos","email":"carlos@petrobahia.com","tax_id":"456",...}\n │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! One JSON object per line, appended in registration order. Existing
//! lines are never rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use petro_core::Customer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Default customer store file name.
pub const DEFAULT_CUSTOMER_FILE: &str = "clientes.txt";

// =============================================================================
// Customer Record
// =============================================================================

/// A stored customer line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    /// When the record was appended.
    pub registered_at: DateTime<Utc>,
}

impl CustomerRecord {
    /// Stamps a validated customer with the current time.
    pub fn from_customer(customer: Customer) -> Self {
        CustomerRecord {
            name: customer.name,
            email: customer.email,
            tax_id: customer.tax_id,
            registered_at: Utc::now(),
        }
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Somewhere customer records can be appended.
pub trait CustomerStore {
    /// Appends one record. Previously stored records are left untouched.
    fn append(&mut self, record: &CustomerRecord) -> StoreResult<()>;
}

// =============================================================================
// Text File Store
// =============================================================================

/// Customer store backed by a plain-text file, one JSON record per line.
///
/// The file is opened in create + append mode on every write and closed
/// again afterwards; nothing is held open between registrations.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    /// Creates a store writing to `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFileStore { path: path.into() }
    }

    /// Returns the store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TextFileStore {
    fn default() -> Self {
        TextFileStore::new(DEFAULT_CUSTOMER_FILE)
    }
}

impl CustomerStore for TextFileStore {
    fn append(&mut self, record: &CustomerRecord) -> StoreResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::write(&self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| StoreError::write(&self.path, e))?;

        debug!(path = %self.path.display(), name = %record.name, "Customer record appended");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
