//! # PetroBahia Batch Runner
//!
//! Registers a customer list and prices an order list.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. Load configuration ─────► BatchConfig (defaults / TOML / env)      │
//! │  2. Initialize logging ─────► tracing-subscriber + EnvFilter           │
//! │  3. Load input ─────────────► JSON files or built-in demo data         │
//! │  4. Register customers ─────► petro-store ──► clientes.txt             │
//! │  5. Process orders ─────────► petro-core pipeline                      │
//! │  6. Report TOTAL                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p petro-batch
//! PETRO_CUSTOMER_FILE=/tmp/clientes.txt RUST_LOG=debug cargo run -p petro-batch
//! ```

mod config;
mod input;

use petro_core::{Money, OrderProcessor};
use petro_store::{CustomerRegistrar, StoreError, TextFileStore};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{BatchConfig, ConfigError};
use crate::input::BatchInput;

/// Errors that abort a batch run.
#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BatchReport {
    registered: usize,
    rejected_customers: usize,
    order_values: Vec<Money>,
    total: Money,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BatchConfig::load()?;
    init_tracing(&config.logging.filter);

    info!(
        customer_file = %config.store.customer_file.display(),
        "==== PetroBahia processing started ===="
    );

    let report = run(&config)?;

    info!(
        registered = report.registered,
        rejected = report.rejected_customers,
        "Customers processed"
    );
    debug!(values = ?report.order_values, "Order values");
    info!(total = %report.total, "TOTAL = {:.2}", report.total.amount());
    info!("==== PetroBahia processing finished ====");
    Ok(())
}

/// Executes one batch run against the configured store.
fn run(config: &BatchConfig) -> Result<BatchReport, RunError> {
    let input = BatchInput::load(&config.input)?;

    let mut registrar = CustomerRegistrar::new(TextFileStore::new(&config.store.customer_file));
    let mut registered = 0;
    let mut rejected_customers = 0;

    for customer in &input.customers {
        let name = customer.name.as_deref().unwrap_or("<unnamed>");
        if registrar.register_customer(customer)? {
            info!(customer = name, "Customer OK");
            registered += 1;
        } else {
            warn!(customer = ?customer, "Customer rejected");
            rejected_customers += 1;
        }
    }

    let batch = OrderProcessor::new().process_orders(&input.orders);

    Ok(BatchReport {
        registered,
        rejected_customers,
        order_values: batch.values,
        total: batch.total,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=petro_core=trace` - Trace for the pricing crate only
/// - Default: the configured filter (`info,petro=debug`)
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
