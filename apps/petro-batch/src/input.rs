//! Batch input: customer and order lists.
//!
//! Files are JSON arrays. Field names follow either the Rust names
//! (`customer_name`, `product`, `quantity`, `coupon`) or the legacy ones
//! (`cliente`, `produto`, `qtd`, `cupom`).

use std::path::Path;

use petro_core::{CustomerInput, Order};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::{ConfigError, InputSettings};

/// Everything one batch run processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    pub customers: Vec<CustomerInput>,
    pub orders: Vec<Order>,
}

impl BatchInput {
    /// Loads configured files, using the demo list for any that is unset.
    pub fn load(settings: &InputSettings) -> Result<Self, ConfigError> {
        let customers = match &settings.customers_file {
            Some(path) => read_json_list(path)?,
            None => demo_customers(),
        };
        let orders = match &settings.orders_file {
            Some(path) => read_json_list(path)?,
            None => demo_orders(),
        };

        info!(
            customers = customers.len(),
            orders = orders.len(),
            "Batch input loaded"
        );
        Ok(BatchInput { customers, orders })
    }
}

fn read_json_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// The customer list of the reference run.
pub fn demo_customers() -> Vec<CustomerInput> {
    vec![
        CustomerInput::new("Ana Paula", "ana@@petrobahia", "123"),
        CustomerInput::new("Carlos", "carlos@petrobahia.com", "456"),
    ]
}

/// The order list of the reference run.
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order::new("diesel", 1200)
            .with_customer("TransLog")
            .with_coupon("MEGA10"),
        Order::new("gasolina", 300).with_customer("MoveMais"),
        Order::new("etanol", 50)
            .with_customer("EcoFrota")
            .with_coupon("NOVO5"),
        Order::new("lubrificante", 12)
            .with_customer("PetroPark")
            .with_coupon("LUB2"),
    ]
}
