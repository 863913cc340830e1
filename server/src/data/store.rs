//! In-memory order store backed by a JSON dataset file.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::orders::Order;

use super::error::DataError;

/// Immutable order collection loaded once at startup.
///
/// The store never mutates its orders; it exists to hand the filter layer
/// a record collection and the product-name universe to validate against.
#[derive(Debug)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    /// Load a dataset file (a JSON array of orders). Empty datasets are
    /// rejected so downstream always has a non-empty product universe.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path)?;
        let orders: Vec<Order> = serde_json::from_str(&raw)?;
        if orders.is_empty() {
            return Err(DataError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(orders = orders.len(), path = %path.display(), "Dataset loaded");
        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The product-name universe for this dataset: canonical lower-cased
    /// names, deduplicated case-insensitively, in first-seen order.
    pub fn product_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.orders
            .iter()
            .map(|order| order.product_name.to_lowercase())
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }
}
