//! Order data model.
//!
//! Orders are created externally (the dataset file) and are never mutated
//! here. These types only describe the records the filter layer reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The address an order was shipped to. All fields required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The address street, e.g. "123 Main St"
    pub street: String,
    /// The city the order was shipped to
    pub city: String,
    /// The state the order was shipped to, e.g. "California"
    pub state: String,
    /// The zip code the order was shipped to
    pub zip: String,
}

/// Order lifecycle status (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }

    /// Try to parse a status string, returning None for unknown values.
    pub fn try_from_str(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "cancelled" => Self::Cancelled,
            "returned" => Self::Returned,
            _ => return None,
        })
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// UUID for the order
    pub id: Uuid,
    /// The name of the product purchased
    pub product_name: String,
    /// The amount of the order
    pub amount: f64,
    /// Discount percentage applied to the order, between 0 and 100.
    /// Absent if no discount was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// The address the order was shipped to
    pub address: Address,
    /// The current status of the order
    pub status: OrderStatus,
    /// When the order was placed
    pub ordered_at: DateTime<Utc>,
}
