//! Order records and filter criteria
//!
//! - `types` - the order data model (read-only input, produced externally)
//! - `filters` - filter payload validation and normalization
//! - `apply` - applying a normalized filter to a collection of orders

mod apply;
mod filters;
mod types;

pub use filters::{FilterError, FilterInput, FilterValidator, OrderFilter};
pub use types::{Address, Order, OrderStatus};
