//! Order dataset loading
//!
//! Orders are produced externally; this layer only reads a JSON dataset
//! file and exposes it, plus the product-name universe derived from it.

mod error;
mod store;

pub use error::DataError;
pub use store::OrderStore;
