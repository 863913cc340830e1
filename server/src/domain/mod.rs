//! Domain logic for the order dataset
//!
//! - `charts` - chart display formats for filtered order data
//! - `invoices` - invoice schema for the invoice tool
//! - `orders` - order records, filter validation, filter application

pub mod charts;
pub mod invoices;
pub mod orders;
