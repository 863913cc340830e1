//! Tool-serving surface

mod mcp;

pub use mcp::OrdersToolServer;
