mod tools;
mod types;

pub use tools::OrdersToolServer;
