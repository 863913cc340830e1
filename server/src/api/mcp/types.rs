use serde::Serialize;

use crate::domain::orders::{Order, OrderFilter};

/// Response of the generate_filters tool: the normalized filter that was
/// applied plus the orders that survived it.
#[derive(Debug, Serialize)]
pub struct FilteredOrdersResponse {
    pub filter: OrderFilter,
    pub orders: Vec<Order>,
    pub total: usize,
}
