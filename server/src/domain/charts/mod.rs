//! Chart display formats for filtered order data.
//!
//! Schema only: the UI layer decides how to render, these types describe
//! which presentations exist and which chart kind each one fits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chart kinds the UI can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
}

/// A named way of displaying filtered orders, tied to a chart kind
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DataDisplayType {
    /// The name of the data display type
    pub name: String,
    /// The type of chart this format can be displayed on
    pub chart_type: ChartType,
    /// The description of the data display type
    pub description: String,
}

/// The display formats the order dataset supports.
pub fn display_formats() -> Vec<DataDisplayType> {
    vec![
        DataDisplayType {
            name: "totals_by_product".into(),
            chart_type: ChartType::Bar,
            description: "Total order amount grouped by product name.".into(),
        },
        DataDisplayType {
            name: "amounts_over_time".into(),
            chart_type: ChartType::Line,
            description: "Order amounts plotted by order date.".into(),
        },
        DataDisplayType {
            name: "orders_by_status".into(),
            chart_type: ChartType::Pie,
            description: "Share of orders in each status.".into(),
        },
        DataDisplayType {
            name: "orders_by_state".into(),
            chart_type: ChartType::Pie,
            description: "Share of orders shipped to each state.".into(),
        },
    ]
}
