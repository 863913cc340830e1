use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo, ToolsCapability,
};
use rmcp::{ServerHandler, tool, tool_handler, tool_router};
use validator::Validate;

use crate::core::constants::APP_NAME;
use crate::data::OrderStore;
use crate::domain::charts;
use crate::domain::invoices::Invoice;
use crate::domain::orders::{FilterError, FilterInput, FilterValidator};

use super::types::FilteredOrdersResponse;

type McpError = rmcp::model::ErrorData;

/// Order tools exposed to the model.
///
/// The filter validator is built once per server from the store's product
/// universe; the store is immutable for the lifetime of the process, so
/// the snapshot never goes stale.
#[derive(Clone)]
pub struct OrdersToolServer {
    store: Arc<OrderStore>,
    validator: FilterValidator,
    tool_router: ToolRouter<Self>,
}

impl OrdersToolServer {
    pub fn new(store: Arc<OrderStore>) -> Self {
        let validator = FilterValidator::new(store.product_names());
        Self {
            store,
            validator,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for OrdersToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: APP_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

const INSTRUCTIONS: &str = r#"OrderDesk - query and filter an order dataset for generative UI.

WORKFLOW:
1. list_products to learn which product names are valid filter values
2. generate_filters to narrow the dataset (all fields optional; an empty
   call returns every order)
3. list_display_formats to pick a chart presentation for the result
4. parse_invoice to turn a described order into a structured invoice

TIPS:
- Product names must come from list_products; anything else is rejected
- Dates use the format YYYY-MM-DD
- min_discount_percentage is a percentage between 0 and 100
- Validation errors name the offending field and value; correct and retry"#;

#[tool_router]
impl OrdersToolServer {
    #[tool(
        description = "Validate filter criteria against the loaded order dataset and return the matching orders. All fields are optional; absent fields do not constrain."
    )]
    async fn generate_filters(
        &self,
        Parameters(input): Parameters<FilterInput>,
    ) -> Result<CallToolResult, McpError> {
        let filter = self.validator.validate(input).map_err(filter_err)?;
        let orders: Vec<_> = filter
            .apply(self.store.orders())
            .into_iter()
            .cloned()
            .collect();
        let total = orders.len();
        tracing::debug!(total, "Filter applied");
        ok_json(&FilteredOrdersResponse {
            filter,
            orders,
            total,
        })
    }

    #[tool(
        description = "List the valid product names for this dataset. Only these values are accepted in generate_filters product_names."
    )]
    async fn list_products(&self) -> Result<CallToolResult, McpError> {
        ok_json(&serde_json::json!({ "products": self.validator.universe() }))
    }

    #[tool(
        description = "List the chart display formats the UI can render for filtered orders (name, chart type, description)."
    )]
    async fn list_display_formats(&self) -> Result<CallToolResult, McpError> {
        ok_json(&charts::display_formats())
    }

    #[tool(
        description = "Parse an invoice into its structured form and return it unchanged. Quantity and price must be positive; email must be valid."
    )]
    async fn parse_invoice(
        &self,
        Parameters(invoice): Parameters<Invoice>,
    ) -> Result<CallToolResult, McpError> {
        invoice
            .validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        ok_json(&invoice)
    }
}

fn ok_json(value: &impl serde::Serialize) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn filter_err(e: FilterError) -> McpError {
    tracing::debug!(error = %e, "Filter validation failed");
    McpError::invalid_params(e.to_string(), None)
}
