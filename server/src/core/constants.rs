// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and server info)
pub const APP_NAME: &str = "OrderDesk";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "orderdesk";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for log filter (falls back to RUST_LOG)
pub const ENV_LOG: &str = "ORDERDESK_LOG";

/// Environment variable for the orders dataset path
pub const ENV_DATA: &str = "ORDERDESK_DATA";

// =============================================================================
// Defaults & Formats
// =============================================================================

/// Default dataset file name, resolved relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "orders.json";

/// Calendar-date format accepted by filter date bounds
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";
