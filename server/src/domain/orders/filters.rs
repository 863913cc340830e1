//! Filter payload validation and normalization.
//!
//! The valid product-name universe is only known at runtime (it comes from
//! whatever dataset is loaded), so the filter schema cannot be a fixed type
//! with a static allow-list. [`FilterValidator::new`] is the factory that
//! captures a universe snapshot and hands back a configured validator value;
//! build a new one whenever the universe changes.

use std::collections::HashSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::constants::FILTER_DATE_FORMAT;

/// Validation failures for a filter payload.
///
/// Each variant carries enough context for the tool layer to hand the model
/// a specific corrective message. Validation stops at the first failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid product name: {0}")]
    InvalidProductName(String),

    #[error("Invalid date for {field}: '{value}'. Use the format YYYY-MM-DD.")]
    InvalidDateFormat { field: &'static str, value: String },

    #[error("Discount percentage out of range: {0}. Must be between 0 and 100.")]
    DiscountOutOfRange(f64),
}

/// Raw filter payload as produced by a tool call.
///
/// Every field is optional; an absent field means no constraint. Doubles as
/// the LLM-facing tool schema via the `JsonSchema` derive, so the doc
/// comments below are what the model sees.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct FilterInput {
    /// Filter orders by product name. Lowercase only. Must only contain
    /// products from the loaded dataset (see the list_products tool).
    pub product_names: Option<Vec<String>>,
    /// Filter orders placed before this date. Must be a valid date in the
    /// format 'YYYY-MM-DD'.
    pub before_date: Option<String>,
    /// Filter orders placed after this date. Must be a valid date in the
    /// format 'YYYY-MM-DD'.
    pub after_date: Option<String>,
    /// The minimum amount of the order to filter by
    pub min_amount: Option<f64>,
    /// The maximum amount of the order to filter by
    pub max_amount: Option<f64>,
    /// Filter orders by the state the order was shipped to.
    /// Example: 'California'
    pub state: Option<String>,
    /// Filter orders by whether or not a discount was applied
    pub discount: Option<bool>,
    /// Filter orders which had at least this amount discounted
    /// (in percentage, 0 to 100)
    pub min_discount_percentage: Option<f64>,
    /// The current status of the order. One of: pending, processing,
    /// shipped, delivered, cancelled, returned
    pub status: Option<String>,
}

/// Normalized filter, ready to apply against an order collection.
///
/// Product names are in canonical lower-cased form and date bounds are
/// parsed calendar dates. No cross-field checks are made: `min_amount`
/// may exceed `max_amount` and `after_date` may fall after `before_date`,
/// matching what callers have historically been allowed to send.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderFilter {
    pub product_names: Option<Vec<String>>,
    pub before_date: Option<NaiveDate>,
    pub after_date: Option<NaiveDate>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub state: Option<String>,
    pub discount: Option<bool>,
    pub min_discount_percentage: Option<f64>,
    /// Accepted as a free string here; `OrderStatus` is only enforced on
    /// order records themselves. Unknown values simply match no orders.
    pub status: Option<String>,
}

/// Validator configured for one product-name universe snapshot.
///
/// Construction and validation are pure; a validator can be shared across
/// threads freely. Universe membership is case-insensitive and accepted
/// names are canonicalized to lowercase.
#[derive(Debug, Clone)]
pub struct FilterValidator {
    allowed: HashSet<String>,
}

impl FilterValidator {
    /// Build a validator from the valid product names for a dataset.
    /// Duplicates and casing differences in the input are collapsed.
    pub fn new<I, S>(product_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = product_names
            .into_iter()
            .map(|name| name.as_ref().to_lowercase())
            .collect();
        Self { allowed }
    }

    /// Validate and normalize a raw filter payload.
    ///
    /// Returns the first failure encountered; there is no partial success.
    pub fn validate(&self, input: FilterInput) -> Result<OrderFilter, FilterError> {
        let product_names = input
            .product_names
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| {
                        let canonical = name.to_lowercase();
                        if self.allowed.contains(&canonical) {
                            Ok(canonical)
                        } else {
                            Err(FilterError::InvalidProductName(name))
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let before_date = parse_date("before_date", input.before_date)?;
        let after_date = parse_date("after_date", input.after_date)?;

        if let Some(pct) = input.min_discount_percentage {
            if !(0.0..=100.0).contains(&pct) {
                return Err(FilterError::DiscountOutOfRange(pct));
            }
        }

        Ok(OrderFilter {
            product_names,
            before_date,
            after_date,
            min_amount: input.min_amount,
            max_amount: input.max_amount,
            state: input.state,
            discount: input.discount,
            min_discount_percentage: input.min_discount_percentage,
            status: input.status,
        })
    }

    /// The canonical (lower-cased) universe this validator accepts.
    pub fn universe(&self) -> Vec<String> {
        let mut names: Vec<String> = self.allowed.iter().cloned().collect();
        names.sort();
        names
    }
}

fn parse_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, FilterError> {
    match value {
        Some(s) => NaiveDate::parse_from_str(&s, FILTER_DATE_FORMAT)
            .map(Some)
            .map_err(|_| FilterError::InvalidDateFormat { field, value: s }),
        None => Ok(None),
    }
}
