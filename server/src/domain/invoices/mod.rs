//! Invoice schema for the invoice tool.
//!
//! The model fills this schema from a natural-language request; the tool
//! validates it and returns it unchanged for the UI layer to render. Field
//! names stay camelCase on the wire to match the frontend components.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn new_line_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// One billable line on an invoice
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct LineItem {
    /// Unique identifier for the line item
    #[serde(default = "new_line_item_id")]
    pub id: String,
    /// Name or description of the line item
    pub name: String,
    /// Quantity of the line item
    #[validate(range(min = 1, message = "quantity must be greater than zero"))]
    pub quantity: u32,
    /// Price per unit of the line item
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,
}

/// Where the order ships to
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ShippingAddress {
    /// Name of the recipient
    pub name: String,
    /// Street address for shipping
    pub street: String,
    /// City for shipping
    pub city: String,
    /// State or province for shipping
    pub state: String,
    /// ZIP or postal code for shipping
    pub zip: String,
}

/// Who placed the order
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct CustomerInfo {
    /// Name of the customer
    pub name: String,
    /// Email address of the customer
    #[validate(email)]
    pub email: String,
    /// Phone number of the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// How the order was paid
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// Type of credit card used for payment
    pub card_type: String,
    /// Last four digits of the credit card number
    #[validate(length(equal = 4, message = "must be exactly four digits"))]
    pub card_number_last_four: String,
}

/// A parsed invoice for a single order
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// The order ID this invoice belongs to
    pub order_id: String,
    /// List of line items in the invoice
    #[validate(nested)]
    pub line_items: Vec<LineItem>,
    /// Shipping address for the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub shipping_address: Option<ShippingAddress>,
    /// Information about the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub customer_info: Option<CustomerInfo>,
    /// Payment information for the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub payment_info: Option<PaymentInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Invoice {
        serde_json::from_value(serde_json::json!({
            "orderId": "ord_1042",
            "lineItems": [
                { "name": "Desk Lamp", "quantity": 2, "price": 42.5 }
            ],
            "customerInfo": {
                "name": "Alex Doe",
                "email": "alex@example.com"
            },
            "paymentInfo": {
                "cardType": "Visa",
                "cardNumberLastFour": "4242"
            }
        }))
        .unwrap()
    }

    #[test]
    fn line_item_id_is_generated_when_absent() {
        let inv = invoice();
        assert!(!inv.line_items[0].id.is_empty());
        assert!(inv.validate().is_ok());
    }

    #[test]
    fn zero_quantity_fails_validation() {
        let mut inv = invoice();
        inv.line_items[0].quantity = 0;
        assert!(inv.validate().is_err());
    }

    #[test]
    fn zero_price_fails_validation() {
        let mut inv = invoice();
        inv.line_items[0].price = 0.0;
        assert!(inv.validate().is_err());
    }

    #[test]
    fn bad_email_fails_validation() {
        let mut inv = invoice();
        inv.customer_info.as_mut().unwrap().email = "not-an-email".into();
        assert!(inv.validate().is_err());
    }

    #[test]
    fn card_digits_must_be_four() {
        let mut inv = invoice();
        inv.payment_info.as_mut().unwrap().card_number_last_four = "42".into();
        assert!(inv.validate().is_err());
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let value = serde_json::to_value(invoice()).unwrap();
        assert!(value.get("orderId").is_some());
        assert!(value.get("lineItems").is_some());
        assert!(value["paymentInfo"].get("cardNumberLastFour").is_some());
    }
}
