//! Order records.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::require;

/// An order to register with Lunartools.
///
/// Quantity, price and date are strings on the wire and are passed through as
/// given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrder {
    /// Item name.
    pub name: String,
    /// Order status (e.g., "shipped").
    pub status: String,
    /// Retailer order number.
    pub order_number: String,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Tracking identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    /// Order date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Quantity ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Order total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_total: Option<String>,
    /// Account the order was placed with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Retailer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl AddOrder {
    /// Create an order with the required fields set and no optional fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        order_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            order_number: order_number.into(),
            ..Self::default()
        }
    }

    /// Check the record before it is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`](crate::ValidationError::Required) for the
    /// first blank field among name, status and order number.
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "order name")?;
        require(&self.status, "order status")?;
        require(&self.order_number, "order number")?;
        Ok(())
    }
}
