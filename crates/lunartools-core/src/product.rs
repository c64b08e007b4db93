//! Product records.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::validation::{require, require_non_negative};

/// A product to register with Lunartools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProduct {
    /// Product name.
    pub name: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Quantity held, must be non-negative.
    pub qty: i64,
    /// Size label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Store the product is listed on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Monetary value, must be non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Amount spent acquiring the product, must be non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
}

impl AddProduct {
    /// Create a product with the required fields set and no optional fields.
    #[must_use]
    pub fn new(name: impl Into<String>, sku: impl Into<String>, qty: i64) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            qty,
            ..Self::default()
        }
    }

    /// Set the size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the store.
    #[must_use]
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Set the monetary value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the amount spent.
    #[must_use]
    pub fn with_spent(mut self, spent: f64) -> Self {
        self.spent = Some(spent);
        self
    }

    /// Check the record before it is sent.
    ///
    /// Checks run in field order and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for a blank name or SKU and
    /// [`ValidationError::Negative`] for a negative quantity, value or spent amount.
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "product name")?;
        require(&self.sku, "product SKU")?;
        if self.qty < 0 {
            return Err(ValidationError::Negative("product quantity"));
        }
        if let Some(value) = self.value {
            require_non_negative(value, "product value")?;
        }
        if let Some(spent) = self.spent {
            require_non_negative(spent, "product spent")?;
        }
        Ok(())
    }
}
