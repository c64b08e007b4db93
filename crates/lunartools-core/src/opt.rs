//! Helpers for filling optional fields.
//!
//! ```
//! use lunartools_core::{opt, AddProduct};
//!
//! let product = AddProduct {
//!     size: opt::string("M"),
//!     value: opt::float(19.99),
//!     ..AddProduct::new("Shirt", "SH-1", 5)
//! };
//! assert_eq!(product.size.as_deref(), Some("M"));
//! ```

/// A present string value.
#[must_use]
pub fn string(value: impl Into<String>) -> Option<String> {
    Some(value.into())
}

/// A present integer value.
#[must_use]
pub fn int(value: impl Into<i64>) -> Option<i64> {
    Some(value.into())
}

/// A present floating point value.
#[must_use]
pub fn float(value: impl Into<f64>) -> Option<f64> {
    Some(value.into())
}

/// A present boolean value.
#[must_use]
pub fn boolean(value: bool) -> Option<bool> {
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_still_present() {
        assert_eq!(string(""), Some(String::new()));
    }

    #[test]
    fn zero_values_are_present() {
        assert_eq!(int(0), Some(0));
        assert_eq!(float(0.0_f32), Some(0.0));
        assert_eq!(boolean(false), Some(false));
    }
}
