//! Request envelopes for the Lunartools API.

use serde::Serialize;

/// Wraps a record with the caller's identity.
///
/// The record's own fields are flattened next to `clientId` and `accessToken`,
/// so absent optionals stay absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Identified<'a, T> {
    pub client_id: &'a str,
    pub access_token: &'a str,
    #[serde(flatten)]
    pub record: &'a T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunartools_core::{opt, AddOrder, AddProduct};
    use serde_json::{json, Value};

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn required_only_product_body() {
        let product = AddProduct::new("Shirt", "SH-1", 5);
        let body = serde_json::to_value(Identified {
            client_id: "cid",
            access_token: "tok",
            record: &product,
        })
        .unwrap();

        assert_eq!(keys(&body), ["accessToken", "clientId", "name", "qty", "sku"]);
        assert_eq!(body["clientId"], "cid");
        assert_eq!(body["accessToken"], "tok");
        assert_eq!(body["qty"], 5);
    }

    #[test]
    fn full_product_body() {
        let product = AddProduct::new("Shirt", "SH-1", 5)
            .with_size("L")
            .with_store("Nike")
            .with_value(30.0)
            .with_spent(12.5);
        let body = serde_json::to_value(Identified {
            client_id: "cid",
            access_token: "tok",
            record: &product,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "clientId": "cid",
                "accessToken": "tok",
                "name": "Shirt",
                "sku": "SH-1",
                "qty": 5,
                "size": "L",
                "store": "Nike",
                "value": 30.0,
                "spent": 12.5
            })
        );
    }

    #[test]
    fn order_body_keeps_empty_strings() {
        let order = AddOrder {
            tags: opt::string(""),
            ..AddOrder::new("Dunk Low", "ordered", "A-1")
        };
        let body = serde_json::to_value(Identified {
            client_id: "cid",
            access_token: "tok",
            record: &order,
        })
        .unwrap();

        assert_eq!(
            keys(&body),
            ["accessToken", "clientId", "name", "orderNumber", "status", "tags"]
        );
        assert_eq!(body["tags"], "");
    }
}
