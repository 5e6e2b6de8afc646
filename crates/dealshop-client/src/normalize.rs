//! Normalization of the product listing body into a flat `Vec<Product>`.
//!
//! `GET /products/` answers either with a bare array of products or, when the
//! backend paginates, with an envelope `{"results": [...], "count": n}`. Both
//! collapse to the same ordered list here. The other product endpoints always
//! return bare arrays and are deserialized directly by the client.

use dealshop_core::Product;
use serde_json::Value;

use crate::error::ClientError;

/// Collapses a listing response into its products, preserving order.
///
/// - bare array: returned as-is
/// - object with `results`: the `results` array; a missing or `null`
///   `results` yields an empty list
/// - any other shape (string, number, bool, `null`): empty list
///
/// Unrecognized shapes and envelopes missing `results` are logged at `warn`.
///
/// # Errors
///
/// Returns [`ClientError::Deserialize`] if the array (bare or under
/// `results`) contains entries that are not valid products.
pub fn normalize_listing(body: Value) -> Result<Vec<Product>, ClientError> {
    match body {
        Value::Array(_) => deserialize_products(body, "product listing"),
        Value::Object(mut map) => match map.remove("results") {
            None => {
                tracing::warn!("product listing object has no results field; treating as empty");
                Ok(Vec::new())
            }
            Some(Value::Null) => Ok(Vec::new()),
            Some(results) => deserialize_products(results, "paginated product listing results"),
        },
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "unrecognized product listing shape; treating as empty"
            );
            Ok(Vec::new())
        }
    }
}

fn deserialize_products(value: Value, context: &str) -> Result<Vec<Product>, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
