// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::product::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub category: Category,
    pub quantity: u64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_products: u64,
    pub total_quantity: u64,
    pub total_inventory_value: f64,
    #[serde(default)]
    pub database_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Human-readable form of `detail`. Validation failures carry a list of
    /// `{loc, msg, type}` objects instead of a string.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .map(|item| match item.get("msg").and_then(Value::as_str) {
                        Some(msg) => msg.to_string(),
                        None => item.to_string(),
                    })
                    .collect();
                (!msgs.is_empty()).then(|| msgs.join("; "))
            }
            other => Some(other.to_string()),
        }
    }

    pub fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body).ok()?.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        assert_eq!(ErrorResponse::parse(r#"{"detail":"db down"}"#).as_deref(), Some("db down"));
    }

    #[test]
    fn validation_detail_joins_messages() {
        let body = r#"{"detail":[
            {"loc":["body","name"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","price"],"msg":"ensure this value is greater than or equal to 0"}
        ]}"#;
        assert_eq!(
            ErrorResponse::parse(body).as_deref(),
            Some("field required; ensure this value is greater than or equal to 0")
        );
    }

    #[test]
    fn missing_or_unparseable_detail_is_none() {
        assert_eq!(ErrorResponse::parse(r#"{"error":"nope"}"#), None);
        assert_eq!(ErrorResponse::parse(r#"{"detail":null}"#), None);
        assert_eq!(ErrorResponse::parse("<html>502</html>"), None);
        assert_eq!(ErrorResponse::parse(""), None);
    }

    #[test]
    fn request_serializes_category_name() {
        let req = CreateProductRequest {
            name: "Widget".into(),
            category: Category::Books,
            quantity: 3,
            price: 9.99,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["category"], "Books");
        assert_eq!(json["quantity"], 3);
    }
}
