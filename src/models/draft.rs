// src/models/draft.rs
use crate::dtos::product::CreateProductRequest;
use crate::error::ClientError;
use crate::models::product::Category;

/// Staging record behind the creation form. Numeric fields keep the raw
/// text the user typed; coercion happens when the draft is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub category: Category,
    pub quantity: String,
    pub price: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Electronics,
            quantity: "1".to_string(),
            price: "0".to_string(),
        }
    }
}

impl Draft {
    /// Unparseable or negative quantities become 0.
    pub fn quantity_value(&self) -> u64 {
        let raw = self.quantity.trim();
        match raw.parse::<u64>() {
            Ok(q) => q,
            // "3.0" style input from numeric widgets
            Err(_) => raw
                .parse::<f64>()
                .ok()
                .filter(|q| q.is_finite() && *q >= 0.0 && *q <= u64::MAX as f64)
                .map(|q| q.trunc() as u64)
                .unwrap_or(0),
        }
    }

    /// Unparseable, negative or non-finite prices become 0.
    pub fn price_value(&self) -> f64 {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0)
    }

    pub fn to_request(&self) -> Result<CreateProductRequest, ClientError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("name is required"));
        }

        Ok(CreateProductRequest {
            name: name.to_string(),
            category: self.category,
            quantity: self.quantity_value(),
            price: self.price_value(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
