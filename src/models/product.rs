// src/models/product.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type ProductId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Category {
    #[default]
    Electronics,
    Clothing,
    Books,
    Food,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Food,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

/// Names outside the known set (the service's own `General` default, or
/// anything another client stored) read as `Other`.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(Category::Other))
    }
}

/// A product as the remote service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub quantity: u64,
    pub price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Parses `created_at` in whichever of the formats the service emits:
    /// RFC 3339, a naive ISO timestamp (taken as UTC), or a bare date.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(created_at: Option<&str>) -> Product {
        Product {
            id: 1,
            name: "Widget".into(),
            category: Category::Electronics,
            quantity: 3,
            price: 9.99,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("books".parse::<Category>(), Ok(Category::Books));
        assert_eq!(" FOOD ".parse::<Category>(), Ok(Category::Food));
        assert!("Toys".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_category_reads_as_other() {
        let json = r#"{"id":2,"name":"Misc","category":"General","quantity":1,"price":1.0}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, Category::Other);

        let books: Category = serde_json::from_str(r#""books""#).unwrap();
        assert_eq!(books, Category::Books);
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), r#""Food""#);
    }

    #[test]
    fn created_at_accepts_service_formats() {
        let date_only = product(Some("2024-01-01")).created_at_utc().unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let naive = product(Some("2024-01-01T10:30:00.123456")).created_at_utc().unwrap();
        assert_eq!(naive.format("%H:%M").to_string(), "10:30");

        assert!(product(Some("2024-01-01T10:30:00Z")).created_at_utc().is_some());
        assert!(product(Some("yesterday")).created_at_utc().is_none());
        assert!(product(None).created_at_utc().is_none());
    }

    #[test]
    fn deserializes_without_created_at() {
        let json = r#"{"id":7,"name":"Tee","category":"Clothing","quantity":2,"price":5.5}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, Category::Clothing);
        assert_eq!(p.created_at, None);
        assert!((p.value() - 11.0).abs() < 1e-9);
    }
}
