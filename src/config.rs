// src/config.rs
use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Where new products land in the local collection after a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    #[default]
    Append,
    Prepend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub insert_position: InsertPosition,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            insert_position: InsertPosition::default(),
        })
    }

    /// Reads `INVENTORY_API_URL` and `INVENTORY_NEW_FIRST`. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("INVENTORY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let new_first = lookup("INVENTORY_NEW_FIRST")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let mut config = Self::new(&base_url)?;
        if new_first {
            config.insert_position = InsertPosition::Prepend;
        }
        Ok(config)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
