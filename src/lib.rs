pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod service;
pub mod state;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ConfigError};
pub use service::{HttpProductService, ProductService};
pub use state::{Outcome, ProductViewModel, ViewState};
