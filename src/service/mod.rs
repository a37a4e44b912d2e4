pub mod http;

use async_trait::async_trait;

use crate::dtos::product::{CreateProductRequest, HealthResponse, StatsResponse};
use crate::error::ClientError;
use crate::models::product::{Product, ProductId};

pub use http::HttpProductService;

/// Remote product store. The view-model only talks to the service through this trait.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;

    async fn create_product(&self, request: &CreateProductRequest) -> Result<Product, ClientError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError>;

    async fn stats(&self) -> Result<StatsResponse, ClientError>;

    async fn health(&self) -> Result<HealthResponse, ClientError>;
}
