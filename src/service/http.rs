// src/service/http.rs
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use super::ProductService;
use crate::config::ClientConfig;
use crate::dtos::product::{CreateProductRequest, ErrorResponse, HealthResponse, StatsResponse};
use crate::error::ClientError;
use crate::models::product::{Product, ProductId};

#[derive(Clone)]
pub struct HttpProductService {
    base_url: String,
    client: Client,
}

impl HttpProductService {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Any non-2xx status is a failure, whatever the body looks like.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = ErrorResponse::parse(&body);
    error!(status = status.as_u16(), ?detail, "Product service returned an error");
    Err(ClientError::service(status, detail))
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        error!(?e, what, "Failed to decode product service response");
        ClientError::decode(format!("unable to parse {what}: {e}"))
    })
}

#[async_trait]
impl ProductService for HttpProductService {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.client.get(self.url("/products")).send().await?;
        let products: Vec<Product> = read_json(check_status(response).await?, "product list").await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_product(&self, request: &CreateProductRequest) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(self.url("/products"))
            .json(request)
            .send()
            .await?;
        let product: Product = read_json(check_status(response).await?, "created product").await?;
        debug!(id = product.id, "Created product");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        // body ignored on success
        check_status(response).await?;
        debug!(id, "Deleted product");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<StatsResponse, ClientError> {
        let response = self.client.get(self.url("/stats")).send().await?;
        read_json(check_status(response).await?, "stats").await
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self.client.get(self.url("/health")).send().await?;
        read_json(check_status(response).await?, "health").await
    }
}
