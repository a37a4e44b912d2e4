// src/state.rs
use std::future::Future;

use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::config::{ClientConfig, InsertPosition};
use crate::dtos::product::{HealthResponse, StatsResponse};
use crate::error::ClientError;
use crate::models::{Draft, Product, ProductId, Totals};
use crate::service::ProductService;

/// Snapshot handed to whatever renders the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub totals: Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
    /// The user declined the confirmation or the draft was rejected locally.
    Cancelled,
}

/// Local cache of the remote product store.
///
/// The collection only changes after the service confirms an operation;
/// every failure lands in the single `error` slot and leaves the
/// collection untouched.
pub struct ProductViewModel<S> {
    service: S,
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    draft: Draft,
    insert_position: InsertPosition,
    state_tx: watch::Sender<ViewState>,
}

impl<S: ProductService> ProductViewModel<S> {
    pub fn new(service: S) -> Self {
        let (state_tx, _) = watch::channel(ViewState::default());
        Self {
            service,
            products: Vec::new(),
            loading: false,
            error: None,
            draft: Draft::default(),
            insert_position: InsertPosition::default(),
            state_tx,
        }
    }

    pub fn with_config(service: S, config: &ClientConfig) -> Self {
        let mut vm = Self::new(service);
        vm.insert_position = config.insert_position;
        vm
    }

    /// Builds the view-model and runs the initial load.
    pub async fn mount(service: S, config: &ClientConfig) -> Self {
        let mut vm = Self::with_config(service, config);
        vm.load().await;
        vm
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn derive_totals(&self) -> Totals {
        Totals::derive(&self.products)
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            products: self.products.clone(),
            loading: self.loading,
            error: self.error.clone(),
            totals: self.derive_totals(),
        }
    }

    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            self.publish();
        }
    }

    /// Replaces the collection with the service's list.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Outcome {
        self.set_loading(true);
        let result = self.service.list_products().await;
        match result {
            Ok(products) => {
                info!(count = products.len(), "Loaded products");
                self.products = products;
                self.succeed();
                Outcome::Success
            }
            Err(e) => self.fail("load products", e),
        }
    }

    /// Creates a product from the current draft.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Outcome {
        let request = match self.draft.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.fail("add product", e);
                return Outcome::Cancelled;
            }
        };

        self.set_loading(true);
        let result = self.service.create_product(&request).await;
        match result {
            Ok(product) => {
                info!(id = product.id, name = %product.name, "Added product");
                match self.insert_position {
                    InsertPosition::Append => self.products.push(product),
                    InsertPosition::Prepend => self.products.insert(0, product),
                }
                self.draft.reset();
                self.succeed();
                Outcome::Success
            }
            Err(e) => self.fail("add product", e),
        }
    }

    /// Deletes a product once `confirm` approves. `confirm` receives a
    /// label for the product (its name when cached, otherwise `#<id>`)
    /// and may await the user's answer.
    #[instrument(skip(self, confirm))]
    pub async fn remove<F, Fut>(&mut self, id: ProductId, confirm: F) -> Outcome
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = bool>,
    {
        let label = self
            .find(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{id}"));
        if !confirm(label).await {
            return Outcome::Cancelled;
        }

        self.set_loading(true);
        let result = self.service.delete_product(id).await;
        match result {
            Ok(()) => {
                info!(id, "Deleted product");
                self.products.retain(|p| p.id != id);
                self.succeed();
                Outcome::Success
            }
            Err(e) => self.fail("delete product", e),
        }
    }

    /// Server-side aggregates; the collection is left as is.
    pub async fn fetch_stats(&mut self) -> Option<StatsResponse> {
        match self.service.stats().await {
            Ok(stats) => {
                self.succeed();
                Some(stats)
            }
            Err(e) => {
                self.fail("fetch stats", e);
                None
            }
        }
    }

    pub async fn check_health(&mut self) -> Option<HealthResponse> {
        match self.service.health().await {
            Ok(health) => {
                self.succeed();
                Some(health)
            }
            Err(e) => {
                self.fail("check health", e);
                None
            }
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.publish();
    }

    fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
        self.publish();
    }

    fn fail(&mut self, action: &str, err: ClientError) -> Outcome {
        warn!(action, error = %err, "Operation failed");
        self.loading = false;
        self.error = Some(format!("Failed to {action}: {err}"));
        self.publish();
        Outcome::Failed
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.snapshot());
    }
}
