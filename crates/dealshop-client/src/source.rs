//! The seam between page controllers and the backend.
//!
//! Page controllers are generic over [`ProductSource`]; [`ApiClient`] is the
//! HTTP implementation.

use std::future::Future;

use dealshop_core::{Product, Store};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Read-only access to the product catalog.
pub trait ProductSource: Send + Sync + 'static {
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    fn list_products_by_store(
        &self,
        store: Store,
    ) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    fn get_product(&self, id: i64) -> impl Future<Output = Result<Product, ClientError>> + Send;

    fn search_products(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;
}

impl ProductSource for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        ApiClient::list_products(self).await
    }

    async fn list_products_by_store(&self, store: Store) -> Result<Vec<Product>, ClientError> {
        ApiClient::list_products_by_store(self, store).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, ClientError> {
        ApiClient::get_product(self, id).await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        ApiClient::search_products(self, query).await
    }
}
