//! HTTP client for the deals backend's product endpoints.

mod urls;

use std::time::Duration;

use dealshop_core::{AppConfig, Product, Store};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::normalize::normalize_listing;
use crate::types::HealthResponse;

/// Client for the deals backend REST API.
///
/// Holds a base URL (trailing `/` stripped) and a `reqwest::Client`. Every
/// operation is a single GET with no retry: it either resolves with its
/// declared shape or fails with a [`ClientError`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// `timeout_secs = None` leaves requests without a timeout, so a hung
    /// backend keeps the call pending.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    /// - [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Creates a client from the resolved application config.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_base_url,
            &config.user_agent,
            config.request_timeout_secs,
        )
    }

    /// The base URL every endpoint path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full catalog from `GET /products/`.
    ///
    /// Accepts both a bare array and a `{"results": [...]}` envelope; see
    /// [`normalize_listing`] for the shape rules. Failures are logged here
    /// before being returned.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not JSON or holds
    ///   malformed products.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.fetch_listing()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "error fetching products"))
    }

    async fn fetch_listing(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint_url("/products/", &[])?;
        let body: serde_json::Value = self.get_json(url, "product listing").await?;
        normalize_listing(body)
    }

    /// Fetches the products of one store from `GET /products/by_store/?store=<tag>`.
    ///
    /// This endpoint is not paginated, so the body is read as a bare array.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not an array of products.
    pub async fn list_products_by_store(&self, store: Store) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint_url("/products/by_store/", &[("store", store.as_tag())])?;
        self.get_json(url, &format!("products for store {store}"))
            .await
    }

    /// Fetches a single product from `GET /products/{id}/`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Status`] with status 404 if the product does not exist.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the body is not a product.
    pub async fn get_product(&self, id: i64) -> Result<Product, ClientError> {
        let url = self.endpoint_url(&format!("/products/{id}/"), &[])?;
        self.get_json(url, &format!("product {id}")).await
    }

    /// Searches products via `GET /products/search/?q=<query>`.
    ///
    /// The query is trimmed first. A blank query is not an error: it falls
    /// back to [`ApiClient::list_products`] and returns the full catalog.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not an array of products.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_products().await;
        }

        let url = self.endpoint_url("/products/search/", &[("q", query)])?;
        self.get_json(url, &format!("search results for \"{query}\""))
            .await
    }

    /// Checks `GET /health` and returns the status string the backend reports.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Status`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body has no `status` field.
    pub async fn health_check(&self) -> Result<String, ClientError> {
        let url = self.endpoint_url("/health", &[])?;
        let health: HealthResponse = self.get_json(url, "health check").await?;
        Ok(health.status)
    }

    /// Issues one GET and deserializes the JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "non-success status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_owned(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
